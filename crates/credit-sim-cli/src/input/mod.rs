pub mod file;
pub mod stdin;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// A request the caller got wrong: missing file, malformed JSON, missing flags.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct RequestError(pub String);

/// Request from `--input <file>` when given, otherwise from piped stdin.
pub fn read_request<T: DeserializeOwned>(
    path: Option<&str>,
) -> Result<Option<T>, Box<dyn std::error::Error>> {
    match path {
        Some(path) => file::read_json(path).map(Some),
        None => stdin::read_stdin(),
    }
}
