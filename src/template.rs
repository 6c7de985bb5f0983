use std::{fs, io, path::PathBuf};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("File {0} not found")]
    FileNotFound(String),

    #[error("Unknown error occurred: {0}")]
    Unknown(String),
}

/// Reads the template body. The contents are forwarded to the API
/// unmodified, so no parsing happens here.
pub fn read(path: &PathBuf) -> Result<String, Error> {
    let template_body = match fs::read_to_string(path) {
        Ok(raw_contents) => Ok(raw_contents),
        Err(error) => match error.kind() {
            io::ErrorKind::NotFound => Err(Error::FileNotFound(path.display().to_string())),
            _ => Err(Error::Unknown(error.to_string())),
        },
    }?;

    return Ok(template_body);
}
