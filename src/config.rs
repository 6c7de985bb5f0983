use serde::{Deserialize, Serialize};
use std::{fs, io, path::PathBuf};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("File {0} not found")]
    FileNotFound(String),

    #[error("Parsing error: {0}")]
    ParsingError(String),

    #[error("Unknown error occurred: {0}")]
    Unknown(String),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegionsFile {
    #[serde(rename = "regionList")]
    pub region_list: Vec<String>,
}

/// Loads the target regions, in file order, from a JSON file with a
/// `regionList` key.
pub fn load_regions(path: &PathBuf) -> Result<Vec<String>, Error> {
    let contents = match fs::read_to_string(path) {
        Ok(raw_contents) => Ok(raw_contents),
        Err(error) => match error.kind() {
            io::ErrorKind::NotFound => Err(Error::FileNotFound(path.display().to_string())),
            _ => Err(Error::Unknown(error.to_string())),
        },
    }?;

    let regions_file: RegionsFile = match serde_json::from_str(&contents) {
        Ok(data) => Ok(data),
        Err(error) => Err(Error::ParsingError(error.to_string())),
    }?;

    return Ok(regions_file.region_list);
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Write;

    use super::load_regions;
    use super::Error;
    use super::RegionsFile;
    use tempfile::tempdir;

    #[test]
    fn file_does_not_exist() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("regions.json");

        let result = load_regions(&file_path);
        assert_eq!(true, result.is_err());
        match result.err().unwrap() {
            Error::FileNotFound(_) => {}
            _ => panic!("Expected `FileNotFound` error"),
        }
    }

    #[test]
    fn file_wrong_format() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("regions.json");

        let mut file = File::create(&file_path).unwrap();
        writeln!(file, "Not json").unwrap();

        let result = load_regions(&file_path);
        assert_eq!(true, result.is_err());
        match result.err().unwrap() {
            Error::ParsingError(_) => {}
            _ => panic!("Expected `ParsingError` error"),
        }
    }

    #[test]
    fn file_missing_region_list_key() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("regions.json");

        let mut file = File::create(&file_path).unwrap();
        writeln!(file, r#"{{"regions": ["us-east-1"]}}"#).unwrap();

        let result = load_regions(&file_path);
        assert_eq!(true, result.is_err());
        match result.err().unwrap() {
            Error::ParsingError(_) => {}
            _ => panic!("Expected `ParsingError` error"),
        }
    }

    #[test]
    fn parses_the_regions_in_order() {
        let regions_file = RegionsFile {
            region_list: vec![String::from("us-east-1"), String::from("us-west-2")],
        };
        let file_contents = serde_json::to_string(&regions_file).unwrap();

        let dir = tempdir().unwrap();
        let file_path = dir.path().join("regions.json");

        let mut file = File::create(&file_path).unwrap();
        writeln!(file, "{}", file_contents).unwrap();

        let result = load_regions(&file_path).unwrap();
        assert_eq!(vec!["us-east-1", "us-west-2"], result);
    }
}
