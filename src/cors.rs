use actix_cors::Cors;
use actix_web::http::{header, uri::Uri};
use log::{info, warn};
use std::{
    fs::File,
    io::{BufRead, BufReader, Error as IOError, ErrorKind},
    path::Path,
};

/// Reads allowed origins, one per line. Blank lines and `#` comments are skipped,
/// lines that do not parse as a URI are logged and dropped.
///
/// Fails with `InvalidData` when the file has entries but none of them is valid.
pub fn load_and_validate_cors_origins(path: impl AsRef<Path>) -> Result<Vec<String>, IOError> {
    let file = File::open(path.as_ref())?;
    let buf_reader = BufReader::new(file);
    let mut origins = Vec::new();
    let mut rejected = 0usize;

    for line in buf_reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line.parse::<Uri>() {
            Ok(uri) if uri.scheme().is_some() && uri.host().is_some() => {
                origins.push(line.trim_end_matches('/').to_string())
            }
            Ok(_) => {
                rejected += 1;
                warn!("CORS origin without scheme or host: {}", line);
            }
            Err(e) => {
                rejected += 1;
                warn!("Invalid URI in CORS configuration: {}", e);
            }
        }
    }

    if origins.is_empty() && rejected > 0 {
        return Err(IOError::new(
            ErrorKind::InvalidData,
            "All CORS lines failed validation.",
        ));
    }

    Ok(origins)
}

/// Falls back to [`Cors::permissive`] when no origin is configured.
pub fn build_cors(origins: &[String]) -> Cors {
    if origins.is_empty() {
        return Cors::permissive();
    }
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600);
    origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}

/// Loads `path`, logging instead of failing; any problem means "no restriction".
pub fn load_cors_origins_or_default(path: &str) -> Vec<String> {
    match load_and_validate_cors_origins(path) {
        Ok(origins) => {
            info!("CORS origins loaded from {}: {:?}", path, origins);
            origins
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("{} not found, CORS left permissive", path);
            vec![]
        }
        Err(e) => {
            warn!("Failed to load CORS origins from {}: {}", path, e);
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn cors_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_valid_origins_are_kept() {
        let file = cors_file("https://mz1312.xx.kg/\n\n# staging\nhttp://localhost:3000\n");
        let origins = load_and_validate_cors_origins(file.path()).unwrap();
        assert_eq!(origins, vec!["https://mz1312.xx.kg", "http://localhost:3000"]);
    }

    #[test]
    fn test_invalid_lines_are_dropped() {
        let file = cors_file("not a uri\nhttps://ok.example\n");
        let origins = load_and_validate_cors_origins(file.path()).unwrap();
        assert_eq!(origins, vec!["https://ok.example"]);
    }

    #[test]
    fn test_all_invalid_is_an_error() {
        let file = cors_file("not a uri\n/relative/path\n");
        let err = load_and_validate_cors_origins(file.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_missing_file_yields_no_origins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env_cors");
        assert!(load_cors_origins_or_default(path.to_str().unwrap()).is_empty());
    }
}
