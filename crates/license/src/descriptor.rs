//! License descriptor persistence
//!
//! The descriptor is a JSON object whose `NuitrackLicense` field carries
//! the certificate. A readable descriptor keeps its unrelated fields
//! across writes; a missing or unreadable file is rewritten from scratch.

use std::fs;
use std::path::Path;

use log::warn;
use serde_json::{Map, Value};

use licrypt_api::{Error, Result};

/// JSON field carrying the certificate
pub const LICENSE_FIELD: &str = "NuitrackLicense";

fn io_err(context: &'static str, err: std::io::Error) -> Error {
    Error::Io {
        context,
        message: err.to_string(),
    }
}

/// Write `certificate` into the descriptor at `path`.
///
/// Unrelated fields of an existing, readable descriptor are preserved;
/// otherwise the file is replaced with a fresh object.
pub fn store_certificate(path: &Path, certificate: &str) -> Result<()> {
    let mut descriptor = match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                warn!(
                    "license file {} is not a JSON object, rewriting it",
                    path.display()
                );
                Map::new()
            }
        },
        Err(err) => {
            if err.kind() != std::io::ErrorKind::NotFound {
                warn!(
                    "error reading license file {} ({}), rewriting it",
                    path.display(),
                    err
                );
            }
            Map::new()
        }
    };

    descriptor.insert(
        LICENSE_FIELD.to_string(),
        Value::String(certificate.to_string()),
    );

    let contents = serde_json::to_string_pretty(&Value::Object(descriptor)).map_err(|err| {
        Error::Io {
            context: "license descriptor",
            message: err.to_string(),
        }
    })?;
    fs::write(path, contents + "\n").map_err(|err| io_err("license descriptor", err))
}

/// Read the certificate back from the descriptor at `path`
pub fn load_certificate(path: &Path) -> Result<String> {
    let contents =
        fs::read_to_string(path).map_err(|err| io_err("license descriptor", err))?;
    let descriptor: Value = serde_json::from_str(&contents).map_err(|_| Error::InvalidParameter {
        context: "license descriptor",
        message: "file is not valid JSON".to_string(),
    })?;

    match descriptor.get(LICENSE_FIELD) {
        Some(Value::String(cert)) => Ok(cert.clone()),
        _ => Err(Error::InvalidParameter {
            context: "license descriptor",
            message: format!("missing {} field", LICENSE_FIELD),
        }),
    }
}
