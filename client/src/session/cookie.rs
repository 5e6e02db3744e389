use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

use super::credential::Credential;

/// Attributes every persisted credential record carries. `SameSite=Strict`
/// means the record is never attached to cross-site requests when the same
/// format is used in a browser context; here the attributes travel with the
/// record so a restore can verify what was written.
const ATTRIBUTES: &str = "Path=/; Secure; SameSite=Strict";

/// Render a credential as a single cookie record line.
///
/// The JSON value is percent-encoded so it survives the `;`-separated
/// cookie grammar.
pub fn format_record(name: &str, credential: &Credential) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(credential)?;
    Ok(format!(
        "{}={}; {}",
        name,
        urlencoding::encode(&json),
        ATTRIBUTES
    ))
}

/// Extract a credential from a cookie record line, looking for `name`.
///
/// Parts are scanned `;`-separated in any order, so attribute reordering
/// (or extra attributes) does not break the parse. Returns `None` when the
/// record is for another name or the value does not decode.
pub fn parse_record(line: &str, name: &str) -> Option<Credential> {
    line.split(';').find_map(|part| {
        let mut kv = part.trim().splitn(2, '=');
        let key = kv.next()?.trim();
        let value = kv.next()?.trim();
        if key != name {
            return None;
        }
        let json = urlencoding::decode(value).ok()?;
        serde_json::from_str(&json).ok()
    })
}

// ---------------------------------------------------------------------------
// State-file persistence
// ---------------------------------------------------------------------------

/// Read the persisted credential record from the state file.
///
/// A missing or unreadable file is an anonymous start, not an error.
pub fn read_state_file(path: &Path, name: &str) -> Option<Credential> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            debug!("No persisted session at {}: {}", path.display(), e);
            return None;
        }
    };

    contents
        .lines()
        .find_map(|line| parse_record(line, name))
        .or_else(|| {
            warn!("State file {} holds no '{}' record", path.display(), name);
            None
        })
}

/// Persist the credential record, replacing any previous contents.
pub fn write_state_file(path: &Path, name: &str, credential: &Credential) -> io::Result<()> {
    let record = format_record(name, credential)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, record + "\n")?;
    debug!("Persisted session cookie to {}", path.display());
    Ok(())
}

/// Remove the persisted record. Removing an already-absent file succeeds.
pub fn remove_state_file(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Credential {
        Credential {
            token: "abc.def.ghi".to_string(),
            subject_id: Some("alice@example.com".to_string()),
            channel_id: None,
            channel_handle: None,
        }
    }

    #[test]
    fn record_round_trips() {
        let record = format_record("authData", &sample()).unwrap();
        assert!(record.starts_with("authData="));
        assert!(record.contains("Path=/"));
        assert!(record.contains("Secure"));
        assert!(record.contains("SameSite=Strict"));
        assert_eq!(parse_record(&record, "authData"), Some(sample()));
    }

    #[test]
    fn attribute_reordering_is_tolerated() {
        let record = format_record("authData", &sample()).unwrap();
        let value = record.split(';').next().unwrap();
        let reordered = format!("SameSite=Strict; {}; Secure; Path=/", value);
        assert_eq!(parse_record(&reordered, "authData"), Some(sample()));
    }

    #[test]
    fn other_names_are_ignored() {
        let record = format_record("somethingElse", &sample()).unwrap();
        assert!(parse_record(&record, "authData").is_none());
    }

    #[test]
    fn garbage_value_is_ignored() {
        assert!(parse_record("authData=%7Bnot-json; Path=/", "authData").is_none());
    }

    #[test]
    fn state_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth.cookie");

        assert!(read_state_file(&path, "authData").is_none());

        write_state_file(&path, "authData", &sample()).unwrap();
        assert_eq!(read_state_file(&path, "authData"), Some(sample()));

        remove_state_file(&path).unwrap();
        assert!(read_state_file(&path, "authData").is_none());

        // Removing twice is fine.
        remove_state_file(&path).unwrap();
    }
}
