use std::{fs::File, io::Write, path::Path};

use crate::OtpaError;

/// writes `bytes` to a sibling temporary file, syncs it and renames it into
/// place, so `path` never holds a partially written file.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), OtpaError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| OtpaError::OutputError {
            path: path.to_string_lossy().to_string(),
            message: String::from("path has no file name"),
        })?;
    let partial = path.with_file_name(format!(".{file_name}.partial"));
    let result = File::create(&partial)
        .and_then(|mut f| {
            f.write_all(bytes)?;
            f.sync_all()
        })
        .and_then(|_| std::fs::rename(&partial, path));
    if let Err(e) = result {
        let _ = std::fs::remove_file(&partial);
        return Err(OtpaError::OutputError {
            path: path.to_string_lossy().to_string(),
            message: e.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::write_atomically;

    #[test]
    fn test_write_and_replace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.json");
        write_atomically(&path, b"first").unwrap();
        write_atomically(&path, b"second").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"second");
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1, "no temporary file should remain");
    }

    #[test]
    fn test_missing_directory_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("a.json");
        assert!(write_atomically(&path, b"x").is_err());
        assert!(!path.exists());
    }
}
