use std::path::Path;

use crate::OtpaError;

/// helper function to "mkdir -p path" - make all directories along a path
pub fn create_dirs<P>(path: P) -> Result<(), OtpaError>
where
    P: AsRef<Path>,
{
    let dirspath = path.as_ref();
    if !dirspath.is_dir() {
        std::fs::create_dir_all(dirspath).map_err(|e| OtpaError::OutputError {
            path: dirspath.to_string_lossy().to_string(),
            message: format!("error building output directory: {e}"),
        })
    } else {
        Ok(())
    }
}
