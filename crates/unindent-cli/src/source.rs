//! Reading inputs and writing results

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{CliError, Result};

/// Where a block of text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// Map CLI file arguments to sources. No arguments means stdin.
    pub fn from_args(files: &[PathBuf]) -> Vec<Self> {
        if files.is_empty() {
            return vec![Self::Stdin];
        }
        files
            .iter()
            .map(|f| {
                if f.as_os_str() == "-" {
                    Self::Stdin
                } else {
                    Self::File(f.clone())
                }
            })
            .collect()
    }

    /// Name used in messages and diff headers
    pub fn name(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    pub fn read(&self) -> Result<String> {
        match self {
            Self::Stdin => Ok(io::read_to_string(io::stdin())?),
            Self::File(path) => fs::read_to_string(path).map_err(|e| CliError::io(path, e)),
        }
    }
}

/// Write `content` to `path` through a temp file in the same directory.
///
/// The temp file takes over the permissions of an existing target and is
/// removed again if any step fails.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| CliError::io(parent, e))?;

    match fs::metadata(path) {
        Ok(metadata) => temp_file
            .as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| CliError::io(temp_file.path(), e))?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(CliError::io(path, e)),
    }

    temp_file
        .write_all(content)
        .map_err(|e| CliError::io(temp_file.path(), e))?;
    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| CliError::io(temp_file.path(), e))?;

    temp_file
        .persist(path)
        .map_err(|e| CliError::io(path, e.error))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_args() {
        assert_eq!(Source::from_args(&[]), vec![Source::Stdin]);
        assert_eq!(
            Source::from_args(&[PathBuf::from("a.py"), PathBuf::from("-")]),
            vec![Source::File(PathBuf::from("a.py")), Source::Stdin]
        );
    }

    #[test]
    fn test_write_atomic_replaces_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("block.py");
        fs::write(&path, "    old\r\n").unwrap();

        write_atomic(&path, b"new\r\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\r\n");
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_write_atomic_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fresh.py");

        write_atomic(&path, b"x = 1\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "x = 1\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("run.sh");
        fs::write(&path, "    echo hi\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

        write_atomic(&path, b"echo hi\n").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
        assert_eq!(fs::read_to_string(&path).unwrap(), "echo hi\n");
    }

    #[test]
    fn test_write_atomic_failure_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("occupied");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep.txt"), "keep").unwrap();

        let err = write_atomic(&target, b"new\n").unwrap_err();

        assert!(matches!(err, CliError::Io { .. }));
        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("occupied")]);
    }

    #[test]
    fn test_read_missing_file_names_path() {
        let err = Source::File(PathBuf::from("/nonexistent/block.py"))
            .read()
            .unwrap_err();
        assert!(err.to_string().contains("block.py"));
    }
}
