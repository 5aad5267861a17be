use log::info;
use std::io;
use std::path::{Path, PathBuf};

const DATA_DIR_NAME: &str = "heatwave_trend";
const DATABASE_FILE_NAME: &str = "heatwave.sqlite";

/// Default database location inside the platform data directory
/// (e.g. `~/.local/share/heatwave_trend/heatwave.sqlite` on Linux).
pub fn default_database_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join(DATA_DIR_NAME).join(DATABASE_FILE_NAME))
}

pub async fn ensure_dir_exists(path: &Path) -> io::Result<()> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) => {
            if !metadata.is_dir() {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("Path exists but is not a directory: {}", path.display()),
                ));
            }
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("Creating directory: {}", path.display());
            tokio::fs::create_dir_all(path).await
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_database_path_file_name() {
        if let Some(path) = default_database_path() {
            assert!(path.ends_with("heatwave_trend/heatwave.sqlite"));
        }
    }

    #[tokio::test]
    async fn test_ensure_dir_creates_nested() -> io::Result<()> {
        let root = tempfile::tempdir()?;
        let nested = root.path().join("a").join("b");
        ensure_dir_exists(&nested).await?;
        assert!(nested.is_dir());
        // Second call is a no-op.
        ensure_dir_exists(&nested).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_ensure_dir_rejects_file() -> io::Result<()> {
        let file = tempfile::NamedTempFile::new()?;
        assert!(ensure_dir_exists(file.path()).await.is_err());
        Ok(())
    }
}
