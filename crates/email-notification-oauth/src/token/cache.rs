//! On-disk cache for a single `OAuth2` token.

use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use super::Token;
use crate::error::Result;

/// JSON token file at a fixed path.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so readers see either the previous token or the new one.
/// The file is created readable and writable by the owner only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenCache {
    path: PathBuf,
}

impl TokenCache {
    /// Creates a cache backed by `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the token file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the cached token.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or does not hold a token.
    pub fn load(&self) -> Result<Token> {
        let file = File::open(&self.path)?;
        let token = serde_json::from_reader(BufReader::new(file))?;
        debug!(path = %self.path.display(), "Loaded cached token");
        Ok(token)
    }

    /// Replaces the cached token.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be serialized or written.
    pub fn save(&self, token: &Token) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        // NamedTempFile is created with mode 0600 on unix.
        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer(&mut tmp, token)?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        debug!(path = %self.path.display(), "Saved token");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::Error;
    use chrono::{TimeZone, Utc};

    fn sample_token() -> Token {
        Token::new("access", "Bearer")
            .with_refresh_token("refresh")
            .with_expires_at(Utc.with_ymd_and_hms(2031, 5, 4, 3, 2, 1).unwrap())
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let cache = TokenCache::new(dir.path().join("token.json"));

        cache.save(&sample_token()).unwrap();
        assert_eq!(cache.load().unwrap(), sample_token());
    }

    #[test]
    fn test_save_replaces_previous_token() {
        let dir = tempfile::tempdir().unwrap();
        let cache = TokenCache::new(dir.path().join("token.json"));

        cache.save(&Token::new("first", "Bearer")).unwrap();
        cache.save(&sample_token()).unwrap();

        assert_eq!(cache.load().unwrap().access_token, "access");
        // Only the token file remains; no temporary files left behind.
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let cache = TokenCache::new(dir.path().join(".email-notification").join("token.json"));

        cache.save(&sample_token()).unwrap();
        assert!(cache.path().exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let cache = TokenCache::new(dir.path().join("token.json"));
        fs::write(cache.path(), "{}").unwrap();
        fs::set_permissions(cache.path(), fs::Permissions::from_mode(0o644)).unwrap();

        cache.save(&sample_token()).unwrap();

        let mode = fs::metadata(cache.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let cache = TokenCache::new(dir.path().join("token.json"));

        assert!(matches!(cache.load(), Err(Error::Io(_))));
    }

    #[test]
    fn test_load_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let cache = TokenCache::new(dir.path().join("token.json"));
        fs::write(cache.path(), r#"{"access_token": "trunc"#).unwrap();

        assert!(matches!(cache.load(), Err(Error::Json(_))));
    }
}
