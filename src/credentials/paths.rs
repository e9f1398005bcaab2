// Credential store path utilities.
// Resolves where saved credentials and local auth files live.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Get the base config directory (~/.config/gists on Linux).
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "gists").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path to the persisted key-value store.
pub fn store_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("store.json"))
}

/// Path to a checkout-local auth file, `<root>/tmp/auth.json`.
pub fn local_auth_path(root: &Path) -> PathBuf {
    root.join("tmp").join("auth.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_path() {
        // Only path construction; no filesystem access.
        if let Some(path) = store_path() {
            assert!(path.ends_with("store.json"));
            assert!(path.starts_with(config_dir().unwrap()));
        }
    }

    #[test]
    fn test_local_auth_path() {
        let path = local_auth_path(Path::new("/work/gists"));
        assert_eq!(path, PathBuf::from("/work/gists/tmp/auth.json"));
    }
}
