//! Discovery of cellform configuration files.
//!
//! Two files may exist: a per-user `cellform.yaml` in the user config
//! directory and a per-project `.cellform.yaml`, found by walking up from
//! the working directory.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// File name of the per-project configuration file.
pub const PROJECT_CONFIG_NAME: &str = ".cellform.yaml";

/// File name of the per-user configuration file.
pub const USER_CONFIG_NAME: &str = "cellform.yaml";

/// Environment variable that overrides the per-user config directory.
const CONFIG_DIR_ENV: &str = "CELLFORM_CONFIG_DIR";

/// Candidate configuration files, lowest precedence first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSources {
    /// Per-user file, if the user config directory could be determined.
    pub user: Option<PathBuf>,
    /// Nearest `.cellform.yaml` above the start directory.
    pub project: Option<PathBuf>,
    /// A file named on the command line. It must exist.
    pub explicit: Option<PathBuf>,
}

impl ConfigSources {
    /// Discover sources relative to `start`.
    pub fn discover(start: &Path) -> Self {
        Self {
            user: user_config_dir().map(|d| d.join(USER_CONFIG_NAME)),
            project: find_project_config(start),
            explicit: None,
        }
    }

    /// Add an explicit config file with the highest file precedence.
    pub fn with_explicit(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit = Some(path.into());
        self
    }

    /// All candidate paths in merge order.
    pub fn paths(&self) -> Vec<&Path> {
        [&self.user, &self.project, &self.explicit]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .collect()
    }
}

/// Walk up the directory tree from `start` looking for `.cellform.yaml`.
///
/// Returns `None` if the filesystem root is reached without finding one.
pub fn find_project_config(start: &Path) -> Option<PathBuf> {
    let start = start.canonicalize().ok()?;

    let mut current = start.as_path();
    loop {
        let candidate = current.join(PROJECT_CONFIG_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        match current.parent() {
            Some(parent) if parent != current => current = parent,
            _ => return None,
        }
    }
}

/// Returns the per-user cellform config directory.
///
/// `CELLFORM_CONFIG_DIR` wins, then `$XDG_CONFIG_HOME/cellform`, then
/// `~/.config/cellform`.
pub fn user_config_dir() -> Option<PathBuf> {
    if let Some(dir) = env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    resolve_user_config_dir(env::var_os("XDG_CONFIG_HOME"), home_dir())
}

fn resolve_user_config_dir(xdg: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(xdg) = xdg.filter(|x| !x.is_empty()) {
        return Some(PathBuf::from(xdg).join("cellform"));
    }
    home.map(|h| h.join(".config").join("cellform"))
}

fn home_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var_os("USERPROFILE").map(PathBuf::from)
    }
    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("HOME").map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn finds_project_config_in_start_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(PROJECT_CONFIG_NAME);
        std::fs::write(&file, "json: true\n").unwrap();

        let found = find_project_config(dir.path()).unwrap();
        assert_eq!(found, file.canonicalize().unwrap());
    }

    #[test]
    fn finds_project_config_from_child() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(PROJECT_CONFIG_NAME);
        std::fs::write(&file, "").unwrap();
        let child = dir.path().join("sheets").join("q3");
        std::fs::create_dir_all(&child).unwrap();

        let found = find_project_config(&child).unwrap();
        assert_eq!(found, file.canonicalize().unwrap());
    }

    #[test]
    fn directory_with_config_name_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(PROJECT_CONFIG_NAME)).unwrap();
        // A parent directory outside the temp dir may still hold a real file.
        let found = find_project_config(dir.path());
        let not_expected = dir.path().canonicalize().unwrap().join(PROJECT_CONFIG_NAME);
        assert_ne!(found, Some(not_expected));
    }

    #[test]
    fn missing_start_dir_yields_none() {
        assert_eq!(find_project_config(Path::new("/nonexistent/cellform/dir")), None);
    }

    #[test]
    fn user_dir_prefers_xdg() {
        let dir = resolve_user_config_dir(
            Some(OsString::from("/xdg")),
            Some(PathBuf::from("/home/u")),
        );
        assert_eq!(dir, Some(PathBuf::from("/xdg/cellform")));
    }

    #[test]
    fn user_dir_falls_back_to_home() {
        let dir = resolve_user_config_dir(Some(OsString::new()), Some(PathBuf::from("/home/u")));
        assert_eq!(dir, Some(PathBuf::from("/home/u/.config/cellform")));
        assert_eq!(resolve_user_config_dir(None, None), None);
    }

    #[test]
    fn paths_in_merge_order() {
        let sources = ConfigSources {
            user: Some(PathBuf::from("/u/cellform.yaml")),
            project: None,
            explicit: None,
        }
        .with_explicit("/tmp/x.yaml");
        assert_eq!(
            sources.paths(),
            vec![Path::new("/u/cellform.yaml"), Path::new("/tmp/x.yaml")]
        );
    }
}
