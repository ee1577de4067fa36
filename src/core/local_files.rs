use std::path::{Path, PathBuf};

/// Path operations needed by directory-path questions.
pub trait PathProbe {
    /// Resolve `path` against the working directory. Absolute paths are kept as-is.
    fn resolve(&self, path: &str) -> PathBuf;
    fn exists(&self, path: &Path) -> bool;
}

/// Local filesystem implementation anchored at a working directory.
#[derive(Debug, Clone)]
pub struct LocalFs {
    cwd: PathBuf,
}

impl LocalFs {
    /// Anchor at the process working directory.
    pub fn new() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self { cwd }
    }

    pub fn with_cwd(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }
}

impl Default for LocalFs {
    fn default() -> Self {
        Self::new()
    }
}

impl PathProbe for LocalFs {
    fn resolve(&self, path: &str) -> PathBuf {
        let joined = self.cwd.join(path);
        normalize(&joined)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Lexically collapse `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    use std::path::Component;

    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
