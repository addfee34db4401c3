use std::env;
use std::path::PathBuf;

/// XDG Base Directory paths for dirsweep
pub struct XdgPaths;

impl XdgPaths {
    /// Get XDG_CACHE_HOME/dirsweep or fallback
    pub fn cache_dir() -> PathBuf {
        env::var("XDG_CACHE_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::home_dir()
                    .map(|home| home.join(".cache"))
                    .unwrap_or_else(|| PathBuf::from(".cache"))
            })
            .join("dirsweep")
    }
}
