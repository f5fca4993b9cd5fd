use derive_builder::Builder;
use hashbrown::HashSet;

/// Extensions counted by default (without the leading dot).
pub const DEFAULT_ALLOW_EXT: &[&str] = &[
    "c", "h", "cpp", "hpp", "lua", "py", "material", "glsl", "mesh", "task", "vert", "geom",
    "frag", "comp", "rgen", "rchit", "rmiss", "bat",
];

/// Directory path fragments skipped by default.
pub const DEFAULT_DENY_DIRS: &[&str] = &[
    "spv", "vendor", ".git", ".idea", ".vs", "bin", "bin-int", "venv",
];

/// Read buffer size used by the line counter (1 MiB).
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;

fn default_allow_ext() -> HashSet<String> {
    DEFAULT_ALLOW_EXT.iter().map(|e| (*e).to_string()).collect()
}

fn default_deny_dirs() -> Vec<String> {
    DEFAULT_DENY_DIRS.iter().map(|d| (*d).to_string()).collect()
}

/// Immutable settings for one counting run.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    /// Extensions eligible for counting. Matched case-sensitively.
    #[builder(default = "default_allow_ext()")]
    pub allow_ext: HashSet<String>,
    /// Substrings that exclude a file when found in its directory path.
    #[builder(default = "default_deny_dirs()")]
    pub deny_dirs: Vec<String>,
    #[builder(default = "DEFAULT_CHUNK_SIZE")]
    pub chunk_size: usize,
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.chunk_size == Some(0) {
            return Err("chunk_size must be greater than zero".into());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_ext: default_allow_ext(),
            deny_dirs: default_deny_dirs(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl Config {
    #[must_use]
    pub fn is_allowed_ext(&self, ext: &str) -> bool {
        self.allow_ext.contains(ext)
    }

    /// Returns the first deny-list entry found in `dir`, if any.
    #[must_use]
    pub fn denied_by(&self, dir: &str) -> Option<&str> {
        self.deny_dirs
            .iter()
            .find(|d| dir.contains(d.as_str()))
            .map(String::as_str)
    }

    #[must_use]
    pub fn is_denied_dir(&self, dir: &str) -> bool {
        self.denied_by(dir).is_some()
    }
}
