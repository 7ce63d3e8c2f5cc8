//! XDG Base Directory resolution and lookup.
//!
//! Resolves the six XDG locations from an environment snapshot, applying the
//! documented defaults when a variable is absent or not an absolute path, and
//! finds the first existing file under a category's search list.

use std::path::{Path, PathBuf};

use crate::basedirs::home;
use crate::fs::probe::{DiskProbe, FileExistence, is_absolute};
use crate::os::env::Env;

/// Kind of base directory a file belongs to.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Category {
    /// User-specific configuration files.
    Config,
    /// User-specific data files.
    Data,
    /// Non-essential cached data.
    Cache,
    /// Runtime files (sockets, pipes) of the current session.
    Runtime,
}

/// Resolved XDG base directories.
///
/// All six locations are fixed at construction and never change afterwards;
/// [`find`](BaseDirectories::find) re-reads the filesystem on every call but
/// never the environment. Every stored path is syntactically absolute. Since
/// lookups take `&self`, concurrent use from multiple threads needs no locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDirectories {
    config_home: PathBuf,
    data_home: PathBuf,
    cache_home: PathBuf,
    runtime_dir: PathBuf,
    config_dirs: Vec<PathBuf>,
    data_dirs: Vec<PathBuf>,
}

fn single(env: &Env, var: &str) -> Option<PathBuf> {
    env.get(var)
        .ok()
        .filter(|value| is_absolute(value))
        .map(PathBuf::from)
}

fn list(env: &Env, var: &str) -> Option<Vec<PathBuf>> {
    let value = env.get(var).ok()?;
    Some(
        value
            .split(':')
            .filter(|entry| is_absolute(entry))
            .map(PathBuf::from)
            .collect(),
    )
}

impl BaseDirectories {
    /// Resolve base directories from the live process environment.
    pub fn new() -> Self {
        Self::from_env(&Env::new())
    }

    /// Resolve base directories from `env`.
    ///
    /// Never fails: a variable that is unset, not UTF-8, or not an absolute
    /// path is silently replaced by its default. Absolute values are taken
    /// verbatim, with no trimming or normalization.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `XDG_CONFIG_HOME` | `$HOME/.config` |
    /// | `XDG_DATA_HOME` | `$HOME/.local/share` |
    /// | `XDG_CACHE_HOME` | `$HOME/.cache` |
    /// | `XDG_RUNTIME_DIR` | [`std::env::temp_dir`] |
    /// | `XDG_CONFIG_DIRS` | `/etc/xdg` |
    /// | `XDG_DATA_DIRS` | `/usr/local/share:/usr/share` |
    ///
    /// The list variables are split on `:` and filtered to absolute entries.
    /// Their default applies only when the variable is entirely unset: a set
    /// variable whose entries are all relative resolves to an empty list, so
    /// lookups fall through to the home directory alone.
    pub fn from_env(env: &Env) -> Self {
        let home = home(env);
        Self {
            config_home: single(env, "XDG_CONFIG_HOME")
                .unwrap_or_else(|| home.join(".config")),
            data_home: single(env, "XDG_DATA_HOME")
                .unwrap_or_else(|| home.join(".local/share")),
            cache_home: single(env, "XDG_CACHE_HOME").unwrap_or_else(|| home.join(".cache")),
            runtime_dir: single(env, "XDG_RUNTIME_DIR").unwrap_or_else(std::env::temp_dir),
            config_dirs: list(env, "XDG_CONFIG_DIRS")
                .unwrap_or_else(|| vec![PathBuf::from("/etc/xdg")]),
            data_dirs: list(env, "XDG_DATA_DIRS").unwrap_or_else(|| {
                vec![PathBuf::from("/usr/local/share"), PathBuf::from("/usr/share")]
            }),
        }
    }

    /// User configuration directory (`$XDG_CONFIG_HOME`).
    pub fn config_home(&self) -> &Path {
        &self.config_home
    }

    /// User data directory (`$XDG_DATA_HOME`).
    pub fn data_home(&self) -> &Path {
        &self.data_home
    }

    /// User cache directory (`$XDG_CACHE_HOME`).
    pub fn cache_home(&self) -> &Path {
        &self.cache_home
    }

    /// Session runtime directory (`$XDG_RUNTIME_DIR`).
    pub fn runtime_dir(&self) -> &Path {
        &self.runtime_dir
    }

    /// System-wide configuration search directories (`$XDG_CONFIG_DIRS`).
    pub fn config_dirs(&self) -> &[PathBuf] {
        &self.config_dirs
    }

    /// System-wide data search directories (`$XDG_DATA_DIRS`).
    pub fn data_dirs(&self) -> &[PathBuf] {
        &self.data_dirs
    }

    /// Base directories searched for `category`, highest priority first.
    ///
    /// Config and data list the home directory followed by the system-wide
    /// fallbacks; cache and runtime have a single candidate each.
    pub fn search_list(&self, category: Category) -> Vec<&Path> {
        match category {
            Category::Config => std::iter::once(self.config_home.as_path())
                .chain(self.config_dirs.iter().map(PathBuf::as_path))
                .collect(),
            Category::Data => std::iter::once(self.data_home.as_path())
                .chain(self.data_dirs.iter().map(PathBuf::as_path))
                .collect(),
            Category::Cache => vec![self.cache_home.as_path()],
            Category::Runtime => vec![self.runtime_dir.as_path()],
        }
    }

    /// Find the first existing file under the base directories for `category`.
    ///
    /// Joins `path` onto each base directory of
    /// [`search_list`](Self::search_list) in order and returns the first
    /// candidate that exists on disk, without probing the rest.
    ///
    /// # Returns
    /// `Some(absolute path)` of the first existing candidate. `None` means no
    /// candidate exists under any base directory; it is an expected outcome,
    /// not an error. A transient filesystem error during a probe is
    /// indistinguishable from non-existence.
    ///
    /// # Examples
    /// ```rust,no_run
    /// # use xdg_locate::basedirs::xdg::{BaseDirectories, Category};
    /// let dirs = BaseDirectories::new();
    /// if let Some(config) = dirs.find(Category::Config, "myapp/config.toml") {
    ///     println!("loading {}", config.display());
    /// }
    /// ```
    pub fn find(&self, category: Category, path: impl AsRef<Path>) -> Option<PathBuf> {
        self.find_with(category, path, &DiskProbe)
    }

    /// [`find`](Self::find) against an explicit existence probe.
    ///
    /// The probe sees the exact joined candidate paths (one separator between
    /// base and `path`, no normalization), in search-list order, and is not
    /// called again once it answers true.
    pub fn find_with(
        &self,
        category: Category,
        path: impl AsRef<Path>,
        probe: &impl FileExistence,
    ) -> Option<PathBuf> {
        let path = path.as_ref();
        self.search_list(category)
            .into_iter()
            .map(|base| base.join(path))
            .find(|candidate| probe.exists(candidate))
    }
}

impl Default for BaseDirectories {
    fn default() -> Self {
        Self::new()
    }
}
