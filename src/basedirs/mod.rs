//! Standard base-directory resolution.
//!
//! Provides [`BaseDirectories`](xdg::BaseDirectories), an immutable set of XDG base
//! directories resolved once from an environment snapshot, with a priority-ordered
//! lookup for the first existing file of a category.
//!
//! ```rust,no_run
//! # use xdg_locate::basedirs::xdg::{BaseDirectories, Category};
//! # fn foo() -> Option<()> {
//! let dirs = BaseDirectories::new();
//!
//! let data_path = dirs.find(Category::Data, "myapp/db.sqlite")?;
//! # None
//! # }
//! ```

use std::path::PathBuf;

use crate::fs::probe::is_absolute;
use crate::os::env::Env;

pub mod xdg;

/// Resolve the user's home directory.
///
/// Prefers `$HOME` from `env` when it holds an absolute path, so resolution
/// built on a synthetic environment stays isolated from the live process.
/// Falls back to [`std::env::home_dir`], and finally to `/`, so a value is
/// always produced.
pub fn home(env: &Env) -> PathBuf {
    env.get("HOME")
        .ok()
        .filter(|value| is_absolute(value))
        .map(PathBuf::from)
        .or_else(std::env::home_dir)
        .unwrap_or_else(|| PathBuf::from("/"))
}
