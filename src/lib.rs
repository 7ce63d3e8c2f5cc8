//! Xdg-locate - XDG Base Directory resolution and file lookup.
//!
//! This crate resolves the standard base-directory locations (configuration, data,
//! cache, runtime) from the process environment following the XDG Base Directory
//! convention, and locates the first existing file matching a relative path within
//! a priority-ordered search list.
//!
//! ```rust,no_run
//! use xdg_locate::basedirs::xdg::{BaseDirectories, Category};
//!
//! let dirs = BaseDirectories::new();
//! if let Some(config) = dirs.find(Category::Config, "myapp/config.toml") {
//!     println!("loading {}", config.display());
//! }
//! ```

pub mod basedirs;
pub mod fs;
pub mod os;
