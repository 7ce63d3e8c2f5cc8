use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

use thiserror::Error;

/// Immutable snapshot of environmental variables.
///
/// The environment is read exactly once, when the snapshot is taken; later
/// `setenv` calls in the process are never observed through it. Tests can build
/// a fully synthetic environment with [`Env::new_from`] instead of mutating
/// real process variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Env {
    vars: HashMap<OsString, OsString>,
}

/// Errors encountered when getting environmental variable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvStrError {
    /// This variant indicates, that variable `Missing.0` is missing.
    #[error("there is no environmental variable `${0:?}`")]
    Missing(OsString),

    /// This variant indicates, that variable `$NonUTF8.0` is not an UTF-8 string.
    #[error("environmental variable `${0:?}` is not an UTF-8 string")]
    NonUTF8(OsString),
}

impl Env {
    /// Snapshot the live process environment via [`std::env::vars_os`].
    pub fn new() -> Self {
        Self::new_from(std::env::vars_os().collect())
    }

    /// Create new [`Env`] using `vars` as existing environmental variables.
    pub fn new_from(vars: HashMap<OsString, OsString>) -> Self {
        Self { vars }
    }

    /// Get environmental variable pointed by `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - key for environmental variable. Must implement `AsRef<OsStr>`.
    ///
    /// # Returns
    /// `Option<&OsStr>`. `None` variant indicates missing key, `Some`: existing key.
    ///
    /// # Examples
    /// ```rust
    /// use xdg_locate::os::env::Env;
    ///
    /// let env = Env::new();
    /// println!("$FOO = {:?}", env.get_os("FOO"));
    /// ```
    pub fn get_os(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.vars.get(key.as_ref()).map(OsString::as_os_str)
    }

    /// Get environmental variable pointed by `key` and convert it to UTF-8.
    ///
    /// # Arguments
    ///
    /// * `key` - key for environmental variable. Must implement `AsRef<OsStr>`.
    ///
    /// # Returns
    /// `Result<&str, EnvStrError>`. `Ok` variant indicates existing UTF-8 variable, `Err`
    /// indicates some kind of error. See [`EnvStrError`] for details.
    ///
    /// # Examples
    /// ```rust
    /// use xdg_locate::os::env::Env;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let env = Env::new();
    /// let _path = env.get("PATH")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn get(&self, key: impl AsRef<OsStr>) -> Result<&str, EnvStrError> {
        let key = key.as_ref();
        self.get_os(key)
            .ok_or_else(|| EnvStrError::Missing(key.to_os_string()))?
            .to_str()
            .ok_or_else(|| EnvStrError::NonUTF8(key.to_os_string()))
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
