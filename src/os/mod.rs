//! OS-level utilities.
//!
//! Provides the [`Env`](env::Env) environment snapshot, so resolution logic can
//! run against a synthetic environment instead of live process state.

pub mod env;
