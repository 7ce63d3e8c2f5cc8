//! Filesystem utilities.
//!
//! Provides the [`FileExistence`](probe::FileExistence) seam for read-only
//! existence queries, together with the disk-backed [`DiskProbe`](probe::DiskProbe).

pub mod probe;

pub use probe::{DiskProbe, FileExistence, is_absolute};
