//! # cs-ingest
//!
//! Boundary collaborators of the certsync engine.
//!
//! - [`dns`]: public and private DNS export parsing into a scoped inventory
//! - [`exceptions`]: substring deny list applied to DNS names
//! - [`scan`]: certificate scan CSV import
//! - [`export`]: CSV renderings of the change list and the expiry report

pub mod dns;
pub mod error;
pub mod exceptions;
pub mod export;
pub mod scan;

pub use error::IngestError;
pub use exceptions::ExceptionList;

use std::path::Path;

/// Read a whole text file, attaching the path to any I/O error.
pub(crate) fn read_text(path: &Path) -> Result<String, IngestError> {
    std::fs::read_to_string(path).map_err(|source| IngestError::Read {
        path: path.display().to_string(),
        source,
    })
}
