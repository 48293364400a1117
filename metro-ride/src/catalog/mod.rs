//! Station catalog.
//!
//! The fixed set of stations for every line, loaded once at startup from
//! data bundled in the binary and read-only afterwards.

mod data;
mod error;
mod registry;

pub use error::CatalogError;
pub use registry::StationCatalog;
