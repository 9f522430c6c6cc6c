//! Celestial body catalog: records, taxonomic categories, and the
//! rule-based classifier that assigns one to the other.
//!
//! This is the leaf crate of the viewer core. It owns the catalog data
//! model and the pure classification function; scene state and rendering
//! concerns live upstream.

pub mod category;
pub mod classify;
pub mod error;
pub mod record;

pub use category::BodyCategory;
pub use classify::classify;
pub use error::CatalogError;
pub use record::{BodyRecord, Catalog};
