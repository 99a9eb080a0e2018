//! Core pipeline for compositing NWS RIDGE radar imagery.
//!
//! Maps a product code to its catalog entry, resolves the fixed source
//! URLs for the base radar raster and each enabled overlay, and
//! alpha-composites the fetched rasters in a strict z-order onto a
//! background canvas. Network fetching is delegated to a
//! [`LayerFetcher`] implementation; saving the flattened image belongs
//! to the caller.

pub mod compose;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod product;
pub mod source;

pub use compose::compose;
pub use config::{parse_hex_color, LayerConfiguration};
pub use error::{RadarError, RadarResult};
pub use pipeline::{LayerFetcher, RadarClient};
pub use product::{lookup, ProductDefinition, RangeClass, PRODUCTS};
pub use source::{LayerRequest, LayerRole, OVERLAY_STACK};
