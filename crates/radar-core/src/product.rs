//! Catalog of NWS RIDGE radar products.
//!
//! The catalog is a fixed table: seven product codes, each mapped to a
//! display name and a coverage range class. Unknown codes are a caller
//! error, never a silent default.

use crate::error::{RadarError, RadarResult};

/// Coverage range class of a radar product.
///
/// Selects which overlay tile set the remote host serves: `Short` for
/// regional coverage, `Long` for the full continental composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeClass {
    Short,
    Long,
}

impl RangeClass {
    /// The token substituted into source URL templates.
    pub fn token(self) -> &'static str {
        match self {
            RangeClass::Short => "Short",
            RangeClass::Long => "Long",
        }
    }
}

/// A radar product definition from the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductDefinition {
    /// Canonical (uppercase) product code, e.g. "NCR"
    pub code: &'static str,

    /// Human-readable product name
    pub name: &'static str,

    /// Coverage range class
    pub range: RangeClass,
}

/// The complete set of supported products.
pub const PRODUCTS: [ProductDefinition; 7] = [
    ProductDefinition {
        code: "N0R",
        name: "Base Reflectivity",
        range: RangeClass::Short,
    },
    ProductDefinition {
        code: "N0S",
        name: "Storm Relative Motion",
        range: RangeClass::Short,
    },
    ProductDefinition {
        code: "N0V",
        name: "Base Velocity",
        range: RangeClass::Short,
    },
    ProductDefinition {
        code: "N1P",
        name: "One-Hour Precipitation",
        range: RangeClass::Short,
    },
    ProductDefinition {
        code: "NCR",
        name: "Composite Reflectivity",
        range: RangeClass::Short,
    },
    ProductDefinition {
        code: "NTP",
        name: "Storm Total Precipitation",
        range: RangeClass::Short,
    },
    ProductDefinition {
        code: "N0Z",
        name: "Base Reflectivity",
        range: RangeClass::Long,
    },
];

/// Look up a product definition by code (case-insensitive).
pub fn lookup(code: &str) -> RadarResult<&'static ProductDefinition> {
    let normalized = code.trim().to_ascii_uppercase();
    PRODUCTS
        .iter()
        .find(|p| p.code == normalized)
        .ok_or(RadarError::UnknownProduct(normalized))
}
