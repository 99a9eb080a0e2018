//! Source URL resolution for radar layers.
//!
//! Every layer the pipeline can fetch comes from a fixed per-role URL
//! template on the RIDGE host. Resolution is pure string substitution of
//! three values: the range-class token, the (uppercased) site identifier,
//! and, for the base and legend roles, the raw product code. The
//! templates are the complete configuration surface for the remote host's
//! path conventions and must stay byte-for-byte compatible with it.

use crate::product::{ProductDefinition, RangeClass};

/// The role a fetched raster plays in the composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerRole {
    Base,
    Topography,
    Legend,
    Warnings,
    Counties,
    Highways,
    Cities,
    Rivers,
}

/// Optional overlay roles in resolution order.
///
/// Topography is listed first because it is composited beneath the base
/// radar return; the rest follow the fixed z-order applied above it.
pub const OVERLAY_STACK: [LayerRole; 7] = [
    LayerRole::Topography,
    LayerRole::Rivers,
    LayerRole::Counties,
    LayerRole::Highways,
    LayerRole::Cities,
    LayerRole::Warnings,
    LayerRole::Legend,
];

impl LayerRole {
    /// URL template for this role.
    ///
    /// Placeholders: `{range}` (range-class token), `{site}` (uppercased
    /// site identifier), `{product}` (uppercased product code).
    pub const fn template(self) -> &'static str {
        match self {
            LayerRole::Base => {
                "http://radar.weather.gov/ridge/RadarImg/{product}/{site}_{product}_0.gif"
            }
            LayerRole::Legend => {
                "http://radar.weather.gov/ridge/Legend/{product}/{site}_{product}_Legend_0.gif"
            }
            LayerRole::Warnings => {
                "http://radar.weather.gov/ridge/Warnings/{range}/{site}_Warnings_0.gif"
            }
            LayerRole::Counties => {
                "http://radar.weather.gov/ridge/Overlays/County/{range}/{site}_County_{range}.gif"
            }
            LayerRole::Highways => {
                "http://radar.weather.gov/ridge/Overlays/Highways/{range}/{site}_Highways_{range}.gif"
            }
            LayerRole::Topography => {
                "http://radar.weather.gov/ridge/Overlays/Topo/{range}/{site}_Topo_{range}.jpg"
            }
            LayerRole::Cities => {
                "http://radar.weather.gov/ridge/Overlays/Cities/{range}/{site}_City_{range}.gif"
            }
            LayerRole::Rivers => {
                "http://radar.weather.gov/ridge/Overlays/Rivers/{range}/{site}_Rivers_{range}.gif"
            }
        }
    }
}

impl std::fmt::Display for LayerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LayerRole::Base => "base",
            LayerRole::Topography => "topography",
            LayerRole::Legend => "legend",
            LayerRole::Warnings => "warnings",
            LayerRole::Counties => "counties",
            LayerRole::Highways => "highways",
            LayerRole::Cities => "cities",
            LayerRole::Rivers => "rivers",
        };
        write!(f, "{}", name)
    }
}

/// A fully resolved request for one layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerRequest {
    pub role: LayerRole,
    pub url: String,
}

fn substitute(role: LayerRole, range: RangeClass, site: &str, product: &str) -> String {
    role.template()
        .replace("{range}", range.token())
        .replace("{site}", site)
        .replace("{product}", product)
}

/// Resolve the source for the base radar raster.
///
/// `site` must already be normalized to uppercase.
pub fn base_request(product: &ProductDefinition, site: &str) -> LayerRequest {
    LayerRequest {
        role: LayerRole::Base,
        url: substitute(LayerRole::Base, product.range, site, product.code),
    }
}

/// Resolve the source for an optional overlay.
///
/// Returns `None` when the role has no tile for the product's range
/// class; the remote host publishes river overlays for short range only,
/// and the compositor treats the absence as "skip", not as an error.
pub fn overlay_request(
    role: LayerRole,
    product: &ProductDefinition,
    site: &str,
) -> Option<LayerRequest> {
    if role == LayerRole::Rivers && product.range == RangeClass::Long {
        return None;
    }
    Some(LayerRequest {
        role,
        url: substitute(role, product.range, site, product.code),
    })
}
