//! Per-invocation layer configuration.

use image::Rgb;

use crate::source::LayerRole;

/// Which optional overlays to include and the canvas background color.
///
/// Supplied once per pipeline invocation and immutable for its duration.
/// The default enables every overlay on a black background; calling
/// surfaces that prefer opt-in toggles start from
/// [`LayerConfiguration::none`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerConfiguration {
    pub include_topography: bool,
    pub include_legend: bool,
    pub include_warnings: bool,
    pub include_counties: bool,
    pub include_highways: bool,
    pub include_cities: bool,
    pub include_rivers: bool,
    pub background: Rgb<u8>,
}

impl Default for LayerConfiguration {
    fn default() -> Self {
        Self {
            include_topography: true,
            include_legend: true,
            include_warnings: true,
            include_counties: true,
            include_highways: true,
            include_cities: true,
            include_rivers: true,
            background: Rgb([0, 0, 0]),
        }
    }
}

impl LayerConfiguration {
    /// Configuration with every overlay disabled (base layer only).
    pub fn none() -> Self {
        Self {
            include_topography: false,
            include_legend: false,
            include_warnings: false,
            include_counties: false,
            include_highways: false,
            include_cities: false,
            include_rivers: false,
            background: Rgb([0, 0, 0]),
        }
    }

    /// Whether the given overlay role is enabled.
    ///
    /// The base layer is always included; it is not an overlay.
    pub fn includes(&self, role: LayerRole) -> bool {
        match role {
            LayerRole::Base => true,
            LayerRole::Topography => self.include_topography,
            LayerRole::Legend => self.include_legend,
            LayerRole::Warnings => self.include_warnings,
            LayerRole::Counties => self.include_counties,
            LayerRole::Highways => self.include_highways,
            LayerRole::Cities => self.include_cities,
            LayerRole::Rivers => self.include_rivers,
        }
    }
}

/// Parse a `#RRGGBB` hex color (leading `#` optional, case-insensitive).
pub fn parse_hex_color(s: &str) -> Option<Rgb<u8>> {
    let s = s.trim().trim_start_matches('#');
    if s.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&s[0..2], 16).ok()?;
    let g = u8::from_str_radix(&s[2..4], 16).ok()?;
    let b = u8::from_str_radix(&s[4..6], 16).ok()?;
    Some(Rgb([r, g, b]))
}
