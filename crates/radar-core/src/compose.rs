//! Alpha compositing of radar layers onto a flattened canvas.
//!
//! The z-order is a correctness requirement, not a stylistic choice:
//! background, then topography, then the base radar return, then the
//! remaining overlays in the order of [`OVERLAY_STACK`]. Every layer is
//! pasted at the origin and clipped to the canvas bounds; the source
//! tiles are pre-aligned to a common pixel grid, so no resizing or
//! content alignment ever happens.

use image::{Rgb, RgbImage, RgbaImage};

use crate::source::{LayerRole, OVERLAY_STACK};

/// Alpha-blend `layer` onto `canvas` at the top-left corner.
///
/// The layer's own alpha channel is the blend mask: alpha-0 pixels leave
/// the canvas untouched, alpha-255 pixels replace it, everything between
/// mixes linearly. Pixels outside the canvas bounds are clipped.
fn blend_onto(canvas: &mut RgbImage, layer: &RgbaImage) {
    let width = canvas.width().min(layer.width());
    let height = canvas.height().min(layer.height());

    for y in 0..height {
        for x in 0..width {
            let src = layer.get_pixel(x, y);
            let alpha = u32::from(src[3]);
            if alpha == 0 {
                continue;
            }
            let dst = canvas.get_pixel_mut(x, y);
            for channel in 0..3 {
                let s = u32::from(src[channel]);
                let d = u32::from(dst[channel]);
                dst[channel] = ((s * alpha + d * (255 - alpha) + 127) / 255) as u8;
            }
        }
    }
}

/// Flatten the base radar raster and its overlays into one RGB image.
///
/// `overlays` holds the fetched optional layers; their order does not
/// matter because application order is taken from [`OVERLAY_STACK`].
/// A role absent from `overlays` (disabled, or unresolvable like rivers
/// on long range) is skipped silently. The canvas takes the base
/// raster's dimensions and starts filled with `background`.
pub fn compose(
    base: &RgbaImage,
    background: Rgb<u8>,
    overlays: &[(LayerRole, RgbaImage)],
) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(base.width(), base.height(), background);

    let layer_for = |role: LayerRole| {
        overlays
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, raster)| raster)
    };

    // Topography sits beneath the radar return.
    if let Some(topo) = layer_for(LayerRole::Topography) {
        blend_onto(&mut canvas, topo);
    }

    blend_onto(&mut canvas, base);

    for role in OVERLAY_STACK {
        if role == LayerRole::Topography {
            continue;
        }
        if let Some(raster) = layer_for(role) {
            blend_onto(&mut canvas, raster);
        }
    }

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_blend_clips_oversized_layer() {
        let mut canvas = RgbImage::from_pixel(2, 2, Rgb([0, 0, 0]));
        let layer = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
        blend_onto(&mut canvas, &layer);
        assert_eq!(canvas.dimensions(), (2, 2));
        assert!(canvas.pixels().all(|p| *p == Rgb([255, 255, 255])));
    }

    #[test]
    fn test_blend_partial_alpha_mixes() {
        let mut canvas = RgbImage::from_pixel(1, 1, Rgb([0, 0, 0]));
        let layer = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 128]));
        blend_onto(&mut canvas, &layer);
        let p = canvas.get_pixel(0, 0);
        // (255 * 128 + 0 * 127 + 127) / 255 = 128
        assert_eq!(*p, Rgb([128, 128, 128]));
    }
}
