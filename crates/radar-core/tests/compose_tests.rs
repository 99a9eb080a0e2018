//! Tests for the layer compositor.

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use radar_core::{compose, LayerRole};

fn opaque(width: u32, height: u32, color: [u8; 3]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([color[0], color[1], color[2], 255]))
}

#[test]
fn test_opaque_base_covers_background() {
    let base = opaque(5, 5, [255, 0, 0]);
    let result = compose(&base, Rgb([0, 255, 0]), &[]);

    assert_eq!(result.dimensions(), (5, 5));
    assert!(result.pixels().all(|p| *p == Rgb([255, 0, 0])));
}

#[test]
fn test_transparent_base_shows_background() {
    let base = RgbaImage::from_pixel(3, 3, Rgba([255, 255, 255, 0]));
    let result = compose(&base, Rgb([10, 20, 30]), &[]);

    assert!(result.pixels().all(|p| *p == Rgb([10, 20, 30])));
}

#[test]
fn test_legend_transparent_corner_leaves_background() {
    // Fully transparent base over a blue background, legend opaque white
    // except a transparent 2x2 corner at the origin.
    let base = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]));
    let mut legend = opaque(4, 4, [255, 255, 255]);
    for y in 0..2 {
        for x in 0..2 {
            legend.put_pixel(x, y, Rgba([255, 255, 255, 0]));
        }
    }

    let background = Rgb([0, 0, 255]);
    let result = compose(&base, background, &[(LayerRole::Legend, legend)]);

    for y in 0..4 {
        for x in 0..4 {
            let expected = if x < 2 && y < 2 {
                background
            } else {
                Rgb([255, 255, 255])
            };
            assert_eq!(*result.get_pixel(x, y), expected, "pixel ({}, {})", x, y);
        }
    }
}

#[test]
fn test_topography_sits_beneath_base() {
    // Base is opaque in its left column only; topography is opaque green
    // everywhere. The base must win where it has coverage.
    let mut base = RgbaImage::from_pixel(2, 1, Rgba([0, 0, 0, 0]));
    base.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
    let topo = opaque(2, 1, [0, 255, 0]);

    let result = compose(&base, Rgb([0, 0, 0]), &[(LayerRole::Topography, topo)]);

    assert_eq!(*result.get_pixel(0, 0), Rgb([255, 0, 0]));
    assert_eq!(*result.get_pixel(1, 0), Rgb([0, 255, 0]));
}

#[test]
fn test_overlay_order_later_roles_win() {
    // Warnings are applied after counties, so where both are opaque the
    // warnings color must remain.
    let base = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 0]));
    let counties = opaque(2, 2, [100, 100, 100]);
    let warnings = opaque(2, 2, [200, 0, 0]);

    // Passed out of order on purpose; compose applies the fixed order.
    let result = compose(
        &base,
        Rgb([0, 0, 0]),
        &[
            (LayerRole::Warnings, warnings),
            (LayerRole::Counties, counties),
        ],
    );

    assert!(result.pixels().all(|p| *p == Rgb([200, 0, 0])));
}

#[test]
fn test_oversized_overlay_clipped_to_canvas() {
    let base = opaque(3, 3, [0, 0, 0]);
    let overlay = opaque(10, 10, [255, 255, 255]);

    let result = compose(&base, Rgb([0, 0, 0]), &[(LayerRole::Cities, overlay)]);

    assert_eq!(result.dimensions(), (3, 3));
    assert!(result.pixels().all(|p| *p == Rgb([255, 255, 255])));
}

#[test]
fn test_undersized_overlay_pasted_at_origin() {
    let base = opaque(4, 4, [0, 0, 0]);
    let overlay = opaque(2, 2, [255, 255, 255]);

    let result = compose(&base, Rgb([0, 0, 0]), &[(LayerRole::Highways, overlay)]);

    assert_eq!(*result.get_pixel(0, 0), Rgb([255, 255, 255]));
    assert_eq!(*result.get_pixel(1, 1), Rgb([255, 255, 255]));
    assert_eq!(*result.get_pixel(2, 2), Rgb([0, 0, 0]));
    assert_eq!(*result.get_pixel(3, 3), Rgb([0, 0, 0]));
}

#[test]
fn test_compose_is_deterministic() {
    let mut base = opaque(6, 6, [120, 30, 60]);
    base.put_pixel(2, 2, Rgba([0, 200, 0, 130]));
    let mut legend = opaque(6, 2, [250, 250, 250]);
    legend.put_pixel(0, 0, Rgba([0, 0, 0, 77]));

    let layers = vec![(LayerRole::Legend, legend)];
    let first = compose(&base, Rgb([1, 2, 3]), &layers);
    let second = compose(&base, Rgb([1, 2, 3]), &layers);

    assert_eq!(first.as_raw(), second.as_raw());
}
