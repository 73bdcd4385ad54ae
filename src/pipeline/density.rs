//! Ink-density estimation: the fraction of a word's bounding box covered by
//! text strokes.
//!
//! ## Why binarize per region instead of using mean intensity?
//!
//! Mean intensity conflates stroke weight with background brightness: a
//! regular-weight word on a grey scan reads darker than a bold word on a
//! bright one. Binarizing each word region against its *own* Otsu threshold
//! separates the region's two intensity populations first, so the ink ratio
//! adapts to per-word lighting and scan contrast. Bold glyphs have
//! measurably higher ink coverage per unit area than regular weight at the
//! same size, which is what makes the ratio usable as a bold proxy.

use crate::ocr::WordBox;
use image::GrayImage;
use imageproc::contrast::otsu_level;

/// Estimate the ink density of `bbox` within `gray`.
///
/// The box is clipped to the image bounds; a clip with zero remaining area
/// yields `0.0` ("no ink", never bold) rather than an error. The result is
/// in `[0, 1]` and is a pure function of the pixel data.
pub fn estimate_density(gray: &GrayImage, bbox: &WordBox) -> f64 {
    let (img_w, img_h) = gray.dimensions();

    let x0 = bbox.x.min(img_w);
    let y0 = bbox.y.min(img_h);
    let x1 = bbox.x.saturating_add(bbox.w).min(img_w);
    let y1 = bbox.y.saturating_add(bbox.h).min(img_h);

    if x1 <= x0 || y1 <= y0 {
        return 0.0;
    }

    let region = image::imageops::crop_imm(gray, x0, y0, x1 - x0, y1 - y0).to_image();

    // Otsu picks the cut between the region's two dominant intensity
    // populations; everything at or below it is the darker (ink) class.
    let level = otsu_level(&region);
    let total = region.pixels().len();
    let ink = region.pixels().filter(|p| p.0[0] <= level).count();

    ink as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    /// A white image with a black rectangle covering `ink_w × ink_h` pixels
    /// at the origin.
    fn ink_patch(w: u32, h: u32, ink_w: u32, ink_h: u32) -> GrayImage {
        GrayImage::from_fn(w, h, |x, y| {
            if x < ink_w && y < ink_h {
                Luma([0u8])
            } else {
                Luma([255u8])
            }
        })
    }

    #[test]
    fn half_ink_region_scores_half() {
        let img = ink_patch(10, 10, 10, 5);
        let d = estimate_density(&img, &WordBox::new(0, 0, 10, 10));
        assert!((d - 0.5).abs() < 1e-9, "got {d}");
    }

    #[test]
    fn all_white_region_scores_zero() {
        let img = ink_patch(10, 10, 0, 0);
        let d = estimate_density(&img, &WordBox::new(0, 0, 10, 10));
        assert_eq!(d, 0.0);
    }

    #[test]
    fn zero_area_box_scores_zero() {
        let img = ink_patch(10, 10, 5, 5);
        assert_eq!(estimate_density(&img, &WordBox::new(2, 2, 0, 4)), 0.0);
        assert_eq!(estimate_density(&img, &WordBox::new(2, 2, 4, 0)), 0.0);
    }

    #[test]
    fn out_of_bounds_box_clips_to_zero() {
        let img = ink_patch(10, 10, 5, 5);
        // Entirely outside the image.
        assert_eq!(estimate_density(&img, &WordBox::new(20, 20, 4, 4)), 0.0);
        // Starts inside, extends past the edge; only the in-bounds part counts.
        let d = estimate_density(&img, &WordBox::new(8, 8, 100, 100));
        assert!((0.0..=1.0).contains(&d));
    }

    #[test]
    fn density_is_idempotent() {
        let img = ink_patch(32, 16, 12, 16);
        let bbox = WordBox::new(0, 0, 32, 16);
        let first = estimate_density(&img, &bbox);
        let second = estimate_density(&img, &bbox);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn denser_patch_scores_higher() {
        let img = ink_patch(20, 10, 4, 10);
        let thin = estimate_density(&img, &WordBox::new(0, 0, 20, 10));
        let img = ink_patch(20, 10, 12, 10);
        let thick = estimate_density(&img, &WordBox::new(0, 0, 20, 10));
        assert!(thick > thin, "thick {thick} should exceed thin {thin}");
    }
}
