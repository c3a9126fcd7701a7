//! Wallpaper sampling
//!
//! Turns an image file into weighted LAB points for clustering: decode,
//! downscale with the area-averaging thumbnail filter, blur lightly to
//! attenuate compression noise, then sample on a stride with center-biased
//! multiplicities.

use std::path::Path;

use image::imageops;
use image::{ImageReader, RgbaImage};
use palette::{FromColor, Lab, Srgb};

use crate::config::{ALPHA_CUTOFF, BLUR_SIGMA, MAX_IMAGE_BYTES, SAMPLE_TARGET};
use crate::error::{LuminolError, Result};

/// A sampled pixel in LAB with its center-bias multiplicity
#[derive(Debug, Clone, Copy)]
pub struct WeightedPoint {
    pub lab: Lab,
    pub weight: u32,
}

/// The sampler's output: weighted LAB points plus image metadata
#[derive(Debug, Clone)]
pub struct SampleSet {
    pub points: Vec<WeightedPoint>,
    pub total_weight: f64,
    /// Dimensions of the decoded image before downscaling; also the
    /// source of the deterministic k-means seed
    pub source_width: u32,
    pub source_height: u32,
}

impl SampleSet {
    /// Seed for k-means++ derived from the source dimensions, so identical
    /// image bytes give identical palettes
    #[must_use]
    pub fn seed(&self) -> u64 {
        (u64::from(self.source_width) << 32) | u64::from(self.source_height)
    }
}

/// Sample a wallpaper image into weighted LAB points
///
/// `max_edge` is the downscale target for the longest edge (quality
/// dependent).
///
/// # Errors
/// Fatal on unreadable/oversized files, decode failures, and images whose
/// pixels are all transparent.
pub fn sample_image(path: &Path, max_edge: u32) -> Result<SampleSet> {
    let metadata = std::fs::metadata(path)?;
    if metadata.len() > MAX_IMAGE_BYTES {
        return Err(LuminolError::ImageError(format!(
            "{} is {} bytes; the limit is {} (10 MiB)",
            path.display(),
            metadata.len(),
            MAX_IMAGE_BYTES
        )));
    }

    let decoded = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|e| {
            LuminolError::ImageError(format!("failed to decode {}: {e}", path.display()))
        })?;
    let source_width = decoded.width();
    let source_height = decoded.height();

    let rgba = decoded.to_rgba8();
    let rgba = downscale(rgba, max_edge);
    let rgba = imageops::blur(&rgba, BLUR_SIGMA);

    let points = collect_points(&rgba);
    if points.is_empty() {
        return Err(LuminolError::ImageError(format!(
            "{}: no opaque pixels to sample (all pixels transparent)",
            path.display()
        )));
    }
    let total_weight = points.iter().map(|p| f64::from(p.weight)).sum();

    Ok(SampleSet {
        points,
        total_weight,
        source_width,
        source_height,
    })
}

/// Downscale preserving aspect ratio so the longest edge is at most
/// `max_edge`; already-small images pass through
fn downscale(rgba: RgbaImage, max_edge: u32) -> RgbaImage {
    let (w, h) = rgba.dimensions();
    let longest = w.max(h);
    if longest <= max_edge {
        return rgba;
    }
    let scale = f64::from(max_edge) / f64::from(longest);
    let nw = ((f64::from(w) * scale).round() as u32).max(1);
    let nh = ((f64::from(h) * scale).round() as u32).max(1);
    imageops::thumbnail(&rgba, nw, nh)
}

fn collect_points(rgba: &RgbaImage) -> Vec<WeightedPoint> {
    let (w, h) = rgba.dimensions();
    let pixel_count = u64::from(w) * u64::from(h);
    let stride = sample_stride(pixel_count);

    let cx = f64::from(w) / 2.0;
    let cy = f64::from(h) / 2.0;
    let half_diagonal = (cx * cx + cy * cy).sqrt().max(1.0);

    let mut points = Vec::new();
    for y in (0..h).step_by(stride) {
        for x in (0..w).step_by(stride) {
            let pixel = rgba.get_pixel(x, y);
            if pixel[3] < ALPHA_CUTOFF {
                continue;
            }
            let srgb = Srgb::new(
                f32::from(pixel[0]) / 255.0,
                f32::from(pixel[1]) / 255.0,
                f32::from(pixel[2]) / 255.0,
            );
            points.push(WeightedPoint {
                lab: Lab::from_color(srgb),
                weight: center_weight(f64::from(x), f64::from(y), cx, cy, half_diagonal),
            });
        }
    }
    points
}

/// Stride that caps the sample count near the target
fn sample_stride(pixel_count: u64) -> usize {
    let ratio = pixel_count as f64 / f64::from(SAMPLE_TARGET);
    (ratio.sqrt().ceil() as usize).max(1)
}

/// Center pixels count roughly 3x, far-edge pixels roughly 2x
fn center_weight(x: f64, y: f64, cx: f64, cy: f64, half_diagonal: f64) -> u32 {
    let dx = x - cx;
    let dy = y - cy;
    let d = (dx * dx + dy * dy).sqrt() / half_diagonal;
    let weight = (3.0 * (1.0 - 0.3 * d)).round();
    (weight as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn stride_caps_samples() {
        assert_eq!(sample_stride(10_000), 1);
        assert_eq!(sample_stride(40_000), 1);
        assert_eq!(sample_stride(160_000), 2);
        assert_eq!(sample_stride(1_000_000), 5);
    }

    #[test]
    fn center_outweighs_edges() {
        let center = center_weight(50.0, 50.0, 50.0, 50.0, 70.7);
        let corner = center_weight(0.0, 0.0, 50.0, 50.0, 70.7);
        assert_eq!(center, 3);
        assert_eq!(corner, 2);
        assert!(center > corner);
    }

    #[test]
    fn downscale_preserves_aspect() {
        let img = RgbaImage::from_pixel(1600, 800, Rgba([10, 20, 30, 255]));
        let small = downscale(img, 800);
        assert_eq!(small.dimensions(), (800, 400));
    }

    #[test]
    fn small_images_pass_through() {
        let img = RgbaImage::from_pixel(100, 60, Rgba([10, 20, 30, 255]));
        let same = downscale(img, 800);
        assert_eq!(same.dimensions(), (100, 60));
    }

    #[test]
    fn transparent_pixels_are_skipped() {
        let mut img = RgbaImage::from_pixel(10, 10, Rgba([10, 20, 30, 0]));
        img.put_pixel(5, 5, Rgba([200, 100, 50, 255]));
        let points = collect_points(&img);
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn seed_is_dimension_derived() {
        let set = SampleSet {
            points: Vec::new(),
            total_weight: 0.0,
            source_width: 1920,
            source_height: 1080,
        };
        assert_eq!(set.seed(), (1920u64 << 32) | 1080u64);
    }
}
