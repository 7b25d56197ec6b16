//! PDF packaging: embeds a rasterized document bitmap into an A4 portrait
//! PDF, one raster strip per page.
//!
//! Scaling: a bitmap that fits one page uses the uniform-fit rule
//! `ratio = min(page_w / img_w, page_h / img_h)` (mm per pixel),
//! horizontally centered and anchored to the top of the page. A bitmap
//! taller than one page at width-fit scale keeps the width-fit ratio and is
//! sliced at page-height boundaries into additional pages — overflow flows
//! onto the next page instead of being shrunk or clipped.

use image::{DynamicImage, RgbaImage};
use printpdf::{Image, ImageTransform, Mm, PdfDocument};

use crate::errors::BuilderError;

/// A4 portrait.
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

const MM_PER_INCH: f32 = 25.4;

/// Uniform scale ratio (mm per pixel) fitting the bitmap inside one page
/// without distortion.
pub fn fit_ratio(width_px: u32, height_px: u32) -> f32 {
    let w = width_px.max(1) as f32;
    let h = height_px.max(1) as f32;
    (PAGE_WIDTH_MM / w).min(PAGE_HEIGHT_MM / h)
}

/// Scale ratio used for packaging. Content that fits a single page gets the
/// uniform fit; content taller than one page at width-fit scale keeps the
/// width-fit ratio so the height overflow paginates instead of shrinking
/// the whole document.
pub(crate) fn scale_ratio(width_px: u32, height_px: u32) -> f32 {
    let width_ratio = PAGE_WIDTH_MM / width_px.max(1) as f32;
    if height_px as f32 * width_ratio > PAGE_HEIGHT_MM {
        width_ratio
    } else {
        fit_ratio(width_px, height_px)
    }
}

/// X offset (mm) that horizontally centers a scaled bitmap on the page.
pub fn centered_x_mm(width_px: u32, ratio: f32) -> f32 {
    (PAGE_WIDTH_MM - width_px as f32 * ratio) / 2.0
}

/// Vertical pixel ranges `(y0, height)` of the page strips the bitmap is
/// sliced into. One full-page-height strip per page; the last strip may be
/// shorter. A bitmap that fits one page yields a single range.
pub(crate) fn slice_ranges(height_px: u32, ratio: f32) -> Vec<(u32, u32)> {
    let page_px = (PAGE_HEIGHT_MM / ratio).floor().max(1.0) as u32;
    let mut ranges = Vec::new();
    let mut y = 0u32;
    while y < height_px {
        let h = page_px.min(height_px - y);
        ranges.push((y, h));
        y += h;
    }
    if ranges.is_empty() {
        ranges.push((0, 0));
    }
    ranges
}

/// Packages bitmaps into single- or multi-page A4 PDFs.
#[derive(Debug, Clone)]
pub struct PdfPackager {
    title: String,
}

impl Default for PdfPackager {
    fn default() -> Self {
        Self {
            title: "Resume".to_string(),
        }
    }
}

impl PdfPackager {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Embeds the bitmap into a PDF and returns the document bytes.
    ///
    /// CPU-bound; callers in async context run this inside
    /// `tokio::task::spawn_blocking`.
    pub fn package(&self, bitmap: &RgbaImage) -> Result<Vec<u8>, BuilderError> {
        let (width, height) = bitmap.dimensions();
        if width == 0 || height == 0 {
            return Err(BuilderError::PdfAssembly(
                "rasterizer produced an empty bitmap".to_string(),
            ));
        }

        let ratio = scale_ratio(width, height);
        let x_mm = centered_x_mm(width, ratio);
        // printpdf maps pixels to mm through dpi: size_mm = px * 25.4 / dpi.
        let dpi = MM_PER_INCH / ratio;

        let (doc, first_page, first_layer) =
            PdfDocument::new(&self.title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");

        for (index, (y0, strip_height)) in slice_ranges(height, ratio).into_iter().enumerate() {
            let layer = if index == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page, layer) =
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
                doc.get_page(page).get_layer(layer)
            };

            let strip = image::imageops::crop_imm(bitmap, 0, y0, width, strip_height).to_image();
            // Flatten alpha; PDF image XObjects carry no alpha channel here.
            let strip = DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(strip).to_rgb8());
            let pdf_image = Image::from_dynamic_image(&strip);

            let strip_mm = strip_height as f32 * ratio;
            pdf_image.add_to_layer(
                layer,
                ImageTransform {
                    // Bottom-left origin; top anchor means offsetting by the
                    // strip's own height from the page top.
                    translate_x: Some(Mm(x_mm)),
                    translate_y: Some(Mm(PAGE_HEIGHT_MM - strip_mm)),
                    dpi: Some(dpi),
                    ..Default::default()
                },
            );
        }

        doc.save_to_bytes()
            .map_err(|e| BuilderError::PdfAssembly(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_ratio_width_limited() {
        // Wide bitmap: width constrains the scale.
        let ratio = fit_ratio(2100, 1000);
        assert!((ratio - 0.1).abs() < 1e-4);
    }

    #[test]
    fn test_fit_ratio_height_limited() {
        // Tall-but-narrow bitmap that still fits one page: height constrains.
        let ratio = fit_ratio(100, 2970);
        assert!((ratio - 0.1).abs() < 1e-4);
    }

    #[test]
    fn test_scale_ratio_uniform_fit_for_single_page_content() {
        assert_eq!(scale_ratio(1000, 1400), fit_ratio(1000, 1400));
    }

    #[test]
    fn test_scale_ratio_width_fit_for_tall_content() {
        // Taller than a page at width-fit scale: the uniform fit would
        // shrink everything onto one page; packaging keeps width fit.
        let ratio = scale_ratio(1000, 5000);
        assert!((ratio - 0.21).abs() < 1e-4, "expected width fit, got {ratio}");
        assert!(ratio > fit_ratio(1000, 5000));
    }

    #[test]
    fn test_centered_x_is_symmetric() {
        let ratio = fit_ratio(1000, 1400);
        let x = centered_x_mm(1000, ratio);
        let scaled_w = 1000.0 * ratio;
        assert!((x * 2.0 + scaled_w - PAGE_WIDTH_MM).abs() < 1e-3);
        assert!(x >= 0.0);
    }

    #[test]
    fn test_slice_ranges_single_page_when_content_fits() {
        let ratio = scale_ratio(1000, 1400);
        let ranges = slice_ranges(1400, ratio);
        assert_eq!(ranges, vec![(0, 1400)]);
    }

    #[test]
    fn test_slice_ranges_paginate_tall_content() {
        // 1000px wide → ratio = 0.21 mm/px → 1414px per page.
        let ratio = scale_ratio(1000, 5000);
        let ranges = slice_ranges(5000, ratio);
        assert_eq!(ranges.len(), 4, "tall content must slice into pages");
        // Contiguous, top to bottom, covering every pixel row exactly once.
        let mut expected_y = 0;
        for (y0, h) in &ranges {
            assert_eq!(*y0, expected_y);
            expected_y += h;
        }
        assert_eq!(expected_y, 5000);
        // All but the last strip are full page height.
        for (_, h) in &ranges[..ranges.len() - 1] {
            assert_eq!(*h, 1414);
        }
    }

    #[test]
    fn test_tall_bitmap_slices_into_expected_page_count() {
        // 500px wide → width fit 0.42 mm/px → 707px per page → 4 pages
        // for a 2800px-tall bitmap.
        let ratio = scale_ratio(500, 2800);
        assert!((ratio - 0.42).abs() < 1e-4);
        assert_eq!(slice_ranges(2800, ratio).len(), 4);
    }

    #[test]
    fn test_package_produces_pdf_bytes() {
        let bitmap = RgbaImage::from_pixel(200, 280, image::Rgba([255, 255, 255, 255]));
        let bytes = PdfPackager::default().package(&bitmap).unwrap();
        assert!(bytes.starts_with(b"%PDF"), "output must be a PDF document");
        assert!(bytes.len() > 100);
    }

    #[test]
    fn test_package_rejects_empty_bitmap() {
        let bitmap = RgbaImage::new(0, 0);
        let err = PdfPackager::default().package(&bitmap).unwrap_err();
        assert!(matches!(err, BuilderError::PdfAssembly(_)));
    }

    #[test]
    fn test_package_embeds_one_strip_per_page() {
        fn count(haystack: &[u8], needle: &[u8]) -> usize {
            haystack.windows(needle.len()).filter(|w| w == &needle).count()
        }

        let tall = PdfPackager::default()
            .package(&RgbaImage::from_pixel(500, 2800, image::Rgba([250, 250, 250, 255])))
            .unwrap();
        let single = PdfPackager::default()
            .package(&RgbaImage::from_pixel(500, 700, image::Rgba([250, 250, 250, 255])))
            .unwrap();

        // One embedded image XObject per strip; the tall bitmap spans four
        // pages, the short one a single page.
        let tall_images = count(&tall, b"/XObject");
        let single_images = count(&single, b"/XObject");
        assert!(
            tall_images > single_images,
            "tall bitmap must embed more strips ({tall_images} vs {single_images})"
        );
        assert!(tall.len() > single.len());
    }
}
