//! PDF export — rasterized-slice pagination.
//!
//! The captured surface is one tall bitmap. It is scaled to the full A4
//! width, then the *same* full image is placed on successive pages at
//! progressively negative vertical offsets, each page revealing the next
//! vertical slice. Page breaks are therefore content-blind: they may cut
//! through a line of text. This is the accepted trade-off of rasterized
//! export; there is no reflowed-text pagination here.

use printpdf::{image_crate, Image, ImageTransform, Mm, PdfDocument};

use super::ExportError;

/// A4 portrait.
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

const MM_PER_INCH: f32 = 25.4;

/// Geometry of one export: the capture scaled to page width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    /// Bitmap height after width-scaling, in millimetres.
    pub image_height_mm: f32,
    /// `ceil(image_height / page_height)`, never zero.
    pub page_count: u32,
    /// Dots-per-inch that maps the bitmap's pixel width onto 210 mm.
    pub dpi: f32,
}

/// Computes the slice layout for a capture of the given pixel dimensions.
pub fn paginate(width_px: u32, height_px: u32) -> Result<PageLayout, ExportError> {
    if width_px == 0 || height_px == 0 {
        return Err(ExportError::EmptyCapture);
    }
    let image_height_mm = height_px as f32 * PAGE_WIDTH_MM / width_px as f32;
    let page_count = (image_height_mm / PAGE_HEIGHT_MM).ceil().max(1.0) as u32;
    let dpi = width_px as f32 * MM_PER_INCH / PAGE_WIDTH_MM;
    Ok(PageLayout {
        image_height_mm,
        page_count,
        dpi,
    })
}

/// Vertical placement of the full image on page `page_index` (0-based):
/// the y coordinate of the image's bottom edge in the page's bottom-up
/// millimetre space. Negative values hang below the page and are clipped.
pub fn page_offset_mm(layout: &PageLayout, page_index: u32) -> f32 {
    PAGE_HEIGHT_MM * (page_index + 1) as f32 - layout.image_height_mm
}

/// Assembles the multi-page PDF from a PNG capture. Returns the finished
/// document bytes.
pub fn render_pdf(png_bytes: &[u8], title: &str) -> Result<Vec<u8>, ExportError> {
    let bitmap = image_crate::load_from_memory(png_bytes)
        .map_err(|e| ExportError::Decode(e.to_string()))?;
    let layout = paginate(bitmap.width(), bitmap.height())?;

    let (doc, first_page, first_layer) = PdfDocument::new(
        title,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "content",
    );

    for page_index in 0..layout.page_count {
        let layer = if page_index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
            doc.get_page(page).get_layer(layer)
        };

        let image = Image::from_dynamic_image(&bitmap);
        image.add_to_layer(
            layer,
            ImageTransform {
                translate_x: Some(Mm(0.0)),
                translate_y: Some(Mm(page_offset_mm(&layout, page_index))),
                dpi: Some(layout.dpi),
                ..Default::default()
            },
        );
    }

    doc.save_to_bytes().map_err(|e| ExportError::Pdf(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page_when_scaled_height_fits() {
        // 210x297 px scales to exactly one A4 page.
        let layout = paginate(210, 297).unwrap();
        assert_eq!(layout.page_count, 1);
        assert!((layout.image_height_mm - PAGE_HEIGHT_MM).abs() < 1e-3);
    }

    #[test]
    fn test_exact_multiple_emits_no_trailing_blank_page() {
        // Twice the page height: exactly two pages, not three.
        let layout = paginate(210, 594).unwrap();
        assert_eq!(layout.page_count, 2);
    }

    #[test]
    fn test_page_count_is_ceil_of_height_over_page_height() {
        let layout = paginate(210, 600).unwrap();
        // 600 mm of content over 297 mm pages → 3 pages.
        assert_eq!(layout.page_count, 3);
        let expected = (layout.image_height_mm / PAGE_HEIGHT_MM).ceil() as u32;
        assert_eq!(layout.page_count, expected);
    }

    #[test]
    fn test_short_capture_still_gets_one_page() {
        let layout = paginate(1000, 100).unwrap();
        assert_eq!(layout.page_count, 1);
        assert!(layout.image_height_mm < PAGE_HEIGHT_MM);
    }

    #[test]
    fn test_offsets_step_one_page_height_per_page() {
        let layout = paginate(210, 600).unwrap();
        let first = page_offset_mm(&layout, 0);
        let second = page_offset_mm(&layout, 1);
        let third = page_offset_mm(&layout, 2);
        assert!((second - first - PAGE_HEIGHT_MM).abs() < 1e-3);
        assert!((third - second - PAGE_HEIGHT_MM).abs() < 1e-3);
        // First page: image top flush with the page top, bottom hanging below.
        assert!((first - (PAGE_HEIGHT_MM - layout.image_height_mm)).abs() < 1e-3);
        // Last page: image bottom on or above the page bottom.
        assert!(third >= -1e-3);
    }

    #[test]
    fn test_zero_dimension_capture_is_rejected() {
        assert!(paginate(0, 100).is_err());
        assert!(paginate(100, 0).is_err());
    }

    #[test]
    fn test_dpi_maps_pixel_width_to_page_width() {
        let layout = paginate(2100, 100).unwrap();
        // 2100 px over 210 mm is 10 px/mm = 254 dpi.
        assert!((layout.dpi - 254.0).abs() < 1e-3);
    }

    #[test]
    fn test_render_pdf_produces_a_pdf_header() {
        // 4x4 opaque PNG.
        let mut png = Vec::new();
        let img = image_crate::RgbaImage::from_pixel(4, 4, image_crate::Rgba([255, 0, 0, 255]));
        image_crate::DynamicImage::ImageRgba8(img)
            .write_to(
                &mut std::io::Cursor::new(&mut png),
                image_crate::ImageFormat::Png,
            )
            .unwrap();
        let bytes = render_pdf(&png, "test").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
