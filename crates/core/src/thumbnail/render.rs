//! Decoding, bounding-box resizing and JPEG encoding.

use bytes::Bytes;
use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;

use super::error::ThumbnailError;
use super::types::Thumbnail;

/// Longest side of a thumbnail in pixels.
pub const THUMBNAIL_MAX_DIMENSION: u32 = 128;

/// JPEG quality of encoded thumbnails.
pub const JPEG_QUALITY: u8 = 75;

/// Dimensions of `width`×`height` scaled to fit within `max`×`max`.
///
/// Aspect ratio is kept, the longer side becomes `max`, the shorter side is
/// rounded to the nearest pixel and never drops below one. Images already
/// within bounds come back unchanged.
#[must_use]
pub fn bounded_dimensions(width: u32, height: u32, max: u32) -> (u32, u32) {
    if width <= max && height <= max {
        return (width, height);
    }

    let scale = |short: u32, long: u32| -> u32 {
        let (short, long, max) = (u64::from(short), u64::from(long), u64::from(max));
        let scaled = (short * max + long / 2) / long;
        // scaled <= max, which fits in u32
        u32::try_from(scaled.max(1)).unwrap_or(u32::MAX)
    };

    if width >= height {
        (max, scale(height, width))
    } else {
        (scale(width, height), max)
    }
}

/// Decode `data`, shrink it into the thumbnail bounding box and re-encode
/// it as JPEG.
///
/// # Errors
///
/// Returns `Decode` when the bytes are not a supported image and `Encode`
/// when JPEG encoding fails.
pub fn render_thumbnail(data: &[u8]) -> Result<Thumbnail, ThumbnailError> {
    let image = image::load_from_memory(data).map_err(ThumbnailError::Decode)?;

    let (width, height) =
        bounded_dimensions(image.width(), image.height(), THUMBNAIL_MAX_DIMENSION);
    let resized = if (width, height) == (image.width(), image.height()) {
        image
    } else {
        image.resize_exact(width, height, FilterType::Lanczos3)
    };

    // JPEG has no alpha channel.
    let rgb = DynamicImage::ImageRgb8(resized.to_rgb8());

    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY);
    rgb.write_with_encoder(encoder)
        .map_err(ThumbnailError::Encode)?;

    Ok(Thumbnail {
        data: Bytes::from(buf),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
    use rstest::rstest;
    use std::io::Cursor;

    fn encode(image: DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        image.write_to(&mut buf, format).expect("encode fixture");
        buf.into_inner()
    }

    fn jpeg(width: u32, height: u32) -> Vec<u8> {
        let image = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        encode(DynamicImage::ImageRgb8(image), ImageFormat::Jpeg)
    }

    #[rstest]
    #[case((1000, 500), (128, 64))]
    #[case((500, 1000), (64, 128))]
    #[case((128, 128), (128, 128))]
    #[case((256, 256), (128, 128))]
    #[case((100, 50), (100, 50))]
    #[case((1, 1), (1, 1))]
    #[case((10_000, 10), (128, 1))]
    #[case((129, 100), (128, 99))]
    fn test_bounded_dimensions(#[case] input: (u32, u32), #[case] expected: (u32, u32)) {
        assert_eq!(bounded_dimensions(input.0, input.1, 128), expected);
    }

    #[test]
    fn test_render_landscape_jpeg() {
        let thumbnail = render_thumbnail(&jpeg(1000, 500)).expect("should render");
        assert_eq!((thumbnail.width, thumbnail.height), (128, 64));

        let decoded = image::load_from_memory(&thumbnail.data).expect("valid image");
        assert_eq!((decoded.width(), decoded.height()), (128, 64));
        assert_eq!(
            image::guess_format(&thumbnail.data).expect("known format"),
            ImageFormat::Jpeg
        );
    }

    #[test]
    fn test_render_does_not_upscale() {
        let thumbnail = render_thumbnail(&jpeg(40, 30)).expect("should render");
        assert_eq!((thumbnail.width, thumbnail.height), (40, 30));
    }

    #[test]
    fn test_render_png_with_alpha_becomes_jpeg() {
        let image = RgbaImage::from_pixel(300, 200, Rgba([10, 200, 30, 90]));
        let png = encode(DynamicImage::ImageRgba8(image), ImageFormat::Png);

        let thumbnail = render_thumbnail(&png).expect("should render");
        assert_eq!((thumbnail.width, thumbnail.height), (128, 85));
        assert_eq!(
            image::guess_format(&thumbnail.data).expect("known format"),
            ImageFormat::Jpeg
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let source = jpeg(640, 480);
        let first = render_thumbnail(&source).expect("should render");
        let second = render_thumbnail(&source).expect("should render");
        assert_eq!((first.width, first.height), (second.width, second.height));
        assert_eq!(first.data, second.data);
    }

    #[test]
    fn test_render_rejects_garbage() {
        let err = render_thumbnail(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ThumbnailError::Decode(_)));
    }

    #[test]
    fn test_render_rejects_truncated_image() {
        let mut source = jpeg(200, 200);
        source.truncate(64);
        let err = render_thumbnail(&source).unwrap_err();
        assert!(matches!(err, ThumbnailError::Decode(_)));
    }
}
