//! Local image selection.

use std::path::Path;

use image::GenericImageView;

use crate::error::{ClientError, ClientResult};

/// File extensions the client offers for upload.
///
/// A convenience filter only; the service decides what it can decode.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// An image picked from disk and decoded locally.
#[derive(Debug, Clone)]
pub struct ImageSelection {
    /// File name sent along with the upload.
    pub filename: String,
    /// MIME type derived from the extension.
    pub content_type: &'static str,
    /// Raw file bytes.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageSelection {
    /// Read and decode the image at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is not accepted, the file cannot be
    /// read, or its content does not decode.
    pub async fn load(path: impl AsRef<Path>) -> ClientResult<Self> {
        let path = path.as_ref();
        let content_type = content_type_for(path)?;

        let data = tokio::fs::read(path).await.map_err(|source| ClientError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let (width, height) = image::load_from_memory(&data)?.dimensions();

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            filename,
            content_type,
            data,
            width,
            height,
        })
    }
}

/// MIME type for an accepted extension.
fn content_type_for(path: &Path) -> ClientResult<&'static str> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "png" => Ok("image/png"),
        _ => Err(ClientError::unsupported_extension(extension)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, RgbaImage};
    use rstest::rstest;

    #[rstest]
    #[case("cat.jpg", "image/jpeg")]
    #[case("cat.JPEG", "image/jpeg")]
    #[case("dir.with.dots/cat.png", "image/png")]
    fn test_accepted_extensions(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(content_type_for(Path::new(path)).unwrap(), expected);
    }

    #[rstest]
    #[case("cat.gif", "gif")]
    #[case("cat.webp", "webp")]
    #[case("cat", "")]
    fn test_rejected_extensions(#[case] path: &str, #[case] extension: &str) {
        let err = content_type_for(Path::new(path)).unwrap_err();
        assert!(
            matches!(err, ClientError::UnsupportedExtension { extension: ref e } if e == extension)
        );
    }

    #[tokio::test]
    async fn test_load_decodes_locally() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        DynamicImage::ImageRgba8(RgbaImage::new(64, 32))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let selection = ImageSelection::load(&path).await.expect("should load");
        assert_eq!(selection.filename, "icon.png");
        assert_eq!(selection.content_type, "image/png");
        assert_eq!((selection.width, selection.height), (64, 32));
        assert!(!selection.data.is_empty());
    }

    #[tokio::test]
    async fn test_load_rejects_corrupt_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.jpg");
        std::fs::write(&path, b"this is text").unwrap();

        let err = ImageSelection::load(&path).await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = ImageSelection::load("/definitely/not/here.png")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Io { .. }));
    }

    #[tokio::test]
    async fn test_load_checks_extension_before_reading() {
        let err = ImageSelection::load("/definitely/not/here.bmp")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::UnsupportedExtension { .. }));
    }
}
