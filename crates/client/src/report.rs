//! Plain-text rendering of upload results.

use std::fmt::Write as _;

use crate::client::{Preview, ThumbnailUrls};
use crate::error::ClientError;
use crate::selection::ImageSelection;

/// Headline printed after a successful upload.
pub const SUCCESS_MESSAGE: &str = "Thumbnail generated successfully!";

/// Describe the selected original.
#[must_use]
pub fn render_selection(selection: &ImageSelection) -> String {
    format!(
        "Original image: {} ({}x{}, {} bytes)",
        selection.filename,
        selection.width,
        selection.height,
        selection.data.len()
    )
}

/// Render the outcome of a successful upload.
///
/// `preview` is absent when the thumbnail could not be fetched back; the
/// download links are still shown.
#[must_use]
pub fn render_success(urls: &ThumbnailUrls, preview: Option<&Preview>, show_urls: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{SUCCESS_MESSAGE}");
    if let Some(preview) = preview {
        let _ = writeln!(out, "Thumbnail: {}x{}", preview.width, preview.height);
    }
    let _ = writeln!(out, "Download:");
    let _ = writeln!(out, "  [Download Thumbnail]({})", urls.thumbnail_url);
    let _ = writeln!(out, "  [Download Original]({})", urls.original_url);
    if show_urls {
        let _ = writeln!(out, "Image URLs:");
        let _ = writeln!(out, "  Original image URL: {}", urls.original_url);
        let _ = writeln!(out, "  Thumbnail URL: {}", urls.thumbnail_url);
    }
    out
}

/// Render a failure the way the user should see it.
#[must_use]
pub fn render_failure(error: &ClientError) -> String {
    match error {
        ClientError::Service { body, .. } => format!("Error: {body}"),
        ClientError::Transport(e) => format!("Error connecting to thumbnail service: {e}"),
        other => format!("Error: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls() -> ThumbnailUrls {
        ThumbnailUrls {
            original_url: "http://h/originalimages/u_cat.jpg".to_string(),
            thumbnail_url: "http://h/thumbnails/thumb_u_cat.jpg".to_string(),
        }
    }

    #[test]
    fn test_render_success_with_preview() {
        let preview = Preview {
            data: vec![1, 2, 3],
            width: 128,
            height: 64,
        };
        let out = render_success(&urls(), Some(&preview), false);

        assert!(out.starts_with(SUCCESS_MESSAGE));
        assert!(out.contains("Thumbnail: 128x64"));
        assert!(out.contains("[Download Thumbnail](http://h/thumbnails/thumb_u_cat.jpg)"));
        assert!(out.contains("[Download Original](http://h/originalimages/u_cat.jpg)"));
        assert!(!out.contains("Image URLs:"));
    }

    #[test]
    fn test_render_success_shows_raw_urls_on_request() {
        let out = render_success(&urls(), None, true);

        assert!(!out.contains("Thumbnail: "));
        assert!(out.contains("Original image URL: http://h/originalimages/u_cat.jpg"));
        assert!(out.contains("Thumbnail URL: http://h/thumbnails/thumb_u_cat.jpg"));
    }

    #[test]
    fn test_render_failure_uses_service_body() {
        let err = ClientError::Service {
            status: 400,
            body: "No file uploaded".to_string(),
        };
        assert_eq!(render_failure(&err), "Error: No file uploaded");
    }

    #[test]
    fn test_render_failure_other() {
        let err = ClientError::unsupported_extension("gif");
        assert_eq!(
            render_failure(&err),
            "Error: unsupported file type 'gif': choose a jpg, jpeg or png image"
        );
    }

    #[test]
    fn test_render_selection() {
        let selection = ImageSelection {
            filename: "cat.png".to_string(),
            content_type: "image/png",
            data: vec![0; 42],
            width: 300,
            height: 200,
        };
        assert_eq!(
            render_selection(&selection),
            "Original image: cat.png (300x200, 42 bytes)"
        );
    }
}
