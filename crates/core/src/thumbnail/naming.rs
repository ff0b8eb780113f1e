//! Object naming.
//!
//! The store's naming is the only link between an original and its
//! thumbnail: `thumb_` + original name. No index exists anywhere else.

use uuid::Uuid;

/// Tag prepended to an original's object name to name its thumbnail.
pub const THUMBNAIL_PREFIX: &str = "thumb_";

/// Name used when the client sent an empty filename.
const FALLBACK_FILENAME: &str = "upload";

/// Object name of an original: `{token}_{sanitized_filename}`.
#[must_use]
pub fn original_object_name(token: Uuid, filename: &str) -> String {
    let sanitized = sanitize_filename(filename);
    let filename = if sanitized.is_empty() {
        FALLBACK_FILENAME
    } else {
        sanitized.as_str()
    };
    format!("{token}_{filename}")
}

/// Object name of the thumbnail paired with `original_name`.
#[must_use]
pub fn thumbnail_object_name(original_name: &str) -> String {
    format!("{THUMBNAIL_PREFIX}{original_name}")
}

/// Make a client filename safe to embed in an object name and a URL.
///
/// Keeps ASCII alphanumerics and `.`, `-`, `_`; anything else becomes `_`.
/// A name made only of dots would be a path component and is replaced
/// entirely.
fn sanitize_filename(filename: &str) -> String {
    let sanitized: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.chars().all(|c| c == '.') {
        sanitized.replace('.', "_")
    } else {
        sanitized
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    // Sanitized names only ever contain storage-safe characters.
    proptest! {
        #[test]
        fn prop_sanitized_filename_safe_chars(filename in ".*") {
            let sanitized = sanitize_filename(&filename);

            for c in sanitized.chars() {
                let is_safe = c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_';
                prop_assert!(is_safe, "Unexpected character in sanitized filename: {}", c);
            }
        }
    }

    // The thumbnail name is always the tag followed by the original name,
    // and the original name never contains a path separator.
    proptest! {
        #[test]
        fn prop_thumbnail_name_is_tagged_original(filename in ".{0,64}") {
            let original = original_object_name(Uuid::new_v4(), &filename);
            let thumbnail = thumbnail_object_name(&original);

            prop_assert!(!original.contains('/'));
            prop_assert_eq!(thumbnail.strip_prefix(THUMBNAIL_PREFIX), Some(original.as_str()));
        }
    }

    // Distinct tokens never produce the same name for the same file.
    proptest! {
        #[test]
        fn prop_names_unique_per_token(filename in "[a-zA-Z0-9]{1,20}\\.(png|jpg)") {
            let first = original_object_name(Uuid::new_v4(), &filename);
            let second = original_object_name(Uuid::new_v4(), &filename);
            prop_assert_ne!(first, second);
        }
    }
}
