//! MIME type classification used by the media-related menu rules.
//!
//! Comparisons are ASCII case-insensitive; MIME parameters such as
//! `; charset=utf-8` are ignored.

/// Generic type servers report when they could not detect one.
pub const OCTET_STREAM: &str = "application/octet-stream";

pub const SVG: &str = "image/svg+xml";

/// Strip parameters and surrounding whitespace.
fn essence(mime_type: &str) -> &str {
    mime_type.split(';').next().unwrap_or_default().trim()
}

fn has_top_level(mime_type: &str, top_level: &str) -> bool {
    essence(mime_type)
        .split_once('/')
        .is_some_and(|(t, _)| t.eq_ignore_ascii_case(top_level))
}

/// Raster or vector image, excluding DjVu documents.
pub fn is_image(mime_type: &str) -> bool {
    has_top_level(mime_type, "image") && !essence(mime_type).to_ascii_lowercase().contains("djvu")
}

pub fn is_svg(mime_type: &str) -> bool {
    essence(mime_type).eq_ignore_ascii_case(SVG)
}

pub fn is_video(mime_type: &str) -> bool {
    has_top_level(mime_type, "video")
}

pub fn is_audio(mime_type: &str) -> bool {
    has_top_level(mime_type, "audio")
}

/// Audio or video content that can be streamed.
pub fn is_media(mime_type: &str) -> bool {
    is_audio(mime_type) || is_video(mime_type)
}

/// Look up the MIME type for a file name's extension.
pub fn guess_from_name(file_name: &str) -> Option<&'static str> {
    mime_guess::from_path(file_name).first_raw()
}

/// `declared` unless it is empty or [`OCTET_STREAM`], in which case the
/// type is guessed from `file_name`. Falls back to `declared` when the
/// extension is unknown.
pub fn effective_mime_type<'a>(declared: &'a str, file_name: &str) -> &'a str {
    let declared_essence = essence(declared);
    if declared_essence.is_empty() || declared_essence.eq_ignore_ascii_case(OCTET_STREAM) {
        if let Some(guessed) = guess_from_name(file_name) {
            return guessed;
        }
    }
    declared
}
