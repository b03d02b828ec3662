//! Conversion of content into `data:` URLs

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Largest content, in bytes, that is turned into a data URL
pub const MAX_DATA_URL_SIZE: usize = 1024 * 1024;

/// Build a `data:` URL for `content`
///
/// Returns `None` when the content is absent or larger than
/// [`MAX_DATA_URL_SIZE`]. `content_encoded` marks content that is already
/// base64 encoded; it is not encoded here.
pub fn content_as_data_url(
    content: Option<&str>,
    mime_type: &str,
    content_encoded: bool,
    charset: Option<&str>,
) -> Option<String> {
    let content = content?;
    if content.len() > MAX_DATA_URL_SIZE {
        log::debug!(
            "Content of {} bytes exceeds data URL limit of {} bytes",
            content.len(),
            MAX_DATA_URL_SIZE
        );
        return None;
    }

    let mut url = format!("data:{mime_type}");
    if let Some(charset) = charset.filter(|c| !c.is_empty()) {
        url.push_str(";charset=");
        url.push_str(charset);
    }
    if content_encoded {
        url.push_str(";base64");
    }
    url.push(',');
    url.push_str(content);

    Some(url)
}

/// Base64 encode raw bytes into a `data:` URL
///
/// The size limit applies to the encoded form. `charset` describes the
/// decoded bytes, as for [`content_as_data_url`].
pub fn bytes_as_data_url(bytes: &[u8], mime_type: &str, charset: Option<&str>) -> Option<String> {
    let encoded = STANDARD.encode(bytes);
    content_as_data_url(Some(&encoded), mime_type, true, charset)
}
