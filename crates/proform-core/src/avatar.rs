//! Avatar encoding: turns a selected image file into a self-describing
//! `data:` URL that can be stored inline and displayed immediately.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("could not read image file: {0}")]
    Io(#[from] std::io::Error),
    #[error("image file is empty")]
    Empty,
    #[error("unrecognized image format")]
    UnsupportedImage,
}

/// Reads a local image file and encodes it for inline storage. Resolves
/// exactly once per call; fails with [`ReadError`] when the file cannot be
/// read or is not a recognizable image.
pub async fn encode_file(path: impl AsRef<Path>) -> Result<String, ReadError> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    encode_bytes(&bytes)
}

/// Encodes in-memory image contents as `data:<mime>;base64,<payload>`.
pub fn encode_bytes(bytes: &[u8]) -> Result<String, ReadError> {
    if bytes.is_empty() {
        return Err(ReadError::Empty);
    }
    let mime = sniff_mime(bytes).ok_or(ReadError::UnsupportedImage)?;
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => Some("image/png"),
        [0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
        [b'G', b'I', b'F', b'8', ..] => Some("image/gif"),
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some("image/webp"),
        [b'B', b'M', ..] => Some("image/bmp"),
        _ => None,
    }
}
