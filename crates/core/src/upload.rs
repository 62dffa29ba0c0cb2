//! Uploaded file inspection.
//!
//! The HTTP layer turns a multipart file part into an [`UploadedFile`]; the
//! validator only needs its size and detected format.

use image::ImageFormat;

/// Image formats accepted for product pictures.
pub const ACCEPTED_IMAGE_FORMATS: &[ImageFormat] = &[ImageFormat::Jpeg, ImageFormat::Png];

/// A file received with a request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl UploadedFile {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            file_name: None,
            content_type: None,
            data,
        }
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    /// Format detected from the file's magic bytes.
    pub fn detected_format(&self) -> Option<ImageFormat> {
        image::guess_format(&self.data).ok()
    }

    /// Whether the content is one of [`ACCEPTED_IMAGE_FORMATS`].
    pub fn is_accepted_image(&self) -> bool {
        self.detected_format()
            .is_some_and(|format| ACCEPTED_IMAGE_FORMATS.contains(&format))
    }

    /// Canonical file extension for the detected image format.
    pub fn image_extension(&self) -> Option<&'static str> {
        match self.detected_format()? {
            ImageFormat::Jpeg => Some("jpeg"),
            ImageFormat::Png => Some("png"),
            _ => None,
        }
    }
}

/// Magic-byte prefixes, used by tests across the workspace to fabricate
/// uploads of a given size.
pub mod fixtures {
    pub const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    pub const JPEG_SIGNATURE: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0];

    /// A buffer of exactly `len` bytes starting with `signature`.
    pub fn padded(signature: &[u8], len: usize) -> Vec<u8> {
        let mut data = signature.to_vec();
        data.resize(len.max(signature.len()), 0);
        data
    }
}
