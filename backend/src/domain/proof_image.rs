//! Proof-of-transfer images.
//!
//! Uploaded files are embedded in the stored blob as base64 data URIs, so an
//! image costs roughly 4/3 of its file size in storage. The size limit is
//! checked against the raw file.

use std::rc::Rc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProofImageError {
    #[error("the selected file is empty")]
    Empty,

    #[error("'{0}' is not an image type")]
    UnsupportedType(String),

    #[error("image is {size} bytes, the limit is {max}")]
    TooLarge { size: usize, max: usize },
}

impl ProofImageError {
    /// Message shown under the upload field
    pub fn user_message(&self) -> String {
        match self {
            ProofImageError::Empty => "File bukti transfer kosong".to_string(),
            ProofImageError::UnsupportedType(_) => "Bukti transfer harus berupa gambar".to_string(),
            ProofImageError::TooLarge { max, .. } => format!(
                "Ukuran gambar terlalu besar (maksimal {} KB)",
                max / 1024
            ),
        }
    }
}

/// An embeddable image reference: a `data:` URI or a plain URL. Clones share
/// the encoded text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofImage(Rc<str>);

impl ProofImage {
    /// Encode raw file bytes as a base64 data URI
    pub fn from_bytes(mime_type: &str, bytes: &[u8], max_bytes: usize) -> Result<Self, ProofImageError> {
        if bytes.is_empty() {
            return Err(ProofImageError::Empty);
        }
        let mime_type = mime_type.trim().to_ascii_lowercase();
        if !mime_type.starts_with("image/") {
            return Err(ProofImageError::UnsupportedType(mime_type));
        }
        if bytes.len() > max_bytes {
            return Err(ProofImageError::TooLarge {
                size: bytes.len(),
                max: max_bytes,
            });
        }

        Ok(Self(Rc::from(format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes)))))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0.to_string()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
