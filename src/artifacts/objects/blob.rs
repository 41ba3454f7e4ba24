//! Git blob object
//!
//! Blobs hold raw file content and nothing else. Names and permissions never
//! take part in the hash, so two blobs compare equal iff their bytes do.
//!
//! ## Format
//!
//! `blob <size>\0<content>`

use crate::artifacts::objects::object::{Object, Packable};
use bytes::Bytes;
use derive_new::new;

/// File content wrapped for hashing
#[derive(Debug, Clone, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.content.len()
    }
}

impl Packable for Blob {
    fn serialize(&self) -> Bytes {
        let header = format!("{} {}\0", self.object_type(), self.content.len());

        let mut blob_bytes = Vec::with_capacity(header.len() + self.content.len());
        blob_bytes.extend_from_slice(header.as_bytes());
        blob_bytes.extend_from_slice(&self.content);

        Bytes::from(blob_bytes)
    }
}

impl Object for Blob {
    fn object_type(&self) -> &'static str {
        "blob"
    }
}
