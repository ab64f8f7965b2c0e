//! Opaque owned call records.

/// One recorded API call: an opaque binary blob plus its length.
///
/// The interception shim produces these; the tracker only stores,
/// byte-duplicates, and releases them. The payload is never parsed.
/// `Clone` copies exactly `size()` bytes into fresh storage, and the
/// bytes are released exactly once when the record is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    bytes: Box<[u8]>,
}

impl CallRecord {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes: bytes.into_boxed_slice(),
        }
    }

    /// Reported size of the record in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for CallRecord {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}
