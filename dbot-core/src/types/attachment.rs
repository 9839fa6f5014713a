//! Outgoing file attachments.

/// How the platform should present an attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttachmentKind {
    /// Inline image; the platform may recompress it.
    #[default]
    Photo,
    /// Generic file, delivered byte-for-byte.
    Document,
}

/// One file read fully into memory, ready to be sent.
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub data: Vec<u8>,
    pub kind: AttachmentKind,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, data: Vec<u8>, kind: AttachmentKind) -> Self {
        Self {
            file_name: file_name.into(),
            data,
            kind,
        }
    }
}

// Bytes are left out so logging an attachment stays short.
impl std::fmt::Debug for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("bytes", &self.data.len())
            .field("kind", &self.kind)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_omits_bytes() {
        let attachment = Attachment::new("a.png", vec![1, 2, 3], AttachmentKind::Photo);
        let debug = format!("{:?}", attachment);
        assert!(debug.contains("a.png"));
        assert!(debug.contains("bytes: 3"));
        assert!(!debug.contains("[1, 2, 3]"));
    }
}
