use std::sync::Arc;

/// Decoded RGBA8 pixel data plus the naming metadata persistence relies on.
///
/// Read-only after load; shared freely across labels via `ImageHandle`.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
    /// Logical name (e.g. an atlas key). May be empty.
    pub name: String,
    /// Source URI or path the image was loaded from. May be empty.
    pub file_name: String,
}

pub type ImageHandle = Arc<Image>;

impl Image {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
            name: String::new(),
            file_name: String::new(),
        }
    }

    /// Placeholder-sized image with no pixel payload, for tests and for
    /// symbols that only care about intrinsic dimensions.
    pub fn sized(width: u32, height: u32) -> Self {
        Self::new(width, height, Vec::new())
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn into_handle(self) -> ImageHandle {
        Arc::new(self)
    }
}
