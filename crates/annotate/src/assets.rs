use std::collections::BTreeMap;

use scene::{Image, ImageHandle};

/// Opaque options forwarded to the asset loader (search paths, cache
/// directives, auth hints). The annotation engine never interprets them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LoaderOptions {
    pub entries: BTreeMap<String, String>,
}

impl LoaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    ResourceNotFound { uri: String },
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::ResourceNotFound { uri } => write!(f, "resource not found: {uri}"),
        }
    }
}

impl std::error::Error for AssetError {}

/// External image resolution. Implementations may block; the reference
/// behavior resolves synchronously before geometry building proceeds.
pub trait AssetLoader {
    fn resolve(&self, uri: &str, options: Option<&LoaderOptions>)
    -> Result<ImageHandle, AssetError>;
}

/// Loader that resolves nothing. Labels built against it degrade to
/// text-only rendering.
#[derive(Debug, Default, Copy, Clone)]
pub struct NullLoader;

impl AssetLoader for NullLoader {
    fn resolve(
        &self,
        uri: &str,
        _options: Option<&LoaderOptions>,
    ) -> Result<ImageHandle, AssetError> {
        Err(AssetError::ResourceNotFound { uri: uri.into() })
    }
}

/// In-memory loader keyed by exact URI, for tests and embedded assets.
#[derive(Debug, Default, Clone)]
pub struct MemoryLoader {
    images: BTreeMap<String, ImageHandle>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, uri: impl Into<String>, image: Image) {
        self.images.insert(uri.into(), image.into_handle());
    }
}

impl AssetLoader for MemoryLoader {
    fn resolve(
        &self,
        uri: &str,
        _options: Option<&LoaderOptions>,
    ) -> Result<ImageHandle, AssetError> {
        self.images
            .get(uri)
            .cloned()
            .ok_or_else(|| AssetError::ResourceNotFound { uri: uri.into() })
    }
}
