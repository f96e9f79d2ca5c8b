//! In-memory collaborators: the headless host implementation.
//!
//! `MemoryImageStore` stands in for a filesystem and `RecordingTextures` for
//! a GPU. Hosts that run without a window (and the core's own tests) drive
//! the engine through these.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use crate::api::types::TextureHandle;
use crate::assets::store::{AssetError, ImageStore, RawImage, TextureStore};

/// Image store over an in-memory path map with settable timestamps.
#[derive(Debug, Default)]
pub struct MemoryImageStore {
    entries: HashMap<PathBuf, (RawImage, SystemTime)>,
}

impl MemoryImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the image at `path`, stamped `seconds` after the
    /// epoch.
    pub fn insert(&mut self, path: impl Into<PathBuf>, image: RawImage, seconds: u64) {
        self.entries
            .insert(path.into(), (image, stamp(seconds)));
    }

    /// Bump the stored timestamp without touching the pixels, simulating an
    /// external edit.
    pub fn touch(&mut self, path: &Path, seconds: u64) {
        if let Some(entry) = self.entries.get_mut(path) {
            entry.1 = stamp(seconds);
        }
    }

    /// Forget the entry at `path`, simulating a deleted file.
    pub fn remove(&mut self, path: &Path) {
        self.entries.remove(path);
    }
}

fn stamp(seconds: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(seconds)
}

impl ImageStore for MemoryImageStore {
    fn load(
        &mut self,
        path: &Path,
        flip_vertical: bool,
    ) -> Result<(RawImage, SystemTime), AssetError> {
        let (image, modified) = self
            .entries
            .get(path)
            .ok_or_else(|| AssetError::NotFound(path.to_path_buf()))?;
        let image = if flip_vertical {
            image.flipped_vertical()
        } else {
            image.clone()
        };
        Ok((image, *modified))
    }

    fn modified(&self, path: &Path) -> Result<SystemTime, AssetError> {
        self.entries
            .get(path)
            .map(|entry| entry.1)
            .ok_or_else(|| AssetError::NotFound(path.to_path_buf()))
    }
}

/// Texture store that allocates sequential handles and records traffic so
/// tests can assert upload/release ordering.
#[derive(Debug)]
pub struct RecordingTextures {
    next: u32,
    live: Vec<TextureHandle>,
    pub uploads: u32,
    pub releases: u32,
}

impl RecordingTextures {
    pub fn new() -> Self {
        Self {
            next: 1,
            live: Vec::new(),
            uploads: 0,
            releases: 0,
        }
    }

    /// Number of currently live (uploaded, not yet released) textures.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn is_live(&self, handle: TextureHandle) -> bool {
        self.live.contains(&handle)
    }
}

impl Default for RecordingTextures {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureStore for RecordingTextures {
    fn upload(&mut self, _image: &RawImage) -> TextureHandle {
        let handle = TextureHandle(self.next);
        self.next += 1;
        self.live.push(handle);
        self.uploads += 1;
        handle
    }

    fn release(&mut self, handle: TextureHandle) {
        self.live.retain(|h| *h != handle);
        self.releases += 1;
    }
}
