//! Collaborator contracts for image decoding and GPU texture ownership.
//!
//! The core never touches the filesystem or the GPU itself; hosts implement
//! these traits and the core calls through them once per tick.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use thiserror::Error;

use crate::api::types::TextureHandle;

/// Errors crossing the image-store boundary.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },
}

/// Decoded image data: tightly packed RGBA8 rows, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RawImage {
    /// Solid-color image. Mainly for headless hosts and tests.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            pixels.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// A copy with the row order reversed.
    pub fn flipped_vertical(&self) -> Self {
        let stride = self.width as usize * 4;
        let mut pixels = Vec::with_capacity(self.pixels.len());
        for row in self.pixels.chunks_exact(stride).rev() {
            pixels.extend_from_slice(row);
        }
        Self {
            width: self.width,
            height: self.height,
            pixels,
        }
    }
}

/// Resolves a path to decoded pixels and the file's modification time.
///
/// Sheets are stored top-down but sampled bottom-up by the rendering
/// convention used here, so loads request a vertical flip.
pub trait ImageStore {
    fn load(
        &mut self,
        path: &Path,
        flip_vertical: bool,
    ) -> Result<(RawImage, SystemTime), AssetError>;

    /// Current modification time of the backing file.
    fn modified(&self, path: &Path) -> Result<SystemTime, AssetError>;
}

/// Owns GPU textures. Upload hands back an opaque handle; release frees it.
pub trait TextureStore {
    fn upload(&mut self, image: &RawImage) -> TextureHandle;
    fn release(&mut self, handle: TextureHandle);
}
