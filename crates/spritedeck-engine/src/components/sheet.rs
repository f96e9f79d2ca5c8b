//! The sprite-sheet asset and its grid configuration.

use std::path::PathBuf;
use std::time::SystemTime;

use crate::api::types::TextureHandle;

/// GPU-resident sheet pixels behind an opaque host handle, plus the raw
/// dimensions captured at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Texture {
    pub handle: TextureHandle,
    pub width: u32,
    pub height: u32,
}

/// Identity and texture of a loaded sheet.
///
/// `modified` equals the backing store's modification time after every
/// successful (re)load; the hot-reload watcher compares against it.
#[derive(Debug, Clone)]
pub struct SheetSource {
    /// Path of the backing file.
    pub path: PathBuf,
    /// Modification time observed at the last successful (re)load.
    pub modified: SystemTime,
    /// Current texture. Replaced wholesale on reload, never mutated.
    pub texture: Texture,
}

/// The single sprite asset slot. Empty until a file is dropped.
#[derive(Debug, Clone, Default)]
pub struct SpriteSheet {
    pub source: Option<SheetSource>,
}

impl SpriteSheet {
    pub fn new() -> Self {
        Self { source: None }
    }

    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }

    pub fn texture(&self) -> Option<Texture> {
        self.source.as_ref().map(|s| s.texture)
    }

    /// Sheet dimensions in pixels, if loaded.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.texture().map(|t| (t.width, t.height))
    }

    /// Install a freshly loaded sheet, returning the displaced texture (if
    /// any) so the caller can release it within the same tick.
    pub fn replace(
        &mut self,
        path: PathBuf,
        modified: SystemTime,
        texture: Texture,
    ) -> Option<Texture> {
        let old = self.source.take().map(|s| s.texture);
        self.source = Some(SheetSource {
            path,
            modified,
            texture,
        });
        old
    }
}

/// Validated sheet grid: horizontal slices (stack depth) and vertical slices
/// (animation frame count). Both are always at least 1; construction clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    h_frames: u32,
    v_frames: u32,
}

impl GridConfig {
    /// Build a grid from raw user input. Values below 1 are clamped to 1,
    /// which is the sole guard against division by zero in the slicer.
    pub fn new(h_frames: i32, v_frames: i32) -> Self {
        Self {
            h_frames: h_frames.max(1) as u32,
            v_frames: v_frames.max(1) as u32,
        }
    }

    pub fn h_frames(&self) -> u32 {
        self.h_frames
    }

    pub fn v_frames(&self) -> u32 {
        self.v_frames
    }

    /// Frame width in sheet pixels. Truncating division; remainder columns
    /// are dropped.
    pub fn frame_width(&self, sheet_width: u32) -> u32 {
        sheet_width / self.h_frames
    }

    /// Frame height in sheet pixels. Truncating division; remainder rows are
    /// dropped.
    pub fn frame_height(&self, sheet_height: u32) -> u32 {
        sheet_height / self.v_frames
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            h_frames: 1,
            v_frames: 1,
        }
    }
}
