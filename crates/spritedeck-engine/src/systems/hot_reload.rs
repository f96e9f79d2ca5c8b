//! Hot reload: refresh the sheet texture when its backing file changes.

use crate::assets::store::{ImageStore, TextureStore};
use crate::components::sheet::{SpriteSheet, Texture};

/// Poll the backing file once and refresh the sheet texture when its
/// modification time no longer matches. Returns true when a reload happened.
///
/// With no sheet loaded this is a no-op; it never stats an empty path. On
/// any failure the previous texture and timestamp are kept unchanged, so the
/// next tick retries. The new texture is uploaded before the old one is
/// released, keeping the swap atomic with respect to the render step.
pub fn check_and_reload<I: ImageStore, T: TextureStore>(
    sheet: &mut SpriteSheet,
    images: &mut I,
    textures: &mut T,
) -> bool {
    let Some(source) = sheet.source.as_mut() else {
        return false;
    };

    let modified = match images.modified(&source.path) {
        Ok(time) => time,
        Err(err) => {
            log::warn!("watch failed for {}: {}", source.path.display(), err);
            return false;
        }
    };
    if modified == source.modified {
        return false;
    }

    match images.load(&source.path, true) {
        Ok((image, stamp)) => {
            let fresh = Texture {
                handle: textures.upload(&image),
                width: image.width,
                height: image.height,
            };
            let old = std::mem::replace(&mut source.texture, fresh);
            textures.release(old.handle);
            source.modified = stamp;
            log::debug!(
                "reloaded {} ({}x{})",
                source.path.display(),
                image.width,
                image.height
            );
            true
        }
        Err(err) => {
            log::warn!("reload failed for {}: {}", source.path.display(), err);
            false
        }
    }
}
