use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::SystemTime;

use spritedeck_engine::{AssetError, ImageStore, RawImage};

/// Image store backed by the local filesystem.
///
/// Decodes any raster format the `image` crate understands. The timestamp is
/// taken before the file is read, so an edit racing the load shows up as one
/// more reload on the next watch tick rather than being missed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsImageStore;

impl FsImageStore {
    pub fn new() -> Self {
        Self
    }
}

fn io_error(path: &Path, source: std::io::Error) -> AssetError {
    if source.kind() == ErrorKind::NotFound {
        AssetError::NotFound(path.to_path_buf())
    } else {
        AssetError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl ImageStore for FsImageStore {
    fn load(
        &mut self,
        path: &Path,
        flip_vertical: bool,
    ) -> Result<(RawImage, SystemTime), AssetError> {
        let modified = self.modified(path)?;
        let bytes = fs::read(path).map_err(|source| io_error(path, source))?;

        let mut decoded = image::load_from_memory(&bytes).map_err(|err| AssetError::Decode {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        if flip_vertical {
            decoded = decoded.flipv();
        }

        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        log::debug!("decoded {} ({}x{})", path.display(), width, height);

        Ok((
            RawImage {
                width,
                height,
                pixels: rgba.into_raw(),
            },
            modified,
        ))
    }

    fn modified(&self, path: &Path) -> Result<SystemTime, AssetError> {
        let metadata = fs::metadata(path).map_err(|source| io_error(path, source))?;
        metadata.modified().map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::fs::File;
    use std::time::Duration;

    fn write_png(path: &Path, top: Rgba<u8>, bottom: Rgba<u8>) {
        let mut img = RgbaImage::new(2, 2);
        for x in 0..2 {
            img.put_pixel(x, 0, top);
            img.put_pixel(x, 1, bottom);
        }
        img.save(path).unwrap();
    }

    #[test]
    fn load_decodes_rgba_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.png");
        write_png(&path, Rgba([255, 0, 0, 255]), Rgba([0, 0, 255, 255]));

        let (img, _) = FsImageStore::new().load(&path, false).unwrap();
        assert_eq!((img.width, img.height), (2, 2));
        assert_eq!(&img.pixels[0..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn flip_puts_the_bottom_row_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.png");
        write_png(&path, Rgba([255, 0, 0, 255]), Rgba([0, 0, 255, 255]));

        let (img, _) = FsImageStore::new().load(&path, true).unwrap();
        assert_eq!(&img.pixels[0..4], &[0, 0, 255, 255]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.png");
        let err = FsImageStore::new().load(&path, false).unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        fs::write(&path, b"not an image").unwrap();

        let err = FsImageStore::new().load(&path, false).unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }

    #[test]
    fn modified_tracks_file_time_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.png");
        write_png(&path, Rgba([0; 4]), Rgba([0; 4]));

        let store = FsImageStore::new();
        let before = store.modified(&path).unwrap();

        let file = File::options().write(true).open(&path).unwrap();
        file.set_modified(before + Duration::from_secs(5)).unwrap();
        drop(file);

        let after = store.modified(&path).unwrap();
        assert!(after > before);
    }
}
