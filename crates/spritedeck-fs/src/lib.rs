//! Filesystem bridge for the spritedeck engine.
//!
//! The engine core is headless and reaches the disk only through its
//! `ImageStore` contract; this crate is the real implementation, decoding
//! dropped files with the `image` crate and reporting modification times
//! from file metadata for the hot-reload watcher.

pub mod store;

pub use store::FsImageStore;
