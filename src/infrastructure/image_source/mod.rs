//! Image source implementations

mod memory_image;
mod mmap_image;

pub use memory_image::MemoryImage;
pub use mmap_image::MmapImage;
