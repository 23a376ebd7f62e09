//! Application layer
//!
//! Use cases that open the image, drive the domain services and return
//! report DTOs.

pub mod dto;
mod recover_files;
mod scan_image;

pub use recover_files::RecoverFilesUseCase;
pub use scan_image::ScanImageUseCase;
