mod image_service;
mod program_service;

pub use image_service::{ImageUploadService, IMAGE_TOO_LARGE, MAX_IMAGE_SIZE};
pub use program_service::ProgramService;
