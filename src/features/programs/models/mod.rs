mod program;

pub use program::{ImageUpload, Program};
