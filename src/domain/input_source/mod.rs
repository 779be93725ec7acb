pub mod directory_path;
#[allow(clippy::module_inception)]
pub mod input_source;
pub mod path_error;
pub mod zip_file_path;
