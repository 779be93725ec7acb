pub mod extension_filter;
pub mod icon_bundle;
pub mod icon_record;
pub mod icon_source;
pub mod input_source;

// --- public re-exports ---
pub use extension_filter::ExtensionFilter;
pub use icon_bundle::{BundleError, IconBundle};
pub use icon_record::IconRecord;
pub use icon_source::{IconSource, MemorySource, SourceError};
pub use input_source::directory_path::DirectoryPath;
pub use input_source::input_source::InputSource;
pub use input_source::zip_file_path::ZipFilePath;
