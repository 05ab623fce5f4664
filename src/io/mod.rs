pub mod fs;
pub mod reader;
pub mod writer;

pub use fs::{
    backup_file, backup_markdown_files, ensure_directory, is_markdown, list_markdown_files,
    modified_time, read_to_string, require_directory,
};
pub use reader::{display_name, load_documents, read_document, DocumentBatch};
pub use writer::{write_if_changed, PayloadFormat, WriteOptions, WriteResult};
