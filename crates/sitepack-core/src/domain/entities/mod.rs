pub mod document;
pub mod layout;
pub mod source_file;
