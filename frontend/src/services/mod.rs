pub mod browser_storage;
pub mod file_upload;
pub mod form_input;
pub mod logging;
