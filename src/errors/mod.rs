pub mod error_mapper;

pub use error_mapper::{error_page_message, map_export_error, map_load_error};
