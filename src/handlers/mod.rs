pub mod download_handlers;
pub mod filter_handlers;
pub mod popup_handlers;

pub use download_handlers::{handle_download, DownloadOutcome};
pub use filter_handlers::apply_filter_args;
pub use popup_handlers::{handle_section_click, handle_tile_click};
