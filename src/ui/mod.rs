pub mod dialogs;
pub mod formatting;
pub mod html;

pub use dialogs::{set_status, show_alert, show_error, StatusLevel};
pub use formatting::{print_catalog, print_diagnostics, print_output, print_popup};
pub use html::{render_error_page, render_page};
