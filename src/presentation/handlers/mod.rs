mod error;
mod files;
mod health;
mod refresh;

pub use error::{ErrorResponse, route_not_found_handler};
pub use files::{file_content_handler, file_summary_handler, list_files_handler};
pub use health::health_handler;
pub use refresh::refresh_handler;
