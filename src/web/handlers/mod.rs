//! HTML template rendering handlers.

mod index;
mod update_link;
mod views;

pub use index::index_handler;
pub use update_link::update_link_page_handler;
