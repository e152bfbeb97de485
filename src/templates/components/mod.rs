pub mod error;
pub mod map_view;

pub use error::error_page;
pub use map_view::map_view;
