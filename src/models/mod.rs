pub mod api;
pub mod search;

pub use api::*;
pub use search::*;
