pub mod handlers;
pub mod resume;
pub mod store;
