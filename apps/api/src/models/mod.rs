pub mod analysis;
pub mod roadmap;
pub mod role;
pub mod user;
