pub mod handlers;
pub mod roles;
pub mod skills;
