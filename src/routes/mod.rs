pub mod api;
pub mod companies;
pub mod health;
