// Handlers module
pub mod companies;
pub mod health;
pub mod params;
