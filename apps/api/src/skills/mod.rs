pub mod handlers;
pub mod models;
pub mod quiz;
pub mod validation;
