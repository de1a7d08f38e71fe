pub mod config;
pub mod generator;
pub mod input;
pub mod models;
pub mod style;
pub mod view_state;
