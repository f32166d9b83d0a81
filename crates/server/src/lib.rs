pub mod config;
pub mod http;
pub mod render;
pub mod state;
pub mod views;
