pub mod config;
pub mod context;
