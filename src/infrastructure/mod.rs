// src/infrastructure/mod.rs
pub mod config;
pub mod renderer;
pub mod store;

pub use config::Config;
pub use store::JsonDeckStore;
