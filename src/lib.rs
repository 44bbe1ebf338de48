pub mod config;
pub mod entities;
pub mod error;
pub mod interfaces;
pub mod services;
pub mod utils;
