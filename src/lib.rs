pub mod client;
pub mod clock;
pub mod config;
pub mod error;
pub mod export;
pub mod form;
pub mod models;

pub use error::{AppError, Result};
