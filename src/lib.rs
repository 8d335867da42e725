pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::CameraStreamClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
