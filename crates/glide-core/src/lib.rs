pub mod config;
pub mod document;
pub mod error;

pub use config::{AppConfig, ScrollConfig};
pub use document::Document;
pub use error::{Error, Result};
