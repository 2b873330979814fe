pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::Cli;
pub use crate::config::ClientConfig;
pub use crate::core::client::InventoryClient;
pub use crate::core::multipart::MultipartForm;
pub use crate::domain::model::{Box, BoxDetail, BoxPatch, Item, PhotoUpload};
pub use crate::utils::error::{ApiError, Result};
