pub mod client;
pub mod models;

pub use client::{FetchError, ImageClient};
pub use models::{FetcherConfig, ImageHeaders};
