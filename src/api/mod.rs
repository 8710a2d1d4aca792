/// Picsum API module
///
/// This module handles all network access, including:
/// - The paginated listing endpoint (client.rs)
/// - Image byte fetches for thumbnails and downloads (client.rs)
/// - The API data model (types.rs)
/// - The fetch error taxonomy (error.rs)

pub mod client;
pub mod error;
pub mod types;

pub use client::PicsumClient;
pub use error::ApiError;
pub use types::ImageRecord;
