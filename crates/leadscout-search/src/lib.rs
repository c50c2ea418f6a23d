pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::{SearchApiClient, PAGE_SIZE};
pub use error::SearchError;
pub use normalize::normalize_listing;
pub use types::{SearchApiLocalResult, SearchApiResponse};
