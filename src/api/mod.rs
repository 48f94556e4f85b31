//! Character API Bindings
//!
//! Outbound calls to the paginated character endpoint, organized behind
//! the `PageSource` seam so the loader can run against in-memory fakes.

mod character;

use async_trait::async_trait;
use crate::error::ApiError;
use crate::models::CharacterPage;

pub use character::*;

/// Anything that can hand out numbered pages of characters (1-indexed)
#[async_trait(?Send)]
pub trait PageSource {
    async fn fetch_page(&self, page: u32) -> Result<CharacterPage, ApiError>;
}
