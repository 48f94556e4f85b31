//! Collection Loader
//!
//! Walks the paginated source one page at a time until enough characters
//! have arrived, then truncates to the exact target count.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::api::PageSource;
use crate::error::LoadError;
use crate::models::Character;

/// Cooperative cancellation flag shared between the loader task and its owner
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Fetch pages `1, 2, 3, …` sequentially until `target` characters are held.
///
/// Stops early if the source runs dry. The token is checked before each
/// request and after each response; a cancelled load returns
/// `LoadError::Cancelled` and discards what was gathered.
pub async fn load_collection<S: PageSource + ?Sized>(
    source: &S,
    target: usize,
    cancel: &CancelToken,
) -> Result<Vec<Character>, LoadError> {
    let mut collected: Vec<Character> = Vec::new();
    let mut page = 1u32;
    let mut requests = 0u32;

    while collected.len() < target {
        if cancel.is_cancelled() {
            return Err(LoadError::Cancelled);
        }

        let batch = source
            .fetch_page(page)
            .await
            .map_err(|source| LoadError::Api { page, source })?;
        requests += 1;

        if cancel.is_cancelled() {
            return Err(LoadError::Cancelled);
        }

        let is_last = batch.is_last();
        let received = batch.results.len();
        collected.extend(batch.results);
        log::debug!("[LOADER] page {}: {} records ({} total)", page, received, collected.len());

        if is_last {
            if collected.len() < target {
                log::warn!(
                    "[LOADER] source exhausted at page {} with {} of {} records",
                    page,
                    collected.len(),
                    target
                );
            }
            break;
        }
        page += 1;
    }

    collected.truncate(target);
    log::info!("[LOADER] loaded {} records in {} requests", collected.len(), requests);
    Ok(collected)
}
