//! Offset/page-size pagination over CMP listing endpoints.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use toolhub_core::error::AppError;
use toolhub_core::result::AppResult;
use toolhub_core::traits::gateway::CmpGateway;
use toolhub_core::types::PageRequest;

use crate::context::RequestContext;

/// Drains a listing endpoint page by page.
///
/// A page shorter than the requested size ends the listing. Any failed page
/// aborts the whole collection; callers never see a partial list.
#[derive(Debug, Clone)]
pub struct PaginatedCollector {
    /// Remote gateway.
    gateway: Arc<dyn CmpGateway>,
    /// Records requested per page.
    page_size: u64,
}

impl PaginatedCollector {
    /// Creates a new collector.
    pub fn new(gateway: Arc<dyn CmpGateway>, page_size: u64) -> Self {
        Self {
            gateway,
            page_size: page_size.max(1),
        }
    }

    /// Returns every raw record of the listing, in arrival order.
    pub async fn collect(&self, ctx: &RequestContext, endpoint: &str) -> AppResult<Vec<Value>> {
        let mut page = PageRequest::first(self.page_size);
        let mut records = Vec::new();
        let mut pages = 0usize;

        loop {
            let batch = self.gateway.get_page(&ctx.auth, endpoint, page).await?;
            pages += 1;

            let last = page.is_last(batch.len());
            records.extend(batch);
            if last {
                break;
            }
            page = page.next();
        }

        debug!(endpoint, pages, records = records.len(), "Listing collected");
        Ok(records)
    }

    /// Collects a listing and deserializes every record.
    pub async fn collect_as<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        endpoint: &str,
    ) -> AppResult<Vec<T>> {
        self.collect(ctx, endpoint)
            .await?
            .into_iter()
            .map(|record| serde_json::from_value(record).map_err(AppError::from))
            .collect()
    }
}
