//! Field definitions listing.

use std::sync::Arc;

use tracing::info;

use toolhub_core::result::AppResult;
use toolhub_core::traits::gateway::CmpGateway;
use toolhub_entity::field::Field;

use crate::collector::PaginatedCollector;
use crate::context::RequestContext;
use crate::endpoints;

/// Lists metadata field definitions.
#[derive(Debug, Clone)]
pub struct FieldService {
    /// Listing collector.
    collector: PaginatedCollector,
}

impl FieldService {
    /// Creates a new field service.
    pub fn new(gateway: Arc<dyn CmpGateway>, page_size: u64) -> Self {
        Self {
            collector: PaginatedCollector::new(gateway, page_size),
        }
    }

    /// Lists every field definition.
    pub async fn list_fields(&self, ctx: &RequestContext) -> AppResult<Vec<Field>> {
        let fields: Vec<Field> = self.collector.collect_as(ctx, endpoints::FIELDS).await?;
        info!(fields = fields.len(), "Listed fields");
        Ok(fields)
    }
}
