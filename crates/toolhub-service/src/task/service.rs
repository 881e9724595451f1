//! Task brief lookup.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use toolhub_core::result::AppResult;
use toolhub_core::traits::gateway::CmpGateway;

use crate::context::RequestContext;
use crate::endpoints;

/// Reads task briefs.
#[derive(Debug, Clone)]
pub struct TaskService {
    /// Remote gateway.
    gateway: Arc<dyn CmpGateway>,
}

impl TaskService {
    /// Creates a new task service.
    pub fn new(gateway: Arc<dyn CmpGateway>) -> Self {
        Self { gateway }
    }

    /// Fetches the brief attached to a task.
    ///
    /// Returns `None` when the task has no brief: the remote answers 404, or
    /// returns an empty body.
    pub async fn get_brief(&self, ctx: &RequestContext, task_id: &str) -> AppResult<Option<Value>> {
        let brief = match self
            .gateway
            .get_json(&ctx.auth, &endpoints::task_brief(task_id))
            .await
        {
            Ok(brief) => brief,
            Err(e) if e.is_not_found() => {
                info!(task_id = %task_id, "Task has no brief");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let empty = match &brief {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            _ => false,
        };
        Ok((!empty).then_some(brief))
    }
}
