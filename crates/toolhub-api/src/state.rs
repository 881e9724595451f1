//! Application state shared across all handlers.

use std::sync::Arc;

use toolhub_core::config::AppConfig;
use toolhub_core::traits::fetcher::AssetFetcher;
use toolhub_core::traits::gateway::CmpGateway;
use toolhub_service::asset::{AssetService, AssetValidator};
use toolhub_service::field::FieldService;
use toolhub_service::folder::FolderService;
use toolhub_service::task::TaskService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Whether calls without forwarded credentials fall back to the
    /// client-credentials token
    pub client_credentials: bool,

    /// Folder listing and tree service
    pub folder_service: Arc<FolderService>,
    /// Field listing service
    pub field_service: Arc<FieldService>,
    /// Asset record service
    pub asset_service: Arc<AssetService>,
    /// Task brief service
    pub task_service: Arc<TaskService>,
    /// Spreadsheet asset validator
    pub asset_validator: Arc<AssetValidator>,
}

impl AppState {
    /// Wires every service onto the given gateway and fetcher.
    pub fn new(
        config: AppConfig,
        gateway: Arc<dyn CmpGateway>,
        fetcher: Arc<dyn AssetFetcher>,
        client_credentials: bool,
    ) -> Self {
        let page_size = config.cmp.page_size;
        let asset_service = AssetService::new(Arc::clone(&gateway));

        Self {
            folder_service: Arc::new(FolderService::new(
                Arc::clone(&gateway),
                page_size,
                config.cmp.max_tree_depth,
            )),
            field_service: Arc::new(FieldService::new(Arc::clone(&gateway), page_size)),
            task_service: Arc::new(TaskService::new(Arc::clone(&gateway))),
            asset_validator: Arc::new(AssetValidator::new(
                asset_service.clone(),
                fetcher,
                config.validation.clone(),
            )),
            asset_service: Arc::new(asset_service),
            client_credentials,
            config: Arc::new(config),
        }
    }
}
