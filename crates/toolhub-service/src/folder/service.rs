//! Folder operations over the remote folder endpoints.

use std::sync::Arc;

use tracing::{info, warn};

use toolhub_core::result::AppResult;
use toolhub_core::traits::gateway::CmpGateway;
use toolhub_entity::folder::Folder;

use crate::collector::PaginatedCollector;
use crate::context::RequestContext;
use crate::endpoints;
use crate::folder::tree::{LinkFollower, assemble_flat};

/// Lists folders and assembles folder trees.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Remote gateway, used for single-folder lookups.
    gateway: Arc<dyn CmpGateway>,
    /// Listing collector.
    collector: PaginatedCollector,
    /// Subtree populator for link-following mode.
    follower: LinkFollower,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(gateway: Arc<dyn CmpGateway>, page_size: u64, max_tree_depth: usize) -> Self {
        let collector = PaginatedCollector::new(Arc::clone(&gateway), page_size);
        Self {
            follower: LinkFollower::new(collector.clone(), max_tree_depth),
            gateway,
            collector,
        }
    }

    async fn list_flat(&self, ctx: &RequestContext) -> AppResult<Vec<Folder>> {
        self.collector.collect_as(ctx, endpoints::FOLDERS).await
    }

    /// Lists folders without a parent. Children are not populated.
    pub async fn list_root_folders(&self, ctx: &RequestContext) -> AppResult<Vec<Folder>> {
        let roots: Vec<Folder> = self
            .list_flat(ctx)
            .await?
            .into_iter()
            .filter(Folder::is_root)
            .collect();

        info!(roots = roots.len(), "Listed root folders");
        Ok(roots)
    }

    /// Lists every folder and nests them under their parents (flat-index mode).
    ///
    /// Folders whose parent is missing from the listing are dropped and
    /// reported in the log.
    pub async fn list_all_folders(&self, ctx: &RequestContext) -> AppResult<Vec<Folder>> {
        let folders = self.list_flat(ctx).await?;
        let tree = assemble_flat(&folders);

        if !tree.unreachable_ids.is_empty() {
            warn!(
                orphans = tree.unreachable_ids.len(),
                orphan_ids = ?tree.unreachable_ids,
                "Folders with unknown parents were left out of the tree"
            );
        }

        info!(
            folders = folders.len(),
            roots = tree.roots.len(),
            "Assembled folder tree"
        );
        Ok(tree.roots)
    }

    /// Fetches one folder and its full subtree by following children links.
    pub async fn get_folder_with_children(
        &self,
        ctx: &RequestContext,
        folder_id: &str,
    ) -> AppResult<Folder> {
        let record = self
            .gateway
            .get_json(&ctx.auth, &endpoints::folder(folder_id))
            .await?;
        let folder: Folder = serde_json::from_value(record)?;

        let populated = self.follower.populate(ctx, folder).await?;
        info!(
            folder_id = %folder_id,
            folders = populated.subtree_len(),
            "Fetched folder subtree"
        );
        Ok(populated)
    }

    /// Builds the full tree from the root folders by following children links.
    ///
    /// Costs one listing per non-leaf folder; prefer [`Self::list_all_folders`]
    /// when the flat listing is complete.
    pub async fn list_all_folders_by_links(&self, ctx: &RequestContext) -> AppResult<Vec<Folder>> {
        let roots = self.list_root_folders(ctx).await?;
        let populated = self.follower.populate_all(ctx, roots).await?;

        info!(
            roots = populated.len(),
            folders = populated.iter().map(Folder::subtree_len).sum::<usize>(),
            "Assembled folder tree from links"
        );
        Ok(populated)
    }
}
