//! Folder tree assembly.
//!
//! Two strategies, kept apart on purpose:
//!
//! - [`assemble_flat`] indexes an already complete flat listing by
//!   `parent_folder_id`. No remote calls beyond the listing itself.
//! - [`LinkFollower`] dereferences each folder's `children` link, one remote
//!   listing per non-leaf folder, bounded by a maximum depth.

use std::collections::{HashMap, VecDeque};

use tracing::debug;

use toolhub_core::error::AppError;
use toolhub_core::result::AppResult;
use toolhub_entity::folder::Folder;

use crate::collector::PaginatedCollector;
use crate::context::RequestContext;

/// Output of flat-index assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatTree {
    /// Root folders, each holding its full subtree.
    pub roots: Vec<Folder>,
    /// Folders not reachable from any root: their parent is missing from the
    /// listing, or they sit on a parent cycle.
    pub unreachable_ids: Vec<String>,
}

/// Builds the folder forest from a flat listing.
///
/// Children keep the listing's arrival order. Every reachable folder gets a
/// `children` sequence, empty for leaves. The input is not modified.
pub fn assemble_flat(folders: &[Folder]) -> FlatTree {
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(folders.len());
    for (position, folder) in folders.iter().enumerate() {
        index.entry(folder.id.as_str()).or_insert(position);
    }

    let mut children_of: Vec<Vec<usize>> = vec![Vec::new(); folders.len()];
    let mut roots = Vec::new();
    for (position, folder) in folders.iter().enumerate() {
        match folder.parent_folder_id.as_deref() {
            None => roots.push(position),
            Some(parent_id) => {
                if let Some(&parent) = index.get(parent_id) {
                    children_of[parent].push(position);
                }
            }
        }
    }

    // Breadth-first visit order; building it in reverse guarantees every
    // child is finished before its parent.
    let mut order = Vec::with_capacity(folders.len());
    let mut reached = vec![false; folders.len()];
    let mut queue: VecDeque<usize> = roots.iter().copied().collect();
    while let Some(position) = queue.pop_front() {
        if std::mem::replace(&mut reached[position], true) {
            continue;
        }
        order.push(position);
        queue.extend(children_of[position].iter().copied());
    }

    let mut built: Vec<Option<Folder>> = vec![None; folders.len()];
    for &position in order.iter().rev() {
        let children = children_of[position]
            .iter()
            .filter_map(|&child| built[child].take())
            .collect();
        let mut folder = folders[position].clone();
        folder.children = Some(children);
        built[position] = Some(folder);
    }

    let unreachable_ids = folders
        .iter()
        .zip(&reached)
        .filter(|(_, reached)| !**reached)
        .map(|(folder, _)| folder.id.clone())
        .collect();

    FlatTree {
        roots: roots
            .into_iter()
            .filter_map(|root| built[root].take())
            .collect(),
        unreachable_ids,
    }
}

/// Populates subtrees by dereferencing `children` navigation links.
#[derive(Debug, Clone)]
pub struct LinkFollower {
    /// Collector used for each children listing.
    collector: PaginatedCollector,
    /// Deepest level a folder may sit at; roots are level 0.
    max_depth: usize,
}

impl LinkFollower {
    /// Creates a new link follower.
    pub fn new(collector: PaginatedCollector, max_depth: usize) -> Self {
        Self {
            collector,
            max_depth,
        }
    }

    /// Fills in `root`'s full subtree.
    ///
    /// A folder without a children link gets `children == []` without a
    /// remote call. Fails with `LimitExceeded` when a folder at
    /// `max_depth` actually has children; an empty listing there is a leaf.
    pub async fn populate(&self, ctx: &RequestContext, root: Folder) -> AppResult<Folder> {
        // Position 0 is the root; position `n` is `descendants[n - 1]`.
        let mut descendants: Vec<Folder> = Vec::new();
        let mut children_of: Vec<Vec<usize>> = vec![Vec::new()];
        let mut worklist = vec![(0usize, 0usize)];
        let mut fetches = 0usize;

        while let Some((position, depth)) = worklist.pop() {
            let node = match position {
                0 => &root,
                n => &descendants[n - 1],
            };
            let Some(link) = node.children_link().map(str::to_owned) else {
                continue;
            };

            let children: Vec<Folder> = self.collector.collect_as(ctx, &link).await?;
            fetches += 1;

            if depth >= self.max_depth && !children.is_empty() {
                return Err(AppError::limit_exceeded(format!(
                    "Folder tree below '{}' is deeper than {} levels",
                    root.id, self.max_depth
                )));
            }

            for child in children {
                descendants.push(child);
                let child_position = descendants.len();
                children_of.push(Vec::new());
                children_of[position].push(child_position);
                worklist.push((child_position, depth + 1));
            }
        }

        debug!(root_id = %root.id, folders = descendants.len() + 1, fetches, "Subtree populated");
        Ok(Self::link_up(root, descendants, children_of))
    }

    /// Populates each root in turn.
    pub async fn populate_all(
        &self,
        ctx: &RequestContext,
        roots: Vec<Folder>,
    ) -> AppResult<Vec<Folder>> {
        let mut populated = Vec::with_capacity(roots.len());
        for root in roots {
            populated.push(self.populate(ctx, root).await?);
        }
        Ok(populated)
    }

    /// Children are always pushed after their parent, so walking positions
    /// backwards finishes every child before its parent is assembled.
    fn link_up(mut root: Folder, descendants: Vec<Folder>, children_of: Vec<Vec<usize>>) -> Folder {
        let mut slots: Vec<Option<Folder>> = descendants.into_iter().map(Some).collect();
        let take_children = |slots: &mut Vec<Option<Folder>>, position: usize| -> Vec<Folder> {
            children_of[position]
                .iter()
                .filter_map(|&child| slots[child - 1].take())
                .collect()
        };

        for position in (1..=slots.len()).rev() {
            let children = take_children(&mut slots, position);
            if let Some(folder) = slots[position - 1].as_mut() {
                folder.children = Some(children);
            }
        }
        root.children = Some(take_children(&mut slots, 0));
        root
    }
}
