//! Offset pagination for remote listing endpoints.

use serde::{Deserialize, Serialize};

/// One page request against an `offset`/`page_size` listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Index of the first record on the page.
    pub offset: u64,
    /// Number of records requested.
    pub page_size: u64,
}

impl PageRequest {
    /// The first page of the given size.
    pub fn first(page_size: u64) -> Self {
        Self {
            offset: 0,
            page_size: page_size.max(1),
        }
    }

    /// The page immediately after this one.
    pub fn next(&self) -> Self {
        Self {
            offset: self.offset + self.page_size,
            page_size: self.page_size,
        }
    }

    /// A page that returned fewer records than requested is the last one.
    pub fn is_last(&self, returned: usize) -> bool {
        (returned as u64) < self.page_size
    }
}
