//! Spreadsheet-driven asset URL validation.
//!
//! Every URL-shaped cell of the chosen column is probed with a header-only
//! request and classified against the size and filename rules. Probes run with
//! bounded concurrency but results come back in row order, so duplicate
//! detection sees rows exactly as a sequential pass would.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use percent_encoding::percent_decode_str;
use tracing::{debug, info, warn};
use url::Url;

use toolhub_core::config::ValidationConfig;
use toolhub_core::result::AppResult;
use toolhub_core::traits::fetcher::{AssetFetcher, AssetProbe};
use toolhub_entity::asset::{
    ValidationReason, ValidationRecord, ValidationReport, filename_length,
};

use crate::asset::service::AssetService;
use crate::asset::spreadsheet::{self, SheetRow};
use crate::context::RequestContext;

/// Filename used when a URL has no decodable last path segment.
pub const UNKNOWN_FILENAME: &str = "unknown";

/// Validates the asset URLs listed in a spreadsheet.
#[derive(Debug, Clone)]
pub struct AssetValidator {
    /// Resolves the spreadsheet's download URL.
    assets: AssetService,
    /// Public fetcher for the spreadsheet and the probes.
    fetcher: Arc<dyn AssetFetcher>,
    /// Rule limits.
    config: ValidationConfig,
}

impl AssetValidator {
    /// Creates a new validator.
    pub fn new(assets: AssetService, fetcher: Arc<dyn AssetFetcher>, config: ValidationConfig) -> Self {
        Self {
            assets,
            fetcher,
            config,
        }
    }

    /// Downloads the spreadsheet stored as `asset_id` and validates every URL
    /// in `url_column`.
    ///
    /// Failing to fetch or parse the spreadsheet fails the whole call; a
    /// failed probe only affects its own row.
    pub async fn validate(
        &self,
        ctx: &RequestContext,
        asset_id: &str,
        url_column: &str,
    ) -> AppResult<ValidationReport> {
        let download_url = self.assets.download_url(ctx, asset_id).await?;
        let body = self.fetcher.download(&download_url).await?;
        let rows = spreadsheet::read_rows(&body)?;

        let report = self.validate_rows(&rows, url_column).await;
        info!(
            asset_id = %asset_id,
            url_column = %url_column,
            rows = rows.len(),
            total = report.summary.total_assets,
            valid = report.summary.valid_assets,
            invalid = report.summary.invalid_assets,
            "Asset validation finished"
        );
        Ok(report)
    }

    /// Validates already parsed rows.
    pub async fn validate_rows(&self, rows: &[SheetRow], url_column: &str) -> ValidationReport {
        let urls: Vec<String> = rows
            .iter()
            .filter_map(|row| row.get(url_column).and_then(|cell| cell.as_url()))
            .map(str::to_owned)
            .collect();

        let probes: Vec<AssetProbe> = stream::iter(urls.clone())
            .map(|url| probe(Arc::clone(&self.fetcher), url))
            .buffered(self.config.probe_concurrency.max(1))
            .collect()
            .await;

        // (filename, size) -> first URL seen with that key
        let mut seen: HashMap<(String, Option<u64>), String> = HashMap::new();
        let results = urls
            .into_iter()
            .zip(probes)
            .map(|(url, probe)| {
                let filename = filename_from_url(&url);
                let mut reasons = check_rules(&filename, probe.size_bytes, &self.config);
                match seen.entry((filename.clone(), probe.size_bytes)) {
                    Entry::Occupied(first) => {
                        debug!(url = %url, first = %first.get(), "Duplicate asset");
                        reasons.push(ValidationReason::Duplicate);
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(url.clone());
                    }
                }
                ValidationRecord::new(
                    url,
                    filename,
                    probe.size_bytes,
                    probe.content_type.unwrap_or_default(),
                    reasons,
                )
            })
            .collect();

        ValidationReport::success(results)
    }
}

/// Probes one URL; a failure yields an empty probe.
async fn probe(fetcher: Arc<dyn AssetFetcher>, url: String) -> AssetProbe {
    match fetcher.probe(&url).await {
        Ok(probe) => probe,
        Err(e) => {
            warn!(url = %url, error = %e, "Asset probe failed");
            AssetProbe::default()
        }
    }
}

/// Decoded last path segment of `url`, or [`UNKNOWN_FILENAME`].
pub fn filename_from_url(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| {
            let segment = parsed.path_segments()?.next_back()?.to_string();
            let decoded = percent_decode_str(&segment).decode_utf8().ok()?.into_owned();
            (!decoded.is_empty()).then_some(decoded)
        })
        .unwrap_or_else(|| UNKNOWN_FILENAME.to_string())
}

/// Size and filename rules, each checked on its own, in reporting order.
fn check_rules(filename: &str, size: Option<u64>, config: &ValidationConfig) -> Vec<ValidationReason> {
    let mut reasons = Vec::new();
    if filename_length(filename) > config.max_filename_length {
        reasons.push(ValidationReason::FilenameTooLong);
    }
    if size.is_none() {
        reasons.push(ValidationReason::UnknownFileSize);
    }
    if size == Some(0) {
        reasons.push(ValidationReason::ZeroByteFile);
    }
    if size.is_some_and(|bytes| bytes > config.max_file_size_bytes) {
        reasons.push(ValidationReason::FileTooLarge);
    }
    reasons
}
