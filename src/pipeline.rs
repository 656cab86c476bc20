use std::path::Path;
use std::sync::LazyLock;

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use regex::Regex;
use reqwest::Url;
use tracing::{debug, info};

use crate::dataset::Dataset;
use crate::fetch::{Page, PageFetcher, Transport};
use crate::parser::parse_reference;
use crate::resolve::{resolve, Resolution};
use crate::settings::Settings;

static LINE_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\r|\r\n|\r|\n").unwrap());

/// Counts reported after a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub candidates: usize,
    pub described: usize,
    pub undescribed: usize,
    pub unavailable: usize,
    pub elements: usize,
    pub cache_hits: usize,
    pub network_fetches: usize,
}

impl RunSummary {
    pub fn print(&self) {
        println!(
            "Wrote {} attributes ({} described, {} without description, {} unavailable) across {} elements.",
            self.candidates, self.described, self.undescribed, self.unavailable, self.elements,
        );
        println!(
            "Pages: {} from cache, {} fetched.",
            self.cache_hits, self.network_fetches
        );
    }
}

/// Run the whole extraction once: reference page → candidates → detail
/// pages → dataset. Both output files are replaced on success.
///
/// Detail pages are fetched one at a time in candidate order. That caps
/// outbound requests at one in flight and keeps logs and output ordering
/// reproducible.
pub async fn run<T: Transport>(fetcher: &PageFetcher<'_, T>, settings: &Settings) -> Result<RunSummary> {
    let base = Url::parse(&settings.reference_url)
        .with_context(|| format!("Invalid reference URL {}", settings.reference_url))?;

    let html = match fetcher.fetch(base.as_str()).await {
        Page::Fetched { body, origin } => {
            info!("Reference document loaded ({:?})", origin);
            body
        }
        Page::Unavailable { reason } => bail!("Reference document unavailable: {}", reason),
    };

    write_atomic(&settings.snapshot_path, &normalize_line_endings(&html))
        .context("Failed to write reference snapshot")?;

    let candidates = parse_reference(&html, &base);
    if candidates.is_empty() {
        bail!("No attributes found in reference document {}", base);
    }
    info!("Found {} candidate attributes", candidates.len());

    let pb = ProgressBar::new(candidates.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );

    let mut summary = RunSummary { candidates: candidates.len(), ..Default::default() };
    let mut records = Vec::with_capacity(candidates.len());
    for candidate in &candidates {
        pb.set_message(candidate.name.clone());
        let resolution = resolve(fetcher, candidate).await;
        match &resolution {
            Resolution::Described { .. } => summary.described += 1,
            Resolution::Undescribed { .. } => summary.undescribed += 1,
            Resolution::Unavailable { reason } => {
                debug!("{} left undescribed: {}", candidate.name, reason);
                summary.unavailable += 1;
            }
        }
        records.push(resolution.into_record(candidate.name.clone()));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let dataset = Dataset::build(records);
    summary.elements = dataset.elements.len();
    let stats = fetcher.stats();
    summary.cache_hits = stats.cache_hits;
    summary.network_fetches = stats.network;

    let json = dataset.to_json().context("Failed to serialize dataset")?;
    write_atomic(&settings.dataset_path, &json).context("Failed to write dataset")?;

    info!(
        candidates = summary.candidates,
        described = summary.described,
        undescribed = summary.undescribed,
        unavailable = summary.unavailable,
        cache_hits = summary.cache_hits,
        network = summary.network_fetches,
        failed = stats.failed,
        "Dataset written to {}",
        settings.dataset_path.display()
    );
    Ok(summary)
}

/// Uniform `\n` line breaks with trailing whitespace stripped from each line.
pub fn normalize_line_endings(text: &str) -> String {
    LINE_BREAK_RE
        .split(text)
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write via a sibling temp file so `path` only ever holds complete contents.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create {}", parent.display()))?;
        }
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    std::fs::write(&tmp, contents).with_context(|| format!("Cannot write {:?}", tmp))?;
    std::fs::rename(&tmp, path).with_context(|| format!("Cannot replace {}", path.display()))?;
    Ok(())
}

// ── Tests ──
