mod cache;
mod dataset;
mod fetch;
mod parser;
mod pipeline;
mod resolve;
mod settings;

use std::time::Instant;

use anyhow::Context;

use cache::CacheStore;
use fetch::{HttpTransport, PageFetcher};
use settings::Settings;

// Single-threaded on purpose: pages are fetched one after another.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let settings = Settings::load()?;

    let cache = CacheStore::open(&settings.cache_dir)
        .with_context(|| format!("Cannot open page cache in {}", settings.cache_dir.display()))?;
    let transport = HttpTransport::new(&settings.user_agent).context("Cannot build HTTP client")?;
    let fetcher = PageFetcher::new(&cache, transport);

    // The error itself is reported once, by anyhow, when main returns it.
    let result = pipeline::run(&fetcher, &settings).await;
    if let Ok(summary) = &result {
        summary.print();
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", elapsed_label(elapsed));
    }

    result.map(|_| ())
}

/// `42.3s`, `3m 07s` or `1h 02m 07s`.
fn elapsed_label(d: std::time::Duration) -> String {
    let total = d.as_secs();
    let (h, m, s) = (total / 3600, total / 60 % 60, total % 60);
    match (h, m) {
        (0, 0) => format!("{:.1}s", d.as_secs_f64()),
        (0, _) => format!("{m}m {s:02}s"),
        _ => format!("{h}h {m:02}m {s:02}s"),
    }
}

// ── Tests ──
