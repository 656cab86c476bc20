use tracing::{debug, warn};

use crate::dataset::{AttributeRecord, PLACEHOLDER_DESCRIPTION};
use crate::fetch::{Page, PageFetcher, Transport};
use crate::parser::{parse_detail, Candidate};

/// Result of resolving one candidate against its detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Described { description: String, elements: Vec<String> },
    /// Page fetched but no body text found.
    Undescribed { elements: Vec<String> },
    Unavailable { reason: String },
}

impl Resolution {
    /// Persisted form. Anything short of a description gets the placeholder.
    pub fn into_record(self, name: String) -> AttributeRecord {
        let (description, elements) = match self {
            Resolution::Described { description, elements } => (description, elements),
            Resolution::Undescribed { elements } => (PLACEHOLDER_DESCRIPTION.to_string(), elements),
            Resolution::Unavailable { .. } => (PLACEHOLDER_DESCRIPTION.to_string(), Vec::new()),
        };
        AttributeRecord { name, description, elements }
    }
}

pub async fn resolve<T: Transport>(fetcher: &PageFetcher<'_, T>, candidate: &Candidate) -> Resolution {
    let html = match fetcher.fetch(&candidate.detail_url).await {
        Page::Fetched { body, .. } => body,
        Page::Unavailable { reason } => return Resolution::Unavailable { reason },
    };

    let detail = parse_detail(&html);
    match detail.description {
        Some(description) => {
            debug!("[{}]\n{}\n", candidate.name, description);
            Resolution::Described { description, elements: detail.elements }
        }
        None => {
            warn!("No description found for {} at {}", candidate.name, candidate.detail_url);
            Resolution::Undescribed { elements: detail.elements }
        }
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheStore;
    use crate::fetch::testing::StubTransport;

    const URL: &str = "https://developer.mozilla.org/en-US/docs/Web/SVG/Attribute/cx";

    fn candidate() -> Candidate {
        Candidate { name: "cx".into(), detail_url: URL.into() }
    }

    #[tokio::test]
    async fn described_from_fixture() {
        let html = std::fs::read_to_string("tests/fixtures/detail_cx.html").unwrap();
        let cache = CacheStore::open_in_memory().unwrap();
        let fetcher = PageFetcher::new(&cache, StubTransport::new().page(URL, &html));

        let r = resolve(&fetcher, &candidate()).await;
        assert_eq!(
            r,
            Resolution::Described {
                description: "The cx attribute defines the x-axis coordinate of a center point".into(),
                elements: vec!["circle".into(), "ellipse".into(), "radialGradient".into()],
            }
        );
    }

    #[tokio::test]
    async fn empty_page_is_undescribed() {
        let cache = CacheStore::open_in_memory().unwrap();
        let fetcher = PageFetcher::new(&cache, StubTransport::new().page(URL, ""));

        let r = resolve(&fetcher, &candidate()).await;
        assert_eq!(r, Resolution::Undescribed { elements: vec![] });
    }

    #[tokio::test]
    async fn failed_fetch_is_unavailable() {
        let cache = CacheStore::open_in_memory().unwrap();
        let fetcher = PageFetcher::new(&cache, StubTransport::new().failing(URL));

        let r = resolve(&fetcher, &candidate()).await;
        assert!(matches!(r, Resolution::Unavailable { .. }));
    }

    #[test]
    fn placeholder_records() {
        let undescribed = Resolution::Undescribed { elements: vec!["circle".into()] }
            .into_record("cx".into());
        assert_eq!(undescribed.description, PLACEHOLDER_DESCRIPTION);
        assert_eq!(undescribed.elements, vec!["circle"]);

        let unavailable = Resolution::Unavailable { reason: "HTTP 503".into() }.into_record("cy".into());
        assert_eq!(unavailable.name, "cy");
        assert_eq!(unavailable.description, PLACEHOLDER_DESCRIPTION);
        assert!(unavailable.elements.is_empty());
    }
}
