use std::sync::LazyLock;

use indexmap::IndexMap;
use reqwest::Url;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use super::names::canonical_name;

static HEADING_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2[id], h3[id]").unwrap());
static LINK_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

/// An allow-listed attribute name paired with the page that describes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub detail_url: String,
}

/// Extract candidates from the reference document.
///
/// The document groups attributes under one heading per letter (`id="a"` ..
/// `id="z"`), each followed by a list of links. Letters are visited in
/// alphabetical order and links in document order. Relative links are
/// resolved against `base`.
///
/// When two links canonicalise to the same name, the later link's URL wins
/// but the name keeps the position where it first appeared.
pub fn parse_reference(html: &str, base: &Url) -> Vec<Candidate> {
    let doc = Html::parse_document(html);
    let mut found: IndexMap<String, String> = IndexMap::new();

    for letter in 'a'..='z' {
        let Some(list) = section_list(&doc, letter) else {
            continue;
        };

        for link in list.select(&LINK_SEL) {
            let text: String = link.text().collect();
            let Some(name) = canonical_name(&text) else {
                continue;
            };
            let Some(href) = link.value().attr("href") else {
                continue;
            };
            let detail_url = match base.join(href) {
                Ok(url) => url.to_string(),
                Err(e) => {
                    warn!("Skipping {}: bad link {:?}: {}", name, href, e);
                    continue;
                }
            };

            if let Some(previous) = found.insert(name.clone(), detail_url) {
                debug!("{} listed again under '{}', replacing {}", name, letter, previous);
            }
        }
    }

    found
        .into_iter()
        .map(|(name, detail_url)| Candidate { name, detail_url })
        .collect()
}

/// The element right after the first heading whose id is `letter`.
fn section_list<'a>(doc: &'a Html, letter: char) -> Option<ElementRef<'a>> {
    let mut buf = [0u8; 4];
    let id: &str = letter.encode_utf8(&mut buf);

    let heading = doc
        .select(&HEADING_SEL)
        .find(|h| h.value().id() == Some(id))?;

    heading.next_siblings().find_map(ElementRef::wrap)
}

// ── Tests ──
