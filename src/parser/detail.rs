use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

static ARTICLE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("article").unwrap());
static MAIN_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("main").unwrap());
static PARAGRAPH_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());
static LINK_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static SENTENCE_END_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.(?:\s|$)").unwrap());

/// What a detail page says about one attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Detail {
    /// First sentence of the first paragraph, without its closing period.
    pub description: Option<String>,
    /// Elements the page links to, first-seen order, no duplicates.
    pub elements: Vec<String>,
}

/// Reads the first `article`; pages without one fall back to `main`.
pub fn parse_detail(html: &str) -> Detail {
    let doc = Html::parse_document(html);
    let content = doc
        .select(&ARTICLE_SEL)
        .next()
        .or_else(|| doc.select(&MAIN_SEL).next());
    let Some(content) = content else {
        return Detail::default();
    };

    Detail {
        description: first_sentence(content),
        elements: element_links(content),
    }
}

fn first_sentence(content: ElementRef) -> Option<String> {
    let text = content
        .select(&PARAGRAPH_SEL)
        .map(|p| collapse_ws(&p.text().collect::<String>()))
        .find(|t| !t.is_empty())?;

    let sentence = SENTENCE_END_RE
        .split(&text)
        .next()
        .unwrap_or_default()
        .trim();
    (!sentence.is_empty()).then(|| sentence.to_string())
}

fn element_links(content: ElementRef) -> Vec<String> {
    let mut elements: Vec<String> = Vec::new();
    for link in content.select(&LINK_SEL) {
        let Some(name) = link.value().attr("href").and_then(element_from_href) else {
            continue;
        };
        if !elements.contains(&name) {
            elements.push(name);
        }
    }
    elements
}

/// `/en-US/docs/Web/SVG/Element/circle#attr` → `circle`
fn element_from_href(href: &str) -> Option<String> {
    let path = href.split(['#', '?']).next()?;
    let (_, rest) = path.split_once("/Element/")?;
    let name = rest.trim_end_matches('/');
    if name.is_empty() || name.contains('/') {
        return None;
    }
    Some(name.to_string())
}

fn collapse_ws(s: &str) -> String {
    WS_RE.replace_all(s, " ").trim().to_string()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_is_first_sentence() {
        let html = r#"<article><p>The <code>cx</code> attribute defines the x-axis coordinate of a center point. Three elements are using this attribute.</p></article>"#;
        let d = parse_detail(html);
        assert_eq!(
            d.description.as_deref(),
            Some("The cx attribute defines the x-axis coordinate of a center point")
        );
    }

    #[test]
    fn decimal_points_do_not_split() {
        let html = r#"<article><p>Values up to 1.5 are allowed here. More text.</p></article>"#;
        assert_eq!(
            parse_detail(html).description.as_deref(),
            Some("Values up to 1.5 are allowed here")
        );
    }

    #[test]
    fn skips_empty_paragraphs_and_collapses_whitespace() {
        let html = "<article><p>  </p><p>The   fill\n   attribute has two meanings</p></article>";
        assert_eq!(
            parse_detail(html).description.as_deref(),
            Some("The fill attribute has two meanings")
        );
    }

    #[test]
    fn text_outside_content_ignored() {
        let html = r#"<body><p>Skip to main content.</p><main><p>Inside main.</p></main></body>"#;
        assert_eq!(parse_detail(html).description.as_deref(), Some("Inside main"));
    }

    #[test]
    fn article_preferred_over_enclosing_main() {
        let html = r#"<main>
            <p>Banner outside the article.</p>
            <nav><a href="/en-US/docs/Web/SVG/Element/svg">svg</a></nav>
            <article>
              <p>The cx attribute defines a center.</p>
              <a href="/en-US/docs/Web/SVG/Element/circle">circle</a>
            </article>
        </main>"#;
        let d = parse_detail(html);
        assert_eq!(d.description.as_deref(), Some("The cx attribute defines a center"));
        assert_eq!(d.elements, vec!["circle"]);
    }

    #[test]
    fn no_content_region_means_nothing() {
        let d = parse_detail("<body><p>Loose paragraph.</p></body>");
        assert_eq!(d, Detail::default());
    }

    #[test]
    fn content_without_paragraphs_has_no_description() {
        let html = r#"<article><h1>cx</h1><a href="/en-US/docs/Web/SVG/Element/circle">circle</a></article>"#;
        let d = parse_detail(html);
        assert_eq!(d.description, None);
        assert_eq!(d.elements, vec!["circle"]);
    }

    #[test]
    fn element_links_deduplicated_in_order() {
        let html = r#"<article>
            <p>Used by some elements.</p>
            <a href="/en-US/docs/Web/SVG/Element/radialGradient#cx">radialGradient</a>
            <a href="/en-US/docs/Web/SVG/Element/circle">circle</a>
            <a href="/en-US/docs/Web/SVG/Element/radialGradient">radialGradient</a>
            <a href="/en-US/docs/Web/SVG/Attribute/cy">cy</a>
            <a href="/en-US/docs/Web/SVG/Element">all elements</a>
        </article>"#;
        assert_eq!(parse_detail(html).elements, vec!["radialGradient", "circle"]);
    }

    #[test]
    fn element_href_parsing() {
        assert_eq!(element_from_href("/docs/Web/SVG/Element/rect").as_deref(), Some("rect"));
        assert_eq!(element_from_href("/docs/Web/SVG/Element/rect/").as_deref(), Some("rect"));
        assert_eq!(element_from_href("/docs/Web/SVG/Element/rect?x=1").as_deref(), Some("rect"));
        assert_eq!(element_from_href("/docs/Web/SVG/Element/"), None);
        assert_eq!(element_from_href("/docs/Web/SVG/Element/a/b"), None);
        assert_eq!(element_from_href("/docs/Web/SVG/Attribute/cx"), None);
    }

    #[test]
    fn detail_fixture() {
        let html = std::fs::read_to_string("tests/fixtures/detail_cx.html").unwrap();
        let d = parse_detail(&html);
        assert_eq!(
            d.description.as_deref(),
            Some("The cx attribute defines the x-axis coordinate of a center point")
        );
        assert_eq!(d.elements, vec!["circle", "ellipse", "radialGradient"]);
    }
}
