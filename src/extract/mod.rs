//! HTML extraction: raw markup in, structured page facts out.
//!
//! The extractor is deterministic and tolerant of malformed markup: it never
//! panics and never errors, it just extracts less. The title and meta
//! description come from a real DOM parse (`scraper`); the remaining signals
//! use pattern matching over the raw markup, which preserves document order
//! and survives unclosed tags.
//!
//! Extraction order matters: `<link>` tag text is captured before the
//! script/style/link stripping pass, and emails and text tokens are derived
//! from the same cleaned text so the two views never disagree.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};
use serde::Serialize;

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("hard-coded selector is valid"));

static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("meta[name='description']").expect("hard-coded selector is valid")
});

static LINK_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<link(.*?)>").expect("hard-coded pattern is valid"));

static SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<script.*?/script>").expect("hard-coded pattern is valid"));

static STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<style.*?/style>").expect("hard-coded pattern is valid"));

static H1_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<\s*h1(?:.*?)>(.*?)</\s*h1>").expect("hard-coded pattern is valid")
});

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<\s*h[1-6](?:.*?)>(.*?)</\s*h[1-6]>").expect("hard-coded pattern is valid")
});

static IMG_ALT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<img(.*?)alt="(.*?)"(.*?)>"#).expect("hard-coded pattern is valid")
});

static IMG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<img[\s>]").expect("hard-coded pattern is valid"));

static IFRAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<iframe(.*?)>([^>]*)</iframe>").expect("hard-coded pattern is valid")
});

static META_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<meta(.*?)>").expect("hard-coded pattern is valid"));

static ANY_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("hard-coded pattern is valid"));

// Everything outside this set is replaced with a space before email and token
// extraction. The set keeps ASCII alphanumerics, the Persian/Arabic letter
// range, and the punctuation email addresses and Persian prose rely on
// (including ZWNJ, U+200C).
static DISALLOWED_CHAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[^A-Za-z0-9@.\u{622}\u{627}\u{628}\u{67E}\u{62A}\u{62B}\u{62C}\u{686}\u{62D}\u{62E}\u{62F}\u{630}\u{631}\u{632}\u{698}\u{633}\u{634}\u{635}\u{636}\u{637}\u{638}\u{639}\u{63A}\u{641}\u{642}\u{6A9}\u{6AF}\u{644}\u{645}\u{646}\u{648}\u{647}\u{6CC}\u{621}\u{626}\u{64A}\u{624}\u{625}\u{623}\u{629},\u{640}\u{200C}\u{60C}\u{61B}?\u{61F}]",
    )
    .expect("hard-coded pattern is valid")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\._\p{L}\p{M}\p{N}-]+@[\._\p{L}\p{M}\p{N}-]+")
        .expect("hard-coded pattern is valid")
});

// Noise substrings left behind by HTML entities and layout markup.
static NOISE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"zwnj|shy|nbsp|\u{61F}|\n|\t").expect("hard-coded pattern is valid")
});

/// Structured facts extracted from one page.
///
/// Created once per analysis run and immutable after construction.
/// `text_tokens` excludes script/style/link/meta content and HTML tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageFacts {
    /// Text of the first `<title>` element, trimmed; empty when absent.
    pub title: String,
    /// Content of `<meta name="description">`, if present.
    pub meta_description: Option<String>,
    /// Raw attribute text of every `<link ...>` tag, in document order.
    pub link_tags: Vec<String>,
    /// H1 text, in document order.
    pub h1_headings: Vec<String>,
    /// H1–H6 text, in document order.
    pub headings: Vec<String>,
    /// Non-empty `alt` attribute values, in document order.
    pub image_alts: Vec<String>,
    /// Total number of `<img>` tags on the page (with or without alt text).
    pub image_count: usize,
    /// Whether the page embeds at least one `<iframe>...</iframe>` pair.
    pub has_iframe: bool,
    /// Email addresses visible in the page text.
    pub emails: BTreeSet<String>,
    /// Whitespace-delimited, non-empty visible-text tokens after cleanup.
    pub text_tokens: Vec<String>,
}

/// Extracts [`PageFacts`] from raw HTML.
pub fn extract(html: &str) -> PageFacts {
    let document = Html::parse_document(html);
    let title = extract_title(&document);
    let meta_description = extract_meta_description(&document);

    let link_tags: Vec<String> = LINK_TAG_RE
        .captures_iter(html)
        .map(|c| c[1].trim().to_string())
        .collect();

    // Strip script and style blocks plus link tags before anything that
    // looks at headings, images, or visible text.
    let contents = SCRIPT_RE.replace_all(html, "");
    let contents = STYLE_RE.replace_all(&contents, "");
    let contents = LINK_TAG_RE.replace_all(&contents, "");

    let h1_headings: Vec<String> = H1_RE
        .captures_iter(&contents)
        .map(|c| c[1].trim().to_string())
        .collect();
    let headings: Vec<String> = HEADING_RE
        .captures_iter(&contents)
        .map(|c| c[1].trim().to_string())
        .collect();

    let image_count = IMG_RE.find_iter(&contents).count();
    let image_alts: Vec<String> = IMG_ALT_RE
        .captures_iter(&contents)
        .map(|c| c[2].to_string())
        .filter(|alt| !alt.is_empty())
        .collect();

    let has_iframe = IFRAME_RE.is_match(&contents);

    // Meta tags carry attribute text (charsets, URLs) that would pollute the
    // token stream, so they go before tag stripping. The space inserted
    // ahead of each closing tag keeps words in adjacent elements from
    // concatenating once the tags are gone.
    let text = META_TAG_RE.replace_all(&contents, "");
    let text = text.replace("</", " </");
    let text = ANY_TAG_RE.replace_all(&text, "");
    let text = DISALLOWED_CHAR_RE.replace_all(&text, " ");

    let emails: BTreeSet<String> = EMAIL_RE
        .find_iter(&text)
        .map(|m| m.as_str().to_string())
        .collect();

    let text = NOISE_RE.replace_all(&text, "");
    let text_tokens: Vec<String> = text
        .split(' ')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();

    PageFacts {
        title,
        meta_description,
        link_tags,
        h1_headings,
        headings,
        image_alts,
        image_count,
        has_iframe,
        emails,
        text_tokens,
    }
}

/// Extracts the page title from a parsed HTML document.
///
/// Returns the text content of the first `<title>` element, trimmed of
/// whitespace, or an empty string if the document has no title.
fn extract_title(document: &Html) -> String {
    match document.select(&TITLE_SELECTOR).next() {
        Some(element) => element.text().collect::<String>().trim().to_string(),
        None => {
            log::debug!("no title element found in document");
            String::new()
        }
    }
}

/// Extracts the meta description from a parsed HTML document.
fn extract_meta_description(document: &Html) -> Option<String> {
    document
        .select(&META_DESCRIPTION_SELECTOR)
        .next()
        .and_then(|element| {
            element
                .value()
                .attr("content")
                .map(|content| content.trim().to_string())
        })
}
