// * Content Statistics
// * Markup-independent word/sentence/paragraph counts plus structure signals
// * (headings, lists, media, emphasis). Markdown is lowered to HTML first so both
// * syntaxes are measured by the same DOM walk.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

use crate::engine::normalization::normalize_content;

// * HTML structure selectors
static SELECTOR_HEADINGS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1, h2, h3, h4, h5, h6").unwrap());
static SELECTOR_LIST_ITEMS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("li").unwrap());
static SELECTOR_MEDIA: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img, video, iframe, audio").unwrap());
static SELECTOR_EMPHASIS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("strong, b, em, i, mark, blockquote").unwrap());

// * Markdown syntax, lowered to the equivalent HTML before parsing
static MD_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]{0,3}#{1,6}[ \t]+(\S[^\n]*?)[ \t#]*$").unwrap());
static MD_BLOCKQUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]{0,3}>[ \t]*(\S[^\n]*)$").unwrap());
static MD_LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:[-*+•]|\d{1,3}[.)])[ \t]+(\S[^\n]*)$").unwrap()
});
static MD_STRONG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*\n]+)\*\*|__([^_\n]+)__").unwrap());
static MD_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[[^\]\n]*\]\([^)\n]+\)").unwrap());
static MD_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]\n]*)\]\([^)\n]+\)").unwrap());

// * Text segmentation
static SENTENCE_TERMINATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?…]+").unwrap());
static BLANK_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n[ \t\r]*\n").unwrap());

// * Elements whose text never reaches the reader
const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript", "template"];

// * Elements that close the running paragraph
const BLOCK_TAGS: &[&str] = &[
    "p", "div", "section", "article", "header", "footer", "aside", "main", "nav",
    "blockquote", "pre", "ul", "ol", "dl", "table", "thead", "tbody", "tr", "td", "th",
    "figure", "figcaption", "form", "address", "hr",
];

/// Measured properties of a piece of content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ContentStats {
    pub char_count: usize,
    pub word_count: usize,
    /// Words per sentence, in text order
    pub sentence_lengths: Vec<usize>,
    /// Words per paragraph block, in text order
    pub block_lengths: Vec<usize>,
    pub heading_count: usize,
    pub list_item_count: usize,
    pub media_count: usize,
    pub emphasis_count: usize,
    /// Occurrences of the supplied keywords in the body
    pub keyword_occurrences: usize,
    /// Keyword words as a percentage of body words
    pub keyword_density: f64,
}

impl ContentStats {
    /// Measures `content`. `keywords` must be normalized and non-empty.
    pub fn compute(content: &str, keywords: &[String]) -> Self {
        let document = Html::parse_fragment(&lower_markdown(content));

        let mut collector = SegmentCollector::default();
        collector.walk(document.root_element());
        collector.flush(SegmentKind::Paragraph);
        let segments = collector.segments;

        // * Headings and list items end a sentence even without punctuation
        let sentence_lengths: Vec<usize> = segments
            .iter()
            .flat_map(|segment| SENTENCE_TERMINATORS.split(&segment.text))
            .map(count_words)
            .filter(|words| *words > 0)
            .collect();
        let block_lengths: Vec<usize> = segments
            .iter()
            .filter(|segment| segment.kind == SegmentKind::Paragraph)
            .map(|segment| count_words(&segment.text))
            .collect();

        let text = segments
            .iter()
            .map(|segment| segment.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let word_count = count_words(&text);

        let normalized_text = normalize_content(&text);
        let mut keyword_occurrences = 0;
        let mut keyword_words = 0;
        for keyword in keywords.iter().filter(|k| !k.is_empty()) {
            let hits = normalized_text.matches(keyword.as_str()).count();
            keyword_occurrences += hits;
            keyword_words += hits * count_words(keyword).max(1);
        }
        let keyword_density = if word_count == 0 {
            0.0
        } else {
            keyword_words as f64 / word_count as f64 * 100.0
        };

        Self {
            char_count: text.chars().count(),
            word_count,
            sentence_lengths,
            block_lengths,
            heading_count: document.select(&SELECTOR_HEADINGS).count(),
            list_item_count: document.select(&SELECTOR_LIST_ITEMS).count(),
            media_count: document.select(&SELECTOR_MEDIA).count(),
            emphasis_count: document.select(&SELECTOR_EMPHASIS).count(),
            keyword_occurrences,
            keyword_density,
        }
    }

    pub fn sentence_count(&self) -> usize {
        self.sentence_lengths.len()
    }

    pub fn paragraph_count(&self) -> usize {
        self.block_lengths.len()
    }

    /// Average words per sentence, 0.0 when there are no sentences
    pub fn avg_sentence_words(&self) -> f64 {
        if self.sentence_lengths.is_empty() {
            return 0.0;
        }
        self.sentence_lengths.iter().sum::<usize>() as f64 / self.sentence_lengths.len() as f64
    }

    pub fn sentences_at_most(&self, words: usize) -> usize {
        self.sentence_lengths.iter().filter(|len| **len <= words).count()
    }

    pub fn sentences_over(&self, words: usize) -> usize {
        self.sentence_lengths.iter().filter(|len| **len > words).count()
    }

    /// Word count of the longest unbroken block
    pub fn longest_block_words(&self) -> usize {
        self.block_lengths.iter().copied().max().unwrap_or(0)
    }

    /// Number of distinct structural kinds present (headings, lists, emphasis)
    pub fn structural_variety(&self) -> usize {
        [self.heading_count, self.list_item_count, self.emphasis_count]
            .iter()
            .filter(|count| **count > 0)
            .count()
    }
}

/// Rewrites Markdown headings, quotes, list items, bold, images and links as HTML.
/// Image and link targets are dropped; link text is kept.
fn lower_markdown(content: &str) -> String {
    let text = MD_HEADING.replace_all(content, "<h6>${1}</h6>");
    let text = MD_BLOCKQUOTE.replace_all(&text, "<blockquote>${1}</blockquote>");
    let text = MD_LIST_ITEM.replace_all(&text, "<li>${1}</li>");
    let text = MD_STRONG.replace_all(&text, "<strong>${1}${2}</strong>");
    let text = MD_IMAGE.replace_all(&text, "<img>");
    let text = MD_LINK.replace_all(&text, "${1}");
    text.into_owned()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentKind {
    Paragraph,
    Heading,
    ListItem,
}

#[derive(Debug)]
struct Segment {
    kind: SegmentKind,
    text: String,
}

// * Splits the DOM into reader-visible runs of text at block boundaries
#[derive(Default)]
struct SegmentCollector {
    segments: Vec<Segment>,
    buffer: String,
}

impl SegmentCollector {
    fn walk(&mut self, element: ElementRef<'_>) {
        for child in element.children() {
            if let Some(child_element) = ElementRef::wrap(child) {
                let name = child_element.value().name();
                if SKIPPED_TAGS.contains(&name) {
                    continue;
                }
                match block_kind(name) {
                    Some(kind) => {
                        self.flush(SegmentKind::Paragraph);
                        self.walk(child_element);
                        self.flush(kind);
                    }
                    None => self.walk(child_element),
                }
            } else if let Some(text) = child.value().as_text() {
                // * Adjacent inline elements never glue words together
                self.buffer.push_str(text);
                self.buffer.push(' ');
            }
        }
    }

    // * Loose text between blocks may still hold blank-line separated paragraphs
    fn flush(&mut self, kind: SegmentKind) {
        let text = std::mem::take(&mut self.buffer);
        if kind == SegmentKind::Paragraph {
            for block in BLANK_LINE.split(&text) {
                self.push(kind, block);
            }
        } else {
            self.push(kind, &text);
        }
    }

    fn push(&mut self, kind: SegmentKind, text: &str) {
        let text = text.trim();
        if count_words(text) > 0 {
            self.segments.push(Segment {
                kind,
                text: text.to_string(),
            });
        }
    }
}

fn block_kind(name: &str) -> Option<SegmentKind> {
    match name {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Some(SegmentKind::Heading),
        "li" | "dt" | "dd" => Some(SegmentKind::ListItem),
        _ if BLOCK_TAGS.contains(&name) => Some(SegmentKind::Paragraph),
        _ => None,
    }
}

fn count_words(text: &str) -> usize {
    text.unicode_words().count()
}
