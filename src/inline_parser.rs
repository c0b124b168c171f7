use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::span::{InlineSpan, SpanKind};

static IMAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

// No lookbehind in `regex`; the `!` guard lives in `find_link`.
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// A matched `[text](url)` or `![alt](url)` with its byte range.
struct Reference<'t> {
    start: usize,
    end: usize,
    text: &'t str,
    url: &'t str,
}

impl<'t> Reference<'t> {
    fn from_captures(caps: &Captures<'t>) -> Option<Self> {
        let whole = caps.get(0)?;
        Some(Self {
            start: whole.start(),
            end: whole.end(),
            text: caps.get(1)?.as_str(),
            url: caps.get(2)?.as_str(),
        })
    }
}

fn find_image(text: &str, from: usize) -> Option<Reference<'_>> {
    IMAGE_PATTERN
        .captures_at(text, from)
        .and_then(|caps| Reference::from_captures(&caps))
}

/// Next link at or after `from` whose `[` is not preceded by `!`.
///
/// A rejected candidate only skips its own opening bracket, so a link that
/// starts inside it is still found.
fn find_link(text: &str, mut from: usize) -> Option<Reference<'_>> {
    loop {
        let found = LINK_PATTERN
            .captures_at(text, from)
            .and_then(|caps| Reference::from_captures(&caps))?;
        if !text[..found.start].ends_with('!') {
            return Some(found);
        }
        // '[' is one byte
        from = found.start + 1;
    }
}

fn collect_references<'t>(
    text: &'t str,
    find: fn(&'t str, usize) -> Option<Reference<'t>>,
) -> Vec<Reference<'t>> {
    let mut refs = Vec::new();
    let mut pos = 0;
    while pos <= text.len() {
        let Some(found) = find(text, pos) else {
            break;
        };
        pos = found.end;
        refs.push(found);
    }
    refs
}

/// All `![alt](url)` pairs in `text`, in order. The alt text may be empty.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    collect_references(text, find_image)
        .into_iter()
        .map(|r| (r.text.to_string(), r.url.to_string()))
        .collect()
}

/// All `[text](url)` pairs in `text` that are not image syntax.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    collect_references(text, find_link)
        .into_iter()
        .map(|r| (r.text.to_string(), r.url.to_string()))
        .collect()
}

fn split_spans_reference(
    spans: Vec<InlineSpan>,
    kind: SpanKind,
    find: for<'a> fn(&'a str, usize) -> Option<Reference<'a>>,
) -> Vec<InlineSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }
        let text = span.text();
        let mut last_end = 0;
        for found in collect_references(text, find) {
            if found.start > last_end {
                out.push(InlineSpan::plain(&text[last_end..found.start]));
            }
            out.push(InlineSpan::with_url(found.text, kind, found.url));
            last_end = found.end;
        }
        if last_end < text.len() {
            out.push(InlineSpan::plain(&text[last_end..]));
        }
    }
    out
}

/// Splits plain spans around image syntax. Empty text around a match is dropped.
pub fn split_spans_image(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    split_spans_reference(spans, SpanKind::Image, find_image)
}

/// Splits plain spans around link syntax. Empty text around a match is dropped.
pub fn split_spans_link(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    split_spans_reference(spans, SpanKind::Link, find_link)
}

/// Splits plain spans on `delimiter`, alternating plain and `kind` segments.
///
/// Unlike the image and link splits every segment is kept, including empty
/// ones, so `"a `b`"` yields a trailing empty plain span. Unbalanced
/// delimiters are not reported: the last segment simply takes whichever
/// kind its position gives it.
pub fn split_spans_delimiter(
    spans: Vec<InlineSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Vec<InlineSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }
        for (idx, part) in span.text().split(delimiter).enumerate() {
            if idx % 2 == 0 {
                out.push(InlineSpan::plain(part));
            } else {
                out.push(InlineSpan::new(part, kind));
            }
        }
    }
    out
}

/// Tokenizes inline Markdown into typed spans.
///
/// Stages run in a fixed order: images, links, code, bold, italic. Each
/// stage only looks at spans still marked plain.
pub fn text_to_spans(text: &str) -> Vec<InlineSpan> {
    let spans = vec![InlineSpan::plain(text)];

    let spans = split_spans_image(spans);
    let spans = split_spans_link(spans);
    log::trace!("After image/link split: {} spans", spans.len());

    let spans = split_spans_delimiter(spans, "`", SpanKind::Code);
    let spans = split_spans_delimiter(spans, "**", SpanKind::Bold);
    let spans = split_spans_delimiter(spans, "_", SpanKind::Italic);
    log::trace!("Tokenized {:?} into {} spans", text, spans.len());

    spans
}
