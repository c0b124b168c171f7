use mdhtml::{
    BlockKind, Error, InlineSpan, ParentNode, SpanKind, block_to_block_kind, extract_title,
    markdown_to_html_node, render, text_to_spans,
};

#[test]
fn title_roundtrip() {
    assert_eq!(render("# Title").unwrap(), "<div><h1>Title</h1></div>");
}

#[test]
fn code_block_is_verbatim() {
    assert_eq!(
        render("```\n_a_\n```").unwrap(),
        "<div><pre><code>_a_\n</code></pre></div>"
    );
}

#[test]
fn ordered_list_validation() {
    assert_eq!(block_to_block_kind("1. a\n3. b"), BlockKind::Paragraph);
    assert_eq!(block_to_block_kind("1. a\n2. b"), BlockKind::OrderedList);
}

#[test]
fn empty_list_element() {
    let ul = ParentNode::new("ul", Vec::new());
    assert_eq!(ul.to_html().unwrap(), "<ul></ul>");
}

#[test]
fn ten_spans() {
    let spans = text_to_spans("This is **bold** and _italic_ and `code` and ![i](u) and [l](v)");
    let kinds: Vec<_> = spans.iter().map(InlineSpan::kind).collect();
    assert_eq!(
        kinds,
        vec![
            SpanKind::Plain,
            SpanKind::Bold,
            SpanKind::Plain,
            SpanKind::Italic,
            SpanKind::Plain,
            SpanKind::Code,
            SpanKind::Plain,
            SpanKind::Image,
            SpanKind::Plain,
            SpanKind::Link,
        ]
    );
    assert_eq!(spans[7].url(), Some("u"));
    assert_eq!(spans[9].url(), Some("v"));
}

#[test]
fn title_and_body_from_same_source() {
    let doc = "# My Page\n\nWelcome to **my** page.\n";
    assert_eq!(extract_title(doc).unwrap(), "My Page");
    assert_eq!(
        render(doc).unwrap(),
        "<div><h1>My Page</h1><p>Welcome to <b>my</b> page.</p></div>"
    );
}

#[test]
fn missing_title_is_reported() {
    let err = extract_title("no heading here").unwrap_err();
    assert_eq!(err, Error::NoTitleFound);
    assert_eq!(err.to_string(), "no H1 title found in markdown");
}

#[test]
fn unsupported_span_is_loud() {
    let err = InlineSpan::new("u", SpanKind::Underline)
        .to_render_node()
        .unwrap_err();
    assert_eq!(err.to_string(), "unsupported span kind: underline");
}

#[test]
fn tree_can_be_inspected_before_serializing() {
    let root = markdown_to_html_node("- a\n- b\n- c").unwrap();
    let list = &root.children()[0];
    assert_eq!(list.tag(), Some("ul"));
    assert_eq!(list.children().len(), 3);
    assert!(list.children().iter().all(|li| li.tag() == Some("li")));
}
