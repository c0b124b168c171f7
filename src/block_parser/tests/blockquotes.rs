use crate::block_parser::BlockKind;
use crate::block_parser::tests::helpers::assert_kind;

#[test]
fn quote_block() {
    assert_kind("> Quote line 1\n> Quote line 2", BlockKind::Quote);
}

#[test]
fn marker_without_space() {
    assert_kind(">tight\n>lines", BlockKind::Quote);
}

#[test]
fn nested_markers() {
    assert_kind(">> nested\n> outer", BlockKind::Quote);
}

#[test]
fn lazy_continuation_is_paragraph() {
    assert_kind("> quoted\nnot quoted", BlockKind::Paragraph);
}
