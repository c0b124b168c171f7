use crate::block_parser::{BlockKind, block_to_block_kind, markdown_to_blocks};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn assert_block_kinds(input: &str, expected: &[BlockKind]) {
    init_logger();
    let actual: Vec<_> = markdown_to_blocks(input)
        .into_iter()
        .map(block_to_block_kind)
        .collect();
    assert_eq!(
        actual, expected,
        "Block kinds did not match for input:\n{}",
        input
    );
}

pub fn assert_kind(block: &str, expected: BlockKind) {
    init_logger();
    assert_eq!(
        block_to_block_kind(block),
        expected,
        "Wrong kind for block:\n{}",
        block
    );
}
