use wasm_bindgen::prelude::*;

fn to_js(err: mdhtml::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub fn render_markdown(input: &str) -> Result<String, JsValue> {
    mdhtml::render_with(input, &mdhtml::Config::default()).map_err(to_js)
}

#[wasm_bindgen]
pub fn markdown_title(input: &str) -> Result<String, JsValue> {
    mdhtml::extract_title(input).map_err(to_js)
}

/// One `kind: "block"` line per block, in document order.
#[wasm_bindgen]
pub fn blocks_debug(input: &str) -> String {
    mdhtml::markdown_to_blocks(input)
        .into_iter()
        .map(|block| format!("{}: {block:?}", mdhtml::block_to_block_kind(block)))
        .collect::<Vec<_>>()
        .join("\n")
}
