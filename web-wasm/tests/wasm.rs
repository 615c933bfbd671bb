//! 浏览器环境冒烟测试
//!
//! wasm-pack test --headless --chrome web-wasm

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn api_key_resolution_from_meta_tag() {
    // 未注入 meta 时为致命配置错误
    assert!(art_mind_wasm::config::load_api_key().is_err());

    // 注入后读取成功
    let document = web_sys::window().unwrap().document().unwrap();
    let meta = document.create_element("meta").unwrap();
    meta.set_attribute("name", "gemini-api-key").unwrap();
    meta.set_attribute("content", "test-key").unwrap();
    document.body().unwrap().append_child(&meta).unwrap();

    let key = art_mind_wasm::config::load_api_key().unwrap();
    assert_eq!(key, "test-key");

    meta.remove();
}

#[wasm_bindgen_test]
fn resolve_from_bytes_in_browser() {
    let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00];
    let resolved = art_mind_wasm::image_source::resolve_from_bytes(&png).unwrap();
    assert_eq!(resolved.mime_type, "image/png");
}
