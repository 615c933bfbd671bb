//! 启动配置
//!
//! 唯一的外部凭证是 Gemini API Key，由部署方注入宿主页面的
//! `<meta name="gemini-api-key">`。挂载时读取一次，缺失视为
//! 致命启动错误，界面停在错误提示上不再挂接交互。

use art_mind_common::{Error, Result};
use wasm_bindgen::JsCast;
use web_sys::HtmlMetaElement;

/// 宿主页面中承载密钥的 meta 标签名
const API_KEY_META_NAME: &str = "gemini-api-key";

/// 读取 API Key
pub fn load_api_key() -> Result<String> {
    let content = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| {
            document
                .query_selector(&format!("meta[name=\"{}\"]", API_KEY_META_NAME))
                .ok()
                .flatten()
        })
        .and_then(|element| element.dyn_into::<HtmlMetaElement>().ok())
        .map(|meta| meta.content())
        .unwrap_or_default();

    let key = content.trim().to_string();
    if key.is_empty() {
        return Err(Error::Config(
            "未检测到密钥配置。请在部署环境中注入 GEMINI_API_KEY。".to_string(),
        ));
    }
    Ok(key)
}
