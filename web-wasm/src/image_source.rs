//! 图片输入解析
//!
//! 本地上传与 URL 拉取统一产出 ResolvedImage。任何失败都在这里
//! 转换成用户可见的错误，不再向上传播：
//! - 字节无法识别为图片 -> Decode（界面以警告展示，可换图重试）
//! - 拉取失败（网络 / HTTP 状态 / 超时）-> ImageFetch，携带原因

use art_mind_common::image::sniff_format;
use art_mind_common::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use gloo::timers::callback::Timeout;
use js_sys::Uint8Array;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Request, RequestInit, RequestMode, Response};

/// URL 拉取超时（毫秒）
const FETCH_TIMEOUT_MS: u32 = 10_000;

/// 当前提交持有的已解析图片
///
/// 每次新的上传或拉取整体替换；None 表示“尚无图片”，也是合法状态。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    pub mime_type: String,
    pub base64: String,
}

impl ResolvedImage {
    /// 预览用 Data URL
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64)
    }
}

/// 从上传的文件字节解析图片
///
/// # Returns
/// * `Ok(ResolvedImage)` - 识别成功
/// * `Err(Error::Decode)` - 字节不是支持的图片格式
pub fn resolve_from_bytes(bytes: &[u8]) -> Result<ResolvedImage> {
    let format = sniff_format(bytes).ok_or(Error::Decode)?;
    Ok(ResolvedImage {
        mime_type: format.mime_type().to_string(),
        base64: STANDARD.encode(bytes),
    })
}

/// 从远程 URL 拉取并解析图片
///
/// 10 秒超时。网络错误、非 2xx 状态、响应体不是图片，
/// 都折叠为带原因的 ImageFetch / Decode 错误。
pub async fn resolve_from_url(url: &str) -> Result<ResolvedImage> {
    let controller =
        AbortController::new().map_err(|e| Error::ImageFetch(js_message(&e)))?;
    let abort_handle = controller.clone();
    let _timeout = Timeout::new(FETCH_TIMEOUT_MS, move || abort_handle.abort());

    let mut opts = RequestInit::new();
    opts.method("GET");
    opts.mode(RequestMode::Cors);
    opts.signal(Some(&controller.signal()));

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| Error::ImageFetch(js_message(&e)))?;

    let window = web_sys::window().ok_or_else(|| Error::ImageFetch("window 不可用".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| Error::ImageFetch(js_message(&e)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| Error::ImageFetch("响应类型异常".to_string()))?;

    if !resp.ok() {
        return Err(Error::ImageFetch(format!("HTTP {}", resp.status())));
    }

    let buffer = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| Error::ImageFetch(js_message(&e)))?,
    )
    .await
    .map_err(|e| Error::ImageFetch(js_message(&e)))?;

    let bytes = Uint8Array::new(&buffer).to_vec();
    resolve_from_bytes(&bytes)
}

/// JsValue 错误转可读文案
pub(crate) fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
