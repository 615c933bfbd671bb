//! Gemini API 连携（流式生成）
//!
//! 一次提交对应一次 streamGenerateContent 调用：System Instruction +
//! 用户消息 + 单张图片进，SSE 文本片段序列出。片段逐个交给回调，
//! 远端任意失败中断整个流并返回 Generation 错误（已回调的片段由
//! 调用方保留）。

use art_mind_common::prompts::PromptPair;
use art_mind_common::stream::{fragment_from_line, SseLineBuffer};
use art_mind_common::{Error, Result};
use js_sys::{Reflect, Uint8Array};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{ReadableStreamDefaultReader, Request, RequestInit, RequestMode, Response};

use crate::image_source::{js_message, ResolvedImage};

/// 固定模型版本
const GEMINI_STREAM_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-3.0-pro:streamGenerateContent";

/// Gemini API 请求
#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

fn build_request(prompt: &PromptPair, image: &ResolvedImage) -> GenerateRequest {
    GenerateRequest {
        contents: vec![Content {
            parts: vec![
                Part::Text {
                    text: prompt.user_message.clone(),
                },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: image.mime_type.clone(),
                        data: image.base64.clone(),
                    },
                },
            ],
        }],
        system_instruction: Content {
            parts: vec![Part::Text {
                text: prompt.system_instruction.clone(),
            }],
        },
    }
}

/// 以 SSE 方式驱动一次生成调用
///
/// # Arguments
/// * `api_key` - Gemini API key
/// * `prompt` - 本次提交构建的提示词对
/// * `image` - 已解析图片
/// * `on_fragment` - 每个携带文本的片段回调一次
pub async fn stream_report(
    api_key: &str,
    prompt: &PromptPair,
    image: &ResolvedImage,
    mut on_fragment: impl FnMut(String),
) -> Result<()> {
    let request = build_request(prompt, image);
    let body =
        serde_json::to_string(&request).map_err(|e| Error::Generation(e.to_string()))?;
    let url = format!("{}?alt=sse&key={}", GEMINI_STREAM_URL, api_key);

    let mut opts = RequestInit::new();
    opts.method("POST");
    opts.mode(RequestMode::Cors);
    opts.body(Some(&JsValue::from_str(&body)));

    let request = Request::new_with_str_and_init(&url, &opts).map_err(generation_err)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(generation_err)?;

    let window =
        web_sys::window().ok_or_else(|| Error::Generation("window 不可用".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(generation_err)?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| Error::Generation("响应类型异常".to_string()))?;

    if !resp.ok() {
        return Err(Error::Generation(format!("API error: {}", resp.status())));
    }

    let body_stream = resp
        .body()
        .ok_or_else(|| Error::Generation("响应没有数据流".to_string()))?;
    let reader: ReadableStreamDefaultReader = body_stream
        .get_reader()
        .dyn_into()
        .map_err(|_| Error::Generation("无法读取数据流".to_string()))?;

    let mut lines = SseLineBuffer::default();
    loop {
        let step = JsFuture::from(reader.read()).await.map_err(generation_err)?;
        let done = Reflect::get(&step, &JsValue::from_str("done"))
            .map_err(generation_err)?
            .as_bool()
            .unwrap_or(true);
        if done {
            break;
        }

        let value = Reflect::get(&step, &JsValue::from_str("value")).map_err(generation_err)?;
        let bytes = Uint8Array::new(&value).to_vec();
        for line in lines.push(&bytes) {
            if let Some(fragment) = fragment_from_line(&line)? {
                on_fragment(fragment);
            }
        }
    }

    // 无换行结尾的残留行
    if let Some(line) = lines.flush() {
        if let Some(fragment) = fragment_from_line(&line)? {
            on_fragment(fragment);
        }
    }

    Ok(())
}

fn generation_err(value: JsValue) -> Error {
    Error::Generation(js_message(&value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> GenerateRequest {
        let prompt = PromptPair {
            system_instruction: "系统人格".to_string(),
            user_message: "用户消息".to_string(),
        };
        let image = ResolvedImage {
            mime_type: "image/jpeg".to_string(),
            base64: "base64data".to_string(),
        };
        build_request(&prompt, &image)
    }

    // =============================================
    // 请求序列化
    // =============================================

    #[test]
    fn test_request_serialize_shape() {
        let json = serde_json::to_string(&sample_request()).expect("序列化失败");

        assert!(json.contains("\"contents\""));
        assert!(json.contains("\"systemInstruction\""));
        assert!(json.contains("\"text\":\"用户消息\""));
        assert!(json.contains("\"text\":\"系统人格\""));
    }

    #[test]
    fn test_request_carries_inline_image() {
        let json = serde_json::to_string(&sample_request()).expect("序列化失败");

        assert!(json.contains("\"inline_data\""));
        assert!(json.contains("\"mime_type\":\"image/jpeg\""));
        assert!(json.contains("\"data\":\"base64data\""));
    }

    #[test]
    fn test_part_text_serialize() {
        let part = Part::Text {
            text: "Hello".to_string(),
        };
        let json = serde_json::to_string(&part).expect("序列化失败");
        assert_eq!(json, r#"{"text":"Hello"}"#);
    }

    #[test]
    fn test_stream_url_targets_sse_endpoint() {
        assert!(GEMINI_STREAM_URL.ends_with(":streamGenerateContent"));
    }
}
