//! 流式响应解析
//!
//! streamGenerateContent (alt=sse) 以 "data: {json}" 行返回增量片段。
//! 这里负责两件事:
//! - SseLineBuffer: 把到达的字节块切分成完整行（块边界可能落在
//!   多字节字符中间，因此按字节缓冲，只对完整行做 UTF-8 转换）
//! - fragment_from_line: 从单行中抽取文本片段，无文本的块跳过

use serde::Deserialize;

use crate::error::{Error, Result};

/// 跨读取块的行缓冲
#[derive(Debug, Default)]
pub struct SseLineBuffer {
    buf: Vec<u8>,
}

impl SseLineBuffer {
    /// 追加一个字节块，返回其中包含的所有完整行（已去掉行尾换行）
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buf.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let raw: Vec<u8> = self.buf.drain(..=pos).collect();
            let line = String::from_utf8_lossy(&raw);
            lines.push(line.trim_end_matches(['\n', '\r']).to_string());
        }
        lines
    }

    /// 流结束时冲出残留的最后一行（无换行结尾的情况）
    pub fn flush(&mut self) -> Option<String> {
        if self.buf.is_empty() {
            return None;
        }
        let raw = std::mem::take(&mut self.buf);
        Some(String::from_utf8_lossy(&raw).trim_end_matches('\r').to_string())
    }
}

/// 流式响应的单个块
#[derive(Debug, Deserialize)]
struct StreamChunk {
    #[serde(default)]
    candidates: Vec<StreamCandidate>,
}

#[derive(Debug, Deserialize)]
struct StreamCandidate {
    // 收尾块可能只有 finishReason 而没有 content
    content: Option<ChunkContent>,
}

#[derive(Debug, Deserialize)]
struct ChunkContent {
    #[serde(default)]
    parts: Vec<ChunkPart>,
}

#[derive(Debug, Deserialize)]
struct ChunkPart {
    #[serde(default)]
    text: String,
}

/// 从单行 SSE 中抽取文本片段
///
/// # Returns
/// * `Ok(Some(text))` - data 行且携带非空文本
/// * `Ok(None)` - 非 data 行，或该块没有文本（逐块的 has-text 保护）
/// * `Err(Error::Generation)` - data 行的 JSON 损坏，流应当中断
pub fn fragment_from_line(line: &str) -> Result<Option<String>> {
    let Some(payload) = line.strip_prefix("data:") else {
        return Ok(None);
    };
    let payload = payload.trim();
    if payload.is_empty() {
        return Ok(None);
    }

    let chunk: StreamChunk = serde_json::from_str(payload)
        .map_err(|e| Error::Generation(format!("响应格式异常: {}", e)))?;

    let text: String = chunk
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        Ok(None)
    } else {
        Ok(Some(text))
    }
}
