//! 图片数据工具
//!
//! 本地上传与 URL 拉取两条路径共用的纯函数:
//! - sniff_format: 按魔数识别光栅格式
//! - data_url_base64 / data_url_mime: Data URL 解析

/// 支持的光栅图片格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Webp,
}

impl ImageFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Webp => "image/webp",
        }
    }
}

/// 按魔数识别图片格式
///
/// 识别不了返回 None，由调用方转换为解码错误。
pub fn sniff_format(bytes: &[u8]) -> Option<ImageFormat> {
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some(ImageFormat::Jpeg);
    }
    if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some(ImageFormat::Png);
    }
    // WebP: RIFF....WEBP
    if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return Some(ImageFormat::Webp);
    }
    None
}

/// 从 Data URL 提取 Base64 数据部分
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,/9j/4AAQ..." 形式
///
/// # Returns
/// Base64 部分，格式不符时返回 None
pub fn data_url_base64(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// 从 Data URL 提取 MIME 类型，提取失败时默认 "image/jpeg"
pub fn data_url_mime(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .unwrap_or("image/jpeg")
}
