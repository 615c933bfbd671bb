//! 错误类型定义

use thiserror::Error;

/// 共享错误类型
///
/// 所有 Display 文案直接面向用户展示，因此使用中文。
#[derive(Error, Debug)]
pub enum Error {
    /// 启动时缺少必需的凭证（致命，界面停止挂接交互）
    #[error("配置错误: {0}")]
    Config(String),

    /// 图片 URL 拉取失败（网络、HTTP 状态或内容问题）
    #[error("图片加载失败: {0}")]
    ImageFetch(String),

    /// 字节数据无法识别为支持的图片格式
    #[error("无法识别的图片数据，请使用 JPG / PNG 图片")]
    Decode,

    /// 密钥不匹配，锁定状态保持不变
    #[error("密钥错误，访问被拒绝。")]
    AuthDenied,

    /// 生成调用期间的任意失败（部分已渲染文本予以保留）
    #[error("运行时错误: {0}")]
    Generation(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, Error>;
