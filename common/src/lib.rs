//! Art Mind Common Library
//!
//! Web(WASM) 界面之下的全部会话逻辑：模式与权限、档案状态、
//! 提示词构建、流式片段解析、报告转写。不含任何 I/O。

pub mod auth;
pub mod error;
pub mod image;
pub mod mode;
pub mod prompts;
pub mod report;
pub mod session;
pub mod stream;

pub use auth::AuthState;
pub use error::{Error, Result};
pub use image::{sniff_format, ImageFormat};
pub use mode::Mode;
pub use prompts::{build_prompt, PromptPair};
pub use report::{ReportTranscript, StreamPhase, CURSOR};
pub use session::{ArtworkRecord, Field, SessionState, UNKNOWN};
pub use stream::{fragment_from_line, SseLineBuffer};
