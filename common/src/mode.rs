//! 分析模式定义
//!
//! 两种分析人格，各自绑定一套系统提示词与一个访问密钥。
//! 模式由用户在会话中选择，切换模式不影响已输入的档案内容。

use serde::{Deserialize, Serialize};

use crate::prompts::{PROMPT_DIAGNOSTIC, PROMPT_READER};

/// 分析模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// 漫游艺术诊断间（四人病理分析小组）
    #[default]
    Diagnostic,
    /// 漫游艺术领读人（领读式长文解读）
    Reader,
}

impl Mode {
    /// 单选框展示顺序
    pub const ALL: [Mode; 2] = [Mode::Diagnostic, Mode::Reader];

    /// 界面展示名
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Diagnostic => "漫游艺术诊断间",
            Mode::Reader => "漫游艺术领读人",
        }
    }

    /// 该模式的访问密钥（明文比对，仅作使用门槛，不是安全边界）
    pub fn access_code(&self) -> &'static str {
        match self {
            Mode::Diagnostic => "0006",
            Mode::Reader => "4006",
        }
    }

    /// 该模式使用的系统提示词模板
    pub fn system_instruction(&self) -> &'static str {
        match self {
            Mode::Diagnostic => PROMPT_DIAGNOSTIC,
            Mode::Reader => PROMPT_READER,
        }
    }
}
