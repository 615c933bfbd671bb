//! 报告转写状态
//!
//! 一次提交的增量文本积累。流式进行中渲染文本带进度游标，
//! 结束后去掉游标；中途失败保留已到达的全部文本。
//! 新的提交整体替换上一份转写，没有历史记录。

/// 流式进度游标
pub const CURSOR: &str = "▌";

/// 转写所处阶段
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StreamPhase {
    /// 尚未发起过生成
    #[default]
    Idle,
    /// 片段陆续到达中
    Streaming,
    /// 流正常走完
    Done,
    /// 远端中途失败，已到达的文本保留
    Failed,
}

/// 一次提交的报告转写
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportTranscript {
    text: String,
    phase: StreamPhase,
}

impl ReportTranscript {
    /// 开始一次新的转写（替换旧内容）
    pub fn start() -> Self {
        ReportTranscript {
            text: String::new(),
            phase: StreamPhase::Streaming,
        }
    }

    /// 追加一个片段，空片段跳过
    pub fn push_fragment(&mut self, fragment: &str) {
        if fragment.is_empty() {
            return;
        }
        self.text.push_str(fragment);
    }

    pub fn finish(&mut self) {
        self.phase = StreamPhase::Done;
    }

    pub fn fail(&mut self) {
        self.phase = StreamPhase::Failed;
    }

    pub fn phase(&self) -> StreamPhase {
        self.phase
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_streaming(&self) -> bool {
        self.phase == StreamPhase::Streaming
    }

    /// 渲染文本。仅流式进行中追加游标。
    pub fn display_text(&self) -> String {
        match self.phase {
            StreamPhase::Streaming => format!("{}{}", self.text, CURSOR),
            _ => self.text.clone(),
        }
    }
}
