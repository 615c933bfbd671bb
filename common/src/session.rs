//! 会话状态存储
//!
//! 单一的类型化状态结构，所有修改经由具名 setter 进行。
//! 字段的可交互性不单独存储，每次都从当前状态重新推导，
//! 规则只有一条：当前模式已解锁，且（对艺术家/年份输入框）
//! 对应的“未知”勾选未选中。

use crate::auth::AuthState;
use crate::error::Result;
use crate::mode::Mode;

/// “未知”占位值
pub const UNKNOWN: &str = "未知";

/// 作品档案
///
/// `artist` 与 `year` 保存用户最后一次自由输入的值，与“未知”勾选
/// 分开存放。取消勾选时输入框直接恢复输入值。读取生效值请使用
/// [`ArtworkRecord::artist`] / [`ArtworkRecord::year`]，勾选未知时
/// 它们固定返回 [`UNKNOWN`]。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtworkRecord {
    pub artist: String,
    pub artist_unknown: bool,
    pub title: String,
    pub year: String,
    pub year_unknown: bool,
}

impl ArtworkRecord {
    /// 生效的艺术家名
    pub fn artist(&self) -> &str {
        if self.artist_unknown {
            UNKNOWN
        } else {
            &self.artist
        }
    }

    /// 生效的创作年份
    pub fn year(&self) -> &str {
        if self.year_unknown {
            UNKNOWN
        } else {
            &self.year
        }
    }

    /// 作品名没有“未知”勾选，空值仅在构建提示词时替换为占位值
    pub fn title_or_default(&self) -> &str {
        if self.title.is_empty() {
            UNKNOWN
        } else {
            &self.title
        }
    }
}

/// 可交互性判定的目标字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ArtistText,
    ArtistUnknown,
    Title,
    YearText,
    YearUnknown,
}

/// 单一会话状态
///
/// 会话开始时新建，会话结束即丢弃，不做任何持久化。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub mode: Mode,
    pub auth: AuthState,
    pub record: ArtworkRecord,
}

impl SessionState {
    /// 切换模式，不清空任何字段值
    pub fn select_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn set_artist(&mut self, value: impl Into<String>) {
        self.record.artist = value.into();
    }

    pub fn set_artist_unknown(&mut self, unknown: bool) {
        self.record.artist_unknown = unknown;
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.record.title = value.into();
    }

    pub fn set_year(&mut self, value: impl Into<String>) {
        self.record.year = value.into();
    }

    pub fn set_year_unknown(&mut self, unknown: bool) {
        self.record.year_unknown = unknown;
    }

    /// 对当前选中的模式提交密钥
    pub fn submit_password(&mut self, candidate: &str) -> Result<()> {
        self.auth.submit_password(self.mode, candidate)
    }

    /// 当前模式是否已解锁
    pub fn is_unlocked(&self) -> bool {
        self.auth.is_unlocked(self.mode)
    }

    /// 字段可交互性推导（纯函数）
    pub fn is_enabled(&self, field: Field) -> bool {
        let unlocked = self.is_unlocked();
        match field {
            Field::ArtistText => unlocked && !self.record.artist_unknown,
            Field::YearText => unlocked && !self.record.year_unknown,
            Field::ArtistUnknown | Field::Title | Field::YearUnknown => unlocked,
        }
    }

    /// 侧边栏系统状态文案
    pub fn status_line(&self) -> &'static str {
        if self.is_unlocked() {
            "CORE MODULE LOADED"
        } else {
            "WAITING FOR AUTH..."
        }
    }
}
