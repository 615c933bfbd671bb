//! 提示词构建模块
//!
//! - PROMPT_DIAGNOSTIC / PROMPT_READER: 两种模式的固定系统提示词
//! - build_prompt: 由当前档案状态组装一次提交用的 System/User 提示词对
//!
//! 构建过程是纯函数，相同输入产出逐字节相同的结果，每次提交重新构建，
//! 不跨提交缓存。

use serde::{Deserialize, Serialize};

use crate::mode::Mode;
use crate::session::ArtworkRecord;

/// 诊断间系统提示词
pub const PROMPT_DIAGNOSTIC: &str = r#"
# System Role: 跨学科临床艺术诊断组
你不再是普通的艺术评论家，你是一个由四位拥有极强个人风格的专家组成的**“病理分析小组”。**
请严格使用中文输出。

专家角色设定:
1. 脑洞张 (神经认知专家): 风格像读脑成像报告，关注视觉算法。
2. 心魔李 (精神分析侦探): 风格隐喻流动，关注潜意识。
3. 原始王 (演化行为学家): 风格粗鄙辛辣，关注生存本能。
4. 时光吴 (宏观社会学家): 风格宏大，关注历史切片。

诊断流程:
Part 1. 直觉定调 (原型与意象)
Part 2. 圆桌会诊 (时代、物理、躯体、关系)
Part 3. 提问 (向观众抛出洞察)

语调控制: 拒绝翻译腔，金句密度高。
"#;

/// 领读人系统提示词
pub const PROMPT_READER: &str = r#"
# System Role: 漫游艺术领读人
请严格使用中文输出。

## 01. 关于创造者 (三句侧写)
1. 身份定位与核心母题。
2. 独特的怪癖或 Fun Fact。
3. 艺术风格的异类之处。

## 02. 目击现场
描述氛围与客观事实。

## 03. 意象解剖
主体定性、意象深挖、情感传导。

## 04. 看画小记 01：重构灵魂
以第一视角拆解布局，挖掘视觉之外的生理性幻觉（痛感、窒息感等）。

## 05. 看画小记 02：反向审问
为什么是这副模样？作者想揭露什么？

## 06. 观后余音
留下一段直击心灵的观后感。
"#;

/// 艺术家未知时附加的修正指令（盲测模式，仅凭画面证据分析）
const CORRECTION_BLIND_ARTIST: &str = r#"
[特别修正指令 - 关于艺术家]
⚠️ 用户声明：艺术家身份未知。
1. 请完全忽略原 System Prompt 中关于“作者背景、生平、画风对比”的要求。
2. 强制执行“盲测模式”：仅基于画面存在的视觉证据（色彩、笔触、构图、光影）进行分析。
3. 禁止猜测可能是哪位艺术家，只分析“这看起来像什么风格”。
"#;

/// 年份未知时附加的修正指令（跳过年代断代，改由风格推测时间感）
const CORRECTION_UNKNOWN_YEAR: &str = r#"
[特别修正指令 - 关于时间]
⚠️ 用户声明：创作年份未知。
1. 请跳过基于特定历史年份的社会学/宏观背景分析。
2. 替代策略：请根据画面风格、服饰或物体特征，推测其“可能的年代范围”或“时间感”。
"#;

/// 一次提交对应的提示词对
///
/// 构建完成后不再修改；档案或图片变化后需重新构建。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptPair {
    pub system_instruction: String,
    pub user_message: String,
}

/// 组装提示词对
///
/// 1. 按模式选取固定系统提示词
/// 2. 用户消息嵌入档案信息块，空作品名替换为“未知”
/// 3. 按未知勾选追加对应修正指令
/// 4. 收尾指令要求将系统人格应用于所附图片
///
/// 构建不会失败，残缺输入产出降级但合法的提示词。
pub fn build_prompt(mode: Mode, record: &ArtworkRecord) -> PromptPair {
    let mut corrections = String::new();
    if record.artist_unknown {
        corrections.push_str(CORRECTION_BLIND_ARTIST);
    }
    if record.year_unknown {
        corrections.push_str(CORRECTION_UNKNOWN_YEAR);
    }

    let user_message = format!(
        r#"【艺术品档案】
艺术家: {artist}
作品名: {title}
年份: {year}
{corrections}
请基于 System Instruction 中的角色设定，结合上述[特别修正指令]，对这张图片进行深度分析。"#,
        artist = record.artist(),
        title = record.title_or_default(),
        year = record.year(),
    );

    PromptPair {
        system_instruction: mode.system_instruction().to_string(),
        user_message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(artist: &str, title: &str, year: &str) -> ArtworkRecord {
        ArtworkRecord {
            artist: artist.to_string(),
            title: title.to_string(),
            year: year.to_string(),
            ..Default::default()
        }
    }

    // =============================================
    // 档案信息块
    // =============================================

    #[test]
    fn test_build_prompt_embeds_record() {
        let pair = build_prompt(Mode::Diagnostic, &record("弗朗西斯·培根", "肖像习作", "1953"));

        assert!(pair.user_message.contains("艺术家: 弗朗西斯·培根"));
        assert!(pair.user_message.contains("作品名: 肖像习作"));
        assert!(pair.user_message.contains("年份: 1953"));
    }

    #[test]
    fn test_build_prompt_empty_title_defaults_to_unknown() {
        let pair = build_prompt(Mode::Reader, &record("某人", "", "2001"));
        assert!(pair.user_message.contains("作品名: 未知"));
    }

    #[test]
    fn test_build_prompt_selects_template_by_mode() {
        let r = record("a", "b", "c");
        let diagnostic = build_prompt(Mode::Diagnostic, &r);
        let reader = build_prompt(Mode::Reader, &r);

        assert_eq!(diagnostic.system_instruction, PROMPT_DIAGNOSTIC);
        assert_eq!(reader.system_instruction, PROMPT_READER);
        assert_eq!(diagnostic.user_message, reader.user_message);
    }

    // =============================================
    // 修正指令的条件插入
    // =============================================

    #[test]
    fn test_blind_fragment_only_when_artist_unknown() {
        let mut r = record("培根", "习作", "1953");
        let without = build_prompt(Mode::Diagnostic, &r);
        assert!(!without.user_message.contains("盲测模式"));

        r.artist_unknown = true;
        let with = build_prompt(Mode::Diagnostic, &r);
        assert!(with.user_message.contains("盲测模式"));
        assert!(with.user_message.contains("艺术家身份未知"));
    }

    #[test]
    fn test_year_fragment_only_when_year_unknown() {
        let mut r = record("培根", "习作", "1953");
        let without = build_prompt(Mode::Diagnostic, &r);
        assert!(!without.user_message.contains("创作年份未知"));

        r.year_unknown = true;
        let with = build_prompt(Mode::Diagnostic, &r);
        assert!(with.user_message.contains("创作年份未知"));
        assert!(with.user_message.contains("可能的年代范围"));
    }

    #[test]
    fn test_unknown_artist_end_to_end() {
        let mut r = record("被覆盖的名字", "Study", "1953");
        r.artist_unknown = true;
        let pair = build_prompt(Mode::Diagnostic, &r);

        // 勾选未知后档案值固定为“未知”，且只带盲测指令，不带年代指令
        assert!(pair.user_message.contains("艺术家: 未知"));
        assert!(pair.user_message.contains("盲测模式"));
        assert!(!pair.user_message.contains("创作年份未知"));
        assert!(pair.user_message.contains("作品名: Study"));
        assert!(pair.user_message.contains("年份: 1953"));
    }

    #[test]
    fn test_both_fragments_when_both_unknown() {
        let mut r = record("", "", "");
        r.artist_unknown = true;
        r.year_unknown = true;
        let pair = build_prompt(Mode::Reader, &r);

        assert!(pair.user_message.contains("盲测模式"));
        assert!(pair.user_message.contains("可能的年代范围"));
    }

    // =============================================
    // 确定性与收尾指令
    // =============================================

    #[test]
    fn test_build_prompt_is_deterministic() {
        let mut r = record("培根", "肖像习作", "1953");
        r.year_unknown = true;

        let first = build_prompt(Mode::Diagnostic, &r);
        let second = build_prompt(Mode::Diagnostic, &r);
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_prompt_closing_instruction() {
        let pair = build_prompt(Mode::Reader, &record("a", "b", "c"));
        assert!(pair
            .user_message
            .ends_with("请基于 System Instruction 中的角色设定，结合上述[特别修正指令]，对这张图片进行深度分析。"));
    }

    #[test]
    fn test_build_prompt_degrades_on_empty_record() {
        let pair = build_prompt(Mode::Diagnostic, &ArtworkRecord::default());

        // 全空档案仍产出合法提示词
        assert!(pair.user_message.contains("作品名: 未知"));
        assert!(!pair.system_instruction.is_empty());
    }
}
