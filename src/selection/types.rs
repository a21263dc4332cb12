use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 题目：由外部题库提供，引擎只读取 id / topic / subtopic，其余内容字段原样保留。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtopic: Option<String>,
    #[serde(flatten)]
    pub content: serde_json::Map<String, serde_json::Value>,
}

impl Question {
    pub fn new(id: &str, topic: &str) -> Self {
        Self {
            id: id.to_string(),
            topic: topic.to_string(),
            subtopic: None,
            content: serde_json::Map::new(),
        }
    }

    pub fn with_subtopic(mut self, subtopic: &str) -> Self {
        self.subtopic = Some(subtopic.to_string());
        self
    }
}

/// 原始作答记录（一次作答一条，可能乱序、可能重复）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRecord {
    pub question_id: String,
    pub is_correct: bool,
    pub attempted_at: DateTime<Utc>,
}

/// 单题归并后的作答历史
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub question_id: String,
    /// 只要有一次答对即为 true，之后不再回退
    pub ever_correct: bool,
    pub last_attempted_at: DateTime<Utc>,
    pub attempt_count: u32,
}

/// 按题目 id 索引的作答历史；迭代顺序没有任何语义。
pub type HistoryMap = HashMap<String, HistoryEntry>;

/// 单个主题的表现统计，accuracy / coverage 为 0-100 的整数百分比
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicStats {
    pub topic: String,
    pub total_available: u32,
    pub attempted: u32,
    pub correct: u32,
    pub accuracy: u32,
    pub coverage: u32,
}

/// 按主题名索引的统计；迭代顺序没有任何语义。
pub type TopicStatsMap = HashMap<String, TopicStats>;

/// 单次选题请求的可选参数，权重字段缺省时取默认权重
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionOptions {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub subtopic: Option<String>,
    #[serde(default)]
    pub wrong_answer_weight: Option<f64>,
    #[serde(default)]
    pub low_coverage_weight: Option<f64>,
    #[serde(default)]
    pub never_attempted_weight: Option<f64>,
    #[serde(default)]
    pub spaced_repetition_weight: Option<f64>,
}

impl SelectionOptions {
    /// 题目是否满足 topic / subtopic 过滤条件（精确匹配）
    pub fn matches(&self, question: &Question) -> bool {
        if let Some(topic) = &self.topic {
            if &question.topic != topic {
                return false;
            }
        }
        if let Some(subtopic) = &self.subtopic {
            if question.subtopic.as_ref() != Some(subtopic) {
                return false;
            }
        }
        true
    }
}

/// 排序用的打分单元
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredQuestion {
    pub question_id: String,
    pub score: f64,
    pub is_new: bool,
}

/// 选题结果的解释性汇总
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsSummary {
    pub reviewing_missed: u32,
    pub new_questions: u32,
    pub spaced_review: u32,
    pub topics_needing_coverage: BTreeSet<String>,
}

impl InsightsSummary {
    /// 已归入某个解释类别的题目数；1-3 天前答对过的题目不属于任何类别
    pub fn total(&self) -> u32 {
        self.reviewing_missed + self.new_questions + self.spaced_review
    }
}
