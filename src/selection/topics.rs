//! 主题表现聚合：统计每个主题的题量、作答数、答对数、正确率与覆盖率。

use std::collections::HashMap;

use crate::selection::types::{HistoryMap, Question, TopicStats, TopicStatsMap};

/// 整数百分比，四舍五入（0.5 进位）；分母为 0 时返回 0
pub fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    let part = u64::from(part);
    let whole = u64::from(whole);
    ((part * 200 + whole) / (2 * whole)) as u32
}

/// 基于完整候选题池与作答历史构建主题统计。
///
/// 历史中已不在题池内的题目（已下架）直接忽略；题量为 0 的主题不会出现在结果中。
pub fn build_topic_performance(pool: &[Question], history: &HistoryMap) -> TopicStatsMap {
    let mut totals: HashMap<&str, u32> = HashMap::new();
    let mut topic_by_id: HashMap<&str, &str> = HashMap::with_capacity(pool.len());
    for question in pool {
        *totals.entry(question.topic.as_str()).or_insert(0) += 1;
        topic_by_id.insert(question.id.as_str(), question.topic.as_str());
    }

    // (attempted, correct)
    let mut progress: HashMap<&str, (u32, u32)> = HashMap::new();
    for entry in history.values() {
        let Some(&topic) = topic_by_id.get(entry.question_id.as_str()) else {
            continue;
        };
        let counts = progress.entry(topic).or_insert((0, 0));
        counts.0 += 1;
        if entry.ever_correct {
            counts.1 += 1;
        }
    }

    totals
        .into_iter()
        .filter(|(_, total)| *total > 0)
        .map(|(topic, total_available)| {
            let (attempted, correct) = progress.get(topic).copied().unwrap_or_default();
            // 题池内 id 重复时作答数可能超过题量，此处截断以维持 attempted <= total
            let attempted = attempted.min(total_available);
            let correct = correct.min(attempted);
            let stats = TopicStats {
                topic: topic.to_string(),
                total_available,
                attempted,
                correct,
                accuracy: percent(correct, attempted),
                coverage: percent(attempted, total_available),
            };
            (topic.to_string(), stats)
        })
        .collect()
}
