use chrono::{DateTime, Utc};

use crate::constants::{LOW_COVERAGE_THRESHOLD, SPACED_REVIEW_DAYS};
use crate::selection::scorer::days_since;
use crate::selection::types::{HistoryMap, InsightsSummary, Question, TopicStatsMap};

/// 对最终入选的题目做归类统计，解释这一批题目的构成
pub fn summarize_selection(
    selected: &[&Question],
    history: &HistoryMap,
    topic_stats: &TopicStatsMap,
    now: DateTime<Utc>,
) -> InsightsSummary {
    let mut summary = InsightsSummary::default();

    for question in selected {
        match history.get(&question.id) {
            None => summary.new_questions += 1,
            Some(entry) if !entry.ever_correct => summary.reviewing_missed += 1,
            Some(entry) => {
                if days_since(entry.last_attempted_at, now) >= SPACED_REVIEW_DAYS {
                    summary.spaced_review += 1;
                }
            }
        }

        if let Some(stats) = topic_stats.get(&question.topic) {
            if stats.coverage < LOW_COVERAGE_THRESHOLD {
                summary.topics_needing_coverage.insert(question.topic.clone());
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::types::{HistoryEntry, TopicStats};
    use chrono::Duration;

    fn entry(id: &str, correct: bool, days_ago: i64, now: DateTime<Utc>) -> (String, HistoryEntry) {
        (
            id.to_string(),
            HistoryEntry {
                question_id: id.to_string(),
                ever_correct: correct,
                last_attempted_at: now - Duration::days(days_ago),
                attempt_count: 1,
            },
        )
    }

    fn topic(name: &str, coverage: u32) -> (String, TopicStats) {
        (
            name.to_string(),
            TopicStats {
                topic: name.to_string(),
                total_available: 10,
                attempted: coverage / 10,
                correct: 0,
                accuracy: 0,
                coverage,
            },
        )
    }

    #[test]
    fn classifies_each_bucket() {
        let now = Utc::now();
        let questions = [
            Question::new("new", "A"),
            Question::new("missed", "A"),
            Question::new("stale", "B"),
            Question::new("fresh", "B"),
        ];
        let selected: Vec<&Question> = questions.iter().collect();
        let history: HistoryMap = [
            entry("missed", false, 0, now),
            entry("stale", true, 4, now),
            entry("fresh", true, 2, now),
        ]
        .into_iter()
        .collect();
        let stats: TopicStatsMap = [topic("A", 20), topic("B", 50)].into_iter().collect();

        let summary = summarize_selection(&selected, &history, &stats, now);
        assert_eq!(summary.new_questions, 1);
        assert_eq!(summary.reviewing_missed, 1);
        assert_eq!(summary.spaced_review, 1);
        assert_eq!(summary.total(), 3);
        assert_eq!(
            summary.topics_needing_coverage.into_iter().collect::<Vec<_>>(),
            vec!["A".to_string()]
        );
    }

    #[test]
    fn empty_selection_is_all_zero() {
        let summary =
            summarize_selection(&[], &HistoryMap::new(), &TopicStatsMap::new(), Utc::now());
        assert_eq!(summary, InsightsSummary::default());
    }

    #[test]
    fn topics_without_stats_are_not_listed() {
        let q = Question::new("q1", "Unknown");
        let summary =
            summarize_selection(&[&q], &HistoryMap::new(), &TopicStatsMap::new(), Utc::now());
        assert_eq!(summary.new_questions, 1);
        assert!(summary.topics_needing_coverage.is_empty());
    }
}
