// Aggregation over the top-ranked stored records.
// Pure summarization; nothing here recomputes pipeline outputs.

use serde::Serialize;
use std::collections::HashMap;

use crate::models::resume::ResumeRow;
use crate::sentiment::Sentiment;

/// How many of the most frequent skills the summary reports.
const TOP_SKILLS: usize = 10;

#[derive(Debug, Default, Serialize, PartialEq)]
pub struct SentimentCounts {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

/// Chart-ready aggregates over a set of records: skill frequencies, the score
/// list with candidate names, an education histogram, and sentiment counts.
#[derive(Debug, Default, Serialize)]
pub struct AnalyticsSummary {
    pub skills: Vec<String>,
    pub skill_freqs: Vec<u32>,
    pub ranking_scores: Vec<f64>,
    pub candidate_names: Vec<String>,
    pub education_levels: Vec<String>,
    pub education_counts: Vec<u32>,
    pub sentiments: SentimentCounts,
}

/// Summarizes the given records, expected to already be the top-N by score.
pub fn summarize(rows: &[ResumeRow]) -> AnalyticsSummary {
    let mut summary = AnalyticsSummary::default();

    let mut skill_counts: HashMap<&str, u32> = HashMap::new();
    let mut education_levels: Vec<String> = Vec::new();
    let mut education_counts: Vec<u32> = Vec::new();

    for row in rows {
        summary.ranking_scores.push(row.ranking_score.unwrap_or(0.0));
        summary.candidate_names.push(row.name.clone());

        for skill in row.skills.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            *skill_counts.entry(skill).or_default() += 1;
        }

        // Histogram buckets appear in first-seen order.
        match education_levels.iter().position(|e| e == &row.education) {
            Some(i) => education_counts[i] += 1,
            None => {
                education_levels.push(row.education.clone());
                education_counts.push(1);
            }
        }

        match row.sentiment.as_str() {
            s if s == Sentiment::Positive.label() => summary.sentiments.positive += 1,
            s if s == Sentiment::Negative.label() => summary.sentiments.negative += 1,
            _ => summary.sentiments.neutral += 1,
        }
    }

    // Most frequent skills first; ties break alphabetically so the output is
    // stable across runs.
    let mut ranked: Vec<(&str, u32)> = skill_counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    for (skill, freq) in ranked.into_iter().take(TOP_SKILLS) {
        summary.skills.push(skill.to_string());
        summary.skill_freqs.push(freq);
    }

    summary.education_levels = education_levels;
    summary.education_counts = education_counts;
    summary
}
