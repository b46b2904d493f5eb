use crate::models::{ChartSeries, InsightsResponse, MoodCount, MoodEntry};

/// Entries feeding the short-term trend statistics.
pub const WINDOW_SIZE: usize = 7;

const MSG_NO_ENTRIES: &str = "Start tracking to see patterns.";
const MSG_HIGH_PRESSURE: &str = "You've been under high pressure lately. Take it slow.";
const MSG_WAVES: &str = "You're navigating some waves. Keep reflecting.";
const MSG_FLOW: &str = "You're finding your flow. Maintain this clarity.";

const ADVICE_SPACE: &str =
    "It sounds like you need some room to breathe. Step away and take a quiet moment for yourself.";
const ADVICE_BREATHING: &str =
    "Work pressure is weighing on you. Try a slow breathing round: four counts in, hold, four counts out.";
const ADVICE_HIGH: &str = "Your intensity has been running high. Be gentle with yourself today.";
const ADVICE_REFLECT: &str =
    "Keep reflecting. Writing things down is already a step toward clarity.";

// Keyword rules for high-intensity entries, checked top to bottom against the
// lowercased note. First match wins.
const ADVICE_KEYWORDS: &[(&[&str], &str)] = &[
    (&["alone", "space"], ADVICE_SPACE),
    (&["work", "pressure"], ADVICE_BREATHING),
];

pub fn build_insights(entries: &[MoodEntry]) -> InsightsResponse {
    let window = recent_window(entries, WINDOW_SIZE);
    let average = average_intensity(window);
    InsightsResponse {
        entry_count: entries.len(),
        average_intensity: average,
        weekly_message: weekly_insight_message(average, !window.is_empty()).to_string(),
        companion_advice: companion_advice(entries.last()).to_string(),
        mood_frequency: mood_frequency(entries),
        chart: chart_series(window),
    }
}

/// The last `n` entries in storage order, or all of them when fewer exist.
pub fn recent_window(entries: &[MoodEntry], n: usize) -> &[MoodEntry] {
    &entries[entries.len().saturating_sub(n)..]
}

/// Mean stress score over the window, rounded to one decimal place.
/// An empty window averages 0.
pub fn average_intensity(window: &[MoodEntry]) -> f64 {
    if window.is_empty() {
        return 0.0;
    }
    let sum: u32 = window.iter().map(|entry| u32::from(entry.stress_score)).sum();
    let average = f64::from(sum) / window.len() as f64;
    (average * 10.0).round() / 10.0
}

/// Occurrences per distinct mood label, in first-seen order.
pub fn mood_frequency(entries: &[MoodEntry]) -> Vec<MoodCount> {
    let mut counts: Vec<MoodCount> = Vec::new();
    for entry in entries {
        match counts.iter_mut().find(|count| count.mood == entry.mood) {
            Some(count) => count.count += 1,
            None => counts.push(MoodCount {
                mood: entry.mood.clone(),
                count: 1,
            }),
        }
    }
    counts
}

/// Trend message for the recent window. Boundaries are exclusive on the high
/// side: an average of exactly 7 still reads as "waves", not high pressure.
pub fn weekly_insight_message(avg_intensity: f64, window_nonempty: bool) -> &'static str {
    if !window_nonempty {
        MSG_NO_ENTRIES
    } else if avg_intensity > 7.0 {
        MSG_HIGH_PRESSURE
    } else if avg_intensity > 4.0 {
        MSG_WAVES
    } else {
        MSG_FLOW
    }
}

/// Advisory message keyed on the single most recent entry. Keyword rules run
/// before the generic high-intensity fallback; anything at or below score 7
/// (including an empty journal) gets the reflective encouragement.
pub fn companion_advice(latest: Option<&MoodEntry>) -> &'static str {
    let Some(entry) = latest else {
        return ADVICE_REFLECT;
    };
    if entry.stress_score > 7 {
        let note = entry.note.to_lowercase();
        for (keywords, message) in ADVICE_KEYWORDS {
            if keywords.iter().any(|keyword| note.contains(keyword)) {
                return message;
            }
        }
        return ADVICE_HIGH;
    }
    ADVICE_REFLECT
}

/// Parallel label/value arrays for the external charting client.
pub fn chart_series(window: &[MoodEntry]) -> ChartSeries {
    let mut labels = Vec::with_capacity(window.len());
    let mut values = Vec::with_capacity(window.len());
    for entry in window {
        labels.push(chart_label(&entry.date));
        values.push(entry.stress_score);
    }
    ChartSeries { labels, values }
}

// Dates are stored as display text like "9/14/2026, 8:05:00 AM"; the label is
// the date portion before the comma. Older date-only records label as
// themselves, blank dates fall back to a placeholder.
fn chart_label(date: &str) -> String {
    let trimmed = date.trim();
    if trimmed.is_empty() {
        return "Entry".to_string();
    }
    match trimmed.split_once(',') {
        Some((day, _)) => day.to_string(),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(mood: &str, note: &str, score: u8) -> MoodEntry {
        MoodEntry {
            mood: mood.to_string(),
            note: note.to_string(),
            stress_score: score,
            date: "9/14/2026, 8:05:00 AM".to_string(),
            user_id: None,
        }
    }

    fn scored(scores: &[u8]) -> Vec<MoodEntry> {
        scores.iter().map(|&s| entry("Mood", "", s)).collect()
    }

    #[test]
    fn window_is_bounded_and_ordered() {
        let entries: Vec<MoodEntry> = (0..10).map(|i| entry(&format!("m{i}"), "", i)).collect();
        let window = recent_window(&entries, 7);
        assert_eq!(window.len(), 7);
        assert_eq!(window[0].mood, "m3");
        assert_eq!(window[6].mood, "m9");

        let few = scored(&[1, 2, 3]);
        assert_eq!(recent_window(&few, 7).len(), 3);
    }

    #[test]
    fn average_intensity_is_mean_to_one_decimal() {
        assert_eq!(average_intensity(&scored(&[8, 4, 0])), 4.0);
        assert_eq!(average_intensity(&scored(&[1, 2])), 1.5);
        assert_eq!(average_intensity(&scored(&[1, 1, 2])), 1.3);
        assert_eq!(average_intensity(&[]), 0.0);
    }

    #[test]
    fn weekly_message_boundaries() {
        assert_eq!(weekly_insight_message(0.0, false), MSG_NO_ENTRIES);
        assert_eq!(weekly_insight_message(7.0, true), MSG_WAVES);
        assert_eq!(weekly_insight_message(7.1, true), MSG_HIGH_PRESSURE);
        assert_eq!(weekly_insight_message(4.0, true), MSG_FLOW);
        assert_eq!(weekly_insight_message(4.1, true), MSG_WAVES);
        assert_eq!(weekly_insight_message(0.0, true), MSG_FLOW);
    }

    #[test]
    fn advice_space_keyword_wins_over_work() {
        let latest = entry("Drained", "I need space from work", 9);
        assert_eq!(companion_advice(Some(&latest)), ADVICE_SPACE);
    }

    #[test]
    fn advice_keyword_match_is_case_insensitive() {
        let latest = entry("Tense", "PRESSURE is building", 8);
        assert_eq!(companion_advice(Some(&latest)), ADVICE_BREATHING);
    }

    #[test]
    fn advice_falls_back_by_intensity() {
        let high = entry("Tense", "nothing specific", 8);
        assert_eq!(companion_advice(Some(&high)), ADVICE_HIGH);

        let calm = entry("Calm", "I feel alone at work", 7);
        assert_eq!(companion_advice(Some(&calm)), ADVICE_REFLECT);

        assert_eq!(companion_advice(None), ADVICE_REFLECT);
    }

    #[test]
    fn mood_frequency_tallies_in_first_seen_order() {
        let entries = vec![entry("Happy", "", 1), entry("Sad", "", 2), entry("Happy", "", 3)];
        let counts = mood_frequency(&entries);
        assert_eq!(
            counts,
            vec![
                MoodCount { mood: "Happy".to_string(), count: 2 },
                MoodCount { mood: "Sad".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn chart_labels_take_text_before_comma() {
        let mut entries = vec![entry("a", "", 5)];
        entries.push(MoodEntry {
            date: "1/2/2025".to_string(),
            ..entry("b", "", 3)
        });
        entries.push(MoodEntry {
            date: String::new(),
            ..entry("c", "", 0)
        });

        let chart = chart_series(&entries);
        assert_eq!(chart.labels, ["9/14/2026", "1/2/2025", "Entry"]);
        assert_eq!(chart.values, [5, 3, 0]);
    }

    #[test]
    fn build_insights_composes_window_stats() {
        let mut entries = scored(&[0, 0, 0]);
        entries.extend(scored(&[8, 8, 8, 8, 8, 8, 8]));

        let report = build_insights(&entries);
        assert_eq!(report.entry_count, 10);
        assert_eq!(report.average_intensity, 8.0);
        assert_eq!(report.weekly_message, MSG_HIGH_PRESSURE);
        assert_eq!(report.companion_advice, ADVICE_HIGH);
        assert_eq!(report.chart.labels.len(), 7);
        assert_eq!(report.chart.values.len(), 7);
    }

    #[test]
    fn build_insights_on_empty_journal() {
        let report = build_insights(&[]);
        assert_eq!(report.entry_count, 0);
        assert_eq!(report.average_intensity, 0.0);
        assert_eq!(report.weekly_message, MSG_NO_ENTRIES);
        assert_eq!(report.companion_advice, ADVICE_REFLECT);
        assert!(report.mood_frequency.is_empty());
        assert!(report.chart.labels.is_empty());
    }
}
