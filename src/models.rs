use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One journaled reflection. Field names stay camelCase on disk so files
/// written by earlier revisions of the app keep loading.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub mood: String,
    #[serde(default)]
    pub note: String,
    #[serde(default, deserialize_with = "lenient_score")]
    pub stress_score: u8,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Read-only identity of the journal's single operator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    pub name: String,
}

impl Default for UserIdentity {
    fn default() -> Self {
        Self {
            id: "guest".to_string(),
            name: "Founder".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMoodForm {
    pub mood: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub stress_score: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteMoodForm {
    pub index: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMoodRequest {
    pub mood: String,
    #[serde(default)]
    pub note: String,
    #[serde(default, deserialize_with = "lenient_score")]
    pub stress_score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoodCount {
    pub mood: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<u8>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InsightsResponse {
    pub entry_count: usize,
    pub average_intensity: f64,
    pub weekly_message: String,
    pub companion_advice: String,
    pub mood_frequency: Vec<MoodCount>,
    pub chart: ChartSeries,
}

/// Clamp an arbitrary integer into the 0..=10 score range.
pub fn clamp_score(value: i64) -> u8 {
    value.clamp(0, 10) as u8
}

/// Parse a score out of raw form text. Blank or non-numeric input scores 0.
pub fn parse_score(raw: &str) -> u8 {
    raw.trim().parse::<i64>().map_or(0, clamp_score)
}

// Earlier revisions persisted the form value verbatim, so stored scores may
// be JSON numbers, numeric strings, or junk. Anything unusable decodes as 0.
fn lenient_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(number) => number.as_i64().map_or(0, clamp_score),
        Value::String(text) => parse_score(&text),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_round_trips_through_json() {
        let entry = MoodEntry {
            mood: "Calm".to_string(),
            note: "Slow morning".to_string(),
            stress_score: 3,
            date: "9/14/2026, 8:05:00 AM".to_string(),
            user_id: Some("guest".to_string()),
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"stressScore\":3"));
        assert!(json.contains("\"userId\":\"guest\""));

        let back: MoodEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.mood, "Calm");
        assert_eq!(back.stress_score, 3);
    }

    #[test]
    fn legacy_record_without_new_fields_loads() {
        let entry: MoodEntry =
            serde_json::from_str(r#"{"mood":"Tired","note":"","date":"1/2/2025"}"#).unwrap();
        assert_eq!(entry.mood, "Tired");
        assert_eq!(entry.stress_score, 0);
        assert_eq!(entry.user_id, None);
    }

    #[test]
    fn stress_score_decodes_from_string_number_or_junk() {
        let cases = [
            (r#"{"mood":"a","stressScore":"7"}"#, 7),
            (r#"{"mood":"a","stressScore":7}"#, 7),
            (r#"{"mood":"a","stressScore":"high"}"#, 0),
            (r#"{"mood":"a","stressScore":99}"#, 10),
            (r#"{"mood":"a","stressScore":-3}"#, 0),
            (r#"{"mood":"a","stressScore":null}"#, 0),
        ];
        for (json, expected) in cases {
            let entry: MoodEntry = serde_json::from_str(json).unwrap();
            assert_eq!(entry.stress_score, expected, "for {json}");
        }
    }

    #[test]
    fn parse_score_handles_form_input() {
        assert_eq!(parse_score("6"), 6);
        assert_eq!(parse_score(" 10 "), 10);
        assert_eq!(parse_score("12"), 10);
        assert_eq!(parse_score("-1"), 0);
        assert_eq!(parse_score(""), 0);
        assert_eq!(parse_score("nope"), 0);
    }
}
