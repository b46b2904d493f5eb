use crate::models::{InsightsResponse, MoodEntry, UserIdentity};

pub fn render_welcome(user: &UserIdentity) -> String {
    WELCOME_HTML
        .replace("{{STYLES}}", BRAND_STYLES)
        .replace("{{NAME}}", &escape_html(&user.name))
}

pub fn render_tracker(user: &UserIdentity) -> String {
    TRACKER_HTML
        .replace("{{STYLES}}", BRAND_STYLES)
        .replace("{{NAME}}", &escape_html(&user.name))
}

pub fn render_history(
    user: &UserIdentity,
    entries: &[MoodEntry],
    insights: &InsightsResponse,
) -> String {
    HISTORY_HTML
        .replace("{{STYLES}}", BRAND_STYLES)
        .replace("{{NAME}}", &escape_html(&user.name))
        .replace("{{COUNT}}", &entries.len().to_string())
        .replace("{{AVERAGE}}", &format!("{:.1}", insights.average_intensity))
        .replace("{{WEEKLY}}", &escape_html(&insights.weekly_message))
        .replace("{{ADVICE}}", &escape_html(&insights.companion_advice))
        .replace("{{FREQUENCY}}", &frequency_chips(insights))
        .replace("{{CHART}}", &chart_bars(insights))
        .replace("{{CARDS}}", &entry_cards(entries))
}

// Newest first for display; the hidden index keeps the stored position so
// deletion still lands on the right record.
fn entry_cards(entries: &[MoodEntry]) -> String {
    if entries.is_empty() {
        return r#"<p class="empty">No reflections yet. Head back to the tracker and log one.</p>"#
            .to_string();
    }

    let mut cards = String::new();
    for (index, entry) in entries.iter().enumerate().rev() {
        let tone = if entry.stress_score > 7 { "hot" } else { "cool" };
        cards.push_str(&format!(
            r#"<div class="card {tone}">
  <small>{date}</small>
  <h3>{mood} <span class="intensity-badge">Intensity: {score}/10</span></h3>
  <p class="note">"{note}"</p>
  <form action="/delete-mood" method="POST">
    <input type="hidden" name="index" value="{index}">
    <button type="submit" class="delete-btn">Delete</button>
  </form>
</div>
"#,
            date = escape_html(&entry.date),
            mood = escape_html(&entry.mood),
            score = entry.stress_score,
            note = escape_html(&entry.note),
        ));
    }
    cards
}

fn frequency_chips(insights: &InsightsResponse) -> String {
    let mut chips = String::new();
    for count in &insights.mood_frequency {
        chips.push_str(&format!(
            r#"<span class="chip">{} &times; {}</span>"#,
            escape_html(&count.mood),
            count.count
        ));
    }
    chips
}

fn chart_bars(insights: &InsightsResponse) -> String {
    let mut bars = String::new();
    for (label, value) in insights.chart.labels.iter().zip(&insights.chart.values) {
        bars.push_str(&format!(
            r#"<div class="bar-slot"><div class="bar" style="height:{}%" title="{}/10"></div><span>{}</span></div>"#,
            u32::from(*value) * 10,
            value,
            escape_html(label),
        ));
    }
    bars
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const BRAND_STYLES: &str = r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">
  <style>
    :root {
      --bg: #f0f2f5;
      --ink: #1a202c;
      --muted: #4a5568;
      --faint: #a0aec0;
      --brand: #6c5ce7;
      --alert: #ff7675;
      --card: #ffffff;
      --shadow: 0 4px 6px rgba(0, 0, 0, 0.05);
    }

    * { box-sizing: border-box; }

    body {
      font-family: 'Segoe UI', sans-serif;
      background: var(--bg);
      margin: 0;
      padding: 20px;
      color: var(--ink);
    }

    .container { max-width: 600px; margin: 0 auto; }
    .header { text-align: center; margin-bottom: 30px; }
    .brand-name { color: var(--brand); font-size: 2.5rem; font-weight: 800; margin: 0; }
    .tagline { color: var(--muted); font-style: italic; font-size: 1rem; margin-top: 5px; }
    .nav-link { color: var(--brand); text-decoration: none; font-weight: bold; display: block; margin-bottom: 20px; }

    h2 { border-bottom: 2px solid #e2e8f0; padding-bottom: 10px; }

    .card {
      background: var(--card);
      padding: 20px;
      border-radius: 15px;
      margin-bottom: 15px;
      box-shadow: var(--shadow);
      border-left: 5px solid var(--brand);
    }
    .card.hot { border-left-color: var(--alert); }
    .card.hot .intensity-badge { background: var(--alert); }
    .card small { color: var(--faint); }
    .card h3 { margin: 10px 0; }
    .card .note { color: var(--muted); margin-bottom: 15px; }

    .intensity-badge {
      font-size: 0.75rem;
      background: var(--brand);
      color: white;
      padding: 3px 10px;
      border-radius: 20px;
      margin-left: 10px;
    }

    .delete-btn {
      background: #fff5f5;
      color: #e53e3e;
      border: 1px solid #feb2b2;
      padding: 6px 12px;
      border-radius: 8px;
      cursor: pointer;
      font-weight: bold;
    }

    .insight-panel p { margin: 8px 0; color: var(--muted); }
    .insight-panel .headline { color: var(--ink); font-weight: 600; }

    .chip {
      display: inline-block;
      background: #ece9fd;
      color: var(--brand);
      border-radius: 20px;
      padding: 4px 12px;
      margin: 3px 6px 3px 0;
      font-size: 0.85rem;
      font-weight: 600;
    }

    .chart {
      display: flex;
      align-items: flex-end;
      gap: 8px;
      height: 140px;
      margin-top: 12px;
    }
    .bar-slot { flex: 1; display: flex; flex-direction: column; justify-content: flex-end; height: 100%; text-align: center; }
    .bar { background: var(--brand); border-radius: 6px 6px 0 0; min-height: 2px; }
    .bar-slot span { font-size: 0.6rem; color: var(--faint); margin-top: 4px; overflow: hidden; white-space: nowrap; }

    form.tracker { display: grid; gap: 14px; }
    label { font-weight: 600; color: var(--muted); }
    input[type="text"], textarea {
      width: 100%;
      padding: 10px;
      border: 1px solid #e2e8f0;
      border-radius: 8px;
      font-family: inherit;
      font-size: 1rem;
    }
    textarea { min-height: 90px; resize: vertical; }
    input[type="range"] { width: 100%; accent-color: var(--brand); }

    .submit-btn {
      background: var(--brand);
      color: white;
      border: none;
      padding: 12px;
      border-radius: 8px;
      font-size: 1rem;
      font-weight: bold;
      cursor: pointer;
    }

    .empty { color: var(--faint); text-align: center; }
  </style>
"#;

const WELCOME_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>MentalSpace</title>
  {{STYLES}}
</head>
<body>
  <div class="container">
    <div class="header">
      <h1 class="brand-name">MentalSpace</h1>
      <p class="tagline">Welcome back, {{NAME}}</p>
    </div>
    <div class="card">
      <h3>Your space to reflect</h3>
      <p class="note">Log how you feel, rate the intensity, and watch the patterns surface.</p>
      <a class="nav-link" href="/tracker">Open the tracker &rarr;</a>
      <a class="nav-link" href="/moods">View your journey &rarr;</a>
    </div>
  </div>
</body>
</html>
"#;

const TRACKER_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>Tracker | MentalSpace</title>
  {{STYLES}}
</head>
<body>
  <div class="container">
    <div class="header">
      <h1 class="brand-name">MentalSpace</h1>
      <p class="tagline">How are you feeling, {{NAME}}?</p>
    </div>
    <a class="nav-link" href="/moods">View your journey &rarr;</a>
    <div class="card">
      <form class="tracker" action="/add-mood" method="POST">
        <div>
          <label for="mood">Mood</label>
          <input type="text" id="mood" name="mood" placeholder="Calm, Anxious, Hopeful..." required>
        </div>
        <div>
          <label for="stressScore">Intensity (0&ndash;10)</label>
          <input type="range" id="stressScore" name="stressScore" min="0" max="10" value="5">
        </div>
        <div>
          <label for="note">Reflection</label>
          <textarea id="note" name="note" placeholder="What's on your mind?"></textarea>
        </div>
        <button type="submit" class="submit-btn">Save reflection</button>
      </form>
    </div>
  </div>
</body>
</html>
"#;

const HISTORY_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>History | MentalSpace</title>
  {{STYLES}}
</head>
<body>
  <div class="container">
    <div class="header">
      <h1 class="brand-name">MentalSpace</h1>
      <p class="tagline">Welcome back, {{NAME}}</p>
    </div>
    <a class="nav-link" href="/tracker">&larr; Back to Tracker</a>
    <div class="card insight-panel">
      <h3>This week</h3>
      <p class="headline">{{WEEKLY}}</p>
      <p>Average intensity: {{AVERAGE}}/10</p>
      <p>{{ADVICE}}</p>
      <div>{{FREQUENCY}}</div>
      <div class="chart">{{CHART}}</div>
    </div>
    <h2>{{NAME}}'s Journey ({{COUNT}})</h2>
    {{CARDS}}
  </div>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::build_insights;

    fn sample_entry(mood: &str, score: u8) -> MoodEntry {
        MoodEntry {
            mood: mood.to_string(),
            note: "a note".to_string(),
            stress_score: score,
            date: "9/14/2026, 8:05:00 AM".to_string(),
            user_id: Some("guest".to_string()),
        }
    }

    #[test]
    fn escape_html_neutralizes_markup() {
        assert_eq!(
            escape_html(r#"<b onclick="x">&'"#),
            "&lt;b onclick=&quot;x&quot;&gt;&amp;&#39;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn history_page_reverses_cards_and_keeps_stored_indices() {
        let entries = vec![sample_entry("First", 2), sample_entry("Second", 9)];
        let insights = build_insights(&entries);
        let page = render_history(&UserIdentity::default(), &entries, &insights);

        let first = page.find("<h3>First ").unwrap();
        let second = page.find("<h3>Second ").unwrap();
        assert!(second < first, "newest entry renders first");
        assert!(page.contains(r#"name="index" value="1""#));
        assert!(page.contains(r#"name="index" value="0""#));
        assert!(page.contains("Journey (2)"));
    }

    #[test]
    fn history_page_escapes_user_text() {
        let mut entry = sample_entry("<script>", 1);
        entry.note = "a & b".to_string();
        let entries = vec![entry];
        let insights = build_insights(&entries);
        let page = render_history(&UserIdentity::default(), &entries, &insights);

        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(page.contains("a &amp; b"));
    }

    #[test]
    fn tracker_page_posts_to_add_mood() {
        let page = render_tracker(&UserIdentity::default());
        assert!(page.contains(r#"action="/add-mood" method="POST""#));
        assert!(page.contains(r#"name="stressScore""#));
        assert!(page.contains("Founder"));
    }
}
