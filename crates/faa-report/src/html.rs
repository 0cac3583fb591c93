//! Static HTML bulletin page.
//!
//! The page is a single self-contained document: styles are inlined and no
//! external resources are referenced. Every piece of feed-derived text goes
//! through [`escape_html`].

use std::collections::BTreeMap;
use std::fmt::Display;

use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};

use faa_model::EventRecord;

use crate::summary::summarize_event;

/// Number of events listed under "Today's Headlines".
pub const HEADLINE_COUNT: usize = 8;

/// Headline text when there are no events.
pub const NO_EVENTS_HEADLINE: &str = "No active airport events right now.";

/// Grouped listing text when there are no events.
pub const NO_EVENTS_LISTING: &str = "No active events.";

/// Generation time format, e.g. "Monday, October 19, 2026 02:05 PM +02:00".
pub const TIMESTAMP_FORMAT: &str = "%A, %B %d, %Y %I:%M %p %Z";

const PAGE_CSS: &str = r#"
    :root { --bg:#0b1220; --card:#121a2b; --text:#e7eefc; --muted:#b7c0d9; --accent:#7fb3ff; }
    * { box-sizing: border-box; }
    body { margin:0; font-family: ui-sans-serif, system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial, "Apple Color Emoji","Segoe UI Emoji"; background: var(--bg); color: var(--text); }
    header { padding: 28px 20px; border-bottom: 1px solid #223; background: linear-gradient(180deg, #0b1220, #0b1220cc); position: sticky; top:0; backdrop-filter: blur(6px); }
    h1 { margin:0 0 6px; font-size: 24px; }
    .sub { color: var(--muted); font-size: 14px; }
    main { max-width: 920px; margin: 0 auto; padding: 18px 16px 64px; }
    .card { background: var(--card); border: 1px solid #223; border-radius: 14px; padding: 16px; margin: 16px 0; box-shadow: 0 10px 25px rgba(3,10,30,.25); }
    .row { display: flex; gap: 12px; flex-wrap: wrap; }
    .pill { display:inline-block; padding:6px 10px; border-radius: 999px; border:1px solid #234; background:#0e1730; color:#cfe0ff; font-size: 12px; }
    h2 { margin:10px 0 8px; font-size: 18px; }
    h3 { margin:10px 0 8px; font-size: 16px; color: var(--accent); }
    ul { margin: 0 0 0 18px; }
    footer { color: var(--muted); font-size: 12px; padding: 24px 16px; text-align: center; }
    a { color: var(--accent); }
"#;

/// Escape text for embedding in HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Event counts per type, ordered by descending count then type name.
pub fn type_counts(events: &[EventRecord]) -> Vec<(&str, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for event in events {
        *counts.entry(event.kind.as_str()).or_default() += 1;
    }
    let mut counts: Vec<(&str, usize)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    counts
}

/// Events grouped by type name (alphabetical), each group in input order.
pub fn group_by_type(events: &[EventRecord]) -> BTreeMap<&str, Vec<&EventRecord>> {
    let mut groups: BTreeMap<&str, Vec<&EventRecord>> = BTreeMap::new();
    for event in events {
        groups.entry(event.kind.as_str()).or_default().push(event);
    }
    groups
}

/// Render the bulletin with the timestamp shown in the local timezone.
pub fn render_html(events: &[EventRecord], generated_at: DateTime<Utc>) -> String {
    render_bulletin(events, &generated_at.with_timezone(&Local))
}

/// Render the bulletin with the timestamp shown in `generated_at`'s zone.
///
/// `events` must already be de-duplicated and in final order.
pub fn render_bulletin<Tz>(events: &[EventRecord], generated_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let timestamp = generated_at.format(TIMESTAMP_FORMAT).to_string();

    let pills: String = type_counts(events)
        .into_iter()
        .map(|(label, count)| {
            format!(
                r#"<span class="pill">{}: {count}</span>"#,
                escape_html(label)
            )
        })
        .collect();

    let headlines = if events.is_empty() {
        format!("<li>{NO_EVENTS_HEADLINE}</li>")
    } else {
        events
            .iter()
            .take(HEADLINE_COUNT)
            .map(list_item)
            .collect::<Vec<_>>()
            .join("\n")
    };

    let sections = if events.is_empty() {
        format!("<p>{NO_EVENTS_LISTING}</p>")
    } else {
        group_by_type(events)
            .into_iter()
            .map(|(label, group)| {
                let items = group
                    .into_iter()
                    .map(list_item)
                    .collect::<Vec<_>>()
                    .join("\n");
                format!(
                    "<section><h3>{}</h3><ul>{items}</ul></section>",
                    escape_html(label)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>FAA Daily Bulletin</title>
<style>{PAGE_CSS}</style>
<header>
  <h1>FAA Daily Delay &amp; Event Bulletin</h1>
  <div class="sub">Generated {generated} — Source: FAA NAS Status (Active Airport Events)</div>
  <div class="row" style="margin-top:10px;">{pills}</div>
</header>
<main>
  <div class="card">
    <h2>Today’s Headlines</h2>
    <ul>
      {headlines}
    </ul>
  </div>
  <div class="card">
    <h2>All Active Airport Events</h2>
    {sections}
  </div>
</main>
<footer>
  Built automatically from the FAA NAS Status XML API. This is an unofficial summary; verify details with your airline and the FAA.
</footer>
</html>
"#,
        generated = escape_html(&timestamp),
    )
}

/// Minimal page written when the feed could not be retrieved.
pub fn fallback_page(failed_at: DateTime<Utc>) -> String {
    format!(
        "<!doctype html><meta charset='utf-8'><title>FAA Bulletin</title>\n\
         <pre>Could not retrieve FAA data at {}. Will try again next run.</pre>\n",
        failed_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    )
}

fn list_item(event: &EventRecord) -> String {
    format!("<li>{}</li>", escape_html(&summarize_event(event)))
}
