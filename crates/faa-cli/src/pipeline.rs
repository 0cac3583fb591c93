//! Fetch, parse, render, write.
//!
//! Neither a fetch failure nor a parse failure aborts the run: the first
//! produces the fallback page, the second a page with no events. Only a
//! failure to write the page is returned as an error.

use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::{error, info, info_span};

use faa_feed::{FeedError, FeedSource, HttpFeedClient, parse_events_from_xml};
use faa_report::{fallback_page, render_html, write_html};

use crate::config::BulletinConfig;

/// What a run wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Full bulletin with this many events.
    Generated { events: usize },
    /// Feed could not be retrieved; fallback page written.
    Fallback,
}

/// Run against the live feed configured in `config`.
///
/// # Errors
///
/// Returns an error only if the output file cannot be written.
pub fn run_from_network(config: &BulletinConfig, now: DateTime<Utc>) -> Result<RunOutcome> {
    match HttpFeedClient::new(config.feed_url.as_str(), config.request_timeout) {
        Ok(client) => run(config, &client, now),
        Err(error) => write_fallback(config, &error, now),
    }
}

/// Run against any feed source.
///
/// # Errors
///
/// Returns an error only if the output file cannot be written.
pub fn run<S: FeedSource>(
    config: &BulletinConfig,
    source: &S,
    now: DateTime<Utc>,
) -> Result<RunOutcome> {
    let span = info_span!("bulletin", output = %config.output_path.display());
    let _guard = span.enter();

    let xml = match source.fetch() {
        Ok(xml) if !xml.is_empty() => xml,
        Ok(_) => {
            let error = FeedError::Network("empty response body".to_string());
            return write_fallback(config, &error, now);
        }
        Err(error) => return write_fallback(config, &error, now),
    };

    let events = match parse_events_from_xml(&xml) {
        Ok(events) => events,
        Err(error) => {
            error!(%error, "failed to parse feed; rendering with no events");
            Vec::new()
        }
    };

    info!(events = events.len(), "rendering bulletin");
    let html = render_html(&events, now);
    write_html(&config.output_path, &html)?;
    Ok(RunOutcome::Generated {
        events: events.len(),
    })
}

fn write_fallback(
    config: &BulletinConfig,
    error: &FeedError,
    now: DateTime<Utc>,
) -> Result<RunOutcome> {
    error!(
        url = %config.feed_url,
        %error,
        retryable = error.is_retryable(),
        "{}",
        error.user_message()
    );
    write_html(&config.output_path, &fallback_page(now))?;
    Ok(RunOutcome::Fallback)
}
