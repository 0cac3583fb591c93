//! End-to-end runs against stubbed feed sources.

use std::fs;

use chrono::{TimeZone, Utc};
use faa_cli::config::BulletinConfig;
use faa_cli::pipeline::{RunOutcome, run};
use faa_feed::{FeedError, FeedSource};
use tempfile::TempDir;

/// Serves a fixed body, or fails with a network error when `None`.
struct StubFeed(Option<String>);

impl FeedSource for StubFeed {
    fn fetch(&self) -> faa_feed::Result<String> {
        self.0
            .clone()
            .ok_or_else(|| FeedError::Network("connection refused".to_string()))
    }
}

const TWO_EVENTS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<AIRPORT_STATUS_INFORMATION>
  <Delay_type>
    <Name>Ground Stops</Name>
    <Ground_Stop_List>
      <Airport>
        <ARPT>JFK</ARPT>
        <Reason>weather</Reason>
        <Avg_Delay>45</Avg_Delay>
      </Airport>
    </Ground_Stop_List>
  </Delay_type>
  <Delay_type>
    <Name>Ground Delay Programs</Name>
    <Ground_Delay_List>
      <Airport>
        <ARPT>EWR</ARPT>
        <Avg_Delay>93 minutes</Avg_Delay>
        <Reason>volume</Reason>
      </Airport>
    </Ground_Delay_List>
  </Delay_type>
</AIRPORT_STATUS_INFORMATION>
"#;

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

fn config_in(dir: &TempDir) -> BulletinConfig {
    BulletinConfig::default().with_output_path(dir.path().join("docs").join("index.html"))
}

#[test]
fn writes_bulletin_for_successful_fetch() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let feed = StubFeed(Some(TWO_EVENTS.to_string()));

    let outcome = run(&config, &feed, now()).unwrap();
    assert_eq!(outcome, RunOutcome::Generated { events: 2 });

    let html = fs::read_to_string(&config.output_path).unwrap();
    assert!(html.contains("EWR: Ground delay program (~93 min avg delay)"));
    assert!(html.contains("JFK: Ground stop in effect (~45 min avg delay)"));
    assert!(html.contains("Ground Delay Program: 1"));
    assert!(html.contains("Ground Stop: 1"));
    let ewr = html.find("<li>EWR").unwrap();
    let jfk = html.find("<li>JFK").unwrap();
    assert!(ewr < jfk, "higher delay headlines first");
}

#[test]
fn writes_fallback_when_fetch_fails() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let feed = StubFeed(None);

    let outcome = run(&config, &feed, now()).unwrap();
    assert_eq!(outcome, RunOutcome::Fallback);

    let html = fs::read_to_string(&config.output_path).unwrap();
    assert!(html.contains(
        "Could not retrieve FAA data at 2026-10-19T12:00:00Z. Will try again next run."
    ));
}

#[test]
fn empty_body_counts_as_fetch_failure() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let feed = StubFeed(Some(String::new()));

    assert_eq!(run(&config, &feed, now()).unwrap(), RunOutcome::Fallback);
}

#[test]
fn duplicate_entries_are_listed_once() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let xml = r#"<Root>
  <Delay_type>
    <Name>Ground Stops</Name>
    <Ground_Stop_List>
      <Airport><ARPT>JFK</ARPT><Reason>weather</Reason><Start_Time>2:00 pm</Start_Time></Airport>
      <Airport><ARPT>JFK</ARPT><Reason>weather</Reason><Start_Time>2:00 pm</Start_Time></Airport>
    </Ground_Stop_List>
  </Delay_type>
</Root>"#;
    let feed = StubFeed(Some(xml.to_string()));

    let outcome = run(&config, &feed, now()).unwrap();
    assert_eq!(outcome, RunOutcome::Generated { events: 1 });

    let html = fs::read_to_string(&config.output_path).unwrap();
    assert!(html.contains("Ground Stop: 1"));
}

#[test]
fn malformed_feed_renders_empty_bulletin() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let feed = StubFeed(Some("<Root><Delay_type>".to_string()));

    let outcome = run(&config, &feed, now()).unwrap();
    assert_eq!(outcome, RunOutcome::Generated { events: 0 });

    let html = fs::read_to_string(&config.output_path).unwrap();
    assert!(html.contains("No active airport events right now."));
    assert!(html.contains("No active events."));
}

#[test]
fn unwritable_output_is_an_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("docs");
    fs::write(&blocker, "not a directory").unwrap();
    let config = BulletinConfig::default().with_output_path(blocker.join("index.html"));
    let feed = StubFeed(Some(TWO_EVENTS.to_string()));

    assert!(run(&config, &feed, now()).is_err());
}
