use std::collections::BTreeSet;

use faa_model::EventRecord;
use tracing::debug;

/// Drop records whose (type, airport, reason) was already seen.
/// The first occurrence wins and relative order is kept.
pub fn dedupe_events(events: Vec<EventRecord>) -> Vec<EventRecord> {
    let mut seen = BTreeSet::new();
    let mut keep = Vec::with_capacity(events.len());
    for event in events {
        let (kind, airport, reason) = event.dedupe_key();
        let composite = (kind.to_string(), airport.to_string(), reason.to_string());
        if seen.insert(composite) {
            keep.push(event);
        } else {
            debug!(kind = %event.kind, airport = %event.airport, "dropping duplicate event");
        }
    }
    keep
}

/// Order by average delay (descending, missing as 0), then airport code.
/// The sort is stable.
pub fn sort_events(events: &mut [EventRecord]) {
    events.sort_by(|a, b| {
        b.severity()
            .cmp(&a.severity())
            .then_with(|| a.airport.cmp(&b.airport))
    });
}

/// De-duplicate, then sort.
pub fn dedupe_and_sort(events: Vec<EventRecord>) -> Vec<EventRecord> {
    let mut events = dedupe_events(events);
    sort_events(&mut events);
    events
}

#[cfg(test)]
mod tests {
    use faa_model::EventKind;

    use super::*;

    fn event(kind: EventKind, airport: &str, delay: Option<u64>, reason: Option<&str>) -> EventRecord {
        EventRecord::new(kind, airport)
            .with_avg_delay(delay)
            .with_reason(reason.map(str::to_string))
    }

    #[test]
    fn first_seen_duplicate_wins() {
        let events = vec![
            event(EventKind::GroundStop, "JFK", Some(10), Some("weather")),
            event(EventKind::GroundStop, "JFK", Some(90), Some("weather")),
        ];
        let kept = dedupe_events(events);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].avg_delay, Some(10));
    }

    #[test]
    fn missing_reason_equals_empty_reason() {
        let events = vec![
            event(EventKind::GroundStop, "JFK", None, None),
            event(EventKind::GroundStop, "JFK", None, Some("")),
        ];
        assert_eq!(dedupe_events(events).len(), 1);
    }

    #[test]
    fn different_keys_are_kept() {
        let events = vec![
            event(EventKind::GroundStop, "JFK", None, Some("weather")),
            event(EventKind::GroundDelayProgram, "JFK", None, Some("weather")),
            event(EventKind::GroundStop, "LGA", None, Some("weather")),
            event(EventKind::GroundStop, "JFK", None, Some("volume")),
        ];
        assert_eq!(dedupe_events(events).len(), 4);
    }

    #[test]
    fn sorts_by_delay_then_airport() {
        let mut events = vec![
            event(EventKind::Deicing, "ORD", None, None),
            event(EventKind::GroundStop, "SFO", Some(45), None),
            event(EventKind::ArrivalDelay, "ATL", Some(45), None),
            event(EventKind::DepartureDelay, "BOS", Some(0), None),
            event(EventKind::GroundDelayProgram, "EWR", Some(120), None),
        ];
        sort_events(&mut events);
        let order: Vec<&str> = events.iter().map(|e| e.airport.as_str()).collect();
        assert_eq!(order, vec!["EWR", "ATL", "SFO", "BOS", "ORD"]);

        for pair in events.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(
                a.severity() > b.severity()
                    || (a.severity() == b.severity() && a.airport <= b.airport)
            );
        }
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let mut events = vec![
            event(EventKind::GroundStop, "JFK", Some(30), Some("first")),
            event(EventKind::Deicing, "JFK", Some(30), Some("second")),
        ];
        sort_events(&mut events);
        assert_eq!(events[0].reason.as_deref(), Some("first"));
        assert_eq!(events[1].reason.as_deref(), Some("second"));
    }
}
