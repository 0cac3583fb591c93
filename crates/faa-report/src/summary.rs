//! One-line English summaries of events.

use faa_model::{EventKind, EventRecord};

/// Short phrase describing what an event means for travellers.
fn phrase(kind: &EventKind) -> &str {
    match kind {
        EventKind::GroundStop => "Ground stop in effect",
        EventKind::GroundDelayProgram => "Ground delay program",
        EventKind::AirportClosure => "Airport closed",
        EventKind::DepartureDelay => "Departure delays",
        EventKind::ArrivalDelay => "Arrival delays",
        EventKind::Deicing => "Deicing in effect",
        EventKind::Other(label) => label,
    }
}

/// Render an event as a sentence, e.g.
/// `JFK: Ground stop in effect (~45 min avg delay) — weather [since 14:00]`.
///
/// The delay clause is omitted for a missing or zero delay.
pub fn summarize_event(event: &EventRecord) -> String {
    let mut line = format!("{}: {}", event.airport, phrase(&event.kind));
    if let Some(minutes) = event.avg_delay.filter(|minutes| *minutes > 0) {
        line.push_str(&format!(" (~{minutes} min avg delay)"));
    }
    if let Some(reason) = event.reason.as_deref().filter(|reason| !reason.is_empty()) {
        line.push_str(&format!(" — {reason}"));
    }
    if let Some(start) = event.start.as_deref().filter(|start| !start.is_empty()) {
        line.push_str(&format!(" [since {start}]"));
    }
    line
}
