//! Conversion of feed delay-type blocks into [`EventRecord`]s.
//!
//! The NAS feed groups airports by event category:
//!
//! ```text
//! <Delay_type>
//!   <Name>Ground Stops</Name>
//!   <Ground_Stop_List>
//!     <Airport><ARPT>JFK</ARPT>...</Airport>
//!   </Ground_Stop_List>
//! </Delay_type>
//! ```
//!
//! Only `Airport` children of a `*_List` container become records.
//! Field names vary between categories, so each record attribute is read
//! through an ordered fallback chain.

use faa_model::{EventKind, EventRecord, UNKNOWN_AIRPORT};
use tracing::{debug, trace};

use crate::dedupe::dedupe_and_sort;
use crate::error::Result;
use crate::extract::{ensure_list, find_all_key};
use crate::normalize::{first_integer, friendly_reason};
use crate::tree::{Mapping, Node, parse_xml};

/// Element holding one event category.
pub const DELAY_TYPE_KEY: &str = "Delay_type";

/// Category name inside a delay-type block.
pub const NAME_KEY: &str = "Name";

/// Suffix of the child keys that hold airport entries.
pub const AIRPORT_LIST_SUFFIX: &str = "_List";

/// Airport entry element inside an airport list.
pub const AIRPORT_ENTRY_KEY: &str = "Airport";

pub const AIRPORT_CODE_FIELDS: &[&str] = &["ARPT", "Airport_Code", "IATA"];
pub const AVG_DELAY_FIELDS: &[&str] = &["Average_Delay", "Avg_Delay", "Delay"];
pub const TREND_FIELDS: &[&str] = &["Trend"];
pub const REASON_FIELDS: &[&str] = &["Reason"];
pub const START_FIELDS: &[&str] = &["Start_Time", "StartTime", "Date"];
pub const END_FIELDS: &[&str] = &["End_Time", "EndTime"];

/// Parse feed XML into the final, de-duplicated and ordered event list.
///
/// # Errors
///
/// Returns [`crate::FeedError::Xml`] when the text is not well-formed XML.
pub fn parse_events_from_xml(xml: &str) -> Result<Vec<EventRecord>> {
    let tree = parse_xml(xml)?;
    let events = parse_events(&tree);
    let total = events.len();
    let events = dedupe_and_sort(events);
    debug!(
        parsed = total,
        kept = events.len(),
        "extracted airport events from feed"
    );
    Ok(events)
}

/// All airport events in a parsed feed, in traversal order, before
/// de-duplication.
pub fn parse_events(tree: &Node) -> Vec<EventRecord> {
    events_from_delay_types(&find_all_key(tree, DELAY_TYPE_KEY))
}

/// Flatten delay-type values (each a block or a sequence of blocks) into
/// records. Items that are not mappings are skipped.
pub fn events_from_delay_types(blocks: &[&Node]) -> Vec<EventRecord> {
    let mut events = Vec::new();
    for block in blocks {
        for item in ensure_list(Some(*block)) {
            let Some(item) = item.as_mapping() else {
                trace!("skipping delay-type item that is not an element");
                continue;
            };
            events_from_block(item, &mut events);
        }
    }
    events
}

fn events_from_block(block: &Mapping, events: &mut Vec<EventRecord>) {
    let name = block.get(NAME_KEY).and_then(Node::text_value);
    let kind = EventKind::from_feed_name(name);

    for (key, container) in block.iter() {
        if !key.ends_with(AIRPORT_LIST_SUFFIX) {
            continue;
        }
        let airports = container
            .as_mapping()
            .and_then(|list| list.get(AIRPORT_ENTRY_KEY));
        for entry in ensure_list(airports) {
            let Some(entry) = entry.as_mapping() else {
                trace!(list = key, "skipping airport entry that is not an element");
                continue;
            };
            let record = record_from_entry(kind.clone(), entry);
            debug!(
                kind = %record.kind,
                airport = %record.airport,
                avg_delay = ?record.avg_delay,
                "parsed airport event"
            );
            events.push(record);
        }
    }
}

/// Build one record from an airport entry.
pub fn record_from_entry(kind: EventKind, entry: &Mapping) -> EventRecord {
    let airport = first_text(entry, AIRPORT_CODE_FIELDS).unwrap_or(UNKNOWN_AIRPORT);
    EventRecord::new(kind, airport)
        .with_avg_delay(first_integer(first_text(entry, AVG_DELAY_FIELDS)))
        .with_trend(first_text(entry, TREND_FIELDS).map(str::to_string))
        .with_reason(friendly_reason(first_text(entry, REASON_FIELDS)))
        .with_window(
            first_text(entry, START_FIELDS).map(str::to_string),
            first_text(entry, END_FIELDS).map(str::to_string),
        )
}

/// First field in `fields` that holds non-empty text.
fn first_text<'a>(entry: &'a Mapping, fields: &[&str]) -> Option<&'a str> {
    fields.iter().find_map(|field| {
        entry
            .get(field)
            .and_then(Node::text_value)
            .filter(|text| !text.is_empty())
    })
}
