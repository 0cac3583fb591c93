//! FAA NAS status feed: retrieval, XML tree, and event extraction.
//!
//! The pipeline is linear:
//!
//! - [`fetch`] retrieves the feed text;
//! - [`tree`] turns it into a generic nested [`Node`] tree;
//! - [`extract`] locates every `Delay_type` block at any depth;
//! - [`events`] flattens blocks into [`faa_model::EventRecord`]s, using
//!   [`normalize`] for reason text and delay minutes;
//! - [`dedupe`] drops repeats and orders by severity.

pub mod dedupe;
pub mod error;
pub mod events;
pub mod extract;
pub mod fetch;
pub mod normalize;
pub mod tree;

pub use dedupe::{dedupe_and_sort, dedupe_events, sort_events};
pub use error::{FeedError, Result};
pub use events::{events_from_delay_types, parse_events, parse_events_from_xml};
pub use extract::{ensure_list, find_all_key};
pub use fetch::{FeedSource, HttpFeedClient, NAS_STATUS_URL, REQUEST_TIMEOUT};
pub use normalize::{first_integer, friendly_reason};
pub use tree::{Mapping, Node, parse_xml};
