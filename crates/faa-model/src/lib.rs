pub mod event;
pub mod kind;

pub use event::{EventRecord, UNKNOWN_AIRPORT};
pub use kind::{EventKind, TYPE_ALIASES, UNNAMED_EVENT_LABEL};
