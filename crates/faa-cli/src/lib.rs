//! FAA bulletin runner: configuration, logging, and the fetch-to-page pipeline.

pub mod config;
pub mod logging;
pub mod pipeline;
