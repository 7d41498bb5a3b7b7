//! CLI library components for the geocol detector.

pub mod logging;
pub mod report;
