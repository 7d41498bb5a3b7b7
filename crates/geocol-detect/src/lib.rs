#![deny(unsafe_code)]

pub mod classify;
pub mod latlon;
pub mod pipeline;
pub mod single;

pub use crate::classify::{AliasMatch, CompareType, classify};
pub use crate::latlon::LatLonDecider;
pub use crate::pipeline::{Decider, build_deciders};
pub use crate::single::SingleColumnDecider;
