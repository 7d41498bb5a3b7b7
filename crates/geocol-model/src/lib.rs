#![deny(unsafe_code)]

pub mod candidate;
pub mod results;
pub mod semantic;

pub use candidate::ColumnCandidate;
pub use results::{DetectionResults, LatLonPair};
pub use semantic::SemanticType;
