pub mod classify;
pub mod convert;
pub mod normalize;

pub use classify::{CandidateScore, Classification, classify, score_candidates};
pub use convert::{convert, convert_detected};
pub use normalize::normalize;
