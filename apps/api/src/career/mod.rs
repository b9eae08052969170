// Career assessment: typed questions, the static career catalog and the
// rule-based match scorer, plus persistence of past assessments.

pub mod catalog;
pub mod data;
pub mod handlers;
pub mod questions;
pub mod scorer;

pub use catalog::{CareerCatalog, CareerProfile};
pub use questions::Question;
pub use scorer::{MatchResult, RawScore};
