// Peer-review reputation: aggregation of ratings into a trust score and level.

pub mod handlers;
pub mod scoring;

pub use scoring::{recalculate, TrustScoreRow};
