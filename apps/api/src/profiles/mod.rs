// User profiles, the approval flag the admin queue works from, and the
// one-per-mobile-number free trial.

pub mod handlers;
pub mod models;
