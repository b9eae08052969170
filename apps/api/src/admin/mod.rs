// Admin surface: token guard, user and offering approval queues, dashboard stats.

pub mod guard;
pub mod handlers;

pub use guard::require_admin;
