pub mod detail_cache;
pub mod idempotency;
