// tests/support/mocks/mod.rs
pub mod repos;
pub mod time;

pub use repos::FailingPostRepo;
pub use time::{FixedClock, fixed_now};
