// tests/support/mocks/mod.rs
pub mod store;
pub mod time;
pub mod util;

pub use store::InMemoryStore;
pub use time::fixed_now;
pub use util::{DummyClock, TickingClock};
