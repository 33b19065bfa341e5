pub mod latency;
pub mod time;
pub use latency::LatencyGuard;
pub use time::*;

#[cfg(test)]
mod time_test;
