pub mod rate_limiter;
pub use rate_limiter::RateLimiter;

#[cfg(test)]
mod rate_limiter_test;
