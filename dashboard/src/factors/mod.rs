pub mod technical;
pub use technical::*;
