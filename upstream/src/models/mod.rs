pub mod macro_data;
pub mod market;
pub mod network;
pub mod range;
pub mod social;

pub use macro_data::*;
pub use market::*;
pub use network::*;
pub use range::*;
pub use social::*;

#[cfg(test)]
mod network_test;
#[cfg(test)]
mod range_test;
