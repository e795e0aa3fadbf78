pub mod network;
pub mod units;

pub use network::*;
pub use units::*;
