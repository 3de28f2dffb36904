pub use admin::*;
pub use contribute::*;
pub use fulfill::*;
pub use upkeep::*;

pub mod admin;
pub mod contribute;
pub mod fulfill;
pub mod upkeep;
