// Domain layer: listings, the agency that owns them, and report formatting.

pub mod address;
pub mod agency;
pub mod property;
pub mod report;
pub mod shared;
