pub mod address;
pub mod prefix;
pub mod range;
pub mod target;
