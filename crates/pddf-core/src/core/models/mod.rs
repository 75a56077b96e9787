pub mod distance_set;
pub mod frame;
pub mod policy;
