//! Remote index implementations

pub mod dist_index;

pub use dist_index::DistIndexRegistry;
