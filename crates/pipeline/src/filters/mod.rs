//! Filter implementations for the derivation pipeline.

pub mod customizable;

// Re-export for convenience
pub use customizable::CustomizableFilter;
