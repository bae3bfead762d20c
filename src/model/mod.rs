//! Pure data structures handed to renderers.

pub mod order;

pub use order::*;
