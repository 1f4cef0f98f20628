//! Business entities, free of actor infrastructure.

pub mod order;
pub mod product;

pub use order::*;
pub use product::*;
