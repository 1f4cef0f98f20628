//! Order store: orders, their status, and the guarded status change action.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
