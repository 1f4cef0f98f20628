//! Order status and stock policy.
//!
//! Every check here is a pure function over values the caller already loaded.
//! Rejections come back as values; callers decide how to surface them.

mod ledger;
mod response;
mod status;
mod stock;
mod transition;

pub use ledger::*;
pub use response::*;
pub use status::*;
pub use stock::*;
pub use transition::*;
