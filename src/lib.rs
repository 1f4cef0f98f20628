//! Order status and stock policy for a storefront backend.
//!
//! - [`policy`] holds the pure checks: the order status transition guard, the
//!   stock admission check, and the mapping of rejections to error payloads.
//! - The inventory and order stores are [`actor_framework::ResourceActor`]s;
//!   [`clients::OrderClient`] runs the order workflow over them.
//! - [`app_system::OrderSystem`] starts and stops the actors.

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod config;
pub mod domain;
pub mod order_actor;
pub mod policy;
pub mod product_actor;

#[cfg(test)]
mod mock_framework;
