//! tally-core
//!
//! Building blocks for the tally counter service: one owner task holds the
//! only reference to an integer counter and serves increment, decrement and
//! read requests arriving over a bounded channel.
//!
//! # Module map
//! - **domain**: request messages, owner lifecycle state, errors
//! - **config**: run parameters (producer counts, op quota, channel slack)
//! - **owner**: the owner loop and its task handle
//! - **handle**: cloneable client handle, the only route to the counter
//! - **producer**: mutation-only producer tasks and their join barrier
//!
//! The design rule throughout: the counter is never shared. It lives on the
//! owner task, every other task holds at most a [`handle::CounterHandle`],
//! and the request channel's dequeue order is the single serialization
//! point. No lock exists anywhere in this crate.

pub mod config;
pub mod domain;
pub mod handle;
pub mod owner;
pub mod producer;

pub use config::{ConfigError, RunConfig};
pub use domain::{OwnerState, Request, TallyError};
pub use handle::CounterHandle;
pub use owner::CounterOwner;
pub use producer::{ProducerGroup, ProducerKind};
