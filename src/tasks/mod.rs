//! Background Tasks Module
//!
//! Periodic maintenance that keeps the cache from growing without bound.
//!
//! # Tasks
//! - Cache maintenance: purges expired entries and enforces the size bound
//!   at configured intervals

mod cleanup;

pub use cleanup::spawn_cleanup_task;
