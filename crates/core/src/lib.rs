//! Domain model for the menu-implementation pipeline.
//!
//! Pure, synchronous state: pipeline stages, client records, demand items,
//! the shared workflow board, and the finished-clients report engine. No
//! I/O lives here; the REST gateway and the stateful view containers build
//! on top of this crate.

pub mod board;
pub mod client;
pub mod dashboard;
pub mod demand;
pub mod error;
pub mod report;
pub mod search;
pub mod stage;
pub mod tasks;
pub mod types;
pub mod validation;
