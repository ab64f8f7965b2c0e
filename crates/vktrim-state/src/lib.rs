//! Live-object state tracking for trim capture.
//!
//! Tracks every API object currently alive, together with the recorded
//! calls needed to recreate each object's present state from scratch.
//! When a trim window opens, the controller clones the whole tracker
//! (a deep, storage-independent snapshot) and synthesizes the minimal
//! recreate-records from the clone while the live tracker keeps running.

pub mod command;
pub mod config;
pub mod descriptor;
pub mod device;
pub mod error;
pub mod image;
pub mod memory;
pub mod pipeline;
pub mod registry;
pub mod renderpass;
pub mod sync;
pub mod tracker;

pub use config::{CaptureConfig, TrackerConfig};
pub use error::StateError;
pub use registry::{Registry, TrackedInfo};
pub use tracker::StateTracker;
