//! Memory observation for linbench runs.
//!
//! The solve routine reports named checkpoints to a [`MemoryObserver`].
//! [`MemoryProfiler`] turns those checkpoints into a [`MemoryReport`] with
//! per-step usage and increments, similar to a line-by-line memory profiler.
//!
//! Two sources are sampled:
//! - Live heap bytes, when [`TrackingAllocator`] is installed as the global
//!   allocator
//! - Resident set size of the process, via `sysinfo`
//!
//! ```rust,ignore
//! use linbench_profile::TrackingAllocator;
//!
//! #[global_allocator]
//! static ALLOC: TrackingAllocator = TrackingAllocator;
//! ```

pub mod alloc;
pub mod error;
pub mod observer;
pub mod profiler;
pub mod report;
pub mod rss;

pub use alloc::{AllocStats, TrackingAllocator};
pub use error::{Error, Result};
pub use observer::{MemoryObserver, NoopObserver};
pub use profiler::MemoryProfiler;
pub use report::{Checkpoint, MemoryReport};
pub use rss::RssSampler;
