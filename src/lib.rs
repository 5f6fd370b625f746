//! scrollstory - support library for scroll-driven narrative visualizations
//!
//! Reactive state cells plus the layout, formatting, and timing helpers a
//! narrative data-visualization front end leans on. This is deliberately a
//! flat function library: aside from the observable cells there is no
//! pipeline, no persistence, and no validation layer — helpers are
//! independently callable and best-effort on malformed input.
//!
//! # Architecture
//!
//! - [`store`] - Observable value cells with synchronous notification
//! - [`story`] - The fixed set of cells a running story exposes to views
//! - [`geometry`] - Spiral layouts, polar conversion, CSS transform strings
//! - [`format`] - Unit-scaled number formatting and ordinal suffixes
//! - [`timing`] - Debounce, throttle, and scope-bound interval timers
//! - [`canvas`] - Backing-store scale math for high-DPI canvases
//! - [`utils`] - Unique ids, flatten, hostname extraction
//!
//! The timing utilities require a tokio runtime; everything else is pure
//! and runtime-free.

// Allow pedantic clippy warnings that are not worth fixing for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod canvas;
pub mod format;
pub mod geometry;
pub mod store;
pub mod story;
pub mod timing;
pub mod utils;

// Re-export commonly used types
pub use store::{Store, Subscription};
pub use story::StoryState;
pub use timing::{Debouncer, IntervalHandle, ThrottleOptions, Throttler};
