//! Host-side plumbing for the `carousel` crate.
//!
//! The `carousel` crate owns the slider's state and invariants but never subscribes to events
//! or owns a clock. This crate provides the small, framework-neutral pieces a host needs to
//! drive it end to end:
//!
//! - [`TickScheduler`]: one-shot timers on a host-supplied millisecond clock
//! - [`SliderHost`]: routes next/previous/hover/item events and timer fires into a controller,
//!   and produces a [`Frame`] for the markup layer
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod host;
mod scheduler;

#[cfg(test)]
mod tests;

pub use host::{Frame, HostEvent, SliderHost};
pub use scheduler::{Deadline, TickScheduler};
