//! A headless horizontal slider (carousel) engine.
//!
//! For host-side plumbing (a tick-driven timer and an event router), see the
//! `carousel-adapter` crate.
//!
//! This crate focuses on the state that has real invariants: the clamped content offset, the
//! indicator selection that follows it, and the self-correcting auto-advance timer.
//!
//! It is UI-agnostic. A rendering layer is expected to provide:
//! - the viewport width
//! - a `measure(item)` function returning each item's margin-inclusive width
//! - a [`Scheduler`] for one-shot timers
//!
//! and to apply [`SliderState::offset`] as the content row's left margin.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod error;
mod options;
mod position;
mod registry;
mod scheduler;
mod state;
mod types;


pub use controller::SlideController;
pub use error::OptionsError;
pub use options::{AutoAdvance, DEFAULT_STEP_SIZE, MeasureFn, OnChangeCallback, SliderOptions};
pub use position::PositionEngine;
pub use registry::{ItemRegistry, Slide};
pub use scheduler::{NullScheduler, Scheduler};
pub use state::SliderState;
pub use types::{AutoAdvanceState, Bounds, Indicator, TimerHandle};
