//! Debouncing and gesture classification for a single button read through
//! an analog input pin.
//!
//! The detector is polled from a cooperative main loop. There are no
//! interrupts, no allocation and no suspension points. Every poll samples
//! the input level and the millisecond clock, advances a small state
//! machine and fires the registered handlers as gestures complete:
//!
//! ```text
//!                     [ main loop ]
//!                          |
//!                        poll()
//!                          |
//!            +-------------+-------------+
//!            |                           |
//!     [ AnalogSource ]               [ Clock ]
//!            |                           |
//!            +-----> state machine <-----+
//!                          |
//!      click / double click / long press handlers
//! ```
//!
//! A press is recognized when the reading falls inside a tolerance window
//! around the configured active level; a release when the reading returns
//! near the pull-up rail. Releases arriving faster than the debounce delay
//! are dropped as contact bounce.

#![no_std]

mod button;
mod config;
mod input;
mod log;

pub use button::{AnalogButton, Handler};
pub use config::{Config, RELEASED_LEVEL};
pub use input::{AnalogSource, Clock};
