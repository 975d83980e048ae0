//! Gesture detection state machine for a single analog button.
//!
//! | Gesture      | Condition                                          |
//! |--------------|----------------------------------------------------|
//! | Click        | press, release, no second press within the window  |
//! | Double click | second press starts inside the window              |
//! | Long press   | held continuously past the threshold               |

use crate::config::Config;
use crate::input::{AnalogSource, Clock};
use crate::log;

/// Zero-argument gesture handler, borrowed for the detector's lifetime.
pub type Handler<'a> = &'a mut dyn FnMut();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum State {
    /// Waiting for the button to go down.
    Idle,
    /// First press seen, waiting for release or the long press threshold.
    PressedFirst { pressed_at: u32 },
    /// Released after a debounced press, waiting for a second press or the
    /// end of the click window.
    ReleasedFirst { pressed_at: u32 },
    /// Second press seen inside the window, waiting for its release.
    PressedSecond,
    /// Long press threshold crossed, waiting for release.
    Held,
}

#[derive(Default)]
struct Handlers<'a> {
    click: Option<Handler<'a>>,
    double_click: Option<Handler<'a>>,
    press: Option<Handler<'a>>,
    long_press_start: Option<Handler<'a>>,
    long_press_stop: Option<Handler<'a>>,
    during_long_press: Option<Handler<'a>>,
}

/// Gesture detector for one button wired to an analog input.
///
/// Call [`poll`](Self::poll) on every iteration of the main loop. The
/// detector samples the input and the clock, advances its state machine
/// and invokes the registered handlers as gestures complete. At most one
/// transition is taken per poll.
pub struct AnalogButton<'a, A, C> {
    input: A,
    clock: C,
    config: Config,
    state: State,
    handlers: Handlers<'a>,
}

impl<'a, A, C> AnalogButton<'a, A, C> {
    /// Creates a detector with default timing. `active_level` is the ADC
    /// reading expected while the button is held down.
    pub fn new(input: A, clock: C, active_level: u16) -> Self {
        Self {
            input,
            clock,
            config: Config::new(active_level),
            state: State::Idle,
            handlers: Handlers::default(),
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Set the double click window, in milliseconds from the initial press.
    pub fn set_click_window(&mut self, ms: u32) {
        self.config.click_window_ms = ms;
    }

    /// Set the hold duration that turns a press into a long press.
    pub fn set_long_press_threshold(&mut self, ms: u32) {
        self.config.long_press_ms = ms;
    }

    /// Set the accepted margin around the target levels, in raw ADC units.
    pub fn set_tolerance(&mut self, units: u16) {
        self.config.tolerance = units;
    }

    /// Set the delay below which a release is discarded as contact bounce.
    pub fn set_debounce(&mut self, ms: u32) {
        self.config.debounce_ms = ms;
    }

    /// Register the handler fired on a completed single click.
    ///
    /// Re-attaching replaces the previous handler, `None` detaches. The
    /// same holds for every other slot.
    pub fn attach_click(&mut self, handler: Option<Handler<'a>>) {
        self.handlers.click = handler;
    }

    /// Register the handler fired on a completed double click.
    pub fn attach_double_click(&mut self, handler: Option<Handler<'a>>) {
        self.handlers.double_click = handler;
    }

    /// Register the handler fired when a press crosses the long press
    /// threshold, at the same instant as the long press start handler.
    #[deprecated(note = "attach a long press start handler instead")]
    pub fn attach_press(&mut self, handler: Option<Handler<'a>>) {
        self.handlers.press = handler;
    }

    /// Register the handler fired once when a press crosses the long press
    /// threshold.
    pub fn attach_long_press_start(&mut self, handler: Option<Handler<'a>>) {
        self.handlers.long_press_start = handler;
    }

    /// Register the handler fired once when a long press is released.
    pub fn attach_long_press_stop(&mut self, handler: Option<Handler<'a>>) {
        self.handlers.long_press_stop = handler;
    }

    /// Register the handler fired on every poll while a long press is in
    /// progress, starting at the threshold crossing.
    pub fn attach_during_long_press(&mut self, handler: Option<Handler<'a>>) {
        self.handlers.during_long_press = handler;
    }

    /// Whether a long press is in progress right now.
    #[must_use]
    pub fn is_long_pressed(&self) -> bool {
        self.state == State::Held
    }

    /// Advance the state machine one step from an externally sampled
    /// reading and timestamp.
    ///
    /// [`poll`](Self::poll) is a thin wrapper around this. Call it directly
    /// when sampling happens elsewhere, e.g. when one ADC is multiplexed
    /// over several channels.
    pub fn update(&mut self, level: u16, now_ms: u32) {
        match self.state {
            State::Idle => {
                if self.config.is_pressed(level) {
                    self.state = State::PressedFirst { pressed_at: now_ms };
                }
            }
            State::PressedFirst { pressed_at } => {
                let elapsed = now_ms.wrapping_sub(pressed_at);
                if self.config.is_released(level) && elapsed < self.config.debounce_ms {
                    // released too quickly, assume contact bounce
                    self.state = State::Idle;
                } else if self.config.is_released(level) {
                    self.state = State::ReleasedFirst { pressed_at };
                } else if self.config.is_pressed(level) && elapsed > self.config.long_press_ms {
                    log::info!("button long press start");
                    fire(&mut self.handlers.press);
                    fire(&mut self.handlers.long_press_start);
                    fire(&mut self.handlers.during_long_press);
                    self.state = State::Held;
                }
            }
            State::ReleasedFirst { pressed_at } => {
                if now_ms.wrapping_sub(pressed_at) > self.config.click_window_ms {
                    log::info!("button click");
                    fire(&mut self.handlers.click);
                    self.state = State::Idle;
                } else if self.config.is_pressed(level) {
                    self.state = State::PressedSecond;
                }
            }
            State::PressedSecond => {
                // no timeout here, the release may come arbitrarily late
                if self.config.is_released(level) {
                    log::info!("button double click");
                    fire(&mut self.handlers.double_click);
                    self.state = State::Idle;
                }
            }
            State::Held => {
                if self.config.is_released(level) {
                    log::info!("button long press stop");
                    fire(&mut self.handlers.long_press_stop);
                    self.state = State::Idle;
                } else {
                    fire(&mut self.handlers.during_long_press);
                }
            }
        }
    }
}

impl<'a, A: AnalogSource, C: Clock> AnalogButton<'a, A, C> {
    /// Sample the input and the clock and advance the state machine.
    ///
    /// Never blocks. Handlers run inline on the caller's stack; a handler
    /// that takes long delays every later poll and with it the timing
    /// accuracy of the detector.
    pub fn poll(&mut self) {
        let level = self.input.read_level();
        let now_ms = self.clock.now_ms();
        self.update(level, now_ms);
    }
}

fn fire(slot: &mut Option<Handler>) {
    if let Some(handler) = slot {
        handler();
    }
}
