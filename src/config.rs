//! Timing thresholds and analog level windows of the detector.

/// Analog reading of the input while the button is released.
///
/// The pin is pulled up, so an open button floats to the top of the ADC
/// range.
pub const RELEASED_LEVEL: u16 = 1023;

/// Tunable parameters of the gesture detector.
///
/// None of the values are validated. They may be changed in the middle of
/// a gesture and take effect on the next evaluated transition.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// ADC reading expected while the button is held down.
    pub active_level: u16,
    /// Accepted margin around the target levels, in raw ADC units.
    pub tolerance: u16,
    /// Releases arriving sooner than this after a press are discarded as
    /// contact bounce.
    pub debounce_ms: u32,
    /// Window, counted from the initial press, within which a second press
    /// turns the gesture into a double click.
    pub click_window_ms: u32,
    /// Hold duration beyond which a press is reclassified as a long press.
    pub long_press_ms: u32,
}

impl Config {
    pub fn new(active_level: u16) -> Self {
        Self {
            active_level,
            tolerance: 10,
            debounce_ms: 50,
            click_window_ms: 600,
            long_press_ms: 1000,
        }
    }

    /// Whether the reading falls strictly inside the pressed window.
    #[must_use]
    pub fn is_pressed(&self, level: u16) -> bool {
        level > self.active_level.saturating_sub(self.tolerance)
            && level < self.active_level.saturating_add(self.tolerance)
    }

    /// Whether the reading is close enough to the pull-up rail to count as
    /// a full release.
    ///
    /// This is intentionally a different check than [`is_pressed`]. The
    /// pressed window guards against partial presses, the released
    /// threshold against incomplete releases. A reading between the two
    /// matches neither and the state machine keeps waiting.
    ///
    /// [`is_pressed`]: Self::is_pressed
    #[must_use]
    pub fn is_released(&self, level: u16) -> bool {
        level >= RELEASED_LEVEL.saturating_sub(self.tolerance)
    }
}
