//! Seam between the gesture detector and the hardware binding.
//!
//! The crate never touches pins or timers itself. The firmware wires these
//! two traits to its ADC and its millisecond counter, and the detector
//! polls them.

/// One-shot sampling of the analog input the button is wired to.
///
/// Implementations are expected to configure the pin as an input with the
/// pull-up enabled, so that an open button reads near
/// [`RELEASED_LEVEL`](crate::RELEASED_LEVEL). The read must not block.
pub trait AnalogSource {
    /// Sample the current level, in raw ADC units.
    fn read_level(&mut self) -> u16;
}

/// Monotonic millisecond counter.
///
/// The counter wraps at `u32::MAX`. All elapsed-time checks subtract in
/// wrapping arithmetic, so a rollover in the middle of a gesture does not
/// produce a spurious interval.
pub trait Clock {
    /// Milliseconds since an arbitrary epoch.
    fn now_ms(&mut self) -> u32;
}
