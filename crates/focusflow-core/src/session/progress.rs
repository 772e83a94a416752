//! Progress and countdown derivations.

use std::fmt;

/// Whole-number percentage of completed blocks, rounded half up.
///
/// Elapsed time inside the current block does not count; the value only
/// moves when a block completes.
///
/// ```rust
/// use focusflow_core::session::progress_percent;
///
/// assert_eq!(progress_percent(0, 2), 0);
/// assert_eq!(progress_percent(1, 2), 50);
/// assert_eq!(progress_percent(1, 8), 13);
/// assert_eq!(progress_percent(2, 3), 67);
/// assert_eq!(progress_percent(0, 0), 0);
/// ```
pub fn progress_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total);
    // (100 * c / t) rounded half up, in integers
    let percent = (200 * completed + total) / (2 * total);
    u8::try_from(percent).unwrap_or(100)
}

/// Remaining time rendered as `MM:SS`.
///
/// ```rust
/// use focusflow_core::session::Countdown;
///
/// assert_eq!(Countdown(1500).to_string(), "25:00");
/// assert_eq!(Countdown(69).to_string(), "01:09");
/// assert_eq!(Countdown(0).to_string(), "00:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown(pub u32);

impl Countdown {
    pub fn minutes(&self) -> u32 {
        self.0 / 60
    }

    pub fn seconds(&self) -> u32 {
        self.0 % 60
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes(), self.seconds())
    }
}
