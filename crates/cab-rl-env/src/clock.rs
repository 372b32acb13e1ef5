//! Time-of-day and day-of-week rollover

/// Modular hour/day arithmetic for a week of `days` days of `hours` slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    hours: usize,
    days: usize,
}

impl Calendar {
    /// Create a calendar.
    ///
    /// # Panics
    ///
    /// Panics if `hours` or `days` is zero.
    #[must_use]
    pub fn new(hours: usize, days: usize) -> Self {
        assert!(hours > 0 && days > 0, "calendar needs positive hours and days");
        Self { hours, days }
    }

    /// Slots per day
    #[must_use]
    pub fn hours(&self) -> usize {
        self.hours
    }

    /// Days per week
    #[must_use]
    pub fn days(&self) -> usize {
        self.days
    }

    /// Move `(time, day)` forward by `elapsed` hours, wrapping both.
    ///
    /// Whole days carried out of the hour are added to the day before it
    /// wraps, so a 49-hour jump from `(23, 6)` lands on `(0, 2)`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn advance(&self, time: usize, day: usize, elapsed: u64) -> (usize, usize) {
        let (hours, days) = (self.hours as u64, self.days as u64);
        let (time, day) = (time as u64, day as u64);
        // Reduce before adding so no elapsed value can overflow.
        let within = time % hours + elapsed % hours;
        let days_passed = time / hours % days + elapsed / hours % days + within / hours;
        let new_time = within % hours;
        let new_day = (day % days + days_passed) % days;
        // Both are below a `usize` bound.
        (new_time as usize, new_day as usize)
    }
}
