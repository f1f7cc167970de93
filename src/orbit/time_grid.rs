use chrono::{DateTime, Duration, DurationRound, NaiveDateTime, Utc};

use super::error::OrbitError;

pub const WINDOW: Duration = Duration::days(30);
pub const STEP: Duration = Duration::hours(6);

/// Equally spaced sample instants, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeGrid {
    instants: Vec<DateTime<Utc>>,
}

impl TimeGrid {
    /// Instants from `now - window` up to and including `now`
    pub fn past_window(now: DateTime<Utc>, window: Duration, step: Duration) -> Self {
        let end = now;
        let mut cursor = now - window;
        let mut instants = Vec::new();

        if step <= Duration::zero() {
            return Self { instants };
        }

        while cursor <= end {
            instants.push(cursor);
            cursor += step;
        }

        Self { instants }
    }

    pub fn last_thirty_days(now: DateTime<Utc>) -> Self {
        Self::past_window(now, WINDOW, STEP)
    }

    pub fn instants(&self) -> &[DateTime<Utc>] {
        &self.instants
    }

    pub fn len(&self) -> usize {
        self.instants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instants.is_empty()
    }

    /// Instants handed to the propagator: calendar date and hour only.
    pub fn propagation_instants(&self) -> Result<Vec<NaiveDateTime>, OrbitError> {
        self.instants
            .iter()
            .map(|t| {
                t.duration_trunc(Duration::hours(1))
                    .map(|hour| hour.naive_utc())
                    .map_err(|e| OrbitError::TimeConversion(e.to_string()))
            })
            .collect()
    }
}
