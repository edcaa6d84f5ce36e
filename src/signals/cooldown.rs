//! Emission rate limiting: per-symbol cooldowns and the daily scalp cap.
//!
//! All cross-call engine state lives here, owned by one `SignalEngine`
//! instance. Cooldowns are keyed by symbol only; an emission from any
//! strategy blocks every strategy on that symbol until it expires.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::collections::HashMap;

/// Inspection view of a symbol's rate-limit state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownStatus {
    Idle,
    CoolingDown { until: DateTime<Utc> },
}

#[derive(Debug, Default)]
pub struct EngineState {
    last_emission: HashMap<String, DateTime<Utc>>,
    scalp_count: u32,
    scalp_count_date: Option<NaiveDate>,
}

impl EngineState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all cooldowns and the daily counter.
    pub fn reset(&mut self) {
        self.last_emission.clear();
        self.scalp_count = 0;
        self.scalp_count_date = None;
    }

    pub fn last_emission(&self, symbol: &str) -> Option<DateTime<Utc>> {
        self.last_emission.get(symbol).copied()
    }

    pub fn cooldown_status(
        &self,
        symbol: &str,
        required_secs: i64,
        now: DateTime<Utc>,
    ) -> CooldownStatus {
        match self.last_emission.get(symbol) {
            Some(&last) => {
                let until = last + Duration::seconds(required_secs);
                if now < until {
                    CooldownStatus::CoolingDown { until }
                } else {
                    CooldownStatus::Idle
                }
            }
            None => CooldownStatus::Idle,
        }
    }

    /// Gate an emission. When the symbol is idle (or was never emitted on),
    /// records `now` as its last emission and returns true; while cooling
    /// down returns false and leaves the state untouched.
    pub fn try_begin_cooldown(
        &mut self,
        symbol: &str,
        required_secs: i64,
        now: DateTime<Utc>,
    ) -> bool {
        if let Some(&last) = self.last_emission.get(symbol) {
            if now - last < Duration::seconds(required_secs) {
                return false;
            }
        }
        self.last_emission.insert(symbol.to_string(), now);
        true
    }

    /// Scalp emissions recorded so far on the UTC date of `now`. Lazily
    /// resets the counter the first time a new date is observed.
    pub fn scalp_emissions_today(&mut self, now: DateTime<Utc>) -> u32 {
        self.roll_scalp_date(now.date_naive());
        self.scalp_count
    }

    pub fn scalp_cap_reached(&mut self, now: DateTime<Utc>, cap: u32) -> bool {
        self.scalp_emissions_today(now) >= cap
    }

    pub fn record_scalp_emission(&mut self, now: DateTime<Utc>) {
        self.roll_scalp_date(now.date_naive());
        self.scalp_count += 1;
    }

    fn roll_scalp_date(&mut self, today: NaiveDate) {
        if self.scalp_count_date != Some(today) {
            self.scalp_count = 0;
            self.scalp_count_date = Some(today);
        }
    }
}
