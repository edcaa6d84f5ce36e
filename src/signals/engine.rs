//! Main signal evaluation engine.
//!
//! One evaluation cycle per call: candidate sweep, confidence modifiers,
//! selection, rate limiting. Pure and synchronous; the host triggers it on
//! an interval, once per tracked symbol, and serializes calls per engine
//! instance. Nothing here performs I/O or suspends, and no failure crosses
//! the boundary: every degenerate input collapses to "no signal".

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::indicators::volatility::{atr, ATR_PERIOD};
use crate::models::candle::Candle;
use crate::models::context::EvalContext;
use crate::models::signal::{EmittedSignal, ScoredCandidate, Side};
use crate::signals::confidence::{self, ModifierInputs};
use crate::signals::cooldown::EngineState;
use crate::signals::selector::SignalSelector;
use crate::strategies::generator::CandidateGenerator;
use crate::strategies::weights::StrategyKind;

/// Fewest bars a window needs before any strategy is consulted.
pub const MIN_CANDLES: usize = 5;

const ATR_STOP_MULTIPLIER: f64 = 1.5;
const FIB_TARGETS: [f64; 3] = [0.382, 0.618, 1.0];

pub struct SignalEngine {
    config: EngineConfig,
    state: EngineState,
}

impl SignalEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            state: EngineState::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Clear all cooldowns and the daily scalp counter.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Evaluate one symbol's window against the wall clock.
    pub fn evaluate(
        &mut self,
        symbol: &str,
        candles: &[Candle],
        notional_balance: f64,
        context: &EvalContext,
    ) -> Option<EmittedSignal> {
        self.evaluate_at(Utc::now(), symbol, candles, notional_balance, context)
    }

    /// Evaluate at an explicit time. Hosts with their own clock and tests
    /// use this directly; `evaluate` delegates here.
    ///
    /// `_notional_balance` is part of the call contract but consulted by no
    /// rule; sizing is the caller's concern.
    pub fn evaluate_at(
        &mut self,
        now: DateTime<Utc>,
        symbol: &str,
        candles: &[Candle],
        _notional_balance: f64,
        context: &EvalContext,
    ) -> Option<EmittedSignal> {
        if candles.len() < MIN_CANDLES {
            debug!(
                symbol = %symbol,
                bars = candles.len(),
                "SignalEngine: window too short for {}",
                symbol
            );
            return None;
        }

        let mut candidates = CandidateGenerator::generate(&self.config, symbol, candles, now);
        if candidates.is_empty() {
            // The common cycle: nothing set up, nothing to score.
            return None;
        }

        // Daily scalp cap, enforced before the candidates reach scoring:
        // the 4th+ scalp setup of the UTC day on the capped symbol is
        // dropped from the list, not merely rate-limited later.
        if symbol == self.config.scalp_symbol
            && candidates
                .iter()
                .any(|c| c.strategy == StrategyKind::ScalpGold)
            && self
                .state
                .scalp_cap_reached(now, self.config.scalp_daily_cap)
        {
            debug!(
                symbol = %symbol,
                cap = self.config.scalp_daily_cap,
                "SignalEngine: daily scalp cap reached for {}, dropping scalp candidates",
                symbol
            );
            candidates.retain(|c| c.strategy != StrategyKind::ScalpGold);
            if candidates.is_empty() {
                return None;
            }
        }

        let inputs = ModifierInputs {
            news_penalty: confidence::news_penalty(&self.config, symbol, &context.news, now),
            trend: confidence::higher_trend(&context.higher, candles),
            market_strength: confidence::market_strength(candles),
            correlation: context.correlation_for(symbol),
            fear: context.vix() > self.config.vix_threshold,
        };

        let scored: Vec<ScoredCandidate> = candidates
            .into_iter()
            .map(|candidate| {
                let confidence = confidence::score(&candidate, &inputs);
                ScoredCandidate {
                    candidate,
                    confidence,
                }
            })
            .collect();

        let winner = SignalSelector::select(scored)?;

        let required_secs = self.config.cooldown_secs_for(winner.candidate.strategy);
        if !self.state.try_begin_cooldown(symbol, required_secs, now) {
            debug!(
                symbol = %symbol,
                strategy = winner.candidate.strategy.name(),
                "SignalEngine: {} still cooling down, suppressing {}",
                symbol,
                winner.candidate.strategy.name()
            );
            return None;
        }

        if winner.candidate.strategy == StrategyKind::ScalpGold
            && symbol == self.config.scalp_symbol
        {
            self.state.record_scalp_emission(now);
        }

        let entry = candles.last()?.close;
        let (stop_loss, take_profits) = attach_levels(candles, winner.candidate.side, entry);
        let signal = EmittedSignal::from_winner(&winner, entry, stop_loss, take_profits, now);

        info!(
            symbol = %symbol,
            strategy = signal.strategy.name(),
            side = ?signal.side,
            confidence = signal.confidence,
            "SignalEngine: emitting {} {:?} for {} (confidence {})",
            signal.strategy.name(),
            signal.side,
            symbol,
            signal.confidence
        );

        Some(signal)
    }
}

/// Stop and take-profit levels from ATR(14): the stop sits 1.5 ATR beyond
/// entry against the signal, the targets at the Fibonacci fractions of that
/// stop distance in its favor. Windows too short for ATR attach nothing.
fn attach_levels(candles: &[Candle], side: Side, entry: f64) -> (Option<f64>, Option<Vec<f64>>) {
    match atr(candles, ATR_PERIOD) {
        Some(range) if range > 0.0 => {
            let risk = range * ATR_STOP_MULTIPLIER;
            let stop = entry - side.sign() * risk;
            let targets = FIB_TARGETS
                .iter()
                .map(|f| entry + side.sign() * risk * f)
                .collect();
            (Some(stop), Some(targets))
        }
        _ => (None, None),
    }
}
