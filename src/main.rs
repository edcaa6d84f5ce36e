//! Demo driver: builds two synthetic windows, runs the engine on both, and
//! prints whatever it emits as the JSON the transport layer would broadcast.

use chrono::{Duration, TimeZone, Utc};
use signalforge::models::Candle;
use signalforge::{EngineConfig, EvalContext, SignalEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    signalforge::logging::init_logging();

    let config = EngineConfig::from_env()?;
    let balance = config.default_balance;
    let mut engine = SignalEngine::new(config);
    let context = EvalContext::default();

    // A quiet drifting window: the common no-signal cycle.
    let quiet = drift_window("EURUSD", 1.085, 30);
    match engine.evaluate("EURUSD", &quiet, balance, &context) {
        Some(signal) => println!("{}", serde_json::to_string_pretty(&signal)?),
        None => println!("EURUSD: no signal"),
    }

    // A 20-bar-high breakout on twice the usual volume.
    let surging = breakout_window("BTCUSD", 45_000.0, 30);
    match engine.evaluate("BTCUSD", &surging, balance, &context) {
        Some(signal) => println!("{}", serde_json::to_string_pretty(&signal)?),
        None => println!("BTCUSD: no signal"),
    }

    Ok(())
}

fn drift_window(symbol: &str, base: f64, bars: usize) -> Vec<Candle> {
    let start = Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();
    (0..bars)
        .map(|i| {
            let wiggle = if i % 2 == 0 { 0.0002 } else { -0.0002 };
            let open = base + wiggle;
            let close = base;
            Candle::new(
                symbol,
                start + Duration::minutes(5 * i as i64),
                open,
                open.max(close) + 0.0001,
                open.min(close) - 0.0001,
                close,
                1_000.0,
            )
        })
        .collect()
}

fn breakout_window(symbol: &str, base: f64, bars: usize) -> Vec<Candle> {
    let start = Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();
    let mut candles: Vec<Candle> = (0..bars - 1)
        .map(|i| {
            let open = base + (i % 3) as f64 * 10.0;
            let close = open + 5.0;
            Candle::new(
                symbol,
                start + Duration::minutes(5 * i as i64),
                open,
                close + 10.0,
                open - 10.0,
                close,
                1_000.0,
            )
        })
        .collect();

    let prior_max_high = candles
        .iter()
        .map(|c| c.high)
        .fold(f64::MIN, f64::max);
    let open = prior_max_high + 5.0;
    let close = open + 40.0;
    candles.push(Candle::new(
        symbol,
        start + Duration::minutes(5 * (bars as i64 - 1)),
        open,
        close + 5.0,
        open - 5.0,
        close,
        2_000.0,
    ));
    candles
}
