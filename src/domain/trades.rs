//! Fabricated recent trades.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::format::{dollars_with_cents, floor_u64, grouped};
use super::seed::Seed;

/// Wallet and time-code label shown next to every fabricated trade
pub const TRADE_LABEL: &str = "3S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeSide {
    Buy,
    Sell,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    pub side: TradeSide,
    pub amount: String,
    pub value: String,
    pub age: String,
    pub wallet: String,
    pub time_code: String,
}

impl TradeRecord {
    fn new(side: TradeSide, quantity: u64, symbol: &str, value: String, age_secs: u64) -> Self {
        Self {
            side,
            amount: format!("{} {}", grouped(quantity), symbol),
            value,
            age: format!("{}s ago", age_secs),
            wallet: TRADE_LABEL.to_string(),
            time_code: TRADE_LABEL.to_string(),
        }
    }
}

/// Two trades from draws `seed + 0..=9`, five draws each.
///
/// The first trade is a SELL when its side draw exceeds 0.5, the second a
/// BUY; the comparison is inverted between the two records.
pub fn synthesize_trades(seed: Seed, symbol: &str) -> [TradeRecord; 2] {
    let first_side = if seed.draw(0) > 0.5 {
        TradeSide::Sell
    } else {
        TradeSide::Buy
    };
    let first = TradeRecord::new(
        first_side,
        floor_u64(seed.draw(1) * 50_000.0 + 30_000.0),
        symbol,
        dollars_with_cents(
            floor_u64(seed.draw(2) * 20_000.0 + 5_000.0),
            floor_u64(seed.draw(3) * 100.0),
        ),
        floor_u64(seed.draw(4) * 10.0 + 1.0),
    );

    let second_side = if seed.draw(5) > 0.5 {
        TradeSide::Buy
    } else {
        TradeSide::Sell
    };
    let second = TradeRecord::new(
        second_side,
        floor_u64(seed.draw(6) * 60_000.0 + 20_000.0),
        symbol,
        dollars_with_cents(
            floor_u64(seed.draw(7) * 50_000.0 + 10_000.0),
            floor_u64(seed.draw(8) * 100.0),
        ),
        floor_u64(seed.draw(9) * 5.0 + 1.0),
    );

    [first, second]
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeSide::Buy => write!(f, "BUY"),
            TradeSide::Sell => write!(f, "SELL"),
        }
    }
}

impl fmt::Display for TradeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<4} {} {} ({})",
            self.time_code, self.side, self.amount, self.value, self.age
        )
    }
}
