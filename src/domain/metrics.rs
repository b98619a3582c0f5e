//! Token metrics shown on the dashboard.
//!
//! Three sources feed a [`TokenMetrics`] record:
//! - the placeholder shown before and during a search,
//! - a curated [`KnownAsset`] record, optionally overlaid with a [`LiveQuote`],
//! - the seeded synthesizer for everything else.

use serde::{Deserialize, Serialize};

use super::format::{
    dollars, dollars_with_cents, floor_u64, shorten_address, signed_percent, to_fixed, usd_millions,
    usd_price,
};
use super::known_assets::KnownAsset;
use super::query::ResolvedQuery;
use super::seed::Seed;

pub const TOTAL_SUPPLY: &str = "999,999,999";
pub const ZERO_FEES: &str = "$0";
pub const AI_SCORE: &str = "9.5/10";
pub const RISK_LEVEL: &str = "LOW";
/// Contract label for inputs too short to be an address
pub const PLACEHOLDER_CONTRACT: &str = "HvpRBX...xHBAGS";

/// Live market values for a recognized asset, in USD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiveQuote {
    pub usd: f64,
    pub usd_market_cap: f64,
    pub usd_24h_vol: f64,
    pub usd_24h_change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetrics {
    pub price: String,
    pub change_24h: String,
    pub market_cap: String,
    pub total_supply: String,
    pub total_fees: String,
    pub volume_24h: String,
    pub bonding_progress: String,
    pub progress_value: f64,
    pub graduation_target: String,
    pub holders: String,
    pub contract: String,
    pub ai_score: String,
    pub risk_level: String,
    pub creator_fees: String,
    pub platform_fees: String,
    pub twitter: Option<String>,
    pub website: Option<String>,
    pub token_symbol: String,
    pub pair_address: String,
}

impl TokenMetrics {
    /// Record displayed before any search completes.
    pub fn placeholder() -> Self {
        Self {
            price: "$0.000042".to_string(),
            change_24h: "+420.69%".to_string(),
            market_cap: "$6,467".to_string(),
            total_supply: TOTAL_SUPPLY.to_string(),
            total_fees: ZERO_FEES.to_string(),
            volume_24h: "$25".to_string(),
            bonding_progress: "9.37%".to_string(),
            progress_value: 9.37,
            graduation_target: "$62,535.34".to_string(),
            holders: "1,337".to_string(),
            contract: "AGRhxj...DrBAGS".to_string(),
            ai_score: AI_SCORE.to_string(),
            risk_level: RISK_LEVEL.to_string(),
            creator_fees: ZERO_FEES.to_string(),
            platform_fees: ZERO_FEES.to_string(),
            twitter: None,
            website: None,
            token_symbol: String::new(),
            pair_address: String::new(),
        }
    }

    /// Curated record for a recognized asset, before any live overlay.
    pub fn curated(asset: &KnownAsset) -> Self {
        Self {
            price: asset.price.to_string(),
            change_24h: asset.change_24h.to_string(),
            market_cap: asset.market_cap.to_string(),
            total_supply: TOTAL_SUPPLY.to_string(),
            total_fees: ZERO_FEES.to_string(),
            volume_24h: asset.volume_24h.to_string(),
            bonding_progress: asset.bonding_progress.to_string(),
            progress_value: asset.progress_value,
            graduation_target: asset.graduation_target.to_string(),
            holders: asset.holders.to_string(),
            contract: contract_label(asset.address),
            ai_score: AI_SCORE.to_string(),
            risk_level: RISK_LEVEL.to_string(),
            creator_fees: ZERO_FEES.to_string(),
            platform_fees: ZERO_FEES.to_string(),
            twitter: Some(asset.twitter.to_string()),
            website: Some(asset.website.to_string()),
            token_symbol: asset.symbol.to_string(),
            pair_address: asset.address.to_string(),
        }
    }

    /// Fabricate a record from draws `seed + 0..=9`.
    ///
    /// Offsets: market cap, volume, progress, price, 24h change, graduation
    /// integer, graduation cents, holders, twitter, website.
    pub fn synthesize(seed: Seed, query: &ResolvedQuery) -> Self {
        let market_cap = floor_u64(seed.draw(0) * 50_000.0 + 10_000.0);
        let volume = floor_u64(seed.draw(1) * 100.0 + 25.0);
        let progress_value = seed.draw(2) * 15.0 + 5.0;
        let price = seed.draw(3) * 0.01;
        let change = (seed.draw(4) - 0.5) * 1_000.0;
        let graduation_whole = floor_u64(seed.draw(5) * 100_000.0 + 50_000.0);
        let graduation_cents = floor_u64(seed.draw(6) * 100.0);
        let holders = floor_u64(seed.draw(7) * 5_000.0);

        let handle = query.symbol.to_lowercase();
        let twitter = (seed.draw(8) > 0.3).then(|| format!("https://twitter.com/{}", handle));
        let website = (seed.draw(9) > 0.4).then(|| format!("https://{}.com", handle));

        Self {
            price: format!("${}", to_fixed(price, 6)),
            change_24h: signed_percent(change),
            market_cap: dollars(market_cap),
            total_supply: TOTAL_SUPPLY.to_string(),
            total_fees: ZERO_FEES.to_string(),
            volume_24h: format!("${}", volume),
            bonding_progress: format!("{}%", to_fixed(progress_value, 2)),
            progress_value,
            graduation_target: dollars_with_cents(graduation_whole, graduation_cents),
            holders: holders.to_string(),
            contract: contract_label(&query.address),
            ai_score: AI_SCORE.to_string(),
            risk_level: RISK_LEVEL.to_string(),
            creator_fees: ZERO_FEES.to_string(),
            platform_fees: ZERO_FEES.to_string(),
            twitter,
            website,
            token_symbol: query.symbol.clone(),
            pair_address: query.address.clone(),
        }
    }

    /// Overwrite price, market cap, volume and 24h change with live values.
    pub fn apply_live(&mut self, quote: &LiveQuote) {
        self.price = usd_price(quote.usd);
        self.market_cap = usd_millions(quote.usd_market_cap);
        self.volume_24h = usd_millions(quote.usd_24h_vol);
        self.change_24h = signed_percent(quote.usd_24h_change);
    }
}

impl Default for TokenMetrics {
    fn default() -> Self {
        Self::placeholder()
    }
}

fn contract_label(address: &str) -> String {
    shorten_address(address).unwrap_or_else(|| PLACEHOLDER_CONTRACT.to_string())
}
