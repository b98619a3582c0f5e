//! Known Assets
//!
//! Curated records for the handful of real assets the dashboard recognizes,
//! plus the symbol table used to query the live price API.
//! A query matching one of these never goes through synthesis.

/// Curated dashboard record for a recognized asset.
#[derive(Debug, Clone, PartialEq)]
pub struct KnownAsset {
    pub symbol: &'static str,
    /// Lower-case names and tickers that resolve to this asset
    pub aliases: &'static [&'static str],
    /// Canonical address used for the contract field
    pub address: &'static str,
    /// `<chain>/<pair>` path of the chart embed
    pub chart_pair: &'static str,
    pub price: &'static str,
    pub change_24h: &'static str,
    pub market_cap: &'static str,
    pub volume_24h: &'static str,
    pub bonding_progress: &'static str,
    pub progress_value: f64,
    pub graduation_target: &'static str,
    pub holders: &'static str,
    pub twitter: &'static str,
    pub website: &'static str,
}

pub const KNOWN_ASSETS: &[KnownAsset] = &[
    KnownAsset {
        symbol: "SOL",
        aliases: &["solana", "sol"],
        address: "So11111111111111111111111111111111111111112",
        chart_pair: "solana/So11111111111111111111111111111111111111112",
        price: "$142.35",
        change_24h: "+5.67%",
        market_cap: "$67,234,567",
        volume_24h: "$1,234,567",
        bonding_progress: "85.42%",
        progress_value: 85.42,
        graduation_target: "$75,000,000.00",
        holders: "45,678",
        twitter: "https://twitter.com/solana",
        website: "https://solana.com",
    },
    KnownAsset {
        symbol: "BTC",
        aliases: &["bitcoin", "btc"],
        address: "9n4nbM75f5Ui33ZbPYXn59EwSgE8CGsHtAeTH5YFeJ9E",
        // WBTC
        chart_pair: "ethereum/0x2260fac5e5542a773aa44fbcfedf7c193bc2c599",
        price: "$43,567.89",
        change_24h: "+2.34%",
        market_cap: "$856,789,123",
        volume_24h: "$2,345,678",
        bonding_progress: "92.15%",
        progress_value: 92.15,
        graduation_target: "$900,000,000.00",
        holders: "123,456",
        twitter: "https://twitter.com/bitcoin",
        website: "https://bitcoin.org",
    },
    KnownAsset {
        symbol: "ETH",
        aliases: &["ethereum", "eth"],
        address: "7vfCXTUXx5WJV5JADk17DUJ4ksgau7utNKj4b963voxs",
        // WETH
        chart_pair: "ethereum/0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
        price: "$2,456.78",
        change_24h: "+3.45%",
        market_cap: "$295,678,901",
        volume_24h: "$1,567,890",
        bonding_progress: "78.93%",
        progress_value: 78.93,
        graduation_target: "$350,000,000.00",
        holders: "87,654",
        twitter: "https://twitter.com/ethereum",
        website: "https://ethereum.org",
    },
];

/// Ticker -> price API id
pub const PRICE_API_IDS: &[(&str, &str)] = &[
    ("SOL", "solana"),
    ("BTC", "bitcoin"),
    ("ETH", "ethereum"),
    ("USDC", "usd-coin"),
    ("USDT", "tether"),
    ("ADA", "cardano"),
    ("DOT", "polkadot"),
    ("LINK", "chainlink"),
    ("MATIC", "matic-network"),
    ("AVAX", "avalanche-2"),
];

/// Find a curated asset by name or ticker, ignoring case.
pub fn lookup(name: &str) -> Option<&'static KnownAsset> {
    let name = name.to_lowercase();
    KNOWN_ASSETS
        .iter()
        .find(|asset| asset.aliases.contains(&name.as_str()))
}

/// Price API id for a ticker, ignoring case.
pub fn price_api_id(symbol: &str) -> Option<&'static str> {
    let symbol = symbol.to_uppercase();
    PRICE_API_IDS
        .iter()
        .find(|(ticker, _)| *ticker == symbol)
        .map(|(_, id)| *id)
}

/// Whether the live refresh loop should poll for this ticker.
pub fn has_live_price(symbol: &str) -> bool {
    price_api_id(symbol).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_aliases_case_insensitive() {
        for name in ["sol", "SOL", "Solana", "solana"] {
            assert_eq!(lookup(name).map(|a| a.symbol), Some("SOL"));
        }
        assert_eq!(lookup("BITCOIN").map(|a| a.symbol), Some("BTC"));
        assert_eq!(lookup("eth").map(|a| a.symbol), Some("ETH"));
    }

    #[test]
    fn test_lookup_rejects_others() {
        assert!(lookup("pepe").is_none());
        assert!(lookup("usdc").is_none());
        assert!(lookup(" sol").is_none());
    }

    #[test]
    fn test_price_api_ids() {
        assert_eq!(price_api_id("sol"), Some("solana"));
        assert_eq!(price_api_id("MATIC"), Some("matic-network"));
        assert_eq!(price_api_id("avax"), Some("avalanche-2"));
        assert_eq!(price_api_id("PEPE"), None);
        assert_eq!(PRICE_API_IDS.len(), 10);
    }

    #[test]
    fn test_curated_progress_strings_agree() {
        for asset in KNOWN_ASSETS {
            assert_eq!(
                asset.bonding_progress,
                format!("{:.2}%", asset.progress_value),
                "{}",
                asset.symbol
            );
        }
    }

    #[test]
    fn test_every_curated_asset_has_live_price() {
        for asset in KNOWN_ASSETS {
            assert!(has_live_price(asset.symbol));
        }
    }
}
