//! Search query resolution.

use super::format::{utf16_len, utf16_slice};
use super::known_assets::{self, KnownAsset};

/// A search string mapped to the address and ticker the dashboard works with.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedQuery {
    /// Trimmed query, or the canonical address for a known asset
    pub address: String,
    pub symbol: String,
    pub known: Option<&'static KnownAsset>,
}

impl ResolvedQuery {
    pub fn is_known(&self) -> bool {
        self.known.is_some()
    }
}

/// Resolve a raw search string. Returns `None` for blank input.
///
/// Known names map to their canonical address. Anything longer than 20
/// UTF-16 units is treated as an address and takes its first four units as
/// the ticker; shorter input is upper-cased into a ticker.
pub fn resolve(query: &str) -> Option<ResolvedQuery> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    if let Some(asset) = known_assets::lookup(query) {
        return Some(ResolvedQuery {
            address: asset.address.to_string(),
            symbol: asset.symbol.to_string(),
            known: Some(asset),
        });
    }

    let symbol = if utf16_len(query) > 20 {
        utf16_slice(query, 0, 4).to_uppercase()
    } else {
        query.to_uppercase()
    };

    Some(ResolvedQuery {
        address: query.to_string(),
        symbol,
        known: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query() {
        assert!(resolve("").is_none());
        assert!(resolve("   \t").is_none());
    }

    #[test]
    fn test_known_asset_resolves_to_canonical_address() {
        let resolved = resolve("  Solana ").unwrap();
        assert_eq!(resolved.symbol, "SOL");
        assert_eq!(resolved.address, "So11111111111111111111111111111111111111112");
        assert!(resolved.is_known());
    }

    #[test]
    fn test_short_query_upper_cased() {
        let resolved = resolve("pepe").unwrap();
        assert_eq!(resolved.symbol, "PEPE");
        assert_eq!(resolved.address, "pepe");
        assert!(!resolved.is_known());
    }

    #[test]
    fn test_long_query_takes_four_char_symbol() {
        let resolved = resolve("6LWpReZZo75qpvH8465C7vXZrBSUuNMFJ6iEwKo2BAGS").unwrap();
        assert_eq!(resolved.symbol, "6LWP");
        assert_eq!(resolved.address, "6LWpReZZo75qpvH8465C7vXZrBSUuNMFJ6iEwKo2BAGS");
    }

    #[test]
    fn test_exactly_twenty_chars_is_a_symbol() {
        let resolved = resolve("abcdefghijklmnopqrst").unwrap();
        assert_eq!(resolved.symbol, "ABCDEFGHIJKLMNOPQRST");
    }

    #[test]
    fn test_astral_input_measured_in_utf16_units() {
        // 11 rockets: 11 chars but 22 units, so an address
        let resolved = resolve(&"🚀".repeat(11)).unwrap();
        assert_eq!(resolved.symbol, "🚀🚀");

        let resolved = resolve(&"🚀".repeat(10)).unwrap();
        assert_eq!(resolved.symbol, "🚀".repeat(10));
    }
}
