//! Chart and Explorer Links
//!
//! Builds the embed URL for the third-party price chart widget and the
//! outbound explorer links shown on the dashboard. Only URLs are produced;
//! nothing here talks to the network.

use crate::domain::format::utf16_len;
use crate::domain::lookup;

pub const DEXSCREENER_URL: &str = "https://dexscreener.com";
pub const BAGS_URL: &str = "https://bags.fm";

/// Tokens longer than this many UTF-16 units are embedded as a solana pair address
const PAIR_ADDRESS_MIN_LEN: usize = 30;

#[derive(Debug, Clone)]
pub struct ChartLinks {
    base_url: String,
    theme: String,
}

impl ChartLinks {
    pub fn new(base_url: impl Into<String>, theme: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            theme: theme.into(),
        }
    }

    fn embed_params(&self) -> String {
        format!("embed=1&theme={}&trades=0&info=0", self.theme)
    }

    /// Chart widget URL for the active token, or the landing chart when none
    pub fn chart_url(&self, current_token: Option<&str>) -> String {
        let Some(token) = current_token.filter(|t| !t.is_empty()) else {
            return format!("{}/solana?{}", self.base_url, self.embed_params());
        };

        if let Some(asset) = lookup(token) {
            return format!("{}/{}?{}", self.base_url, asset.chart_pair, self.embed_params());
        }

        if utf16_len(token) > PAIR_ADDRESS_MIN_LEN {
            return format!("{}/solana/{}?{}", self.base_url, token, self.embed_params());
        }

        format!(
            "{}/search/?q={}&{}",
            self.base_url,
            encode_query(token),
            self.embed_params()
        )
    }
}

/// Characters `urlencoding` escapes but URI component encoding keeps
const URI_MARKS: &[(&str, &str)] = &[("%21", "!"), ("%2A", "*"), ("%27", "'"), ("%28", "("), ("%29", ")")];

/// Percent-encode a search term the way browsers encode a URI component
fn encode_query(token: &str) -> String {
    URI_MARKS
        .iter()
        .fold(urlencoding::encode(token).into_owned(), |encoded, (escaped, mark)| {
            encoded.replace(escaped, mark)
        })
}

impl Default for ChartLinks {
    fn default() -> Self {
        Self::new(DEXSCREENER_URL, "dark")
    }
}

/// "view all trades" link for the active token
pub fn trades_url(token: &str) -> String {
    format!("{}/{}", BAGS_URL, token)
}

/// "view full details" link
pub fn details_url() -> &'static str {
    BAGS_URL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_chart() {
        let links = ChartLinks::default();
        assert_eq!(
            links.chart_url(None),
            "https://dexscreener.com/solana?embed=1&theme=dark&trades=0&info=0"
        );
        assert_eq!(links.chart_url(Some("")), links.chart_url(None));
    }

    #[test]
    fn test_known_asset_charts() {
        let links = ChartLinks::default();
        assert_eq!(
            links.chart_url(Some("SOL")),
            "https://dexscreener.com/solana/So11111111111111111111111111111111111111112?embed=1&theme=dark&trades=0&info=0"
        );
        assert_eq!(
            links.chart_url(Some("bitcoin")),
            "https://dexscreener.com/ethereum/0x2260fac5e5542a773aa44fbcfedf7c193bc2c599?embed=1&theme=dark&trades=0&info=0"
        );
        assert_eq!(
            links.chart_url(Some("eth")),
            "https://dexscreener.com/ethereum/0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2?embed=1&theme=dark&trades=0&info=0"
        );
    }

    #[test]
    fn test_pair_address_chart() {
        let links = ChartLinks::default();
        let address = "6LWpReZZo75qpvH8465C7vXZrBSUuNMFJ6iEwKo2BAGS";
        assert_eq!(
            links.chart_url(Some(address)),
            format!("https://dexscreener.com/solana/{}?embed=1&theme=dark&trades=0&info=0", address)
        );
    }

    #[test]
    fn test_search_chart_is_encoded() {
        let links = ChartLinks::default();
        assert_eq!(
            links.chart_url(Some("pepe coin&x")),
            "https://dexscreener.com/search/?q=pepe%20coin%26x&embed=1&theme=dark&trades=0&info=0"
        );
    }

    #[test]
    fn test_search_chart_keeps_uri_marks() {
        let links = ChartLinks::default();
        assert_eq!(
            links.chart_url(Some("wen (moon)!*'")),
            "https://dexscreener.com/search/?q=wen%20(moon)!*'&embed=1&theme=dark&trades=0&info=0"
        );
        assert_eq!(encode_query("a/b?c=d~e_f.g-h"), "a%2Fb%3Fc%3Dd~e_f.g-h");
    }

    #[test]
    fn test_astral_token_length_in_utf16_units() {
        let links = ChartLinks::default();
        // 16 rockets are 32 units
        let rockets = "🚀".repeat(16);
        assert_eq!(
            links.chart_url(Some(&rockets)),
            format!("https://dexscreener.com/solana/{}?embed=1&theme=dark&trades=0&info=0", rockets)
        );
        assert!(links.chart_url(Some(&"🚀".repeat(15))).starts_with("https://dexscreener.com/search/?q=%F0%9F%9A%80"));
    }

    #[test]
    fn test_custom_theme() {
        let links = ChartLinks::new("https://dexscreener.com/", "light");
        assert!(links.chart_url(None).contains("theme=light"));
    }

    #[test]
    fn test_bags_links() {
        assert_eq!(trades_url("pepe"), "https://bags.fm/pepe");
        assert_eq!(details_url(), "https://bags.fm");
    }
}
