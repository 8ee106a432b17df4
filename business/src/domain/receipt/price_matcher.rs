use once_cell::sync::Lazy;
use regex::Regex;

/// Decides whether a single whitespace-delimited token is a price.
///
/// Implementations for other currencies or locales plug into the extractor
/// without touching the block splitting.
pub trait PriceMatcher: Send + Sync {
    fn match_price<'a>(&self, token: &'a str) -> Option<&'a str>;
}

static DOLLAR_AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\$?[0-9]+\.[0-9][0-9]?$").expect("invalid price pattern"));

/// Matches `12.99`, `$6.50`, `$3.5`: optional dollar sign, digits, a decimal
/// point and one or two decimals.
#[derive(Debug, Clone, Copy, Default)]
pub struct DollarPriceMatcher;

impl PriceMatcher for DollarPriceMatcher {
    fn match_price<'a>(&self, token: &'a str) -> Option<&'a str> {
        DOLLAR_AMOUNT.is_match(token).then_some(token)
    }
}
