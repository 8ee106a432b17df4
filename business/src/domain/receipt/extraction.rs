use std::sync::Arc;

use super::model::{ExtractedItem, Extraction, SkipReason, SkippedBlock};
use super::price_matcher::{DollarPriceMatcher, PriceMatcher};

/// Tag name suffix that opens and closes every recognized text element.
const RECOGNIZED_TEXT_MARKER: &str = "recognizedText>";
const LITERAL_OPEN: &str = "[CDATA[";
const LITERAL_CLOSE: &str = "]]></";
/// Garbage the recognition engine emits for unreadable receipt regions.
const SCANNER_NOISE_MARKER: &str = "**Sb8T0TIL";
/// Fragments after the last content block that belong to the document footer.
const FOOTER_FRAGMENTS: usize = 2;

/// Turns the downloaded recognition result into ordered receipt items.
#[derive(Clone)]
pub struct ReceiptTextExtractor {
    matcher: Arc<dyn PriceMatcher>,
}

impl Default for ReceiptTextExtractor {
    fn default() -> Self {
        Self::new(Arc::new(DollarPriceMatcher))
    }
}

impl ReceiptTextExtractor {
    pub fn new(matcher: Arc<dyn PriceMatcher>) -> Self {
        Self { matcher }
    }

    /// Parses `raw` into items, recording every block that produced none.
    ///
    /// Pure: the same input always yields the same extraction.
    pub fn extract(&self, raw: &str) -> Extraction {
        let mut extraction = Extraction::default();

        for (position, block) in content_blocks(raw).enumerate() {
            match self.parse_block(block) {
                Ok(item) => extraction.items.push(item),
                Err((reason, payload)) => extraction.skipped.push(SkippedBlock {
                    position,
                    reason,
                    payload,
                }),
            }
        }

        extraction
    }

    fn parse_block(&self, block: &str) -> Result<ExtractedItem, (SkipReason, String)> {
        let payload = literal_text(block)
            .and_then(|text| text.split('\n').nth(1))
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .ok_or_else(|| (SkipReason::MissingPayload, String::new()))?;

        let price = payload
            .split_whitespace()
            .find_map(|token| self.matcher.match_price(token))
            .ok_or_else(|| (SkipReason::MissingPrice, payload.to_string()))?;

        let description = payload.replacen(price, "", 1);
        if description.contains(SCANNER_NOISE_MARKER) {
            return Err((SkipReason::ScannerNoise, payload.to_string()));
        }

        Ok(ExtractedItem::new(description, price))
    }
}

/// Content fragments of the export: header and footer dropped, then every
/// other fragment, since the split alternates between element bodies and the
/// residue between a closing and the next opening marker.
fn content_blocks(raw: &str) -> impl Iterator<Item = &str> {
    let fragments: Vec<&str> = raw.split(RECOGNIZED_TEXT_MARKER).collect();
    let body_len = fragments.len().saturating_sub(1 + FOOTER_FRAGMENTS);
    fragments.into_iter().skip(1).take(body_len).step_by(2)
}

/// Inner text of the first escaped-literal block in `fragment`.
fn literal_text(fragment: &str) -> Option<&str> {
    let (_, rest) = fragment.split_once(LITERAL_OPEN)?;
    Some(match rest.find(LITERAL_CLOSE) {
        Some(end) => &rest[..end],
        None => rest,
    })
}
