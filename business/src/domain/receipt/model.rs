use serde::Serialize;

/// A purchased line recovered from one recognized text block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedItem {
    pub description: String,
    pub price: String,
}

impl ExtractedItem {
    pub fn new(description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            price: price.into(),
        }
    }
}

/// Why a text block produced no item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No escaped-literal block, or it has no second line.
    MissingPayload,
    /// No token on the payload line looks like a price.
    MissingPrice,
    /// Recognition engine artifact rather than a real line item.
    ScannerNoise,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::MissingPayload => write!(f, "missing_payload"),
            SkipReason::MissingPrice => write!(f, "missing_price"),
            SkipReason::ScannerNoise => write!(f, "scanner_noise"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedBlock {
    /// Zero-based index among the content blocks of the result.
    pub position: usize,
    pub reason: SkipReason,
    pub payload: String,
}

/// Outcome of parsing one recognition result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub items: Vec<ExtractedItem>,
    pub skipped: Vec<SkippedBlock>,
}
