use poem_openapi::Object;

use business::domain::receipt::model::ExtractedItem;

/// A purchased item recognized on the receipt.
#[derive(Debug, Clone, Object)]
pub struct ExtractedItemResponse {
    /// Text of the receipt line with the price removed
    pub description: String,
    /// Price token as printed, e.g. `$10.99`
    pub price: String,
}

impl From<ExtractedItem> for ExtractedItemResponse {
    fn from(item: ExtractedItem) -> Self {
        Self {
            description: item.description,
            price: item.price,
        }
    }
}
