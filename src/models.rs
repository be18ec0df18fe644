//! Wire types for the distributor part-number search API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Search mode flag carried in the request body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Exact part-number match
    Exact,
    /// Relaxed match returning the closest similar part
    Partial,
}

impl SearchMode {
    pub fn as_option_str(self) -> &'static str {
        match self {
            Self::Exact => "None",
            Self::Partial => "PartialMatch",
        }
    }
}

/// Request envelope: `{"SearchByPartRequest": {...}}`
#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    #[serde(rename = "SearchByPartRequest")]
    pub search_by_part_request: SearchByPartRequest<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchByPartRequest<'a> {
    pub mouser_part_number: &'a str,
    pub part_search_options: &'static str,
}

impl<'a> SearchRequest<'a> {
    pub fn new(part_number: &'a str, mode: SearchMode) -> Self {
        Self {
            search_by_part_request: SearchByPartRequest {
                mouser_part_number: part_number,
                part_search_options: mode.as_option_str(),
            },
        }
    }
}

/// Response envelope: `{"SearchResults": {"NumberOfResult": n, "Parts": [...]}}`
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "SearchResults")]
    pub search_results: Option<SearchResults>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchResults {
    #[serde(default)]
    pub number_of_result: i64,
    #[serde(default)]
    pub parts: Vec<PartRecord>,
}

impl SearchResponse {
    /// First matched part, if the server reported any result at all
    pub fn into_first_part(self) -> Option<PartRecord> {
        let results = self.search_results?;
        if results.number_of_result > 0 {
            results.parts.into_iter().next()
        } else {
            None
        }
    }
}

/// The fields of a matched part this tool consumes. Everything the
/// upstream may omit defaults to empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartRecord {
    #[serde(default)]
    pub manufacturer_part_number: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub lifecycle_status: String,
    #[serde(default)]
    pub suggested_replacement: String,
    #[serde(default)]
    pub price_breaks: Vec<PriceBreak>,
    /// Top-level unit price, used only when the break list is empty
    #[serde(default)]
    pub price: Option<String>,
    /// Minimum order quantity paired with the top-level price
    #[serde(default)]
    pub min: Option<String>,
}

/// One (quantity, price) step of the volume pricing ladder.
///
/// Quantity stays untyped: a single malformed break must be skippable
/// without failing the deserialization of the whole response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PriceBreak {
    #[serde(default)]
    pub quantity: Value,
    #[serde(default)]
    pub price: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_envelope_shape() {
        let req = SearchRequest::new("LM358DR", SearchMode::Exact);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "SearchByPartRequest": {
                    "mouserPartNumber": "LM358DR",
                    "partSearchOptions": "None"
                }
            })
        );

        let req = SearchRequest::new("LM358DR", SearchMode::Partial);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json["SearchByPartRequest"]["partSearchOptions"],
            "PartialMatch"
        );
    }

    #[test]
    fn test_response_first_part() {
        let body = serde_json::json!({
            "SearchResults": {
                "NumberOfResult": 2,
                "Parts": [
                    {"ManufacturerPartNumber": "LM358DR", "Manufacturer": "TI"},
                    {"ManufacturerPartNumber": "LM358DR2", "Manufacturer": "TI"}
                ]
            }
        });
        let resp: SearchResponse = serde_json::from_value(body).unwrap();
        let part = resp.into_first_part().unwrap();
        assert_eq!(part.manufacturer_part_number, "LM358DR");
        assert_eq!(part.manufacturer, "TI");
    }

    #[test]
    fn test_response_zero_results() {
        let body = serde_json::json!({
            "SearchResults": { "NumberOfResult": 0, "Parts": [] }
        });
        let resp: SearchResponse = serde_json::from_value(body).unwrap();
        assert!(resp.into_first_part().is_none());
    }

    #[test]
    fn test_response_missing_envelope() {
        let resp: SearchResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(resp.into_first_part().is_none());
    }

    #[test]
    fn test_malformed_break_does_not_fail_parse() {
        let body = serde_json::json!({
            "SearchResults": {
                "NumberOfResult": 1,
                "Parts": [{
                    "ManufacturerPartNumber": "X",
                    "PriceBreaks": [
                        {"Quantity": 10, "Price": "$1.00"},
                        {"Quantity": "bad", "Price": "$0.80"}
                    ]
                }]
            }
        });
        let resp: SearchResponse = serde_json::from_value(body).unwrap();
        let part = resp.into_first_part().unwrap();
        assert_eq!(part.price_breaks.len(), 2);
    }
}
