//! Per-identifier lookup: exact search, fuzzy fallback, price reduction,
//! and the batch loop that guarantees one result row per input.

use crate::client::SearchClient;
use crate::error::AppError;
use crate::models::PartRecord;
use crate::pricing;

/// Sole lifecycle status treated as discontinued. Exact string match on
/// purpose: broader matching ("Obsolete", "End of Life", ...) would change
/// what the report means, so other statuses count as not discontinued.
const DISCONTINUED_STATUS: &str = "Not Recommended for New Designs";

/// How the row's record was found, which decides the remark wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Fuzzy,
}

/// Normalized output row, one per input identifier, immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    /// Identifier as supplied by the caller
    pub part_number: String,
    /// Identifier the search actually matched (differs on fuzzy matches)
    pub matched_part: String,
    pub product: String,
    pub brand: String,
    pub price: f64,
    pub max_quantity: u64,
    pub availability: String,
    pub discontinued: bool,
    pub replacement: String,
    pub remark: String,
}

impl ResultRow {
    /// Row for an identifier neither search mode could match.
    pub fn not_found(part_number: &str) -> Self {
        Self {
            part_number: part_number.to_string(),
            matched_part: String::new(),
            product: String::new(),
            brand: String::new(),
            price: 0.0,
            max_quantity: 0,
            availability: String::new(),
            discontinued: false,
            replacement: String::new(),
            remark: "not found".to_string(),
        }
    }

    /// Row for an identifier whose resolution failed outright.
    pub fn failed(part_number: &str, error: &AppError) -> Self {
        Self {
            remark: format!("error: {error}"),
            ..Self::not_found(part_number)
        }
    }
}

pub fn is_discontinued(record: &PartRecord) -> bool {
    record.lifecycle_status == DISCONTINUED_STATUS
}

fn remark(price: f64, discontinued: bool, kind: MatchKind) -> String {
    if discontinued && price == 0.0 {
        "discontinued, no price".to_string()
    } else if discontinued {
        "discontinued".to_string()
    } else if price == 0.0 {
        "no price information".to_string()
    } else {
        match kind {
            MatchKind::Exact => String::new(),
            MatchKind::Fuzzy => "matched via similar part".to_string(),
        }
    }
}

/// Build the normalized row for a matched record.
pub fn row_from_record(part_number: &str, record: &PartRecord, kind: MatchKind) -> ResultRow {
    let (price, max_quantity) = pricing::reduce(record);
    let discontinued = is_discontinued(record);

    let matched_part = match kind {
        MatchKind::Exact => part_number.to_string(),
        MatchKind::Fuzzy => record.manufacturer_part_number.clone(),
    };

    ResultRow {
        part_number: part_number.to_string(),
        matched_part,
        product: record.manufacturer_part_number.clone(),
        brand: record.manufacturer.clone(),
        price,
        max_quantity,
        availability: record.availability.clone(),
        discontinued,
        replacement: record.suggested_replacement.clone(),
        remark: remark(price, discontinued, kind),
    }
}

/// Resolve a single identifier: exact match first, fuzzy fallback on a
/// miss. Only retry exhaustion escapes as an error.
pub async fn resolve_one(
    client: &mut SearchClient,
    part_number: &str,
) -> Result<ResultRow, AppError> {
    if let Some(record) = client.search_exact(part_number).await? {
        return Ok(row_from_record(part_number, &record, MatchKind::Exact));
    }

    if let Some(record) = client.search_fuzzy(part_number).await? {
        return Ok(row_from_record(part_number, &record, MatchKind::Fuzzy));
    }

    Ok(ResultRow::not_found(part_number))
}

/// Resolve a batch sequentially, in input order. Exactly one row per
/// identifier: a failed resolution becomes a row explaining the failure,
/// never an aborted batch.
pub async fn resolve_batch<F>(
    client: &mut SearchClient,
    part_numbers: &[String],
    mut on_progress: F,
) -> Vec<ResultRow>
where
    F: FnMut(usize, &str),
{
    let mut rows = Vec::with_capacity(part_numbers.len());

    for (index, part_number) in part_numbers.iter().enumerate() {
        on_progress(index, part_number);
        tracing::info!(
            part_number = %part_number,
            position = index + 1,
            total = part_numbers.len(),
            "resolving part"
        );

        let row = match resolve_one(client, part_number).await {
            Ok(row) => row,
            Err(err) => {
                tracing::warn!(part_number = %part_number, error = %err, "resolution failed");
                ResultRow::failed(part_number, &err)
            }
        };
        rows.push(row);
    }

    rows
}
