//! Display formatting helpers
//!
//! Pure functions turning raw record fields into the text shown on the
//! dashboard. Locale follows the product (Italian): comma decimal separator,
//! dot thousands grouping.

use shared::models::Segment;

/// Placeholder shown for absent or unusable amounts.
pub const PRICE_PLACEHOLDER: &str = "—";

/// Format a euro amount
///
/// # Examples
///
/// ```
/// use forcreators_client::format::format_price;
///
/// assert_eq!(format_price(Some(9.9)), "9,90 €");
/// assert_eq!(format_price(Some(0.0)), "0 €");
/// assert_eq!(format_price(None), "—");
/// ```
pub fn format_price(value: Option<f64>) -> String {
    match value {
        None => PRICE_PLACEHOLDER.to_string(),
        Some(v) if v.is_nan() => PRICE_PLACEHOLDER.to_string(),
        Some(v) if v == 0.0 => "0 €".to_string(),
        Some(v) => format!("{:.2} €", v).replace('.', ","),
    }
}

/// Format an integer count with thousands grouping
///
/// # Examples
///
/// ```
/// use forcreators_client::format::format_count;
///
/// assert_eq!(format_count(12500), "12.500");
/// assert_eq!(format_count(999), "999");
/// ```
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

/// Descriptive label for a segment tag, with a generic fallback for
/// unrecognized or absent values. Total over every input.
pub fn segment_label(segment: Option<Segment>) -> &'static str {
    match segment {
        Some(Segment::Casual) => "Casual · profilo \"sport\"",
        Some(Segment::Emerging) => "Emergente · primi passi nel mondo brand",
        Some(Segment::Pro) => "Creator Pro · collaborazioni strutturate",
        Some(Segment::Agency) => "Top / Agenzia · gestione profili importanti",
        Some(Segment::Unknown) | None => "Profilo",
    }
}
