use serde::{Deserialize, Serialize};

use crate::YearMonth;

/// One monthly search-volume figure reported by the provider for a keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    /// Keyword text as returned by the provider.
    pub keyword: String,
    pub year: i32,
    /// Calendar month, 1-based.
    pub month: u32,
    pub monthly_searches: u64,
}

impl Sample {
    #[must_use]
    pub fn new(keyword: impl Into<String>, year: i32, month: u32, monthly_searches: u64) -> Self {
        Self {
            keyword: keyword.into(),
            year,
            month,
            monthly_searches,
        }
    }

    /// The sample's month, or `None` if the month is not a valid calendar month.
    #[must_use]
    pub fn year_month(&self) -> Option<YearMonth> {
        YearMonth::new(self.year, self.month).ok()
    }
}

/// A reporting bucket.
///
/// `index` is the month (1-12) for monthly periods, the quarter (1-4) for
/// quarterly periods and `None` for yearly periods. `label` is `YYYY-MM`,
/// `YYYY-Qn` or `YYYY` respectively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub index: Option<u32>,
    pub label: String,
}

impl Period {
    #[must_use]
    pub fn month(year: i32, month: u32) -> Self {
        Self {
            year,
            index: Some(month),
            label: format!("{year:04}-{month:02}"),
        }
    }

    #[must_use]
    pub fn quarter(year: i32, quarter: u32) -> Self {
        Self {
            year,
            index: Some(quarter),
            label: format!("{year:04}-Q{quarter}"),
        }
    }

    #[must_use]
    pub fn year(year: i32) -> Self {
        Self {
            year,
            index: None,
            label: format!("{year:04}"),
        }
    }
}

/// One `(brand, period)` line of a finished report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub brand: String,
    pub period: String,
    pub volume: u64,
    /// Percentage of the period's total volume, rounded to one decimal place.
    pub share: f64,
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_labels() {
        assert_eq!(Period::month(2024, 3).label, "2024-03");
        assert_eq!(Period::quarter(2024, 2).label, "2024-Q2");
        assert_eq!(Period::year(2024).label, "2024");
        assert_eq!(Period::year(2024).index, None);
    }

    #[test]
    fn sample_with_invalid_month_has_no_year_month() {
        assert!(Sample::new("acme", 2024, 0, 10).year_month().is_none());
        assert!(Sample::new("acme", 2024, 13, 10).year_month().is_none());
        assert_eq!(
            Sample::new("acme", 2024, 12, 10).year_month(),
            Some(YearMonth::new(2024, 12).unwrap())
        );
    }

    #[test]
    fn result_row_serializes_export_columns() {
        let row = ResultRow {
            brand: "Acme".to_string(),
            period: "2024-01".to_string(),
            volume: 100,
            share: 25.0,
            color: "#1f77b4".to_string(),
        };
        let value = serde_json::to_value(&row).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys.len(), 5);
        for key in ["brand", "period", "volume", "share", "color"] {
            assert!(keys.contains(&key), "missing column {key}");
        }
    }
}
