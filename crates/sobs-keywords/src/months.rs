//! Month-index normalization at the provider boundary.
//!
//! The keyword planner encodes months with `MonthOfYear`, which arrives
//! either as an enum name (`"JANUARY"`) in REST JSON or as the raw proto
//! enum number. The proto numbering is offset by two reserved values:
//!
//! | value | meaning     |
//! |-------|-------------|
//! | 0     | UNSPECIFIED |
//! | 1     | UNKNOWN     |
//! | 2     | JANUARY     |
//! | ...   | ...         |
//! | 13    | DECEMBER    |
//!
//! Everything past this module works with 1-based calendar months only.

use crate::types::MonthOfYear;

const MONTH_NAMES: [&str; 12] = [
    "JANUARY",
    "FEBRUARY",
    "MARCH",
    "APRIL",
    "MAY",
    "JUNE",
    "JULY",
    "AUGUST",
    "SEPTEMBER",
    "OCTOBER",
    "NOVEMBER",
    "DECEMBER",
];

/// Offset between the proto enum number and the calendar month.
const PROTO_MONTH_OFFSET: i64 = 1;

/// Convert a provider month into a 1-based calendar month.
///
/// Returns `None` for `UNSPECIFIED`, `UNKNOWN`, and anything out of range.
#[must_use]
pub fn normalize_month(month: &MonthOfYear) -> Option<u32> {
    match month {
        MonthOfYear::Name(name) => MONTH_NAMES
            .iter()
            .position(|m| m.eq_ignore_ascii_case(name.trim()))
            .and_then(|idx| u32::try_from(idx + 1).ok()),
        MonthOfYear::Value(value) => {
            let calendar = value - PROTO_MONTH_OFFSET;
            if (1..=12).contains(&calendar) {
                u32::try_from(calendar).ok()
            } else {
                None
            }
        }
    }
}

/// Enum name for a 1-based calendar month, as the API expects it in requests.
#[must_use]
pub fn api_month_name(month: u32) -> Option<&'static str> {
    let idx = usize::try_from(month.checked_sub(1)?).ok()?;
    MONTH_NAMES.get(idx).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_map_to_calendar_months() {
        assert_eq!(normalize_month(&MonthOfYear::Name("JANUARY".into())), Some(1));
        assert_eq!(normalize_month(&MonthOfYear::Name("june".into())), Some(6));
        assert_eq!(normalize_month(&MonthOfYear::Name("DECEMBER".into())), Some(12));
    }

    #[test]
    fn reserved_names_are_dropped() {
        assert_eq!(normalize_month(&MonthOfYear::Name("UNSPECIFIED".into())), None);
        assert_eq!(normalize_month(&MonthOfYear::Name("UNKNOWN".into())), None);
    }

    #[test]
    fn proto_values_are_shifted_by_one() {
        assert_eq!(normalize_month(&MonthOfYear::Value(2)), Some(1));
        assert_eq!(normalize_month(&MonthOfYear::Value(7)), Some(6));
        assert_eq!(normalize_month(&MonthOfYear::Value(13)), Some(12));
    }

    #[test]
    fn reserved_and_out_of_range_values_are_dropped() {
        for value in [-1, 0, 1, 14, 100] {
            assert_eq!(
                normalize_month(&MonthOfYear::Value(value)),
                None,
                "value {value} should not map to a month"
            );
        }
    }

    #[test]
    fn every_month_survives_name_and_value_forms() {
        for month in 1..=12u32 {
            let name = api_month_name(month).unwrap();
            assert_eq!(normalize_month(&MonthOfYear::Name(name.to_string())), Some(month));
            assert_eq!(
                normalize_month(&MonthOfYear::Value(i64::from(month) + 1)),
                Some(month)
            );
        }
    }

    #[test]
    fn api_month_name_bounds() {
        assert_eq!(api_month_name(0), None);
        assert_eq!(api_month_name(1), Some("JANUARY"));
        assert_eq!(api_month_name(12), Some("DECEMBER"));
        assert_eq!(api_month_name(13), None);
    }
}
