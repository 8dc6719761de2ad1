//! Dates stored as `YYYYMMDD` integers.
//!
//! The `orders` table keeps its date columns as plain integers. Rows loaded
//! from older dumps may still carry ISO text, so report queries normalize the
//! column in SQL before doing any date arithmetic.

use chrono::{Datelike, NaiveDate};

pub fn encode(date: NaiveDate) -> i32 {
    date.year() * 10_000 + date.month() as i32 * 100 + date.day() as i32
}

/// Decode a `YYYYMMDD` integer. Anything that is not a calendar date gives `None`.
pub fn decode(value: i64) -> Option<NaiveDate> {
    if !(0..=99_999_999).contains(&value) {
        return None;
    }
    let year = i32::try_from(value / 10_000).ok()?;
    let month = u32::try_from(value / 100 % 100).ok()?;
    let day = u32::try_from(value % 100).ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn encode_opt(date: Option<NaiveDate>) -> Option<i32> {
    date.map(encode)
}

/// Decode a date column read back as text: either the `YYYYMMDD` digits of
/// an integer value or ISO `YYYY-MM-DD`.
pub fn decode_text(value: Option<&str>) -> Option<NaiveDate> {
    let value = value?.trim();
    if value.len() == 8 && value.bytes().all(|b| b.is_ascii_digit()) {
        return value.parse::<i64>().ok().and_then(decode);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// SQL expression turning `column` into a SQLite `date()` value whether it
/// holds a `YYYYMMDD` integer (or its 8-digit text form) or ISO text.
pub fn sql_normalized_date(column: &str) -> String {
    format!(
        "(CASE WHEN typeof({c}) = 'integer' \
              OR (typeof({c}) = 'text' AND length({c}) = 8 AND {c} NOT GLOB '*[^0-9]*') \
         THEN date(printf('%04d-%02d-%02d', \
              CAST({c} AS INTEGER) / 10000, \
              (CAST({c} AS INTEGER) / 100) % 100, \
              CAST({c} AS INTEGER) % 100)) \
         ELSE date({c}) END)",
        c = column
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode(ymd(2024, 6, 8)), 20240608);
        assert_eq!(encode(ymd(2016, 12, 31)), 20161231);
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode(20240608), Some(ymd(2024, 6, 8)));
        assert_eq!(decode(20240230), None);
        assert_eq!(decode(20241301), None);
        assert_eq!(decode(-5), None);
    }

    #[test]
    fn test_decode_text() {
        assert_eq!(decode_text(Some("20180712")), Some(ymd(2018, 7, 12)));
        assert_eq!(decode_text(Some("2018-07-04")), Some(ymd(2018, 7, 4)));
        assert_eq!(decode_text(Some("20180231")), None);
        assert_eq!(decode_text(Some("2018-02-31")), None);
        assert_eq!(decode_text(Some("soon")), None);
        assert_eq!(decode_text(None), None);
    }

    #[test]
    fn test_sql_expression_mentions_column() {
        let sql = sql_normalized_date("o.order_date");
        assert!(sql.contains("typeof(o.order_date)"));
        assert!(sql.starts_with('(') && sql.ends_with(')'));
    }
}
