//! Request body and query string parsing with the API's error messages.

use axum::body::Bytes;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::str::FromStr;

use crate::shared::error::{ApiError, ApiResult};

pub const INVALID_JSON: &str = "Invalid JSON payload";
pub const INVALID_DATE: &str = "Invalid date format. Use YYYY-MM-DD.";

/// Parse a body that must be a JSON object.
pub fn parse_json_object(body: &Bytes) -> ApiResult<Map<String, Value>> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(ApiError::bad_request(INVALID_JSON)),
    }
}

/// First of `fields` that is absent or `null` in `payload`.
pub fn require_fields(payload: &Map<String, Value>, fields: &[&str]) -> ApiResult<()> {
    for field in fields {
        match payload.get(*field) {
            None | Some(Value::Null) => {
                return Err(ApiError::bad_request(format!(
                    "Missing required field: {}",
                    field
                )))
            }
            Some(_) => {}
        }
    }
    Ok(())
}

/// Parse a create payload: JSON object, required fields present, then typed.
pub fn parse_create<T: DeserializeOwned>(body: &Bytes, required: &[&str]) -> ApiResult<T> {
    let payload = parse_json_object(body)?;
    require_fields(&payload, required)?;
    into_typed(payload)
}

/// Parse a partial update; every field is optional.
pub fn parse_patch<T: DeserializeOwned>(body: &Bytes) -> ApiResult<T> {
    let payload = parse_json_object(body)?;
    into_typed(payload)
}

fn into_typed<T: DeserializeOwned>(payload: Map<String, Value>) -> ApiResult<T> {
    serde_json::from_value(Value::Object(payload))
        .map_err(|e| ApiError::bad_request(format!("Invalid payload: {}", e)))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn query_int(value: Option<&str>, field: &str) -> ApiResult<Option<i32>> {
    non_empty(value)
        .map(|v| {
            v.parse::<i32>()
                .map_err(|_| ApiError::bad_request(format!("{} must be a valid integer.", field)))
        })
        .transpose()
}

pub fn query_decimal(value: Option<&str>, field: &str) -> ApiResult<Option<Decimal>> {
    non_empty(value)
        .map(|v| {
            Decimal::from_str(v)
                .map_err(|_| ApiError::bad_request(format!("{} must be a valid number.", field)))
        })
        .transpose()
}

pub fn query_bool(value: Option<&str>, field: &str) -> ApiResult<Option<bool>> {
    non_empty(value)
        .map(|v| match v.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(ApiError::bad_request(format!(
                "{} must be true or false.",
                field
            ))),
        })
        .transpose()
}

/// ISO date with a four-digit year (1 through 9999).
pub fn query_date(value: Option<&str>) -> ApiResult<Option<NaiveDate>> {
    non_empty(value)
        .map(|v| {
            NaiveDate::parse_from_str(v, "%Y-%m-%d")
                .ok()
                .filter(|d| (1..=9999).contains(&d.year()))
                .ok_or_else(|| ApiError::bad_request(INVALID_DATE))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Sample {
        id: i32,
        name: String,
    }

    fn body(s: &str) -> Bytes {
        Bytes::from(s.to_string())
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = parse_create::<Sample>(&body("{not json"), &["id"]).unwrap_err();
        assert_eq!(err.to_string(), INVALID_JSON);
        let err = parse_patch::<Sample>(&body("[1, 2]")).unwrap_err();
        assert_eq!(err.to_string(), INVALID_JSON);
    }

    #[test]
    fn test_missing_and_null_fields() {
        let err = parse_create::<Sample>(&body(r#"{"id": 1}"#), &["id", "name"]).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: name");
        let err =
            parse_create::<Sample>(&body(r#"{"id": null, "name": "x"}"#), &["id", "name"]).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: id");
    }

    #[test]
    fn test_typed_create() {
        let s: Sample = parse_create(&body(r#"{"id": 7, "name": "Trek"}"#), &["id", "name"]).unwrap();
        assert_eq!(s.id, 7);
        assert_eq!(s.name, "Trek");
        let err = parse_create::<Sample>(&body(r#"{"id": "x", "name": "a"}"#), &["id"]).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_query_int() {
        assert_eq!(query_int(None, "brand_id").unwrap(), None);
        assert_eq!(query_int(Some(""), "brand_id").unwrap(), None);
        assert_eq!(query_int(Some("9"), "brand_id").unwrap(), Some(9));
        assert_eq!(
            query_int(Some("nine"), "brand_id").unwrap_err().to_string(),
            "brand_id must be a valid integer."
        );
    }

    #[test]
    fn test_query_decimal_and_bool() {
        assert_eq!(
            query_decimal(Some("199.99"), "min_price").unwrap(),
            Some(Decimal::from_str("199.99").unwrap())
        );
        assert_eq!(
            query_decimal(Some("cheap"), "min_price").unwrap_err().to_string(),
            "min_price must be a valid number."
        );
        assert_eq!(query_bool(Some("TRUE"), "active").unwrap(), Some(true));
        assert_eq!(query_bool(Some("0"), "active").unwrap(), Some(false));
        assert!(query_bool(Some("maybe"), "active").is_err());
    }

    #[test]
    fn test_query_date() {
        assert_eq!(
            query_date(Some("2017-03-01")).unwrap(),
            NaiveDate::from_ymd_opt(2017, 3, 1)
        );
        assert_eq!(query_date(Some("01/03/2017")).unwrap_err().to_string(), INVALID_DATE);
        assert_eq!(query_date(None).unwrap(), None);
    }

    #[test]
    fn test_query_date_rejects_out_of_range_years() {
        for raw in ["-262143-01-01", "0000-12-31", "12017-01-01"] {
            assert_eq!(query_date(Some(raw)).unwrap_err().to_string(), INVALID_DATE, "{}", raw);
        }
        assert!(query_date(Some("0001-01-01")).unwrap().is_some());
        assert!(query_date(Some("9999-12-31")).unwrap().is_some());
    }
}
