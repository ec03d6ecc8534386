use chrono::NaiveDate;

use crate::consts::DATE_FORMAT;
use crate::error::AppError;

/// Parse a YYYYMMDD or YYYY-MM-DD date
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    let trimmed = s.trim();
    if trimmed.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(trimmed, "%Y%m%d")
    {
        return Ok(d);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| AppError::InvalidDate {
        input: s.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_compact_and_dashed() {
        let expected = NaiveDate::from_ymd_opt(2026, 2, 6).unwrap();
        assert_eq!(parse_date("20260206").unwrap(), expected);
        assert_eq!(parse_date("2026-02-06").unwrap(), expected);
        assert_eq!(parse_date(" 2026-02-06 ").unwrap(), expected);
    }

    #[test]
    fn parse_invalid() {
        let err = parse_date("2026-13-01").unwrap_err();
        assert!(matches!(err, AppError::InvalidDate { .. }));
        assert!(parse_date("yesterday").is_err());
    }
}
