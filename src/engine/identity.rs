// ==========================================
// QR Roster - identity builder
// ==========================================
// Composes usernames and the QR wire payload from validated fields, and
// validates CanonicalRow into IdentityInput.
// Wire contract: the payload JSON is byte-identical for identical inputs,
// key order version/username/groupcode, both values strings. Downstream
// scanners parse it verbatim.
// ==========================================

use serde::Serialize;

use crate::config::IngestDefaults;
use crate::domain::identity::{CanonicalRow, ExportItem, IdentityInput, MasterUsernameEntry};
use crate::engine::text::{only_digits, pad_left};
use crate::error::{ExportError, ExportResult};

/// Payload schema version literal.
pub const PAYLOAD_VERSION: &str = "1.0";

/// Zero-pad width applied when a row and the form both omit pad.
pub const DEFAULT_HEADSET_PAD: usize = 2;

// Field order fixes the JSON key order; serde_json emits compact output.
#[derive(Serialize)]
struct Payload<'a> {
    version: &'a str,
    username: &'a str,
    groupcode: &'a str,
}

/// Compose a username from prefix + headset number.
///
/// Trims the prefix, keeps only the digits of the raw headset value
/// ("h48" -> "48"), left-pads them with '0' to `headset_pad`. Performs no
/// validation; callers must have checked ranges beforehand.
pub fn build_username(prefix: &str, headset_number_raw: &str, headset_pad: usize) -> String {
    let digits = only_digits(headset_number_raw);
    format!("{}.{}", prefix.trim(), pad_left(&digits, headset_pad, '0'))
}

/// Compose the QR payload JSON string.
///
/// groupcode stays a string so leading zeros survive ("0004" never
/// becomes "4").
pub fn build_payload(username: &str, group_code: &str) -> String {
    let payload = Payload {
        version: PAYLOAD_VERSION,
        username,
        groupcode: group_code,
    };
    // Serialization of a string-only struct cannot fail.
    serde_json::to_string(&payload).unwrap_or_default()
}

/// Lenient integer conversion: parse as f64, truncate toward zero.
///
/// Returns None when the input does not parse or is not finite; callers
/// reject None during validation.
pub fn to_int(s: &str) -> Option<i64> {
    let n: f64 = s.trim().parse().ok()?;
    if !n.is_finite() {
        return None;
    }
    Some(n.trunc() as i64)
}

/// Validate a canonical row into a render-ready identity.
///
/// # Rules
/// - group code: required non-empty
/// - period: integer >= 1
/// - headset number: must contain digits forming an integer >= 1
/// - prefix: required non-empty after trim (row value or form default)
/// - pad: integer >= 0; row value, then form default, then
///   DEFAULT_HEADSET_PAD
pub fn validate(row: &CanonicalRow, defaults: &IngestDefaults) -> ExportResult<IdentityInput> {
    let group_code = row
        .group
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ExportError::validation("group code", "missing"))?
        .to_string();

    let period_raw = row.period.as_deref().unwrap_or("");
    let period = match to_int(period_raw) {
        Some(p) if p >= 1 => p as u32,
        _ => {
            return Err(ExportError::validation(
                "period",
                format!("must be an integer >= 1, got '{}'", period_raw.trim()),
            ))
        }
    };

    let headset_raw = row.headset.as_deref().unwrap_or("");
    let headset_digits = only_digits(headset_raw);
    let headset_number = match headset_digits.parse::<u32>() {
        Ok(n) if n >= 1 => n,
        _ => {
            return Err(ExportError::validation(
                "headset number",
                format!("must contain an integer >= 1, got '{}'", headset_raw.trim()),
            ))
        }
    };

    let prefix = row
        .prefix
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or(defaults.prefix.as_deref().map(str::trim))
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ExportError::validation("prefix", "missing"))?
        .to_string();

    let pad_raw = row
        .pad
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or(defaults.pad.as_deref());
    let headset_pad = match pad_raw {
        None => DEFAULT_HEADSET_PAD,
        Some(raw) => match to_int(raw) {
            Some(p) if p >= 0 => p as usize,
            _ => {
                return Err(ExportError::validation(
                    "pad",
                    format!("must be an integer >= 0, got '{}'", raw.trim()),
                ))
            }
        },
    };

    let username = build_username(&prefix, headset_raw, headset_pad);
    let payload = build_payload(&username, &group_code);

    Ok(IdentityInput {
        group_code,
        period,
        headset_number,
        prefix,
        headset_pad,
        username,
        payload,
    })
}

/// ExportItem from a validated identity (row-per-user paths).
pub fn item_from_identity(input: &IdentityInput) -> ExportItem {
    ExportItem {
        payload: input.payload.clone(),
        group_code: input.group_code.clone(),
        username: input.username.clone(),
        teacher: None,
        period: Some(input.period.to_string()),
    }
}

/// ExportItem from a master-matrix entry.
///
/// Master usernames are taken verbatim; no prefix/pad composition.
pub fn item_from_master(entry: &MasterUsernameEntry) -> ExportItem {
    ExportItem {
        payload: build_payload(&entry.username, &entry.group_code),
        group_code: entry.group_code.clone(),
        username: entry.username.clone(),
        teacher: Some(entry.teacher.clone()).filter(|s| !s.is_empty()),
        period: Some(entry.period.clone()).filter(|s| !s.is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(group: &str, period: &str, headset: &str, prefix: &str, pad: &str) -> CanonicalRow {
        let opt = |s: &str| {
            if s.is_empty() {
                None
            } else {
                Some(s.to_string())
            }
        };
        CanonicalRow {
            group: opt(group),
            period: opt(period),
            headset: opt(headset),
            prefix: opt(prefix),
            pad: opt(pad),
            row_number: 1,
        }
    }

    #[test]
    fn test_build_username_pads_and_strips() {
        assert_eq!(build_username("a", "48", 3), "a.048");
        assert_eq!(build_username(" a ", "h48", 3), "a.048");
        assert_eq!(build_username("a", "10000", 3), "a.10000");
    }

    #[test]
    fn test_build_payload_key_order_and_leading_zeros() {
        let json = build_payload("a.048", "0004");
        assert_eq!(
            json,
            r#"{"version":"1.0","username":"a.048","groupcode":"0004"}"#
        );
    }

    #[test]
    fn test_to_int_truncates_toward_zero() {
        assert_eq!(to_int("3"), Some(3));
        assert_eq!(to_int("3.9"), Some(3));
        assert_eq!(to_int("-3.9"), Some(-3));
        assert_eq!(to_int("abc"), None);
        assert_eq!(to_int("inf"), None);
    }

    #[test]
    fn test_validate_happy_path() {
        let input = validate(
            &row("0004", "2", "h48", "a", "3"),
            &IngestDefaults::default(),
        )
        .unwrap();
        assert_eq!(input.username, "a.048");
        assert_eq!(input.headset_number, 48);
        assert!(input.payload.contains(r#""groupcode":"0004""#));
    }

    #[test]
    fn test_validate_rejects_bad_period() {
        let err = validate(&row("g", "0", "1", "a", ""), &IngestDefaults::default())
            .unwrap_err();
        assert!(err.to_string().contains("period"));
    }

    #[test]
    fn test_validate_uses_form_defaults() {
        let defaults = IngestDefaults {
            prefix: Some("cls".into()),
            pad: Some("4".into()),
        };
        let input = validate(&row("g1", "1", "7", "", ""), &defaults).unwrap();
        assert_eq!(input.username, "cls.0007");
        assert_eq!(input.headset_pad, 4);
    }

    #[test]
    fn test_validate_default_pad_when_absent_everywhere() {
        let input = validate(&row("g1", "1", "7", "a", ""), &IngestDefaults::default()).unwrap();
        assert_eq!(input.headset_pad, DEFAULT_HEADSET_PAD);
        assert_eq!(input.username, "a.07");
    }

    #[test]
    fn test_item_from_master_keeps_username_verbatim() {
        let entry = MasterUsernameEntry {
            group_code: "0001".into(),
            username: "alice".into(),
            teacher: String::new(),
            period: "3".into(),
        };
        let item = item_from_master(&entry);
        assert_eq!(item.username, "alice");
        assert_eq!(item.teacher, None);
        assert_eq!(item.period.as_deref(), Some("3"));
        assert_eq!(
            item.payload,
            r#"{"version":"1.0","username":"alice","groupcode":"0001"}"#
        );
    }
}
