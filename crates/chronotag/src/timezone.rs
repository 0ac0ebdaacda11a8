//! Timezone alias resolution.
//!
//! Maps user-facing shorthands to canonical IANA zone identifiers. The
//! resolver itself never fails: unrecognized strings pass through trimmed
//! and otherwise unchanged, on the assumption they are already IANA names.
//! Whether the identifier is actually a real zone is only established when
//! the epoch resolver looks it up in the zone database.
//!
//! Note the POSIX sign inversion for fixed-offset aliases: `GMT+3` in
//! common usage means UTC+3, which the tz database spells `Etc/GMT-3`.

/// Zone used when the caller supplies no timezone at all.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Fixed alias table, keyed by the uppercased input.
fn canonical_alias(upper: &str) -> Option<&'static str> {
    let zone = match upper {
        "UTC" => "UTC",
        "GMT" | "GMT+0" => "GMT",
        "GMT+1" => "Etc/GMT-1",
        "GMT+2" => "Etc/GMT-2",
        "GMT+3" => "Etc/GMT-3",
        "GMT+4" => "Etc/GMT-4",
        "GMT+5" => "Etc/GMT-5",
        "GMT+6" => "Etc/GMT-6",
        "GMT+7" => "Etc/GMT-7",
        "GMT+8" => "Etc/GMT-8",
        "GMT+9" => "Etc/GMT-9",
        "GMT+10" => "Etc/GMT-10",
        "GMT+11" => "Etc/GMT-11",
        "GMT+12" => "Etc/GMT-12",
        "GMT-1" => "Etc/GMT+1",
        "GMT-2" => "Etc/GMT+2",
        "GMT-3" => "Etc/GMT+3",
        "GMT-4" => "Etc/GMT+4",
        "GMT-5" => "Etc/GMT+5",
        "GMT-6" => "Etc/GMT+6",
        "GMT-7" => "Etc/GMT+7",
        "GMT-8" => "Etc/GMT+8",
        "GMT-9" => "Etc/GMT+9",
        "GMT-10" => "Etc/GMT+10",
        "GMT-11" => "Etc/GMT+11",
        "GMT-12" => "Etc/GMT+12",
        "EST" => "US/Eastern",
        "PST" => "US/Pacific",
        "CST" => "US/Central",
        "MST" => "US/Mountain",
        "CET" => "Europe/Berlin",
        "EET" => "Europe/Athens",
        "JST" => "Asia/Tokyo",
        "IST" => "Asia/Kolkata",
        "TRT" => "Europe/Istanbul",
        _ => return None,
    };
    Some(zone)
}

/// Resolve an optional user-facing timezone string to a zone identifier.
///
/// Absent or blank input resolves to [`DEFAULT_TIMEZONE`]. Otherwise the
/// input is trimmed and looked up case-insensitively in the alias table;
/// on a miss the trimmed original is returned unchanged (it may or may not
/// name a real zone — that check happens at epoch resolution).
///
/// # Examples
///
/// ```
/// use chronotag::resolve_timezone;
///
/// assert_eq!(resolve_timezone(Some("gmt+3")), "Etc/GMT-3");
/// assert_eq!(resolve_timezone(Some("Europe/Istanbul")), "Europe/Istanbul");
/// assert_eq!(resolve_timezone(None), "UTC");
/// ```
pub fn resolve_timezone(text: Option<&str>) -> String {
    let Some(raw) = text else {
        return DEFAULT_TIMEZONE.to_string();
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DEFAULT_TIMEZONE.to_string();
    }

    // Uppercase for lookup purposes only; passthrough keeps original casing.
    match canonical_alias(&trimmed.to_uppercase()) {
        Some(zone) => zone.to_string(),
        None => trimmed.to_string(),
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_is_default() {
        assert_eq!(resolve_timezone(None), "UTC");
    }

    #[test]
    fn test_blank_is_default() {
        assert_eq!(resolve_timezone(Some("")), "UTC");
        assert_eq!(resolve_timezone(Some("   ")), "UTC");
    }

    #[test]
    fn test_utc_and_gmt() {
        assert_eq!(resolve_timezone(Some("UTC")), "UTC");
        assert_eq!(resolve_timezone(Some("GMT")), "GMT");
        assert_eq!(resolve_timezone(Some("GMT+0")), "GMT");
    }

    #[test]
    fn test_posix_sign_inversion() {
        // Common-usage GMT+3 is the tz database's Etc/GMT-3 and vice versa.
        assert_eq!(resolve_timezone(Some("GMT+3")), "Etc/GMT-3");
        assert_eq!(resolve_timezone(Some("GMT-5")), "Etc/GMT+5");
        assert_eq!(resolve_timezone(Some("GMT+12")), "Etc/GMT-12");
        assert_eq!(resolve_timezone(Some("GMT-12")), "Etc/GMT+12");
    }

    #[test]
    fn test_common_abbreviations() {
        assert_eq!(resolve_timezone(Some("EST")), "US/Eastern");
        assert_eq!(resolve_timezone(Some("PST")), "US/Pacific");
        assert_eq!(resolve_timezone(Some("CST")), "US/Central");
        assert_eq!(resolve_timezone(Some("MST")), "US/Mountain");
        assert_eq!(resolve_timezone(Some("CET")), "Europe/Berlin");
        assert_eq!(resolve_timezone(Some("EET")), "Europe/Athens");
        assert_eq!(resolve_timezone(Some("JST")), "Asia/Tokyo");
        assert_eq!(resolve_timezone(Some("IST")), "Asia/Kolkata");
        assert_eq!(resolve_timezone(Some("TRT")), "Europe/Istanbul");
    }

    #[test]
    fn test_alias_lookup_case_insensitive() {
        assert_eq!(
            resolve_timezone(Some("gmt+3")),
            resolve_timezone(Some("GMT+3"))
        );
        assert_eq!(resolve_timezone(Some("est")), "US/Eastern");
        assert_eq!(resolve_timezone(Some("trt")), "Europe/Istanbul");
    }

    #[test]
    fn test_iana_passthrough_preserves_casing() {
        assert_eq!(
            resolve_timezone(Some("Europe/Istanbul")),
            "Europe/Istanbul"
        );
        assert_eq!(
            resolve_timezone(Some("America/New_York")),
            "America/New_York"
        );
    }

    #[test]
    fn test_unknown_strings_pass_through_trimmed() {
        // Validity is the epoch resolver's problem, not ours.
        assert_eq!(resolve_timezone(Some("  Not/A_Zone ")), "Not/A_Zone");
        assert_eq!(resolve_timezone(Some("GMT+13")), "GMT+13");
    }
}
