//! Format validators backed by regular expressions.
//!
//! These check *shape* only. `validate_ipv4("999.1.1.1")` is `true`, and
//! `validate_date` accepts any string that merely contains a date-looking
//! run of characters.

use regex::{Regex, RegexSet};
use std::sync::LazyLock;

/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(ftp|http|https)://[^ "]+$"#).unwrap());

/// Sixteen digits in groups of four, hyphens optional.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static CREDIT_CARD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-?[0-9]{4}-?[0-9]{4}-?[0-9]{4}$").unwrap());

/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static IPV4_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[0-9]{1,3}\.){3}[0-9]{1,3}$").unwrap());

/// Full eight-group form only; `::` shorthand is rejected.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static IPV6_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}$").unwrap());

/// Unanchored date layouts; a match anywhere in the input counts. Month
/// names are ASCII word runs.
///
/// SAFETY: Patterns are compile-time constants that are known to be valid.
#[allow(clippy::unwrap_used)]
static DATE_LAYOUTS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"[0-9]{4}-[0-9]{2}-[0-9]{2}",              // YYYY-MM-DD
        r"[0-9]{2}/[0-9]{2}/[0-9]{4}",              // DD/MM/YYYY
        r"[0-9]{2}\.[0-9]{2}\.[0-9]{4}",            // DD.MM.YYYY
        r"[0-9]{2}/[0-9]{2}/[0-9]{2}",              // MM/DD/YY
        r"[0-9]{2}-[0-9]{2}-[0-9]{4}",              // DD-MM-YYYY
        r"[0-9]{4}/[0-9]{2}/[0-9]{2}",              // YYYY/MM/DD
        r"[0-9]{4}\.[0-9]{2}\.[0-9]{2}",            // YYYY.MM.DD
        r"[0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4}",        // D/M/YY .. DD/MM/YYYY
        r"(?i)[0-9]{1,2}th (?-u:\w)+, [0-9]{4}",    // 25th May, 2024
        r"(?i)(?-u:\w)+ [0-9]{1,2}, [0-9]{4}",      // May 25, 2024
        r"(?i)(?-u:\w)+ [0-9]{1,2}th, [0-9]{4}",    // May 25th, 2024
        r"(?i)[0-9]{1,2} (?-u:\w)+ [0-9]{4}",       // 25 May 2024
        r"(?i)[0-9]{4} (?-u:\w)+ [0-9]{1,2}",       // 2024 May 25
        r"[0-9]{1,2}-[0-9]{1,2}-[0-9]{2}",          // 25-05-24
        r"(?i)[0-9]{4} [0-9]{2} (?-u:\w)+",         // 2024 25 May
        r"(?i)[0-9]{4} [0-9]{1,2}th (?-u:\w)+",     // 2024 25th May
    ])
    .unwrap()
});

/// `local@domain.tld` with no whitespace and exactly one `@` per side.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// `ftp://`, `http://` or `https://` followed by at least one character
/// that is neither a space nor a double quote.
pub fn validate_url(url: &str) -> bool {
    URL_RE.is_match(url)
}

/// Sixteen digits, optionally hyphenated in groups of four. No checksum.
pub fn validate_credit_card(card_number: &str) -> bool {
    CREDIT_CARD_RE.is_match(card_number)
}

/// Four dot-separated groups of one to three digits. Octet ranges are not checked.
pub fn validate_ipv4(ipv4: &str) -> bool {
    IPV4_RE.is_match(ipv4)
}

/// Eight colon-separated groups of one to four hex digits.
pub fn validate_ipv6(ipv6: &str) -> bool {
    IPV6_RE.is_match(ipv6)
}

/// Whether the string contains something shaped like a date in one of the
/// common numeric or month-name layouts.
///
/// ```rust
/// use tacklebox_core::validators::validate_date;
///
/// assert!(validate_date("2024-05-25"));
/// assert!(validate_date("May 25th, 2024"));
/// assert!(!validate_date("tomorrow"));
/// ```
pub fn validate_date(date: &str) -> bool {
    DATE_LAYOUTS.is_match(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com"));
        assert!(validate_email("first.last+tag@sub.example.org"));
        assert!(!validate_email("user@example"));
        assert!(!validate_email("user @example.com"));
        assert!(!validate_email("user@@example.com"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://example.com/path?q=1"));
        assert!(validate_url("ftp://files.example.com"));
        assert!(!validate_url("mailto:someone@example.com"));
        assert!(!validate_url("https://exa mple.com"));
        assert!(!validate_url("https://"));
    }

    #[test]
    fn test_validate_credit_card() {
        assert!(validate_credit_card("4111111111111111"));
        assert!(validate_credit_card("4111-1111-1111-1111"));
        assert!(validate_credit_card("4111-11111111-1111"));
        assert!(!validate_credit_card("4111 1111 1111 1111"));
        assert!(!validate_credit_card("411111111111111"));
    }

    #[test]
    fn test_validate_ip_addresses() {
        assert!(validate_ipv4("192.168.0.1"));
        assert!(validate_ipv4("999.999.999.999"));
        assert!(!validate_ipv4("192.168.0"));
        assert!(!validate_ipv4("1.2.3.4.5"));

        assert!(validate_ipv6("2001:0db8:85a3:0000:0000:8a2e:0370:7334"));
        assert!(validate_ipv6("2001:db8:0:0:0:0:2:1"));
        assert!(!validate_ipv6("2001:db8::2:1"));
        assert!(!validate_ipv6("gggg:0:0:0:0:0:0:1"));
    }

    #[test]
    fn test_validate_date_layouts() {
        let valid = [
            "2024-05-25",
            "25/05/2024",
            "25.05.2024",
            "05/25/24",
            "25-05-2024",
            "2024/05/25",
            "2024.05.25",
            "5/5/2024",
            "25th May, 2024",
            "May 25, 2024",
            "May 25th, 2024",
            "25 May 2024",
            "2024 May 25",
            "5-5-24",
            "2024 25 May",
            "2024 5th May",
            "due on 2024-05-25 at noon",
        ];
        for input in valid {
            assert!(validate_date(input), "{input} should validate");
        }

        for input in ["", "tomorrow", "May", "2024", "12:30"] {
            assert!(!validate_date(input), "{input} should not validate");
        }
    }

    #[test]
    fn test_validate_date_month_names_are_ascii() {
        assert!(!validate_date("éé 25, 2024"));
        assert!(!validate_date("25 Mär 2024"));
        assert!(validate_date("25 MAY 2024"));
        assert!(validate_date("Mar 25, 2024"));
    }
}
