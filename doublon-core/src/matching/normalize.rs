// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Field Normalization
//!
//! Canonicalizes raw field values before comparison so that superficial
//! formatting differences don't hide duplicates. All functions are pure;
//! absent fields are handled by callers via `Option`.

/// Normalizes an email address for comparison.
///
/// Case-folds only. No other transformation (plus-addressing, dots in
/// Gmail local parts, etc. are left alone on purpose - they may be
/// meaningful in other mail systems).
pub fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}

/// Normalizes a phone number for comparison.
///
/// Strips whitespace, hyphens, dots and parentheses, then replaces a single
/// leading `0` with `country_prefix`. The default prefix is `+33`, a
/// French-market heuristic - deployments targeting other markets configure
/// it through [`MatchConfig`](crate::MatchConfig), it is not a universal
/// rule.
pub fn normalize_phone(phone: &str, country_prefix: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '.' | '(' | ')'))
        .collect();

    match digits.strip_prefix('0') {
        Some(rest) => format!("{}{}", country_prefix, rest),
        None => digits,
    }
}

/// Normalizes a name for distance computation.
///
/// Lower-cases and trims surrounding whitespace.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_case_folded_only() {
        assert_eq!(normalize_email("J.Doe@Example.COM"), "j.doe@example.com");
        // Dots and plus tags are preserved
        assert_eq!(normalize_email("a+tag@x.com"), "a+tag@x.com");
    }

    #[test]
    fn test_phone_separator_stripping() {
        assert_eq!(normalize_phone("+33 1-23.45(67)89", "+33"), "+33123456789");
    }

    #[test]
    fn test_phone_leading_zero_replacement() {
        assert_eq!(normalize_phone("01 23 45 67 89", "+33"), "+33123456789");
        // Only a single leading zero is replaced
        assert_eq!(normalize_phone("0012", "+33"), "+33012");
    }

    #[test]
    fn test_phone_custom_prefix() {
        assert_eq!(normalize_phone("0171 555 0100", "+49"), "+491715550100");
    }

    #[test]
    fn test_name_trim_and_lowercase() {
        assert_eq!(normalize_name("  Jean Dupont "), "jean dupont");
    }
}
