//! Ready-made fragments for common validation targets.
//!
//! Every pattern is a `static` [`Fragment`] built from static syntax, so
//! nothing is computed until a pattern is compiled. Anchored patterns
//! (`^...$`) validate a whole input; [`HASHTAG`] and [`MENTION`] are
//! unanchored so they can be found inside text.
//!
//! Digit positions are spelled `[0-9]` rather than `\d`, which matches any
//! Unicode decimal digit, so validators accept ASCII digits only.
//!
//! # Example
//!
//! ```
//! use zeroreg::patterns::{EMAIL, lookup};
//!
//! assert!(EMAIL.is_match("user@example.com").unwrap());
//! assert!(lookup("uuid").is_some());
//! ```

use crate::fragment::Fragment;

/// Email address: `user@domain.com`, `user.name+tag@domain.co.uk`.
pub static EMAIL: Fragment =
    Fragment::from_static(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$");

/// HTTP or HTTPS URL: `https://example.com`, `http://sub.domain.com/path?query=1`.
pub static URL: Fragment = Fragment::from_static(
    r"^https?://(?:www\.)?[-a-zA-Z0-9@:%._\+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b(?:[-a-zA-Z0-9()@:%_\+.~#?&/=]*)$",
);

/// Phone number: `+1-234-567-8900`, `234-567-8900`.
pub static PHONE: Fragment = Fragment::from_static(
    r"^\+?[1-9]?[0-9]{0,3}?[-. (]?[0-9]{1,4}[-. )]?[0-9]{1,4}[-. ]?[0-9]{1,9}$",
);

/// ISO date (`YYYY-MM-DD`): `2024-03-15`.
pub static DATE: Fragment =
    Fragment::from_static(r"^[0-9]{4}-(?:0[1-9]|1[0-2])-(?:0[1-9]|[12][0-9]|3[01])$");

/// 24-hour time (`HH:MM` or `HH:MM:SS`): `14:30`, `23:59:59`.
pub static TIME: Fragment =
    Fragment::from_static(r"^(?:[01][0-9]|2[0-3]):[0-5][0-9](?::[0-5][0-9])?$");

/// IPv4 address: `192.168.1.1`.
pub static IPV4: Fragment = Fragment::from_static(
    r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
);

/// Full-form IPv6 address: `2001:0db8:85a3:0000:0000:8a2e:0370:7334`.
pub static IPV6: Fragment = Fragment::from_static(r"^(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}$");

/// Hex color: `#fff`, `#ffffff`.
pub static HEX_COLOR: Fragment = Fragment::from_static(r"^#(?:[0-9a-fA-F]{3}){1,2}$");

/// Hexadecimal string: `a1b2c3`, `DEADBEEF`.
pub static HEX: Fragment = Fragment::from_static(r"^[0-9a-fA-F]+$");

/// UUID, versions 1 to 5: `550e8400-e29b-41d4-a716-446655440000`.
pub static UUID: Fragment = Fragment::from_static(
    r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[1-5][0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$",
);

/// URL slug: `my-awesome-post`.
pub static SLUG: Fragment = Fragment::from_static(r"^[a-z0-9]+(?:-[a-z0-9]+)*$");

/// Hashtag: `#hello_world`.
pub static HASHTAG: Fragment = Fragment::from_static(r"#[a-zA-Z0-9_]+");

/// Mention: `@user_123`.
pub static MENTION: Fragment = Fragment::from_static(r"@[a-zA-Z0-9_]+");

/// Visa, MasterCard, American Express or Discover card number, digits only.
pub static CREDIT_CARD: Fragment = Fragment::from_static(
    r"^(?:4[0-9]{12}(?:[0-9]{3})?|5[1-5][0-9]{14}|3[47][0-9]{13}|6(?:011|5[0-9]{2})[0-9]{12})$",
);

/// US Social Security Number: `123-45-6789`.
pub static SSN: Fragment = Fragment::from_static(r"^[0-9]{3}-[0-9]{2}-[0-9]{4}$");

/// US ZIP code: `12345`, `12345-6789`.
pub static ZIP_CODE: Fragment = Fragment::from_static(r"^[0-9]{5}(?:-[0-9]{4})?$");

/// Username of 3 to 16 letters, digits or underscores.
pub static USERNAME: Fragment = Fragment::from_static(r"^[a-zA-Z0-9_]{3,16}$");

/// At least 8 characters with a lowercase letter, an uppercase letter, a
/// digit and one of `@$!%*?&`.
///
/// Uses lookahead, so it compiles with the backtracking engine.
pub static STRONG_PASSWORD: Fragment = Fragment::from_static(
    r"^(?=.*[a-z])(?=.*[A-Z])(?=.*[0-9])(?=.*[@$!%*?&])[A-Za-z0-9@$!%*?&]{8,}$",
);

/// Semantic version with optional pre-release tag: `1.0.0`, `0.0.1-alpha`.
pub static SEMVER: Fragment = Fragment::from_static(
    r"^(?:0|[1-9][0-9]*)\.(?:0|[1-9][0-9]*)\.(?:0|[1-9][0-9]*)(?:-[a-zA-Z0-9]+)?$",
);

/// MAC address with `:` or `-` separators: `00:1A:2B:3C:4D:5E`.
pub static MAC_ADDRESS: Fragment = Fragment::from_static(r"^(?:[0-9A-Fa-f]{2}[:-]){5}[0-9A-Fa-f]{2}$");

/// Entry in the pattern catalogue.
#[derive(Debug, Clone, Copy)]
pub struct CatalogueEntry {
    /// Lookup name.
    pub name: &'static str,
    /// What the pattern validates.
    pub description: &'static str,
    /// The pattern.
    pub fragment: &'static Fragment,
}

const fn entry(
    name: &'static str,
    description: &'static str,
    fragment: &'static Fragment,
) -> CatalogueEntry {
    CatalogueEntry {
        name,
        description,
        fragment,
    }
}

/// Every ready-made pattern, by name.
pub static CATALOGUE: &[CatalogueEntry] = &[
    entry("email", "email address", &EMAIL),
    entry("url", "http or https URL", &URL),
    entry("phone", "phone number", &PHONE),
    entry("date", "ISO date (YYYY-MM-DD)", &DATE),
    entry("time", "24-hour time (HH:MM[:SS])", &TIME),
    entry("ipv4", "IPv4 address", &IPV4),
    entry("ipv6", "full-form IPv6 address", &IPV6),
    entry("hex_color", "hex color (#rgb or #rrggbb)", &HEX_COLOR),
    entry("hex", "hexadecimal string", &HEX),
    entry("uuid", "UUID, versions 1-5", &UUID),
    entry("slug", "lowercase URL slug", &SLUG),
    entry("hashtag", "#hashtag", &HASHTAG),
    entry("mention", "@mention", &MENTION),
    entry("credit_card", "credit card number", &CREDIT_CARD),
    entry("ssn", "US social security number", &SSN),
    entry("zip_code", "US ZIP code", &ZIP_CODE),
    entry("username", "username, 3-16 word characters", &USERNAME),
    entry("strong_password", "strong password", &STRONG_PASSWORD),
    entry("semver", "semantic version", &SEMVER),
    entry("mac_address", "MAC address", &MAC_ADDRESS),
];

/// Look up a ready-made pattern by name. Case and `-`/`_` are ignored.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Fragment> {
    let wanted: String = name
        .chars()
        .filter(|c| !matches!(c, '-' | '_'))
        .map(|c| c.to_ascii_lowercase())
        .collect();
    CATALOGUE
        .iter()
        .find(|entry| entry.name.replace('_', "") == wanted)
        .map(|entry| entry.fragment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalogue_pattern_compiles() {
        for entry in CATALOGUE {
            assert!(
                entry.fragment.to_regex().is_ok(),
                "{} failed to compile",
                entry.name
            );
        }
    }

    #[test]
    fn catalogue_names_are_unique() {
        let mut names: Vec<_> = CATALOGUE.iter().map(|entry| entry.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CATALOGUE.len());
    }

    #[test]
    fn lookup_is_lenient_about_separators() {
        assert_eq!(lookup("hexColor"), Some(&HEX_COLOR));
        assert_eq!(lookup("mac-address"), Some(&MAC_ADDRESS));
        assert_eq!(lookup("ZIP_CODE"), Some(&ZIP_CODE));
        assert_eq!(lookup("nope"), None);
    }

    #[test]
    fn only_the_password_needs_backtracking() {
        for entry in CATALOGUE {
            let matcher = entry.fragment.to_regex().unwrap();
            assert_eq!(matcher.is_fancy(), entry.name == "strong_password");
        }
    }
}
