//! Query classification.
//!
//! A raw search string is inspected once, up front, and the resulting flags
//! decide which lookup branches are dispatched. Classification is pure and
//! total: any input, however malformed, classifies to something (possibly
//! "nothing applies").

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{ANS_SUFFIX, PETRA_SUFFIX};
use crate::domain::Address;

/// Matches a string made up entirely of emoji code points.
///
/// Digits and `#`/`*` also carry the `Emoji` property; the numeric branch
/// takes precedence over the emoji branch, so they never reach it.
static EMOJI_SEQUENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\p{Emoji}+$").unwrap_or_else(|e| panic!("emoji pattern failed to compile: {e}"))
});

// ============================================================================
// Classification
// ============================================================================

/// Derived, read-only facts about a search query.
///
/// Flags are computed independently and are not mutually exclusive; branch
/// selection applies them in a fixed precedence order (see
/// [`Classification::branch`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// The query after suffix rewriting; all probes use this string.
    pub rewritten: String,
    /// Ends with the canonical name-service suffix.
    pub is_ans_name: bool,
    /// Looks like a `address::module::Name` struct path.
    pub is_struct_path: bool,
    /// Entirely numeric; the parsed value when in range.
    pub numeric_value: Option<u64>,
    /// Exactly 32 bytes of hex (with or without `0x`).
    pub is_32_byte_hex: bool,
    /// Standardizes to a valid account address.
    pub is_address_like: bool,
    /// Entirely emoji code points.
    pub is_emoji_sequence: bool,
    /// Long enough for free-text matching (more than two characters).
    pub is_free_text: bool,
}

/// The single dispatch branch chosen for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Name-service lookup only.
    AnsName,
    /// Coin-by-struct plus coin-list lookup.
    StructPath,
    /// Block-height, block-by-version, and transaction-by-version.
    Numeric(u64),
    /// Transaction-hash plus all address branches plus coin-list.
    HexHash,
    /// Address branches plus coin-list.
    Address,
    /// Emoji-market lookup only.
    Emoji,
    /// Coin-list and known-label fuzzy matching.
    FreeText,
    /// Nothing applies; dispatch no probes.
    None,
}

impl Classification {
    /// Select the dispatch branch, first match wins.
    #[must_use]
    pub fn branch(&self) -> Branch {
        if self.is_ans_name {
            Branch::AnsName
        } else if self.is_struct_path {
            Branch::StructPath
        } else if let Some(value) = self.numeric_value {
            Branch::Numeric(value)
        } else if self.is_32_byte_hex {
            Branch::HexHash
        } else if self.is_address_like {
            Branch::Address
        } else if self.is_emoji_sequence {
            Branch::Emoji
        } else if self.is_free_text {
            Branch::FreeText
        } else {
            Branch::None
        }
    }
}

/// Classify a raw query string.
///
/// The alternate `.petra` short-name suffix is rewritten to the canonical
/// `.apt` suffix once, before any flag is computed; every downstream probe
/// sees the rewritten string.
#[must_use]
pub fn classify(query: &str) -> Classification {
    let trimmed = query.trim();
    let rewritten = match trimmed.strip_suffix(PETRA_SUFFIX) {
        Some(base) => format!("{base}{ANS_SUFFIX}"),
        None => trimmed.to_string(),
    };

    let is_ans_name = rewritten.ends_with(ANS_SUFFIX) && rewritten.len() > ANS_SUFFIX.len();
    let is_struct_path = is_valid_struct_tag(&rewritten);
    let numeric_value = if !rewritten.is_empty() && rewritten.chars().all(|c| c.is_ascii_digit()) {
        rewritten.parse::<u64>().ok()
    } else {
        None
    };
    let is_32_byte_hex = is_32_byte_hex_string(&rewritten);
    let is_address_like = Address::try_standardize(&rewritten).is_some();
    let is_emoji_sequence = !rewritten.is_empty() && EMOJI_SEQUENCE.is_match(&rewritten);
    let is_free_text = rewritten.chars().count() > 2;

    Classification {
        rewritten,
        is_ans_name,
        is_struct_path,
        numeric_value,
        is_32_byte_hex,
        is_address_like,
        is_emoji_sequence,
        is_free_text,
    }
}

/// Whether the string is exactly 32 bytes of hex, `0x` prefix optional.
fn is_32_byte_hex_string(s: &str) -> bool {
    let body = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
    body.len() == 64 && body.chars().all(|c| c.is_ascii_hexdigit())
}

/// Whether the string looks like a Move struct tag: `address::module::Name`,
/// with an optional generic suffix on the name.
fn is_valid_struct_tag(s: &str) -> bool {
    let mut parts = s.splitn(3, "::");
    let (Some(address), Some(module), Some(name)) = (parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    Address::try_standardize(address).is_some()
        && is_identifier(module)
        && is_struct_name(name)
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A struct name, optionally carrying a generic argument list. The generic
/// body is not validated beyond its delimiters; the chain is the authority
/// on whether the full tag exists.
fn is_struct_name(s: &str) -> bool {
    match s.split_once('<') {
        None => is_identifier(s),
        Some((base, rest)) => is_identifier(base) && rest.ends_with('>'),
    }
}

// ============================================================================
// Tests
// ============================================================================
