// ABOUTME: Year token normalization: plain integers and era-qualified forms like "400 BC".
// ABOUTME: Era designators are a fixed English vocabulary resolved through a small lookup table.

/// Error returned when a year token matches neither the plain-integer nor
/// the era-qualified form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed year token: {token:?}")]
pub struct MalformedYearError {
    pub token: String,
}

#[derive(Debug, Clone, Copy)]
enum Era {
    Common,
    BeforeCommon,
}

/// Recognized era designators. English only, matched case-insensitively.
const ERA_TABLE: &[(&str, Era)] = &[
    ("AD", Era::Common),
    ("CE", Era::Common),
    ("A.D.", Era::Common),
    ("C.E.", Era::Common),
    ("BC", Era::BeforeCommon),
    ("BCE", Era::BeforeCommon),
    ("B.C.", Era::BeforeCommon),
    ("B.C.E.", Era::BeforeCommon),
];

/// Normalize a trimmed year token into a year number.
///
/// A plain signed integer is returned as-is. Otherwise the token must be a
/// positive number followed by an era designator; BC/BCE years are mapped
/// to astronomical numbering (1 BC is year 0, so "400 BC" yields -399) so
/// ordering against CE years stays chronological.
pub fn normalize_year(token: &str) -> Result<i32, MalformedYearError> {
    if let Ok(year) = token.parse::<i32>() {
        return Ok(year);
    }
    parse_era_year(token).ok_or_else(|| MalformedYearError {
        token: token.to_string(),
    })
}

fn parse_era_year(token: &str) -> Option<i32> {
    let mut parts = token.split_whitespace();
    let number = parts.next()?;
    let era = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let year: i32 = number.parse().ok()?;
    if year < 1 {
        return None;
    }

    let (_, kind) = ERA_TABLE
        .iter()
        .find(|(name, _)| era.eq_ignore_ascii_case(name))?;
    match kind {
        Era::Common => Some(year),
        Era::BeforeCommon => Some(1 - year),
    }
}
