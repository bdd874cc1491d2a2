use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A monetary or quantity field as delivered by the source: either a JSON
/// number or a string such as `"1234.50"`, `"1.234,50"` or `"R$ 99,90"`.
///
/// Text that mixes separators inconsistently (`"1,234.56"`) or whose lone
/// dot could group thousands (`"1.234"`) does not parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    /// Parse into a decimal, `None` when the content is not a finite number.
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            RawAmount::Number(n) if n.is_finite() => Decimal::try_from(*n).ok(),
            RawAmount::Number(_) => None,
            RawAmount::Text(text) => parse_text_amount(text),
        }
    }
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawAmount::Number(n) => write!(f, "{}", n),
            RawAmount::Text(text) => write!(f, "{}", text),
        }
    }
}

fn parse_text_amount(text: &str) -> Option<Decimal> {
    let cleaned: String = text
        .trim()
        .trim_start_matches("R$")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let (sign, body) = match cleaned.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", cleaned.as_str()),
    };
    if body.is_empty() {
        return None;
    }

    let canonical = match body.rsplit_once(',') {
        // A comma is the decimal separator; dots before it group thousands
        // and no dot may follow it.
        Some((integer, fraction)) => {
            if integer.contains(',') || fraction.is_empty() || fraction.contains('.') {
                return None;
            }
            format!("{}{}.{}", sign, ungroup_thousands(integer)?, fraction)
        }
        None if body.matches('.').count() > 1 => {
            format!("{}{}", sign, ungroup_thousands(body)?)
        }
        None if is_ambiguous_grouping(body) => return None,
        None => format!("{}{}", sign, body),
    };

    Decimal::from_str(&canonical).ok()
}

/// Drop `.` thousands separators. `None` unless the leading group has one
/// to three digits and every later group exactly three.
fn ungroup_thousands(integer: &str) -> Option<String> {
    let mut groups = integer.split('.');
    let head = groups.next()?;
    if head.is_empty() || head.len() > 3 {
        return if integer.contains('.') {
            None
        } else {
            Some(integer.to_string())
        };
    }
    let mut digits = head.to_string();
    for group in groups {
        if group.len() != 3 {
            return None;
        }
        digits.push_str(group);
    }
    Some(digits)
}

/// `"1.234"` is one thousand in Brazilian notation and a fraction elsewhere.
fn is_ambiguous_grouping(body: &str) -> bool {
    body.split_once('.').is_some_and(|(head, tail)| {
        (1..=3).contains(&head.len())
            && !head.starts_with('0')
            && tail.len() == 3
            && tail.chars().all(|c| c.is_ascii_digit())
    })
}
