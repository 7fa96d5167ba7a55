use core::hash::Hash;
use core::hash::Hasher;
use serde::Serialize;
use serde::Serializer;
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

// This provides Eq for f64.
#[derive(Copy, Clone, Debug)]
pub struct JsNumber(pub f64);

impl JsNumber {
  /// Parses the raw source of a numeric literal, including `0b`/`0o`/`0x` prefixes.
  pub fn from_literal(raw: &str) -> Option<JsNumber> {
    let radix_body = |prefix_lower: &str, prefix_upper: &str| {
      raw
        .strip_prefix(prefix_lower)
        .or_else(|| raw.strip_prefix(prefix_upper))
    };
    let radix = if let Some(body) = radix_body("0b", "0B") {
      Some((2, body))
    } else if let Some(body) = radix_body("0o", "0O") {
      Some((8, body))
    } else if let Some(body) = radix_body("0x", "0X") {
      Some((16, body))
    } else {
      None
    };
    if let Some((radix, body)) = radix {
      if body.is_empty() {
        return None;
      };
      let mut value = 0f64;
      for c in body.chars() {
        value = value * radix as f64 + c.to_digit(radix)? as f64;
      }
      return Some(JsNumber(value));
    };
    // Legacy octal, e.g. `017`.
    if raw.len() > 1 && raw.starts_with('0') && raw.chars().all(|c| matches!(c, '0'..='7')) {
      let mut value = 0f64;
      for c in raw.chars() {
        value = value * 8.0 + c.to_digit(8)? as f64;
      }
      return Some(JsNumber(value));
    };
    // Rust's float parser rejects a trailing `.` and an exponent without digits.
    let normalised = raw.strip_suffix('.').unwrap_or(raw);
    normalised.parse::<f64>().ok().map(JsNumber)
  }
}

impl Display for JsNumber {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl PartialEq for JsNumber {
  fn eq(&self, other: &Self) -> bool {
    if self.0.is_nan() {
      return other.0.is_nan();
    };
    self.0.eq(&other.0)
  }
}

impl Eq for JsNumber {}

impl Ord for JsNumber {
  fn cmp(&self, other: &Self) -> Ordering {
    // Only NaNs cannot be compared, and we treat them as equal.
    self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
  }
}

impl PartialOrd for JsNumber {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Hash for JsNumber {
  fn hash<H: Hasher>(&self, state: &mut H) {
    if !self.0.is_nan() {
      self.0.to_bits().hash(state);
    };
  }
}

impl Serialize for JsNumber {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::JsNumber;

  #[test]
  fn test_from_literal() {
    assert_eq!(JsNumber::from_literal("0"), Some(JsNumber(0.0)));
    assert_eq!(JsNumber::from_literal("4.5"), Some(JsNumber(4.5)));
    assert_eq!(JsNumber::from_literal(".5"), Some(JsNumber(0.5)));
    assert_eq!(JsNumber::from_literal("5."), Some(JsNumber(5.0)));
    assert_eq!(JsNumber::from_literal("1e3"), Some(JsNumber(1000.0)));
    assert_eq!(JsNumber::from_literal("0x1F"), Some(JsNumber(31.0)));
    assert_eq!(JsNumber::from_literal("0b101"), Some(JsNumber(5.0)));
    assert_eq!(JsNumber::from_literal("0o17"), Some(JsNumber(15.0)));
    assert_eq!(JsNumber::from_literal("017"), Some(JsNumber(15.0)));
    assert_eq!(JsNumber::from_literal("0x"), None);
    assert_eq!(JsNumber::from_literal("1e"), None);
  }
}
