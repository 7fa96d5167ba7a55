use crate::char::is_line_terminator;
use crate::error::SyntaxError;
use crate::error::SyntaxErrorType;
use crate::token::TT;
use serde::Serialize;
use std::cmp::{max, min};
use std::ops::{Add, AddAssign};

/// A location within the current source file expressed as UTF-8 byte offsets.
///
/// Serialises as a two-element array `[start, end]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct Loc(pub usize, pub usize);

impl Loc {
  pub fn error(self, typ: SyntaxErrorType, actual_token: Option<TT>) -> SyntaxError {
    SyntaxError::new(typ, self, actual_token)
  }

  pub fn is_empty(&self) -> bool {
    self.0 >= self.1
  }

  pub fn len(&self) -> usize {
    self.1 - self.0
  }

  pub fn extend(&mut self, other: Loc) {
    self.0 = min(self.0, other.0);
    self.1 = max(self.1, other.1);
  }

  pub fn add_option(self, rhs: Option<Loc>) -> Loc {
    let mut new = self;
    if let Some(rhs) = rhs {
      new.extend(rhs);
    };
    new
  }
}

impl Add for Loc {
  type Output = Loc;

  fn add(self, rhs: Self) -> Self::Output {
    let mut new = self;
    new.extend(rhs);
    new
  }
}

impl AddAssign for Loc {
  fn add_assign(&mut self, rhs: Self) {
    self.extend(rhs);
  }
}

/// Converts a byte offset into a 1-based `(line, column)` pair, counting columns in chars.
///
/// `\r\n` counts as a single line break. Offsets past the end clamp to the end of the source.
pub fn loc_to_line_col(source: &str, offset: usize) -> (usize, usize) {
  let mut line = 1;
  let mut col = 1;
  let mut prev_cr = false;
  for (i, c) in source.char_indices() {
    if i >= offset {
      break;
    };
    if c == '\n' && prev_cr {
      prev_cr = false;
      continue;
    };
    prev_cr = c == '\r';
    if is_line_terminator(c) {
      line += 1;
      col = 1;
    } else {
      col += 1;
    };
  }
  (line, col)
}
