use super::ParseCtx;
use super::Parser;
use crate::ast::expr::lit::LitArrElem;
use crate::ast::expr::lit::LitArrExpr;
use crate::ast::expr::lit::LitBoolExpr;
use crate::ast::expr::lit::LitNullExpr;
use crate::ast::expr::lit::LitNumExpr;
use crate::ast::expr::lit::LitObjExpr;
use crate::ast::expr::lit::LitStrExpr;
use crate::ast::node::Node;
use crate::char::is_line_terminator;
use crate::error::SyntaxErrorType;
use crate::error::SyntaxResult;
use crate::num::JsNumber;
use crate::token::TT;

/// Decodes the escapes in the body of a string literal (without its quotes). Returns None for a malformed `\x` or `\u` escape.
pub fn normalise_literal_string(body: &str) -> Option<String> {
  let mut norm = String::with_capacity(body.len());
  let mut chars = body.chars().peekable();
  while let Some(c) = chars.next() {
    if c != '\\' {
      norm.push(c);
      continue;
    };
    let Some(escaped) = chars.next() else {
      return None;
    };
    match escaped {
      'b' => norm.push('\x08'),
      'f' => norm.push('\x0c'),
      'n' => norm.push('\n'),
      'r' => norm.push('\r'),
      't' => norm.push('\t'),
      'v' => norm.push('\x0b'),
      '0'..='7' => {
        // Legacy octal, up to three digits and at most 0o377. `\0` alone is NUL.
        let max_digits = if escaped <= '3' { 3 } else { 2 };
        let mut value = escaped.to_digit(8)?;
        for _ in 1..max_digits {
          let Some(d) = chars.next_if(|c| matches!(c, '0'..='7')) else {
            break;
          };
          value = value * 8 + d.to_digit(8)?;
        }
        norm.push(char::from_u32(value)?);
      }
      'x' => {
        let hex: String = (0..2).filter_map(|_| chars.next()).collect();
        if hex.len() != 2 {
          return None;
        };
        norm.push(char::from_u32(u32::from_str_radix(&hex, 16).ok()?)?);
      }
      'u' => {
        let hex: String = if chars.next_if_eq(&'{').is_some() {
          let hex: String = chars.by_ref().take_while(|c| *c != '}').collect();
          if hex.is_empty() || hex.len() > 6 {
            return None;
          };
          hex
        } else {
          let hex: String = (0..4).filter_map(|_| chars.next()).collect();
          if hex.len() != 4 {
            return None;
          };
          hex
        };
        let cp = u32::from_str_radix(&hex, 16).ok()?;
        // Lone surrogates can't be represented in a Rust string.
        norm.push(char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER));
      }
      // Line continuation.
      '\r' => {
        chars.next_if_eq(&'\n');
      }
      c if is_line_terminator(c) => {}
      c => norm.push(c),
    };
  }
  Some(norm)
}

/// Decodes the `\u` escapes in an identifier or private name. Most identifiers have none.
pub fn normalise_identifier(raw: &str) -> Option<String> {
  if raw.contains('\\') {
    normalise_literal_string(raw)
  } else {
    Some(raw.to_string())
  }
}

impl<'a> Parser<'a> {
  pub fn lit_arr(&mut self, ctx: ParseCtx) -> SyntaxResult<Node<LitArrExpr>> {
    self.with_loc(|p| {
      p.require(TT::BracketOpen)?;
      let mut elements = Vec::<LitArrElem>::new();
      loop {
        if p.consume_if(TT::Comma).is_match() {
          elements.push(LitArrElem::Empty);
          continue;
        };
        if p.peek().typ == TT::BracketClose {
          break;
        };
        let rest = p.consume_if(TT::DotDotDot).is_match();
        let value = p.expr(ctx, [TT::Comma, TT::BracketClose])?;
        elements.push(if rest {
          LitArrElem::Rest(value)
        } else {
          LitArrElem::Single(value)
        });
        if p.peek().typ == TT::BracketClose {
          break;
        };
        p.require(TT::Comma)?;
      }
      p.require(TT::BracketClose)?;
      Ok(LitArrExpr { elements })
    })
  }

  pub fn lit_bool(&mut self) -> SyntaxResult<Node<LitBoolExpr>> {
    self.with_loc(|p| {
      let t = p.consume();
      let value = match t.typ {
        TT::LiteralTrue => true,
        TT::LiteralFalse => false,
        _ => return Err(p.token_error(&t, SyntaxErrorType::ExpectedSyntax("boolean literal"))),
      };
      Ok(LitBoolExpr { value })
    })
  }

  pub fn lit_null(&mut self) -> SyntaxResult<Node<LitNullExpr>> {
    self.with_loc(|p| {
      p.require(TT::LiteralNull)?;
      Ok(LitNullExpr {})
    })
  }

  pub fn lit_num(&mut self) -> SyntaxResult<Node<LitNumExpr>> {
    self.with_loc(|p| {
      let value = p.lit_num_val()?;
      Ok(LitNumExpr { value })
    })
  }

  pub fn lit_num_val(&mut self) -> SyntaxResult<JsNumber> {
    let t = self.require(TT::LiteralNumber)?;
    JsNumber::from_literal(self.str(t.loc))
      .ok_or_else(|| t.error(SyntaxErrorType::MalformedLiteralNumber))
  }

  pub fn lit_obj(&mut self, ctx: ParseCtx) -> SyntaxResult<Node<LitObjExpr>> {
    self.with_loc(|p| {
      p.require(TT::BraceOpen)?;
      let members = p.list_with_loc(TT::Comma, TT::BraceClose, |p| p.obj_member(ctx))?;
      Ok(LitObjExpr { members })
    })
  }

  pub fn lit_str(&mut self) -> SyntaxResult<Node<LitStrExpr>> {
    self.with_loc(|p| {
      let value = p.lit_str_val()?;
      Ok(LitStrExpr { value })
    })
  }

  /// Parses a string literal and returns its decoded value.
  pub fn lit_str_val(&mut self) -> SyntaxResult<String> {
    let t = self.require(TT::LiteralString)?;
    let raw = self.str(t.loc);
    normalise_literal_string(&raw[1..raw.len() - 1])
      .ok_or_else(|| t.error(SyntaxErrorType::ExpectedSyntax("valid escape sequence")))
  }
}

#[cfg(test)]
mod tests {
  use super::normalise_identifier;
  use super::normalise_literal_string;

  #[test]
  fn test_normalise_literal_string() {
    assert_eq!(normalise_literal_string(r"a\nb").as_deref(), Some("a\nb"));
    assert_eq!(normalise_literal_string(r"\x41B\u{43}").as_deref(), Some("ABC"));
    assert_eq!(normalise_literal_string(r"\'\\").as_deref(), Some("'\\"));
    assert_eq!(normalise_literal_string(r"\0").as_deref(), Some("\0"));
    assert_eq!(normalise_literal_string(r"\101").as_deref(), Some("A"));
    assert_eq!(normalise_literal_string("a\\\nb").as_deref(), Some("ab"));
    assert_eq!(normalise_literal_string(r"\xZZ"), None);
    assert_eq!(normalise_literal_string(r"\u{}"), None);
  }

  #[test]
  fn test_normalise_identifier() {
    assert_eq!(normalise_identifier("abc").as_deref(), Some("abc"));
    assert_eq!(normalise_identifier(r"\u0061b\u{63}").as_deref(), Some("abc"));
    assert_eq!(normalise_identifier(r"\u00").as_deref(), None);
  }
}
