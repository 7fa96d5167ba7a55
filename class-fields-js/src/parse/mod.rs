use class_fields::ParseSession;
use expr::pat::ParsePatternRules;

use crate::error::SyntaxError;
use crate::error::SyntaxErrorType;
use crate::error::SyntaxResult;
use crate::lex::lex_next;
use crate::lex::Lexer;
use crate::loc::Loc;
use crate::token::Token;
use crate::token::TT;
use crate::ParseOptions;

pub mod class_fields;
pub mod class_or_object;
pub mod drive;
pub mod expr;
pub mod func;
pub mod operator;
pub mod stmt;
#[cfg(test)]
mod tests;
pub mod toplevel;

// Almost every parse_* function takes these field values as parameters. Instead of having to enumerate them as parameters on every function and ordered unnamed arguments on every call, we simply pass this struct around. Fields are public to allow destructuring, but the value should be immutable; the with_* methods can be used to create an altered copy for passing into other functions, which is useful as most calls simply pass through the values unchanged. This struct should be received as a value, not a reference (i.e. `ctx: ParseCtx` not `ctx: &ParseCtx`) as the latter will require a separate lifetime.
// These values can change between nested calls, so we don't simply put them in Parser, as otherwise we'd have to "unwind" (i.e. reset) those values after each call returns. State that must outlive a single call (private name scopes, the field initializer flag) lives in the ParseSession instead.
#[derive(Clone, Copy)]
pub struct ParseCtx {
  pub rules: ParsePatternRules, // For simplicity, this is a copy, not a non-mutable reference, to avoid having a separate lifetime for it. The value is only two booleans, so a reference is probably slower, and it's supposed to be immutable (i.e. changes come from altered copying, not mutating the original single instance), so there shouldn't be any difference between a reference and a copy.
}

impl ParseCtx {
  pub fn with_rules(&self, rules: ParsePatternRules) -> ParseCtx {
    ParseCtx { rules, ..*self }
  }
}

#[derive(Debug)]
#[must_use]
pub struct MaybeToken {
  typ: TT,
  loc: Loc,
  matched: bool,
}

impl MaybeToken {
  pub fn is_match(&self) -> bool {
    self.matched
  }

  pub fn match_loc(&self) -> Option<Loc> {
    if self.matched {
      Some(self.loc)
    } else {
      None
    }
  }

  pub fn error(&self, err: SyntaxErrorType) -> SyntaxError {
    debug_assert!(!self.matched);
    self.loc.error(err, Some(self.typ))
  }

  pub fn map<R, F: FnOnce(Self) -> R>(self, f: F) -> Option<R> {
    if self.matched { Some(f(self)) } else { None }
  }

  pub fn and_then<R, F: FnOnce() -> SyntaxResult<R>>(self, f: F) -> SyntaxResult<Option<R>> {
    Ok(if self.matched { Some(f()?) } else { None })
  }
}

pub struct ParserCheckpoint {
  next_tok_i: usize,
}

pub struct Parser<'a> {
  lexer: Lexer<'a>,
  // Tokens are lexed lazily and never discarded, so rewinding to a checkpoint never relexes.
  buf: Vec<Token>,
  next_tok_i: usize,
  opts: ParseOptions,
  session: ParseSession,
}

// We extend this struct with added methods in the various submodules, instead of simply using free functions and passing `&mut Parser` around, for several reasons:
// - Avoid needing to redeclare `<'a>` on every function.
// - More lifetime elision is available for `self` than if it was just another reference parameter.
// - `self` is shorter than `parser` but makes more sense than `p`.
// - Don't need to import each function.
// - Autocomplete is more specific since `self.*` narrows down the options instead of just listing all visible functions.
// - For general consistency; if there's no reason why it should be a free function (e.g. more than one ambiguous base type), it should be a method.
// - Makes free functions truly separate independent utility functions.
impl<'a> Parser<'a> {
  pub fn new(lexer: Lexer<'a>, opts: ParseOptions) -> Parser<'a> {
    Parser {
      lexer,
      buf: Vec::new(),
      next_tok_i: 0,
      opts,
      session: ParseSession::default(),
    }
  }

  pub fn options(&self) -> ParseOptions {
    self.opts
  }

  pub fn source_range(&self) -> Loc {
    self.lexer.source_range()
  }

  pub fn str(&self, loc: Loc) -> &str {
    &self.lexer[loc]
  }

  pub fn string(&self, loc: Loc) -> String {
    self.str(loc).to_string()
  }

  /// Creates an error at a token that can't appear where it does. Invalid characters and the end of the input get their own error types, as they're rarely what the caller expected to report.
  pub fn token_error(&self, t: &Token, typ: SyntaxErrorType) -> SyntaxError {
    match t.typ {
      TT::EOF => t.error(SyntaxErrorType::UnexpectedEnd),
      TT::Invalid if self.str(t.loc).starts_with(['"', '\'']) => {
        t.error(SyntaxErrorType::LineTerminatorInString)
      }
      TT::Invalid => t.error(SyntaxErrorType::UnexpectedCharacter),
      _ => t.error(typ),
    }
  }

  pub fn checkpoint(&self) -> ParserCheckpoint {
    ParserCheckpoint {
      next_tok_i: self.next_tok_i,
    }
  }

  /// The range from the start of the first token consumed since the checkpoint to the end of the last one. If nothing was consumed, it's an empty range at the next token.
  pub fn since_checkpoint(&self, checkpoint: &ParserCheckpoint) -> Loc {
    if self.next_tok_i <= checkpoint.next_tok_i {
      let at = self
        .buf
        .get(checkpoint.next_tok_i)
        .map(|t| t.loc.0)
        .unwrap_or_else(|| self.lexer.next());
      return Loc(at, at);
    };
    Loc(
      self.buf[checkpoint.next_tok_i].loc.0,
      self.buf[self.next_tok_i - 1].loc.1,
    )
  }

  pub fn restore_checkpoint(&mut self, checkpoint: ParserCheckpoint) {
    self.next_tok_i = checkpoint.next_tok_i;
  }

  fn forward<K: FnOnce(&Token) -> bool>(&mut self, keep: K) -> (bool, Token) {
    debug_assert!(self.buf.len() >= self.next_tok_i);
    if self.buf.len() == self.next_tok_i {
      let token = lex_next(&mut self.lexer);
      self.buf.push(token);
    }
    let t = self.buf[self.next_tok_i].clone();
    let k = keep(&t);
    if k {
      self.next_tok_i += 1;
    };
    (k, t)
  }

  pub fn consume(&mut self) -> Token {
    self.forward(|_| true).1
  }

  /// Consumes the next token regardless of type, and returns its raw source code as a string.
  pub fn consume_as_string(&mut self) -> String {
    let loc = self.consume().loc;
    self.string(loc)
  }

  pub fn peek(&mut self) -> Token {
    self.forward(|_| false).1
  }

  pub fn peek_n<const N: usize>(&mut self) -> [Token; N] {
    let cp = self.checkpoint();
    let tokens = core::array::from_fn(|_| self.consume());
    self.restore_checkpoint(cp);
    tokens
  }

  pub fn consume_if(&mut self, typ: TT) -> MaybeToken {
    let (matched, t) = self.forward(|t| t.typ == typ);
    MaybeToken {
      typ,
      matched,
      loc: t.loc,
    }
  }

  pub fn consume_if_pred<F: FnOnce(&Token) -> bool>(&mut self, pred: F) -> MaybeToken {
    let (matched, t) = self.forward(pred);
    MaybeToken {
      typ: t.typ,
      matched,
      loc: t.loc,
    }
  }

  pub fn require(&mut self, typ: TT) -> SyntaxResult<Token> {
    let t = self.consume();
    if t.typ != typ {
      Err(self.token_error(&t, SyntaxErrorType::RequiredTokenNotFound(typ)))
    } else {
      Ok(t)
    }
  }

  pub fn require_predicate<P: FnOnce(TT) -> bool>(
    &mut self,
    pred: P,
    expected: &'static str,
  ) -> SyntaxResult<Token> {
    let t = self.consume();
    if !pred(t.typ) {
      Err(self.token_error(&t, SyntaxErrorType::ExpectedSyntax(expected)))
    } else {
      Ok(t)
    }
  }
}
