use crate::loc::Loc;
use crate::token::TT;
use core::fmt;
use core::fmt::Debug;
use core::fmt::Formatter;
use std::error::Error;
use std::fmt::Display;

/// A stable classification of syntax errors produced by the parser.
///
/// Diagnostic codes (prefix `CF`) are assigned per variant and are stable:
/// - `CF0001`: [`SyntaxErrorType::UnexpectedToken`]
/// - `CF0002`: [`SyntaxErrorType::DuplicatePrivateElement`]
/// - `CF0003`: [`SyntaxErrorType::UndeclaredPrivateName`]
/// - `CF0004`: [`SyntaxErrorType::ReservedConstructorField`]
/// - `CF0005`: [`SyntaxErrorType::PrivateDeleteForbidden`]
/// - `CF0006`: [`SyntaxErrorType::ArgumentsInFieldInitializer`]
/// - `CF0007`: [`SyntaxErrorType::SuperInFieldInitializer`]
/// - `CF0101`: [`SyntaxErrorType::ExpectedSyntax`]
/// - `CF0102`: [`SyntaxErrorType::RequiredTokenNotFound`]
/// - `CF0103`: [`SyntaxErrorType::UnexpectedCharacter`]
/// - `CF0104`: [`SyntaxErrorType::UnexpectedEnd`]
/// - `CF0105`: [`SyntaxErrorType::InvalidAssigmentTarget`]
/// - `CF0106`: [`SyntaxErrorType::LineTerminatorAfterArrowFunctionParameters`]
/// - `CF0107`: [`SyntaxErrorType::MalformedLiteralNumber`]
/// - `CF0108`: [`SyntaxErrorType::LineTerminatorInString`]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SyntaxErrorType {
  // Class fields and private names.
  UnexpectedToken,
  DuplicatePrivateElement,
  UndeclaredPrivateName,
  ReservedConstructorField,
  PrivateDeleteForbidden,
  ArgumentsInFieldInitializer,
  SuperInFieldInitializer,
  // Host grammar.
  ExpectedSyntax(&'static str),
  RequiredTokenNotFound(TT),
  UnexpectedCharacter,
  UnexpectedEnd,
  InvalidAssigmentTarget,
  LineTerminatorAfterArrowFunctionParameters,
  MalformedLiteralNumber,
  LineTerminatorInString,
}

#[derive(Clone)]
pub struct SyntaxError {
  pub typ: SyntaxErrorType,
  pub loc: Loc,
  pub actual_token: Option<TT>,
}

impl SyntaxError {
  pub fn new(typ: SyntaxErrorType, loc: Loc, actual_token: Option<TT>) -> SyntaxError {
    SyntaxError {
      typ,
      loc,
      actual_token,
    }
  }

  /// Byte offset the error was raised at.
  pub fn offset(&self) -> usize {
    self.loc.0
  }
}

impl Debug for SyntaxError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{} around loc [{}:{}]", self, self.loc.0, self.loc.1)
  }
}

impl Display for SyntaxError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "error[{}]: {} ({})",
      self.typ.code(),
      self.typ.message(self.actual_token),
      self.loc.0
    )
  }
}

impl Error for SyntaxError {}

impl PartialEq for SyntaxError {
  fn eq(&self, other: &Self) -> bool {
    self.typ == other.typ
  }
}

impl Eq for SyntaxError {}

pub type SyntaxResult<T> = Result<T, SyntaxError>;

impl SyntaxErrorType {
  /// Stable diagnostic code for this syntax error variant.
  pub fn code(&self) -> &'static str {
    match self {
      SyntaxErrorType::UnexpectedToken => "CF0001",
      SyntaxErrorType::DuplicatePrivateElement => "CF0002",
      SyntaxErrorType::UndeclaredPrivateName => "CF0003",
      SyntaxErrorType::ReservedConstructorField => "CF0004",
      SyntaxErrorType::PrivateDeleteForbidden => "CF0005",
      SyntaxErrorType::ArgumentsInFieldInitializer => "CF0006",
      SyntaxErrorType::SuperInFieldInitializer => "CF0007",
      SyntaxErrorType::ExpectedSyntax(_) => "CF0101",
      SyntaxErrorType::RequiredTokenNotFound(_) => "CF0102",
      SyntaxErrorType::UnexpectedCharacter => "CF0103",
      SyntaxErrorType::UnexpectedEnd => "CF0104",
      SyntaxErrorType::InvalidAssigmentTarget => "CF0105",
      SyntaxErrorType::LineTerminatorAfterArrowFunctionParameters => "CF0106",
      SyntaxErrorType::MalformedLiteralNumber => "CF0107",
      SyntaxErrorType::LineTerminatorInString => "CF0108",
    }
  }

  /// Human-readable message describing this syntax error.
  pub fn message(&self, actual_token: Option<TT>) -> String {
    match self {
      SyntaxErrorType::UnexpectedToken => "unexpected token".into(),
      SyntaxErrorType::DuplicatePrivateElement => "duplicate private element".into(),
      SyntaxErrorType::UndeclaredPrivateName => "usage of undeclared private name".into(),
      SyntaxErrorType::ReservedConstructorField => {
        "classes may not have a field named constructor".into()
      }
      SyntaxErrorType::PrivateDeleteForbidden => "private elements may not be deleted".into(),
      SyntaxErrorType::ArgumentsInFieldInitializer => {
        "a class field initializer may not contain arguments".into()
      }
      SyntaxErrorType::SuperInFieldInitializer => {
        "a class field initializer may not contain super".into()
      }
      SyntaxErrorType::ExpectedSyntax(expected) => format!("expected {}", expected),
      SyntaxErrorType::RequiredTokenNotFound(token) => format!("expected token {:?}", token),
      SyntaxErrorType::UnexpectedCharacter => "unexpected character".into(),
      SyntaxErrorType::UnexpectedEnd => actual_token
        .map(|tok| format!("unexpected end before {:?}", tok))
        .unwrap_or_else(|| "unexpected end of input".into()),
      SyntaxErrorType::InvalidAssigmentTarget => "invalid assignment target".into(),
      SyntaxErrorType::LineTerminatorAfterArrowFunctionParameters => {
        "line terminator not allowed after arrow function parameters".into()
      }
      SyntaxErrorType::MalformedLiteralNumber => "malformed number literal".into(),
      SyntaxErrorType::LineTerminatorInString => {
        "line terminator not allowed in string literal".into()
      }
    }
  }
}
