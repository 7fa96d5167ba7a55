use crate::operator::Operator;
use crate::operator::OperatorName;
use crate::operator::OperatorName::*;
use crate::operator::OPERATORS;
use crate::token::TT;
use ahash::HashMap;
use once_cell::sync::Lazy;

// Tokens that continue an expression after an operand: binary operators, assignment, and the call, member access and conditional forms.
#[rustfmt::skip]
const MULTARY: &[(TT, OperatorName)] = &[
  (TT::Plus, Addition),
  (TT::Equals, Assignment),
  (TT::PlusEquals, AssignmentAddition),
  (TT::AmpersandEquals, AssignmentBitwiseAnd),
  (TT::ChevronLeftChevronLeftEquals, AssignmentBitwiseLeftShift),
  (TT::BarEquals, AssignmentBitwiseOr),
  (TT::ChevronRightChevronRightEquals, AssignmentBitwiseRightShift),
  (TT::ChevronRightChevronRightChevronRightEquals, AssignmentBitwiseUnsignedRightShift),
  (TT::CaretEquals, AssignmentBitwiseXor),
  (TT::SlashEquals, AssignmentDivision),
  (TT::AsteriskAsteriskEquals, AssignmentExponentiation),
  (TT::AmpersandAmpersandEquals, AssignmentLogicalAnd),
  (TT::BarBarEquals, AssignmentLogicalOr),
  (TT::AsteriskEquals, AssignmentMultiplication),
  (TT::QuestionQuestionEquals, AssignmentNullishCoalescing),
  (TT::PercentEquals, AssignmentRemainder),
  (TT::HyphenEquals, AssignmentSubtraction),
  (TT::Ampersand, BitwiseAnd),
  (TT::ChevronLeftChevronLeft, BitwiseLeftShift),
  (TT::Bar, BitwiseOr),
  (TT::ChevronRightChevronRight, BitwiseRightShift),
  (TT::ChevronRightChevronRightChevronRight, BitwiseUnsignedRightShift),
  (TT::Caret, BitwiseXor),
  (TT::ParenthesisOpen, Call),
  (TT::Comma, Comma),
  (TT::BracketOpen, ComputedMemberAccess),
  (TT::Question, Conditional),
  (TT::Slash, Division),
  (TT::EqualsEquals, Equality),
  (TT::AsteriskAsterisk, Exponentiation),
  (TT::ChevronRight, GreaterThan),
  (TT::ChevronRightEquals, GreaterThanOrEqual),
  (TT::KeywordIn, In),
  (TT::ExclamationEquals, Inequality),
  (TT::KeywordInstanceof, Instanceof),
  (TT::ChevronLeft, LessThan),
  (TT::ChevronLeftEquals, LessThanOrEqual),
  (TT::AmpersandAmpersand, LogicalAnd),
  (TT::BarBar, LogicalOr),
  (TT::Dot, MemberAccess),
  (TT::Asterisk, Multiplication),
  (TT::QuestionQuestion, NullishCoalescing),
  (TT::Percent, Remainder),
  (TT::EqualsEqualsEquals, StrictEquality),
  (TT::ExclamationEqualsEquals, StrictInequality),
  (TT::Hyphen, Subtraction),
];

// Tokens that start an expression as a prefix operator. Postfix `++`/`--` and `yield*` are handled by the expression parser itself.
#[rustfmt::skip]
const UNARY: &[(TT, OperatorName)] = &[
  (TT::KeywordAwait, Await),
  (TT::Tilde, BitwiseNot),
  (TT::KeywordDelete, Delete),
  (TT::Exclamation, LogicalNot),
  (TT::KeywordNew, New),
  (TT::HyphenHyphen, PrefixDecrement),
  (TT::PlusPlus, PrefixIncrement),
  (TT::Hyphen, UnaryNegation),
  (TT::Plus, UnaryPlus),
  (TT::KeywordTypeof, Typeof),
  (TT::KeywordVoid, Void),
  (TT::KeywordYield, Yield),
];

fn mapping(table: &[(TT, OperatorName)]) -> HashMap<TT, &'static Operator> {
  table
    .iter()
    .map(|(tt, name)| (*tt, &OPERATORS[name]))
    .collect()
}

pub static MULTARY_OPERATOR_MAPPING: Lazy<HashMap<TT, &'static Operator>> =
  Lazy::new(|| mapping(MULTARY));

pub static UNARY_OPERATOR_MAPPING: Lazy<HashMap<TT, &'static Operator>> =
  Lazy::new(|| mapping(UNARY));

#[cfg(test)]
mod tests {
  use super::MULTARY_OPERATOR_MAPPING;
  use super::UNARY_OPERATOR_MAPPING;
  use crate::operator::OperatorName;
  use crate::token::TT;

  #[test]
  fn test_tokens_shared_by_unary_and_binary_forms() {
    assert_eq!(MULTARY_OPERATOR_MAPPING[&TT::Hyphen].name, OperatorName::Subtraction);
    assert_eq!(UNARY_OPERATOR_MAPPING[&TT::Hyphen].name, OperatorName::UnaryNegation);
    assert_eq!(UNARY_OPERATOR_MAPPING[&TT::KeywordDelete].name, OperatorName::Delete);
    assert!(!UNARY_OPERATOR_MAPPING.contains_key(&TT::Dot));
  }
}
