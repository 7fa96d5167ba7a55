use crate::lex::lex_next;
use crate::lex::Lexer;
use crate::loc::Loc;
use crate::token::TT;
use crate::token::TT::*;

fn check_lexer<const N: usize>(mut lexer: Lexer<'_>, expecteds: [TT; N]) {
  for expected in expecteds {
    let t = lex_next(&mut lexer);
    assert_eq!(t.typ, expected);
  }
  let t = lex_next(&mut lexer);
  assert_eq!(EOF, t.typ);
}

fn check<const N: usize>(code: &str, expecteds: [TT; N]) {
  check_lexer(Lexer::new(code), expecteds);
}

fn check_private<const N: usize>(code: &str, expecteds: [TT; N]) {
  check_lexer(Lexer::with_private_names(code), expecteds);
}

#[test]
fn test_lex_keywords() {
  check("class", [KeywordClass]);
  check("instanceof", [KeywordInstanceof]);
  check("classy", [Identifier]);
  check("async", [KeywordAsync]);
}

#[test]
fn test_lex_identifiers() {
  check("h929", [Identifier]);
  check("$_a", [Identifier]);
  check("café", [Identifier]);
  // An escaped keyword is never the keyword.
  check("\\u0061sync", [Identifier]);
  check("\\u{61}sync", [Identifier]);
}

#[test]
fn test_lex_literal_numbers() {
  check("1", [LiteralNumber]);
  check("929", [LiteralNumber]);
  check(".929", [LiteralNumber]);
  check(". 929", [Dot, LiteralNumber]);
  check("1e10", [LiteralNumber]);
  check("0x1f", [LiteralNumber]);
  check("0b11", [LiteralNumber]);
}

#[test]
fn test_lex_literal_strings() {
  check("'hello world'", [LiteralString]);
  check("\"a\\\"b\"", [LiteralString]);
  check("'hello world\n'", [Invalid, Invalid]);
}

#[test]
fn test_lex_comments_and_line_terminators() {
  let mut lexer = Lexer::new("a /* x\n */ b // c\nd");
  assert!(!lex_next(&mut lexer).preceded_by_line_terminator);
  assert!(lex_next(&mut lexer).preceded_by_line_terminator);
  assert!(lex_next(&mut lexer).preceded_by_line_terminator);
  assert_eq!(lex_next(&mut lexer).typ, EOF);
}

#[test]
fn test_lex_private_names() {
  check_private("#a", [PrivateName]);
  check_private("this.#a", [KeywordThis, Dot, PrivateName]);
  check_private("#a = 1;", [PrivateName, Equals, LiteralNumber, Semicolon]);
  check_private("#\\u0061", [PrivateName]);
  check_private("#ünï", [PrivateName]);
  check_private("#class", [PrivateName]);
}

#[test]
fn test_lex_private_name_spans() {
  let mut lexer = Lexer::with_private_names("x.#foo1 ");
  lex_next(&mut lexer);
  lex_next(&mut lexer);
  let t = lex_next(&mut lexer);
  assert_eq!(t.typ, PrivateName);
  assert_eq!(t.loc, Loc(2, 7));
  assert_eq!(&lexer[Loc(t.loc.0 + 1, t.loc.1)], "foo1");
}

#[test]
fn test_lex_empty_private_name() {
  let mut lexer = Lexer::with_private_names("# a");
  let t = lex_next(&mut lexer);
  assert_eq!(t.typ, PrivateName);
  assert_eq!(t.loc, Loc(0, 1));
  assert_eq!(lex_next(&mut lexer).typ, Identifier);
  check_private("#1", [PrivateName, LiteralNumber]);
}

#[test]
fn test_lex_sigil_without_private_names() {
  let mut lexer = Lexer::new("#a");
  let t = lex_next(&mut lexer);
  assert_eq!(t.typ, Invalid);
  assert_eq!(t.loc, Loc(0, 1));
}
