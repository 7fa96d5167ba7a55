mod expr;
mod stmt;

use super::Parser;
use crate::ast::class_or_object::ClassMember;
use crate::ast::class_or_object::ClassOrObjKey;
use crate::ast::expr::Expr;
use crate::ast::stmt::Stmt;
use crate::error::SyntaxErrorType;
use crate::lex::Lexer;
use crate::token::TT;
use crate::ParseOptions;

#[test]
fn test_parser() {
  let lexer = Lexer::with_private_names("this.#x = 1;");
  let mut p = Parser::new(lexer, ParseOptions::with_class_fields());
  // Initial state.
  let cp = p.checkpoint();
  assert_eq!(p.next_tok_i, 0);

  // Peek the first token.
  let t = p.peek();
  assert_eq!(p.next_tok_i, 0);
  assert_eq!(p.buf.len(), 1);
  assert_eq!(t.typ, TT::KeywordThis);

  // Consume the first token.
  let t = p.consume();
  assert_eq!(p.next_tok_i, 1);
  assert_eq!(p.buf.len(), 1);
  assert_eq!(t.typ, TT::KeywordThis);

  // Peeking ahead fills the buffer without consuming.
  let [dot, name] = p.peek_n::<2>();
  assert_eq!(p.next_tok_i, 1);
  assert_eq!(p.buf.len(), 3);
  assert_eq!(dot.typ, TT::Dot);
  assert_eq!(name.typ, TT::PrivateName);
  assert_eq!(p.str(name.loc), "#x");

  // Reset to a past point; the buffer is kept.
  p.restore_checkpoint(cp);
  assert_eq!(p.next_tok_i, 0);
  assert_eq!(p.buf.len(), 3);
}

#[test]
fn test_since_checkpoint_covers_consumed_tokens() {
  let lexer = Lexer::new("a  +  b");
  let mut p = Parser::new(lexer, ParseOptions::default());
  let cp = p.checkpoint();
  assert_eq!(p.since_checkpoint(&cp), crate::loc::Loc(0, 0));
  p.consume();
  p.consume();
  assert_eq!(p.since_checkpoint(&cp), crate::loc::Loc(0, 4));
}

fn parse_class_members(source: &str) -> Vec<ClassMember> {
  let ast = crate::parse_with_options(source, ParseOptions::with_class_fields()).unwrap();
  let mut body = ast.stx.body;
  let Stmt::ClassDecl(decl) = *body.remove(0).stx else {
    panic!("expected class declaration");
  };
  decl.stx.members.into_iter().map(|m| *m.stx).collect()
}

#[test]
fn test_member_kinds() {
  let members = parse_class_members(
    "class A { a; static b() {} get c() { return 1 } set c(v) {} constructor() {} async; async d() {} *e() {} }",
  );
  let summary: Vec<(&str, Option<String>)> = members
    .iter()
    .map(|m| match m {
      ClassMember::Field(f) => ("field", f.stx.key.static_name().map(str::to_string)),
      ClassMember::Method(m) => ("method", m.stx.key.static_name().map(str::to_string)),
    })
    .collect();
  assert_eq!(summary, vec![
    ("field", Some("a".to_string())),
    ("method", Some("b".to_string())),
    ("method", Some("c".to_string())),
    ("method", Some("c".to_string())),
    ("method", Some("constructor".to_string())),
    ("field", Some("async".to_string())),
    ("method", Some("d".to_string())),
    ("method", Some("e".to_string())),
  ]);
}

#[test]
fn test_computed_and_private_keys() {
  let members = parse_class_members("class A { [k] = 1; #p = 2; 'q'; 3 }");
  let flags: Vec<(bool, bool)> = members
    .iter()
    .map(|m| match m {
      ClassMember::Field(f) => (f.stx.computed, matches!(f.stx.key, ClassOrObjKey::Private(_))),
      ClassMember::Method(_) => panic!("expected only fields"),
    })
    .collect();
  assert_eq!(flags, vec![(true, false), (false, true), (false, false), (false, false)]);
}

#[test]
fn test_field_value_stops_at_newline() {
  let members = parse_class_members("class A {\n  a = 1\n  b = this.a + 2\n  'c'\n}");
  assert_eq!(members.len(), 3);
  let ClassMember::Field(b) = &members[1] else {
    panic!("expected field");
  };
  let value = b.stx.value.as_ref().unwrap();
  assert!(matches!(value.stx.as_ref(), Expr::Binary(_)));
}

#[test]
fn test_private_member_access_node() {
  let members = parse_class_members("class A { #a; m() { return this.#a } }");
  let ClassMember::Method(m) = &members[1] else {
    panic!("expected method");
  };
  let crate::ast::func::FuncBody::Block(body) = &m.stx.func.stx.body else {
    panic!("expected block body");
  };
  let Stmt::Return(ret) = body[0].stx.as_ref() else {
    panic!("expected return");
  };
  let Expr::PrivateMember(access) = ret.stx.value.as_ref().unwrap().stx.as_ref() else {
    panic!("expected private member access");
  };
  assert_eq!(access.stx.right.stx.name, "a");
  assert!(matches!(access.stx.left.stx.as_ref(), Expr::This(_)));
}

#[test]
fn test_session_is_clean_after_parse() {
  let source = "class A { a = () => class B { #b; c = this.#b } }";
  let lexer = Lexer::with_private_names(source);
  let mut p = Parser::new(lexer, ParseOptions::with_class_fields());
  p.parse_top_level().unwrap();
  assert!(!p.session.private_names.is_inside_class());
  assert!(!p.session.in_field_value);
}

#[test]
fn test_session_is_clean_after_error() {
  let source = "class A { a = class { #b; c = arguments } }";
  let lexer = Lexer::with_private_names(source);
  let mut p = Parser::new(lexer, ParseOptions::with_class_fields());
  let err = p.parse_top_level().unwrap_err();
  assert_eq!(err.typ, SyntaxErrorType::ArgumentsInFieldInitializer);
  assert!(!p.session.private_names.is_inside_class());
  assert!(!p.session.in_field_value);
}

#[test]
fn test_arrow_backtracking_keeps_scopes_balanced() {
  // The parenthesised default is parsed once as arrow parameters and again as a grouping.
  let source = "class A { #a; b = (x = this.#a, y = class { #c }) }";
  let lexer = Lexer::with_private_names(source);
  let mut p = Parser::new(lexer, ParseOptions::with_class_fields());
  p.parse_top_level().unwrap();
  assert_eq!(p.session.private_names.depth(), 0);
}
