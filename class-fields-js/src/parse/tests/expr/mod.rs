use crate::ast::expr::Expr;
use crate::ast::node::Node;
use crate::lex::Lexer;
use crate::parse::ParseCtx;
use crate::parse::Parser;
use crate::token::TT;
use crate::util::test::evaluate_test_input_files;
use crate::ParseOptions;
use serde_json::Value;

fn parse_expr(input: &str) -> Node<Expr> {
  let mut parser = Parser::new(Lexer::with_private_names(input), ParseOptions::with_class_fields());
  parser.expr(ParseCtx::top_level(), [TT::Semicolon]).unwrap()
}

fn parse_expr_and_serialize(input: String) -> Value {
  let node = parse_expr(&input);
  serde_json::to_value(&node).unwrap()
}

#[test]
fn test_parse_expression() {
  evaluate_test_input_files("parse/tests/expr", parse_expr_and_serialize);
}

#[test]
fn test_arrow_function_vs_grouping() {
  assert!(matches!(parse_expr("(a, b) => a;").stx.as_ref(), Expr::ArrowFunc(_)));
  assert!(matches!(parse_expr("(a, b);").stx.as_ref(), Expr::Binary(_)));
  assert!(matches!(parse_expr("async (a) => a;").stx.as_ref(), Expr::ArrowFunc(_)));
  assert!(matches!(parse_expr("async(a);").stx.as_ref(), Expr::Call(_)));
  assert!(matches!(parse_expr("async => 1;").stx.as_ref(), Expr::ArrowFunc(_)));
}

#[test]
fn test_arrow_body_ends_at_comma() {
  let node = parse_expr("() => a, b;");
  let Expr::Binary(seq) = node.stx.as_ref() else {
    panic!("expected comma expression");
  };
  assert!(matches!(seq.stx.left.stx.as_ref(), Expr::ArrowFunc(_)));
}
