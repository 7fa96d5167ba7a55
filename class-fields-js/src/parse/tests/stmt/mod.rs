use crate::lex::Lexer;
use crate::parse::ParseCtx;
use crate::parse::Parser;
use crate::util::test::evaluate_test_input_files;
use crate::ParseOptions;
use serde_json::Value;

fn parse_stmt_and_serialize(input: String) -> Value {
  let mut parser = Parser::new(Lexer::with_private_names(&input), ParseOptions::with_class_fields());
  let node = parser.stmt(ParseCtx::top_level()).unwrap();
  serde_json::to_value(&node).unwrap()
}

#[test]
fn test_parse_statement() {
  evaluate_test_input_files("parse/tests/stmt", parse_stmt_and_serialize);
}
