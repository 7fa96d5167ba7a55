use class_fields_js::error::SyntaxErrorType;
use class_fields_js::{parse_with_options, ParseOptions};

fn parse_err(source: &str) -> (SyntaxErrorType, usize) {
  match parse_with_options(source, ParseOptions::with_class_fields()) {
    Ok(_) => panic!("expected {source:?} to fail"),
    Err(err) => (err.typ, err.loc.0),
  }
}

fn assert_parses(source: &str) {
  let parsed = parse_with_options(source, ParseOptions::with_class_fields());
  assert!(parsed.is_ok(), "failed to parse {source:?}: {parsed:?}");
}

#[test]
fn arguments_is_rejected_in_initializers() {
  assert_eq!(
    parse_err("class A { a = arguments }"),
    (SyntaxErrorType::ArgumentsInFieldInitializer, 14)
  );
  assert_eq!(
    parse_err("class A { a = () => arguments }"),
    (SyntaxErrorType::ArgumentsInFieldInitializer, 20)
  );
  assert_eq!(
    parse_err("class A { a = () => { return () => arguments } }"),
    (SyntaxErrorType::ArgumentsInFieldInitializer, 35)
  );
  assert_eq!(
    parse_err("class A { a = { arguments } }"),
    (SyntaxErrorType::ArgumentsInFieldInitializer, 16)
  );
}

#[test]
fn super_is_rejected_in_initializers() {
  assert_eq!(
    parse_err("class A { a = super.x }"),
    (SyntaxErrorType::SuperInFieldInitializer, 14)
  );
  assert_eq!(
    parse_err("class A { a = () => super() }"),
    (SyntaxErrorType::SuperInFieldInitializer, 20)
  );
}

#[test]
fn restrictions_reach_into_nested_functions() {
  assert_eq!(
    parse_err("class A { a = function () { return arguments } }"),
    (SyntaxErrorType::ArgumentsInFieldInitializer, 35)
  );
  assert_eq!(
    parse_err("class A { a = { m() { return arguments } } }"),
    (SyntaxErrorType::ArgumentsInFieldInitializer, 29)
  );
  assert_eq!(
    parse_err("class A { a = class extends B { m() { return super.m() } } }"),
    (SyntaxErrorType::SuperInFieldInitializer, 45)
  );
}

#[test]
fn arguments_as_a_property_name_is_rejected_in_initializers() {
  assert_eq!(
    parse_err("class A { a = this.arguments }"),
    (SyntaxErrorType::ArgumentsInFieldInitializer, 19)
  );
  assert_eq!(
    parse_err("class A { a = { arguments: 1 } }"),
    (SyntaxErrorType::ArgumentsInFieldInitializer, 16)
  );
  assert_eq!(
    parse_err("class A { a = \\u0061rguments }"),
    (SyntaxErrorType::ArgumentsInFieldInitializer, 14)
  );
}

#[test]
fn arguments_as_a_name_is_allowed_outside_initializers() {
  assert_parses("class A { arguments = 1 }");
  assert_parses("class A { a = 1; m() { return this.arguments + { arguments: 1 }.arguments } }");
  assert_parses("const o = { arguments: 1 }; o.arguments;");
}

#[test]
fn restrictions_end_with_the_initializer() {
  assert_parses("class A { a = 1; m() { return arguments } }");
  assert_parses("class A extends B { a = 1; constructor() { super() } }");
  assert_parses("function f() { class A { a = 1 } return arguments }");
}
