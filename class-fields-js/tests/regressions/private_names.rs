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
fn private_names_can_be_used_before_declaration() {
  assert_parses("class A { a = this.#a; #a = 4 }");
  assert_parses("class A { m() { return this.#b } #b }");
  assert_parses("class A { #a; static s(o) { return o.#a } }");
}

#[test]
fn duplicate_private_names_are_rejected() {
  assert_eq!(
    parse_err("class A { #a; #a }"),
    (SyntaxErrorType::DuplicatePrivateElement, 14)
  );
}

#[test]
fn undeclared_private_names_are_rejected_at_the_first_use() {
  assert_eq!(
    parse_err("class A { a = this.#a }"),
    (SyntaxErrorType::UndeclaredPrivateName, 19)
  );
  assert_eq!(
    parse_err("class A { a = this.#a; b = this.#b }"),
    (SyntaxErrorType::UndeclaredPrivateName, 19)
  );
  assert_eq!(
    parse_err("class A { a = this.#b; c = this.#a; #b }"),
    (SyntaxErrorType::UndeclaredPrivateName, 32)
  );
}

#[test]
fn nested_classes_see_enclosing_declarations() {
  assert_parses("class A { #a; m() { class B { n() { return this.#a } } } }");
  assert_parses("class A { m() { class B { n() { return this.#z } } } #z }");
  // A nested class may redeclare a name.
  assert_parses("class A { #a; m() { return class { #a } } }");
  assert_eq!(
    parse_err("class A { m() { class B { n() { return this.#z } } } }"),
    (SyntaxErrorType::UndeclaredPrivateName, 44)
  );
  assert_eq!(
    parse_err("(class { #a; m() { return this.#b } });"),
    (SyntaxErrorType::UndeclaredPrivateName, 31)
  );
}

#[test]
fn private_names_outside_classes_are_rejected() {
  assert_eq!(
    parse_err("this.#a"),
    (SyntaxErrorType::UndeclaredPrivateName, 5)
  );
}

#[test]
fn private_members_cannot_be_deleted() {
  assert_eq!(
    parse_err("class A { #a; f() { delete this.#a } }"),
    (SyntaxErrorType::PrivateDeleteForbidden, 20)
  );
  assert_eq!(
    parse_err("class A { #a; f() { delete (this.#a) } }"),
    (SyntaxErrorType::PrivateDeleteForbidden, 20)
  );
  assert_parses("class A { #a; f() { delete this.#a.b } }");
}

#[test]
fn private_name_requires_an_identifier() {
  assert_eq!(parse_err("class A { # a }"), (SyntaxErrorType::UnexpectedToken, 12));
  assert_eq!(
    parse_err("class A { #a; a() { this.# a } }"),
    (SyntaxErrorType::UnexpectedToken, 27)
  );
}

#[test]
fn private_methods_are_not_supported() {
  assert_eq!(parse_err("class A { #m() {} }"), (SyntaxErrorType::UnexpectedToken, 12));
}

#[test]
fn private_names_with_escapes_and_unicode() {
  assert_parses("class A { #\\u0061 = 1; m() { return this.#\\u0061 } }");
  assert_parses("class A { #é = 1; m() { return this.#é } }");
}

#[test]
fn escaped_private_names_match_their_plain_spelling() {
  assert_parses("class A { #\\u0061; m() { return this.#a } }");
  assert_parses("class A { #a; m() { return this.#\\u{61} } }");
  assert_eq!(
    parse_err("class A { #a; #\\u0061 }"),
    (SyntaxErrorType::DuplicatePrivateElement, 14)
  );
  assert_eq!(
    parse_err("class A { #\\u0063onstructor }"),
    (SyntaxErrorType::ReservedConstructorField, 10)
  );
}
