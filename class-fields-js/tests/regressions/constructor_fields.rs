use class_fields_js::ast::class_or_object::ClassMember;
use class_fields_js::ast::class_or_object::MethodKind;
use class_fields_js::ast::stmt::Stmt;
use class_fields_js::error::SyntaxErrorType;
use class_fields_js::{parse_with_options, ParseOptions};

fn parse_err(source: &str) -> (SyntaxErrorType, usize) {
  match parse_with_options(source, ParseOptions::with_class_fields()) {
    Ok(_) => panic!("expected {source:?} to fail"),
    Err(err) => (err.typ, err.loc.0),
  }
}

#[test]
fn public_constructor_field_is_rejected() {
  assert_eq!(
    parse_err("class A { constructor = 4 }"),
    (SyntaxErrorType::UnexpectedToken, 22)
  );
  assert_eq!(parse_err("class A { 'constructor' }"), (SyntaxErrorType::UnexpectedToken, 24));
  // Static members are never fields.
  assert_eq!(
    parse_err("class A { static constructor = 4 }"),
    (SyntaxErrorType::UnexpectedToken, 29)
  );
}

#[test]
fn private_constructor_field_is_rejected() {
  assert_eq!(
    parse_err("class A { #constructor = 4 }"),
    (SyntaxErrorType::ReservedConstructorField, 10)
  );
}

#[test]
fn computed_constructor_key_is_a_field() {
  let parsed = parse_with_options("class A { ['constructor'] = 4 }", ParseOptions::with_class_fields());
  assert!(parsed.is_ok(), "{parsed:?}");
}

#[test]
fn constructor_method_is_still_a_constructor() {
  let ast = parse_with_options("class A { constructor() {} a = 1 }", ParseOptions::with_class_fields())
    .unwrap();
  let members = match ast.stx.body[0].stx.as_ref() {
    Stmt::ClassDecl(decl) => &decl.stx.members,
    other => panic!("expected class declaration, got {other:?}"),
  };
  assert_eq!(members.len(), 2);
  match members[0].stx.as_ref() {
    ClassMember::Method(method) => assert_eq!(method.stx.kind, MethodKind::Constructor),
    other => panic!("expected constructor, got {other:?}"),
  }
  assert!(matches!(members[1].stx.as_ref(), ClassMember::Field(_)));
}
