use class_fields_js::ast::class_or_object::ClassMember;
use class_fields_js::ast::class_or_object::ClassOrObjKey;
use class_fields_js::ast::class_or_object::MethodKind;
use class_fields_js::ast::node::Node;
use class_fields_js::ast::stmt::Stmt;
use class_fields_js::error::SyntaxErrorType;
use class_fields_js::{parse_with_options, ParseOptions};

fn class_members(source: &str) -> Vec<Node<ClassMember>> {
  let ast = parse_with_options(source, ParseOptions::with_class_fields()).unwrap();
  let mut body = ast.stx.body;
  match *body.remove(0).stx {
    Stmt::ClassDecl(decl) => decl.stx.members,
    other => panic!("expected class declaration, got {other:?}"),
  }
}

fn direct_key(key: &ClassOrObjKey) -> &str {
  match key {
    ClassOrObjKey::Direct(key) => &key.stx.key,
    other => panic!("expected direct key, got {other:?}"),
  }
}

#[test]
fn class_async_line_terminator_is_a_field() {
  let members = class_members("class C { async\nfoo(){} }");
  assert_eq!(members.len(), 2);

  // First member: field `async`.
  match members[0].stx.as_ref() {
    ClassMember::Field(field) => {
      assert_eq!(direct_key(&field.stx.key), "async");
      assert!(field.stx.value.is_none());
    }
    other => panic!("expected field, got {other:?}"),
  }

  // Second member: non-async method `foo`.
  match members[1].stx.as_ref() {
    ClassMember::Method(method) => {
      assert_eq!(direct_key(&method.stx.key), "foo");
      assert!(!method.stx.func.stx.async_);
    }
    other => panic!("expected method, got {other:?}"),
  }
}

#[test]
fn class_async_without_line_terminator_is_async_method() {
  let members = class_members("class C { async foo(){} async *bar(){} }");
  assert_eq!(members.len(), 2);
  for member in &members {
    match member.stx.as_ref() {
      ClassMember::Method(method) => assert!(method.stx.func.stx.async_),
      other => panic!("expected method, got {other:?}"),
    }
  }
}

#[test]
fn class_get_line_terminator_still_forms_getter() {
  let members = class_members("class C { get\nfoo(){} }");
  assert_eq!(members.len(), 1);
  match members[0].stx.as_ref() {
    ClassMember::Method(method) => {
      assert_eq!(direct_key(&method.stx.key), "foo");
      assert_eq!(method.stx.kind, MethodKind::Get);
    }
    other => panic!("expected getter, got {other:?}"),
  }
}

#[test]
fn modifier_keywords_can_name_fields() {
  let members = class_members("class C { get = 1; set; static }");
  let names: Vec<&str> = members
    .iter()
    .map(|member| match member.stx.as_ref() {
      ClassMember::Field(field) => direct_key(&field.stx.key),
      other => panic!("expected field, got {other:?}"),
    })
    .collect();
  assert_eq!(names, vec!["get", "set", "static"]);
}

#[test]
fn async_before_comments_is_a_field() {
  let members = class_members("class C { async /* c */ = 1; async // c\n; async /* c */ }");
  assert_eq!(members.len(), 3);
  for member in &members {
    match member.stx.as_ref() {
      ClassMember::Field(field) => assert_eq!(direct_key(&field.stx.key), "async"),
      other => panic!("expected field, got {other:?}"),
    }
  }
}

#[test]
fn modified_members_are_never_fields() {
  let cases = [
    // Static members.
    ("class C { static x = 1 }", 19),
    // Accessors need a parameter list.
    ("class C { get x = 1 }", 16),
    // An escaped `async` isn't a modifier, so this is a field `async` followed by `m`.
    ("class C { \\u0061sync m(){} };", 21),
  ];
  for (source, offset) in cases {
    let err = parse_with_options(source, ParseOptions::with_class_fields()).unwrap_err();
    assert_eq!(err.typ, SyntaxErrorType::UnexpectedToken, "{source:?}");
    assert_eq!(err.loc.0, offset, "{source:?}");
  }
}

#[test]
fn accessor_arity_is_checked() {
  let bad = ["class C { get x(a) {} }", "class C { set x() {} }", "class C { set x(...a) {} }"];
  for source in bad {
    let err = parse_with_options(source, ParseOptions::with_class_fields()).unwrap_err();
    assert!(matches!(err.typ, SyntaxErrorType::ExpectedSyntax(_)), "{source:?}: {err:?}");
  }
}
