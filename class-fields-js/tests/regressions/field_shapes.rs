use class_fields_js::ast::class_or_object::ClassMember;
use class_fields_js::ast::expr::Expr;
use class_fields_js::ast::stmt::Stmt;
use class_fields_js::operator::OperatorName;
use class_fields_js::{parse_with_options, ParseOptions};

const FIELDS: &[&str] = &["x", "x = 0", "[x]", "[x] = 0", "#x", "#x = 0", "async", "async = 5"];

const CLASSES: &[&str] = &[
  "class A { %s }",
  "class A { %s; }",
  "class A { %s; #y }",
  "class A { %s;a() {} }",
  "class A { %s\na() {} }",
];

fn class_members(source: &str) -> Vec<ClassMember> {
  let ast = parse_with_options(source, ParseOptions::with_class_fields()).unwrap();
  let mut body = ast.stx.body;
  match *body.remove(0).stx {
    Stmt::ClassDecl(decl) => decl.stx.members.into_iter().map(|m| *m.stx).collect(),
    other => panic!("expected class declaration, got {other:?}"),
  }
}

#[test]
fn field_shapes_parse_in_every_class_shape() {
  for class in CLASSES {
    for field in FIELDS {
      let source = class.replace("%s", field);
      let parsed = parse_with_options(&source, ParseOptions::with_class_fields());
      let ast = match parsed {
        Ok(ast) => ast,
        Err(err) => panic!("failed to parse {source:?}: {err:?}"),
      };
      let members = match ast.stx.body[0].stx.as_ref() {
        Stmt::ClassDecl(decl) => &decl.stx.members,
        other => panic!("expected class declaration, got {other:?}"),
      };
      match members[0].stx.as_ref() {
        ClassMember::Field(_) => {}
        other => panic!("expected field first in {source:?}, got {other:?}"),
      }
    }
  }
}

#[test]
fn field_shapes_parse_in_class_expressions() {
  for field in FIELDS {
    let source = format!("const A = class {{ {field} }};");
    let parsed = parse_with_options(&source, ParseOptions::with_class_fields());
    assert!(parsed.is_ok(), "failed to parse {source:?}: {parsed:?}");
  }
}

#[test]
fn field_initializer_takes_a_full_expression() {
  let ok = [
    "class A { a = b = c }",
    "class A { a = b ? c : d }",
    "class A { a = (b, c) }",
    "class A { a = x => x * 2 }",
    "class A { a = 1\n'b' }",
  ];
  for source in ok {
    let parsed = parse_with_options(source, ParseOptions::with_class_fields());
    assert!(parsed.is_ok(), "failed to parse {source:?}: {parsed:?}");
  }

  // A comma continues the initializer rather than starting another field.
  let members = class_members("class A { a = 1, b = 2 }");
  assert_eq!(members.len(), 1);
  let ClassMember::Field(field) = &members[0] else {
    panic!("expected field, got {:?}", members[0]);
  };
  let Some(value) = &field.stx.value else {
    panic!("expected initializer");
  };
  let Expr::Binary(seq) = value.stx.as_ref() else {
    panic!("expected comma expression, got {value:?}");
  };
  assert_eq!(seq.stx.operator, OperatorName::Comma);
  assert!(matches!(seq.stx.right.stx.as_ref(), Expr::Binary(_)));
}

#[test]
fn fields_on_one_line_need_a_semicolon() {
  let err =
    parse_with_options("class A { a = 1 b = 2 }", ParseOptions::with_class_fields()).unwrap_err();
  assert_eq!(err.loc.0, 16);
}
