use class_fields_js::{parse_with_options, ParseOptions};
use serde_json::json;

#[test]
fn field_definitions_serialise_with_locations() {
  let ast = parse_with_options("class A { #a = 1 }", ParseOptions::with_class_fields()).unwrap();
  let value = serde_json::to_value(&ast).unwrap();
  assert_eq!(value["loc"], json!([0, 18]));
  let class = &value["stx"]["body"][0]["stx"];
  assert_eq!(class["$t"], "ClassDecl");
  assert_eq!(
    class["stx"]["members"][0],
    json!({
      "loc": [10, 16],
      "stx": {
        "$t": "FieldDefinition",
        "loc": [10, 16],
        "stx": {
          "key": { "Private": { "loc": [10, 12], "stx": { "name": "a" } } },
          "computed": false,
          "value": {
            "loc": [15, 16],
            "stx": { "$t": "LitNum", "loc": [15, 16], "stx": { "value": 1.0 } }
          }
        }
      }
    })
  );
}

#[test]
fn methods_and_fields_keep_source_order() {
  let ast = parse_with_options(
    "class A { a; b() {} static c() {} d = 1 }",
    ParseOptions::with_class_fields(),
  )
  .unwrap();
  let value = serde_json::to_value(&ast).unwrap();
  let kinds: Vec<&str> = value["stx"]["body"][0]["stx"]["stx"]["members"]
    .as_array()
    .unwrap()
    .iter()
    .map(|m| m["stx"]["$t"].as_str().unwrap())
    .collect();
  assert_eq!(kinds, vec![
    "FieldDefinition",
    "MethodDefinition",
    "MethodDefinition",
    "FieldDefinition",
  ]);
}
