use derive_more::derive::From;
use derive_visitor::{Drive, DriveMut};
use serde::Serialize;

use crate::token::TT;

use super::{expr::{Expr, IdExpr}, func::Func, node::Node};

/// This is a node as the key may not the same as source[node.loc], due to decoding/normalization.
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ClassOrObjMemberDirectKey {
  #[drive(skip)]
  pub key: String,
  // The original token type is stored here to determine if it was a valid keyword/identifier, useful for shorthands.
  #[drive(skip)]
  pub tt: TT,
}

/// `#name`, as a class element key or as the property of a member access. `name` excludes the `#`.
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct PrivateName {
  #[drive(skip)]
  pub name: String,
}

// WARNING: Direct cannot be represented with an IdExpr, as it's not a usage of a variable.
#[derive(Debug, Drive, DriveMut, Serialize)]
pub enum ClassOrObjKey {
  // Identifier, keyword, string, or number.
  Direct(Node<ClassOrObjMemberDirectKey>),
  Computed(Node<Expr>),
  // Only valid in classes.
  Private(Node<PrivateName>),
}

impl ClassOrObjKey {
  /// The statically known name of this key, if it's not computed.
  pub fn static_name(&self) -> Option<&str> {
    match self {
      ClassOrObjKey::Direct(k) => Some(&k.stx.key),
      ClassOrObjKey::Computed(_) => None,
      ClassOrObjKey::Private(k) => Some(&k.stx.name),
    }
  }
}

#[derive(Eq, PartialEq, Clone, Copy, Debug, Serialize, Drive, DriveMut)]
pub enum MethodKind {
  Constructor,
  Method,
  Get,
  Set,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct MethodDef {
  pub key: ClassOrObjKey,
  #[drive(skip)]
  pub static_: bool,
  pub kind: MethodKind,
  pub func: Node<Func>,
}

/// A class field like `a`, `a = 1`, `[k] = 1`, `#a = 1`. `computed` is never set for a private key.
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct FieldDef {
  pub key: ClassOrObjKey,
  #[drive(skip)]
  pub computed: bool,
  pub value: Option<Node<Expr>>,
}

#[derive(Debug, Drive, DriveMut, From, Serialize)]
#[serde(tag = "$t")]
pub enum ClassMember {
  #[serde(rename = "MethodDefinition")]
  Method(Node<MethodDef>),
  #[serde(rename = "FieldDefinition")]
  Field(Node<FieldDef>),
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub enum ObjMemberType {
  Valued {
    key: ClassOrObjKey,
    val: Node<Expr>,
  },
  Method {
    key: ClassOrObjKey,
    kind: MethodKind,
    func: Node<Func>,
  },
  Shorthand {
    id: Node<IdExpr>,
  },
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ObjMember {
  pub typ: ObjMemberType,
}
