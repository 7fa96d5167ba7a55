use crate::error::{SyntaxError, SyntaxErrorType};
use crate::loc::Loc;
use derive_visitor::{Drive, DriveMut};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Debug, Formatter};

#[derive(Drive, DriveMut)]
pub struct Node<S: Drive + DriveMut> {
  #[drive(skip)]
  pub loc: Loc,
  pub stx: Box<S>,
}

impl<S: Drive + DriveMut> Node<S> {
  pub fn new(loc: Loc, stx: S) -> Node<S> {
    Node {
      loc,
      stx: Box::new(stx),
    }
  }

  pub fn into_stx<T: From<S> + Drive + DriveMut>(self) -> Node<T> {
    Node {
      loc: self.loc,
      stx: Box::new(T::from(*self.stx)),
    }
  }

  /// Wraps this node as a variant of a node enum like `Expr`, keeping the location.
  pub fn into_wrapped<T: From<Node<S>> + Drive + DriveMut>(self) -> Node<T> {
    let loc = self.loc;
    Node::new(loc, T::from(self))
  }

  /// Maps the syntax, keeping the location.
  pub fn map_stx<T: Drive + DriveMut, F: FnOnce(S) -> T>(self, f: F) -> Node<T> {
    Node {
      loc: self.loc,
      stx: Box::new(f(*self.stx)),
    }
  }

  /// Wraps the node inside another node with the same loc, with syntax derived from the provided callback.
  pub fn wrap<T: Drive + DriveMut, F: FnOnce(Node<S>) -> T>(self, f: F) -> Node<T> {
    let loc = self.loc;
    let stx = f(self);
    Node::new(loc, stx)
  }

  /// Create an error at this node's location.
  pub fn error(&self, typ: SyntaxErrorType) -> SyntaxError {
    self.loc.error(typ, None)
  }
}

impl<S: Debug + Drive + DriveMut> Debug for Node<S> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    self.stx.fmt(f)
  }
}

impl<S: Serialize + Drive + DriveMut> Serialize for Node<S> {
  fn serialize<Se: Serializer>(&self, serializer: Se) -> Result<Se::Ok, Se::Error> {
    let mut node = serializer.serialize_struct("Node", 2)?;
    node.serialize_field("loc", &self.loc)?;
    node.serialize_field("stx", &self.stx)?;
    node.end()
  }
}

#[cfg(test)]
mod tests {
  use crate::ast::expr::pat::IdPat;
  use crate::ast::node::Node;
  use crate::loc::Loc;
  use serde_json::json;

  #[test]
  fn test_node_serialises_loc_and_stx() {
    let node = Node::new(Loc(3, 4), IdPat { name: "a".to_string() });
    assert_eq!(
      serde_json::to_value(&node).unwrap(),
      json!({ "loc": [3, 4], "stx": { "name": "a" } }),
    );
  }

  #[test]
  fn test_map_stx_keeps_loc() {
    let node = Node::new(Loc(1, 2), IdPat { name: "a".to_string() });
    let mapped = node.map_stx(|IdPat { name }| IdPat { name: name.to_uppercase() });
    assert_eq!(mapped.loc, Loc(1, 2));
    assert_eq!(mapped.stx.name, "A");
  }
}
