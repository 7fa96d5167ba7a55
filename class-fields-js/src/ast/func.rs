use derive_more::derive::From;
use derive_visitor::{Drive, DriveMut};
use serde::Serialize;

use super::{expr::Expr, node::Node, stmt::{decl::ParamDecl, Stmt}};

// This common type exists for better downstream usage, as one type is easier to match on and wrangle than many different types (ArrowFuncExpr, MethodDef, FuncDecl, etc.).
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct Func {
  #[drive(skip)]
  pub arrow: bool,
  #[drive(skip)]
  pub async_: bool,
  #[drive(skip)]
  pub generator: bool,
  pub parameters: Vec<Node<ParamDecl>>,
  pub body: FuncBody,
}

// A function body is different from a block statement, as the scopes are different.
#[derive(Debug, Drive, DriveMut, From, Serialize)]
pub enum FuncBody {
  Block(Vec<Node<Stmt>>),
  // If arrow function.
  Expression(Node<Expr>),
}
