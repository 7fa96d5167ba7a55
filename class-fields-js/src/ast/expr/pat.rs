use derive_visitor::{Drive, DriveMut};
use serde::Serialize;

// Not really a pattern but functions similarly so kept here in pat.rs.
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ClassOrFuncName {
  #[drive(skip)]
  pub name: String,
}

// Only identifier bindings are supported; destructuring is not.
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct IdPat {
  #[drive(skip)]
  pub name: String,
}
