use crate::error::SyntaxErrorType;
use crate::error::SyntaxResult;
use crate::loc::Loc;
use crate::token::TT;
use ahash::HashMap;
use ahash::HashMapExt;
use ahash::HashSet;
use ahash::HashSetExt;

/// Private names declared and used by the classes currently being parsed, one frame per class
/// nesting level.
///
/// A use can appear before its declaration (`class A { a = this.#b; #b }`), so unresolved uses
/// are only reported once the outermost class finishes. Declarations are visible to nested
/// classes; uses that a nested class can't resolve move outward when it finishes.
#[derive(Debug, Default)]
pub struct PrivateNameScopes {
  declared: Vec<HashSet<String>>,
  // Name to the location of its first unresolved use.
  unresolved: Vec<HashMap<String, Loc>>,
}

impl PrivateNameScopes {
  pub fn depth(&self) -> usize {
    self.declared.len()
  }

  pub fn is_inside_class(&self) -> bool {
    !self.declared.is_empty()
  }

  pub fn enter_class(&mut self) {
    self.declared.push(HashSet::new());
    self.unresolved.push(HashMap::new());
  }

  /// Pops the innermost class. Its unresolved uses move to the enclosing class, keeping any use
  /// the enclosing class already recorded for the same name. For the outermost class, the earliest
  /// remaining use is an error. Returns how many names moved outward.
  pub fn exit_class(&mut self) -> SyntaxResult<usize> {
    let declared = self.declared.pop().unwrap_or_default();
    let unresolved = self.unresolved.pop().unwrap_or_default();
    let remaining = unresolved
      .into_iter()
      .filter(|(name, _)| !declared.contains(name));
    match self.unresolved.last_mut() {
      Some(parent) => {
        let mut propagated = 0;
        for (name, loc) in remaining {
          parent.entry(name).or_insert(loc);
          propagated += 1;
        }
        Ok(propagated)
      }
      None => match remaining.map(|(_, loc)| loc).min_by_key(|loc| loc.0) {
        Some(loc) => Err(loc.error(SyntaxErrorType::UndeclaredPrivateName, Some(TT::PrivateName))),
        None => Ok(0),
      },
    }
  }

  /// Declares a private name in the innermost class. Names only clash within the same class.
  pub fn declare(&mut self, name: &str, loc: Loc) -> SyntaxResult<()> {
    if let Some(declared) = self.declared.last_mut() {
      if !declared.insert(name.to_string()) {
        return Err(loc.error(SyntaxErrorType::DuplicatePrivateElement, Some(TT::PrivateName)));
      };
    };
    if let Some(unresolved) = self.unresolved.last_mut() {
      unresolved.remove(name);
    };
    Ok(())
  }

  /// Records a use of a private name. Names declared so far by this class or any enclosing class
  /// resolve immediately. A use outside of any class can never resolve.
  pub fn record_use(&mut self, name: &str, loc: Loc) -> SyntaxResult<()> {
    if self.declared.iter().rev().any(|frame| frame.contains(name)) {
      return Ok(());
    };
    let Some(unresolved) = self.unresolved.last_mut() else {
      return Err(loc.error(SyntaxErrorType::UndeclaredPrivateName, Some(TT::PrivateName)));
    };
    if !unresolved.contains_key(name) {
      unresolved.insert(name.to_string(), loc);
    };
    Ok(())
  }
}
