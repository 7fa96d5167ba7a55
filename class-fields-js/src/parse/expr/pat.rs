use super::ParseCtx;
use super::Parser;
use crate::ast::expr::pat::ClassOrFuncName;
use crate::ast::expr::pat::IdPat;
use crate::ast::node::Node;
use crate::error::SyntaxResult;
use crate::token::TT;
use crate::token::UNRESERVED_KEYWORDS;

#[derive(Clone, Copy)]
pub struct ParsePatternRules {
  // `await` is not allowed as an arrow function parameter or a parameter/variable inside an async function.
  pub await_allowed: bool,
  // `yield` is not allowed as a parameter/variable inside a generator function.
  pub yield_allowed: bool,
}

pub fn is_valid_pattern_identifier(typ: TT, rules: ParsePatternRules) -> bool {
  match typ {
    TT::Identifier => true,
    TT::KeywordAwait => rules.await_allowed,
    TT::KeywordYield => rules.yield_allowed,
    t => UNRESERVED_KEYWORDS.contains(&t),
  }
}

impl<'a> Parser<'a> {
  pub fn maybe_class_or_func_name(&mut self, ctx: ParseCtx) -> Option<Node<ClassOrFuncName>> {
    self
      .consume_if_pred(|t| is_valid_pattern_identifier(t.typ, ctx.rules))
      .map(|t| {
        Node::new(t.loc, ClassOrFuncName {
          name: self.string(t.loc),
        })
      })
  }

  /// Parses an identifier pattern, such as a parameter or variable name.
  pub fn id_pat(&mut self, ctx: ParseCtx) -> SyntaxResult<Node<IdPat>> {
    self.with_loc(|p| {
      let name = p.id_name(ctx)?;
      Ok(IdPat { name })
    })
  }
}
