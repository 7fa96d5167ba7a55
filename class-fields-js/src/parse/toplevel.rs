use super::expr::pat::ParsePatternRules;
use super::ParseCtx;
use super::Parser;
use crate::ast::node::Node;
use crate::ast::stx::TopLevel;
use crate::error::SyntaxResult;
use crate::token::TT;
use tracing::debug;

impl ParseCtx {
  /// A script's top level, where `await` and `yield` are plain identifiers.
  pub fn top_level() -> ParseCtx {
    ParseCtx {
      rules: ParsePatternRules {
        await_allowed: true,
        yield_allowed: true,
      },
    }
  }
}

impl<'a> Parser<'a> {
  /// Parses the whole source. The resulting node always spans the entire input, including leading and trailing trivia.
  pub fn parse_top_level(&mut self) -> SyntaxResult<Node<TopLevel>> {
    let body = self.stmts(ParseCtx::top_level(), TT::EOF)?;
    self.require(TT::EOF)?;
    debug_assert!(!self.session.private_names.is_inside_class());
    debug!(statements = body.len(), "parsed top level");
    Ok(Node::new(self.source_range(), TopLevel { body }))
  }
}
