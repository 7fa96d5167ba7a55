use ast::node::Node;
use ast::stx::TopLevel;
use error::SyntaxResult;
use lex::Lexer;
use parse::Parser;
use tracing::debug_span;

pub mod ast;
pub mod char;
pub mod error;
pub mod lex;
pub mod loc;
pub mod num;
pub mod operator;
pub mod parse;
pub mod token;
#[cfg(test)]
mod util {
  pub mod test;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptions {
  /// Either an edition number like `8`, or the year it was published like `2017`.
  pub ecma_version: u32,
  /// Enables class fields and private names.
  pub class_fields: bool,
}

impl Default for ParseOptions {
  fn default() -> Self {
    ParseOptions {
      ecma_version: 9,
      class_fields: false,
    }
  }
}

impl ParseOptions {
  pub fn with_class_fields() -> Self {
    ParseOptions {
      class_fields: true,
      ..Default::default()
    }
  }

  /// The edition number, with years normalised (`2017` is edition `8`).
  pub fn edition(&self) -> u32 {
    if self.ecma_version >= 2015 {
      self.ecma_version - 2009
    } else {
      self.ecma_version
    }
  }
}

pub fn parse(source: &str) -> SyntaxResult<Node<TopLevel>> {
  parse_with_options(source, ParseOptions::default())
}

pub fn parse_with_options(source: &str, opts: ParseOptions) -> SyntaxResult<Node<TopLevel>> {
  let _span = debug_span!(
    "parse",
    ecma_version = opts.edition(),
    class_fields = opts.class_fields
  )
  .entered();
  let lexer = if opts.class_fields {
    Lexer::with_private_names(source)
  } else {
    Lexer::new(source)
  };
  let mut parser = Parser::new(lexer, opts);
  parser.parse_top_level()
}
