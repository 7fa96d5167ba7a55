use super::super::expr::pat::ParsePatternRules;
use super::super::expr::Asi;
use super::super::ParseCtx;
use super::super::Parser;
use crate::ast::node::Node;
use crate::ast::stmt::decl::ClassDecl;
use crate::ast::stmt::decl::FuncDecl;
use crate::ast::stmt::decl::VarDecl;
use crate::ast::stmt::decl::VarDeclMode;
use crate::ast::stmt::decl::VarDeclarator;
use crate::error::SyntaxErrorType;
use crate::error::SyntaxResult;
use crate::operator::OperatorName;
use crate::operator::OPERATORS;
use crate::token::TT;

impl<'a> Parser<'a> {
  pub fn var_decl_mode(&mut self) -> SyntaxResult<VarDeclMode> {
    let t = self.consume();
    Ok(match t.typ {
      TT::KeywordLet => VarDeclMode::Let,
      TT::KeywordConst => VarDeclMode::Const,
      TT::KeywordVar => VarDeclMode::Var,
      _ => return Err(self.token_error(&t, SyntaxErrorType::ExpectedSyntax("variable declaration"))),
    })
  }

  /// Parses a variable declaration, which contains one or more declarators, each with an optional initializer. Examples of variable declarations:
  /// - `const a = 1`
  /// - `let a, b = 2, c`
  /// - `var a`
  pub fn var_decl(&mut self, ctx: ParseCtx) -> SyntaxResult<Node<VarDecl>> {
    self.with_loc(|p| {
      let mode = p.var_decl_mode()?;
      let mut declarators = Vec::new();
      loop {
        let pattern = p.id_pat(ctx)?;
        let mut asi = Asi::can();
        let initializer = p.consume_if(TT::Equals).and_then(|| {
          p.expr_with_min_prec(
            ctx,
            OPERATORS[&OperatorName::Assignment].precedence,
            [TT::Semicolon, TT::Comma],
            &mut asi,
          )
        })?;
        declarators.push(VarDeclarator {
          pattern,
          initializer,
        });
        if p.consume_if(TT::Semicolon).is_match() || asi.did_end_with_asi {
          break;
        };
        let t = p.peek();
        if matches!(t.typ, TT::EOF | TT::BraceClose)
          || (t.preceded_by_line_terminator && t.typ != TT::Comma)
        {
          break;
        };
        p.require(TT::Comma)?;
      }
      Ok(VarDecl { mode, declarators })
    })
  }

  pub fn func_decl(&mut self, ctx: ParseCtx) -> SyntaxResult<Node<FuncDecl>> {
    self.with_loc(|p| {
      let is_async = p.consume_if(TT::KeywordAsync).is_match();
      let start = p.require(TT::KeywordFunction)?;
      let generator = p.consume_if(TT::Asterisk).is_match();
      // The function can be named "yield" or "await" even if it's a generator or async function.
      let name_ctx = ctx.with_rules(ParsePatternRules {
        await_allowed: true,
        yield_allowed: true,
      });
      let Some(name) = p.maybe_class_or_func_name(name_ctx) else {
        return Err(start.error(SyntaxErrorType::ExpectedSyntax("function name")));
      };
      let function = p.non_arrow_func(ctx, is_async, generator)?;
      Ok(FuncDecl { name, function })
    })
  }

  pub fn class_decl(&mut self, ctx: ParseCtx) -> SyntaxResult<Node<ClassDecl>> {
    self.with_loc(|p| {
      let start = p.require(TT::KeywordClass)?;
      p.with_private_scope(|p| {
        let Some(name) = p.maybe_class_or_func_name(ctx) else {
          return Err(start.error(SyntaxErrorType::ExpectedSyntax("class name")));
        };
        let extends = p
          .consume_if(TT::KeywordExtends)
          .and_then(|| p.expr(ctx, [TT::BraceOpen]))?;
        let members = p.class_body(ctx)?;
        Ok(ClassDecl {
          name,
          extends,
          members,
        })
      })
    })
  }
}
