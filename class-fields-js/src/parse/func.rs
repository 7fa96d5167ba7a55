use super::expr::pat::ParsePatternRules;
use super::ParseCtx;
use super::Parser;
use crate::ast::class_or_object::MethodKind;
use crate::ast::func::Func;
use crate::ast::node::Node;
use crate::ast::stmt::decl::ParamDecl;
use crate::ast::stmt::Stmt;
use crate::error::SyntaxErrorType;
use crate::error::SyntaxResult;
use crate::token::TT;

impl<'a> Parser<'a> {
  pub fn func_params(&mut self, ctx: ParseCtx) -> SyntaxResult<Vec<Node<ParamDecl>>> {
    self.require(TT::ParenthesisOpen)?;
    self.list_with_loc(TT::Comma, TT::ParenthesisClose, |p| {
      let rest = p.consume_if(TT::DotDotDot).is_match();
      let pattern = p.id_pat(ctx)?;
      let default_value = p
        .consume_if(TT::Equals)
        .and_then(|| p.expr(ctx, [TT::Comma, TT::ParenthesisClose]))?;
      Ok(ParamDecl {
        rest,
        pattern,
        default_value,
      })
    })
  }

  pub fn func_block_body(&mut self, ctx: ParseCtx) -> SyntaxResult<Vec<Node<Stmt>>> {
    self.require(TT::BraceOpen)?;
    let body = self.stmts(ctx, TT::BraceClose)?;
    self.require(TT::BraceClose)?;
    Ok(body)
  }

  /// Parses the parameters and body of a function declaration, function expression, or method.
  pub fn non_arrow_func(
    &mut self,
    ctx: ParseCtx,
    is_async: bool,
    generator: bool,
  ) -> SyntaxResult<Node<Func>> {
    // Parameters and body use the function's own context, not the parent's.
    let fn_ctx = ctx.with_rules(ParsePatternRules {
      await_allowed: !is_async && ctx.rules.await_allowed,
      yield_allowed: !generator && ctx.rules.yield_allowed,
    });
    self.with_loc(|p| {
      let parameters = p.func_params(fn_ctx)?;
      let body = p.func_block_body(fn_ctx)?.into();
      Ok(Func {
        arrow: false,
        async_: is_async,
        generator,
        parameters,
        body,
      })
    })
  }

  pub fn method_func(
    &mut self,
    ctx: ParseCtx,
    kind: MethodKind,
    is_async: bool,
    generator: bool,
  ) -> SyntaxResult<Node<Func>> {
    let func = self.non_arrow_func(ctx, is_async, generator)?;
    let arity = func.stx.parameters.len();
    match kind {
      MethodKind::Get if arity != 0 => Err(func.error(SyntaxErrorType::ExpectedSyntax(
        "getter without parameters",
      ))),
      MethodKind::Set if arity != 1 || func.stx.parameters[0].stx.rest => Err(func.error(
        SyntaxErrorType::ExpectedSyntax("setter with exactly one parameter"),
      )),
      _ => Ok(func),
    }
  }
}
