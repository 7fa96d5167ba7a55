pub mod lit;
pub mod pat;
pub mod util;

use lit::normalise_identifier;
use pat::is_valid_pattern_identifier;
use pat::ParsePatternRules;
use util::lhs_expr_to_assign_target;

use super::ParseCtx;
use super::Parser;
use crate::ast::expr::ArrowFuncExpr;
use crate::ast::expr::BinaryExpr;
use crate::ast::expr::CallArg;
use crate::ast::expr::CallExpr;
use crate::ast::expr::ClassExpr;
use crate::ast::expr::ComputedMemberExpr;
use crate::ast::expr::CondExpr;
use crate::ast::expr::Expr;
use crate::ast::expr::FuncExpr;
use crate::ast::expr::IdExpr;
use crate::ast::expr::MemberExpr;
use crate::ast::expr::PrivateMemberExpr;
use crate::ast::expr::SuperExpr;
use crate::ast::expr::ThisExpr;
use crate::ast::expr::UnaryExpr;
use crate::ast::expr::UnaryPostfixExpr;
use crate::ast::func::Func;
use crate::ast::node::Node;
use crate::ast::stmt::decl::ParamDecl;
use crate::error::SyntaxErrorType;
use crate::error::SyntaxResult;
use crate::lex::KEYWORDS_MAPPING;
use crate::operator::Associativity;
use crate::operator::OperatorName;
use crate::operator::OPERATORS;
use crate::parse::operator::MULTARY_OPERATOR_MAPPING;
use crate::parse::operator::UNARY_OPERATOR_MAPPING;
use crate::token::Token;
use crate::token::TT;

pub struct Asi {
  pub can_end_with_asi: bool,
  pub did_end_with_asi: bool,
}

impl Asi {
  pub fn can() -> Asi {
    Asi {
      can_end_with_asi: true,
      did_end_with_asi: false,
    }
  }

  pub fn no() -> Asi {
    Asi {
      can_end_with_asi: false,
      did_end_with_asi: false,
    }
  }
}

impl<'a> Parser<'a> {
  pub fn call_args(&mut self, ctx: ParseCtx) -> SyntaxResult<Vec<Node<CallArg>>> {
    self.list_with_loc(TT::Comma, TT::ParenthesisClose, |p| {
      let spread = p.consume_if(TT::DotDotDot).is_match();
      let value = p.expr(ctx, [TT::Comma, TT::ParenthesisClose])?;
      Ok(CallArg { spread, value })
    })
  }

  pub fn expr<const N: usize>(&mut self, ctx: ParseCtx, terminators: [TT; N]) -> SyntaxResult<Node<Expr>> {
    self.expr_with_min_prec(ctx, 1, terminators, &mut Asi::no())
  }

  pub fn expr_with_asi<const N: usize>(
    &mut self,
    ctx: ParseCtx,
    terminators: [TT; N],
    asi: &mut Asi,
  ) -> SyntaxResult<Node<Expr>> {
    self.expr_with_min_prec(ctx, 1, terminators, asi)
  }

  /// Parses a parenthesised expression like `(a + b)`. The parentheses don't produce a node.
  pub fn grouping(&mut self, ctx: ParseCtx, asi: &mut Asi) -> SyntaxResult<Node<Expr>> {
    self.require(TT::ParenthesisOpen)?;
    let expr = self.expr_with_min_prec(ctx, 1, [TT::ParenthesisClose], asi)?;
    self.require(TT::ParenthesisClose)?;
    Ok(expr)
  }

  /// Parses an arrow function's parameters up to and including the `=>`.
  fn arrow_func_params(
    &mut self,
    ctx: ParseCtx,
    is_async: bool,
  ) -> SyntaxResult<Vec<Node<ParamDecl>>> {
    let param_ctx = ctx.with_rules(ParsePatternRules {
      await_allowed: !is_async && ctx.rules.await_allowed,
      ..ctx.rules
    });
    let [t0, t1] = self.peek_n::<2>();
    let parameters = if is_valid_pattern_identifier(t0.typ, param_ctx.rules)
      && t1.typ == TT::EqualsChevronRight
    {
      // Single-unparenthesised-parameter arrow function.
      let pattern = self.id_pat(param_ctx)?;
      vec![Node::new(pattern.loc, ParamDecl {
        rest: false,
        pattern,
        default_value: None,
      })]
    } else {
      self.func_params(param_ctx)?
    };
    let arrow = self.require(TT::EqualsChevronRight)?;
    if arrow.preceded_by_line_terminator {
      // Illegal under Automatic Semicolon Insertion rules.
      return Err(arrow.error(SyntaxErrorType::LineTerminatorAfterArrowFunctionParameters));
    };
    Ok(parameters)
  }

  pub fn arrow_func_expr<const N: usize>(
    &mut self,
    ctx: ParseCtx,
    terminators: [TT; N],
  ) -> SyntaxResult<Node<ArrowFuncExpr>> {
    let func = self.with_loc(|p| {
      // `async => 1` uses `async` as the parameter name.
      let is_async = p.peek_n::<2>()[1].typ != TT::EqualsChevronRight
        && p.consume_if(TT::KeywordAsync).is_match();
      let parameters = p.arrow_func_params(ctx, is_async)?;
      let fn_body_ctx = ctx.with_rules(ParsePatternRules {
        await_allowed: !is_async && ctx.rules.await_allowed,
        ..ctx.rules
      });
      let body = match p.peek().typ {
        TT::BraceOpen => p.func_block_body(fn_body_ctx)?.into(),
        // The body is an assignment expression, so a comma ends it.
        _ => p
          .expr_with_min_prec(
            fn_body_ctx,
            OPERATORS[&OperatorName::Assignment].precedence,
            terminators,
            &mut Asi::can(),
          )?
          .into(),
      };
      Ok(Func {
        arrow: true,
        async_: is_async,
        generator: false,
        parameters,
        body,
      })
    })?;
    Ok(Node::new(func.loc, ArrowFuncExpr { func }))
  }

  pub fn arrow_function_or_grouping_expr<const N: usize>(
    &mut self,
    ctx: ParseCtx,
    terminators: [TT; N],
    asi: &mut Asi,
  ) -> SyntaxResult<Node<Expr>> {
    // Try and parse as arrow function signature first.
    // If we fail, backtrack and parse as grouping instead.
    // After we see `=>`, we assume it's definitely an arrow function and do not backtrack, so errors in the body are reported as is.
    let cp = self.checkpoint();
    let is_arrow = match self.arrow_func_params(ctx, false) {
      Ok(_) => true,
      Err(err) if err.typ == SyntaxErrorType::LineTerminatorAfterArrowFunctionParameters => {
        return Err(err)
      }
      Err(_) => false,
    };
    self.restore_checkpoint(cp);
    if is_arrow {
      Ok(self.arrow_func_expr(ctx, terminators)?.into_wrapped())
    } else {
      self.grouping(ctx, asi)
    }
  }

  pub fn func_expr(&mut self, ctx: ParseCtx) -> SyntaxResult<Node<FuncExpr>> {
    self.with_loc(|p| {
      let is_async = p.consume_if(TT::KeywordAsync).is_match();
      p.require(TT::KeywordFunction)?;
      let generator = p.consume_if(TT::Asterisk).is_match();
      let name = p.maybe_class_or_func_name(ctx);
      let func = p.non_arrow_func(ctx, is_async, generator)?;
      Ok(FuncExpr { name, func })
    })
  }

  pub fn class_expr(&mut self, ctx: ParseCtx) -> SyntaxResult<Node<ClassExpr>> {
    self.with_loc(|p| {
      p.require(TT::KeywordClass)?;
      p.with_private_scope(|p| {
        let name = p.maybe_class_or_func_name(ctx);
        let extends = p
          .consume_if(TT::KeywordExtends)
          .and_then(|| p.expr(ctx, [TT::BraceOpen]))?;
        let members = p.class_body(ctx)?;
        Ok(ClassExpr {
          name,
          extends,
          members,
        })
      })
    })
  }

  pub fn id_expr(&mut self, ctx: ParseCtx) -> SyntaxResult<Node<IdExpr>> {
    self.with_loc(|p| {
      let name = p.id_name(ctx)?;
      Ok(IdExpr { name })
    })
  }

  /// Parses a raw valid identifier name as a string. To parse an IdExpr, use `id_expr`.
  pub fn id_name(&mut self, ctx: ParseCtx) -> SyntaxResult<String> {
    let t = self.consume();
    if !is_valid_pattern_identifier(t.typ, ctx.rules) {
      return Err(self.token_error(&t, SyntaxErrorType::ExpectedSyntax("identifier")));
    };
    let name = self.ident_text(&t)?;
    self.check_arguments_ident(&t, &name)?;
    Ok(name)
  }

  /// The name an identifier token spells, with escapes decoded, so that `\u0061` and `a` are the same name.
  pub fn ident_text(&self, t: &Token) -> SyntaxResult<String> {
    normalise_identifier(self.str(t.loc))
      .ok_or_else(|| t.error(SyntaxErrorType::ExpectedSyntax("valid escape sequence")))
  }

  fn expr_operand<const N: usize>(
    &mut self,
    ctx: ParseCtx,
    terminators: [TT; N],
    asi: &mut Asi,
  ) -> SyntaxResult<Node<Expr>> {
    let [t0, t1, t2] = self.peek_n::<3>();
    // Handle unary operators before operand.
    if let Some(operator) = UNARY_OPERATOR_MAPPING.get(&t0.typ).filter(|operator| {
      // Treat await/yield as operators only when they're keywords (not allowed as identifiers).
      match operator.name {
        OperatorName::Await => !ctx.rules.await_allowed,
        OperatorName::Yield => !ctx.rules.yield_allowed,
        _ => true,
      }
    }) {
      return Ok(self.with_loc(|p| {
        let op = p.consume();
        let operator = if operator.name == OperatorName::Yield
          && p.consume_if(TT::Asterisk).is_match()
        {
          &OPERATORS[&OperatorName::YieldDelegated]
        } else {
          *operator
        };
        let next_min_prec =
          operator.precedence + (operator.associativity == Associativity::Left) as u8;
        let next = p.peek();
        // `yield` can appear without an operand.
        let has_operand = operator.name != OperatorName::Yield
          || !(next.preceded_by_line_terminator
            || terminators.contains(&next.typ)
            || matches!(
              next.typ,
              TT::EOF
                | TT::Semicolon
                | TT::Comma
                | TT::ParenthesisClose
                | TT::BracketClose
                | TT::BraceClose
                | TT::Colon
            ));
        let operand = if has_operand {
          p.expr_with_min_prec(ctx, next_min_prec, terminators, asi)?
        } else {
          Node::new(op.loc, IdExpr {
            name: "undefined".to_string(),
          })
          .into_wrapped()
        };
        if operator.name == OperatorName::Delete {
          p.check_delete_operand(&op, &operand)?;
        };
        Ok(UnaryExpr {
          operator: operator.name,
          argument: operand,
        })
      })?.into_wrapped());
    };

    if t0.typ == TT::KeywordAsync && !t1.preceded_by_line_terminator {
      match t1.typ {
        TT::ParenthesisOpen => {
          // Could also be a call to a function named `async`.
          let cp = self.checkpoint();
          self.consume();
          let is_arrow = self.arrow_func_params(ctx, true).is_ok();
          self.restore_checkpoint(cp);
          if is_arrow {
            return Ok(self.arrow_func_expr(ctx, terminators)?.into_wrapped());
          };
        }
        TT::KeywordFunction => return Ok(self.func_expr(ctx)?.into_wrapped()),
        // `async x => {}`.
        typ if is_valid_pattern_identifier(typ, ctx.rules) && t2.typ == TT::EqualsChevronRight => {
          return Ok(self.arrow_func_expr(ctx, terminators)?.into_wrapped());
        }
        _ => {}
      };
    };

    if is_valid_pattern_identifier(t0.typ, ctx.rules) {
      return Ok(if t1.typ == TT::EqualsChevronRight {
        // Single-unparenthesised-parameter arrow function.
        self.arrow_func_expr(ctx, terminators)?.into_wrapped()
      } else {
        self.id_expr(ctx)?.into_wrapped()
      });
    };

    #[rustfmt::skip]
    let expr: Node<Expr> = match t0.typ {
      TT::BracketOpen => self.lit_arr(ctx)?.into_wrapped(),
      TT::BraceOpen => self.lit_obj(ctx)?.into_wrapped(),
      TT::KeywordClass => self.class_expr(ctx)?.into_wrapped(),
      TT::KeywordFunction => self.func_expr(ctx)?.into_wrapped(),
      TT::KeywordSuper => {
        self.check_super_atom(&t0)?;
        self.super_expr()?.into_wrapped()
      }
      TT::KeywordThis => self.this_expr()?.into_wrapped(),
      TT::LiteralTrue | TT::LiteralFalse => self.lit_bool()?.into_wrapped(),
      TT::LiteralNull => self.lit_null()?.into_wrapped(),
      TT::LiteralNumber => self.lit_num()?.into_wrapped(),
      TT::LiteralString => self.lit_str()?.into_wrapped(),
      TT::ParenthesisOpen => self.arrow_function_or_grouping_expr(ctx, terminators, asi)?,
      _ => return Err(self.token_error(&t0, SyntaxErrorType::ExpectedSyntax("expression operand"))),
    };
    Ok(expr)
  }

  pub fn expr_with_min_prec<const N: usize>(
    &mut self,
    ctx: ParseCtx,
    min_prec: u8,
    terminators: [TT; N],
    asi: &mut Asi,
  ) -> SyntaxResult<Node<Expr>> {
    let mut left = self.expr_operand(ctx, terminators, asi)?;

    loop {
      let cp = self.checkpoint();
      let t = self.consume();

      if terminators.contains(&t.typ) {
        self.restore_checkpoint(cp);
        break;
      };

      match t.typ {
        // Automatic Semicolon Insertion rules: no newline between operand and postfix operator.
        TT::PlusPlus | TT::HyphenHyphen if !t.preceded_by_line_terminator => {
          let operator_name = match t.typ {
            TT::PlusPlus => OperatorName::PostfixIncrement,
            _ => OperatorName::PostfixDecrement,
          };
          let operator = &OPERATORS[&operator_name];
          if operator.precedence < min_prec {
            self.restore_checkpoint(cp);
            break;
          };
          left = Node::new(left.loc + t.loc, UnaryPostfixExpr {
            operator: operator_name,
            argument: left,
          }).into_wrapped();
          continue;
        }
        _ => {}
      };

      match MULTARY_OPERATOR_MAPPING.get(&t.typ) {
        None => {
          if asi.can_end_with_asi
            && (t.preceded_by_line_terminator
              || t.typ == TT::BraceClose
              || t.typ == TT::EOF)
          {
            // Automatic Semicolon Insertion.
            self.restore_checkpoint(cp);
            asi.did_end_with_asi = true;
            break;
          };
          return Err(self.token_error(&t, SyntaxErrorType::UnexpectedToken));
        }
        Some(operator) => {
          if operator.precedence < min_prec {
            self.restore_checkpoint(cp);
            break;
          };

          let next_min_prec =
            operator.precedence + (operator.associativity == Associativity::Left) as u8;

          left = match operator.name {
            OperatorName::Call => {
              let arguments = self.call_args(ctx)?;
              let end = self.since_checkpoint(&cp);
              Node::new(left.loc + end, CallExpr {
                callee: left,
                arguments,
              }).into_wrapped()
            }
            OperatorName::ComputedMemberAccess => {
              let member = self.expr(ctx, [TT::BracketClose])?;
              let end = self.require(TT::BracketClose)?;
              Node::new(left.loc + end.loc, ComputedMemberExpr {
                object: left,
                member,
              }).into_wrapped()
            }
            OperatorName::Conditional => {
              let consequent = self.expr(ctx, [TT::Colon])?;
              self.require(TT::Colon)?;
              let alternate = self.expr_with_min_prec(
                ctx,
                OPERATORS[&OperatorName::ConditionalAlternate].precedence,
                terminators,
                asi,
              )?;
              Node::new(left.loc + alternate.loc, CondExpr {
                test: left,
                consequent,
                alternate,
              }).into_wrapped()
            }
            OperatorName::MemberAccess => {
              let right_tok = self.peek();
              match right_tok.typ {
                TT::PrivateName => {
                  let right = self.private_name()?;
                  self.record_private_use(&right)?;
                  Node::new(left.loc + right.loc, PrivateMemberExpr {
                    left,
                    right,
                  }).into_wrapped()
                }
                typ if typ == TT::Identifier || KEYWORDS_MAPPING.contains_key(&typ) => {
                  self.consume();
                  let right = self.ident_text(&right_tok)?;
                  self.check_arguments_ident(&right_tok, &right)?;
                  Node::new(left.loc + right_tok.loc, MemberExpr {
                    left,
                    right,
                  }).into_wrapped()
                }
                _ => {
                  return Err(self.token_error(
                    &right_tok,
                    SyntaxErrorType::ExpectedSyntax("member access property"),
                  ))
                }
              }
            }
            _ => {
              if operator.name.is_assignment() {
                left = lhs_expr_to_assign_target(left, operator.name)?;
              };
              let right = self.expr_with_min_prec(
                ctx,
                next_min_prec,
                terminators,
                asi,
              )?;
              Node::new(left.loc + right.loc, BinaryExpr {
                operator: operator.name,
                left,
                right,
              }).into_wrapped()
            }
          };
        }
      };
    }

    Ok(left)
  }

  pub fn super_expr(&mut self) -> SyntaxResult<Node<SuperExpr>> {
    self.with_loc(|p| {
      p.require(TT::KeywordSuper)?;
      Ok(SuperExpr {})
    })
  }

  pub fn this_expr(&mut self) -> SyntaxResult<Node<ThisExpr>> {
    self.with_loc(|p| {
      p.require(TT::KeywordThis)?;
      Ok(ThisExpr {})
    })
  }
}
