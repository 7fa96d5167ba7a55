//! Class fields and private names.
//!
//! When enabled, class bodies may contain fields (`a = 1;`, `[k];`, `#a = 1;`) alongside methods,
//! and `obj.#name` accesses private names. Every private name used inside a class must be
//! declared by that class or an enclosing one, though possibly later in the class body.
//!
//! `arguments` and `super` are rejected anywhere inside a field initializer, including inside
//! nested functions and classes. `arguments` is also rejected as a property or key name there.

pub mod scope;

use super::class_or_object::MemberHead;
use super::expr::lit::normalise_identifier;
use super::expr::Asi;
use super::ParseCtx;
use super::Parser;
use crate::ast::class_or_object::ClassMember;
use crate::ast::class_or_object::ClassOrObjKey;
use crate::ast::class_or_object::FieldDef;
use crate::ast::class_or_object::MethodKind;
use crate::ast::class_or_object::PrivateName;
use crate::ast::expr::Expr;
use crate::ast::node::Node;
use crate::error::SyntaxErrorType;
use crate::error::SyntaxResult;
use crate::loc::Loc;
use crate::token::Token;
use crate::token::TT;
use scope::PrivateNameScopes;
use std::mem;
use tracing::debug_span;
use tracing::trace;

/// State for a single parse that nested grammar functions share. A new parser starts with an empty session, so nothing carries over between parses.
#[derive(Debug, Default)]
pub struct ParseSession {
  pub private_names: PrivateNameScopes,
  // Whether we're inside a field initializer, including any function or class nested in it.
  pub in_field_value: bool,
}

impl<'a> Parser<'a> {
  fn class_fields_supported(&self) -> bool {
    self.opts.edition() >= 8
  }

  /// Parses one element of a class body. Returns None for a stray `;`.
  pub fn class_element(&mut self, ctx: ParseCtx) -> SyntaxResult<Option<Node<ClassMember>>> {
    if self.consume_if(TT::Semicolon).is_match() {
      return Ok(None);
    };
    let t = self.peek();
    if t.typ == TT::PrivateName && self.class_fields_supported() {
      return Ok(Some(self.private_field(ctx)?.into_wrapped()));
    };

    let start = self.checkpoint();
    // `async = 1`, `async;` and `async }` come back as a plain head keyed `async`.
    let head = self.class_member_head(ctx)?;

    if self.is_public_field(&head) {
      trace!(key = head.key.static_name(), "class_fields.public_field");
      let value = self.maybe_field_value(ctx)?;
      let loc = self.since_checkpoint(&start);
      self.field_terminator()?;
      let computed = matches!(head.key, ClassOrObjKey::Computed(_));
      let field = Node::new(loc, FieldDef {
        key: head.key,
        computed,
        value,
      });
      return Ok(Some(field.into_wrapped()));
    };

    let method = self.class_method_rest(ctx, head)?;
    let loc = self.since_checkpoint(&start);
    Ok(Some(Node::new(loc, method).into_wrapped()))
  }

  // A plain member without a parameter list is a field. Constructors, getters, setters, static, async and generator members are always methods.
  fn is_public_field(&mut self, head: &MemberHead) -> bool {
    self.class_fields_supported()
      && head.kind == MethodKind::Method
      && !head.has_modifiers()
      && self.peek().typ != TT::ParenthesisOpen
  }

  fn private_field(&mut self, ctx: ParseCtx) -> SyntaxResult<Node<FieldDef>> {
    let start = self.checkpoint();
    let key = self.private_name()?;
    if key.stx.name == "constructor" {
      return Err(key.error(SyntaxErrorType::ReservedConstructorField));
    };
    self.session.private_names.declare(&key.stx.name, key.loc)?;
    let value = self.maybe_field_value(ctx)?;
    let loc = self.since_checkpoint(&start);
    self.field_terminator()?;
    Ok(Node::new(loc, FieldDef {
      key: ClassOrObjKey::Private(key),
      computed: false,
      value,
    }))
  }

  /// Parses `= <expr>` if present. The initializer is a full expression, so `a = 1, b = 2` is one field whose value is a comma expression.
  pub fn maybe_field_value(&mut self, ctx: ParseCtx) -> SyntaxResult<Option<Node<Expr>>> {
    if !self.consume_if(TT::Equals).is_match() {
      return Ok(None);
    };
    let value = self.with_field_value_flag(true, |p| {
      p.expr_with_asi(ctx, [TT::Semicolon, TT::BraceClose], &mut Asi::can())
    })?;
    Ok(Some(value))
  }

  /// Consumes the `;` after a field, or accepts an inserted one.
  pub fn field_terminator(&mut self) -> SyntaxResult<()> {
    if self.consume_if(TT::Semicolon).is_match() {
      return Ok(());
    };
    let t = self.peek();
    if t.preceded_by_line_terminator || matches!(t.typ, TT::BraceClose | TT::EOF) {
      return Ok(());
    };
    Err(self.token_error(&t, SyntaxErrorType::UnexpectedToken))
  }

  /// Parses a `#name` token. A `#` with no name fails at whatever follows it.
  pub fn private_name(&mut self) -> SyntaxResult<Node<PrivateName>> {
    let t = self.require(TT::PrivateName)?;
    if t.loc.len() <= 1 {
      let next = self.peek();
      return Err(self.token_error(&next, SyntaxErrorType::UnexpectedToken));
    };
    let Some(name) = normalise_identifier(self.str(Loc(t.loc.0 + 1, t.loc.1))) else {
      return Err(t.error(SyntaxErrorType::UnexpectedToken));
    };
    Ok(Node::new(t.loc, PrivateName { name }))
  }

  /// Runs `f` with a new private name scope for a class. The scope is exited even if `f` fails; if both fail, `f`'s error wins.
  pub fn with_private_scope<T, F>(&mut self, f: F) -> SyntaxResult<T>
  where
    F: FnOnce(&mut Self) -> SyntaxResult<T>,
  {
    if !self.opts.class_fields {
      return f(self);
    };
    self.session.private_names.enter_class();
    let depth = self.session.private_names.depth();
    let span = debug_span!("class_fields.class_body", depth, propagated = tracing::field::Empty);
    let _entered = span.enter();
    let res = f(self);
    let exited = self.session.private_names.exit_class();
    let value = res?;
    let propagated = exited?;
    span.record("propagated", propagated);
    Ok(value)
  }

  fn with_field_value_flag<T, F>(&mut self, in_field_value: bool, f: F) -> SyntaxResult<T>
  where
    F: FnOnce(&mut Self) -> SyntaxResult<T>,
  {
    let saved = mem::replace(&mut self.session.in_field_value, in_field_value);
    let res = f(self);
    self.session.in_field_value = saved;
    res
  }

  pub fn record_private_use(&mut self, name: &Node<PrivateName>) -> SyntaxResult<()> {
    self.session.private_names.record_use(&name.stx.name, name.loc)
  }

  /// `delete obj.#a` is never allowed. Parentheses don't help, as the grouping is transparent.
  pub fn check_delete_operand(&self, delete: &Token, operand: &Node<Expr>) -> SyntaxResult<()> {
    match operand.stx.as_ref() {
      Expr::PrivateMember(_) => Err(delete.error(SyntaxErrorType::PrivateDeleteForbidden)),
      _ => Ok(()),
    }
  }

  pub fn check_arguments_ident(&self, t: &Token, name: &str) -> SyntaxResult<()> {
    if self.session.in_field_value && name == "arguments" {
      return Err(t.error(SyntaxErrorType::ArgumentsInFieldInitializer));
    };
    Ok(())
  }

  pub fn check_super_atom(&self, t: &Token) -> SyntaxResult<()> {
    if self.session.in_field_value {
      return Err(t.error(SyntaxErrorType::SuperInFieldInitializer));
    };
    Ok(())
  }
}
