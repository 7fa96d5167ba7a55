use super::ParseCtx;
use super::Parser;
use crate::ast::class_or_object::ClassMember;
use crate::ast::class_or_object::ClassOrObjKey;
use crate::ast::class_or_object::ClassOrObjMemberDirectKey;
use crate::ast::class_or_object::MethodDef;
use crate::ast::class_or_object::MethodKind;
use crate::ast::class_or_object::ObjMember;
use crate::ast::class_or_object::ObjMemberType;
use crate::ast::node::Node;
use crate::error::SyntaxErrorType;
use crate::error::SyntaxResult;
use crate::lex::KEYWORDS_MAPPING;
use crate::parse::expr::pat::is_valid_pattern_identifier;
use crate::token::TT;

/// Everything before a member's parameter list or value: its modifiers and key.
pub struct MemberHead {
  pub static_: bool,
  pub async_: bool,
  pub generator: bool,
  pub kind: MethodKind,
  pub key: ClassOrObjKey,
}

impl MemberHead {
  pub fn has_modifiers(&self) -> bool {
    self.static_ || self.async_ || self.generator || self.kind != MethodKind::Method
  }
}

impl<'a> Parser<'a> {
  pub fn class_body(&mut self, ctx: ParseCtx) -> SyntaxResult<Vec<Node<ClassMember>>> {
    self.require(TT::BraceOpen)?;
    let mut members = Vec::new();
    while !self.consume_if(TT::BraceClose).is_match() {
      let member = if self.opts.class_fields {
        self.class_element(ctx)?
      } else if self.consume_if(TT::Semicolon).is_match() {
        None
      } else {
        Some(self.class_member(ctx)?)
      };
      members.extend(member);
    }
    Ok(members)
  }

  /// Parses a class method, getter, setter, or constructor.
  pub fn class_member(&mut self, ctx: ParseCtx) -> SyntaxResult<Node<ClassMember>> {
    let method = self.with_loc(|p| {
      let head = p.class_member_head(ctx)?;
      p.class_method_rest(ctx, head)
    })?;
    Ok(method.into_wrapped())
  }

  pub fn class_member_head(&mut self, ctx: ParseCtx) -> SyntaxResult<MemberHead> {
    let mut head = self.member_head(ctx, true)?;
    let constructor_loc = match &head.key {
      ClassOrObjKey::Direct(k)
        if k.stx.key == "constructor" && matches!(k.stx.tt, TT::Identifier | TT::LiteralString) =>
      {
        Some(k.loc)
      }
      _ => None,
    };
    if let Some(loc) = constructor_loc.filter(|_| !head.static_) {
      if head.has_modifiers() {
        return Err(loc.error(SyntaxErrorType::ExpectedSyntax("plain constructor method"), None));
      };
      head.kind = MethodKind::Constructor;
    };
    Ok(head)
  }

  /// Parses the parameters and body after a class member's head.
  pub fn class_method_rest(&mut self, ctx: ParseCtx, head: MemberHead) -> SyntaxResult<MethodDef> {
    let t = self.peek();
    if t.typ != TT::ParenthesisOpen {
      return Err(self.token_error(&t, SyntaxErrorType::UnexpectedToken));
    };
    let func = self.method_func(ctx, head.kind, head.async_, head.generator)?;
    Ok(MethodDef {
      key: head.key,
      static_: head.static_,
      kind: head.kind,
      func,
    })
  }

  // It's strictly one of these:
  // - static? async? '*'? <key> '(' ...
  // - static? [ get | set ] <key> '(' ...
  // where <key> = <ident> | <keyword> | <str> | <num> | '[' <expr> ']'
  // A modifier keyword followed by something that can't start a key is the name instead.
  fn member_head(&mut self, ctx: ParseCtx, allow_static: bool) -> SyntaxResult<MemberHead> {
    let static_ = allow_static && self.member_modifier(TT::KeywordStatic, false);
    let mut generator = self.consume_if(TT::Asterisk).is_match();
    let mut async_ = false;
    let mut kind = MethodKind::Method;
    if !generator {
      if self.opts.edition() >= 8 && self.member_modifier(TT::KeywordAsync, true) {
        async_ = true;
        generator = self.consume_if(TT::Asterisk).is_match();
      } else if self.member_modifier(TT::KeywordGet, false) {
        kind = MethodKind::Get;
      } else if self.member_modifier(TT::KeywordSet, false) {
        kind = MethodKind::Set;
      };
    };
    let key = self.class_or_obj_key(ctx)?;
    Ok(MemberHead {
      static_,
      async_,
      generator,
      kind,
      key,
    })
  }

  fn member_modifier(&mut self, typ: TT, same_line_only: bool) -> bool {
    let [t0, t1] = self.peek_n::<2>();
    if t0.typ != typ
      || matches!(
        t1.typ,
        TT::ParenthesisOpen
          | TT::Equals
          | TT::Semicolon
          | TT::BraceClose
          | TT::Comma
          | TT::Colon
          | TT::EOF
      )
      || (same_line_only && t1.preceded_by_line_terminator)
    {
      return false;
    };
    self.consume();
    true
  }

  /// Parses a class or object key like `a`, `'a'`, `"a"`, `1`, `[1]`.
  pub fn class_or_obj_key(&mut self, ctx: ParseCtx) -> SyntaxResult<ClassOrObjKey> {
    Ok(if self.consume_if(TT::BracketOpen).is_match() {
      let key = self.expr(ctx, [TT::BracketClose])?;
      self.require(TT::BracketClose)?;
      ClassOrObjKey::Computed(key)
    } else {
      ClassOrObjKey::Direct(self.with_loc(|p| {
        let t = p.peek();
        let key = match t.typ {
          TT::LiteralString => p.lit_str_val()?,
          TT::LiteralNumber => p.lit_num_val()?.to_string(),
          TT::Identifier => {
            let t = p.consume();
            let key = p.ident_text(&t)?;
            p.check_arguments_ident(&t, &key)?;
            key
          }
          // Any keyword is allowed as a key.
          typ if KEYWORDS_MAPPING.contains_key(&typ) => p.consume_as_string(),
          _ => return Err(p.token_error(&t, SyntaxErrorType::UnexpectedToken)),
        };
        Ok(ClassOrObjMemberDirectKey { key, tt: t.typ })
      })?)
    })
  }

  pub fn obj_member(&mut self, ctx: ParseCtx) -> SyntaxResult<ObjMember> {
    let [t0, t1] = self.peek_n::<2>();
    // Shorthand like `{ a }`.
    if is_valid_pattern_identifier(t0.typ, ctx.rules)
      && matches!(t1.typ, TT::Comma | TT::BraceClose)
    {
      let id = self.id_expr(ctx)?;
      return Ok(ObjMember {
        typ: ObjMemberType::Shorthand { id },
      });
    };
    let head = self.member_head(ctx, false)?;
    let typ = if head.has_modifiers() || self.peek().typ == TT::ParenthesisOpen {
      let func = self.method_func(ctx, head.kind, head.async_, head.generator)?;
      ObjMemberType::Method {
        key: head.key,
        kind: head.kind,
        func,
      }
    } else {
      self.require(TT::Colon)?;
      let val = self.expr(ctx, [TT::Comma, TT::BraceClose])?;
      ObjMemberType::Valued { key: head.key, val }
    };
    Ok(ObjMember { typ })
  }
}
