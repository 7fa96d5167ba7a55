use crate::ast::expr::Expr;
use crate::ast::node::Node;
use crate::error::SyntaxErrorType;
use crate::error::SyntaxResult;
use crate::operator::OperatorName;

/// Checks that the left side of an assignment like `a = 1` or `a.#b += 1` is something that can be assigned to.
/// Only identifiers and member accesses qualify, as destructuring patterns aren't supported.
pub fn lhs_expr_to_assign_target(
  lhs: Node<Expr>,
  operator_name: OperatorName,
) -> SyntaxResult<Node<Expr>> {
  debug_assert!(operator_name.is_assignment());
  match lhs.stx.as_ref() {
    Expr::Id(_) | Expr::Member(_) | Expr::ComputedMember(_) | Expr::PrivateMember(_) => Ok(lhs),
    _ => Err(lhs.error(SyntaxErrorType::InvalidAssigmentTarget)),
  }
}
