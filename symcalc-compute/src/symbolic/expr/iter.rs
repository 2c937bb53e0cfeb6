use super::{Primary, SymExpr};

/// An iterator that traverses the tree of expressions in left-to-right pre-order (i.e.
/// depth-first, parents before children), including the arguments of function calls.
///
/// This iterator is created by [`SymExpr::iter`].
pub struct ExprIter<'a> {
    stack: Vec<&'a SymExpr>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator rooted at the given expression.
    pub fn new(expr: &'a SymExpr) -> Self {
        Self { stack: vec![expr] }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a SymExpr;

    fn next(&mut self) -> Option<Self::Item> {
        let expr = self.stack.pop()?;
        match expr {
            SymExpr::Primary(Primary::Call(_, args)) => self.stack.extend(args.iter().rev()),
            SymExpr::Primary(_) => (),
            SymExpr::Add(children) | SymExpr::Mul(children) => {
                self.stack.extend(children.iter().rev());
            },
            SymExpr::Exp(lhs, rhs) => {
                self.stack.push(rhs);
                self.stack.push(lhs);
            },
        }
        Some(expr)
    }
}
