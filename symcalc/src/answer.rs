use symcalc_compute::SymExpr;

/// The result of the last successful operation, available to the next expression as `Ans`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answer(Option<SymExpr>);

impl Answer {
    /// An empty answer, as at the start of a session.
    pub fn empty() -> Self {
        Self(None)
    }

    pub fn new(value: SymExpr) -> Self {
        Self(Some(value))
    }

    /// Returns the stored value, if there is one.
    pub fn value(&self) -> Option<&SymExpr> {
        self.0.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl From<SymExpr> for Answer {
    fn from(value: SymExpr) -> Self {
        Self::new(value)
    }
}

impl From<Option<SymExpr>> for Answer {
    fn from(value: Option<SymExpr>) -> Self {
        Self(value)
    }
}
