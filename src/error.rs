use std::fmt;

/// Bail out of the current function with an `InternalError` that records where it happened.
/// Reserved for broken invariants, never for bad user input.
#[macro_export]
macro_rules! internal_error {
    ($($message:tt)*) => {
        Err($crate::error::InternalError::boxed(file!(), line!(), format!($($message)*)))
    };
}

#[derive(Debug)]
pub struct InternalError {
    pub file: &'static str,
    pub line: u32,
    pub message: String,
}
impl InternalError {
    pub fn boxed(file: &'static str, line: u32, message: String) -> BoxedErrorTrait {
        Box::new(InternalError { file, line, message })
    }
}
impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "internal error originated at {}:{}: {}", self.file, self.line, self.message)
    }
}
impl std::error::Error for InternalError {

}

/// What an engine with structural requirements objected to
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShapeViolation {
    /// a told sentence has a clause without exactly one positive literal
    NonDefiniteClause,
    /// a query that is not a single proposition
    NonPropositionQuery,
}

/// A sentence was rejected at the boundary of a knowledge base.
/// Nothing about the rejected sentence has been stored.
#[derive(Debug)]
pub struct UnsupportedSentenceShape {
    pub violation: ShapeViolation,
    pub sentence: String,
}
impl fmt::Display for UnsupportedSentenceShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.violation {
            ShapeViolation::NonDefiniteClause => write!(f,
                "`{}` does not reduce to definite clauses; this knowledge base only accepts definite clauses",
                self.sentence),
            ShapeViolation::NonPropositionQuery => write!(f,
                "`{}` is not a proposition; this knowledge base only answers queries about single propositions",
                self.sentence),
        }
    }
}
impl std::error::Error for UnsupportedSentenceShape {

}

pub type BoxedErrorTrait = Box<(dyn std::error::Error + 'static)>;
