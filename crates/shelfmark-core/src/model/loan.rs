use serde::{Deserialize, Serialize};

/// Loan - one user currently holding one book
///
/// The pair is the composite key: a user cannot hold the same book twice,
/// and a book has at most one active borrower. A loan row existing is
/// definitionally equivalent to the referenced book's borrowed flag being
/// set; the store enforces that equivalence atomically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    /// Borrowing user
    pub user_id: String,

    /// Borrowed book
    pub isbn: String,
}

impl Loan {
    /// Create a new Loan pair
    pub fn new(user_id: impl Into<String>, isbn: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            isbn: isbn.into(),
        }
    }
}
