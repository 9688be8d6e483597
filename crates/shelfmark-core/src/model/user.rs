use serde::{Deserialize, Serialize};

/// User - a registered borrower
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Primary key, immutable once registered
    pub user_id: String,

    /// Display name
    pub name: String,
}

impl User {
    /// Create a new User
    pub fn new(name: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
        }
    }
}

/// A user annotated with the ISBNs they currently hold
///
/// The borrowed set is a projection computed from loan rows at query time.
/// It is never stored on the user record, so it cannot drift from the loans
/// relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// The user record itself
    pub user: User,

    /// ISBNs of books this user currently has out
    pub borrowed_isbns: Vec<String>,
}

impl UserSummary {
    /// Number of books currently out
    pub fn loan_count(&self) -> usize {
        self.borrowed_isbns.len()
    }
}

impl std::fmt::Display for UserSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "User: {} (ID: {}), Borrowed Books: {}",
            self.user.name,
            self.user.user_id,
            self.loan_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = User::new("Alice", "U1");
        assert_eq!(user.name, "Alice");
        assert_eq!(user.user_id, "U1");
    }

    #[test]
    fn test_summary_display() {
        let summary = UserSummary {
            user: User::new("Alice", "U1"),
            borrowed_isbns: vec!["111".to_string(), "222".to_string()],
        };

        assert_eq!(summary.loan_count(), 2);
        assert_eq!(
            summary.to_string(),
            "User: Alice (ID: U1), Borrowed Books: 2"
        );
    }
}
