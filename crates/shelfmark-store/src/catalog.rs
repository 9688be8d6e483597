//! Catalog repository
//!
//! CatalogStore owns the SQLite connection and implements every operation
//! over books, users, and loans. Expected business-rule failures surface as
//! `Ok(false)` (or `None`/empty for queries); only storage faults are errors.

use crate::db;
use crate::errors::{from_rusqlite, is_constraint_violation, Result};
use crate::migrations;
use rusqlite::{Connection, OptionalExtension};
use shelfmark_core::model::{Book, Loan, User, UserSummary};
use std::path::Path;
use tracing::{debug, warn};

/// SQLite-backed catalog repository
///
/// Holds the process-wide connection for its whole lifetime. Construction
/// runs schema migrations, so every instance observes a ready catalog.
/// Multi-statement mutations (borrow, return) run inside an explicit
/// transaction; dropping the transaction on an early exit rolls it back, so
/// partial application is impossible.
pub struct CatalogStore {
    conn: Connection,
}

impl CatalogStore {
    /// Open (or create) a catalog database at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = db::open(path)?;
        Self::from_connection(conn)
    }

    /// Open an in-memory catalog (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = db::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(mut conn: Connection) -> Result<Self> {
        db::configure(&conn)?;
        migrations::apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    /// Add a new book in the Available state
    ///
    /// Returns `Ok(false)` if a book with this ISBN already exists. The
    /// uniqueness constraint is authoritative: the insert is attempted and
    /// the constraint violation caught, rather than pre-checking existence.
    pub fn add_book(&self, title: &str, author: &str, isbn: &str) -> Result<bool> {
        let inserted = self.conn.execute(
            "INSERT INTO books (isbn, title, author, is_borrowed) VALUES (?1, ?2, ?3, 0)",
            rusqlite::params![isbn, title, author],
        );

        match inserted {
            Ok(_) => {
                debug!(isbn, title, "book added");
                Ok(true)
            }
            Err(e) if is_constraint_violation(&e) => {
                warn!(isbn, "add_book refused: ISBN already exists");
                Ok(false)
            }
            Err(e) => Err(from_rusqlite("add_book", e)),
        }
    }

    /// Remove a book
    ///
    /// Returns `Ok(false)` if the book does not exist or is currently
    /// borrowed (it must be returned first). The guard and the delete are a
    /// single conditional statement.
    pub fn remove_book(&self, isbn: &str) -> Result<bool> {
        let deleted = self
            .conn
            .execute(
                "DELETE FROM books WHERE isbn = ?1 AND is_borrowed = 0",
                [isbn],
            )
            .map_err(|e| from_rusqlite("remove_book", e))?;

        if deleted == 0 {
            warn!(isbn, "remove_book refused: missing or borrowed");
            return Ok(false);
        }
        debug!(isbn, "book removed");
        Ok(true)
    }

    /// Register a new user
    ///
    /// Returns `Ok(false)` if the user ID is already taken.
    pub fn register_user(&self, name: &str, user_id: &str) -> Result<bool> {
        let inserted = self.conn.execute(
            "INSERT INTO users (user_id, name) VALUES (?1, ?2)",
            rusqlite::params![user_id, name],
        );

        match inserted {
            Ok(_) => {
                debug!(user_id, name, "user registered");
                Ok(true)
            }
            Err(e) if is_constraint_violation(&e) => {
                warn!(user_id, "register_user refused: ID already exists");
                Ok(false)
            }
            Err(e) => Err(from_rusqlite("register_user", e)),
        }
    }

    /// Remove a user
    ///
    /// Returns `Ok(false)` while the user holds at least one active loan.
    /// Deleting a user that does not exist succeeds vacuously.
    pub fn remove_user(&mut self, user_id: &str) -> Result<bool> {
        let tx = self
            .conn
            .transaction()
            .map_err(|e| from_rusqlite("remove_user", e))?;

        let active_loans: i64 = tx
            .query_row(
                "SELECT COUNT(*) FROM loans WHERE user_id = ?1",
                [user_id],
                |row| row.get(0),
            )
            .map_err(|e| from_rusqlite("remove_user", e))?;

        if active_loans > 0 {
            warn!(user_id, active_loans, "remove_user refused: active loans");
            return Ok(false);
        }

        tx.execute("DELETE FROM users WHERE user_id = ?1", [user_id])
            .map_err(|e| from_rusqlite("remove_user", e))?;
        tx.commit().map_err(|e| from_rusqlite("remove_user", e))?;

        debug!(user_id, "user removed");
        Ok(true)
    }

    /// Borrow a book for a user
    ///
    /// Returns `Ok(false)` if the book does not exist, the user does not
    /// exist, or the book is already borrowed. On success the borrowed flag
    /// and the loan row change as one atomic unit.
    pub fn borrow_book(&mut self, isbn: &str, user_id: &str) -> Result<bool> {
        let tx = self
            .conn
            .transaction()
            .map_err(|e| from_rusqlite("borrow_book", e))?;

        let book_borrowed: Option<bool> = tx
            .query_row(
                "SELECT is_borrowed FROM books WHERE isbn = ?1",
                [isbn],
                |row| {
                    let flag: i64 = row.get(0)?;
                    Ok(flag != 0)
                },
            )
            .optional()
            .map_err(|e| from_rusqlite("borrow_book", e))?;

        let user_exists: Option<String> = tx
            .query_row(
                "SELECT user_id FROM users WHERE user_id = ?1",
                [user_id],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| from_rusqlite("borrow_book", e))?;

        match (book_borrowed, user_exists) {
            (Some(false), Some(_)) => {}
            _ => {
                // Dropping the transaction rolls it back
                warn!(isbn, user_id, "borrow_book refused");
                return Ok(false);
            }
        }

        tx.execute("UPDATE books SET is_borrowed = 1 WHERE isbn = ?1", [isbn])
            .map_err(|e| from_rusqlite("borrow_book", e))?;
        tx.execute(
            "INSERT INTO loans (user_id, isbn) VALUES (?1, ?2)",
            rusqlite::params![user_id, isbn],
        )
        .map_err(|e| from_rusqlite("borrow_book", e))?;
        tx.commit().map_err(|e| from_rusqlite("borrow_book", e))?;

        debug!(isbn, user_id, "book borrowed");
        Ok(true)
    }

    /// Return a borrowed book
    ///
    /// Returns `Ok(false)` if no loan exists for this exact (user, book)
    /// pair. On success the loan row and the borrowed flag change as one
    /// atomic unit.
    pub fn return_book(&mut self, isbn: &str, user_id: &str) -> Result<bool> {
        let tx = self
            .conn
            .transaction()
            .map_err(|e| from_rusqlite("return_book", e))?;

        let removed = tx
            .execute(
                "DELETE FROM loans WHERE user_id = ?1 AND isbn = ?2",
                rusqlite::params![user_id, isbn],
            )
            .map_err(|e| from_rusqlite("return_book", e))?;

        if removed == 0 {
            warn!(isbn, user_id, "return_book refused: no such loan");
            return Ok(false);
        }

        tx.execute("UPDATE books SET is_borrowed = 0 WHERE isbn = ?1", [isbn])
            .map_err(|e| from_rusqlite("return_book", e))?;
        tx.commit().map_err(|e| from_rusqlite("return_book", e))?;

        debug!(isbn, user_id, "book returned");
        Ok(true)
    }

    /// Search books by title, author, or ISBN
    ///
    /// Case-insensitive substring match on title and author, substring match
    /// on ISBN. An empty query matches every row.
    pub fn search_book(&self, query: &str) -> Result<Vec<Book>> {
        let pattern = format!("%{}%", query.to_lowercase());

        let mut stmt = self
            .conn
            .prepare(
                "SELECT isbn, title, author, is_borrowed FROM books
                 WHERE LOWER(title) LIKE ?1 OR LOWER(author) LIKE ?1 OR isbn LIKE ?1
                 ORDER BY isbn",
            )
            .map_err(|e| from_rusqlite("search_book", e))?;

        let books = stmt
            .query_map([&pattern], row_to_book)
            .map_err(|e| from_rusqlite("search_book", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("search_book", e))?;

        Ok(books)
    }

    /// List all books, optionally only the available ones
    pub fn list_books(&self, available_only: bool) -> Result<Vec<Book>> {
        let sql = if available_only {
            "SELECT isbn, title, author, is_borrowed FROM books
             WHERE is_borrowed = 0 ORDER BY isbn"
        } else {
            "SELECT isbn, title, author, is_borrowed FROM books ORDER BY isbn"
        };

        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| from_rusqlite("list_books", e))?;

        let books = stmt
            .query_map([], row_to_book)
            .map_err(|e| from_rusqlite("list_books", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("list_books", e))?;

        Ok(books)
    }

    /// List all users, each annotated with the ISBNs currently out
    ///
    /// The borrowed set is joined from loan rows at query time; it is never
    /// stored on the user record.
    pub fn list_users(&self) -> Result<Vec<UserSummary>> {
        let mut stmt = self
            .conn
            .prepare("SELECT user_id, name FROM users ORDER BY user_id")
            .map_err(|e| from_rusqlite("list_users", e))?;

        let users = stmt
            .query_map([], |row| {
                Ok(User {
                    user_id: row.get(0)?,
                    name: row.get(1)?,
                })
            })
            .map_err(|e| from_rusqlite("list_users", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("list_users", e))?;

        let mut loan_stmt = self
            .conn
            .prepare("SELECT isbn FROM loans WHERE user_id = ?1 ORDER BY isbn")
            .map_err(|e| from_rusqlite("list_users", e))?;

        let mut summaries = Vec::with_capacity(users.len());
        for user in users {
            let borrowed_isbns = loan_stmt
                .query_map([&user.user_id], |row| row.get(0))
                .map_err(|e| from_rusqlite("list_users", e))?
                .collect::<std::result::Result<Vec<String>, _>>()
                .map_err(|e| from_rusqlite("list_users", e))?;

            summaries.push(UserSummary {
                user,
                borrowed_isbns,
            });
        }

        Ok(summaries)
    }

    /// List every active loan pair
    pub fn list_loans(&self) -> Result<Vec<Loan>> {
        let mut stmt = self
            .conn
            .prepare("SELECT user_id, isbn FROM loans ORDER BY user_id, isbn")
            .map_err(|e| from_rusqlite("list_loans", e))?;

        let loans = stmt
            .query_map([], |row| {
                Ok(Loan {
                    user_id: row.get(0)?,
                    isbn: row.get(1)?,
                })
            })
            .map_err(|e| from_rusqlite("list_loans", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("list_loans", e))?;

        Ok(loans)
    }

    /// List the books a user currently has out
    ///
    /// Returns `None` when the user does not exist, `Some(vec![])` when the
    /// user exists but holds no loans, so the two cases are distinguishable.
    pub fn list_user_loans(&self, user_id: &str) -> Result<Option<Vec<Book>>> {
        let exists = self
            .conn
            .query_row(
                "SELECT user_id FROM users WHERE user_id = ?1",
                [user_id],
                |_| Ok(()),
            )
            .optional()
            .map_err(|e| from_rusqlite("list_user_loans", e))?;

        if exists.is_none() {
            return Ok(None);
        }

        let mut stmt = self
            .conn
            .prepare(
                "SELECT b.isbn, b.title, b.author, b.is_borrowed
                 FROM books b
                 JOIN loans l ON b.isbn = l.isbn
                 WHERE l.user_id = ?1
                 ORDER BY b.isbn",
            )
            .map_err(|e| from_rusqlite("list_user_loans", e))?;

        let books = stmt
            .query_map([user_id], row_to_book)
            .map_err(|e| from_rusqlite("list_user_loans", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("list_user_loans", e))?;

        Ok(Some(books))
    }
}

/// Map a books row to a Book value object
fn row_to_book(row: &rusqlite::Row<'_>) -> rusqlite::Result<Book> {
    let is_borrowed: i64 = row.get(3)?;
    Ok(Book {
        isbn: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        is_borrowed: is_borrowed != 0,
    })
}
