//! Classification of constraint violations reported by the database driver.

use sea_orm::{DbErr, SqlErr};

/// Whether the error is a unique index or primary key collision.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Whether the error is a foreign key violation, such as deleting a referenced row.
pub fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}
