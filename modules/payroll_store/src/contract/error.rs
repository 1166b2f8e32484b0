//! Error types for the payroll store
//!
//! `StoreError` is what the repositories return; constraint violations
//! reported by the database are lifted into dedicated variants so callers
//! can tell a duplicate NI number from a lost connection.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// A UNIQUE constraint rejected the write (duplicate `ni_number`, `username`)
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    /// A FOREIGN KEY constraint rejected the write (orphaned `employee_id`)
    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    /// Row to update does not exist
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    /// Input rejected before reaching the database
    #[error("validation error: {0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(DbErr),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::UniqueViolation(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::ForeignKeyViolation(msg),
            _ => Self::Database(err),
        }
    }
}

impl StoreError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::UniqueViolation(_))
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self, Self::ForeignKeyViolation(_))
    }
}

/// Payroll run errors
#[derive(Debug, Error)]
pub enum PayrollError {
    #[error("employee with id {0} not found")]
    EmployeeNotFound(i32),

    #[error("no contract found for employee {0}")]
    NoContract(i32),

    /// Contract lacks a term the employee's contract type needs
    #[error("{term} is required for {contract_type} contract")]
    MissingContractTerm {
        contract_type: &'static str,
        term: &'static str,
    },

    #[error("unknown contract type: {0}")]
    UnknownContractType(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
