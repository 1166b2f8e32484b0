//! Payroll Store
//!
//! Relational store for the YeoConnect payroll dataset: employees, their
//! contracts, payroll run history, phone sales and user accounts.
//! The schema is owned by the migrations in [`infra::storage::migrations`];
//! everything else is typed access on top of it.

// Public exports
pub mod contract;
pub use contract::{
    Contract, ContractType, Employee, NewContract, NewEmployee, NewPayrollRun, NewPhoneSale,
    NewUser, PayrollError, PayrollRun, PhoneSale, StoreError, User,
};

pub mod config;
pub use config::StoreConfig;

pub mod store;
pub use store::PayrollStore;

pub mod domain;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod infra;
