//! Contract layer - public models and error types
//!
//! Models here are storage-agnostic. Conversions to and from SeaORM
//! entities live in `infra::storage::mapper`.

pub mod error;
pub mod model;

pub use error::{PayrollError, StoreError};
pub use model::{
    Contract, ContractType, Employee, NewContract, NewEmployee, NewPayrollRun, NewPhoneSale,
    NewUser, PayrollRun, PhoneSale, User, ADMIN_ROLE,
};
