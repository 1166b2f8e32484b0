//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{
    Contract, Employee, NewContract, NewEmployee, NewPayrollRun, NewPhoneSale, NewUser,
    PayrollRun, PhoneSale, StoreError, User,
};
use async_trait::async_trait;
use chrono::NaiveDate;

pub type StoreResult<T> = Result<T, StoreError>;

/// Repository for employees
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Hire an employee
    async fn create(&self, employee: &NewEmployee) -> StoreResult<Employee>;

    async fn find_by_id(&self, employee_id: i32) -> StoreResult<Option<Employee>>;

    async fn find_by_ni_number(&self, ni_number: &str) -> StoreResult<Option<Employee>>;

    /// Employees whose last name contains `last_name`
    async fn search_by_last_name(&self, last_name: &str) -> StoreResult<Vec<Employee>>;

    async fn list_all(&self) -> StoreResult<Vec<Employee>>;

    /// Overwrite every field of an existing employee
    async fn update(&self, employee: &Employee) -> StoreResult<Employee>;

    /// Delete an employee and, by cascade, their contracts, payroll runs and
    /// phone sales. Returns whether a row was removed.
    async fn delete(&self, employee_id: i32) -> StoreResult<bool>;
}

/// Repository for contracts
#[async_trait]
pub trait ContractRepository: Send + Sync {
    async fn create(&self, contract: &NewContract) -> StoreResult<Contract>;

    async fn find_by_id(&self, contract_id: i32) -> StoreResult<Option<Contract>>;

    /// All contracts of an employee, newest `effective_from` first
    async fn list_for_employee(&self, employee_id: i32) -> StoreResult<Vec<Contract>>;

    /// Contract with the latest `effective_from`
    async fn find_latest_for_employee(&self, employee_id: i32) -> StoreResult<Option<Contract>>;

    /// Latest contract whose validity interval contains `date`
    async fn find_effective_on(
        &self,
        employee_id: i32,
        date: NaiveDate,
    ) -> StoreResult<Option<Contract>>;
}

/// Repository for payroll runs
#[async_trait]
pub trait PayrollRunRepository: Send + Sync {
    /// Record a run; `created_at` is set to the current UTC time
    async fn create(&self, run: &NewPayrollRun) -> StoreResult<PayrollRun>;

    async fn find_by_id(&self, run_id: i32) -> StoreResult<Option<PayrollRun>>;

    /// Runs for an employee, newest pay period first
    async fn list_for_employee(&self, employee_id: i32) -> StoreResult<Vec<PayrollRun>>;
}

/// Repository for phone sales
#[async_trait]
pub trait PhoneSaleRepository: Send + Sync {
    async fn create(&self, sale: &NewPhoneSale) -> StoreResult<PhoneSale>;

    async fn find_by_id(&self, sale_id: i32) -> StoreResult<Option<PhoneSale>>;

    /// Sales for an employee, newest first
    async fn list_for_employee(&self, employee_id: i32) -> StoreResult<Vec<PhoneSale>>;

    /// Sum of stored commission, 0.0 when the employee has no sales
    async fn total_commission_for_employee(&self, employee_id: i32) -> StoreResult<f64>;
}

/// Repository for user accounts
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &NewUser) -> StoreResult<User>;

    async fn find_by_id(&self, user_id: i32) -> StoreResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>>;
}
