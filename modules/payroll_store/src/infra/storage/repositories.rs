//! SeaORM repository implementations

use super::entity::{contract, employee, payroll_run, phone_sale, user};
use super::mapper::payroll_run_active_model;
use crate::contract::{
    Contract, Employee, NewContract, NewEmployee, NewPayrollRun, NewPhoneSale, NewUser,
    PayrollRun, PhoneSale, StoreError, User,
};
use crate::domain::repository::{
    ContractRepository, EmployeeRepository, PayrollRunRepository, PhoneSaleRepository,
    StoreResult, UserRepository,
};
use crate::domain::validation::{validate_employee, validate_new_employee};
use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    prelude::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::sync::Arc;

// ===== Employee Repository =====

pub struct SeaOrmEmployeeRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn create(&self, employee: &NewEmployee) -> StoreResult<Employee> {
        validate_new_employee(employee)?;

        let active: employee::ActiveModel = employee.into();
        let result = employee::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        tracing::debug!(employee_id = result.id, "employee created");
        Ok(result.into())
    }

    async fn find_by_id(&self, employee_id: i32) -> StoreResult<Option<Employee>> {
        let result = employee::Entity::find_by_id(employee_id)
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn find_by_ni_number(&self, ni_number: &str) -> StoreResult<Option<Employee>> {
        let result = employee::Entity::find()
            .filter(employee::Column::NiNumber.eq(ni_number.trim().to_uppercase()))
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn search_by_last_name(&self, last_name: &str) -> StoreResult<Vec<Employee>> {
        let results = employee::Entity::find()
            .filter(employee::Column::LastName.contains(last_name.trim()))
            .order_by_asc(employee::Column::LastName)
            .order_by_asc(employee::Column::FirstName)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn list_all(&self) -> StoreResult<Vec<Employee>> {
        let results = employee::Entity::find()
            .order_by_asc(employee::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn update(&self, employee: &Employee) -> StoreResult<Employee> {
        validate_employee(employee)?;

        let active: employee::ActiveModel = employee.into();
        match employee::Entity::update(active).exec(&*self.db).await {
            Ok(result) => {
                tracing::debug!(employee_id = result.id, "employee updated");
                Ok(result.into())
            }
            Err(DbErr::RecordNotUpdated | DbErr::RecordNotFound(_)) => Err(StoreError::NotFound {
                resource: "employee",
                id: employee.id.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, employee_id: i32) -> StoreResult<bool> {
        let result = employee::Entity::delete_by_id(employee_id)
            .exec(&*self.db)
            .await?;

        tracing::debug!(
            employee_id,
            rows = result.rows_affected,
            "employee deleted with dependent rows"
        );
        Ok(result.rows_affected > 0)
    }
}

// ===== Contract Repository =====

pub struct SeaOrmContractRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmContractRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContractRepository for SeaOrmContractRepository {
    async fn create(&self, contract: &NewContract) -> StoreResult<Contract> {
        let active: contract::ActiveModel = contract.into();
        let result = contract::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        tracing::debug!(
            contract_id = result.id,
            employee_id = result.employee_id,
            "contract created"
        );
        Ok(result.into())
    }

    async fn find_by_id(&self, contract_id: i32) -> StoreResult<Option<Contract>> {
        let result = contract::Entity::find_by_id(contract_id)
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn list_for_employee(&self, employee_id: i32) -> StoreResult<Vec<Contract>> {
        let results = contract::Entity::find()
            .filter(contract::Column::EmployeeId.eq(employee_id))
            .order_by_desc(contract::Column::EffectiveFrom)
            .order_by_desc(contract::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn find_latest_for_employee(&self, employee_id: i32) -> StoreResult<Option<Contract>> {
        let result = contract::Entity::find()
            .filter(contract::Column::EmployeeId.eq(employee_id))
            .order_by_desc(contract::Column::EffectiveFrom)
            .order_by_desc(contract::Column::Id)
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn find_effective_on(
        &self,
        employee_id: i32,
        date: NaiveDate,
    ) -> StoreResult<Option<Contract>> {
        let result = contract::Entity::find()
            .filter(contract::Column::EmployeeId.eq(employee_id))
            .filter(contract::Column::EffectiveFrom.lte(date))
            .filter(
                Condition::any()
                    .add(contract::Column::EffectiveTo.is_null())
                    .add(contract::Column::EffectiveTo.gte(date)),
            )
            .order_by_desc(contract::Column::EffectiveFrom)
            .order_by_desc(contract::Column::Id)
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }
}

// ===== Payroll Run Repository =====

pub struct SeaOrmPayrollRunRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmPayrollRunRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PayrollRunRepository for SeaOrmPayrollRunRepository {
    async fn create(&self, run: &NewPayrollRun) -> StoreResult<PayrollRun> {
        let active = payroll_run_active_model(run, chrono::Utc::now());
        let result = payroll_run::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        tracing::debug!(
            run_id = result.id,
            employee_id = result.employee_id,
            "payroll run created"
        );
        Ok(result.into())
    }

    async fn find_by_id(&self, run_id: i32) -> StoreResult<Option<PayrollRun>> {
        let result = payroll_run::Entity::find_by_id(run_id)
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn list_for_employee(&self, employee_id: i32) -> StoreResult<Vec<PayrollRun>> {
        let results = payroll_run::Entity::find()
            .filter(payroll_run::Column::EmployeeId.eq(employee_id))
            .order_by_desc(payroll_run::Column::PayPeriodStart)
            .order_by_desc(payroll_run::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }
}

// ===== Phone Sale Repository =====

pub struct SeaOrmPhoneSaleRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmPhoneSaleRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PhoneSaleRepository for SeaOrmPhoneSaleRepository {
    async fn create(&self, sale: &NewPhoneSale) -> StoreResult<PhoneSale> {
        let active: phone_sale::ActiveModel = sale.into();
        let result = phone_sale::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        tracing::debug!(
            sale_id = result.id,
            employee_id = result.employee_id,
            "phone sale created"
        );
        Ok(result.into())
    }

    async fn find_by_id(&self, sale_id: i32) -> StoreResult<Option<PhoneSale>> {
        let result = phone_sale::Entity::find_by_id(sale_id)
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn list_for_employee(&self, employee_id: i32) -> StoreResult<Vec<PhoneSale>> {
        let results = phone_sale::Entity::find()
            .filter(phone_sale::Column::EmployeeId.eq(employee_id))
            .order_by_desc(phone_sale::Column::SaleDate)
            .order_by_desc(phone_sale::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn total_commission_for_employee(&self, employee_id: i32) -> StoreResult<f64> {
        let total = phone_sale::Entity::find()
            .select_only()
            .column_as(Expr::col(phone_sale::Column::Commission).sum(), "total")
            .filter(phone_sale::Column::EmployeeId.eq(employee_id))
            .into_tuple::<Option<f64>>()
            .one(&*self.db)
            .await?;

        Ok(total.flatten().unwrap_or(0.0))
    }
}

// ===== User Repository =====

pub struct SeaOrmUserRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmUserRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create(&self, user: &NewUser) -> StoreResult<User> {
        let active: user::ActiveModel = user.into();
        let result = user::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        tracing::debug!(user_id = result.id, username = %result.username, "user created");
        Ok(result.into())
    }

    async fn find_by_id(&self, user_id: i32) -> StoreResult<Option<User>> {
        let result = user::Entity::find_by_id(user_id).one(&*self.db).await?;

        Ok(result.map(Into::into))
    }

    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let result = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }
}
