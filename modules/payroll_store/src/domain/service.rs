//! Domain service - payroll orchestration

use super::pay::strategy_for;
use super::repository::{ContractRepository, EmployeeRepository, PayrollRunRepository};
use crate::contract::{NewPayrollRun, PayrollError, PayrollRun};
use chrono::NaiveDate;
use std::sync::Arc;

/// Runs payroll for employees and records the result
pub struct PayrollService {
    employee_repo: Arc<dyn EmployeeRepository>,
    contract_repo: Arc<dyn ContractRepository>,
    payroll_run_repo: Arc<dyn PayrollRunRepository>,
}

impl PayrollService {
    pub fn new(
        employee_repo: Arc<dyn EmployeeRepository>,
        contract_repo: Arc<dyn ContractRepository>,
        payroll_run_repo: Arc<dyn PayrollRunRepository>,
    ) -> Self {
        Self {
            employee_repo,
            contract_repo,
            payroll_run_repo,
        }
    }

    /// Compute gross pay for one pay period and persist the run
    ///
    /// Pay terms come from the employee's latest contract; the employee's
    /// `contract_type` decides how they are applied.
    pub async fn run_payroll_for_employee(
        &self,
        employee_id: i32,
        hours_worked: f64,
        pay_period_start: NaiveDate,
        pay_period_end: NaiveDate,
    ) -> Result<PayrollRun, PayrollError> {
        let employee = self
            .employee_repo
            .find_by_id(employee_id)
            .await?
            .ok_or(PayrollError::EmployeeNotFound(employee_id))?;

        let contract = self
            .contract_repo
            .find_latest_for_employee(employee_id)
            .await?
            .ok_or(PayrollError::NoContract(employee_id))?;

        let strategy = strategy_for(&employee, &contract)?;
        let gross_pay = strategy.gross_pay(hours_worked);

        let run = self
            .payroll_run_repo
            .create(&NewPayrollRun {
                employee_id: employee.id,
                pay_period_start,
                pay_period_end,
                hours_worked,
                gross_pay,
                london_weighting_applied: employee.is_london_branch(),
            })
            .await?;

        tracing::info!(
            employee_id,
            run_id = run.id,
            gross_pay,
            london_weighting = run.london_weighting_applied,
            "payroll run recorded"
        );
        Ok(run)
    }

    /// Recorded runs for an employee, newest pay period first
    pub async fn payroll_history(&self, employee_id: i32) -> Result<Vec<PayrollRun>, PayrollError> {
        Ok(self.payroll_run_repo.list_for_employee(employee_id).await?)
    }
}
