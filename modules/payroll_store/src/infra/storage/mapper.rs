//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::{contract, employee, payroll_run, phone_sale, user};
use crate::contract::{
    Contract, Employee, NewContract, NewEmployee, NewPayrollRun, NewPhoneSale, NewUser,
    PayrollRun, PhoneSale, User,
};
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::{NotSet, Set};

// ===== Employee Conversions =====

impl From<employee::Model> for Employee {
    fn from(entity: employee::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            address: entity.address,
            start_date: entity.start_date,
            ni_number: entity.ni_number,
            department: entity.department,
            branch: entity.branch,
            contract_type: entity.contract_type,
        }
    }
}

impl From<&NewEmployee> for employee::ActiveModel {
    fn from(model: &NewEmployee) -> Self {
        Self {
            id: NotSet,
            first_name: Set(model.first_name.trim().to_string()),
            last_name: Set(model.last_name.trim().to_string()),
            address: Set(model.address.trim().to_string()),
            start_date: Set(model.start_date),
            ni_number: Set(normalize_ni_number(&model.ni_number)),
            department: Set(model.department.trim().to_string()),
            branch: Set(model.branch.trim().to_string()),
            contract_type: Set(normalize_contract_type(&model.contract_type)),
        }
    }
}

impl From<&Employee> for employee::ActiveModel {
    fn from(model: &Employee) -> Self {
        Self {
            id: Set(model.id),
            first_name: Set(model.first_name.trim().to_string()),
            last_name: Set(model.last_name.trim().to_string()),
            address: Set(model.address.trim().to_string()),
            start_date: Set(model.start_date),
            ni_number: Set(normalize_ni_number(&model.ni_number)),
            department: Set(model.department.trim().to_string()),
            branch: Set(model.branch.trim().to_string()),
            contract_type: Set(normalize_contract_type(&model.contract_type)),
        }
    }
}

fn normalize_ni_number(ni_number: &str) -> String {
    ni_number.trim().to_uppercase()
}

fn normalize_contract_type(contract_type: &str) -> String {
    contract_type.trim().to_uppercase()
}

// ===== Contract Conversions =====

impl From<contract::Model> for Contract {
    fn from(entity: contract::Model) -> Self {
        Self {
            id: entity.id,
            employee_id: entity.employee_id,
            base_salary: entity.base_salary,
            hourly_rate: entity.hourly_rate,
            contract_hours: entity.contract_hours,
            effective_from: entity.effective_from,
            effective_to: entity.effective_to,
        }
    }
}

impl From<&NewContract> for contract::ActiveModel {
    fn from(model: &NewContract) -> Self {
        Self {
            id: NotSet,
            employee_id: Set(model.employee_id),
            base_salary: Set(model.base_salary),
            hourly_rate: Set(model.hourly_rate),
            contract_hours: Set(model.contract_hours),
            effective_from: Set(model.effective_from),
            effective_to: Set(model.effective_to),
        }
    }
}

// ===== Payroll Run Conversions =====

impl From<payroll_run::Model> for PayrollRun {
    fn from(entity: payroll_run::Model) -> Self {
        Self {
            id: entity.id,
            employee_id: entity.employee_id,
            pay_period_start: entity.pay_period_start,
            pay_period_end: entity.pay_period_end,
            hours_worked: entity.hours_worked,
            gross_pay: entity.gross_pay,
            london_weighting_applied: entity.london_weighting_applied,
            created_at: entity.created_at,
        }
    }
}

/// Builds the insert model, stamping `created_at`
pub fn payroll_run_active_model(
    model: &NewPayrollRun,
    created_at: DateTime<Utc>,
) -> payroll_run::ActiveModel {
    payroll_run::ActiveModel {
        id: NotSet,
        employee_id: Set(model.employee_id),
        pay_period_start: Set(model.pay_period_start),
        pay_period_end: Set(model.pay_period_end),
        hours_worked: Set(model.hours_worked),
        gross_pay: Set(model.gross_pay),
        london_weighting_applied: Set(model.london_weighting_applied),
        created_at: Set(created_at),
    }
}

// ===== Phone Sale Conversions =====

impl From<phone_sale::Model> for PhoneSale {
    fn from(entity: phone_sale::Model) -> Self {
        Self {
            id: entity.id,
            employee_id: entity.employee_id,
            handset_model: entity.handset_model,
            sale_date: entity.sale_date,
            sale_price: entity.sale_price,
            commission: entity.commission,
        }
    }
}

impl From<&NewPhoneSale> for phone_sale::ActiveModel {
    fn from(model: &NewPhoneSale) -> Self {
        Self {
            id: NotSet,
            employee_id: Set(model.employee_id),
            handset_model: Set(model.handset_model.clone()),
            sale_date: Set(model.sale_date),
            sale_price: Set(model.sale_price),
            commission: Set(model.commission),
        }
    }
}

// ===== User Conversions =====

impl From<user::Model> for User {
    fn from(entity: user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            salt: entity.salt,
            password_hash: entity.password_hash,
            role: entity.role,
        }
    }
}

impl From<&NewUser> for user::ActiveModel {
    fn from(model: &NewUser) -> Self {
        Self {
            id: NotSet,
            username: Set(model.username.clone()),
            salt: Set(model.salt.clone()),
            password_hash: Set(model.password_hash.clone()),
            role: Set(model.role.clone()),
        }
    }
}
