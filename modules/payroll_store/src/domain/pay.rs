//! Gross pay calculation per contract type
//!
//! Overtime is paid at 2.5x the hourly rate. Hourly staff earn overtime
//! above a 37 hour week; part-time staff above their contract hours.
//! London branch pay is weighted by 20% on top of whatever the contract
//! yields.

use crate::contract::{Contract, ContractType, Employee, PayrollError};

pub const OVERTIME_MULTIPLIER: f64 = 2.5;
pub const STANDARD_HOURS: f64 = 37.0;
pub const LONDON_WEIGHTING_FACTOR: f64 = 1.2;

/// Computes gross pay for a pay period
pub trait PayStrategy: Send + Sync {
    fn gross_pay(&self, hours_worked: f64) -> f64;
}

/// Pay does not depend on hours
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Salaried {
    pub base_salary: f64,
}

impl PayStrategy for Salaried {
    fn gross_pay(&self, _hours_worked: f64) -> f64 {
        self.base_salary
    }
}

/// Base salary covers the contract hours, overtime above
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartTime {
    pub base_salary: f64,
    pub hourly_rate: f64,
    pub contract_hours: f64,
}

impl PayStrategy for PartTime {
    fn gross_pay(&self, hours_worked: f64) -> f64 {
        let overtime_hours = (hours_worked - self.contract_hours).max(0.0);
        self.base_salary + overtime_hours * self.hourly_rate * OVERTIME_MULTIPLIER
    }
}

/// Hourly rate up to the standard week, overtime above
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hourly {
    pub hourly_rate: f64,
}

impl PayStrategy for Hourly {
    fn gross_pay(&self, hours_worked: f64) -> f64 {
        let regular_hours = hours_worked.min(STANDARD_HOURS);
        let overtime_hours = (hours_worked - STANDARD_HOURS).max(0.0);
        regular_hours * self.hourly_rate
            + overtime_hours * self.hourly_rate * OVERTIME_MULTIPLIER
    }
}

/// Applies London weighting to any strategy
pub struct LondonWeighting {
    inner: Box<dyn PayStrategy>,
}

impl LondonWeighting {
    pub fn new(inner: Box<dyn PayStrategy>) -> Self {
        Self { inner }
    }
}

impl PayStrategy for LondonWeighting {
    fn gross_pay(&self, hours_worked: f64) -> f64 {
        self.inner.gross_pay(hours_worked) * LONDON_WEIGHTING_FACTOR
    }
}

/// Select the strategy for an employee's contract type, weighted for London
pub fn strategy_for(
    employee: &Employee,
    contract: &Contract,
) -> Result<Box<dyn PayStrategy>, PayrollError> {
    let contract_type: ContractType = employee
        .contract_type
        .parse()
        .map_err(PayrollError::UnknownContractType)?;

    let require = |value: Option<f64>, term: &'static str| {
        value.ok_or(PayrollError::MissingContractTerm {
            contract_type: contract_type.as_str(),
            term,
        })
    };

    let strategy: Box<dyn PayStrategy> = match contract_type {
        ContractType::Salaried => Box::new(Salaried {
            base_salary: require(contract.base_salary, "base salary")?,
        }),
        ContractType::PartTime => Box::new(PartTime {
            base_salary: require(contract.base_salary, "base salary")?,
            hourly_rate: require(contract.hourly_rate, "hourly rate")?,
            contract_hours: require(contract.contract_hours, "contract hours")?,
        }),
        ContractType::Hourly => Box::new(Hourly {
            hourly_rate: require(contract.hourly_rate, "hourly rate")?,
        }),
    };

    if employee.is_london_branch() {
        Ok(Box::new(LondonWeighting::new(strategy)))
    } else {
        Ok(strategy)
    }
}
