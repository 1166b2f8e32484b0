//! Contract models for the payroll store

use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;
use std::str::FromStr;

/// Role string carried by administrator accounts
pub const ADMIN_ROLE: &str = "ADMIN";

/// Employee record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub start_date: NaiveDate,
    /// National Insurance number, unique per employee
    pub ni_number: String,
    pub department: String,
    /// Branch name (e.g. "Yeovil", "London")
    pub branch: String,
    /// Stored contract type text, upper-cased on write
    pub contract_type: String,
}

impl Employee {
    /// Whether this employee's pay attracts London weighting
    pub fn is_london_branch(&self) -> bool {
        self.branch.trim().eq_ignore_ascii_case("LONDON")
    }
}

/// Employee to be hired
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub start_date: NaiveDate,
    pub ni_number: String,
    pub department: String,
    pub branch: String,
    pub contract_type: String,
}

/// Compensation terms with a validity interval
#[derive(Debug, Clone, PartialEq)]
pub struct Contract {
    pub id: i32,
    pub employee_id: i32,
    pub base_salary: Option<f64>,
    pub hourly_rate: Option<f64>,
    pub contract_hours: Option<f64>,
    pub effective_from: NaiveDate,
    /// `None` means open-ended
    pub effective_to: Option<NaiveDate>,
}

impl Contract {
    /// Whether `date` falls within `[effective_from, effective_to]`
    pub fn is_effective_on(&self, date: NaiveDate) -> bool {
        self.effective_from <= date && self.effective_to.map_or(true, |to| date <= to)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewContract {
    pub employee_id: i32,
    pub base_salary: Option<f64>,
    pub hourly_rate: Option<f64>,
    pub contract_hours: Option<f64>,
    pub effective_from: NaiveDate,
    pub effective_to: Option<NaiveDate>,
}

/// Recorded payroll run for one pay period
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollRun {
    pub id: i32,
    pub employee_id: i32,
    pub pay_period_start: NaiveDate,
    pub pay_period_end: NaiveDate,
    pub hours_worked: f64,
    pub gross_pay: f64,
    pub london_weighting_applied: bool,
    pub created_at: DateTime<Utc>,
}

/// Payroll run to be recorded; `created_at` is stamped by the repository
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayrollRun {
    pub employee_id: i32,
    pub pay_period_start: NaiveDate,
    pub pay_period_end: NaiveDate,
    pub hours_worked: f64,
    pub gross_pay: f64,
    pub london_weighting_applied: bool,
}

/// Handset sale credited to an employee
#[derive(Debug, Clone, PartialEq)]
pub struct PhoneSale {
    pub id: i32,
    pub employee_id: i32,
    pub handset_model: String,
    pub sale_date: NaiveDate,
    pub sale_price: f64,
    pub commission: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPhoneSale {
    pub employee_id: i32,
    pub handset_model: String,
    pub sale_date: NaiveDate,
    pub sale_price: f64,
    pub commission: f64,
}

/// Authentication principal
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub salt: String,
    pub password_hash: String,
    pub role: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

// Keep credentials out of logs
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub salt: String,
    pub password_hash: String,
    pub role: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// Contract types understood by the pay calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractType {
    /// Fixed pay regardless of hours
    Salaried,
    /// Base salary for contract hours, overtime above
    PartTime,
    /// Paid per hour, overtime above the standard week
    Hourly,
}

impl ContractType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::Salaried => "SALARIED",
            ContractType::PartTime => "PART_TIME",
            ContractType::Hourly => "HOURLY",
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SALARIED" => Ok(ContractType::Salaried),
            "PART_TIME" => Ok(ContractType::PartTime),
            "HOURLY" => Ok(ContractType::Hourly),
            other => Err(other.to_string()),
        }
    }
}
