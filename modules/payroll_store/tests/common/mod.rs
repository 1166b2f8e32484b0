//! Common test utilities and a small shared workforce

#![allow(dead_code)]

use chrono::NaiveDate;
use payroll_store::{NewContract, NewEmployee, PayrollStore};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Fresh, migrated in-memory store
pub async fn fresh_store() -> PayrollStore {
    PayrollStore::connect_in_memory()
        .await
        .expect("in-memory store should open")
}

/// Employees used across tests
/// Yeovil shop floor, a London salaried manager and a part-timer
pub struct TestWorkforce;

impl TestWorkforce {
    pub fn yeovil_hourly() -> NewEmployee {
        NewEmployee {
            first_name: "Priya".to_string(),
            last_name: "Shah".to_string(),
            address: "12 Hendford Hill, Yeovil".to_string(),
            start_date: date(2023, 4, 3),
            ni_number: "qq123456a".to_string(),
            department: "Sales".to_string(),
            branch: "Yeovil".to_string(),
            contract_type: "hourly".to_string(),
        }
    }

    pub fn london_salaried() -> NewEmployee {
        NewEmployee {
            first_name: "Tom".to_string(),
            last_name: "Barker".to_string(),
            address: "4 Borough High St, London".to_string(),
            start_date: date(2021, 9, 1),
            ni_number: "QQ654321B".to_string(),
            department: "Management".to_string(),
            branch: "London".to_string(),
            contract_type: "SALARIED".to_string(),
        }
    }

    pub fn yeovil_part_time() -> NewEmployee {
        NewEmployee {
            first_name: "Ellie".to_string(),
            last_name: "Barkworth".to_string(),
            address: "7 Preston Road, Yeovil".to_string(),
            start_date: date(2024, 2, 12),
            ni_number: "QQ111222C".to_string(),
            department: "Sales".to_string(),
            branch: "Yeovil".to_string(),
            contract_type: "PART_TIME".to_string(),
        }
    }

    pub fn hourly_contract(employee_id: i32, rate: f64) -> NewContract {
        NewContract {
            employee_id,
            base_salary: None,
            hourly_rate: Some(rate),
            contract_hours: None,
            effective_from: date(2023, 4, 3),
            effective_to: None,
        }
    }

    pub fn salaried_contract(employee_id: i32, salary: f64) -> NewContract {
        NewContract {
            employee_id,
            base_salary: Some(salary),
            hourly_rate: None,
            contract_hours: None,
            effective_from: date(2021, 9, 1),
            effective_to: None,
        }
    }

    pub fn part_time_contract(employee_id: i32) -> NewContract {
        NewContract {
            employee_id,
            base_salary: Some(900.0),
            hourly_rate: Some(11.5),
            contract_hours: Some(20.0),
            effective_from: date(2024, 2, 12),
            effective_to: None,
        }
    }
}
