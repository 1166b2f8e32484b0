//! Input checks applied before employee writes

use crate::contract::{Employee, NewEmployee, StoreError};

/// Validate the fields of an employee about to be written
///
/// First and last name are required, as is the NI number. Everything else
/// is stored as given.
pub fn validate_employee_fields(
    first_name: &str,
    last_name: &str,
    ni_number: &str,
) -> Result<(), StoreError> {
    if first_name.trim().is_empty() || last_name.trim().is_empty() {
        return Err(StoreError::Validation(
            "first and last name are required".to_string(),
        ));
    }

    if ni_number.trim().is_empty() {
        return Err(StoreError::Validation("NI number is required".to_string()));
    }

    Ok(())
}

pub fn validate_new_employee(employee: &NewEmployee) -> Result<(), StoreError> {
    validate_employee_fields(&employee.first_name, &employee.last_name, &employee.ni_number)
}

pub fn validate_employee(employee: &Employee) -> Result<(), StoreError> {
    validate_employee_fields(&employee.first_name, &employee.last_name, &employee.ni_number)
}
