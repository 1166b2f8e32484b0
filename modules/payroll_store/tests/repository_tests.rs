//! Repository behaviour against SQLite

use payroll_store::contract::*;

mod common;
use common::{date, fresh_store, TestWorkforce};

#[tokio::test]
async fn test_create_employee_normalizes_fields() {
    let store = fresh_store().await;

    let employee = store
        .employees()
        .create(&TestWorkforce::yeovil_hourly())
        .await
        .unwrap();

    assert!(employee.id > 0);
    assert_eq!(employee.ni_number, "QQ123456A");
    assert_eq!(employee.contract_type, "HOURLY");
    assert_eq!(employee.start_date, date(2023, 4, 3));

    let by_ni = store
        .employees()
        .find_by_ni_number("qq123456a")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_ni, employee);
}

#[tokio::test]
async fn test_create_and_update_trim_text_fields() {
    let store = fresh_store().await;
    let employees = store.employees();

    let mut padded = TestWorkforce::yeovil_hourly();
    padded.first_name = "  Priya ".to_string();
    padded.address = "  12 Hendford Hill, Yeovil\t".to_string();
    padded.department = " Sales ".to_string();
    padded.branch = "Yeovil  ".to_string();

    let mut employee = employees.create(&padded).await.unwrap();
    assert_eq!(employee.first_name, "Priya");
    assert_eq!(employee.address, "12 Hendford Hill, Yeovil");
    assert_eq!(employee.department, "Sales");
    assert_eq!(employee.branch, "Yeovil");

    employee.branch = "  London ".to_string();
    employee.department = "Management\n".to_string();
    employees.update(&employee).await.unwrap();

    let reloaded = employees.find_by_id(employee.id).await.unwrap().unwrap();
    assert_eq!(reloaded.branch, "London");
    assert_eq!(reloaded.department, "Management");
    assert!(reloaded.is_london_branch());
}

#[tokio::test]
async fn test_create_employee_requires_names() {
    let store = fresh_store().await;

    let mut nameless = TestWorkforce::yeovil_hourly();
    nameless.last_name = "   ".to_string();
    let err = store.employees().create(&nameless).await.unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert!(store.employees().list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_by_last_name_matches_substring() {
    let store = fresh_store().await;
    let employees = store.employees();

    employees.create(&TestWorkforce::yeovil_hourly()).await.unwrap();
    employees.create(&TestWorkforce::london_salaried()).await.unwrap();
    employees.create(&TestWorkforce::yeovil_part_time()).await.unwrap();

    let found = employees.search_by_last_name("bark").await.unwrap();
    let names: Vec<_> = found.iter().map(|e| e.last_name.as_str()).collect();
    assert_eq!(names, vec!["Barker", "Barkworth"]);

    assert!(employees.search_by_last_name("Nobody").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_employee() {
    let store = fresh_store().await;
    let employees = store.employees();

    let mut employee = employees
        .create(&TestWorkforce::yeovil_hourly())
        .await
        .unwrap();
    employee.branch = "London".to_string();
    employee.contract_type = "salaried".to_string();

    let updated = employees.update(&employee).await.unwrap();
    assert_eq!(updated.branch, "London");
    assert_eq!(updated.contract_type, "SALARIED");
    assert!(updated.is_london_branch());

    let reloaded = employees.find_by_id(employee.id).await.unwrap().unwrap();
    assert_eq!(reloaded, updated);
}

#[tokio::test]
async fn test_update_missing_employee_is_not_found() {
    let store = fresh_store().await;

    let ghost = Employee {
        id: 77,
        first_name: "No".to_string(),
        last_name: "Body".to_string(),
        address: "Nowhere".to_string(),
        start_date: date(2020, 1, 1),
        ni_number: "QQ000000X".to_string(),
        department: "None".to_string(),
        branch: "Yeovil".to_string(),
        contract_type: "HOURLY".to_string(),
    };
    let err = store.employees().update(&ghost).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { resource: "employee", .. }));
}

#[tokio::test]
async fn test_update_to_taken_ni_number_is_rejected() {
    let store = fresh_store().await;
    let employees = store.employees();

    employees.create(&TestWorkforce::yeovil_hourly()).await.unwrap();
    let mut other = employees
        .create(&TestWorkforce::london_salaried())
        .await
        .unwrap();
    other.ni_number = "QQ123456A".to_string();

    let err = employees.update(&other).await.unwrap_err();
    assert!(err.is_unique_violation(), "got {err:?}");
}

#[tokio::test]
async fn test_contract_lookups() {
    let store = fresh_store().await;
    let employee = store
        .employees()
        .create(&TestWorkforce::yeovil_hourly())
        .await
        .unwrap();
    let contracts = store.contracts();

    let first = contracts
        .create(&NewContract {
            employee_id: employee.id,
            base_salary: None,
            hourly_rate: Some(11.0),
            contract_hours: None,
            effective_from: date(2023, 4, 3),
            effective_to: Some(date(2024, 3, 31)),
        })
        .await
        .unwrap();
    let second = contracts
        .create(&NewContract {
            employee_id: employee.id,
            base_salary: None,
            hourly_rate: Some(12.5),
            contract_hours: None,
            effective_from: date(2024, 4, 1),
            effective_to: None,
        })
        .await
        .unwrap();

    let latest = contracts
        .find_latest_for_employee(employee.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(latest.id, second.id);

    let listed: Vec<_> = contracts
        .list_for_employee(employee.id)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(listed, vec![second.id, first.id]);

    let on_old_terms = contracts
        .find_effective_on(employee.id, date(2024, 3, 31))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(on_old_terms.id, first.id);

    let on_new_terms = contracts
        .find_effective_on(employee.id, date(2026, 1, 1))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(on_new_terms.id, second.id);

    assert!(contracts
        .find_effective_on(employee.id, date(2022, 12, 31))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_payroll_run_is_timestamped() {
    let store = fresh_store().await;
    let employee = store
        .employees()
        .create(&TestWorkforce::london_salaried())
        .await
        .unwrap();

    let before = chrono::Utc::now();
    let run = store
        .payroll_runs()
        .create(&NewPayrollRun {
            employee_id: employee.id,
            pay_period_start: date(2025, 1, 1),
            pay_period_end: date(2025, 1, 31),
            hours_worked: 160.0,
            gross_pay: 3000.0,
            london_weighting_applied: true,
        })
        .await
        .unwrap();

    assert!(run.created_at >= before - chrono::Duration::seconds(1));
    assert!(run.london_weighting_applied);

    let loaded = store.payroll_runs().find_by_id(run.id).await.unwrap().unwrap();
    assert_eq!(loaded.gross_pay, 3000.0);
    assert_eq!(loaded.pay_period_end, date(2025, 1, 31));
    assert!(loaded.london_weighting_applied);
}

#[tokio::test]
async fn test_phone_sales_and_commission_total() {
    let store = fresh_store().await;
    let employee = store
        .employees()
        .create(&TestWorkforce::yeovil_hourly())
        .await
        .unwrap();
    let sales = store.phone_sales();

    assert_eq!(
        sales.total_commission_for_employee(employee.id).await.unwrap(),
        0.0
    );

    for (model, day, price, commission) in [
        ("iPhone 16", 3, 899.0, 45.0),
        ("Galaxy S25", 10, 749.0, 37.5),
        ("Pixel 9a", 21, 399.0, 12.25),
    ] {
        sales
            .create(&NewPhoneSale {
                employee_id: employee.id,
                handset_model: model.to_string(),
                sale_date: date(2025, 5, day),
                sale_price: price,
                commission,
            })
            .await
            .unwrap();
    }

    let listed = sales.list_for_employee(employee.id).await.unwrap();
    assert_eq!(listed.len(), 3);
    assert_eq!(listed[0].handset_model, "Pixel 9a");

    let total = sales.total_commission_for_employee(employee.id).await.unwrap();
    assert!((total - 94.75).abs() < 1e-9);
}
