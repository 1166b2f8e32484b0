//! Database migrations for the payroll store
//!
//! Column layout: ISO text dates, REAL money and hours, integer booleans.
//! Every child table references `employees` with `ON DELETE CASCADE`.

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_employees::Migration),
            Box::new(m20250301_000002_create_contracts::Migration),
            Box::new(m20250301_000003_create_payroll_runs::Migration),
            Box::new(m20250301_000004_create_phone_sales::Migration),
            Box::new(m20250301_000005_create_users::Migration),
            Box::new(m20250301_000006_seed_admin_user::Migration),
        ]
    }
}

#[derive(DeriveIden)]
enum Employees {
    Table,
    Id,
    FirstName,
    LastName,
    Address,
    StartDate,
    NiNumber,
    Department,
    Branch,
    ContractType,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Salt,
    PasswordHash,
    Role,
}

fn id_column<T: IntoIden + 'static>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

fn employee_fk<T, C>(name: &str, table: T, col: C) -> ForeignKeyCreateStatement
where
    T: IntoIden + 'static,
    C: IntoIden + 'static,
{
    ForeignKey::create()
        .name(name)
        .from(table, col)
        .to(Employees::Table, Employees::Id)
        .on_delete(ForeignKeyAction::Cascade)
        .to_owned()
}

mod m20250301_000001_create_employees {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000001_create_employees"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Employees::Table)
                        .if_not_exists()
                        .col(id_column(Employees::Id))
                        .col(ColumnDef::new(Employees::FirstName).text().not_null())
                        .col(ColumnDef::new(Employees::LastName).text().not_null())
                        .col(ColumnDef::new(Employees::Address).text().not_null())
                        .col(ColumnDef::new(Employees::StartDate).date().not_null())
                        .col(
                            ColumnDef::new(Employees::NiNumber)
                                .text()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Employees::Department).text().not_null())
                        .col(ColumnDef::new(Employees::Branch).text().not_null())
                        .col(ColumnDef::new(Employees::ContractType).text().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_employees_last_name")
                        .table(Employees::Table)
                        .col(Employees::LastName)
                        .if_not_exists()
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Employees::Table).to_owned())
                .await
        }
    }
}

mod m20250301_000002_create_contracts {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000002_create_contracts"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Contracts::Table)
                        .if_not_exists()
                        .col(id_column(Contracts::Id))
                        .col(ColumnDef::new(Contracts::EmployeeId).integer().not_null())
                        .col(ColumnDef::new(Contracts::BaseSalary).double())
                        .col(ColumnDef::new(Contracts::HourlyRate).double())
                        .col(ColumnDef::new(Contracts::ContractHours).double())
                        .col(ColumnDef::new(Contracts::EffectiveFrom).date().not_null())
                        .col(ColumnDef::new(Contracts::EffectiveTo).date())
                        .foreign_key(&mut employee_fk(
                            "fk_contracts_employee",
                            Contracts::Table,
                            Contracts::EmployeeId,
                        ))
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_contracts_employee_id")
                        .table(Contracts::Table)
                        .col(Contracts::EmployeeId)
                        .if_not_exists()
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Contracts::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Contracts {
        Table,
        Id,
        EmployeeId,
        BaseSalary,
        HourlyRate,
        ContractHours,
        EffectiveFrom,
        EffectiveTo,
    }
}

mod m20250301_000003_create_payroll_runs {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000003_create_payroll_runs"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(PayrollRuns::Table)
                        .if_not_exists()
                        .col(id_column(PayrollRuns::Id))
                        .col(ColumnDef::new(PayrollRuns::EmployeeId).integer().not_null())
                        .col(ColumnDef::new(PayrollRuns::PayPeriodStart).date().not_null())
                        .col(ColumnDef::new(PayrollRuns::PayPeriodEnd).date().not_null())
                        .col(ColumnDef::new(PayrollRuns::HoursWorked).double().not_null())
                        .col(ColumnDef::new(PayrollRuns::GrossPay).double().not_null())
                        .col(
                            ColumnDef::new(PayrollRuns::LondonWeightingApplied)
                                .boolean()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PayrollRuns::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(&mut employee_fk(
                            "fk_payroll_runs_employee",
                            PayrollRuns::Table,
                            PayrollRuns::EmployeeId,
                        ))
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_payroll_runs_employee_id")
                        .table(PayrollRuns::Table)
                        .col(PayrollRuns::EmployeeId)
                        .if_not_exists()
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(PayrollRuns::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum PayrollRuns {
        Table,
        Id,
        EmployeeId,
        PayPeriodStart,
        PayPeriodEnd,
        HoursWorked,
        GrossPay,
        LondonWeightingApplied,
        CreatedAt,
    }
}

mod m20250301_000004_create_phone_sales {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000004_create_phone_sales"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(PhoneSales::Table)
                        .if_not_exists()
                        .col(id_column(PhoneSales::Id))
                        .col(ColumnDef::new(PhoneSales::EmployeeId).integer().not_null())
                        .col(ColumnDef::new(PhoneSales::HandsetModel).text().not_null())
                        .col(ColumnDef::new(PhoneSales::SaleDate).date().not_null())
                        .col(ColumnDef::new(PhoneSales::SalePrice).double().not_null())
                        .col(ColumnDef::new(PhoneSales::Commission).double().not_null())
                        .foreign_key(&mut employee_fk(
                            "fk_phone_sales_employee",
                            PhoneSales::Table,
                            PhoneSales::EmployeeId,
                        ))
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_phone_sales_employee_id")
                        .table(PhoneSales::Table)
                        .col(PhoneSales::EmployeeId)
                        .if_not_exists()
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(PhoneSales::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum PhoneSales {
        Table,
        Id,
        EmployeeId,
        HandsetModel,
        SaleDate,
        SalePrice,
        Commission,
    }
}

mod m20250301_000005_create_users {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000005_create_users"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Users::Table)
                        .if_not_exists()
                        .col(id_column(Users::Id))
                        .col(
                            ColumnDef::new(Users::Username)
                                .text()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Users::Salt).text().not_null())
                        .col(ColumnDef::new(Users::PasswordHash).text().not_null())
                        .col(ColumnDef::new(Users::Role).text().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Users::Table).to_owned())
                .await
        }
    }
}

/// Seeds `users` with the default administrator (`id = 1`).
///
/// Skipped when an `admin` account already exists, e.g. in a database
/// created before migrations were tracked.
mod m20250301_000006_seed_admin_user {
    use super::*;
    use crate::contract::ADMIN_ROLE;
    use crate::domain::credentials::{
        hash_password, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME,
    };
    use sea_orm::ConnectionTrait;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000006_seed_admin_user"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            let db = manager.get_connection();
            let lookup = Query::select()
                .column(Users::Id)
                .from(Users::Table)
                .and_where(Expr::col(Users::Username).eq(DEFAULT_ADMIN_USERNAME))
                .to_owned();
            if db
                .query_one(db.get_database_backend().build(&lookup))
                .await?
                .is_some()
            {
                return Ok(());
            }

            let (salt, digest) = hash_password(DEFAULT_ADMIN_PASSWORD, None);
            let mut insert = Query::insert();
            insert
                .into_table(Users::Table)
                .columns([
                    Users::Id,
                    Users::Username,
                    Users::Salt,
                    Users::PasswordHash,
                    Users::Role,
                ])
                .values([
                    1i32.into(),
                    DEFAULT_ADMIN_USERNAME.into(),
                    salt.into(),
                    digest.into(),
                    ADMIN_ROLE.into(),
                ])
                .map_err(|e| DbErr::Migration(e.to_string()))?;

            manager.exec_stmt(insert).await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            let delete = Query::delete()
                .from_table(Users::Table)
                .and_where(Expr::col(Users::Username).eq(DEFAULT_ADMIN_USERNAME))
                .to_owned();
            manager.exec_stmt(delete).await
        }
    }
}
