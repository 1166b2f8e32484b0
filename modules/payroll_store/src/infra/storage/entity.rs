//! SeaORM entities for the payroll tables

/// `employees` table
pub mod employee {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "employees")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub first_name: String,
        pub last_name: String,
        pub address: String,
        pub start_date: Date,
        #[sea_orm(unique)]
        pub ni_number: String,
        pub department: String,
        pub branch: String,
        pub contract_type: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::contract::Entity")]
        Contracts,
        #[sea_orm(has_many = "super::payroll_run::Entity")]
        PayrollRuns,
        #[sea_orm(has_many = "super::phone_sale::Entity")]
        PhoneSales,
    }

    impl Related<super::contract::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Contracts.def()
        }
    }

    impl Related<super::payroll_run::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::PayrollRuns.def()
        }
    }

    impl Related<super::phone_sale::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::PhoneSales.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// `contracts` table
pub mod contract {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "contracts")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub employee_id: i32,
        pub base_salary: Option<f64>,
        pub hourly_rate: Option<f64>,
        pub contract_hours: Option<f64>,
        pub effective_from: Date,
        /// NULL for an open-ended contract
        pub effective_to: Option<Date>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::employee::Entity",
            from = "Column::EmployeeId",
            to = "super::employee::Column::Id",
            on_delete = "Cascade"
        )]
        Employee,
    }

    impl Related<super::employee::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Employee.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// `payroll_runs` table
pub mod payroll_run {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "payroll_runs")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub employee_id: i32,
        pub pay_period_start: Date,
        pub pay_period_end: Date,
        pub hours_worked: f64,
        pub gross_pay: f64,
        pub london_weighting_applied: bool,
        pub created_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::employee::Entity",
            from = "Column::EmployeeId",
            to = "super::employee::Column::Id",
            on_delete = "Cascade"
        )]
        Employee,
    }

    impl Related<super::employee::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Employee.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// `phone_sales` table
pub mod phone_sale {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "phone_sales")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub employee_id: i32,
        pub handset_model: String,
        pub sale_date: Date,
        pub sale_price: f64,
        pub commission: f64,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::employee::Entity",
            from = "Column::EmployeeId",
            to = "super::employee::Column::Id",
            on_delete = "Cascade"
        )]
        Employee,
    }

    impl Related<super::employee::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Employee.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// `users` table, standalone access-control records
pub mod user {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "users")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub username: String,
        pub salt: String,
        pub password_hash: String,
        pub role: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
