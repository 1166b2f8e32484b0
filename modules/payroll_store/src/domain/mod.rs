//! Domain layer - repository seams, pay rules and services

pub mod auth;
pub mod credentials;
pub mod pay;
pub mod repository;
pub mod service;
pub mod validation;

pub use auth::Authenticator;
pub use pay::{strategy_for, PayStrategy};
pub use repository::{
    ContractRepository, EmployeeRepository, PayrollRunRepository, PhoneSaleRepository,
    UserRepository,
};
pub use service::PayrollService;
