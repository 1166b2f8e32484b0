//! Store bootstrap and wiring
//!
//! [`PayrollStore`] owns the connection pool, brings the schema up to date
//! and hands out repositories and services built on top of it.

use crate::config::StoreConfig;
use crate::contract::StoreError;
use crate::domain::{
    Authenticator, ContractRepository, EmployeeRepository, PayrollRunRepository, PayrollService,
    PhoneSaleRepository, UserRepository,
};
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::repositories::{
    SeaOrmContractRepository, SeaOrmEmployeeRepository, SeaOrmPayrollRunRepository,
    SeaOrmPhoneSaleRepository, SeaOrmUserRepository,
};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use std::time::Duration;

/// Idle timeout and lifetime for the single in-memory connection. Closing it
/// drops the database, so the pool must never reap it.
const IN_MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Handle to an initialized payroll database
#[derive(Clone)]
pub struct PayrollStore {
    db: Arc<DatabaseConnection>,
    employees: Arc<dyn EmployeeRepository>,
    contracts: Arc<dyn ContractRepository>,
    payroll_runs: Arc<dyn PayrollRunRepository>,
    phone_sales: Arc<dyn PhoneSaleRepository>,
    users: Arc<dyn UserRepository>,
}

impl PayrollStore {
    /// Connect, enable foreign keys and apply pending migrations
    pub async fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        let db = Database::connect(connect_options(config)).await?;
        if db.get_database_backend() == DbBackend::Sqlite {
            // sqlx already sets this per connection; the schema relies on it
            db.execute_unprepared("PRAGMA foreign_keys = ON").await?;
        }

        let store = Self::from_connection(Arc::new(db));
        store.migrate().await?;
        tracing::info!(
            database_url = %redact_url(&config.database_url),
            "payroll store opened"
        );
        Ok(store)
    }

    /// Private in-memory SQLite store, mainly for tests and demos
    pub async fn connect_in_memory() -> Result<Self, StoreError> {
        Self::open(&StoreConfig::in_memory()).await
    }

    /// Wrap an existing connection without migrating
    pub fn from_connection(db: Arc<DatabaseConnection>) -> Self {
        Self {
            employees: Arc::new(SeaOrmEmployeeRepository::new(db.clone())),
            contracts: Arc::new(SeaOrmContractRepository::new(db.clone())),
            payroll_runs: Arc::new(SeaOrmPayrollRunRepository::new(db.clone())),
            phone_sales: Arc::new(SeaOrmPhoneSaleRepository::new(db.clone())),
            users: Arc::new(SeaOrmUserRepository::new(db.clone())),
            db,
        }
    }

    /// Apply pending migrations; a no-op on an up-to-date schema
    pub async fn migrate(&self) -> Result<(), StoreError> {
        Migrator::up(&*self.db, None).await?;
        tracing::info!("payroll store migrations completed");
        Ok(())
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn employees(&self) -> Arc<dyn EmployeeRepository> {
        self.employees.clone()
    }

    pub fn contracts(&self) -> Arc<dyn ContractRepository> {
        self.contracts.clone()
    }

    pub fn payroll_runs(&self) -> Arc<dyn PayrollRunRepository> {
        self.payroll_runs.clone()
    }

    pub fn phone_sales(&self) -> Arc<dyn PhoneSaleRepository> {
        self.phone_sales.clone()
    }

    pub fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    pub fn payroll_service(&self) -> PayrollService {
        PayrollService::new(
            self.employees.clone(),
            self.contracts.clone(),
            self.payroll_runs.clone(),
        )
    }

    pub fn authenticator(&self) -> Authenticator {
        Authenticator::new(self.users.clone())
    }
}

fn connect_options(config: &StoreConfig) -> ConnectOptions {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.effective_max_connections())
        .connect_timeout(config.connect_timeout)
        .sqlx_logging(config.sqlx_logging);
    if config.is_in_memory() {
        // Every new connection would see a fresh empty database
        options
            .min_connections(1)
            .idle_timeout(IN_MEMORY_CONNECTION_LIFETIME)
            .max_lifetime(IN_MEMORY_CONNECTION_LIFETIME);
    }
    options
}

/// Strip credentials from a database URL before logging it
fn redact_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***{}", &url[..scheme_end], &url[at..])
        }
        _ => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_connection_is_never_reaped() {
        let options = connect_options(&StoreConfig::in_memory());
        assert_eq!(options.get_max_connections(), Some(1));
        assert_eq!(options.get_min_connections(), Some(1));
        assert_eq!(
            options.get_idle_timeout(),
            Some(IN_MEMORY_CONNECTION_LIFETIME)
        );
        assert_eq!(
            options.get_max_lifetime(),
            Some(IN_MEMORY_CONNECTION_LIFETIME)
        );
    }

    #[test]
    fn file_database_keeps_pool_defaults() {
        let config = StoreConfig {
            database_url: "sqlite://payroll.db?mode=rwc".to_string(),
            max_connections: 4,
            ..StoreConfig::default()
        };
        let options = connect_options(&config);
        assert_eq!(options.get_max_connections(), Some(4));
        assert_eq!(options.get_min_connections(), None);
        assert_eq!(options.get_idle_timeout(), None);
        assert_eq!(options.get_max_lifetime(), None);
    }

    #[test]
    fn redact_url_hides_credentials() {
        assert_eq!(
            redact_url("postgres://payroll:secret@db:5432/yeoconnect"),
            "postgres://***@db:5432/yeoconnect"
        );
        assert_eq!(
            redact_url("sqlite://yeoconnect.db?mode=rwc"),
            "sqlite://yeoconnect.db?mode=rwc"
        );
    }
}
