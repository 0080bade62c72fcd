//! Test harness with testcontainers for integration testing.
//!
//! A single Postgres container is started once and reused by every test.
//! Each test gets its own freshly-migrated database on that container, so
//! singleton invariants and ordering assertions never see another test's rows.

use anyhow::{Context, Result};
use sqlx::PgPool;
use test_context::AsyncTestContext;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;
use uuid::Uuid;

use super::GraphQLClient;
use server_core::common::AdminUser;

/// Shared test infrastructure that persists across all tests.
/// The container is started once; databases are created per test.
struct SharedTestInfra {
    base_url: String,
    admin_pool: PgPool,
    // Keep the container alive for the entire test run
    _postgres: ContainerAsync<Postgres>,
}

/// Global shared infrastructure - initialized once, reused by all tests.
static SHARED_INFRA: OnceCell<SharedTestInfra> = OnceCell::const_new();

impl SharedTestInfra {
    /// Initialize shared infrastructure (container + admin connection).
    /// This is called once on the first test.
    async fn init() -> Result<Self> {
        // Initialize tracing subscriber to respect RUST_LOG environment variable.
        // Uses try_init() to avoid panicking if already initialized.
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let postgres = Postgres::default()
            .with_tag("16")
            .with_cmd(["-c", "max_connections=200"])
            .start()
            .await
            .context("Failed to start Postgres container")?;

        let pg_host = postgres.get_host().await?;
        let pg_port = postgres.get_host_port_ipv4(5432).await?;
        let base_url = format!("postgresql://postgres:postgres@{}:{}", pg_host, pg_port);

        let admin_pool = PgPool::connect(&format!("{}/postgres", base_url))
            .await
            .context("Failed to connect to Postgres")?;

        Ok(Self {
            base_url,
            admin_pool,
            _postgres: postgres,
        })
    }

    /// Get or initialize the shared infrastructure.
    async fn get() -> &'static Self {
        SHARED_INFRA
            .get_or_init(|| async {
                Self::init()
                    .await
                    .expect("Failed to initialize shared test infrastructure")
            })
            .await
    }
}

/// Test harness that manages test infrastructure.
///
/// The Postgres container is shared across tests; the database is not.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let client = ctx.graphql();
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    /// Database pool - use this for test fixtures.
    pub db_pool: PgPool,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new().await.expect("Failed to create test harness")
    }

    async fn teardown(self) {
        // Test databases live as long as the shared container
    }
}

impl TestHarness {
    /// Creates a new test harness with its own database.
    ///
    /// This will:
    /// 1. Get or initialize the shared PostgreSQL container
    /// 2. Create a uniquely-named database for this test
    /// 3. Run migrations and connect a fresh pool to it
    pub async fn new() -> Result<Self> {
        let infra = SharedTestInfra::get().await;

        let db_name = format!("test_{}", Uuid::new_v4().simple());
        sqlx::query(&format!("CREATE DATABASE {}", db_name))
            .execute(&infra.admin_pool)
            .await
            .context("Failed to create test database")?;

        let db_pool = PgPool::connect(&format!("{}/{}", infra.base_url, db_name))
            .await
            .context("Failed to connect to test database")?;

        sqlx::migrate!("./migrations")
            .run(&db_pool)
            .await
            .context("Failed to run migrations")?;

        Ok(Self { db_pool })
    }

    /// Get a GraphQL client with no acting admin (public access).
    pub fn graphql(&self) -> GraphQLClient {
        GraphQLClient::new(self.db_pool.clone())
    }

    /// Get a GraphQL client acting as the given admin.
    pub fn graphql_as_admin(&self, admin: AdminUser) -> GraphQLClient {
        GraphQLClient::with_admin(self.db_pool.clone(), admin)
    }
}
