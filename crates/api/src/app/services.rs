//! Store wiring for the process.

use std::sync::Arc;

use rollcall_infra::repository::{InMemoryStore, Repository};
use rollcall_infra::service::ResourceService;
use rollcall_students::Student;

/// Service type the student routes talk to: the CRUD service over whichever
/// store the process was wired with.
pub type StudentService = ResourceService<Student, Arc<dyn Repository<Student>>>;

/// Shared handle to every store-backed service the routes need.
///
/// Owns the repository for the life of the process: construct once at
/// startup, share via `Extension`, drop at shutdown.
pub struct AppServices {
    students: StudentService,
}

impl AppServices {
    pub fn new(store: Arc<dyn Repository<Student>>) -> Self {
        Self {
            students: ResourceService::new(store),
        }
    }

    pub fn students(&self) -> &StudentService {
        &self.students
    }
}

/// Build the default service wiring.
///
/// With the `postgres` feature enabled and `DATABASE_URL` set, the process
/// runs against Postgres; otherwise it falls back to the in-memory store.
pub async fn build_services() -> anyhow::Result<AppServices> {
    #[cfg(feature = "postgres")]
    {
        use anyhow::Context as _;

        if let Ok(url) = std::env::var("DATABASE_URL") {
            let pool = sqlx::PgPool::connect(&url)
                .await
                .context("failed to connect to DATABASE_URL")?;
            return Ok(AppServices::new(Arc::new(
                rollcall_infra::repository::PostgresStudentStore::new(pool),
            )));
        }
        tracing::warn!("postgres feature enabled but DATABASE_URL not set; using in-memory store");
    }

    Ok(AppServices::new(Arc::new(InMemoryStore::<Student>::new())))
}
