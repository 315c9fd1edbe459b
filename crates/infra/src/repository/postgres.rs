//! Postgres-backed student repository.
//!
//! A fully generic SQL store would need per-type table/column mapping, so
//! this is a concrete store for the one record type the service has. The
//! expected schema:
//!
//! ```sql
//! CREATE TABLE students (
//!     id         UUID PRIMARY KEY,
//!     email      TEXT NOT NULL,
//!     first_name TEXT NOT NULL,
//!     last_name  TEXT NOT NULL
//! );
//! ```
//!
//! Ids are UUIDv7 and assigned here, so `ORDER BY id` reproduces creation
//! order. Any uniqueness constraint the schema adds (e.g. on `email`)
//! surfaces as a `RepoError` like every other database failure.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, QueryBuilder, Row};
use uuid::Uuid;

use rollcall_core::{RecordId, Resource};
use rollcall_students::{Student, StudentDraft, StudentFilter, StudentId, StudentPatch};

use super::{RepoError, RepoResult, Repository};

/// Student repository over a sqlx connection pool.
///
/// The pool is opened by the caller at process start; dropping the store
/// releases it.
pub struct PostgresStudentStore {
    pool: PgPool,
}

impl PostgresStudentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_error(e: sqlx::Error) -> RepoError {
    RepoError::operation(e.to_string())
}

fn row_to_student(row: &PgRow) -> RepoResult<Student> {
    let id: Uuid = row.try_get("id").map_err(db_error)?;
    Ok(Student {
        id: StudentId::new(RecordId::from_uuid(id)),
        email: row.try_get("email").map_err(db_error)?,
        first_name: row.try_get("first_name").map_err(db_error)?,
        last_name: row.try_get("last_name").map_err(db_error)?,
    })
}

#[async_trait]
impl Repository<Student> for PostgresStudentStore {
    async fn list(&self, filter: StudentFilter) -> RepoResult<Vec<Student>> {
        let mut query =
            QueryBuilder::new("SELECT id, email, first_name, last_name FROM students WHERE TRUE");
        if let Some(email) = &filter.email {
            query.push(" AND email = ").push_bind(email.clone());
        }
        if let Some(first_name) = &filter.first_name {
            query
                .push(" AND lower(first_name) = lower(")
                .push_bind(first_name.clone())
                .push(")");
        }
        if let Some(last_name) = &filter.last_name {
            query
                .push(" AND lower(last_name) = lower(")
                .push_bind(last_name.clone())
                .push(")");
        }
        query.push(" ORDER BY id");

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;
        rows.iter().map(row_to_student).collect()
    }

    async fn get(&self, id: &StudentId) -> RepoResult<Option<Student>> {
        let row = sqlx::query("SELECT id, email, first_name, last_name FROM students WHERE id = $1")
            .bind(*id.0.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;
        row.as_ref().map(row_to_student).transpose()
    }

    async fn create(&self, draft: StudentDraft) -> RepoResult<Student> {
        let record = Student::from_draft(Student::fresh_id(), draft);
        sqlx::query("INSERT INTO students (id, email, first_name, last_name) VALUES ($1, $2, $3, $4)")
            .bind(*record.id.0.as_uuid())
            .bind(&record.email)
            .bind(&record.first_name)
            .bind(&record.last_name)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(record)
    }

    async fn update(&self, id: &StudentId, patch: StudentPatch) -> RepoResult<Student> {
        let row = sqlx::query(
            "UPDATE students SET \
                 email = COALESCE($2, email), \
                 first_name = COALESCE($3, first_name), \
                 last_name = COALESCE($4, last_name) \
             WHERE id = $1 \
             RETURNING id, email, first_name, last_name",
        )
        .bind(*id.0.as_uuid())
        .bind(patch.email)
        .bind(patch.first_name)
        .bind(patch.last_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        match row {
            Some(row) => row_to_student(&row),
            None => Err(RepoError::operation(format!("record {id} does not exist"))),
        }
    }
}
