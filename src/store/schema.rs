//! Table definitions
//!
//! `ensure_schema` creates the three entity tables if absent. Existing tables
//! are left untouched; there is no migration path for incompatible schemas.

use crate::error::Result;
use crate::records::{COURSES_TABLE, SCORES_TABLE, STUDENTS_TABLE};
use deadpool_postgres::Pool;
use tracing::info;

const CREATE_STUDENTS: &str = r#"
    CREATE TABLE IF NOT EXISTS students (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        mobile TEXT NOT NULL,
        email TEXT NOT NULL
    )
"#;

const CREATE_COURSES: &str = r#"
    CREATE TABLE IF NOT EXISTS courses (
        id BIGSERIAL PRIMARY KEY,
        course_name TEXT NOT NULL
    )
"#;

// No uniqueness on (student_id, course_id); update-score takes the lowest id
// when duplicates exist.
const CREATE_SCORES: &str = r#"
    CREATE TABLE IF NOT EXISTS studentscores (
        id BIGSERIAL PRIMARY KEY,
        student_id BIGINT NOT NULL REFERENCES students(id),
        course_id BIGINT NOT NULL REFERENCES courses(id),
        score TEXT NOT NULL
    )
"#;

pub async fn ensure_schema(pool: &Pool) -> Result<()> {
    let client = pool.get().await?;

    for ddl in [CREATE_STUDENTS, CREATE_COURSES, CREATE_SCORES] {
        client.batch_execute(ddl).await?;
    }

    info!(
        "Schema ensured: {}, {}, {}",
        STUDENTS_TABLE, COURSES_TABLE, SCORES_TABLE
    );
    Ok(())
}
