//! Student repository
//!
//! One parameterized statement per operation against the `students` table.
//! Update and delete report the number of affected rows; zero is not an error.

use sqlx::{FromRow, SqlitePool};

use crate::db::DbError;
use crate::models::NewStudent;

/// Student row from the database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub grade: String,
}

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS students (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        age INTEGER NOT NULL,
        grade TEXT NOT NULL
    )
"#;

/// Student repository
pub struct StudentRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> StudentRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the `students` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), DbError> {
        sqlx::query(CREATE_TABLE).execute(self.pool).await?;
        tracing::info!("students table ready");
        Ok(())
    }

    /// All students in the store's natural (insertion) order.
    pub async fn list_all(&self) -> Result<Vec<Student>, DbError> {
        let students = sqlx::query_as::<_, Student>("SELECT id, name, age, grade FROM students")
            .fetch_all(self.pool)
            .await?;

        tracing::debug!(count = students.len(), "listed students");
        Ok(students)
    }

    /// Look up a single student. `None` when no row has this id.
    pub async fn get(&self, id: i64) -> Result<Option<Student>, DbError> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT id, name, age, grade FROM students WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(student)
    }

    /// Insert a student and return the id the store assigned.
    pub async fn insert(&self, student: &NewStudent) -> Result<i64, DbError> {
        let result = sqlx::query("INSERT INTO students (name, age, grade) VALUES (?, ?, ?)")
            .bind(&student.name)
            .bind(student.age)
            .bind(&student.grade)
            .execute(self.pool)
            .await?;

        let id = result.last_insert_rowid();
        tracing::debug!(id, "inserted student");
        Ok(id)
    }

    /// Overwrite all fields of the student with `id`.
    ///
    /// Returns the number of rows changed (0 or 1).
    pub async fn update(&self, id: i64, student: &NewStudent) -> Result<u64, DbError> {
        let result = sqlx::query("UPDATE students SET name = ?, age = ?, grade = ? WHERE id = ?")
            .bind(&student.name)
            .bind(student.age)
            .bind(&student.grade)
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Hard-delete the student with `id`. Returns the number of rows removed.
    pub async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Number of stored students.
    pub async fn count(&self) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM students")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;
    use tempfile::TempDir;

    async fn setup() -> (TempDir, SqlitePool) {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_pool(&dir.path().join("students.db")).await.unwrap();
        StudentRepo::new(&pool).ensure_schema().await.unwrap();
        (dir, pool)
    }

    fn new_student(name: &str, age: i64, grade: &str) -> NewStudent {
        NewStudent {
            name: name.to_string(),
            age,
            grade: grade.to_string(),
        }
    }

    fn row(id: i64, name: &str, age: i64, grade: &str) -> Student {
        Student {
            id,
            name: name.to_string(),
            age,
            grade: grade.to_string(),
        }
    }

    #[tokio::test]
    async fn empty_table_lists_nothing() {
        let (_dir, pool) = setup().await;
        let students = StudentRepo::new(&pool).list_all().await.unwrap();
        assert!(students.is_empty());
    }

    #[tokio::test]
    async fn insert_assigns_unique_positive_ids() {
        let (_dir, pool) = setup().await;
        let repo = StudentRepo::new(&pool);

        let first = repo.insert(&new_student("Alice", 20, "A")).await.unwrap();
        let second = repo.insert(&new_student("Alice", 20, "A")).await.unwrap();

        assert!(first > 0);
        assert!(second > first);

        let students = repo.list_all().await.unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0], row(first, "Alice", 20, "A"));
        assert_eq!(students[1], row(second, "Alice", 20, "A"));
    }

    #[tokio::test]
    async fn crud_scenario() {
        let (_dir, pool) = setup().await;
        let repo = StudentRepo::new(&pool);

        repo.insert(&new_student("Alice", 20, "A")).await.unwrap();
        assert_eq!(repo.list_all().await.unwrap(), vec![row(1, "Alice", 20, "A")]);

        repo.insert(&new_student("Bob", 22, "B")).await.unwrap();
        assert_eq!(
            repo.list_all().await.unwrap(),
            vec![row(1, "Alice", 20, "A"), row(2, "Bob", 22, "B")]
        );

        let changed = repo
            .update(1, &new_student("Alicia", 21, "A+"))
            .await
            .unwrap();
        assert_eq!(changed, 1);
        assert_eq!(repo.get(1).await.unwrap(), Some(row(1, "Alicia", 21, "A+")));

        let removed = repo.delete(2).await.unwrap();
        assert_eq!(removed, 1);
        assert_eq!(repo.get(2).await.unwrap(), None);
        assert_eq!(repo.list_all().await.unwrap(), vec![row(1, "Alicia", 21, "A+")]);
    }

    #[tokio::test]
    async fn missing_id_update_and_delete_are_noops() {
        let (_dir, pool) = setup().await;
        let repo = StudentRepo::new(&pool);
        repo.insert(&new_student("Alice", 20, "A")).await.unwrap();

        assert_eq!(repo.update(42, &new_student("Zed", 1, "Z")).await.unwrap(), 0);
        assert_eq!(repo.delete(42).await.unwrap(), 0);
        assert_eq!(repo.list_all().await.unwrap(), vec![row(1, "Alice", 20, "A")]);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let (_dir, pool) = setup().await;
        let repo = StudentRepo::new(&pool);

        let first = repo.insert(&new_student("Alice", 20, "A")).await.unwrap();
        repo.delete(first).await.unwrap();
        let second = repo.insert(&new_student("Bob", 22, "B")).await.unwrap();

        assert!(second > first);
    }

    #[tokio::test]
    async fn ensure_schema_is_idempotent() {
        let (_dir, pool) = setup().await;
        let repo = StudentRepo::new(&pool);
        repo.insert(&new_student("Alice", 20, "A")).await.unwrap();

        repo.ensure_schema().await.unwrap();

        let (tables,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'students'",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(tables, 1);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn values_are_bound_not_interpolated() {
        let (_dir, pool) = setup().await;
        let repo = StudentRepo::new(&pool);

        let name = "Robert'); DROP TABLE students;--";
        let id = repo.insert(&new_student(name, 10, "C")).await.unwrap();

        assert_eq!(repo.get(id).await.unwrap(), Some(row(id, name, 10, "C")));
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
