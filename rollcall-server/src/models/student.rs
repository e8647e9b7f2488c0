//! Student input parsing
//!
//! Forms arrive as raw text. `name` and `grade` must be non-empty, `age` must
//! parse as an integer. No range checks are applied to `age`.

use serde::Deserialize;

use super::ValidationError;

/// Raw `name`/`age`/`grade` fields as posted by the add and update forms
#[derive(Debug, Default, Deserialize)]
pub struct StudentForm {
    pub name: Option<String>,
    pub age: Option<String>,
    pub grade: Option<String>,
}

/// Validated student fields, ready for insert or update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub age: i64,
    pub grade: String,
}

impl NewStudent {
    /// Build from already-typed values, rejecting a blank name or grade.
    ///
    /// # Example
    /// ```
    /// use rollcall_server::models::NewStudent;
    ///
    /// assert!(NewStudent::new("Alice", 20, "A").is_ok());
    /// assert!(NewStudent::new("  ", 20, "A").is_err());
    /// ```
    pub fn new(name: &str, age: i64, grade: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: non_empty("name", name)?,
            age,
            grade: non_empty("grade", grade)?,
        })
    }
}

impl TryFrom<StudentForm> for NewStudent {
    type Error = ValidationError;

    fn try_from(form: StudentForm) -> Result<Self, Self::Error> {
        let name = form.name.ok_or(ValidationError::Missing { field: "name" })?;
        let age = form.age.ok_or(ValidationError::Missing { field: "age" })?;
        let grade = form.grade.ok_or(ValidationError::Missing { field: "grade" })?;

        let age = age.trim();
        if age.is_empty() {
            return Err(ValidationError::Empty { field: "age" });
        }
        let age = age.parse::<i64>().map_err(|_| ValidationError::InvalidFormat {
            field: "age",
            reason: "must be a whole number",
        })?;

        Self::new(&name, age, &grade)
    }
}

fn non_empty(field: &'static str, value: &str) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(value.to_owned())
}
