//! View rendering
//!
//! Handlers name a [`Template`] and hand over a [`ViewData`] payload; a
//! [`ViewRenderer`] turns the pair into a document. The renderer sits behind
//! a trait so the HTML can be swapped out without touching the handlers.

mod html;

use std::fmt;

use crate::db::Student;

pub use html::HtmlRenderer;

/// Template identifiers known to the handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// All students with edit/delete links
    StudentList,
    /// Empty create form
    AddStudent,
    /// Edit form pre-filled from one student
    UpdateStudent,
}

impl Template {
    pub fn name(self) -> &'static str {
        match self {
            Self::StudentList => "index",
            Self::AddStudent => "add_student",
            Self::UpdateStudent => "update_student",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named payload passed to a template
#[derive(Debug, Clone, Copy)]
pub enum ViewData<'a> {
    Students(&'a [Student]),
    Student(&'a Student),
    Empty,
}

impl ViewData<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Students(_) => "students",
            Self::Student(_) => "student",
            Self::Empty => "nothing",
        }
    }
}

/// Rendering failures. Always fatal to the request.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template '{template}' cannot render {given}")]
    PayloadMismatch {
        template: Template,
        given: &'static str,
    },

    #[error("render failed: {0}")]
    Other(String),
}

/// Turns a template plus payload into a document
pub trait ViewRenderer: Send + Sync + 'static {
    fn render(&self, template: Template, data: ViewData<'_>) -> Result<String, RenderError>;
}
