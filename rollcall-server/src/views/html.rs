//! Built-in HTML views

use std::fmt::Write;

use super::{RenderError, Template, ViewData, ViewRenderer};
use crate::db::Student;

/// Renders the three pages as plain HTML with escaped values
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    title: String,
}

impl HtmlRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    fn page(&self, heading: &str, body: &str) -> String {
        let title = if self.title.is_empty() {
            "Student Management"
        } else {
            self.title.as_str()
        };

        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{title}</title>\n</head>\n<body>\n<h1>{heading}</h1>\n{body}</body>\n</html>\n",
            title = escape(title),
            heading = escape(heading),
            body = body,
        )
    }

    fn list(&self, students: &[Student]) -> String {
        let mut body = String::from("<p><a href=\"/add\">Add student</a></p>\n");

        if students.is_empty() {
            body.push_str("<p>No students yet.</p>\n");
            return self.page("Students", &body);
        }

        body.push_str(
            "<table>\n<thead><tr><th>ID</th><th>Name</th><th>Age</th><th>Grade</th><th></th></tr></thead>\n<tbody>\n",
        );
        for student in students {
            let _ = writeln!(
                body,
                "<tr><td>{id}</td><td>{name}</td><td>{age}</td><td>{grade}</td>\
                 <td><a href=\"/update/{id}\">Edit</a> <a href=\"/delete/{id}\">Delete</a></td></tr>",
                id = student.id,
                name = escape(&student.name),
                age = student.age,
                grade = escape(&student.grade),
            );
        }
        body.push_str("</tbody>\n</table>\n");

        self.page("Students", &body)
    }

    fn form(&self, heading: &str, action: &str, student: Option<&Student>) -> String {
        let name = student.map(|s| escape(&s.name)).unwrap_or_default();
        let age = student.map(|s| s.age.to_string()).unwrap_or_default();
        let grade = student.map(|s| escape(&s.grade)).unwrap_or_default();

        let body = format!(
            "<form method=\"post\" action=\"{action}\">\n\
             <label>Name <input type=\"text\" name=\"name\" value=\"{name}\" required></label>\n\
             <label>Age <input type=\"number\" name=\"age\" value=\"{age}\" required></label>\n\
             <label>Grade <input type=\"text\" name=\"grade\" value=\"{grade}\" required></label>\n\
             <button type=\"submit\">Save</button>\n\
             </form>\n<p><a href=\"/\">Back</a></p>\n",
        );

        self.page(heading, &body)
    }
}

impl ViewRenderer for HtmlRenderer {
    fn render(&self, template: Template, data: ViewData<'_>) -> Result<String, RenderError> {
        match (template, data) {
            (Template::StudentList, ViewData::Students(students)) => Ok(self.list(students)),
            (Template::AddStudent, ViewData::Empty) => Ok(self.form("Add Student", "/add", None)),
            (Template::UpdateStudent, ViewData::Student(student)) => {
                let action = format!("/update/{}", student.id);
                Ok(self.form("Update Student", &action, Some(student)))
            }
            (template, data) => Err(RenderError::PayloadMismatch {
                template,
                given: data.kind(),
            }),
        }
    }
}

/// Escape text for use in element content and double-quoted attributes.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
