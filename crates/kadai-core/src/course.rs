//! Registered course descriptors supplied by the course-management side.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A registered course, as far as judgment is concerned: a free-text title
/// and a free-text instructor name, both learner-entered and possibly
/// containing full-width characters or spacing variants.
///
/// Identity and lifecycle belong to the course-management collaborator; the
/// engine only reads these two fields for the duration of one call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub instructor: String,
}

#[derive(Debug, Error)]
pub enum CourseError {
    #[error("course descriptor is not a JSON object")]
    NotAnObject,
    #[error("course list is not a JSON array")]
    NotAnArray,
    #[error("missing or non-string field: {0}")]
    MissingField(&'static str),
    #[error("blank field: {0}")]
    BlankField(&'static str),
}

impl Course {
    /// Build a descriptor, rejecting blank fields.
    ///
    /// A blank name or instructor compacts to the empty string, which is a
    /// substring of every scan and would match every judgment. Such
    /// descriptors are rejected here, at the boundary, so the scoring loop
    /// never has to special-case them.
    pub fn new(name: impl Into<String>, instructor: impl Into<String>) -> Result<Self, CourseError> {
        let name = name.into();
        let instructor = instructor.into();
        if name.trim().is_empty() {
            return Err(CourseError::BlankField("name"));
        }
        if instructor.trim().is_empty() {
            return Err(CourseError::BlankField("instructor"));
        }
        Ok(Self { name, instructor })
    }

    /// Coerce a loose JSON value into a descriptor.
    ///
    /// The surrounding app stores courses as untyped JSON; this is the one
    /// place that shape is checked. Requires an object with string `name`
    /// and `instructor` fields, neither blank.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, CourseError> {
        let obj = value.as_object().ok_or(CourseError::NotAnObject)?;
        let name = obj
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or(CourseError::MissingField("name"))?;
        let instructor = obj
            .get("instructor")
            .and_then(|v| v.as_str())
            .ok_or(CourseError::MissingField("instructor"))?;
        Self::new(name, instructor)
    }
}

/// Coerce a JSON array of descriptor objects into a course roster.
pub fn roster_from_value(value: &serde_json::Value) -> Result<Vec<Course>, CourseError> {
    value
        .as_array()
        .ok_or(CourseError::NotAnArray)?
        .iter()
        .map(Course::from_value)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_well_formed_descriptor() {
        let course = Course::from_value(&json!({
            "name": "数学Ⅰ",
            "instructor": "田中先生",
        }))
        .unwrap();
        assert_eq!(course.name, "数学Ⅰ");
        assert_eq!(course.instructor, "田中先生");
    }

    #[test]
    fn extra_fields_ignored() {
        // The store carries id/color/createdAt alongside; judgment reads
        // only name and instructor.
        let course = Course::from_value(&json!({
            "id": "course_abc123",
            "name": "物理学",
            "instructor": "佐藤先生",
            "color": "#3b82f6",
            "createdAt": "2026-04-01T09:00:00.000Z",
        }))
        .unwrap();
        assert_eq!(course.name, "物理学");
    }

    #[test]
    fn rejects_missing_name() {
        let err = Course::from_value(&json!({ "instructor": "田中先生" })).unwrap_err();
        assert!(matches!(err, CourseError::MissingField("name")));
    }

    #[test]
    fn rejects_non_string_instructor() {
        let err = Course::from_value(&json!({ "name": "数学", "instructor": 42 })).unwrap_err();
        assert!(matches!(err, CourseError::MissingField("instructor")));
    }

    #[test]
    fn rejects_blank_fields() {
        assert!(matches!(
            Course::new("", "田中先生"),
            Err(CourseError::BlankField("name"))
        ));
        assert!(matches!(
            Course::new("数学", "   "),
            Err(CourseError::BlankField("instructor"))
        ));
    }

    #[test]
    fn rejects_non_object() {
        let err = Course::from_value(&json!("数学")).unwrap_err();
        assert!(matches!(err, CourseError::NotAnObject));
    }

    #[test]
    fn roster_coercion() {
        let roster = roster_from_value(&json!([
            { "name": "数学Ⅰ", "instructor": "田中先生" },
            { "name": "英語表現", "instructor": "Smith" },
        ]))
        .unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[1].name, "英語表現");
    }

    #[test]
    fn roster_rejects_non_array() {
        let err = roster_from_value(&json!({})).unwrap_err();
        assert!(matches!(err, CourseError::NotAnArray));
    }

    #[test]
    fn roster_propagates_bad_entry() {
        let err = roster_from_value(&json!([
            { "name": "数学Ⅰ", "instructor": "田中先生" },
            { "name": "" },
        ]))
        .unwrap_err();
        assert!(matches!(err, CourseError::MissingField("instructor")));
    }

    #[test]
    fn json_roundtrip() {
        let course = Course::new("英語表現Ⅱ", "Smith").unwrap();
        let json = serde_json::to_string(&course).unwrap();
        let parsed: Course = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name, "英語表現Ⅱ");
        assert_eq!(parsed.instructor, "Smith");
    }
}
