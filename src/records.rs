//! Entity definitions
//!
//! The three stored record types and their request shapes. JSON field names
//! follow the public API: score rows carry their foreign keys as `student`
//! and `course`, while the columns underneath are `student_id` / `course_id`.

use serde::{Deserialize, Serialize};

pub const STUDENTS_TABLE: &str = "students";
pub const COURSES_TABLE: &str = "courses";
pub const SCORES_TABLE: &str = "studentscores";

/// A stored student row.
#[derive(Debug, Clone, Serialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub mobile: String,
    pub email: String,
}

/// Body of POST /api/students.
#[derive(Debug, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub mobile: String,
    pub email: String,
}

/// A stored course row.
#[derive(Debug, Clone, Serialize)]
pub struct Course {
    pub id: i64,
    pub course_name: String,
}

/// Body of POST /api/courses.
#[derive(Debug, Deserialize)]
pub struct NewCourse {
    pub course_name: String,
}

/// A stored score row, linking a student to a course.
///
/// The score is text, not numeric; the service stores whatever string the
/// client sent.
#[derive(Debug, Clone, Serialize)]
pub struct StudentScore {
    pub id: i64,
    pub student: i64,
    pub course: i64,
    pub score: String,
}

/// Body of POST /api/scores.
#[derive(Debug, Deserialize)]
pub struct NewScore {
    pub student: i64,
    pub course: i64,
    pub score: String,
}

/// Body of PUT /api/score/{id}/{scoreid}.
#[derive(Debug, Deserialize)]
pub struct ScoreUpdate {
    pub score: String,
}

/// One row of the scores listing: the course name joined onto the score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreLine {
    pub course_name: String,
    pub score: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_serializes_with_id() {
        let student = Student {
            id: 7,
            name: "Asha".to_string(),
            mobile: "555-0100".to_string(),
            email: "asha@example.com".to_string(),
        };
        let json = serde_json::to_value(&student).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Asha");
        assert_eq!(json["mobile"], "555-0100");
        assert_eq!(json["email"], "asha@example.com");
    }

    #[test]
    fn new_score_uses_api_field_names() {
        let body = r#"{"student": 1, "course": 2, "score": "A-"}"#;
        let parsed: NewScore = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.student, 1);
        assert_eq!(parsed.course, 2);
        assert_eq!(parsed.score, "A-");
    }

    #[test]
    fn new_student_rejects_missing_fields() {
        let body = r#"{"name": "Asha"}"#;
        assert!(serde_json::from_str::<NewStudent>(body).is_err());
    }

    #[test]
    fn score_value_is_not_validated_as_numeric() {
        let body = r#"{"score": "excellent"}"#;
        let parsed: ScoreUpdate = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.score, "excellent");
    }
}
