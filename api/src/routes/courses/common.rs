use crate::routes::instructors::common::InstructorResponse;
use chrono::{DateTime, Utc};
use db::repositories::course_repository::CourseWithInstructor;
use serde::{Deserialize, Serialize};
use services::course::{CreateCourse, UpdateCourse};

/// Body of `POST /courses` and `PUT /courses/{id}`.
///
/// `instructor` is the id of an existing instructor. Dates are RFC 3339.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequest {
    pub title: Option<String>,
    pub instructor: Option<i64>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub enrolment_count: Option<i64>,
}

impl From<CourseRequest> for CreateCourse {
    fn from(req: CourseRequest) -> Self {
        Self {
            title: req.title.unwrap_or_default(),
            instructor_id: req.instructor,
            start_date: req.start_date,
            end_date: req.end_date,
            subject: req.subject,
            description: req.description,
            enrolment_count: req.enrolment_count,
        }
    }
}

impl From<CourseRequest> for UpdateCourse {
    fn from(req: CourseRequest) -> Self {
        Self {
            title: req.title,
            instructor_id: req.instructor,
            start_date: req.start_date,
            end_date: req.end_date,
            subject: req.subject,
            description: req.description,
            enrolment_count: req.enrolment_count,
        }
    }
}

/// The `instructor` field of a course: the full record when it still exists,
/// otherwise the id the course was saved with.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InstructorRef {
    Embedded(InstructorResponse),
    Id(i64),
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: i64,
    pub title: String,
    pub instructor: InstructorRef,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub enrolment_count: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CourseWithInstructor> for CourseResponse {
    fn from((course, instructor): CourseWithInstructor) -> Self {
        let instructor = match instructor {
            Some(instructor) => InstructorRef::Embedded(instructor.into()),
            None => InstructorRef::Id(course.instructor_id),
        };

        Self {
            id: course.id,
            title: course.title,
            instructor,
            start_date: course.start_date.map(|d| d.to_rfc3339()),
            end_date: course.end_date.map(|d| d.to_rfc3339()),
            subject: course.subject,
            description: course.description,
            enrolment_count: course.enrolment_count,
            created_at: course.created_at.to_rfc3339(),
            updated_at: course.updated_at.to_rfc3339(),
        }
    }
}
