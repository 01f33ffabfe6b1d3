use serde::{Deserialize, Serialize};
use services::instructor::{CreateInstructor, Instructor, UpdateInstructor};

/// Body of `POST /instructors` and `PUT /instructors/{id}`.
///
/// Every field is optional at the JSON level so that missing required fields
/// are reported with the resource's own message instead of a decoder error.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorRequest {
    pub name: Option<String>,
    pub qualification: Option<String>,
    pub profile: Option<String>,
    pub courses_taught: Option<i64>,
}

impl From<InstructorRequest> for CreateInstructor {
    fn from(req: InstructorRequest) -> Self {
        Self {
            name: req.name.unwrap_or_default(),
            qualification: req.qualification,
            profile: req.profile,
            courses_taught: req.courses_taught,
        }
    }
}

impl From<InstructorRequest> for UpdateInstructor {
    fn from(req: InstructorRequest) -> Self {
        Self {
            name: req.name,
            qualification: req.qualification,
            profile: req.profile,
            courses_taught: req.courses_taught,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorResponse {
    pub id: i64,
    pub name: String,
    pub qualification: Option<String>,
    pub profile: Option<String>,
    pub courses_taught: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Instructor> for InstructorResponse {
    fn from(instructor: Instructor) -> Self {
        Self {
            id: instructor.id,
            name: instructor.name,
            qualification: instructor.qualification,
            profile: instructor.profile,
            courses_taught: instructor.courses_taught,
            created_at: instructor.created_at.to_rfc3339(),
            updated_at: instructor.updated_at.to_rfc3339(),
        }
    }
}
