//! Filter structs consumed by the repositories' `apply_filter`.
//!
//! Every field is optional; unset fields do not constrain the query. Optional
//! columns use `Option<Option<_>>` so that "must be NULL" can be expressed.

#[derive(Debug, Clone, Default)]
pub struct InstructorFilter {
    pub name: Option<String>,
    pub profile: Option<Option<String>>,
    pub exclude_id: Option<i64>,
}

impl InstructorFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// `None` matches instructors without a profile.
    pub fn with_profile(mut self, profile: Option<String>) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn excluding(mut self, id: i64) -> Self {
        self.exclude_id = Some(id);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct CourseFilter {
    pub title: Option<String>,
    pub instructor_id: Option<i64>,
    pub exclude_id: Option<i64>,
}

impl CourseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_instructor_id(mut self, instructor_id: i64) -> Self {
        self.instructor_id = Some(instructor_id);
        self
    }

    pub fn excluding(mut self, id: i64) -> Self {
        self.exclude_id = Some(id);
        self
    }
}
