//! Course resource manager.
//!
//! Same shape as the instructor manager, keyed on `title` + `instructor`.
//! Reads return the course together with the instructor it references so the
//! HTTP layer can embed it.

use crate::service::{differs, differs_opt, require_text, Service, ServiceError, ToActiveModel};
use chrono::{DateTime, Utc};
use db::{
    filters::CourseFilter,
    models::course::{ActiveModel, Entity},
    repositories::{
        course_repository::{CourseRepository, CourseWithInstructor},
        repository::Repository,
    },
};
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, Set};
use validator::Validate;

pub use db::models::course::Model as Course;

const TITLE_AND_INSTRUCTOR_REQUIRED: &str = "The course's title and its instructor are required!";
const NO_CHANGES: &str = "No changes were made to the course details that require an update!";

#[derive(Debug, Clone, Default, Validate)]
pub struct CreateCourse {
    pub title: String,
    pub instructor_id: Option<i64>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub subject: Option<String>,
    pub description: Option<String>,

    #[validate(range(min = 0, message = "enrolmentCount cannot be negative"))]
    pub enrolment_count: Option<i64>,
}

/// Update payload. `title` and `instructor_id` must always be supplied; absent
/// optional fields keep their stored values.
#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateCourse {
    pub title: Option<String>,
    pub instructor_id: Option<i64>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub subject: Option<String>,
    pub description: Option<String>,

    #[validate(range(min = 0, message = "enrolmentCount cannot be negative"))]
    pub enrolment_count: Option<i64>,
}

impl UpdateCourse {
    fn changes(&self, stored: &Course) -> bool {
        differs(self.title.as_ref(), &stored.title)
            || differs(self.instructor_id.as_ref(), &stored.instructor_id)
            || differs_opt(self.start_date.as_ref(), stored.start_date.as_ref())
            || differs_opt(self.end_date.as_ref(), stored.end_date.as_ref())
            || differs_opt(self.subject.as_ref(), stored.subject.as_ref())
            || differs_opt(self.description.as_ref(), stored.description.as_ref())
            || differs(self.enrolment_count.as_ref(), &stored.enrolment_count)
    }
}

/// A create request that already passed its guards.
struct NewCourse {
    instructor_id: i64,
    params: CreateCourse,
}

impl ToActiveModel<Entity> for NewCourse {
    fn into_active_model(self) -> ActiveModel {
        let now = Utc::now();
        ActiveModel {
            id: NotSet,
            title: Set(self.params.title),
            instructor_id: Set(self.instructor_id),
            start_date: Set(self.params.start_date),
            end_date: Set(self.params.end_date),
            subject: Set(self.params.subject),
            description: Set(self.params.description),
            enrolment_count: Set(self.params.enrolment_count.unwrap_or(0)),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}

struct CoursePatch {
    stored: Course,
    update: UpdateCourse,
}

impl ToActiveModel<Entity> for CoursePatch {
    fn into_active_model(self) -> ActiveModel {
        let mut active: ActiveModel = self.stored.into();
        let update = self.update;
        if let Some(title) = update.title {
            active.title = Set(title);
        }
        if let Some(instructor_id) = update.instructor_id {
            active.instructor_id = Set(instructor_id);
        }
        if let Some(start_date) = update.start_date {
            active.start_date = Set(Some(start_date));
        }
        if let Some(end_date) = update.end_date {
            active.end_date = Set(Some(end_date));
        }
        if let Some(subject) = update.subject {
            active.subject = Set(Some(subject));
        }
        if let Some(description) = update.description {
            active.description = Set(Some(description));
        }
        if let Some(enrolment_count) = update.enrolment_count {
            active.enrolment_count = Set(enrolment_count);
        }
        active.updated_at = Set(Utc::now());
        active
    }
}

#[derive(Clone)]
pub struct CourseService {
    repo: CourseRepository,
}

impl CourseService {
    pub fn new(repo: CourseRepository) -> Self {
        Self { repo }
    }

    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(CourseRepository::new(db))
    }

    /// All courses, each with its instructor attached.
    pub async fn list(&self) -> Result<Vec<CourseWithInstructor>, ServiceError> {
        Ok(self.repo.find_all_with_instructor().await?)
    }

    pub async fn get(&self, id: i64) -> Result<CourseWithInstructor, ServiceError> {
        self.repo
            .find_by_id_with_instructor(id)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    async fn with_instructor(&self, course: Course) -> Result<CourseWithInstructor, ServiceError> {
        let instructor = self.repo.instructor_of(&course).await?;
        Ok((course, instructor))
    }

    async fn ensure_unique(
        &self,
        title: &str,
        instructor_id: i64,
        exclude_id: Option<i64>,
    ) -> Result<(), ServiceError> {
        let mut filter = CourseFilter::new()
            .with_title(title)
            .with_instructor_id(instructor_id);
        if let Some(id) = exclude_id {
            filter = filter.excluding(id);
        }

        if self.repo.exists(&filter).await? {
            log::debug!("Rejected duplicate course {title:?} for instructor {instructor_id}");
            return Err(ServiceError::Duplicate(format!(
                "The course {title}, taught by instructor {instructor_id} has already been added!"
            )));
        }
        Ok(())
    }

    pub async fn create(&self, params: CreateCourse) -> Result<CourseWithInstructor, ServiceError> {
        require_text(Some(params.title.as_str()), TITLE_AND_INSTRUCTOR_REQUIRED)?;
        let Some(instructor_id) = params.instructor_id else {
            return Err(ServiceError::Validation(TITLE_AND_INSTRUCTOR_REQUIRED.into()));
        };
        params.validate()?;
        self.ensure_unique(&params.title, instructor_id, None).await?;

        let new_course = NewCourse {
            instructor_id,
            params,
        };
        let course = self.repo.create(new_course.into_active_model()).await?;
        log::info!("Created course {} ({})", course.id, course.title);
        self.with_instructor(course).await
    }

    pub async fn update(
        &self,
        id: i64,
        params: UpdateCourse,
    ) -> Result<CourseWithInstructor, ServiceError> {
        params.validate()?;
        let stored = self.find_by_id(id).await?;

        if !params.changes(&stored) {
            log::debug!("Rejected no-op update of course {id}");
            return Err(ServiceError::NoChanges(NO_CHANGES.into()));
        }

        require_text(params.title.as_deref(), TITLE_AND_INSTRUCTOR_REQUIRED)?;
        let Some(instructor_id) = params.instructor_id else {
            return Err(ServiceError::Validation(TITLE_AND_INSTRUCTOR_REQUIRED.into()));
        };
        let title = params.title.clone().unwrap_or_default();
        self.ensure_unique(&title, instructor_id, Some(id)).await?;

        let patch = CoursePatch {
            stored,
            update: params,
        };
        let course = self.repo.update(patch.into_active_model()).await?;
        log::info!("Updated course {}", course.id);
        self.with_instructor(course).await
    }
}

impl Service<Entity, CourseFilter, CourseRepository> for CourseService {
    const RESOURCE: &'static str = "course";

    fn repository(&self) -> &CourseRepository {
        &self.repo
    }
}
