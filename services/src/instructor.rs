//! Instructor resource manager.
//!
//! Instructors are unique by `name` + `profile`. Updates run their guard
//! clauses in a fixed order: existence, no-op detection, required name,
//! duplicate detection.

use crate::service::{differs, differs_opt, require_text, Service, ServiceError, ToActiveModel};
use chrono::Utc;
use db::{
    filters::InstructorFilter,
    models::instructor::{ActiveModel, Entity},
    repositories::{instructor_repository::InstructorRepository, repository::Repository},
};
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, Set};
use validator::Validate;

pub use db::models::instructor::Model as Instructor;

const NAME_REQUIRED: &str = "The instructor's name is required!";
const NO_CHANGES: &str = "No changes were made to the instructor details that require an update!";

#[derive(Debug, Clone, Default, Validate)]
pub struct CreateInstructor {
    pub name: String,
    pub qualification: Option<String>,
    pub profile: Option<String>,

    #[validate(range(min = 0, message = "coursesTaught cannot be negative"))]
    pub courses_taught: Option<i64>,
}

/// Update payload. `name` must always be supplied; absent optional fields keep
/// their stored values.
#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateInstructor {
    pub name: Option<String>,
    pub qualification: Option<String>,
    pub profile: Option<String>,

    #[validate(range(min = 0, message = "coursesTaught cannot be negative"))]
    pub courses_taught: Option<i64>,
}

impl UpdateInstructor {
    fn changes(&self, stored: &Instructor) -> bool {
        differs(self.name.as_ref(), &stored.name)
            || differs_opt(self.qualification.as_ref(), stored.qualification.as_ref())
            || differs_opt(self.profile.as_ref(), stored.profile.as_ref())
            || differs(self.courses_taught.as_ref(), &stored.courses_taught)
    }
}

impl ToActiveModel<Entity> for CreateInstructor {
    fn into_active_model(self) -> ActiveModel {
        let now = Utc::now();
        ActiveModel {
            id: NotSet,
            name: Set(self.name),
            qualification: Set(self.qualification),
            profile: Set(self.profile),
            courses_taught: Set(self.courses_taught.unwrap_or(0)),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}

/// Applies an update on top of the stored record.
struct InstructorPatch {
    stored: Instructor,
    update: UpdateInstructor,
}

impl ToActiveModel<Entity> for InstructorPatch {
    fn into_active_model(self) -> ActiveModel {
        let mut active: ActiveModel = self.stored.into();
        if let Some(name) = self.update.name {
            active.name = Set(name);
        }
        if let Some(qualification) = self.update.qualification {
            active.qualification = Set(Some(qualification));
        }
        if let Some(profile) = self.update.profile {
            active.profile = Set(Some(profile));
        }
        if let Some(courses_taught) = self.update.courses_taught {
            active.courses_taught = Set(courses_taught);
        }
        active.updated_at = Set(Utc::now());
        active
    }
}

#[derive(Clone)]
pub struct InstructorService {
    repo: InstructorRepository,
}

impl InstructorService {
    pub fn new(repo: InstructorRepository) -> Self {
        Self { repo }
    }

    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(InstructorRepository::new(db))
    }

    async fn ensure_unique(
        &self,
        name: &str,
        profile: Option<String>,
        exclude_id: Option<i64>,
    ) -> Result<(), ServiceError> {
        let mut filter = InstructorFilter::new().with_name(name).with_profile(profile);
        if let Some(id) = exclude_id {
            filter = filter.excluding(id);
        }

        if self.repo.exists(&filter).await? {
            log::debug!("Rejected duplicate instructor {name:?}");
            return Err(ServiceError::Duplicate(format!(
                "The instructor, {name} has already been added!"
            )));
        }
        Ok(())
    }

    pub async fn create(&self, params: CreateInstructor) -> Result<Instructor, ServiceError> {
        require_text(Some(params.name.as_str()), NAME_REQUIRED)?;
        params.validate()?;
        self.ensure_unique(&params.name, params.profile.clone(), None)
            .await?;

        let instructor = self.repo.create(params.into_active_model()).await?;
        log::info!("Created instructor {} ({})", instructor.id, instructor.name);
        Ok(instructor)
    }

    pub async fn update(
        &self,
        id: i64,
        params: UpdateInstructor,
    ) -> Result<Instructor, ServiceError> {
        params.validate()?;
        let stored = self.find_by_id(id).await?;

        if !params.changes(&stored) {
            log::debug!("Rejected no-op update of instructor {id}");
            return Err(ServiceError::NoChanges(NO_CHANGES.into()));
        }

        require_text(params.name.as_deref(), NAME_REQUIRED)?;
        let name = params.name.clone().unwrap_or_default();
        let profile = params.profile.clone().or_else(|| stored.profile.clone());
        self.ensure_unique(&name, profile, Some(id)).await?;

        let patch = InstructorPatch {
            stored,
            update: params,
        };
        let instructor = self.repo.update(patch.into_active_model()).await?;
        log::info!("Updated instructor {}", instructor.id);
        Ok(instructor)
    }
}

impl Service<Entity, InstructorFilter, InstructorRepository> for InstructorService {
    const RESOURCE: &'static str = "instructor";

    fn repository(&self) -> &InstructorRepository {
        &self.repo
    }
}
