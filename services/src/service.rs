use async_trait::async_trait;
use db::repositories::repository::Repository;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbErr, EntityTrait, IntoActiveModel, PrimaryKeyTrait,
};
use util::validation::format_validation_errors;
use validator::ValidationErrors;

/// Every way a resource manager operation can fail.
///
/// The message of each variant is meant to be shown to the caller as-is.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A required field is missing/empty or a value is out of range.
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    /// An update request whose provided fields all equal the stored values.
    #[error("{0}")]
    NoChanges(String),
    /// Another record already holds the uniqueness key.
    #[error("{0}")]
    Duplicate(String),
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        ServiceError::Validation(format_validation_errors(&errors))
    }
}

/// Conversion of a create/update payload into a SeaORM active model.
///
/// Runs after all guard clauses have passed.
pub trait ToActiveModel<E>
where
    E: EntityTrait,
{
    fn into_active_model(self) -> E::ActiveModel;
}

/// Read and delete operations shared by both resource managers.
///
/// Create and update carry resource specific guard clauses and are implemented
/// on the concrete services.
#[async_trait]
pub trait Service<E, F, R>: Send + Sync
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i64>,
    E::Model: Send + Sync + 'static + IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
    F: Send + Sync + Default + 'static,
    R: Repository<E, F> + 'static,
{
    /// Lower-case resource name used in messages, e.g. `"instructor"`.
    const RESOURCE: &'static str;

    fn repository(&self) -> &R;

    fn not_found(id: i64) -> ServiceError {
        ServiceError::NotFound(format!("No such {} with ID: {} found!", Self::RESOURCE, id))
    }

    async fn find_all(&self) -> Result<Vec<E::Model>, ServiceError> {
        Ok(self.repository().find_all(&F::default()).await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<E::Model, ServiceError> {
        self.repository()
            .find_by_id(id)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repository().delete(id).await? {
            return Err(Self::not_found(id));
        }
        log::info!("Deleted {} {}", Self::RESOURCE, id);
        Ok(())
    }
}

/// Trims `value` and rejects it when nothing is left.
pub(crate) fn require_text(value: Option<&str>, message: &str) -> Result<(), ServiceError> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(()),
        _ => Err(ServiceError::Validation(message.to_string())),
    }
}

/// `true` when a provided value differs from the stored one.
pub(crate) fn differs<T: PartialEq>(provided: Option<&T>, stored: &T) -> bool {
    provided.is_some_and(|value| value != stored)
}

/// Like [`differs`] for columns that are themselves optional.
pub(crate) fn differs_opt<T: PartialEq>(provided: Option<&T>, stored: Option<&T>) -> bool {
    provided.is_some_and(|value| Some(value) != stored)
}
