use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PrimaryKeyTrait, QuerySelect, Select,
};

/// Generic CRUD repository over a SeaORM entity with an `i64` primary key.
///
/// Implementors supply the connection and translate their filter type `F`
/// into a query condition; every other operation has a default body.
#[async_trait]
pub trait Repository<E, F>: Send + Sync
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i64>,
    E::Model: Send + Sync + 'static + IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
    F: Send + Sync,
{
    fn db(&self) -> &DatabaseConnection;

    fn apply_filter(query: Select<E>, filter: &F) -> Select<E>;

    /// Ordering applied to `find_all`; defaults to insertion order.
    fn apply_sorting(query: Select<E>) -> Select<E> {
        query
    }

    async fn create(&self, active_model: E::ActiveModel) -> Result<E::Model, DbErr> {
        active_model.insert(self.db()).await
    }

    async fn update(&self, active_model: E::ActiveModel) -> Result<E::Model, DbErr> {
        active_model.update(self.db()).await
    }

    /// Deletes by primary key and reports whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, DbErr> {
        let result = E::delete_by_id(id).exec(self.db()).await?;
        Ok(result.rows_affected > 0)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(self.db()).await
    }

    async fn find_one(&self, filter: &F) -> Result<Option<E::Model>, DbErr> {
        Self::apply_filter(E::find(), filter)
            .limit(1)
            .one(self.db())
            .await
    }

    async fn find_all(&self, filter: &F) -> Result<Vec<E::Model>, DbErr> {
        let query = Self::apply_filter(E::find(), filter);
        Self::apply_sorting(query).all(self.db()).await
    }

    async fn exists(&self, filter: &F) -> Result<bool, DbErr> {
        Ok(self.find_one(filter).await?.is_some())
    }
}
