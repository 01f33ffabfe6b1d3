use crate::filters::InstructorFilter;
use crate::models::instructor::{Column, Entity};
use crate::repositories::repository::Repository;
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, QueryFilter, QueryOrder, Select};

#[derive(Clone)]
pub struct InstructorRepository {
    db: DatabaseConnection,
}

impl InstructorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl Repository<Entity, InstructorFilter> for InstructorRepository {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn apply_filter(query: Select<Entity>, filter: &InstructorFilter) -> Select<Entity> {
        let mut condition = Condition::all();
        if let Some(name) = &filter.name {
            condition = condition.add(Column::Name.eq(name.clone()));
        }
        match &filter.profile {
            Some(Some(profile)) => condition = condition.add(Column::Profile.eq(profile.clone())),
            Some(None) => condition = condition.add(Column::Profile.is_null()),
            None => {}
        }
        if let Some(id) = filter.exclude_id {
            condition = condition.add(Column::Id.ne(id));
        }
        query.filter(condition)
    }

    fn apply_sorting(query: Select<Entity>) -> Select<Entity> {
        query.order_by_asc(Column::Id)
    }
}
