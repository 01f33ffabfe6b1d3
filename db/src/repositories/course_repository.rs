use crate::filters::CourseFilter;
use crate::models::{
    course::{Column, Entity, Model},
    instructor,
};
use crate::repositories::repository::Repository;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Select,
};

/// A course joined with the instructor it references, if that instructor still exists.
pub type CourseWithInstructor = (Model, Option<instructor::Model>);

#[derive(Clone)]
pub struct CourseRepository {
    db: DatabaseConnection,
}

impl CourseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every course in id order with its instructor row attached.
    pub async fn find_all_with_instructor(&self) -> Result<Vec<CourseWithInstructor>, DbErr> {
        Entity::find()
            .find_also_related(instructor::Entity)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn find_by_id_with_instructor(
        &self,
        id: i64,
    ) -> Result<Option<CourseWithInstructor>, DbErr> {
        Entity::find_by_id(id)
            .find_also_related(instructor::Entity)
            .one(&self.db)
            .await
    }

    /// Loads the instructor a single course points at.
    pub async fn instructor_of(&self, course: &Model) -> Result<Option<instructor::Model>, DbErr> {
        course.find_related(instructor::Entity).one(&self.db).await
    }
}

impl Repository<Entity, CourseFilter> for CourseRepository {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn apply_filter(query: Select<Entity>, filter: &CourseFilter) -> Select<Entity> {
        let mut condition = Condition::all();
        if let Some(title) = &filter.title {
            condition = condition.add(Column::Title.eq(title.clone()));
        }
        if let Some(instructor_id) = filter.instructor_id {
            condition = condition.add(Column::InstructorId.eq(instructor_id));
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
