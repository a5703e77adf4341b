//! Student data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::student::{Student, UpdateStudentProfileParam};

pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the student profile for an existing user.
    ///
    /// # Arguments
    /// - `id` - Id of the owning user, reused as the student id
    /// - `name` - Display name, mirrors the user name
    /// - `profile_photo` - Optional photo file name
    ///
    /// # Returns
    /// - `Ok(Student)` - The created student with `ge250 = 0`
    /// - `Err(DbErr)` - Database error, e.g. the user does not exist
    pub async fn create(
        &self,
        id: i32,
        name: String,
        profile_photo: Option<String>,
    ) -> Result<Student, DbErr> {
        let entity = entity::student::ActiveModel {
            id: ActiveValue::Set(id),
            name: ActiveValue::Set(name),
            profile_photo: ActiveValue::Set(profile_photo),
            ge250: ActiveValue::Set(0),
        }
        .insert(self.db)
        .await?;

        Ok(Student::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Finds every student whose id is in `ids`, ordered by id.
    ///
    /// Missing ids are silently skipped, callers compare lengths to detect them.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Student>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Student::find()
            .filter(entity::student::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    /// Overwrites the editable profile fields.
    ///
    /// # Returns
    /// - `Ok(Student)` - The updated student
    /// - `Err(DbErr::RecordNotUpdated)` - No student with that id
    pub async fn update(&self, param: UpdateStudentProfileParam) -> Result<Student, DbErr> {
        let entity = entity::student::ActiveModel {
            id: ActiveValue::Unchanged(param.id),
            name: ActiveValue::Set(param.name),
            profile_photo: ActiveValue::Set(param.profile_photo),
            ge250: ActiveValue::Set(param.ge250),
        }
        .update(self.db)
        .await?;

        Ok(Student::from_entity(entity))
    }

    /// # Returns
    /// - `Ok(u64)` - Number of rows removed (0 when the student did not exist)
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
