use chrono::NaiveDateTime;
use sea_orm::prelude::*;

use crate::entities::v1::tokens::{ActiveModel, Entity, Model};
use crate::entities::v1::users;

impl Model {
    /// Load a token together with its owner
    #[::tracing::instrument(skip(db))]
    pub async fn find_with_user(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<(Self, users::Model)>, DbErr> {
        let found = Entity::find_by_id(id)
            .find_also_related(users::Entity)
            .one(db)
            .await?;

        Ok(found.and_then(|(token, user)| user.map(|user| (token, user))))
    }

    pub fn is_expired_at(&self, at: NaiveDateTime) -> bool {
        matches!(self.expired_at, Some(expired_at) if expired_at <= at)
    }

    pub async fn store(&self, db: &DatabaseConnection) -> Result<Self, DbErr> {
        ActiveModel::from(self.clone()).insert(db).await
    }

    /// Delete a single token, returns whether a row was removed
    #[::tracing::instrument(skip(db))]
    pub async fn revoke(db: &DatabaseConnection, id: Uuid) -> Result<bool, DbErr> {
        let result = Entity::delete_by_id(id).exec(db).await?;

        Ok(result.rows_affected > 0)
    }
}
