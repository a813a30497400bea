use std::time::Duration;

use chrono::NaiveDateTime;
use sea_orm::prelude::*;

use crate::entities::v1::tokens;
use crate::entities::v1::users::{ActiveModel, Column, Entity, Model};
use crate::helpers::now;
use crate::responses::v1::user::User;

impl Model {
    #[::tracing::instrument(skip(db))]
    pub async fn find_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    #[::tracing::instrument(skip(db, email))]
    pub async fn find_by_email<T: ToString>(
        db: &DatabaseConnection,
        email: T,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find()
            .filter(Column::Email.eq(email.to_string()))
            .one(db)
            .await
    }

    pub async fn email_exists<T: ToString>(db: &DatabaseConnection, email: T) -> Result<bool, DbErr> {
        let count = Entity::find()
            .filter(Column::Email.eq(email.to_string()))
            .count(db)
            .await?;

        Ok(count > 0)
    }

    pub async fn id_exists(db: &DatabaseConnection, id: Uuid) -> Result<bool, DbErr> {
        let count = Entity::find()
            .filter(Column::Id.eq(id))
            .count(db)
            .await?;

        Ok(count > 0)
    }

    #[::tracing::instrument(skip(self, db), fields(user_id = %self.id))]
    pub async fn store(&self, db: &DatabaseConnection) -> Result<Self, DbErr> {
        ActiveModel::from(self.clone()).insert(db).await
    }

    /// Persist a new session token for this user
    ///
    /// `lifetime` of `None` issues a token that never expires.
    #[::tracing::instrument(skip(self, db), fields(user_id = %self.id))]
    pub async fn generate_token(
        &self,
        db: &DatabaseConnection,
        lifetime: Option<Duration>,
    ) -> Result<tokens::Model, DbErr> {
        let issued_at = now();
        let expired_at = match lifetime {
            Some(lifetime) => Some(expiry(issued_at, lifetime)?),
            None => None,
        };

        let token = tokens::Model {
            id: Uuid::new_v4(),
            user_id: self.id,
            expired_at,
            created_at: issued_at,
        };

        token.store(db).await
    }
}

fn expiry(issued_at: NaiveDateTime, lifetime: Duration) -> Result<NaiveDateTime, DbErr> {
    chrono::Duration::from_std(lifetime)
        .ok()
        .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
        .ok_or_else(|| DbErr::Custom("Token lifetime is out of range".to_string()))
}

impl From<Model> for User {
    fn from(val: Model) -> Self {
        User {
            id: val.id,
            name: val.name,
            email: val.email,
            created_at: val.created_at,
        }
    }
}
