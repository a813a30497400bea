use sea_orm::DatabaseConnection;

use crate::entities::v1::tokens::Model;
use crate::errors::Error;
use crate::middlewares::v1::auth::Auth;
use crate::responses::v1::Success;

/// Revoke the token the request was authenticated with
#[::tracing::instrument(skip(auth, db), fields(user_id = %auth.user.id, token_id = %auth.id))]
pub async fn logout(auth: Auth, db: &DatabaseConnection) -> Result<Success, Error> {
    if !Model::revoke(db, auth.id).await? {
        ::tracing::warn!("Token disappeared before logout");
    }

    ::tracing::info!("User logged out");

    Ok(Success::default())
}
