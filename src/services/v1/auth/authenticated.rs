use crate::errors::Error;
use crate::middlewares::v1::auth::Auth;
use crate::responses::v1::user::UserResponse;

#[::tracing::instrument(skip(auth), fields(user_id = %auth.user.id, token_id = %auth.id))]
pub async fn authenticated(auth: Auth) -> Result<UserResponse, Error> {
    ::tracing::debug!("Returning authenticated user information");

    Ok(auth.user.into())
}
