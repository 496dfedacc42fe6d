//! User entity <-> model mapper

use commune_core::entities::User;
use commune_core::value_objects::Snowflake;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            username: model.username,
            created_at: model.created_at,
        }
    }
}
