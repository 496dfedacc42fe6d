//! Server entity <-> model mappers

use commune_core::entities::Server;
use commune_core::traits::ServerListing;
use commune_core::value_objects::Snowflake;

use crate::models::{ServerListingModel, ServerModel};

impl From<ServerModel> for Server {
    fn from(model: ServerModel) -> Self {
        Server {
            id: Snowflake::new(model.id),
            name: model.name,
            owner_id: Snowflake::new(model.owner_id),
            category_id: Snowflake::new(model.category_id),
            description: model.description,
            icon: model.icon,
            banner: model.banner,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<ServerListingModel> for ServerListing {
    fn from(model: ServerListingModel) -> Self {
        let member_count = model.member_count;
        let server = Server {
            id: Snowflake::new(model.id),
            name: model.name,
            owner_id: Snowflake::new(model.owner_id),
            category_id: Snowflake::new(model.category_id),
            description: model.description,
            icon: model.icon,
            banner: model.banner,
            created_at: model.created_at,
            updated_at: model.updated_at,
        };
        ServerListing {
            server,
            member_count,
        }
    }
}
