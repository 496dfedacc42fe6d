//! Channel entity <-> model mapper

use commune_core::entities::Channel;
use commune_core::value_objects::Snowflake;

use crate::models::ChannelModel;

impl From<ChannelModel> for Channel {
    fn from(model: ChannelModel) -> Self {
        Channel {
            id: Snowflake::new(model.id),
            name: model.name,
            owner_id: Snowflake::new(model.owner_id),
            topic: model.topic,
            server_id: Snowflake::new(model.server_id),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
