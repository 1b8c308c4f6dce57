//! 用户实体

use serde::{Deserialize, Serialize};
use storefront_common::{EntityKind, UserId};
use storefront_domain_core::{Entity, StoredEntity};

/// 用户实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &UserId {
        &self.id
    }
}

impl StoredEntity for User {
    const KIND: EntityKind = EntityKind::User;

    fn assign_id(&mut self, id: UserId) {
        self.id = id;
    }
}
