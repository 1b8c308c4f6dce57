//! 订单实体

use serde::{Deserialize, Serialize};
use storefront_common::{EntityKind, OrderId, ProductId, UserId};
use storefront_domain_core::{Entity, StoredEntity};

/// 订单实体
///
/// user_id 与 items 仅作引用记录，不做存在性校验
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<ProductId>,
    pub total: f64,
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &OrderId {
        &self.id
    }
}

impl StoredEntity for Order {
    const KIND: EntityKind = EntityKind::Order;

    fn assign_id(&mut self, id: OrderId) {
        self.id = id;
    }
}
