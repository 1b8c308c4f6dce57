//! 商品实体

use serde::{Deserialize, Serialize};
use storefront_common::{EntityKind, ProductId};
use storefront_domain_core::{Entity, StoredEntity};

/// 商品实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &ProductId {
        &self.id
    }
}

impl StoredEntity for Product {
    const KIND: EntityKind = EntityKind::Product;

    fn assign_id(&mut self, id: ProductId) {
        self.id = id;
    }
}
