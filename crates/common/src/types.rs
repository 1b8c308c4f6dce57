//! 通用类型定义

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// 实体类别
///
/// 用于错误消息和日志中标识记录所属的集合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    User,
    Product,
    Order,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::User => write!(f, "User"),
            EntityKind::Product => write!(f, "Product"),
            EntityKind::Order => write!(f, "Order"),
        }
    }
}

/// 用户 ID
///
/// 由仓库顺序分配，序列化为普通整数
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, From, Into,
)]
#[display("{_0}")]
pub struct UserId(pub i64);

/// 商品 ID
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, From, Into,
)]
#[display("{_0}")]
pub struct ProductId(pub i64);

/// 订单 ID
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, From, Into,
)]
#[display("{_0}")]
pub struct OrderId(pub i64);
