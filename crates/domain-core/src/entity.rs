//! 实体基础 trait

use storefront_common::EntityKind;

/// 实体 trait
pub trait Entity {
    type Id;

    fn id(&self) -> &Self::Id;
}

/// 仓库托管实体 trait
///
/// 记录的 id 由仓库独占分配，调用方提供的 id 会被覆盖
pub trait StoredEntity: Entity {
    /// 实体类别，用于错误消息
    const KIND: EntityKind;

    /// 覆盖记录 id（由仓库在 create/update 时调用）
    fn assign_id(&mut self, id: Self::Id);
}
