//! Repository trait 定义

use async_trait::async_trait;
use storefront_domain_core::StoredEntity;
use storefront_errors::AppResult;

/// 基础 CRUD Repository trait
///
/// 每个实体类别各持有一个实例，记录保持插入顺序
#[async_trait]
pub trait Repository<T: StoredEntity>: Send + Sync {
    /// 按插入顺序返回全部记录，空仓库返回空序列
    async fn list(&self) -> AppResult<Vec<T>>;

    /// 根据 ID 查找，无匹配时返回 NotFound
    async fn get(&self, id: &T::Id) -> AppResult<T>;

    /// 保存新记录，id 由仓库分配并覆盖调用方提供的值
    async fn create(&self, record: T) -> AppResult<T>;

    /// 替换指定 id 的记录，保留其位置与原 id，无匹配时返回 NotFound
    async fn update(&self, id: &T::Id, record: T) -> AppResult<T>;

    /// 删除记录，保持其余记录的相对顺序，无匹配时返回 NotFound
    async fn delete(&self, id: &T::Id) -> AppResult<()>;
}
