//! 内存 Repository 适配器
//!
//! 以插入顺序保存记录，所有查找均为按 id 的线性扫描，
//! 仅适用于演示规模的数据集。每个仓库实例用一把读写锁
//! 串行化访问，保证任意两次变更不会交错。

use std::fmt::Display;

use async_trait::async_trait;
use tokio::sync::RwLock;

use storefront_domain_core::StoredEntity;
use storefront_errors::{AppError, AppResult};
use storefront_ports::Repository;

/// 仓库内部状态：插入顺序的记录序列与下一个待分配 id
struct StoreState<T> {
    records: Vec<T>,
    next_id: i64,
}

/// 内存 Repository 实现
///
/// id 从 1 开始单调递增，删除后不复用
pub struct InMemoryRepository<T> {
    state: RwLock<StoreState<T>>,
}

impl<T> InMemoryRepository<T> {
    /// 创建空仓库
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl<T> InMemoryRepository<T>
where
    T: StoredEntity,
    T::Id: Into<i64> + Copy,
{
    /// 从可能缺失的初始数据构建仓库
    ///
    /// None 视同空仓库；id 计数从已有最大 id 之后继续
    pub fn seeded(records: Option<Vec<T>>) -> Self {
        let records = records.unwrap_or_default();
        let next_id = records
            .iter()
            .map(|record| (*record.id()).into())
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            state: RwLock::new(StoreState { records, next_id }),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found<T>(id: T::Id) -> AppError
where
    T: StoredEntity,
    T::Id: Display,
{
    AppError::not_found(format!("{} {} not found", T::KIND, id))
}

#[async_trait]
impl<T> Repository<T> for InMemoryRepository<T>
where
    T: StoredEntity + Clone + Send + Sync + 'static,
    T::Id: From<i64> + Into<i64> + PartialEq + Copy + Display + Send + Sync + 'static,
{
    async fn list(&self) -> AppResult<Vec<T>> {
        Ok(self.state.read().await.records.clone())
    }

    async fn get(&self, id: &T::Id) -> AppResult<T> {
        let state = self.state.read().await;
        state
            .records
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .ok_or_else(|| not_found::<T>(*id))
    }

    async fn create(&self, mut record: T) -> AppResult<T> {
        let mut state = self.state.write().await;
        let id = T::Id::from(state.next_id);
        state.next_id += 1;

        record.assign_id(id);
        state.records.push(record.clone());

        let kind = T::KIND;
        tracing::info!(kind = %kind, id = %id, "Record created");
        Ok(record)
    }

    async fn update(&self, id: &T::Id, mut record: T) -> AppResult<T> {
        let mut state = self.state.write().await;
        let position = state
            .records
            .iter()
            .position(|existing| existing.id() == id)
            .ok_or_else(|| not_found::<T>(*id))?;

        record.assign_id(*id);
        state.records[position] = record.clone();

        let kind = T::KIND;
        tracing::info!(kind = %kind, id = %id, "Record replaced");
        Ok(record)
    }

    async fn delete(&self, id: &T::Id) -> AppResult<()> {
        let mut state = self.state.write().await;
        let position = state
            .records
            .iter()
            .position(|existing| existing.id() == id)
            .ok_or_else(|| not_found::<T>(*id))?;

        state.records.remove(position);

        let kind = T::KIND;
        tracing::info!(kind = %kind, id = %id, "Record deleted");
        Ok(())
    }
}
