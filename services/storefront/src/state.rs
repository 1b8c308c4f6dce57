//! 应用状态

use std::sync::Arc;

use storefront_adapter_memory::InMemoryRepository;
use storefront_ports::Repository;

use crate::domain::{Order, Product, User};

/// 各实体仓库的持有者
///
/// 仓库在进程启动时创建一次，经由 State 注入各路由，
/// 除路由层外没有其他持有者
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn Repository<User>>,
    pub products: Arc<dyn Repository<Product>>,
    pub orders: Arc<dyn Repository<Order>>,
}

impl AppState {
    /// 以空仓库构建状态
    pub fn new() -> Self {
        let users: Arc<dyn Repository<User>> = Arc::new(InMemoryRepository::new());
        let products: Arc<dyn Repository<Product>> = Arc::new(InMemoryRepository::new());
        let orders: Arc<dyn Repository<Order>> = Arc::new(InMemoryRepository::new());

        Self {
            users,
            products,
            orders,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
