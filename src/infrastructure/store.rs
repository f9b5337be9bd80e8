//! 内存存储基础设施

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::app::product::model::Product;
use crate::core::error::CoreError;

/// 按插入顺序保存产品的内存存储
///
/// 每个方法只获取一次锁，调用方看到的每次读写都是原子的。
#[derive(Clone, Default)]
pub struct InMemoryProductStore {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Product>>, CoreError> {
        self.products
            .read()
            .map_err(|_| CoreError::InternalServerError("产品存储读锁已中毒".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Product>>, CoreError> {
        self.products
            .write()
            .map_err(|_| CoreError::InternalServerError("产品存储写锁已中毒".to_string()))
    }

    /// 在读锁内对全部产品执行 `f`，避免整体克隆
    pub fn with_all<R>(&self, f: impl FnOnce(&[Product]) -> R) -> Result<R, CoreError> {
        let products = self.read()?;
        Ok(f(&products))
    }

    pub fn find(&self, id: Uuid) -> Result<Option<Product>, CoreError> {
        let products = self.read()?;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    pub fn insert(&self, product: Product) -> Result<(), CoreError> {
        let mut products = self.write()?;
        if products.iter().any(|p| p.id == product.id) {
            return Err(CoreError::InternalServerError(format!(
                "产品 ID 重复: {}",
                product.id
            )));
        }
        products.push(product);
        Ok(())
    }

    /// 替换同 ID 的记录，不存在时返回 `None`
    pub fn replace(&self, product: Product) -> Result<Option<Product>, CoreError> {
        let mut products = self.write()?;
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => {
                *slot = product.clone();
                Ok(Some(product))
            }
            None => Ok(None),
        }
    }

    pub fn remove(&self, id: Uuid) -> Result<Option<Product>, CoreError> {
        let mut products = self.write()?;
        let index = products.iter().position(|p| p.id == id);
        Ok(index.map(|index| products.remove(index)))
    }

    #[cfg(test)]
    pub fn len(&self) -> Result<usize, CoreError> {
        Ok(self.read()?.len())
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> Result<bool, CoreError> {
        Ok(self.read()?.is_empty())
    }
}
