//! 产品业务服务

use tracing::{debug, info};
use uuid::Uuid;

use super::model::{CategoryStats, ListQuery, Product, ProductPayload};
use crate::config::PaginationConfig;
use crate::core::error::CoreError;
use crate::infrastructure::store::InMemoryProductStore;

#[derive(Clone)]
pub struct ProductService {
    store: InMemoryProductStore,
    pagination: PaginationConfig,
}

/// 校验后的分页参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Page {
    offset: usize,
    limit: usize,
}

impl ProductService {
    pub fn new(store: InMemoryProductStore, pagination: PaginationConfig) -> Self {
        Self { store, pagination }
    }

    fn page(&self, page: Option<u32>, limit: Option<u32>) -> Result<Page, CoreError> {
        let page = page.unwrap_or(1);
        let limit = limit.unwrap_or(self.pagination.default_limit);

        if page == 0 {
            return Err(CoreError::Validation(
                "page must be a positive integer".to_string(),
            ));
        }
        if limit == 0 || limit > self.pagination.max_limit {
            return Err(CoreError::Validation(format!(
                "limit must be between 1 and {}",
                self.pagination.max_limit
            )));
        }

        let limit = limit as usize;
        Ok(Page {
            offset: (page as usize - 1).saturating_mul(limit),
            limit,
        })
    }

    /// 按分类过滤后分页，保持插入顺序；超出范围的页返回空列表
    pub fn list(&self, query: &ListQuery) -> Result<Vec<Product>, CoreError> {
        let page = self.page(query.page, query.limit)?;
        let category = query.category.as_deref().filter(|c| !c.is_empty());

        self.store.with_all(|products| {
            products
                .iter()
                .filter(|p| category.map_or(true, |c| p.category == c))
                .skip(page.offset)
                .take(page.limit)
                .cloned()
                .collect()
        })
    }

    pub fn get(&self, id: Uuid) -> Result<Product, CoreError> {
        self.store.find(id)?.ok_or_else(CoreError::product_not_found)
    }

    pub fn create(&self, payload: ProductPayload) -> Result<Product, CoreError> {
        let product = payload.into_product(Uuid::new_v4());
        self.store.insert(product.clone())?;
        info!("创建产品: {} ({})", product.name, product.id);
        Ok(product)
    }

    /// 整体替换记录，请求体中没有的字段不会保留
    pub fn update(&self, id: Uuid, payload: ProductPayload) -> Result<Product, CoreError> {
        let product = self
            .store
            .replace(payload.into_product(id))?
            .ok_or_else(CoreError::product_not_found)?;
        info!("更新产品: {} ({})", product.name, product.id);
        Ok(product)
    }

    pub fn delete(&self, id: Uuid) -> Result<Product, CoreError> {
        let product = self
            .store
            .remove(id)?
            .ok_or_else(CoreError::product_not_found)?;
        info!("删除产品: {} ({})", product.name, product.id);
        Ok(product)
    }

    /// 名称包含 `name` 的产品（不区分大小写）
    pub fn search_by_name(&self, name: Option<&str>) -> Result<Vec<Product>, CoreError> {
        let needle = match name {
            Some(name) if !name.is_empty() => name.to_lowercase(),
            _ => return Err(CoreError::Validation("Name query required".to_string())),
        };

        let result: Vec<Product> = self.store.with_all(|products| {
            products
                .iter()
                .filter(|p| p.name.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        })?;
        debug!("搜索 {:?} 命中 {} 个产品", needle, result.len());
        Ok(result)
    }

    pub fn stats(&self) -> Result<CategoryStats, CoreError> {
        self.store.with_all(|products| {
            products.iter().fold(CategoryStats::new(), |mut stats, p| {
                *stats.entry(p.category.clone()).or_insert(0) += 1;
                stats
            })
        })
    }

    #[cfg(test)]
    pub fn count(&self) -> Result<usize, CoreError> {
        self.store.len()
    }
}
