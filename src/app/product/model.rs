//! 产品数据模型

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;
use validator::Validate;

/// 产品记录
///
/// 只有 `name` 和 `category` 是强类型字段，调用方提交的其他字段
/// 原样保存在 `attributes` 中，序列化时展开到同一层级。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// 创建/更新产品的请求体
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProductPayload {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl ProductPayload {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            attributes: Map::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// 生成以 `id` 为标识的完整记录，请求体里的 `id` 字段会被丢弃
    pub fn into_product(mut self, id: Uuid) -> Product {
        self.attributes.remove("id");
        Product {
            id,
            name: self.name,
            category: self.category,
            attributes: self.attributes,
        }
    }
}

/// 列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

/// 按名称搜索的查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub name: Option<String>,
}

/// 分类 -> 产品数量
pub type CategoryStats = BTreeMap<String, usize>;
