//! 请求提取器
//!
//! 包装 axum 的 `Json` / `Query` / `Path`，把提取失败统一转换为 [`CoreError`]，
//! 并在进入业务服务之前完成请求体校验。

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use super::error::CoreError;

#[derive(FromRequest)]
#[from_request(via(Json), rejection(CoreError))]
pub struct ApiJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(CoreError))]
pub struct ApiQuery<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(CoreError))]
pub struct ApiPath<T>(pub T);

/// 反序列化并通过 `validator` 校验的 JSON 请求体
///
/// 校验失败返回 400，处理器不会被调用。
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = CoreError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let ApiJson(value) = ApiJson::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
