//! 应用层

pub mod product;
pub mod routes;
