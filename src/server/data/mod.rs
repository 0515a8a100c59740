//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for each table. They are generic over
//! [`sea_orm::ConnectionTrait`] so the same queries run against a pooled connection or an
//! open transaction. Repositories do not validate; callers run the validation layer first.

pub mod mission;
pub mod planet;
pub mod scientist;
