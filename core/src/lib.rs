// src/lib.rs

//! catalog_query: parameterized SQL for the product catalog.
//!
//! The crate turns loosely-typed request inputs into statements whose SQL text
//! only ever contains positional `?` placeholders. Every value travels
//! separately in an ordered parameter list:
//!  - `FilterInput` -> `ProductFilter`: coercion of raw query-string values.
//!  - `ProductFilter` -> `Vec<Predicate>`: one predicate per present filter,
//!    each owning its SQL fragment and the values for its placeholders.
//!  - `Statement::select_products`: folds the predicates onto the base query
//!    and appends pagination last.
//!  - `Statement::find_product` / `insert_product` / `delete_product` for the
//!    sibling single-row operations.
//!
//! Nothing here performs I/O. Binding `SqlValue`s to a driver is left to the
//! caller.

pub mod builder;
pub mod error;
pub mod filter;
pub mod product;
pub mod statement;
pub mod value;

// --- Re-exports for the Public API ---

pub use crate::builder::{Predicate, PRODUCT_COLUMNS};
pub use crate::error::{QueryError, QueryResult};
pub use crate::filter::{CategoryFilter, FilterInput, Pagination, ProductFilter};
pub use crate::product::{NewProduct, ProductDraft, ProductId};
pub use crate::statement::Statement;
pub use crate::value::SqlValue;
