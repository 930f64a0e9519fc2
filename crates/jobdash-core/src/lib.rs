//! # jobdash-core - Core Domain Types
//!
//! Foundation crate for the job request dashboard. Provides the row schema,
//! data sources, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, dirs).
//!
//! ## Public API
//!
//! ### Row Schema (`row`)
//! - [`RawRow`] - A record as delivered by a data source
//! - [`Row`] - Canonical record produced by [`ingest()`]
//! - [`Status`], [`Priority`] - Enumerations with documented fallbacks
//! - [`Field`], [`SortField`] - Column identifiers, and the sortable subset
//!
//! ### Data Sources (`source`)
//! - [`RowSource`] - Read interface over raw records
//! - [`SeedRows`], [`JsonFileSource`] - Built-in and on-disk sources
//! - [`Dataset`] - Ingested rows with unique ids
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use jobdash_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod row;
pub mod source;

pub use error::{Error, Result, ResultExt};
pub use row::{ingest, Field, Priority, RawRow, Row, RowId, SortField, Status};
pub use source::{seed_rows, Dataset, JsonFileSource, RowSource, SeedRows};
