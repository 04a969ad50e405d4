//! Quran Structure Backend Module
//!
//! Serves the fixed four-level hierarchy of the Quran text
//! (Juz → Hizb → Quarter → Ayah) from a flat collection of imported
//! verse records.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, the quarter partitioner, repository traits
//! - `application/` - One use case per drill-down view
//! - `infra/` - PostgreSQL and in-memory repository implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Read model
//! - Ayah records are reference data written once by the offline importer;
//!   the API never mutates them
//! - Quarter boundaries are recomputed on every read from the sorted ayah
//!   list of a hizb; nothing derived is persisted or cached
//! - All query parameters are parsed and validated before any store access

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::QuranConfig;
pub use error::{QuranError, QuranResult};
pub use infra::memory::InMemoryAyahRepository;
pub use infra::postgres::PgQuranRepository;
pub use presentation::router::quran_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult, OptionExt, ResultExt},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
