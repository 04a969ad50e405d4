//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Ayah)
//! - Domain value objects (JuzNumber, HizbNumber, QuarterNumber)
//! - Read models produced by aggregation (rollups, counts)
//! - The quarter partitioner (pure domain service)
//! - Repository traits (interfaces)

pub mod aggregates;
pub mod entities;
pub mod partition;
pub mod repository;
pub mod value_objects;
