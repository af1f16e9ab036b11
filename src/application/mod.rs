/// Application layer - Use cases, DTOs and factories
///
/// Orchestrates the domain builder and coordinates with infrastructure
/// through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
