/// Crate-wide Result alias with anyhow::Error as the error type.
/// Typed failures (`ComponentDefinitionError`) travel inside and can be recovered with `downcast_ref`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
