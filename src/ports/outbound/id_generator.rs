/// IdGenerator port for producing document identifiers
///
/// Every call must return a token never returned before, with negligible
/// collision probability. Callers treat the value as opaque.
/// Implementations must be safe to share between concurrent transforms.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh identifier
    fn generate(&self) -> String;
}
