/// Domain layer - component definition model and the row-to-document transformation
///
/// Nothing in here performs I/O; identifiers are obtained through the
/// `IdGenerator` port.
pub mod domain;
pub mod services;
