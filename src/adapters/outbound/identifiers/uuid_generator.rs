use crate::ports::outbound::IdGenerator;
use uuid::Uuid;

/// UuidGenerator adapter issuing random (v4) UUIDs
///
/// Stateless, so one instance can serve any number of concurrent transforms.
#[derive(Debug, Clone, Copy)]
pub struct UuidGenerator;

impl UuidGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UuidGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
