//! Identifier generation for block and action ids.

use uuid::Uuid;

/// Source of fresh, practically collision-free identifiers.
///
/// Each call must return a value unrelated to any earlier one. The builder
/// never checks generated ids against existing ones.
pub trait IdGenerator {
    fn generate(&self) -> String;
}

impl<F> IdGenerator for F
where
    F: Fn() -> String,
{
    fn generate(&self) -> String {
        self()
    }
}

/// UUID-backed generator, the default for [`BlockBuilder`](crate::BlockBuilder).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UuidGenerator {
    /// Random (version 4) UUIDs.
    #[default]
    V4,
    /// Time-based (version 1) UUIDs stamped with a fixed node id.
    V1 { node_id: [u8; 6] },
}

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        match self {
            UuidGenerator::V4 => Uuid::new_v4().to_string(),
            UuidGenerator::V1 { node_id } => Uuid::now_v1(node_id).to_string(),
        }
    }
}
