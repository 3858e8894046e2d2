use uuid::Uuid;

pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generates_distinct_uuids() {
        let ids: HashSet<String> = (0..64).map(|_| UuidGenerator.generate()).collect();
        assert_eq!(ids.len(), 64);
        assert!(ids.iter().all(|id| Uuid::parse_str(id).is_ok()));
    }
}
