use bevy_ecs::prelude::Component;

/// Name tag for an entity. The goal zone matches entering bodies against a
/// group name, and log lines use it for readability.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Group {
    name: String,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
