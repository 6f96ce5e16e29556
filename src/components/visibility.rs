use bevy_ecs::prelude::Component;

/// Boolean display state for an entity a renderer would draw.
///
/// The victory banner spawns hidden and is shown by the goal observer.
/// There is no hide path during a scene's lifetime; a restart rebuilds the
/// banner in its hidden state.
#[derive(Component, Clone, Copy, Debug)]
pub struct Visibility {
    pub visible: bool,
}

impl Visibility {
    pub fn hidden() -> Self {
        Self { visible: false }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }
}
