//! Text component for the schematic's informational labels.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug)]
/// Dynamic text rendered at the entity's screen position.
pub struct DynamicText {
    /// The text content to render.
    pub content: String,
    /// Font size in pixels.
    pub font_size: i32,
    /// Color of the text.
    pub color: raylib::prelude::Color,
    /// Center the text horizontally on the position instead of left-aligning.
    pub centered: bool,
}

impl DynamicText {
    /// Creates a new centered DynamicText component.
    pub fn new(content: impl Into<String>, font_size: i32, color: raylib::prelude::Color) -> Self {
        Self {
            content: content.into(),
            font_size,
            color,
            centered: true,
        }
    }

    /// Updates the text content.
    pub fn set_content(&mut self, new_content: impl Into<String>) {
        self.content = new_content.into();
    }
}
