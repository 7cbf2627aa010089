use serde::Deserialize;

/// A single scene in the story graph.
#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    /// Unique identifier for this scene (e.g. "START", "CAVE", "FIND_STREAM").
    pub id: String,
    /// Narrative lines rendered in order when the scene is entered.
    pub lines: Vec<String>,
    pub kind: SceneKind,
}

#[derive(Debug, Clone, Deserialize)]
pub enum SceneKind {
    /// The scene ends in a prompt; the player's token picks the next scene.
    Choice(Choice),
    /// The scene narrates and then advances unconditionally.
    Passage { next: String },
    /// Terminal scene; `survived` is the player's fate.
    Outcome { survived: bool },
}

/// The valid input tokens for a scene and where each one leads.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// Ordered as displayed in the menu.
    pub options: Vec<ChoiceOption>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceOption {
    /// What the player types to pick this option (e.g. "1").
    pub token: String,
    /// The menu line shown for this option.
    pub label: String,
    /// ID of an existing scene.
    pub target: String,
}

impl Choice {
    /// Look up the target scene for an input token. `None` means the
    /// token is invalid and the caller should re-prompt.
    pub fn target_for(&self, token: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|opt| opt.token == token)
            .map(|opt| opt.target.as_str())
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|opt| opt.token.as_str())
    }
}
