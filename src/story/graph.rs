use std::collections::HashMap;

use anyhow::{bail, Result};
use serde::Deserialize;

use crate::story::scene::{Choice, ChoiceOption, Scene, SceneKind};

/// The full story: a map of scene-id -> Scene.
#[derive(Debug, Clone, Deserialize)]
pub struct StoryGraph {
    pub scenes: HashMap<String, Scene>,
    pub start_scene_id: String,
}

impl StoryGraph {
    pub fn get(&self, id: &str) -> Option<&Scene> {
        self.scenes.get(id)
    }

    /// Check the graph invariants: the start scene exists, every choice
    /// has at least one option with distinct tokens, and every choice or
    /// passage target names an existing scene. The graph may contain
    /// cycles, so this is a per-scene check rather than a traversal.
    pub fn validate(&self) -> Result<()> {
        if !self.scenes.contains_key(&self.start_scene_id) {
            bail!("start scene '{}' is not in the graph", self.start_scene_id);
        }
        for scene in self.scenes.values() {
            match &scene.kind {
                SceneKind::Choice(choice) => {
                    if choice.options.is_empty() {
                        bail!("scene '{}' has a choice with no options", scene.id);
                    }
                    let mut seen = Vec::new();
                    for opt in &choice.options {
                        if seen.contains(&opt.token.as_str()) {
                            bail!(
                                "scene '{}' maps token '{}' more than once",
                                scene.id,
                                opt.token
                            );
                        }
                        seen.push(opt.token.as_str());
                        if !self.scenes.contains_key(&opt.target) {
                            bail!(
                                "scene '{}' targets unknown scene '{}'",
                                scene.id,
                                opt.target
                            );
                        }
                    }
                }
                SceneKind::Passage { next } => {
                    if !self.scenes.contains_key(next) {
                        bail!("scene '{}' targets unknown scene '{}'", scene.id, next);
                    }
                }
                SceneKind::Outcome { .. } => {}
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Dark forest scenario
// ---------------------------------------------------------------------------

pub fn dark_forest_scenario() -> StoryGraph {
    let scenes = vec![
        Scene {
            id: "START".into(),
            lines: vec![
                "You wake up in a dark, scary forest. The trees loom over you, \
                 and the sound of distant howls chills your spine."
                    .into(),
                "You have to find a way to survive. What will you do?".into(),
            ],
            kind: SceneKind::Choice(Choice {
                options: vec![
                    ChoiceOption {
                        token: "1".into(),
                        label: "Look for shelter.".into(),
                        target: "SHELTER".into(),
                    },
                    ChoiceOption {
                        token: "2".into(),
                        label: "Search for food.".into(),
                        target: "FOOD".into(),
                    },
                ],
            }),
        },
        Scene {
            id: "SHELTER".into(),
            lines: vec![
                "You decide to look for shelter. After wandering for a while, \
                 you find a small cave."
                    .into(),
                "Do you want to enter the cave?".into(),
            ],
            kind: SceneKind::Choice(Choice {
                options: vec![
                    ChoiceOption {
                        token: "1".into(),
                        label: "Yes, enter the cave.".into(),
                        target: "CAVE".into(),
                    },
                    ChoiceOption {
                        token: "2".into(),
                        label: "No, keep looking for another shelter.".into(),
                        target: "LOST_IN_FOREST".into(),
                    },
                ],
            }),
        },
        Scene {
            id: "CAVE".into(),
            lines: vec![
                "You cautiously enter the cave. It's dark and smells damp.".into(),
                "Suddenly, you hear a low growl. A bear emerges from the shadows!".into(),
                "What will you do?".into(),
            ],
            kind: SceneKind::Choice(Choice {
                options: vec![
                    ChoiceOption {
                        token: "1".into(),
                        label: "Try to fight the bear.".into(),
                        target: "FIGHT_BEAR".into(),
                    },
                    ChoiceOption {
                        token: "2".into(),
                        label: "Run out of the cave.".into(),
                        target: "FLEE_CAVE".into(),
                    },
                ],
            }),
        },
        // Fleeing works, but the shelter problem is still unsolved: this
        // scene loops back to SHELTER rather than ending the story.
        Scene {
            id: "FLEE_CAVE".into(),
            lines: vec![
                "You run out of the cave as fast as you can. Luckily, the bear \
                 doesn't chase you."
                    .into(),
                "You survive the encounter, but you still need to find shelter.".into(),
            ],
            kind: SceneKind::Passage {
                next: "SHELTER".into(),
            },
        },
        Scene {
            id: "FOOD".into(),
            lines: vec![
                "You decide to search for food. You find some berries on a bush.".into(),
                "Do you want to eat the berries?".into(),
            ],
            kind: SceneKind::Choice(Choice {
                options: vec![
                    ChoiceOption {
                        token: "1".into(),
                        label: "Yes, eat the berries.".into(),
                        target: "EAT_BERRIES".into(),
                    },
                    ChoiceOption {
                        token: "2".into(),
                        label: "No, leave the berries and keep searching.".into(),
                        target: "FIND_STREAM".into(),
                    },
                ],
            }),
        },
        // --- Endings ---
        Scene {
            id: "FIGHT_BEAR".into(),
            lines: vec![
                "You try to fight the bear, but it's too strong. The bear \
                 overpowers you. Game over."
                    .into(),
            ],
            kind: SceneKind::Outcome { survived: false },
        },
        Scene {
            id: "LOST_IN_FOREST".into(),
            lines: vec![
                "You keep looking but get lost in the forest. Unfortunately, \
                 you don't survive the night."
                    .into(),
            ],
            kind: SceneKind::Outcome { survived: false },
        },
        Scene {
            id: "EAT_BERRIES".into(),
            lines: vec![
                "The berries were poisonous! You feel dizzy and collapse. Game over.".into(),
            ],
            kind: SceneKind::Outcome { survived: false },
        },
        Scene {
            id: "FIND_STREAM".into(),
            lines: vec![
                "You keep searching and find a stream with fresh water and \
                 edible plants. You survive the night. Well done!"
                    .into(),
            ],
            kind: SceneKind::Outcome { survived: true },
        },
    ];

    let mut map = HashMap::new();
    for scene in scenes {
        map.insert(scene.id.clone(), scene);
    }

    StoryGraph {
        scenes: map,
        start_scene_id: "START".into(),
    }
}
