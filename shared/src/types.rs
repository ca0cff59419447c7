use serde::{Deserialize, Serialize};

// ============================================================================
// Data flows from raw `Record`s (one per game log entry) to formatted
// `Example`s, which are collected per category into an `ExampleSet`.
// ============================================================================

/// One play-through as loaded from disk. Only a couple of keys are
/// inspected (`eliminate`, `bid`); everything else is carried untouched.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// A single finetuning example. Serialized as one `{"text": ...}` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub text: String,
}

impl Example {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Which dataset an example belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExampleKind {
    /// Taken from a game's `eliminate` turn.
    Werewolf,
    /// Taken from a bid turn whose prompt addresses the Villager.
    Villager,
}

impl ExampleKind {
    pub const ALL: [ExampleKind; 2] = [ExampleKind::Werewolf, ExampleKind::Villager];

    pub fn label(self) -> &'static str {
        match self {
            ExampleKind::Werewolf => "werewolf",
            ExampleKind::Villager => "villager",
        }
    }
}

/// Examples accumulated across games and files, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleSet {
    pub werewolf: Vec<Example>,
    pub villager: Vec<Example>,
}

impl ExampleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ExampleKind, example: Example) {
        match kind {
            ExampleKind::Werewolf => self.werewolf.push(example),
            ExampleKind::Villager => self.villager.push(example),
        }
    }

    pub fn get(&self, kind: ExampleKind) -> &[Example] {
        match kind {
            ExampleKind::Werewolf => &self.werewolf,
            ExampleKind::Villager => &self.villager,
        }
    }

    /// Moves every example of `other` onto the end of this set.
    pub fn append(&mut self, mut other: ExampleSet) {
        self.werewolf.append(&mut other.werewolf);
        self.villager.append(&mut other.villager);
    }

    pub fn len(&self) -> usize {
        self.werewolf.len() + self.villager.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
