//! Linear move history supporting single-step undo.
//!
//! This is a pure domain module with no GPUI dependencies.

use crate::domain::rules::AppliedMove;

/// One accepted move and the position it produced
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub applied: AppliedMove,
}

impl HistoryEntry {
    pub fn san(&self) -> &str {
        &self.applied.san
    }

    /// Position string after this move
    #[allow(dead_code)]
    pub fn fen(&self) -> &str {
        &self.applied.fen
    }
}

/// Append-only list of moves, popped one at a time by undo
#[derive(Clone, Debug, Default)]
pub struct MoveHistory {
    entries: Vec<HistoryEntry>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, applied: AppliedMove) {
        self.entries.push(HistoryEntry { applied });
    }

    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    #[allow(dead_code)]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Moves grouped into numbered (white, black) pairs for display.
    ///
    /// Assumes the game started with white to move.
    pub fn move_pairs(&self) -> Vec<(usize, String, Option<String>)> {
        self.entries
            .chunks(2)
            .enumerate()
            .map(|(i, chunk)| {
                let white = chunk.first().map(|e| e.san().to_string()).unwrap_or_default();
                let black = chunk.get(1).map(|e| e.san().to_string());
                (i + 1, white, black)
            })
            .collect()
    }
}
