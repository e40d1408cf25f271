use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::board::CELL_COUNT;

pub const DEFAULT_SEARCH_DEPTH: usize = 2;
pub const DEFAULT_ENDGAME_EMPTY_CELLS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Plies searched from the root before falling back to the heuristic.
    pub depth: usize,
    /// Below the root, positions with at most this many empty cells are
    /// scored statically.
    pub endgame_empty_cells: usize,
    /// `false` runs plain minimax over the same tree.
    pub alpha_beta: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            endgame_empty_cells: DEFAULT_ENDGAME_EMPTY_CELLS,
            alpha_beta: true,
        }
    }
}

impl SearchSettings {
    pub fn exhaustive(self) -> Self {
        Self {
            alpha_beta: false,
            ..self
        }
    }
}

impl Validate for SearchSettings {
    fn validate(&self) -> Result<(), String> {
        if self.depth == 0 || self.depth > CELL_COUNT {
            return Err(format!("Search depth must be between 1 and {}", CELL_COUNT));
        }
        if self.endgame_empty_cells >= CELL_COUNT {
            return Err(format!(
                "endgame_empty_cells ({}) must be less than the cell count ({})",
                self.endgame_empty_cells, CELL_COUNT
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_tuning() {
        let settings = SearchSettings::default();
        assert_eq!(settings.depth, 2);
        assert_eq!(settings.endgame_empty_cells, 3);
        assert!(settings.alpha_beta);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validation_bounds() {
        let zero_depth = SearchSettings {
            depth: 0,
            ..Default::default()
        };
        assert!(zero_depth.validate().is_err());

        let deep = SearchSettings {
            depth: CELL_COUNT,
            ..Default::default()
        };
        assert!(deep.validate().is_ok());

        let endgame = SearchSettings {
            endgame_empty_cells: CELL_COUNT,
            ..Default::default()
        };
        assert!(endgame.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let settings: SearchSettings = serde_yaml_ng::from_str("depth: 4\n").unwrap();
        assert_eq!(settings.depth, 4);
        assert_eq!(settings.endgame_empty_cells, DEFAULT_ENDGAME_EMPTY_CELLS);
        assert!(settings.alpha_beta);
    }
}
