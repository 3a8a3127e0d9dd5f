//! Preset problem catalog resource.
//!
//! Loads the ordered list of problems from a JSON file, indexes them by id,
//! and offers the case-insensitive free-text filter used by the list view
//! and the `--list --search` CLI path. The catalog is read-only after
//! startup except for prepending imported problems.

use crate::problem::ProblemData;
use bevy_ecs::prelude::Resource;
use log::{info, warn};
use rustc_hash::FxHashMap;
use std::path::Path;

/// Ordered problem collection with id lookup.
#[derive(Resource, Debug, Clone, Default)]
pub struct ProblemCatalog {
    problems: Vec<ProblemData>,
    by_id: FxHashMap<String, usize>,
}

impl ProblemCatalog {
    /// Build a catalog from already-validated problems. Later duplicates of
    /// an id are dropped with a warning.
    pub fn new(problems: Vec<ProblemData>) -> Self {
        let mut catalog = ProblemCatalog::default();
        for problem in problems {
            catalog.push(problem);
        }
        catalog
    }

    /// Load and validate a catalog JSON file (an array of problems).
    pub fn load_from_file(path: &Path) -> Result<Self, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read catalog {}: {e}", path.display()))?;
        let problems: Vec<ProblemData> =
            serde_json::from_str(&json).map_err(|e| format!("catalog {}: {e}", path.display()))?;
        for problem in &problems {
            problem.validate()?;
        }
        info!("loaded {} problems from {}", problems.len(), path.display());
        Ok(Self::new(problems))
    }

    fn push(&mut self, problem: ProblemData) {
        if self.by_id.contains_key(&problem.id) {
            warn!("duplicate problem id '{}' dropped", problem.id);
            return;
        }
        self.by_id.insert(problem.id.clone(), self.problems.len());
        self.problems.push(problem);
    }

    /// Put an imported problem at the front of the list so it is the next
    /// selection target.
    pub fn prepend(&mut self, problem: ProblemData) {
        if self.by_id.contains_key(&problem.id) {
            warn!("duplicate problem id '{}' dropped", problem.id);
            return;
        }
        self.problems.insert(0, problem);
        self.reindex();
    }

    fn reindex(&mut self) {
        self.by_id = self
            .problems
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ProblemData> {
        self.problems.get(index)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Case-insensitive filter over title, source, question, and type tag.
    ///
    /// Mirrors the list view's search box: an empty or whitespace-only term
    /// matches everything.
    pub fn search(&self, term: &str) -> Vec<&ProblemData> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.problems.iter().collect();
        }
        self.problems
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&term)
                    || p.question.to_lowercase().contains(&term)
                    || p.scene_type.tag().contains(&term)
                    || p
                        .source
                        .as_deref()
                        .is_some_and(|s| s.to_lowercase().contains(&term))
            })
            .collect()
    }

    /// Index of the next problem after `index`, wrapping around.
    pub fn next_index(&self, index: usize) -> usize {
        if self.problems.is_empty() {
            0
        } else {
            (index + 1) % self.problems.len()
        }
    }

    /// Index of the problem before `index`, wrapping around.
    pub fn prev_index(&self, index: usize) -> usize {
        if self.problems.is_empty() {
            0
        } else {
            (index + self.problems.len() - 1) % self.problems.len()
        }
    }
}
