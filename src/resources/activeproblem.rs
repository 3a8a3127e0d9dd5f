//! Active problem resource.
//!
//! Owns the problem currently on screen. Every change of problem identity
//! bumps `revision`, which is how the layout system and the playback-reset
//! observer detect that the displayed scene must be rebuilt, whether the
//! change came from keyboard navigation or from an import resolving.

use crate::problem::ProblemData;
use bevy_ecs::prelude::Resource;

/// The problem currently displayed, plus a change counter.
#[derive(Resource, Debug, Clone)]
pub struct ActiveProblem {
    problem: ProblemData,
    /// Catalog index of the problem, for the header readout and navigation.
    pub catalog_index: usize,
    revision: u64,
}

impl ActiveProblem {
    pub fn new(problem: ProblemData, catalog_index: usize) -> Self {
        ActiveProblem {
            problem,
            catalog_index,
            revision: 0,
        }
    }

    pub fn problem(&self) -> &ProblemData {
        &self.problem
    }

    /// Monotonic counter, bumped on every identity change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the displayed problem. Always bumps the revision, even if the
    /// id happens to match: re-selecting a problem restarts its scene.
    pub fn set(&mut self, problem: ProblemData, catalog_index: usize) {
        self.problem = problem;
        self.catalog_index = catalog_index;
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::SceneType;

    fn problem(id: &str) -> ProblemData {
        ProblemData {
            id: id.to_string(),
            scene_type: SceneType::Work,
            title: "t".to_string(),
            source: None,
            question: "q".to_string(),
            analysis: String::new(),
            solution_steps: vec![],
            answer: "a".to_string(),
            movement_params: None,
            geometry_params: None,
        }
    }

    #[test]
    fn test_set_bumps_revision() {
        let mut active = ActiveProblem::new(problem("one"), 0);
        assert_eq!(active.revision(), 0);
        active.set(problem("two"), 1);
        assert_eq!(active.revision(), 1);
        assert_eq!(active.problem().id, "two");
        assert_eq!(active.catalog_index, 1);
    }

    #[test]
    fn test_reselecting_same_id_still_bumps() {
        let mut active = ActiveProblem::new(problem("one"), 0);
        active.set(problem("one"), 0);
        assert_eq!(active.revision(), 1);
    }
}
