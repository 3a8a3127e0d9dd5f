//! High-level application helpers.
//!
//! Startup decisions that do not belong in any single system: choosing the
//! first problem to display and the `--list` catalog printout.

use crate::problem::ProblemData;
use crate::resources::catalog::ProblemCatalog;
use log::warn;

/// Choose the problem shown at startup.
///
/// A requested id wins when it exists; otherwise the first catalog entry.
/// Returns `None` only for an empty catalog.
pub fn pick_initial(
    catalog: &ProblemCatalog,
    requested_id: Option<&str>,
) -> Option<(ProblemData, usize)> {
    if let Some(id) = requested_id {
        if let Some(index) = catalog.index_of(id) {
            return catalog.get(index).map(|p| (p.clone(), index));
        }
        warn!("problem id '{}' not found; falling back to the first entry", id);
    }
    catalog.get(0).map(|p| (p.clone(), 0))
}

/// Print the catalog (optionally filtered) to stdout, one line per problem.
pub fn print_catalog(catalog: &ProblemCatalog, term: Option<&str>) {
    let hits = catalog.search(term.unwrap_or(""));
    for problem in &hits {
        let source = problem.source.as_deref().unwrap_or("-");
        println!(
            "{:<28} {:<9} {:<22} {}",
            problem.id,
            problem.scene_type.tag(),
            source,
            problem.title
        );
    }
    println!("{} / {} problems", hits.len(), catalog.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{ProblemData, SceneType};

    fn problem(id: &str) -> ProblemData {
        ProblemData {
            id: id.to_string(),
            scene_type: SceneType::Work,
            title: id.to_string(),
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
    fn test_pick_initial_prefers_requested_id() {
        let catalog = ProblemCatalog::new(vec![problem("a"), problem("b")]);
        let (p, index) = pick_initial(&catalog, Some("b")).unwrap();
        assert_eq!(p.id, "b");
        assert_eq!(index, 1);
    }

    #[test]
    fn test_pick_initial_falls_back_to_first() {
        let catalog = ProblemCatalog::new(vec![problem("a"), problem("b")]);
        let (p, index) = pick_initial(&catalog, Some("missing")).unwrap();
        assert_eq!(p.id, "a");
        assert_eq!(index, 0);
    }

    #[test]
    fn test_pick_initial_empty_catalog() {
        let catalog = ProblemCatalog::default();
        assert!(pick_initial(&catalog, None).is_none());
    }
}
