//! JSON problem files

use super::{EvaluationProblem, LoadError, LoadResult};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Parse a single problem from a JSON string
pub fn parse_problem(contents: &str) -> LoadResult<EvaluationProblem> {
    serde_json::from_str(contents).map_err(|e| LoadError::ParseError(e.to_string()))
}

/// Load a single problem from a JSON file
pub fn load_problem<P: AsRef<Path>>(path: P) -> LoadResult<EvaluationProblem> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path)
        .map_err(|e| LoadError::FileNotFound(format!("{}: {}", path.display(), e)))?;

    parse_problem(&contents)
}

/// Load every `.json` problem in a directory, sorted by file name
///
/// Files that fail to load are skipped with a warning.
pub fn load_problems<P: AsRef<Path>>(dir: P) -> LoadResult<Vec<EvaluationProblem>> {
    let dir = dir.as_ref();

    if !dir.is_dir() {
        return Err(LoadError::FileNotFound(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)
        .map_err(|e| LoadError::FileNotFound(format!("{}: {}", dir.display(), e)))?
    {
        let entry = entry.map_err(|e| LoadError::FileNotFound(e.to_string()))?;
        let path = entry.path();

        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut problems = Vec::new();
    for path in paths {
        match load_problem(&path) {
            Ok(problem) => problems.push(problem),
            Err(e) => warn!(path = %path.display(), error = %e, "skipping problem file"),
        }
    }

    Ok(problems)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_problem() {
        let json = r#"{
            "id": "p_min",
            "formula": {"formula": {"signature": {"function": {"id": "3", "return_type": "number"}}}}
        }"#;

        let problem = parse_problem(json).unwrap();
        assert_eq!(problem.id, "p_min");
        assert!(problem.assignment.is_empty());
        assert_eq!(problem.expected_confidence, None);
    }

    #[test]
    fn test_parse_error() {
        let err = parse_problem("{\"id\": 1}").unwrap_err();
        assert!(matches!(err, LoadError::ParseError(_)));
    }

    #[test]
    fn test_malformed_polygon_is_parse_error() {
        let json = r#"{
            "id": "p_short_triangle",
            "formula": {"formula": {
                "signature": {"function": {"id": "IsTriangle", "return_type": "truth"}},
                "children": [{"formula": {"signature": {"variable": {"id": "T", "return_type": "triangle"}}}}]
            }},
            "assignment": {"T": {"polygon": {"kind": "triangle", "vertices": [{"x": 0, "y": 0}]}}}
        }"#;

        let err = parse_problem(json).unwrap_err();
        assert!(matches!(err, LoadError::ParseError(_)));

        let fixed = json.replace(
            r#"[{"x": 0, "y": 0}]"#,
            r#"[{"x": 0, "y": 0}, {"x": 1, "y": 0}, {"x": 0, "y": 1}]"#,
        );
        let problem = parse_problem(&fixed).unwrap();
        assert!(problem.assignment.contains("T"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_problem("does/not/exist.json").unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound(_)));
    }

    #[test]
    fn test_load_problems_requires_directory() {
        assert!(load_problems("does/not/exist").is_err());
    }
}
