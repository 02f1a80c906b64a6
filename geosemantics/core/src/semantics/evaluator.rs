//! Tree evaluator
//!
//! Single-pass recursive reduction of a formula tree under one assignment.
//! Variables resolve through the assignment, numeric literals parse to
//! numbers, and everything else is dispatched by name through the registry.
//! Errors from lookups or operations propagate unchanged; nothing is retried.

use super::registry::FunctionRegistry;
use super::truth::Truth;
use super::value::Value;
use crate::error::{SemanticError, SemanticResult};
use crate::ir::{Assignment, CollectionNode, FormulaNode, Node, ReturnType, Signature};
use tracing::{debug, trace};

/// Evaluator configuration
#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    /// Maximum nesting depth before evaluation is aborted
    pub max_depth: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}

/// How a collection node is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionMode {
    /// Conjunction of the children (collection at the root)
    Conjunction,
    /// Ordered data handed to an operation (collection as an argument)
    Data,
}

/// Evaluates formula trees against a shared registry
#[derive(Debug, Clone)]
pub struct Evaluator<'r> {
    registry: &'r FunctionRegistry,
    config: EvaluatorConfig,
}

impl<'r> Evaluator<'r> {
    pub fn new(registry: &'r FunctionRegistry) -> Self {
        Self::with_config(registry, EvaluatorConfig::default())
    }

    pub fn with_config(registry: &'r FunctionRegistry, config: EvaluatorConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &FunctionRegistry {
        self.registry
    }

    /// Evaluate a tree; a collection at the root is read as a conjunction
    pub fn evaluate(&self, node: &Node, assignment: &Assignment) -> SemanticResult<Value> {
        self.evaluate_as(node, assignment, CollectionMode::Conjunction)
    }

    /// Evaluate with an explicit interpretation for a root collection
    pub fn evaluate_as(
        &self,
        node: &Node,
        assignment: &Assignment,
        mode: CollectionMode,
    ) -> SemanticResult<Value> {
        debug!(formula = %node, bindings = assignment.len(), "evaluating formula");
        let result = self.eval(node, assignment, mode, 0);
        if let Err(e) = &result {
            debug!(error = %e, "evaluation failed");
        }
        result
    }

    /// Evaluate a tree that must produce a truth value
    pub fn evaluate_truth(&self, node: &Node, assignment: &Assignment) -> SemanticResult<Truth> {
        self.evaluate(node, assignment)?.as_truth("evaluate")
    }

    fn eval(
        &self,
        node: &Node,
        assignment: &Assignment,
        mode: CollectionMode,
        depth: usize,
    ) -> SemanticResult<Value> {
        if depth > self.config.max_depth {
            return Err(SemanticError::DepthLimitExceeded(self.config.max_depth));
        }

        match node {
            Node::Formula(formula) => self.eval_formula(formula, assignment, depth),
            Node::Collection(collection) => match mode {
                CollectionMode::Conjunction => self.eval_conjunction(collection, assignment, depth),
                CollectionMode::Data => self.eval_data(collection, assignment, depth),
            },
            Node::Literal(value) => Ok(value.clone()),
        }
    }

    fn eval_conjunction(
        &self,
        collection: &CollectionNode,
        assignment: &Assignment,
        depth: usize,
    ) -> SemanticResult<Value> {
        if collection.return_type != ReturnType::Truth {
            return Err(SemanticError::TypeMismatch(format!(
                "collection evaluated as a conjunction must have return type truth, found {:?}",
                collection.return_type
            )));
        }

        let mut out = Truth::Identity(true);
        for child in &collection.children {
            let value = self.eval(child, assignment, CollectionMode::Conjunction, depth + 1)?;
            out = out.and(value.as_truth("conjunction")?);
        }
        Ok(Value::Truth(out))
    }

    fn eval_data(
        &self,
        collection: &CollectionNode,
        assignment: &Assignment,
        depth: usize,
    ) -> SemanticResult<Value> {
        let items = collection
            .children
            .iter()
            .map(|child| self.eval(child, assignment, CollectionMode::Conjunction, depth + 1))
            .collect::<SemanticResult<Vec<_>>>()?;
        Ok(Value::Collection(items))
    }

    fn eval_formula(
        &self,
        formula: &FormulaNode,
        assignment: &Assignment,
        depth: usize,
    ) -> SemanticResult<Value> {
        let id = match &formula.signature {
            Signature::Variable { id, .. } => {
                return assignment
                    .get(id)
                    .cloned()
                    .ok_or_else(|| SemanticError::UnboundVariable(id.clone()));
            }
            Signature::Function { id, .. } => id,
        };
        if let Some(n) = formula.signature.numeric_value() {
            return Ok(Value::Number(n));
        }

        let args = formula
            .children
            .iter()
            .map(|child| {
                let mode = match child {
                    Node::Collection(_) => CollectionMode::Data,
                    _ => CollectionMode::Conjunction,
                };
                self.eval(child, assignment, mode, depth + 1)
            })
            .collect::<SemanticResult<Vec<_>>>()?;

        let implementation = self
            .registry
            .get(id)
            .ok_or_else(|| SemanticError::UnknownOperation(id.clone()))?;

        trace!(
            operation = %id,
            arity = args.len(),
            returns = ?formula.signature.return_type(),
            "dispatching operation"
        );
        implementation(&args)
    }
}

/// Evaluate `node` under `assignment` with the default configuration
pub fn evaluate(
    registry: &FunctionRegistry,
    node: &Node,
    assignment: &Assignment,
) -> SemanticResult<Value> {
    Evaluator::new(registry).evaluate(node, assignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ConstructionError;
    use crate::semantics::registry::Operation;
    use crate::semantics::TruthValue;

    fn var(id: &str, rt: ReturnType) -> Node {
        Node::variable(id, rt)
    }

    fn length_equals_five() -> Node {
        Node::call(
            "Equals",
            ReturnType::Truth,
            vec![
                Node::call(
                    "LengthOf",
                    ReturnType::Number,
                    vec![Node::call(
                        "Line",
                        ReturnType::Line,
                        vec![var("P1", ReturnType::Point), var("P2", ReturnType::Point)],
                    )],
                ),
                Node::number(5.0),
            ],
        )
    }

    fn three_four_five() -> Assignment {
        Assignment::new().with_point("P1", 0.0, 0.0).with_point("P2", 3.0, 4.0)
    }

    #[test]
    fn test_length_equals_five() {
        let registry = FunctionRegistry::standard();
        let out = evaluate(&registry, &length_equals_five(), &three_four_five()).unwrap();

        let truth = out.as_truth("test").unwrap();
        let tv = truth.graded().unwrap();
        assert_eq!(tv.norm(), 0.0);
        assert_eq!(tv.confidence(), 1.0);
    }

    #[test]
    fn test_variable_and_literal_leaves() {
        let registry = FunctionRegistry::standard();
        let evaluator = Evaluator::new(&registry);
        let assignment = Assignment::new().with("r", 2.0);

        assert_eq!(evaluator.evaluate(&var("r", ReturnType::Number), &assignment).unwrap(), Value::Number(2.0));
        assert_eq!(evaluator.evaluate(&Node::number(1.5), &assignment).unwrap(), Value::Number(1.5));
    }

    #[test]
    fn test_unbound_variable() {
        let registry = FunctionRegistry::standard();
        let assignment = Assignment::new().with_point("P1", 0.0, 0.0);

        let err = evaluate(&registry, &length_equals_five(), &assignment).unwrap_err();
        assert_eq!(err, SemanticError::UnboundVariable("P2".to_string()));
    }

    #[test]
    fn test_unknown_operation() {
        let registry = FunctionRegistry::standard();
        let tree = Node::call("Parallel", ReturnType::Truth, vec![Node::number(1.0)]);

        let err = evaluate(&registry, &tree, &Assignment::new()).unwrap_err();
        assert_eq!(err, SemanticError::UnknownOperation("Parallel".to_string()));
    }

    #[test]
    fn test_unbound_operation_in_substitute_registry() {
        let registry = FunctionRegistry::standard().without(Operation::LengthOf);
        assert!(!Evaluator::new(&registry).registry().contains("LengthOf"));

        let err = evaluate(&registry, &length_equals_five(), &three_four_five()).unwrap_err();
        assert_eq!(err, SemanticError::UnknownOperation("LengthOf".to_string()));
    }

    #[test]
    fn test_substitute_implementation_is_used() {
        fn length_is_four(_args: &[Value]) -> SemanticResult<Value> {
            Ok(Value::Number(4.0))
        }
        let registry = FunctionRegistry::standard().with(Operation::LengthOf, length_is_four);

        let out = evaluate(&registry, &length_equals_five(), &three_four_five()).unwrap();
        assert!((out.confidence().unwrap() - (1.0 - 1.0 / 4.5)).abs() < 1e-12);
    }

    #[test]
    fn test_root_collection_is_conjunction() {
        let registry = FunctionRegistry::standard();
        let root = Node::collection(
            ReturnType::Truth,
            vec![
                length_equals_five(),
                Node::call("Equals", ReturnType::Truth, vec![Node::number(4.0), Node::number(6.0)]),
            ],
        );

        let out = evaluate(&registry, &root, &three_four_five()).unwrap();
        assert!((out.confidence().unwrap() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_empty_root_collection_is_true() {
        let registry = FunctionRegistry::standard();
        let root = Node::collection(ReturnType::Truth, vec![]);

        let out = evaluate(&registry, &root, &Assignment::new()).unwrap();
        assert_eq!(out, Value::Truth(Truth::Identity(true)));
    }

    #[test]
    fn test_root_collection_must_be_truth() {
        let registry = FunctionRegistry::standard();
        let root = Node::collection(ReturnType::Line, vec![]);

        let err = evaluate(&registry, &root, &Assignment::new()).unwrap_err();
        assert!(matches!(err, SemanticError::TypeMismatch(_)));
    }

    #[test]
    fn test_root_collection_with_non_truth_child() {
        let registry = FunctionRegistry::standard();
        let root = Node::collection(ReturnType::Truth, vec![Node::number(3.0)]);

        let err = evaluate(&registry, &root, &Assignment::new()).unwrap_err();
        assert!(matches!(err, SemanticError::TypeMismatch(_)));
    }

    #[test]
    fn test_collection_as_data_at_root() {
        let registry = FunctionRegistry::standard();
        let evaluator = Evaluator::new(&registry);
        let root = Node::collection(ReturnType::Point, vec![var("A", ReturnType::Point), Node::number(2.0)]);
        let assignment = Assignment::new().with_point("A", 1.0, 1.0);

        let out = evaluator.evaluate_as(&root, &assignment, CollectionMode::Data).unwrap();
        match out {
            Value::Collection(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[1], Value::Number(2.0));
            }
            other => panic!("expected collection, got {}", other),
        }
    }

    #[test]
    fn test_collection_argument_is_data() {
        let registry = FunctionRegistry::standard();
        let lines = Node::collection(
            ReturnType::Line,
            vec![
                Node::call("Line", ReturnType::Line, vec![var("A", ReturnType::Point), var("C", ReturnType::Point)]),
                Node::call("Line", ReturnType::Line, vec![var("B", ReturnType::Point), var("D", ReturnType::Point)]),
            ],
        );
        let tree = Node::call("IntersectAt", ReturnType::Truth, vec![lines, var("E", ReturnType::Point)]);
        let assignment = Assignment::new()
            .with_point("A", 0.0, 0.0)
            .with_point("B", 0.0, 4.0)
            .with_point("C", 4.0, 4.0)
            .with_point("D", 4.0, 0.0)
            .with_point("E", 2.0, 2.0);

        let out = evaluate(&registry, &tree, &assignment).unwrap();
        assert!((out.confidence().unwrap() - 1.0).abs() < 1e-9);

        let three = Node::call("Three", ReturnType::Truth, vec![Node::collection(ReturnType::Point, vec![])]);
        assert_eq!(evaluate(&registry, &three, &assignment).unwrap().confidence(), Some(0.0));
    }

    #[test]
    fn test_literal_child_passes_through() {
        let registry = FunctionRegistry::standard();
        let tree = Node::call(
            "Add",
            ReturnType::Number,
            vec![Node::Literal(Value::Number(1.0)), Node::number(2.0)],
        );

        assert_eq!(evaluate(&registry, &tree, &Assignment::new()).unwrap(), Value::Number(3.0));
    }

    #[test]
    fn test_operation_errors_propagate_unchanged() {
        let registry = FunctionRegistry::standard();
        let assignment = Assignment::new().with_point("A", 0.0, 0.0).with_point("B", 1.0, 0.0);

        let tri = Node::call(
            "Triangle",
            ReturnType::Triangle,
            vec![var("A", ReturnType::Point), var("B", ReturnType::Point)],
        );
        let err = evaluate(&registry, &tri, &assignment).unwrap_err();
        assert!(matches!(err, SemanticError::Construction(ConstructionError::VertexCount { .. })));

        let div = Node::call("Div", ReturnType::Number, vec![Node::number(1.0), Node::number(0.0)]);
        assert_eq!(evaluate(&registry, &div, &assignment).unwrap_err(), SemanticError::DivisionByZero);
    }

    #[test]
    fn test_depth_limit() {
        let registry = FunctionRegistry::standard();
        let evaluator = Evaluator::with_config(&registry, EvaluatorConfig { max_depth: 3 });

        let mut tree = Node::number(1.0);
        for _ in 0..5 {
            tree = Node::call("Add", ReturnType::Number, vec![tree, Node::number(1.0)]);
        }

        let err = evaluator.evaluate(&tree, &Assignment::new()).unwrap_err();
        assert_eq!(err, SemanticError::DepthLimitExceeded(3));

        assert_eq!(Evaluator::new(&registry).evaluate(&tree, &Assignment::new()).unwrap(), Value::Number(6.0));
    }

    #[test]
    fn test_evaluate_truth_rejects_numbers() {
        let registry = FunctionRegistry::standard();
        let evaluator = Evaluator::new(&registry);

        assert!(evaluator.evaluate_truth(&Node::number(1.0), &Assignment::new()).is_err());

        let certain = Node::Literal(Value::from(TruthValue::certain()));
        assert_eq!(evaluator.evaluate_truth(&certain, &Assignment::new()).unwrap().confidence(), 1.0);
    }

    #[test]
    fn test_parallel_evaluations_share_registry() {
        let registry = FunctionRegistry::standard();
        let tree = length_equals_five();

        let results: Vec<f64> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    let registry = &registry;
                    let tree = &tree;
                    s.spawn(move || {
                        let assignment = Assignment::new()
                            .with_point("P1", 0.0, 0.0)
                            .with_point("P2", 3.0, 4.0 + i as f64);
                        Evaluator::new(registry)
                            .evaluate(tree, &assignment)
                            .unwrap()
                            .confidence()
                            .unwrap()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(results[0], 1.0);
        assert!(results.windows(2).all(|w| w[0] >= w[1]));
    }
}
