//! Demonstration of graded formula evaluation
//!
//! Run with: cargo run --example evaluate_demo

use geosemantics_core::*;

fn point(id: &str) -> Node {
    Node::variable(id, ReturnType::Point)
}

fn main() {
    println!("=== Geosemantics Evaluation Demo ===\n");

    let registry = FunctionRegistry::standard();
    let evaluator = Evaluator::new(&registry);
    println!("Registry: {} operations\n", registry.len());

    // 1. A single relational check
    println!("1. Equals(LengthOf(Line(A, B)), 5):");
    let length_is_five = Node::call(
        "Equals",
        ReturnType::Truth,
        vec![
            Node::call(
                "LengthOf",
                ReturnType::Number,
                vec![Node::call("Line", ReturnType::Line, vec![point("A"), point("B")])],
            ),
            Node::number(5.0),
        ],
    );

    for (label, bx, by) in [("exact", 3.0, 4.0), ("noisy", 3.1, 4.2), ("far off", 6.0, 8.0)] {
        let assignment = Assignment::new().with_point("A", 0.0, 0.0).with_point("B", bx, by);
        match evaluator.evaluate(&length_is_five, &assignment) {
            Ok(value) => println!("   {:<8} B=({}, {}) -> {}", label, bx, by, value),
            Err(e) => println!("   {:<8} error: {}", label, e),
        }
    }

    // 2. Conjunction at the root
    println!("\n2. {{Colinear(A, M, B), IsMidpointOf(M, Line(A, B))}}:");
    let midpoint = Node::collection(
        ReturnType::Truth,
        vec![
            Node::call("Colinear", ReturnType::Truth, vec![point("A"), point("M"), point("B")]),
            Node::call(
                "IsMidpointOf",
                ReturnType::Truth,
                vec![point("M"), Node::call("Line", ReturnType::Line, vec![point("A"), point("B")])],
            ),
        ],
    );
    let assignment = Assignment::new()
        .with_point("A", 0.0, 0.0)
        .with_point("B", 4.0, 0.0)
        .with_point("M", 2.1, 0.05);
    match evaluator.evaluate(&midpoint, &assignment) {
        Ok(value) => println!("   -> {}", value),
        Err(e) => println!("   error: {}", e),
    }

    // 3. Errors abort the evaluation
    println!("\n3. Missing binding:");
    let partial = Assignment::new().with_point("A", 0.0, 0.0);
    match evaluator.evaluate(&length_is_five, &partial) {
        Ok(value) => println!("   -> {}", value),
        Err(e) => println!("   error: {}", e),
    }
}
