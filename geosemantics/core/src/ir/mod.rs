//! Intermediate Representation (IR) module
//!
//! This module provides the data structures the evaluator consumes:
//! - **formula**: Typed formula trees, signatures, and collection nodes
//! - **assignment**: Bindings from variable identifiers to concrete values
//!
//! # Example
//!
//! ```rust
//! use geosemantics_core::ir::*;
//!
//! // Equals(LengthOf(Line(P1, P2)), 5)
//! let tree = Node::call("Equals", ReturnType::Truth, vec![
//!     Node::call("LengthOf", ReturnType::Number, vec![
//!         Node::call("Line", ReturnType::Line, vec![
//!             Node::variable("P1", ReturnType::Point),
//!             Node::variable("P2", ReturnType::Point),
//!         ]),
//!     ]),
//!     Node::number(5.0),
//! ]);
//!
//! let assignment = Assignment::new()
//!     .with_point("P1", 0.0, 0.0)
//!     .with_point("P2", 3.0, 4.0);
//!
//! println!("{} over {} bindings", tree, assignment.len());
//! ```

mod assignment;
mod formula;

pub use assignment::Assignment;
pub use formula::{CollectionNode, FormulaNode, Node, ReturnType, Signature};
