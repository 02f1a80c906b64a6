//! Formula trees
//!
//! Typed expression trees describing one geometric assertion or computation.
//! Trees are produced elsewhere (text/diagram parsing) and only consumed here.

use crate::semantics::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a formula node's result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnType {
    Truth,
    Number,
    Point,
    Line,
    Arc,
    Circle,
    Angle,
    Triangle,
    Quad,
    Hexagon,
    Polygon,
    Twod,
    Entity,
}

/// What a formula node stands for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signature {
    /// Free variable resolved through the assignment
    Variable { id: String, return_type: ReturnType },

    /// Named operation, or a numeric literal when `id` parses as a number
    Function { id: String, return_type: ReturnType },
}

impl Signature {
    pub fn id(&self) -> &str {
        match self {
            Signature::Variable { id, .. } | Signature::Function { id, .. } => id,
        }
    }

    pub fn return_type(&self) -> ReturnType {
        match self {
            Signature::Variable { return_type, .. } | Signature::Function { return_type, .. } => {
                *return_type
            }
        }
    }

    /// Literal value if this is a function signature whose id is a number
    pub fn numeric_value(&self) -> Option<f64> {
        match self {
            Signature::Function { id, .. } => id.trim().parse::<f64>().ok(),
            Signature::Variable { .. } => None,
        }
    }
}

/// Operation or leaf with an ordered sequence of children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaNode {
    pub signature: Signature,
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Aggregate of sibling nodes
///
/// At the root of an evaluation it is a conjunction of its children; as an
/// argument it is plain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionNode {
    pub return_type: ReturnType,
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    Formula(FormulaNode),
    Collection(CollectionNode),
    /// Already-concrete value, passed through evaluation untouched
    Literal(Value),
}

impl Node {
    pub fn variable(id: impl Into<String>, return_type: ReturnType) -> Self {
        Node::Formula(FormulaNode {
            signature: Signature::Variable { id: id.into(), return_type },
            children: Vec::new(),
        })
    }

    pub fn number(value: f64) -> Self {
        Node::Formula(FormulaNode {
            signature: Signature::Function {
                id: value.to_string(),
                return_type: ReturnType::Number,
            },
            children: Vec::new(),
        })
    }

    pub fn call(id: impl Into<String>, return_type: ReturnType, children: Vec<Node>) -> Self {
        Node::Formula(FormulaNode {
            signature: Signature::Function { id: id.into(), return_type },
            children,
        })
    }

    pub fn collection(return_type: ReturnType, children: Vec<Node>) -> Self {
        Node::Collection(CollectionNode { return_type, children })
    }

    /// Number of nodes in the tree (literals count as one)
    pub fn size(&self) -> usize {
        match self {
            Node::Formula(f) => 1 + f.children.iter().map(Node::size).sum::<usize>(),
            Node::Collection(c) => 1 + c.children.iter().map(Node::size).sum::<usize>(),
            Node::Literal(_) => 1,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close, children) = match self {
            Node::Formula(node) => {
                write!(f, "{}", node.signature.id())?;
                if node.children.is_empty() {
                    return Ok(());
                }
                ("(", ")", &node.children)
            }
            Node::Collection(node) => ("{", "}", &node.children),
            Node::Literal(value) => return write!(f, "{}", value),
        };
        write!(f, "{}", open)?;
        for (i, child) in children.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", child)?;
        }
        write!(f, "{}", close)
    }
}
