//! The closed catalog of primitives available to policy trees

use serde::{Deserialize, Serialize};

use super::{
    expr::{BinaryOp, CompareOp, LogicOp, UnaryOp},
    sensors::Sensor,
};

/// Range literal float values are drawn from.
pub const FLOAT_LITERAL_MIN: f64 = -10.0;
pub const FLOAT_LITERAL_MAX: f64 = 10.0;

/// Output or input type of an expression node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Float,
    Bool,
}

/// One entry of the primitive catalog.
///
/// Every primitive declares its output type and the exact type of each
/// input slot; tree builders consume this table to grow well-typed
/// trees. The catalog is closed: the variants here are the entire
/// language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    /// Fresh float literal, drawn uniformly from
    /// [`FLOAT_LITERAL_MIN`, `FLOAT_LITERAL_MAX`] at construction time.
    FloatLiteral,
    /// Fresh bool literal, true with probability 1/2.
    BoolLiteral,
    /// Constant 0.0.
    Zero,
    /// Constant 1.0.
    One,
    Sensor(Sensor),
    Unary(UnaryOp),
    Binary(BinaryOp),
    Not,
    Logic(LogicOp),
    Compare(CompareOp),
    IfElse,
}

impl Primitive {
    /// Every primitive in the catalog.
    pub fn all() -> Vec<Primitive> {
        let mut primitives = vec![Primitive::FloatLiteral, Primitive::BoolLiteral];
        primitives.push(Primitive::Zero);
        primitives.push(Primitive::One);
        primitives.extend(Sensor::ALL.into_iter().map(Primitive::Sensor));
        primitives.extend(UnaryOp::ALL.into_iter().map(Primitive::Unary));
        primitives.extend(BinaryOp::ALL.into_iter().map(Primitive::Binary));
        primitives.push(Primitive::Not);
        primitives.extend(LogicOp::ALL.into_iter().map(Primitive::Logic));
        primitives.extend(CompareOp::ALL.into_iter().map(Primitive::Compare));
        primitives.push(Primitive::IfElse);
        primitives
    }

    pub fn output_type(self) -> NodeType {
        match self {
            Primitive::FloatLiteral
            | Primitive::Zero
            | Primitive::One
            | Primitive::Sensor(_)
            | Primitive::Unary(_)
            | Primitive::Binary(_)
            | Primitive::IfElse => NodeType::Float,
            Primitive::BoolLiteral
            | Primitive::Not
            | Primitive::Logic(_)
            | Primitive::Compare(_) => NodeType::Bool,
        }
    }

    /// Declared type of each input slot, in order.
    pub fn input_types(self) -> &'static [NodeType] {
        match self {
            Primitive::FloatLiteral
            | Primitive::BoolLiteral
            | Primitive::Zero
            | Primitive::One
            | Primitive::Sensor(_) => &[],
            Primitive::Unary(_) => &[NodeType::Float],
            Primitive::Binary(_) | Primitive::Compare(_) => &[NodeType::Float, NodeType::Float],
            Primitive::Not => &[NodeType::Bool],
            Primitive::Logic(_) => &[NodeType::Bool, NodeType::Bool],
            Primitive::IfElse => &[NodeType::Bool, NodeType::Float, NodeType::Float],
        }
    }

    pub fn arity(self) -> usize {
        self.input_types().len()
    }

    /// Whether this primitive can stand as a leaf.
    pub fn is_leaf(self) -> bool {
        self.arity() == 0
    }
}
