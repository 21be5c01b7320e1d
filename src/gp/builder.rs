//! Random growth of well-typed policy trees

use rand::{Rng, SeedableRng, prelude::IndexedRandom, rngs::StdRng};

use super::{
    catalog::{FLOAT_LITERAL_MAX, FLOAT_LITERAL_MIN, NodeType, Primitive},
    expr::{BoolExpr, FloatExpr},
};

/// Grows random policy trees of bounded depth.
///
/// The random source is injected and seedable, so tree construction is
/// reproducible. Literal values are sampled here, once per constructed
/// node; evaluation never resamples them.
#[derive(Debug)]
pub struct TreeBuilder {
    rng: StdRng,
    max_depth: usize,
}

impl TreeBuilder {
    /// Default depth bound for grown trees.
    pub const DEFAULT_MAX_DEPTH: usize = 6;

    pub fn new(seed: u64) -> Self {
        Self::with_max_depth(seed, Self::DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(seed: u64, max_depth: usize) -> Self {
        TreeBuilder {
            rng: StdRng::seed_from_u64(seed),
            max_depth: max_depth.max(1),
        }
    }

    /// Grow a float-rooted policy tree.
    pub fn grow_policy(&mut self) -> FloatExpr {
        self.grow_float(1)
    }

    fn grow_float(&mut self, depth: usize) -> FloatExpr {
        match self.choose_primitive(NodeType::Float, depth) {
            Primitive::FloatLiteral => self.float_literal(),
            Primitive::Zero => FloatExpr::Literal(0.0),
            Primitive::One => FloatExpr::Literal(1.0),
            Primitive::Sensor(sensor) => FloatExpr::Sensor(sensor),
            Primitive::Unary(op) => FloatExpr::Unary {
                op,
                input: Box::new(self.grow_float(depth + 1)),
            },
            Primitive::Binary(op) => FloatExpr::Binary {
                op,
                left: Box::new(self.grow_float(depth + 1)),
                right: Box::new(self.grow_float(depth + 1)),
            },
            Primitive::IfElse => FloatExpr::IfElse {
                condition: Box::new(self.grow_bool(depth + 1)),
                then: Box::new(self.grow_float(depth + 1)),
                otherwise: Box::new(self.grow_float(depth + 1)),
            },
            // Bool-typed primitives are filtered out by the chooser.
            Primitive::BoolLiteral | Primitive::Not | Primitive::Logic(_) | Primitive::Compare(_) => {
                self.float_literal()
            }
        }
    }

    fn grow_bool(&mut self, depth: usize) -> BoolExpr {
        match self.choose_primitive(NodeType::Bool, depth) {
            Primitive::BoolLiteral => BoolExpr::Literal(self.rng.random_bool(0.5)),
            Primitive::Not => BoolExpr::Not {
                input: Box::new(self.grow_bool(depth + 1)),
            },
            Primitive::Logic(op) => BoolExpr::Logic {
                op,
                left: Box::new(self.grow_bool(depth + 1)),
                right: Box::new(self.grow_bool(depth + 1)),
            },
            Primitive::Compare(op) => BoolExpr::Compare {
                op,
                left: Box::new(self.grow_float(depth + 1)),
                right: Box::new(self.grow_float(depth + 1)),
            },
            // Float-typed primitives are filtered out by the chooser.
            _ => BoolExpr::Literal(self.rng.random_bool(0.5)),
        }
    }

    /// Pick a catalog entry with the required output type, restricted to
    /// leaves once the depth bound is reached.
    fn choose_primitive(&mut self, output: NodeType, depth: usize) -> Primitive {
        let leaf_only = depth >= self.max_depth;
        let options: Vec<Primitive> = Primitive::all()
            .into_iter()
            .filter(|p| p.output_type() == output)
            .filter(|p| !leaf_only || p.is_leaf())
            .collect();
        match options.choose(&mut self.rng) {
            Some(&primitive) => primitive,
            // Both types have leaf primitives, so this is unreachable;
            // fall back to a literal-producing entry regardless.
            None => match output {
                NodeType::Float => Primitive::FloatLiteral,
                NodeType::Bool => Primitive::BoolLiteral,
            },
        }
    }

    fn float_literal(&mut self) -> FloatExpr {
        FloatExpr::Literal(self.rng.random_range(FLOAT_LITERAL_MIN..=FLOAT_LITERAL_MAX))
    }
}
