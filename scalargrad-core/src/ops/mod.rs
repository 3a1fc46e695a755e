//! # Primitive Operations (`ops`)
//!
//! Every differentiable primitive lives here, grouped by kind:
//!
//! - [`arithmetic`]: add, sub, mul, div, pow.
//! - [`activation`]: relu.
//!
//! Each primitive has an `xxx_op` constructor that reads its operand values
//! from the [`Graph`](crate::graph::Graph), computes the forward value and
//! appends the new node, plus a `pub(crate)` `xxx_backward` function holding
//! the local derivative. [`BackwardOp`](crate::autograd::BackwardOp) dispatches
//! to those functions during the backward pass. The `Graph` methods of the
//! same name forward to the constructors.

pub mod activation;
pub mod arithmetic;
