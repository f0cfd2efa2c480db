//! Exaf is an EXhaustive reasoner for Abstract argumentation Frameworks.
//!
//! Given a Dung framework (a set of arguments and an attack relation), it computes the complete and the stable extensions,
//! and decides the credulous and skeptical acceptance of arguments under these semantics.
//!
//! Extensions are found by checking candidate sets of arguments; see the [`solvers::enumeration`] module.

#![warn(missing_docs)]

pub mod aa;

pub mod io;

pub mod solvers;
