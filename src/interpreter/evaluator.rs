/// Statement execution and the interpreter state.
pub mod core;

/// The environment chain that resolves variable and function names.
pub mod environment;

/// Function calls: user-defined functions and the native table.
pub mod function;

pub use self::{
    core::{EvalResult, Interpreter},
    environment::{Environment, Function},
};
