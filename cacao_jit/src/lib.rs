//! # CACAO JIT
//!
//! The JIT compilation core of CACAO: decodes a method's Java bytecode into an intermediate
//! representation, analyzes the operand stack to a fixed point, and emits native machine code
//! via Cranelift. The generated code can be called directly on the host machine.
#![forbid(clippy::allow_attributes)]
#![allow(dead_code)]
#![deny(clippy::pedantic)]
#![deny(clippy::unwrap_in_result)]
#![deny(clippy::unwrap_used)]

#[cfg(not(target_family = "wasm"))]
mod compiler;
mod control_flow_graph;
mod error;
mod function;
#[cfg(not(target_family = "wasm"))]
mod instruction;
mod jit_value;
mod local_variables;
mod operand_stack;
mod trap;
mod value;
#[cfg(target_family = "wasm")]
mod wasm_compiler;

#[cfg(not(target_family = "wasm"))]
pub use compiler::Compiler;
pub use error::{Error, Result};
pub use function::Function;
pub(crate) use jit_value::JitValue;
pub use value::Value;
#[cfg(target_family = "wasm")]
pub use wasm_compiler::Compiler;
