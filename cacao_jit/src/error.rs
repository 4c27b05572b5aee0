//! Error handling for the CACAO JIT compilation core.
//!
//! This module provides a comprehensive error type system covering errors that might occur
//! during bytecode parsing, stack analysis, code generation, and patch resolution.

use cacao_classfile::attributes::Instruction;

/// CACAO JIT result type
///
/// This is a type alias for the standard library's [`Result`](core::result::Result) type with the
/// error type defaulting to [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// A verifier error raised while parsing bytecode or analyzing the operand stack.
///
/// See: spec.md §7, "Verifier errors".
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// A branch, switch target, or exception-handler PC falls outside the method's bytecode.
    #[error("invalid bytecode index: {0}")]
    InvalidBytecodeIndex(usize),
    /// The operand stack was popped while empty.
    #[error("stack underflow")]
    StackUnderflow,
    /// A push exceeded the method's declared maximum operand-stack depth.
    #[error("stack overflow: depth {depth} exceeds max_stack {max_stack}")]
    StackOverflow { depth: usize, max_stack: usize },
    /// Two control-flow edges into the same block disagree on operand-stack depth.
    #[error("stack depth mismatch at merge: expected {expected}, found {actual}")]
    StackDepthMismatch { expected: usize, actual: usize },
    /// Two control-flow edges into the same block disagree on a slot's type.
    #[error("stack type mismatch at merge, slot {slot}")]
    StackTypeMismatch { slot: usize },
    /// A category-2 (long/double) value was split across a dup/swap-family instruction.
    #[error("category-2 value split by {0}")]
    CategoryTwoSplit(Instruction),
    /// A `lookupswitch`'s keys are not strictly ascending.
    #[error("lookupswitch keys are not strictly ascending")]
    UnsortedLookupSwitch,
    /// A constant-pool reference does not resolve to the expected entry kind.
    #[error("invalid constant-pool entry at index {0}")]
    InvalidConstantPoolEntry(u16),
    /// A branch targets an address in the middle of another instruction.
    #[error("branch into middle of instruction at {0}")]
    BranchIntoInstruction(usize),
}

/// A resolution failure encountered while patching a deferred reference.
///
/// See: spec.md §7, "Resolution failures at patch time".
#[derive(Debug, thiserror::Error)]
pub enum LinkageError {
    #[error("no class def found: {0}")]
    NoClassDefFound(String),
    #[error("no such field: {0}")]
    NoSuchField(String),
    #[error("no such method: {0}")]
    NoSuchMethod(String),
    #[error("incompatible class change: {0}")]
    IncompatibleClassChange(String),
    #[error("class circularity: {0}")]
    ClassCircularity(String),
    #[error("unsupported class version: {0}")]
    UnsupportedClassVersion(String),
    #[error("class not found: {0}")]
    ClassNotFound(String),
    #[error("class format error: {0}")]
    ClassFormat(String),
}

/// Errors that can occur during JIT compilation and execution.
///
/// This enum represents all possible error conditions that might arise when loading classes,
/// compiling methods, or executing JIT-compiled code.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An error occurred while loading a class file
    #[error(transparent)]
    ClassFileError(#[from] cacao_classfile::Error),
    /// A compilation error occurred generating the code
    #[error(transparent)]
    CodegenError(#[from] cranelift::codegen::CodegenError),
    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Invalid block address
    #[error("Invalid block address: {0}")]
    InvalidBlockAddress(usize),
    /// Invalid constant
    #[error("Invalid constant; expected {expected}, found {actual}")]
    InvalidConstant { expected: String, actual: String },
    /// Invalid constant index
    #[error("Invalid instant index: {0}")]
    InvalidConstantIndex(u16),
    /// Invalid local variable index
    #[error("Invalid local variable index: {0}")]
    InvalidLocalVariableIndex(usize),
    /// Invalid constant
    #[error("Invalid value; expected {expected}, found {actual}")]
    InvalidValue { expected: i8, actual: i8 },
    /// Bytecode failed verification during parsing or stack analysis
    #[error(transparent)]
    Verify(#[from] VerifyError),
    /// A deferred reference could not be resolved at patch time
    #[error(transparent)]
    Linkage(#[from] LinkageError),
    /// A module error occurred
    #[error(transparent)]
    ModuleError(#[from] cranelift::module::ModuleError),
    /// The operand stack was popped while empty
    #[error("Operand stack underflow")]
    OperandStackUnderflow,
    /// An error occurred while trying to convert a number
    #[error(transparent)]
    TryFromIntError(#[from] std::num::TryFromIntError),
    /// The instruction is not supported by the JIT compiler
    #[error("Unsupported instruction: {0}")]
    UnsupportedInstruction(Instruction),
    /// The JIT compiler does not support the given method
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),
    /// The target Instruction Set Architecture (ISA) is not supported
    #[error("Unsupported target ISA: {0}")]
    UnsupportedTargetISA(&'static str),
    /// JIT compilation is not supported for the type
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),
}
