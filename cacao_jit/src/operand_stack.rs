use crate::Error::{InternalError, OperandStackUnderflow};
use crate::Result;
use cranelift::codegen::ir::Block;
use cranelift::frontend::FunctionBuilder;
use cranelift::prelude::{Value, types};

/// Tracks the native Cranelift [`Value`]s that represent the Java operand stack while a method
/// body is being translated.
///
/// Unlike the interpreter's operand stack, this stack never holds a Java value directly; it holds
/// the SSA value that currently computes it. Values that are live across a basic block boundary
/// become block parameters (see [`OperandStack::as_block_arguments`] and [`OperandStack::reset`]),
/// which is how the Java operand stack shape is preserved across branches without re-materializing
/// it from memory.
#[derive(Clone, Debug)]
pub(crate) struct OperandStack {
    stack: Vec<Value>,
}

impl OperandStack {
    /// Creates a new operand stack with the given maximum depth, as reported by a method's
    /// `Code` attribute `max_stack`.
    pub(crate) fn with_capacity(capacity: u16) -> Self {
        OperandStack {
            stack: Vec::with_capacity(usize::from(capacity)),
        }
    }

    /// Pushes a value onto the stack without checking its Cranelift type.
    pub(crate) fn push(&mut self, value: Value) {
        self.stack.push(value);
    }

    /// Pops a value from the stack without checking its Cranelift type.
    ///
    /// # Errors
    ///
    /// if the stack is empty
    pub(crate) fn pop(&mut self) -> Result<Value> {
        self.stack.pop().ok_or(OperandStackUnderflow)
    }

    /// Returns the number of values currently on the stack.
    pub(crate) fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns `true` if the stack holds no values.
    pub(crate) fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    fn push_typed(
        &mut self,
        function_builder: &FunctionBuilder,
        expected: types::Type,
        value: Value,
    ) -> Result<()> {
        let actual = function_builder.func.dfg.value_type(value);
        if actual != expected {
            return Err(InternalError(format!(
                "operand stack push type mismatch: expected {expected}, found {actual}"
            )));
        }
        self.stack.push(value);
        Ok(())
    }

    fn pop_typed(
        &mut self,
        function_builder: &FunctionBuilder,
        expected: types::Type,
    ) -> Result<Value> {
        let value = self.pop()?;
        let actual = function_builder.func.dfg.value_type(value);
        if actual != expected {
            return Err(InternalError(format!(
                "operand stack pop type mismatch: expected {expected}, found {actual}"
            )));
        }
        Ok(value)
    }

    /// Pushes a category-1 `int` value.
    pub(crate) fn push_int(
        &mut self,
        function_builder: &FunctionBuilder,
        value: Value,
    ) -> Result<()> {
        self.push_typed(function_builder, types::I32, value)
    }

    /// Pops a category-1 `int` value.
    pub(crate) fn pop_int(&mut self, function_builder: &FunctionBuilder) -> Result<Value> {
        self.pop_typed(function_builder, types::I32)
    }

    /// Pushes a category-2 `long` value.
    pub(crate) fn push_long(
        &mut self,
        function_builder: &FunctionBuilder,
        value: Value,
    ) -> Result<()> {
        self.push_typed(function_builder, types::I64, value)
    }

    /// Pops a category-2 `long` value.
    pub(crate) fn pop_long(&mut self, function_builder: &FunctionBuilder) -> Result<Value> {
        self.pop_typed(function_builder, types::I64)
    }

    /// Pushes a category-1 `float` value.
    pub(crate) fn push_float(
        &mut self,
        function_builder: &FunctionBuilder,
        value: Value,
    ) -> Result<()> {
        self.push_typed(function_builder, types::F32, value)
    }

    /// Pops a category-1 `float` value.
    pub(crate) fn pop_float(&mut self, function_builder: &FunctionBuilder) -> Result<Value> {
        self.pop_typed(function_builder, types::F32)
    }

    /// Pushes a category-2 `double` value.
    pub(crate) fn push_double(
        &mut self,
        function_builder: &FunctionBuilder,
        value: Value,
    ) -> Result<()> {
        self.push_typed(function_builder, types::F64, value)
    }

    /// Pops a category-2 `double` value.
    pub(crate) fn pop_double(&mut self, function_builder: &FunctionBuilder) -> Result<Value> {
        self.pop_typed(function_builder, types::F64)
    }

    /// Pushes an object or array reference. References share the `long`-wide representation used
    /// throughout this crate for addresses.
    pub(crate) fn push_object(
        &mut self,
        function_builder: &FunctionBuilder,
        value: Value,
    ) -> Result<()> {
        self.push_typed(function_builder, types::I64, value)
    }

    /// Pops an object or array reference.
    pub(crate) fn pop_object(&mut self, function_builder: &FunctionBuilder) -> Result<Value> {
        self.pop_typed(function_builder, types::I64)
    }

    /// Returns the stack's current contents in bottom-to-top order, suitable for passing as the
    /// arguments of a `jump` to a block whose parameters were created from this same stack shape.
    pub(crate) fn as_block_arguments(&self) -> Vec<Value> {
        self.stack.clone()
    }

    /// Replaces the stack's contents with the parameters of `block`.
    ///
    /// This is called immediately after switching into a block that merges control flow from
    /// multiple predecessors; the block's parameters are exactly the operand stack values that
    /// were live across the jump, in the same order they were pushed.
    pub(crate) fn reset(&mut self, function_builder: &mut FunctionBuilder, block: Block) {
        self.stack = function_builder.block_params(block).to_vec();
    }
}

/// Determines if a Cranelift value represents a JVM category-1 value (all types except `long` and
/// `double`).
///
/// # References
/// - [JVMS §2.11.1-320](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-2.html#jvms-2.11.1-320)
pub(crate) fn is_category_1(function_builder: &FunctionBuilder, value: Value) -> bool {
    !is_category_2(function_builder, value)
}

/// Determines if a Cranelift value represents a JVM category-2 value (`long` or `double`).
pub(crate) fn is_category_2(function_builder: &FunctionBuilder, value: Value) -> bool {
    let value_type = function_builder.func.dfg.value_type(value);
    value_type == types::I64 || value_type == types::F64
}
