use crate::verifiers::error::{Result, VerifyError};
use crate::verifiers::types::VerificationType;

/// Represents a stack frame used during bytecode verification. Each frame contains local variables
/// and an operand stack. The locals and stack are represented as vectors of `VerificationType`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Frame {
    pub locals: Vec<VerificationType>,
    pub stack: Vec<VerificationType>,
    pub max_stack: usize,
}

impl Frame {
    #[must_use]
    pub(crate) fn new(max_locals: usize, max_stack: usize) -> Self {
        Self {
            locals: vec![VerificationType::Top; max_locals],
            stack: Vec::with_capacity(max_stack),
            max_stack,
        }
    }

    /// Push a verification type onto the operand stack.
    ///
    /// # Errors
    /// Returns `VerifyError::VerifyError` if the operand stack overflows.
    pub(crate) fn push(&mut self, ty: VerificationType) -> Result<()> {
        if self.stack.len() >= self.max_stack {
            return Err(VerifyError::VerifyError(
                "Operand stack overflow".to_string(),
            ));
        }
        self.stack.push(ty);
        Ok(())
    }

    /// Pop a verification type from the operand stack.
    ///
    /// # Errors
    /// Returns `VerifyError::VerifyError` if the operand stack is empty.
    pub(crate) fn pop(&mut self) -> Result<VerificationType> {
        self.stack
            .pop()
            .ok_or_else(|| VerifyError::VerifyError("Operand stack underflow".to_string()))
    }
}
