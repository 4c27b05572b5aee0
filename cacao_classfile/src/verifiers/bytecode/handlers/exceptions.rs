//! # Exception Instruction Handlers
//!
//! Handles verification of exception-related instructions:
//! - `athrow` - throw exception
//!
//! # References
//!
//! - [JVMS §6.5.athrow](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.athrow)

use crate::attributes::Instruction;
use crate::verifiers::bytecode::frame::Frame;
use crate::verifiers::bytecode::type_system::VerificationType;
use crate::verifiers::context::VerificationContext;
use crate::verifiers::error::{Result, VerifyError};

/// Handles `athrow` - throw exception.
///
/// Stack: ..., objectref → \[empty\] (control transfer)
///
/// The objectref must be of type Throwable (or a subclass).
///
/// # Errors
///
/// Returns an error if the operand is not a reference type.
///
/// # References
///
/// - [JVMS §6.5.athrow](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.athrow)
pub fn handle_athrow<C: VerificationContext>(frame: &mut Frame, context: &C) -> Result<()> {
    let objectref = frame.pop()?;

    // Must be a reference type
    if !objectref.is_reference() {
        return Err(VerifyError::VerifyError(format!(
            "athrow: expected reference, got {objectref}"
        )));
    }

    // Must be assignable to Throwable (unless null)
    if !objectref.is_null() {
        let throwable = VerificationType::java_lang_throwable();
        if !objectref.is_assignable_to(&throwable, context)? {
            // We can't always verify this statically without class hierarchy info
            // So we just check it's a reference type
            if let VerificationType::Object(_) = &objectref {
                // Assume valid - will be checked at runtime
            } else if let VerificationType::Array(_) = &objectref {
                return Err(VerifyError::VerifyError(
                    "athrow: arrays are not throwable".to_string(),
                ));
            }
        }
    }

    // athrow clears the stack - but this is handled by control flow
    // The frame after athrow is not used (control transfers to handler)

    Ok(())
}

/// Dispatches exception instructions.
///
/// # Errors
///
/// Returns an error if the instruction verification fails.
pub fn dispatch_exceptions<C: VerificationContext>(
    instruction: &Instruction,
    frame: &mut Frame,
    context: &C,
) -> Result<bool> {
    match instruction {
        Instruction::Athrow => {
            handle_athrow(frame, context)?;
            Ok(true)
        }
        _ => Ok(false),
    }
}
