//! # Control Flow Instruction Handlers
//!
//! Handles verification of control flow instructions:
//! - Unconditional branches: `goto`, `goto_w`
//! - Returns: `return`, `ireturn`, `lreturn`, `freturn`, `dreturn`, `areturn`
//! - Switches: `tableswitch`, `lookupswitch`
//! - Subroutines: `jsr`, `ret` (rejected for class version >= 51.0)
//!
//! # References
//!
//! - [JVMS §6.5 - Instructions](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5)

use crate::FieldType;
use crate::attributes::Instruction;
use crate::verifiers::bytecode::frame::Frame;
use crate::verifiers::bytecode::type_system::VerificationType;
use crate::verifiers::context::VerificationContext;
use crate::verifiers::error::{Result, VerifyError};

/// Handles `return` - return void from method.
///
/// Stack: ... → \[empty\]
///
/// # Errors
///
/// This function never returns an error.
///
/// # References
///
/// - [JVMS §6.5.return](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.return)
#[expect(clippy::unnecessary_wraps)]
pub fn handle_return() -> Result<()> {
    // Nothing to verify - just returns void
    Ok(())
}

/// Handles `ireturn` - return int from method.
///
/// Stack: ..., value → \[empty\]
///
/// # Errors
///
/// Returns an error if the return value type is incorrect.
///
/// # References
///
/// - [JVMS §6.5.ireturn](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.ireturn)
pub fn handle_ireturn(frame: &mut Frame, expected_return: Option<&FieldType>) -> Result<()> {
    let value = frame.pop()?;
    if value != VerificationType::Integer {
        return Err(VerifyError::VerifyError(format!(
            "ireturn: expected int, got {value}"
        )));
    }

    // Verify against method's return type
    if let Some(ret_type) = expected_return {
        let expected = VerificationType::from_field_type(ret_type);
        if expected != VerificationType::Integer {
            return Err(VerifyError::VerifyError(format!(
                "ireturn: method returns {ret_type}, not int"
            )));
        }
    }

    Ok(())
}

/// Handles `lreturn` - return long from method.
///
/// # Errors
///
/// Returns an error if the return value type is incorrect.
///
/// # References
///
/// - [JVMS §6.5.lreturn](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.lreturn)
pub fn handle_lreturn(frame: &mut Frame, expected_return: Option<&FieldType>) -> Result<()> {
    let value = frame.pop_category2()?;
    if value != VerificationType::Long {
        return Err(VerifyError::VerifyError(format!(
            "lreturn: expected long, got {value}"
        )));
    }

    if let Some(ret_type) = expected_return {
        let expected = VerificationType::from_field_type(ret_type);
        if expected != VerificationType::Long {
            return Err(VerifyError::VerifyError(format!(
                "lreturn: method returns {ret_type}, not long"
            )));
        }
    }

    Ok(())
}

/// Handles `freturn` - return float from method.
///
/// # Errors
///
/// Returns an error if the return value type is incorrect.
///
/// # References
///
/// - [JVMS §6.5.freturn](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.freturn)
pub fn handle_freturn(frame: &mut Frame, expected_return: Option<&FieldType>) -> Result<()> {
    let value = frame.pop()?;
    if value != VerificationType::Float {
        return Err(VerifyError::VerifyError(format!(
            "freturn: expected float, got {value}"
        )));
    }

    if let Some(ret_type) = expected_return {
        let expected = VerificationType::from_field_type(ret_type);
        if expected != VerificationType::Float {
            return Err(VerifyError::VerifyError(format!(
                "freturn: method returns {ret_type}, not float"
            )));
        }
    }

    Ok(())
}

/// Handles `dreturn` - return double from method.
///
/// # Errors
///
/// Returns an error if the return value type is incorrect.
///
/// # References
///
/// - [JVMS §6.5.dreturn](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.dreturn)
pub fn handle_dreturn(frame: &mut Frame, expected_return: Option<&FieldType>) -> Result<()> {
    let value = frame.pop_category2()?;
    if value != VerificationType::Double {
        return Err(VerifyError::VerifyError(format!(
            "dreturn: expected double, got {value}"
        )));
    }

    if let Some(ret_type) = expected_return {
        let expected = VerificationType::from_field_type(ret_type);
        if expected != VerificationType::Double {
            return Err(VerifyError::VerifyError(format!(
                "dreturn: method returns {ret_type}, not double"
            )));
        }
    }

    Ok(())
}

/// Handles `areturn` - return reference from method.
///
/// # Errors
///
/// Returns an error if the return value type is incorrect.
///
/// # References
///
/// - [JVMS §6.5.areturn](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.areturn)
pub fn handle_areturn<C: VerificationContext>(
    frame: &mut Frame,
    expected_return: Option<&FieldType>,
    context: &C,
) -> Result<()> {
    let value = frame.pop()?;
    if !value.is_reference() {
        return Err(VerifyError::VerifyError(format!(
            "areturn: expected reference, got {value}"
        )));
    }

    if let Some(ret_type) = expected_return {
        let expected = VerificationType::from_field_type(ret_type);
        if !value.is_assignable_to(&expected, context)? {
            return Err(VerifyError::VerifyError(format!(
                "areturn: {value} is not assignable to expected return type {ret_type}"
            )));
        }
    }

    Ok(())
}

/// Handles `tableswitch` - switch on int with table.
///
/// Stack: ..., index → ...
///
/// # Errors
///
/// Returns an error if the index is not an `int`.
///
/// # References
///
/// - [JVMS §6.5.tableswitch](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.tableswitch)
pub fn handle_tableswitch(frame: &mut Frame) -> Result<()> {
    let index = frame.pop()?;
    if index != VerificationType::Integer {
        return Err(VerifyError::VerifyError(format!(
            "tableswitch: expected int index, got {index}"
        )));
    }
    Ok(())
}

/// Handles `lookupswitch` - switch on int with lookup.
///
/// Stack: ..., key → ...
///
/// # Errors
///
/// Returns an error if the key is not an `int`.
///
/// # References
///
/// - [JVMS §6.5.lookupswitch](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.lookupswitch)
pub fn handle_lookupswitch(frame: &mut Frame) -> Result<()> {
    let key = frame.pop()?;
    if key != VerificationType::Integer {
        return Err(VerifyError::VerifyError(format!(
            "lookupswitch: expected int key, got {key}"
        )));
    }
    Ok(())
}

/// Rejects `jsr` instruction for class files version >= 51.0.
///
/// # Errors
///
/// Always returns an error for modern class files.
///
/// # References
///
/// - [JVMS §4.9.1](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-4.html#jvms-4.9.1)
pub fn reject_jsr(major_version: u16) -> Result<()> {
    if major_version >= 51 {
        Err(VerifyError::VerifyError(
            "jsr instruction is not allowed in class files version 51.0 or later".to_string(),
        ))
    } else {
        // For older class files, jsr would need special handling
        // but we can reject it for simplicity
        Err(VerifyError::VerifyError(
            "jsr/ret subroutines are not supported".to_string(),
        ))
    }
}

/// Rejects `ret` instruction for class files version >= 51.0.
///
/// # Errors
///
/// Always returns an error for modern class files.
///
/// # References
///
/// - [JVMS §4.9.1](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-4.html#jvms-4.9.1)
pub fn reject_ret(major_version: u16) -> Result<()> {
    if major_version >= 51 {
        Err(VerifyError::VerifyError(
            "ret instruction is not allowed in class files version 51.0 or later".to_string(),
        ))
    } else {
        Err(VerifyError::VerifyError(
            "jsr/ret subroutines are not supported".to_string(),
        ))
    }
}

/// Dispatches control flow instructions.
///
/// Note: This doesn't handle successors - that's done separately.
/// This just verifies the stack effects.
///
/// # Errors
///
/// Returns an error if the instruction verification fails.
pub fn dispatch_control<C: VerificationContext>(
    instruction: &Instruction,
    frame: &mut Frame,
    expected_return: Option<&FieldType>,
    major_version: u16,
    context: &C,
) -> Result<bool> {
    match instruction {
        // Unconditional branches (no stack effect)
        Instruction::Goto(_) | Instruction::Goto_w(_) => {}

        // Returns
        Instruction::Return => handle_return()?,
        Instruction::Ireturn => handle_ireturn(frame, expected_return)?,
        Instruction::Lreturn => handle_lreturn(frame, expected_return)?,
        Instruction::Freturn => handle_freturn(frame, expected_return)?,
        Instruction::Dreturn => handle_dreturn(frame, expected_return)?,
        Instruction::Areturn => handle_areturn(frame, expected_return, context)?,

        // Switches
        Instruction::Tableswitch(_) => handle_tableswitch(frame)?,
        Instruction::Lookupswitch(_) => handle_lookupswitch(frame)?,

        // Rejected instructions
        Instruction::Jsr(_) | Instruction::Jsr_w(_) => {
            reject_jsr(major_version)?;
        }
        Instruction::Ret(_) | Instruction::Ret_w(_) => {
            reject_ret(major_version)?;
        }

        // Not a control flow instruction
        _ => return Ok(false),
    }

    Ok(true)
}
