//! # Miscellaneous Instruction Handlers
//!
//! Handles verification of miscellaneous instructions:
//! - `nop` - no operation
//! - `monitorenter`, `monitorexit` - synchronization
//! - Constants: `aconst_null`, `iconst_*`, `lconst_*`, `fconst_*`, `dconst_*`
//! - `bipush`, `sipush` - push byte/short
//! - `ldc`, `ldc_w`, `ldc2_w` - load constant
//!
//! # References
//!
//! - [JVMS §6.5 - Instructions](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5)

use std::sync::Arc;

use crate::attributes::Instruction;
use crate::class_file::ClassFile;
use crate::constant::Constant;
use crate::verifiers::bytecode::frame::Frame;
use crate::verifiers::bytecode::type_system::VerificationType;
use crate::verifiers::error::{Result, VerifyError};

/// Handles `nop` - no operation.
///
/// # Errors
///
/// This function never returns an error.
///
/// # References
///
/// - [JVMS §6.5.nop](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.nop)
#[expect(clippy::unnecessary_wraps)]
#[inline]
pub fn handle_nop() -> Result<()> {
    Ok(())
}

/// Handles `aconst_null` - push null reference.
///
/// Stack: ... → ..., null
///
/// # Errors
///
/// Returns an error if stack overflow occurs.
///
/// # References
///
/// - [JVMS §6.5.aconst_null](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.aconst_null)
pub fn handle_aconst_null(frame: &mut Frame) -> Result<()> {
    frame.push(VerificationType::Null)
}

/// Handles `iconst_*` instructions - push int constant.
///
/// Stack: ... → ..., value
///
/// # Errors
///
/// Returns an error if stack overflow occurs.
///
/// # References
///
/// - [JVMS §6.5.iconst_i](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.iconst_i)
pub fn handle_iconst(frame: &mut Frame) -> Result<()> {
    frame.push(VerificationType::Integer)
}

/// Handles `lconst_*` instructions - push long constant.
///
/// Stack: ... → ..., value
///
/// # Errors
///
/// Returns an error if stack overflow occurs.
///
/// # References
///
/// - [JVMS §6.5.lconst_l](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.lconst_l)
pub fn handle_lconst(frame: &mut Frame) -> Result<()> {
    frame.push_category2(VerificationType::Long)
}

/// Handles `fconst_*` instructions - push float constant.
///
/// # Errors
///
/// Returns an error if stack overflow occurs.
///
/// # References
///
/// - [JVMS §6.5.fconst_f](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.fconst_f)
pub fn handle_fconst(frame: &mut Frame) -> Result<()> {
    frame.push(VerificationType::Float)
}

/// Handles `dconst_*` instructions - push double constant.
///
/// # Errors
///
/// Returns an error if stack overflow occurs.
///
/// # References
///
/// - [JVMS §6.5.dconst_d](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.dconst_d)
pub fn handle_dconst(frame: &mut Frame) -> Result<()> {
    frame.push_category2(VerificationType::Double)
}

/// Handles `bipush` and `sipush` - push byte/short as int.
///
/// # Errors
///
/// Returns an error if stack overflow occurs.
///
/// # References
///
/// - [JVMS §6.5.bipush](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.bipush)
/// - [JVMS §6.5.sipush](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.sipush)
pub fn handle_push_int(frame: &mut Frame) -> Result<()> {
    frame.push(VerificationType::Integer)
}

/// Handles `ldc` and `ldc_w` - load constant from pool.
///
/// # Errors
///
/// Returns an error if the constant pool index is invalid.
///
/// # References
///
/// - [JVMS §6.5.ldc](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.ldc)
/// - [JVMS§6.5.ldc_w](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.ldc_w)
pub fn handle_ldc(frame: &mut Frame, class_file: &ClassFile, index: u16) -> Result<()> {
    let constant = class_file
        .constant_pool
        .get(index)
        .ok_or(VerifyError::InvalidConstantPoolIndex(index))?;

    match constant {
        Constant::Integer(_) => frame.push(VerificationType::Integer),
        Constant::Float(_) => frame.push(VerificationType::Float),
        Constant::String(_) => frame.push(VerificationType::java_lang_string()),
        Constant::Class(_) => frame.push(VerificationType::java_lang_class()),
        Constant::MethodHandle { .. } => frame.push(VerificationType::Object(Arc::from(
            "java/lang/invoke/MethodHandle",
        ))),
        Constant::MethodType { .. } => frame.push(VerificationType::Object(Arc::from(
            "java/lang/invoke/MethodType",
        ))),
        Constant::Dynamic { .. } => {
            // Dynamic constant - would need to resolve to determine type
            // For now, push Object
            frame.push(VerificationType::java_lang_object())
        }
        _ => Err(VerifyError::VerifyError(format!(
            "ldc: unsupported constant type at index {index}"
        ))),
    }
}

/// Handles `ldc2_w` - load long or double constant from pool.
///
/// # Errors
///
/// Returns an error if the constant pool index is invalid.
///
/// # References
///
/// - [JVMS §6.5.ldc2_w](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.ldc2_w)
pub fn handle_ldc2_w(frame: &mut Frame, class_file: &ClassFile, index: u16) -> Result<()> {
    let constant = class_file
        .constant_pool
        .get(index)
        .ok_or(VerifyError::InvalidConstantPoolIndex(index))?;

    match constant {
        Constant::Long(_) => frame.push_category2(VerificationType::Long),
        Constant::Double(_) => frame.push_category2(VerificationType::Double),
        _ => Err(VerifyError::VerifyError(format!(
            "ldc2_w: expected long or double constant at index {index}"
        ))),
    }
}

/// Handles `monitorenter` - enter monitor.
///
/// Stack: ..., objectref → ...
///
/// # Errors
///
/// Returns an error if the operand is not a reference type.
///
/// # References
///
/// - [JVMS §6.5.monitorenter](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.monitorenter)
pub fn handle_monitorenter(frame: &mut Frame) -> Result<()> {
    let objectref = frame.pop()?;
    if !objectref.is_reference() {
        return Err(VerifyError::VerifyError(format!(
            "monitorenter: expected reference, got {objectref}"
        )));
    }
    Ok(())
}

/// Handles `monitorexit` - exit monitor.
///
/// Stack: ..., objectref → ...
///
/// # Errors
///
/// Returns an error if the operand is not a reference type.
///
/// # References
///
/// - [JVMS §6.5.monitorexit](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.monitorexit)
pub fn handle_monitorexit(frame: &mut Frame) -> Result<()> {
    let objectref = frame.pop()?;
    if !objectref.is_reference() {
        return Err(VerifyError::VerifyError(format!(
            "monitorexit: expected reference, got {objectref}"
        )));
    }
    Ok(())
}

/// Handles `wide` prefix.
///
/// The wide instruction modifies the next instruction to use a 16-bit index.
/// In our representation, wide variants are separate instructions (e.g., `iload_w`).
///
/// # Errors
///
/// This function never returns an error.
///
/// # References
///
/// - [JVMS §6.5.wide](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.wide)
#[expect(clippy::unnecessary_wraps)]
pub fn handle_wide() -> Result<()> {
    // Wide is handled by the instruction representation
    // (e.g., Iload_w instead of Wide + Iload)
    Ok(())
}

/// Handles reserved instructions (breakpoint, impdep1, impdep2).
///
/// These are implementation-dependent and generally not allowed.
///
/// # Errors
///
/// Returns an error for implementation-dependent instructions.
pub fn handle_reserved(instruction: &Instruction) -> Result<()> {
    match instruction {
        Instruction::Breakpoint => {
            // Breakpoint is for debuggers - typically a no-op for verification
            Ok(())
        }
        Instruction::Impdep1 | Instruction::Impdep2 => {
            // Implementation-dependent - reject
            Err(VerifyError::VerifyError(
                "Implementation-dependent instructions are not allowed".to_string(),
            ))
        }
        _ => Ok(()),
    }
}

/// Dispatches miscellaneous instructions.
///
/// # Errors
///
/// Returns an error if the instruction verification fails.
pub fn dispatch_misc(
    instruction: &Instruction,
    frame: &mut Frame,
    class_file: &ClassFile,
) -> Result<bool> {
    match instruction {
        // No-op
        Instruction::Nop => handle_nop()?,

        // Null constant
        Instruction::Aconst_null => handle_aconst_null(frame)?,

        // Integer constants
        Instruction::Iconst_m1
        | Instruction::Iconst_0
        | Instruction::Iconst_1
        | Instruction::Iconst_2
        | Instruction::Iconst_3
        | Instruction::Iconst_4
        | Instruction::Iconst_5 => handle_iconst(frame)?,

        // Long constants
        Instruction::Lconst_0 | Instruction::Lconst_1 => handle_lconst(frame)?,

        // Float constants
        Instruction::Fconst_0 | Instruction::Fconst_1 | Instruction::Fconst_2 => {
            handle_fconst(frame)?;
        }

        // Double constants
        Instruction::Dconst_0 | Instruction::Dconst_1 => handle_dconst(frame)?,

        // Push byte/short
        Instruction::Bipush(_) | Instruction::Sipush(_) => handle_push_int(frame)?,

        // Load constant
        Instruction::Ldc(index) => handle_ldc(frame, class_file, u16::from(*index))?,
        Instruction::Ldc_w(index) => handle_ldc(frame, class_file, *index)?,
        Instruction::Ldc2_w(index) => handle_ldc2_w(frame, class_file, *index)?,

        // Monitor operations
        Instruction::Monitorenter => handle_monitorenter(frame)?,
        Instruction::Monitorexit => handle_monitorexit(frame)?,

        // Wide prefix
        Instruction::Wide => handle_wide()?,

        // Reserved
        Instruction::Breakpoint | Instruction::Impdep1 | Instruction::Impdep2 => {
            handle_reserved(instruction)?;
        }

        // Not a misc instruction
        _ => return Ok(false),
    }

    Ok(true)
}
