//! # Stack Manipulation Instruction Handlers
//!
//! Handles verification of stack manipulation instructions:
//! - `pop`, `pop2` - Discard stack values
//! - `dup`, `dup_x1`, `dup_x2` - Duplicate stack values
//! - `dup2`, `dup2_x1`, `dup2_x2` - Duplicate category 2 or two category 1 values
//! - `swap` - Swap top two values
//!
//! # References
//!
//! - [JVMS §6.5 - Instructions](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5)

use crate::attributes::Instruction;
use crate::verifiers::bytecode::frame::Frame;
use crate::verifiers::bytecode::type_system::VerificationType;
use crate::verifiers::error::{Result, VerifyError};

/// Handles `pop` - discard top stack value.
///
/// # Errors
///
/// Returns an error if attempting to pop a category 2 value.
///
/// # References
///
/// Pop must not be used with category 2 values.
/// - [JVMS §6.5.pop](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.pop)
pub fn handle_pop(frame: &mut Frame) -> Result<()> {
    let value = frame.pop()?;
    if value.is_category2() || value == VerificationType::Top {
        return Err(VerifyError::VerifyError(
            "pop cannot be used on category 2 values".to_string(),
        ));
    }
    Ok(())
}

/// Handles `pop2` - discard top one or two stack values.
///
/// Form 1: value2, value1 → (where value1 and value2 are both category 1)
/// Form 2: value → (where value is category 2)
///
/// # Errors
///
/// Returns an error if the stack values have unexpected types.
///
/// # References
///
/// - [JVMS §6.5.pop2](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.pop2)
pub fn handle_pop2(frame: &mut Frame) -> Result<()> {
    let value = frame.pop()?;

    if value == VerificationType::Top {
        // This is the second slot of a category 2 value
        // Pop the actual category 2 value
        let cat2 = frame.pop()?;
        if !cat2.is_category2() {
            return Err(VerifyError::VerifyError(
                "pop2: expected category 2 value before Top".to_string(),
            ));
        }
    } else if value.is_category2() {
        // This shouldn't happen in a well-formed stack, but handle it
        return Err(VerifyError::VerifyError(
            "pop2: unexpected category 2 value (should be Top on top)".to_string(),
        ));
    } else {
        // Category 1 value - need to pop another category 1
        let value2 = frame.pop()?;
        if value2.is_category2() || value2 == VerificationType::Top {
            return Err(VerifyError::VerifyError(
                "pop2: expected two category 1 values".to_string(),
            ));
        }
    }

    Ok(())
}

/// Handles `dup` - duplicate top stack value.
///
/// Stack: ..., value → ..., value, value
///
/// # Errors
///
/// Returns an error if attempting to duplicate a category 2 value.
///
/// # References
///
/// Dup must not be used on category 2 values.
/// - [JVMS §6.5.dup](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.dup)
pub fn handle_dup(frame: &mut Frame) -> Result<()> {
    let value = frame.pop()?;
    if value.is_category2() || value == VerificationType::Top {
        return Err(VerifyError::VerifyError(
            "dup cannot be used on category 2 values".to_string(),
        ));
    }
    frame.push(value.clone())?;
    frame.push(value)
}

/// Handles `dup_x1` - duplicate and insert below second value.
///
/// Stack: ..., value2, value1 → ..., value1, value2, value1
///
/// Both values must be category 1.
///
/// # Errors
///
/// Returns an error if either value is not category 1.
///
/// # References
///
/// - [JVMS §6.5.dup_x1](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.dup_x1)
pub fn handle_dup_x1(frame: &mut Frame) -> Result<()> {
    let value1 = frame.pop()?;
    if value1.is_category2() || value1 == VerificationType::Top {
        return Err(VerifyError::VerifyError(
            "dup_x1: value1 must be category 1".to_string(),
        ));
    }

    let value2 = frame.pop()?;
    if value2.is_category2() || value2 == VerificationType::Top {
        return Err(VerifyError::VerifyError(
            "dup_x1: value2 must be category 1".to_string(),
        ));
    }

    frame.push(value1.clone())?;
    frame.push(value2)?;
    frame.push(value1)
}

/// Handles `dup_x2` - duplicate and insert below second or third value.
///
/// Form 1: ..., value3, value2, value1 → ..., value1, value3, value2, value1
///         (where value1, value2, and value3 are all category 1)
///
/// Form 2: ..., value2, value1 → ..., value1, value2, value1
///         (where value1 is category 1 and value2 is category 2)
///
/// # Errors
///
/// Returns an error if the stack values have unexpected types.
///
/// # References
///
/// - [JVMS §6.5.dup_x2](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.dup_x2)
pub fn handle_dup_x2(frame: &mut Frame) -> Result<()> {
    let value1 = frame.pop()?;
    if value1.is_category2() || value1 == VerificationType::Top {
        return Err(VerifyError::VerifyError(
            "dup_x2: value1 must be category 1".to_string(),
        ));
    }

    let value2 = frame.pop()?;

    if value2 == VerificationType::Top {
        // Form 2: value2 is category 2
        let cat2_value = frame.pop()?;
        if !cat2_value.is_category2() {
            return Err(VerifyError::VerifyError(
                "dup_x2: expected category 2 value before Top".to_string(),
            ));
        }

        frame.push(value1.clone())?;
        frame.push(cat2_value)?;
        frame.push(VerificationType::Top)?;
        frame.push(value1)
    } else if value2.is_category2() {
        Err(VerifyError::VerifyError(
            "dup_x2: malformed category 2 value on stack".to_string(),
        ))
    } else {
        // Form 1: value2 is category 1
        let value3 = frame.pop()?;
        if value3.is_category2() || value3 == VerificationType::Top {
            return Err(VerifyError::VerifyError(
                "dup_x2: value3 must be category 1".to_string(),
            ));
        }

        frame.push(value1.clone())?;
        frame.push(value3)?;
        frame.push(value2)?;
        frame.push(value1)
    }
}

/// Handles `dup2` - duplicate top one or two values.
///
/// Form 1: ..., value2, value1 → ..., value2, value1, value2, value1
///         (where value1 and value2 are both category 1)
///
/// Form 2: ..., value → ..., value, value
///         (where value is category 2)
///
/// # Errors
///
/// Returns an error if the stack values have unexpected types.
///
/// # References
///
/// - [JVMS §6.5.dup2](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.dup2)
pub fn handle_dup2(frame: &mut Frame) -> Result<()> {
    let value1 = frame.pop()?;

    if value1 == VerificationType::Top {
        // Form 2: category 2 value
        let cat2_value = frame.pop()?;
        if !cat2_value.is_category2() {
            return Err(VerifyError::VerifyError(
                "dup2: expected category 2 value before Top".to_string(),
            ));
        }

        frame.push(cat2_value.clone())?;
        frame.push(VerificationType::Top)?;
        frame.push(cat2_value)?;
        frame.push(VerificationType::Top)
    } else if value1.is_category2() {
        Err(VerifyError::VerifyError(
            "dup2: malformed category 2 value on stack".to_string(),
        ))
    } else {
        // Form 1: two category 1 values
        let value2 = frame.pop()?;
        if value2.is_category2() || value2 == VerificationType::Top {
            return Err(VerifyError::VerifyError(
                "dup2: value2 must be category 1".to_string(),
            ));
        }

        frame.push(value2.clone())?;
        frame.push(value1.clone())?;
        frame.push(value2)?;
        frame.push(value1)
    }
}

/// Handles `dup2_x1` - duplicate one or two values and insert below.
///
/// Form 1: ..., value3, value2, value1 → ..., value2, value1, value3, value2, value1
///         (where value1, value2, and value3 are all category 1)
///
/// Form 2: ..., value2, value1 → ..., value1, value2, value1
///         (where value1 is category 2 and value2 is category 1)
///
/// # Errors
///
/// Returns an error if the stack values have unexpected types.
///
/// # References
///
/// - [JVMS §6.5.dup2_x1](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.dup2_x1)
pub fn handle_dup2_x1(frame: &mut Frame) -> Result<()> {
    let value1 = frame.pop()?;

    if value1 == VerificationType::Top {
        // Form 2: value1 is category 2
        let cat2_value = frame.pop()?;
        if !cat2_value.is_category2() {
            return Err(VerifyError::VerifyError(
                "dup2_x1: expected category 2 value before Top".to_string(),
            ));
        }

        let value2 = frame.pop()?;
        if value2.is_category2() || value2 == VerificationType::Top {
            return Err(VerifyError::VerifyError(
                "dup2_x1: value2 must be category 1".to_string(),
            ));
        }

        frame.push(cat2_value.clone())?;
        frame.push(VerificationType::Top)?;
        frame.push(value2)?;
        frame.push(cat2_value)?;
        frame.push(VerificationType::Top)
    } else if value1.is_category2() {
        Err(VerifyError::VerifyError(
            "dup2_x1: malformed category 2 value on stack".to_string(),
        ))
    } else {
        // Form 1: all category 1
        let value2 = frame.pop()?;
        if value2.is_category2() || value2 == VerificationType::Top {
            return Err(VerifyError::VerifyError(
                "dup2_x1: value2 must be category 1".to_string(),
            ));
        }

        let value3 = frame.pop()?;
        if value3.is_category2() || value3 == VerificationType::Top {
            return Err(VerifyError::VerifyError(
                "dup2_x1: value3 must be category 1".to_string(),
            ));
        }

        frame.push(value2.clone())?;
        frame.push(value1.clone())?;
        frame.push(value3)?;
        frame.push(value2)?;
        frame.push(value1)
    }
}

/// Handles `dup2_x2` - duplicate one or two values and insert two or three below.
///
/// Form 1: ..., value4, value3, value2, value1 → ..., value2, value1, value4, value3, value2, value1
///         (where all values are category 1)
///
/// Form 2: ..., value3, value2, value1 → ..., value1, value3, value2, value1
///         (where value1 is category 2, value2 and value3 are category 1)
///
/// Form 3: ..., value3, value2, value1 → ..., value2, value1, value3, value2, value1
///         (where value1 and value2 are category 1, value3 is category 2)
///
/// Form 4: ..., value2, value1 → ..., value1, value2, value1
///         (where both values are category 2)
///
/// # Errors
///
/// Returns an error if the stack values have unexpected types.
///
/// # References
///
/// - [JVMS §6.5.dup2_x2](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.5.dup2_x2)
pub fn handle_dup2_x2(frame: &mut Frame) -> Result<()> {
    let value1 = frame.pop()?;

    if value1 == VerificationType::Top {
        // value1 is category 2
        let cat2_value1 = frame.pop()?;
        if !cat2_value1.is_category2() {
            return Err(VerifyError::VerifyError(
                "dup2_x2: expected category 2 value before Top".to_string(),
            ));
        }

        let value2 = frame.pop()?;

        if value2 == VerificationType::Top {
            // Form 4: both category 2
            let cat2_value2 = frame.pop()?;
            if !cat2_value2.is_category2() {
                return Err(VerifyError::VerifyError(
                    "dup2_x2: expected category 2 value before Top".to_string(),
                ));
            }

            frame.push(cat2_value1.clone())?;
            frame.push(VerificationType::Top)?;
            frame.push(cat2_value2)?;
            frame.push(VerificationType::Top)?;
            frame.push(cat2_value1)?;
            frame.push(VerificationType::Top)
        } else if value2.is_category2() {
            Err(VerifyError::VerifyError(
                "dup2_x2: malformed category 2 value on stack".to_string(),
            ))
        } else {
            // Form 2: value1 cat2, value2 and value3 cat1
            let value3 = frame.pop()?;
            if value3.is_category2() || value3 == VerificationType::Top {
                return Err(VerifyError::VerifyError(
                    "dup2_x2: value3 must be category 1".to_string(),
                ));
            }

            frame.push(cat2_value1.clone())?;
            frame.push(VerificationType::Top)?;
            frame.push(value3)?;
            frame.push(value2)?;
            frame.push(cat2_value1)?;
            frame.push(VerificationType::Top)
        }
    } else if value1.is_category2() {
        Err(VerifyError::VerifyError(
            "dup2_x2: malformed category 2 value on stack".to_string(),
        ))
    } else {
        // value1 is category 1
        let value2 = frame.pop()?;
        if value2.is_category2() || value2 == VerificationType::Top {
            return Err(VerifyError::VerifyError(
                "dup2_x2: value2 must be category 1".to_string(),
            ));
        }

        let value3 = frame.pop()?;

        if value3 == VerificationType::Top {
            // Form 3: value1 and value2 cat1, value3 cat2
            let cat2_value3 = frame.pop()?;
            if !cat2_value3.is_category2() {
                return Err(VerifyError::VerifyError(
                    "dup2_x2: expected category 2 value before Top".to_string(),
                ));
            }

            frame.push(value2.clone())?;
            frame.push(value1.clone())?;
            frame.push(cat2_value3)?;
            frame.push(VerificationType::Top)?;
            frame.push(value2)?;
            frame.push(value1)
        } else if value3.is_category2() {
            Err(VerifyError::VerifyError(
                "dup2_x2: malformed category 2 value on stack".to_string(),
            ))
        } else {
            // Form 1: all category 1
            let value4 = frame.pop()?;
            if value4.is_category2() || value4 == VerificationType::Top {
                return Err(VerifyError::VerifyError(
                    "dup2_x2: value4 must be category 1".to_string(),
                ));
            }

            frame.push(value2.clone())?;
            frame.push(value1.clone())?;
            frame.push(value4)?;
            frame.push(value3)?;
            frame.push(value2)?;
            frame.push(value1)
        }
    }
}

/// Handles `swap` - swap top two stack values.
///
/// Stack: ..., value2, value1 → ..., value1, value2
///
/// Both values must be category 1.
///
/// # Errors
///
/// Returns an error if either value is not category 1.
///
/// # References
///
/// - [JVMS §6.5.swap](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.swap)
pub fn handle_swap(frame: &mut Frame) -> Result<()> {
    let value1 = frame.pop()?;
    if value1.is_category2() || value1 == VerificationType::Top {
        return Err(VerifyError::VerifyError(
            "swap: value1 must be category 1".to_string(),
        ));
    }

    let value2 = frame.pop()?;
    if value2.is_category2() || value2 == VerificationType::Top {
        return Err(VerifyError::VerifyError(
            "swap: value2 must be category 1".to_string(),
        ));
    }

    frame.push(value1)?;
    frame.push(value2)
}

/// Dispatches stack manipulation instructions to their handlers.
///
/// # Errors
///
/// Returns an error if the instruction verification fails.
pub fn dispatch_stack(instruction: &Instruction, frame: &mut Frame) -> Result<bool> {
    match instruction {
        Instruction::Pop => handle_pop(frame)?,
        Instruction::Pop2 => handle_pop2(frame)?,
        Instruction::Dup => handle_dup(frame)?,
        Instruction::Dup_x1 => handle_dup_x1(frame)?,
        Instruction::Dup_x2 => handle_dup_x2(frame)?,
        Instruction::Dup2 => handle_dup2(frame)?,
        Instruction::Dup2_x1 => handle_dup2_x1(frame)?,
        Instruction::Dup2_x2 => handle_dup2_x2(frame)?,
        Instruction::Swap => handle_swap(frame)?,
        _ => return Ok(false),
    }

    Ok(true)
}
