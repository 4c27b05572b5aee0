//! # Reference Instruction Handlers
//!
//! Handles verification of reference-related instructions:
//! - Object creation: `new`, `newarray`, `anewarray`, `multianewarray`
//! - Field access: `getfield`, `putfield`, `getstatic`, `putstatic`
//! - Method invocation: `invokevirtual`, `invokespecial`, `invokestatic`, `invokeinterface`, `invokedynamic`
//! - Type checks: `checkcast`, `instanceof`
//! - Array operations: `arraylength`
//!
//! # References
//!
//! - [JVMS §6.5 - Instructions](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5)

use std::sync::Arc;

use crate::FieldType;
use crate::attributes::ArrayType;
use crate::class_file::ClassFile;
use crate::verifiers::bytecode::frame::Frame;
use crate::verifiers::bytecode::type_system::VerificationType;
use crate::verifiers::context::VerificationContext;
use crate::verifiers::error::{Result, VerifyError};

/// Context for resolving constant pool entries.
#[derive(Debug)]
pub struct ConstantPoolResolver<'a> {
    class_file: &'a ClassFile,
}

impl<'a> ConstantPoolResolver<'a> {
    /// Creates a new resolver.
    #[must_use]
    pub fn new(class_file: &'a ClassFile) -> Self {
        Self { class_file }
    }

    /// Resolves a field reference.
    ///
    /// Returns (`class_name`, `field_name`, `field_descriptor`).
    ///
    /// # Errors
    ///
    /// Returns an error if the constant pool reference is invalid.
    pub fn resolve_field_ref(&self, index: u16) -> Result<(String, String, String)> {
        let (class_index, name_and_type_index) = self
            .class_file
            .constant_pool
            .try_get_field_ref(index)
            .map_err(|e| VerifyError::ClassFormatError(e.to_string()))?;

        let class_name = self
            .class_file
            .constant_pool
            .try_get_class(*class_index)
            .map_err(|e| VerifyError::ClassFormatError(e.to_string()))?;

        let (name_index, descriptor_index) = self
            .class_file
            .constant_pool
            .try_get_name_and_type(*name_and_type_index)
            .map_err(|e| VerifyError::ClassFormatError(e.to_string()))?;

        let name = self
            .class_file
            .constant_pool
            .try_get_utf8(*name_index)
            .map_err(|e| VerifyError::ClassFormatError(e.to_string()))?;

        let descriptor = self
            .class_file
            .constant_pool
            .try_get_utf8(*descriptor_index)
            .map_err(|e| VerifyError::ClassFormatError(e.to_string()))?;

        Ok((
            class_name.to_string(),
            name.to_string(),
            descriptor.to_string(),
        ))
    }

    /// Resolves a method reference.
    ///
    /// Returns (`class_name`, `method_name`, `method_descriptor`).
    ///
    /// # Errors
    ///
    /// Returns an error if the constant pool reference is invalid.
    pub fn resolve_method_ref(&self, index: u16) -> Result<(String, String, String)> {
        // Try Methodref first, then InterfaceMethodref
        let (class_index, name_and_type_index) = self
            .class_file
            .constant_pool
            .try_get_method_ref(index)
            .or_else(|_| {
                self.class_file
                    .constant_pool
                    .try_get_interface_method_ref(index)
            })
            .map_err(|e| VerifyError::ClassFormatError(e.to_string()))?;

        let class_name = self
            .class_file
            .constant_pool
            .try_get_class(*class_index)
            .map_err(|e| VerifyError::ClassFormatError(e.to_string()))?;

        let (name_index, descriptor_index) = self
            .class_file
            .constant_pool
            .try_get_name_and_type(*name_and_type_index)
            .map_err(|e| VerifyError::ClassFormatError(e.to_string()))?;

        let name = self
            .class_file
            .constant_pool
            .try_get_utf8(*name_index)
            .map_err(|e| VerifyError::ClassFormatError(e.to_string()))?;

        let descriptor = self
            .class_file
            .constant_pool
            .try_get_utf8(*descriptor_index)
            .map_err(|e| VerifyError::ClassFormatError(e.to_string()))?;

        Ok((
            class_name.to_string(),
            name.to_string(),
            descriptor.to_string(),
        ))
    }

    /// Resolves a class reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the constant pool reference is invalid.
    pub fn resolve_class(&self, index: u16) -> Result<String> {
        self.class_file
            .constant_pool
            .try_get_class(index)
            .map(std::string::ToString::to_string)
            .map_err(|e| VerifyError::ClassFormatError(e.to_string()))
    }

    /// Resolves an `InvokeDynamic` reference.
    ///
    /// Returns the method descriptor.
    ///
    /// # Errors
    ///
    /// Returns an error if the constant pool reference is invalid.
    pub fn resolve_invoke_dynamic(&self, index: u16) -> Result<String> {
        let (_bootstrap_index, name_and_type_index) = self
            .class_file
            .constant_pool
            .try_get_invoke_dynamic(index)
            .map_err(|e| VerifyError::ClassFormatError(e.to_string()))?;

        let (_, descriptor_index) = self
            .class_file
            .constant_pool
            .try_get_name_and_type(*name_and_type_index)
            .map_err(|e| VerifyError::ClassFormatError(e.to_string()))?;

        let descriptor = self
            .class_file
            .constant_pool
            .try_get_utf8(*descriptor_index)
            .map_err(|e| VerifyError::ClassFormatError(e.to_string()))?;

        Ok(descriptor.to_string())
    }
}

/// Handles `new` - create new object.
///
/// Stack: ... → ..., objectref
///
/// # Errors
///
/// Returns an error if stack overflow occurs.
///
/// # References
///
/// - [JVMS §6.5.new](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.new)
pub fn handle_new(frame: &mut Frame, offset: u16, _class_name: &str) -> Result<()> {
    // Push an uninitialized reference
    frame.push(VerificationType::Uninitialized(offset))
}

/// Handles `newarray` - create new primitive array.
///
/// Stack: ..., count → ..., arrayref
///
/// # Errors
///
/// Returns an error if the count is not an `int`.
///
/// # References
///
/// - [JVMS §6.5.newarray](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.newarray)
pub fn handle_newarray(frame: &mut Frame, atype: &ArrayType) -> Result<()> {
    // Pop count (must be int)
    let count = frame.pop()?;
    if count != VerificationType::Integer {
        return Err(VerifyError::VerifyError(format!(
            "newarray: expected int count, got {count}"
        )));
    }

    // Determine component type
    let component = match atype {
        ArrayType::Boolean
        | ArrayType::Byte
        | ArrayType::Char
        | ArrayType::Short
        | ArrayType::Int => VerificationType::Integer,
        ArrayType::Float => VerificationType::Float,
        ArrayType::Long => VerificationType::Long,
        ArrayType::Double => VerificationType::Double,
    };

    frame.push(VerificationType::Array(Box::new(component)))
}

/// Handles `anewarray` - create new reference array.
///
/// Stack: ..., count → ..., arrayref
///
/// # Errors
///
/// Returns an error if the count is not an `int`.
///
/// # References
///
/// - [JVMS §6.5.anewarray](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.anewarray)
pub fn handle_anewarray(frame: &mut Frame, class_name: &str) -> Result<()> {
    let count = frame.pop()?;
    if count != VerificationType::Integer {
        return Err(VerifyError::VerifyError(format!(
            "anewarray: expected int count, got {count}"
        )));
    }

    // The component type is the referenced class
    let component = if class_name.starts_with('[') {
        // Creating an array of arrays
        parse_type_descriptor(class_name)?
    } else {
        VerificationType::Object(Arc::from(class_name))
    };

    frame.push(VerificationType::Array(Box::new(component)))
}

/// Handles `multianewarray` - create new multidimensional array.
///
/// Stack: ..., count1, [count2, ...] → ..., arrayref
///
/// # Errors
///
/// Returns an error if the counts are not integers.
///
/// # References
///
/// - [JVMS §6.5.multianewarray](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.multianewarray)
pub fn handle_multianewarray(frame: &mut Frame, class_name: &str, dimensions: u8) -> Result<()> {
    // Pop 'dimensions' int values
    for _ in 0..dimensions {
        let count = frame.pop()?;
        if count != VerificationType::Integer {
            return Err(VerifyError::VerifyError(format!(
                "multianewarray: expected int count, got {count}"
            )));
        }
    }

    // Parse the array type
    let array_type = parse_type_descriptor(class_name)?;
    frame.push(array_type)
}

/// Handles `getfield` - get instance field.
///
/// Stack: ..., objectref → ..., value
///
/// # Errors
///
/// Returns an error if the object type is incorrect.
///
/// # References
///
/// - [JVMS §6.5.getfield](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.getfield)
pub fn handle_getfield<C: VerificationContext>(
    frame: &mut Frame,
    class_name: &str,
    field_descriptor: &str,
    context: &C,
) -> Result<()> {
    let objectref = frame.pop()?;

    // Verify objectref is assignable to the field's class
    if !objectref.is_null() {
        let expected = VerificationType::Object(Arc::from(class_name));
        if !objectref.is_assignable_to(&expected, context)? {
            return Err(VerifyError::VerifyError(format!(
                "getfield: {objectref} is not assignable to {class_name}"
            )));
        }
    }

    // Push the field type
    let field_type = parse_type_descriptor(field_descriptor)?;
    if field_type.is_category2() {
        frame.push(field_type)?;
        frame.push(VerificationType::Top)
    } else {
        frame.push(field_type)
    }
}

/// Handles `putfield` - set instance field.
///
/// Stack: ..., objectref, value → ...
///
/// # Errors
///
/// Returns an error if the types are incorrect.
///
/// # References
///
/// - [JVMS §6.5.putfield](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.putfield)
pub fn handle_putfield<C: VerificationContext>(
    frame: &mut Frame,
    class_name: &str,
    field_descriptor: &str,
    context: &C,
) -> Result<()> {
    let field_type = parse_type_descriptor(field_descriptor)?;

    // Pop value
    let value = if field_type.is_category2() {
        frame.pop_category2()?
    } else {
        frame.pop()?
    };

    // Verify value is assignable to field type
    if !value.is_assignable_to(&field_type, context)? {
        return Err(VerifyError::VerifyError(format!(
            "putfield: {value} is not assignable to {field_type}"
        )));
    }

    // Pop objectref
    let objectref = frame.pop()?;

    // For putfield on uninitialized 'this', the objectref can be UninitializedThis
    // when setting fields in a constructor before calling super()
    if !matches!(
        objectref,
        VerificationType::UninitializedThis | VerificationType::Uninitialized(_)
    ) && !objectref.is_null()
    {
        let expected = VerificationType::Object(Arc::from(class_name));
        if !objectref.is_assignable_to(&expected, context)? {
            return Err(VerifyError::VerifyError(format!(
                "putfield: {objectref} is not assignable to {class_name}"
            )));
        }
    }

    Ok(())
}

/// Handles `getstatic` - get static field.
///
/// Stack: ... → ..., value
///
/// # Errors
///
/// Returns an error if the descriptor is invalid.
///
/// # References
///
/// - [JVMS §6.5.getstatic](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.getstatic)
pub fn handle_getstatic(frame: &mut Frame, field_descriptor: &str) -> Result<()> {
    let field_type = parse_type_descriptor(field_descriptor)?;
    if field_type.is_category2() {
        frame.push(field_type)?;
        frame.push(VerificationType::Top)
    } else {
        frame.push(field_type)
    }
}

/// Handles `putstatic` - set static field.
///
/// Stack: ..., value → ...
///
/// # Errors
///
/// Returns an error if the value type is incorrect.
///
/// # References
///
/// - [JVMS §6.5.putstatic](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.putstatic)
pub fn handle_putstatic<C: VerificationContext>(
    frame: &mut Frame,
    field_descriptor: &str,
    context: &C,
) -> Result<()> {
    let field_type = parse_type_descriptor(field_descriptor)?;

    let value = if field_type.is_category2() {
        frame.pop_category2()?
    } else {
        frame.pop()?
    };

    if !value.is_assignable_to(&field_type, context)? {
        return Err(VerifyError::VerifyError(format!(
            "putstatic: {value} is not assignable to {field_type}"
        )));
    }

    Ok(())
}

/// Handles method invocation instructions.
///
/// Pops arguments and objectref (for non-static), pushes return value.
///
/// # Errors
///
/// Returns an error if the argument types are incorrect.
pub fn handle_invoke<C: VerificationContext>(
    frame: &mut Frame,
    class_name: &str,
    method_name: &str,
    descriptor: &str,
    is_static: bool,
    context: &C,
) -> Result<Option<VerificationType>> {
    let (params, return_type) = FieldType::parse_method_descriptor(descriptor)
        .map_err(|e| VerifyError::ClassFormatError(e.to_string()))?;

    // Pop arguments in reverse order
    for param in params.iter().rev() {
        let param_type = VerificationType::from_field_type(param);
        let value = if param_type.is_category2() {
            frame.pop_category2()?
        } else {
            frame.pop()?
        };

        if !value.is_assignable_to(&param_type, context)? {
            return Err(VerifyError::VerifyError(format!(
                "invoke: argument {value} is not assignable to {param_type}"
            )));
        }
    }

    // For non-static methods, pop objectref
    if !is_static {
        let objectref = frame.pop()?;

        if method_name != "<init>" {
            // Regular method call
            let expected = VerificationType::Object(Arc::from(class_name));
            if !objectref.is_null() && !objectref.is_assignable_to(&expected, context)? {
                return Err(VerifyError::VerifyError(format!(
                    "invoke: {objectref} is not assignable to {class_name}"
                )));
            }
        }
        // For <init>, objectref handling is done by the caller (handle_invokespecial)
    }

    // Push return type
    if let Some(ret) = return_type {
        let ret_type = VerificationType::from_field_type(&ret);
        if ret_type.is_category2() {
            frame.push(ret_type.clone())?;
            frame.push(VerificationType::Top)?;
        } else {
            frame.push(ret_type.clone())?;
        }
        Ok(Some(ret_type))
    } else {
        Ok(None)
    }
}

/// Handles `invokespecial` including constructor calls.
///
/// # Errors
///
/// Returns an error if the argument types are incorrect.
pub fn handle_invokespecial<C: VerificationContext>(
    frame: &mut Frame,
    class_name: &str,
    method_name: &str,
    descriptor: &str,
    context: &C,
) -> Result<()> {
    let (params, return_type) = FieldType::parse_method_descriptor(descriptor)
        .map_err(|e| VerifyError::ClassFormatError(e.to_string()))?;

    // Pop arguments in reverse order
    for param in params.iter().rev() {
        let param_type = VerificationType::from_field_type(param);
        let value = if param_type.is_category2() {
            frame.pop_category2()?
        } else {
            frame.pop()?
        };

        if !value.is_assignable_to(&param_type, context)? {
            return Err(VerifyError::VerifyError(format!(
                "invokespecial: argument {value} is not assignable to {param_type}"
            )));
        }
    }

    // Pop objectref
    let objectref = frame.pop()?;

    if method_name == "<init>" {
        // Constructor call - initialize the object
        match &objectref {
            VerificationType::Uninitialized(offset) => {
                let initialized = VerificationType::Object(Arc::from(class_name));
                frame.initialize_object(&VerificationType::Uninitialized(*offset), &initialized);
            }
            VerificationType::UninitializedThis => {
                let initialized = VerificationType::Object(Arc::from(class_name));
                frame.initialize_object(&VerificationType::UninitializedThis, &initialized);
            }
            _ => {
                return Err(VerifyError::VerifyError(format!(
                    "invokespecial <init>: expected uninitialized object, got {objectref}"
                )));
            }
        }
    } else {
        // Non-constructor special method
        let expected = VerificationType::Object(Arc::from(class_name));
        if !objectref.is_null() && !objectref.is_assignable_to(&expected, context)? {
            return Err(VerifyError::VerifyError(format!(
                "invokespecial: {objectref} is not assignable to {class_name}"
            )));
        }
    }

    // Push return type
    if let Some(ret) = return_type {
        let ret_type = VerificationType::from_field_type(&ret);
        if ret_type.is_category2() {
            frame.push(ret_type)?;
            frame.push(VerificationType::Top)?;
        } else {
            frame.push(ret_type)?;
        }
    }

    Ok(())
}

/// Handles `invokedynamic`.
///
/// # Errors
///
/// Returns an error if the argument types are incorrect.
///
/// # References
///
/// - [JVMS §6.5.invokedynamic](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.invokedynamic)
pub fn handle_invokedynamic<C: VerificationContext>(
    frame: &mut Frame,
    descriptor: &str,
    context: &C,
) -> Result<()> {
    let (params, return_type) = FieldType::parse_method_descriptor(descriptor)
        .map_err(|e| VerifyError::ClassFormatError(e.to_string()))?;

    // Pop arguments in reverse order
    for param in params.iter().rev() {
        let param_type = VerificationType::from_field_type(param);
        let value = if param_type.is_category2() {
            frame.pop_category2()?
        } else {
            frame.pop()?
        };

        if !value.is_assignable_to(&param_type, context)? {
            return Err(VerifyError::VerifyError(format!(
                "invokedynamic: argument {value} is not assignable to {param_type}"
            )));
        }
    }

    // Push return type
    if let Some(ret) = return_type {
        let ret_type = VerificationType::from_field_type(&ret);
        if ret_type.is_category2() {
            frame.push(ret_type)?;
            frame.push(VerificationType::Top)?;
        } else {
            frame.push(ret_type)?;
        }
    }

    Ok(())
}

/// Handles `checkcast` - check object type.
///
/// Stack: ..., objectref → ..., objectref
///
/// # Errors
///
/// Returns an error if the operand is not a reference type.
///
/// # References
///
/// - [JVMS §6.5.checkcast](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.checkcast)
pub fn handle_checkcast(frame: &mut Frame, class_name: &str) -> Result<()> {
    let objectref = frame.pop()?;

    // Must be a reference type
    if !objectref.is_reference() {
        return Err(VerifyError::VerifyError(format!(
            "checkcast: expected reference, got {objectref}"
        )));
    }

    // Push the cast type (the reference is now known to be this type or null)
    let cast_type = if class_name.starts_with('[') {
        parse_type_descriptor(class_name)?
    } else {
        VerificationType::Object(Arc::from(class_name))
    };

    frame.push(cast_type)
}

/// Handles `instanceof` - check object type.
///
/// Stack: ..., objectref → ..., result (int)
///
/// # Errors
///
/// Returns an error if the operand is not a reference type.
///
/// # References
///
/// - [JVMS §6.5.instanceof](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.instanceof)
pub fn handle_instanceof(frame: &mut Frame) -> Result<()> {
    let objectref = frame.pop()?;

    if !objectref.is_reference() {
        return Err(VerifyError::VerifyError(format!(
            "instanceof: expected reference, got {objectref}"
        )));
    }

    // Result is int (0 or 1)
    frame.push(VerificationType::Integer)
}

/// Handles `arraylength` - get array length.
///
/// Stack: ..., arrayref → ..., length (int)
///
/// # Errors
///
/// Returns an error if the operand is not an array type.
///
/// # References
///
/// - [JVMS §6.5.arraylength](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-6.html#jvms-6.5.arraylength)
pub fn handle_arraylength(frame: &mut Frame) -> Result<()> {
    let arrayref = frame.pop()?;

    // Must be an array type or null
    if !matches!(
        arrayref,
        VerificationType::Array(_) | VerificationType::Null
    ) {
        // Also accept Object that looks like an array (legacy representation)
        if let VerificationType::Object(name) = &arrayref {
            if !name.starts_with('[') {
                return Err(VerifyError::VerifyError(format!(
                    "arraylength: expected array, got {arrayref}"
                )));
            }
        } else {
            return Err(VerifyError::VerifyError(format!(
                "arraylength: expected array, got {arrayref}"
            )));
        }
    }

    frame.push(VerificationType::Integer)
}

/// Parses a type descriptor into a `VerificationType`.
fn parse_type_descriptor(descriptor: &str) -> Result<VerificationType> {
    let field_type =
        FieldType::parse(descriptor).map_err(|e| VerifyError::ClassFormatError(e.to_string()))?;
    Ok(VerificationType::from_field_type(&field_type))
}
