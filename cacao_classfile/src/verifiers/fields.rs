use crate::class_file::ClassFile;
use crate::constant::Constant;
use crate::field::Field;
use crate::verifiers::attributes::AttributeContext;
use crate::verifiers::error::Result;
use crate::verifiers::error::VerifyError::{
    InvalidConstantPoolIndex, InvalidConstantPoolIndexType,
};
use crate::verifiers::{attributes, field_access_flags};

/// Verify the `ClassFile` fields.
///
/// # Errors
/// Returns `VerificationError` if the fields are invalid.
pub(crate) fn verify(class_file: &ClassFile) -> Result<()> {
    for field in &class_file.fields {
        field_access_flags::verify(class_file, field)?;
        verify_name_index(class_file, field)?;
        verify_descriptor_index(class_file, field)?;
        attributes::verify(
            class_file,
            &field.attributes,
            AttributeContext::Field(field),
        )?;
    }
    Ok(())
}

/// Verify the field `name_index`.
///
/// # Errors
///
/// Returns `InvalidConstantPoolIndex` or `InvalidConstantPoolIndexType` if the `name_index` is
/// invalid.
fn verify_name_index(class_file: &ClassFile, field: &Field) -> Result<()> {
    let name_index = field.name_index;
    match class_file.constant_pool.get(name_index) {
        Some(Constant::Utf8 { .. }) => {} // valid constant
        None => return Err(InvalidConstantPoolIndex(name_index)),
        _ => return Err(InvalidConstantPoolIndexType(name_index)),
    }
    Ok(())
}

/// Verify the field `descriptor_index`.
///
/// # Errors
///
/// Returns `InvalidConstantPoolIndex` or `InvalidConstantPoolIndexType` if the `descriptor_index`
/// is invalid.
fn verify_descriptor_index(class_file: &ClassFile, field: &Field) -> Result<()> {
    let descriptor_index = field.descriptor_index;
    match class_file.constant_pool.get(descriptor_index) {
        Some(Constant::Utf8 { .. }) => {
            // valid constant
        }
        None => return Err(InvalidConstantPoolIndex(descriptor_index)),
        _ => return Err(InvalidConstantPoolIndexType(descriptor_index)),
    }
    Ok(())
}
