//! Record attribute verification according to [JVMS ยง4.7.30](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-4.html#jvms-4.7.30).
//!
//! This module validates the Record attribute which describes the components
//! of a record class. Record classes were introduced in Java 16.

use crate::attributes::Attribute;
use crate::class_file::ClassFile;
use crate::constant::Constant;
use crate::verifiers::error::Result;
use crate::verifiers::error::VerifyError::{
    InvalidConstantPoolIndex, InvalidConstantPoolIndexType, VerificationError,
};

/// Verify the `Record` attribute for a class.
///
/// According to [JVMS ยง4.7.30](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-4.html#jvms-4.7.30):
/// - The `Record` attribute may appear at most once.
/// - It must only appear in a class that has `ACC_FINAL` set (records are implicitly final).
/// - Each component's `name_index` must be a valid `CONSTANT_Utf8_info`.
/// - Each component's `descriptor_index` must be a valid `CONSTANT_Utf8_info`.
/// - Component names must be unique.
/// - Component descriptors must be valid field descriptors.
///
/// # Errors
/// Returns an error if the Record attribute is invalid.
pub(crate) fn verify(class_file: &ClassFile) -> Result<()> {
    let mut has_record = false;

    for attribute in &class_file.attributes {
        if let Attribute::Record { records, .. } = attribute {
            if has_record {
                return Err(VerificationError {
                    context: "Record".to_string(),
                    message: "Multiple Record attributes are not allowed".to_string(),
                });
            }
            has_record = true;

            // Verify each record component
            let mut component_names = std::collections::HashSet::new();

            for (i, record_component) in records.iter().enumerate() {
                // Verify name_index points to a valid CONSTANT_Utf8_info
                let component_name = match class_file.constant_pool.get(record_component.name_index)
                {
                    Some(Constant::Utf8(name)) => name.clone(),
                    Some(_) => {
                        return Err(InvalidConstantPoolIndexType(record_component.name_index));
                    }
                    None => return Err(InvalidConstantPoolIndex(record_component.name_index)),
                };

                // Verify descriptor_index points to a valid CONSTANT_Utf8_info
                let descriptor = match class_file
                    .constant_pool
                    .get(record_component.descriptor_index)
                {
                    Some(Constant::Utf8(desc)) => desc.clone(),
                    Some(_) => {
                        return Err(InvalidConstantPoolIndexType(
                            record_component.descriptor_index,
                        ));
                    }
                    None => {
                        return Err(InvalidConstantPoolIndex(record_component.descriptor_index));
                    }
                };

                // Validate the descriptor is a valid field descriptor
                if !is_valid_field_descriptor(&descriptor) {
                    return Err(VerificationError {
                        context: "Record".to_string(),
                        message: format!(
                            "Invalid field descriptor '{descriptor}' for record component '{component_name}' at index {i}"
                        ),
                    });
                }

                // Check for duplicate component names
                if !component_names.insert(component_name.clone()) {
                    return Err(VerificationError {
                        context: "Record".to_string(),
                        message: format!(
                            "Duplicate record component name '{component_name}' at index {i}"
                        ),
                    });
                }

                // Recursively verify component attributes
                verify_component_attributes(class_file, &record_component.attributes, i)?;
            }
        }
    }

    Ok(())
}

/// Verify attributes of a record component.
fn verify_component_attributes(
    class_file: &ClassFile,
    attributes: &[Attribute],
    component_index: usize,
) -> Result<()> {
    for attribute in attributes {
        match attribute {
            // Signature attribute is allowed on record components
            Attribute::Signature {
                signature_index, ..
            } => match class_file.constant_pool.get(*signature_index) {
                Some(Constant::Utf8(_)) => {}
                Some(_) => return Err(InvalidConstantPoolIndexType(*signature_index)),
                None => return Err(InvalidConstantPoolIndex(*signature_index)),
            },
            // RuntimeVisibleAnnotations, RuntimeInvisibleAnnotations,
            // RuntimeVisibleTypeAnnotations, RuntimeInvisibleTypeAnnotations,
            // and Unknown attributes are allowed on record components per JVMS
            Attribute::RuntimeVisibleAnnotations { .. }
            | Attribute::RuntimeInvisibleAnnotations { .. }
            | Attribute::RuntimeVisibleTypeAnnotations { .. }
            | Attribute::RuntimeInvisibleTypeAnnotations { .. }
            | Attribute::Unknown { .. } => {}
            // Other attributes are not valid on record components
            other => {
                return Err(VerificationError {
                    context: "Record".to_string(),
                    message: format!(
                        "Invalid attribute '{}' on record component at index {component_index}",
                        other.name()
                    ),
                });
            }
        }
    }
    Ok(())
}

/// Check if a string is a valid field descriptor according to [JVMS ยง4.3.2](https://docs.oracle.com/javase/specs/jvms/se25/html/jvms-4.html#jvms-4.3.2).
fn is_valid_field_descriptor(descriptor: &str) -> bool {
    if descriptor.is_empty() {
        return false;
    }

    let mut chars = descriptor.chars().peekable();
    parse_field_type(&mut chars) && chars.peek().is_none()
}

/// Parse a field type from a character iterator.
fn parse_field_type(chars: &mut std::iter::Peekable<std::str::Chars>) -> bool {
    match chars.next() {
        Some('B' | 'C' | 'D' | 'F' | 'I' | 'J' | 'S' | 'Z') => true,
        Some('L') => {
            // Object type: L<classname>;
            let mut found_semicolon = false;
            let mut class_name_len = 0;
            for c in chars.by_ref() {
                if c == ';' {
                    found_semicolon = true;
                    break;
                }
                // Valid class name characters
                if !c.is_alphanumeric() && c != '/' && c != '_' && c != '$' {
                    return false;
                }
                class_name_len += 1;
            }
            // Class name must not be empty
            found_semicolon && class_name_len > 0
        }
        Some('[') => {
            // Array type
            parse_field_type(chars)
        }
        _ => false,
    }
}
