use crate::Error::{
    BootstrapMethodsNotDefined, InvalidBootstrapMethodIndex, InvalidVersionConstant,
};
use crate::Error::{InvalidConstantPoolIndex, InvalidConstantPoolIndexType};
use crate::Result;
use crate::attributes::Attribute;
use crate::class_file::ClassFile;
use crate::constant::Constant;
use crate::reference_kind::ReferenceKind;
use crate::version::Version;

const JAVA_8: Version = Version::Java8 { minor: 0 };
const JAVA_9: Version = Version::Java9 { minor: 0 };

/// Verify the `ClassFile` `ConstantPool`.
pub fn verify(class_file: &ClassFile) -> Result<()> {
    verify_version_constants(class_file)?;
    verify_constant_indexes(class_file)?;
    Ok(())
}

/// Verify the `ClassFile` `ConstantPool` for version specific constants.
fn verify_version_constants(class_file: &ClassFile) -> Result<()> {
    for constant in &class_file.constant_pool {
        if !constant.valid_for_version(&class_file.version) {
            let tag = constant.tag();
            return Err(InvalidVersionConstant(tag));
        }
    }

    Ok(())
}

/// Verify the `ClassFile` `ConstantPool` indexes.
#[expect(clippy::too_many_lines)]
fn verify_constant_indexes(class_file: &ClassFile) -> Result<()> {
    let constant_pool = &class_file.constant_pool;
    for (index, constant) in constant_pool.iter().enumerate() {
        let index = u16::try_from(index)?;
        match constant {
            Constant::Class(name_index)
            | Constant::Module(name_index)
            | Constant::Package(name_index) => {
                match constant_pool.get(*name_index) {
                    Some(Constant::Utf8 { .. }) => {} // valid index
                    None => return Err(InvalidConstantPoolIndex(index)),
                    _ => return Err(InvalidConstantPoolIndexType(index)),
                }
            }
            Constant::String(string_index) => {
                match constant_pool.get(*string_index) {
                    Some(Constant::Utf8 { .. }) => {} // valid index
                    None => return Err(InvalidConstantPoolIndex(index)),
                    _ => return Err(InvalidConstantPoolIndexType(index)),
                }
            }
            Constant::FieldRef {
                class_index,
                name_and_type_index,
            }
            | Constant::MethodRef {
                class_index,
                name_and_type_index,
            }
            | Constant::InterfaceMethodRef {
                class_index,
                name_and_type_index,
            } => {
                match constant_pool.get(*class_index) {
                    Some(Constant::Class { .. }) => {} // valid index
                    None => return Err(InvalidConstantPoolIndex(index)),
                    _ => return Err(InvalidConstantPoolIndexType(index)),
                }
                match constant_pool.get(*name_and_type_index) {
                    Some(Constant::NameAndType { .. }) => {} // valid index
                    None => return Err(InvalidConstantPoolIndex(index)),
                    _ => return Err(InvalidConstantPoolIndexType(index)),
                }
            }
            Constant::NameAndType {
                name_index,
                descriptor_index,
            } => {
                match constant_pool.get(*name_index) {
                    Some(Constant::Utf8 { .. }) => {} // valid index
                    None => return Err(InvalidConstantPoolIndex(index)),
                    _ => return Err(InvalidConstantPoolIndexType(index)),
                }
                match constant_pool.get(*descriptor_index) {
                    Some(Constant::Utf8 { .. }) => {} // valid index
                    None => return Err(InvalidConstantPoolIndex(index)),
                    _ => return Err(InvalidConstantPoolIndexType(index)),
                }
            }
            Constant::MethodHandle {
                reference_kind,
                reference_index,
            } => match reference_kind {
                ReferenceKind::GetField
                | ReferenceKind::GetStatic
                | ReferenceKind::PutField
                | ReferenceKind::PutStatic => {
                    match constant_pool.get(*reference_index) {
                        Some(Constant::FieldRef { .. }) => {} // valid index
                        None => return Err(InvalidConstantPoolIndex(index)),
                        _ => return Err(InvalidConstantPoolIndexType(index)),
                    }
                }
                ReferenceKind::InvokeVirtual | ReferenceKind::NewInvokeSpecial => {
                    match constant_pool.get(*reference_index) {
                        Some(Constant::MethodRef { .. }) => {} // valid index
                        None => return Err(InvalidConstantPoolIndex(index)),
                        _ => return Err(InvalidConstantPoolIndexType(index)),
                    }
                }
                ReferenceKind::InvokeStatic | ReferenceKind::InvokeSpecial => {
                    match constant_pool.get(*reference_index) {
                        Some(Constant::MethodRef { .. }) => {} // valid index
                        Some(Constant::InterfaceMethodRef { .. })
                            if class_file.version >= JAVA_8 => {} // valid index
                        None => return Err(InvalidConstantPoolIndex(index)),
                        _ => return Err(InvalidConstantPoolIndexType(index)),
                    }
                }
                ReferenceKind::InvokeInterface => {
                    match constant_pool.get(*reference_index) {
                        Some(Constant::InterfaceMethodRef { .. }) => {} // valid index
                        None => return Err(InvalidConstantPoolIndex(index)),
                        _ => return Err(InvalidConstantPoolIndexType(index)),
                    }
                }
            },
            Constant::MethodType(descriptor_index) => {
                match constant_pool.get(*descriptor_index) {
                    Some(Constant::Utf8 { .. }) => {} // valid index
                    None => return Err(InvalidConstantPoolIndex(index)),
                    _ => return Err(InvalidConstantPoolIndexType(index)),
                }
            }
            Constant::Dynamic {
                bootstrap_method_attr_index,
                name_and_type_index,
            }
            | Constant::InvokeDynamic {
                bootstrap_method_attr_index,
                name_and_type_index,
            } => {
                let bootstrap_methods = class_file
                    .attributes
                    .iter()
                    .find(|attribute| matches!(attribute, Attribute::BootstrapMethods { .. }));

                match bootstrap_methods {
                    Some(Attribute::BootstrapMethods { methods, .. }) => {
                        if *bootstrap_method_attr_index as usize >= methods.len() {
                            return Err(InvalidBootstrapMethodIndex(
                                *bootstrap_method_attr_index as usize,
                            ));
                        }
                    }
                    _ => return Err(BootstrapMethodsNotDefined),
                }

                match constant_pool.get(*name_and_type_index) {
                    Some(Constant::NameAndType { .. }) => {} // valid index
                    None => return Err(InvalidConstantPoolIndex(index)),
                    _ => return Err(InvalidConstantPoolIndexType(index)),
                }
            }
            _ => {}
        }
    }

    Ok(())
}
