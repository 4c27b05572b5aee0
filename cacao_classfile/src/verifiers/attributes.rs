use crate::attributes::{
    Annotation, AnnotationElement, Attribute, BootstrapMethod, ExceptionTableEntry, Exports,
    InnerClass, Instruction, LineNumber, LocalVariableTable, LocalVariableTypeTable,
    MethodParameter, Opens, ParameterAnnotation, Provides, Record, Requires, TypeAnnotation,
};
use crate::class_file::ClassFile;
use crate::constant::Constant;
use crate::field::Field;
use crate::method::Method;
use crate::verifiers::code;
use crate::verifiers::error::Result;
use crate::verifiers::error::VerifyError::{
    InvalidConstantPoolIndex, InvalidConstantPoolIndexType, VerificationError,
};

/// The context in which attributes are being verified.
#[derive(Clone, Copy, Debug)]
pub(crate) enum AttributeContext<'a> {
    Class,
    Field(&'a Field),
    Method(&'a Method),
    Code(&'a Method, u16),
    RecordComponent,
}

/// Verify the attributes.
///
/// # Errors
/// Returns `VerificationError` if the attributes are invalid.
#[expect(clippy::too_many_lines)]
pub(crate) fn verify(
    class_file: &ClassFile,
    attributes: &[Attribute],
    context: AttributeContext,
) -> Result<()> {
    for attribute in attributes {
        match attribute {
            Attribute::ConstantValue {
                constant_value_index,
                ..
            } => verify_constant_value(class_file, context, *constant_value_index)?,
            Attribute::Code {
                max_stack,
                max_locals,
                code,
                attributes,
                exception_table,
                ..
            } => verify_code(
                class_file,
                context,
                *max_stack,
                *max_locals,
                code,
                exception_table,
                attributes,
            )?,
            Attribute::StackMapTable { .. } => verify_stack_map_table(context)?,
            Attribute::Exceptions {
                exception_indexes, ..
            } => verify_exceptions(class_file, context, exception_indexes)?,
            Attribute::InnerClasses { classes, .. } => {
                verify_inner_classes(class_file, context, classes)?;
            }
            Attribute::EnclosingMethod {
                class_index,
                method_index,
                ..
            } => verify_enclosing_method(class_file, context, *class_index, *method_index)?,
            Attribute::Synthetic { .. } => verify_synthetic(context)?,
            Attribute::Signature {
                signature_index, ..
            } => verify_signature(class_file, context, *signature_index)?,
            Attribute::SourceFile {
                source_file_index, ..
            } => verify_source_file(class_file, context, *source_file_index)?,
            Attribute::SourceDebugExtension { .. } => verify_source_debug_extension(context)?,
            Attribute::LineNumberTable { line_numbers, .. } => {
                verify_line_number_table(context, line_numbers)?;
            }
            Attribute::LocalVariableTable { variables, .. } => {
                verify_local_variable_table(class_file, context, variables)?;
            }
            Attribute::LocalVariableTypeTable { variable_types, .. } => {
                verify_local_variable_type_table(class_file, context, variable_types)?;
            }
            Attribute::Deprecated { .. } => verify_deprecated(context)?,
            Attribute::RuntimeVisibleAnnotations { annotations, .. }
            | Attribute::RuntimeInvisibleAnnotations { annotations, .. } => {
                verify_annotations(class_file, annotations)?;
            }
            Attribute::RuntimeVisibleParameterAnnotations {
                parameter_annotations,
                ..
            }
            | Attribute::RuntimeInvisibleParameterAnnotations {
                parameter_annotations,
                ..
            } => verify_parameter_annotations(class_file, context, parameter_annotations)?,
            Attribute::RuntimeVisibleTypeAnnotations {
                type_annotations, ..
            }
            | Attribute::RuntimeInvisibleTypeAnnotations {
                type_annotations, ..
            } => verify_type_annotations(class_file, context, type_annotations)?,
            Attribute::AnnotationDefault { element, .. } => {
                verify_annotation_default(class_file, context, element)?;
            }
            Attribute::BootstrapMethods { methods, .. } => {
                verify_bootstrap_methods(class_file, context, methods)?;
            }
            Attribute::MethodParameters { parameters, .. } => {
                verify_method_parameters(class_file, context, parameters)?;
            }
            Attribute::Module {
                module_name_index,
                version_index,
                requires,
                exports,
                opens,
                uses,
                provides,
                ..
            } => verify_module(
                class_file,
                context,
                *module_name_index,
                *version_index,
                requires,
                exports,
                opens,
                uses,
                provides,
            )?,
            Attribute::ModulePackages {
                package_indexes, ..
            } => verify_module_packages(class_file, context, package_indexes)?,
            Attribute::ModuleMainClass {
                main_class_index, ..
            } => verify_module_main_class(class_file, context, *main_class_index)?,
            Attribute::NestHost {
                host_class_index, ..
            } => verify_nest_host(class_file, context, *host_class_index)?,
            Attribute::NestMembers { class_indexes, .. } => {
                verify_nest_members(class_file, context, class_indexes)?;
            }
            Attribute::Record { records, .. } => verify_record(class_file, context, records)?,
            Attribute::PermittedSubclasses { class_indexes, .. } => {
                verify_permitted_subclasses(class_file, context, class_indexes)?;
            }
            Attribute::Unknown { .. } => {}
        }
    }
    Ok(())
}

fn verify_constant_value(
    class_file: &ClassFile,
    context: AttributeContext,
    constant_value_index: u16,
) -> Result<()> {
    if !matches!(context, AttributeContext::Field(_)) {
        return Err(VerificationError {
            context: "ConstantValue Attribute".to_string(),
            message: "ConstantValue attribute only allowed in Field context".to_string(),
        });
    }
    match class_file.constant_pool.get(constant_value_index) {
        Some(
            Constant::Long(_)
            | Constant::Float(_)
            | Constant::Double(_)
            | Constant::Integer(_)
            | Constant::String(_),
        ) => Ok(()),
        Some(_) => Err(InvalidConstantPoolIndexType(constant_value_index)),
        None => Err(InvalidConstantPoolIndex(constant_value_index)),
    }
}

fn verify_code(
    class_file: &ClassFile,
    context: AttributeContext,
    max_stack: u16,
    max_locals: u16,
    code: &[Instruction],
    exception_table: &[ExceptionTableEntry],
    attributes: &[Attribute],
) -> Result<()> {
    let AttributeContext::Method(method) = context else {
        return Err(VerificationError {
            context: "Code Attribute".to_string(),
            message: "Code attribute only allowed in Method context".to_string(),
        });
    };
    // code::verify returns the code_length which is needed for context
    let code_length = code::verify(
        class_file,
        method,
        max_stack,
        max_locals,
        code,
        exception_table,
        attributes,
    )?;
    // Recursively verify attributes of Code
    verify(
        class_file,
        attributes,
        AttributeContext::Code(method, code_length),
    )
}

fn verify_stack_map_table(context: AttributeContext) -> Result<()> {
    if !matches!(context, AttributeContext::Code(..)) {
        return Err(VerificationError {
            context: "StackMapTable Attribute".to_string(),
            message: "StackMapTable attribute only allowed in Code context".to_string(),
        });
    }
    // Structural verification is handled in code::verify
    Ok(())
}

fn verify_exceptions(
    class_file: &ClassFile,
    context: AttributeContext,
    exception_indexes: &[u16],
) -> Result<()> {
    if !matches!(context, AttributeContext::Method(_)) {
        return Err(VerificationError {
            context: "Exceptions Attribute".to_string(),
            message: "Exceptions attribute only allowed in Method context".to_string(),
        });
    }
    for index in exception_indexes {
        match class_file.constant_pool.get(*index) {
            Some(Constant::Class(_)) => {}
            Some(_) => return Err(InvalidConstantPoolIndexType(*index)),
            None => return Err(InvalidConstantPoolIndex(*index)),
        }
    }
    Ok(())
}

fn verify_inner_classes(
    class_file: &ClassFile,
    context: AttributeContext,
    classes: &[InnerClass],
) -> Result<()> {
    if !matches!(context, AttributeContext::Class) {
        return Err(VerificationError {
            context: "InnerClasses Attribute".to_string(),
            message: "InnerClasses attribute only allowed in ClassFile context".to_string(),
        });
    }
    for class in classes {
        // class_info_index
        match class_file.constant_pool.get(class.class_info_index) {
            Some(Constant::Class(_)) => {}
            Some(_) => {
                return Err(InvalidConstantPoolIndexType(class.class_info_index));
            }
            None => return Err(InvalidConstantPoolIndex(class.class_info_index)),
        }
        // outer_class_info_index (can be 0)
        if class.outer_class_info_index != 0 {
            match class_file.constant_pool.get(class.outer_class_info_index) {
                Some(Constant::Class(_)) => {}
                Some(_) => {
                    return Err(InvalidConstantPoolIndexType(class.outer_class_info_index));
                }
                None => {
                    return Err(InvalidConstantPoolIndex(class.outer_class_info_index));
                }
            }
        }
        // inner_name_index (can be 0)
        if class.name_index != 0 {
            match class_file.constant_pool.get(class.name_index) {
                Some(Constant::Utf8(_)) => {}
                Some(_) => return Err(InvalidConstantPoolIndexType(class.name_index)),
                None => return Err(InvalidConstantPoolIndex(class.name_index)),
            }
        }
    }
    Ok(())
}

fn verify_enclosing_method(
    class_file: &ClassFile,
    context: AttributeContext,
    class_index: u16,
    method_index: u16,
) -> Result<()> {
    if !matches!(context, AttributeContext::Class) {
        return Err(VerificationError {
            context: "EnclosingMethod Attribute".to_string(),
            message: "EnclosingMethod attribute only allowed in ClassFile context".to_string(),
        });
    }
    match class_file.constant_pool.get(class_index) {
        Some(Constant::Class(_)) => {}
        Some(_) => return Err(InvalidConstantPoolIndexType(class_index)),
        None => return Err(InvalidConstantPoolIndex(class_index)),
    }
    if method_index != 0 {
        match class_file.constant_pool.get(method_index) {
            Some(Constant::NameAndType { .. }) => {}
            Some(_) => return Err(InvalidConstantPoolIndexType(method_index)),
            None => return Err(InvalidConstantPoolIndex(method_index)),
        }
    }
    Ok(())
}

fn verify_synthetic(context: AttributeContext) -> Result<()> {
    if matches!(context, AttributeContext::Code(..)) {
        return Err(VerificationError {
            context: "Synthetic Attribute".to_string(),
            message: "Synthetic attribute not allowed in Code context".to_string(),
        });
    }
    Ok(())
}

fn verify_signature(
    class_file: &ClassFile,
    context: AttributeContext,
    signature_index: u16,
) -> Result<()> {
    if matches!(context, AttributeContext::Code(..)) {
        return Err(VerificationError {
            context: "Signature Attribute".to_string(),
            message: "Signature attribute not allowed in Code context".to_string(),
        });
    }
    match class_file.constant_pool.get(signature_index) {
        Some(Constant::Utf8(_)) => {}
        Some(_) => return Err(InvalidConstantPoolIndexType(signature_index)),
        None => return Err(InvalidConstantPoolIndex(signature_index)),
    }
    Ok(())
}

fn verify_source_file(
    class_file: &ClassFile,
    context: AttributeContext,
    source_file_index: u16,
) -> Result<()> {
    if !matches!(context, AttributeContext::Class) {
        return Err(VerificationError {
            context: "SourceFile Attribute".to_string(),
            message: "SourceFile attribute only allowed in ClassFile context".to_string(),
        });
    }
    match class_file.constant_pool.get(source_file_index) {
        Some(Constant::Utf8(_)) => {}
        Some(_) => return Err(InvalidConstantPoolIndexType(source_file_index)),
        None => return Err(InvalidConstantPoolIndex(source_file_index)),
    }
    Ok(())
}

fn verify_source_debug_extension(context: AttributeContext) -> Result<()> {
    if !matches!(context, AttributeContext::Class) {
        return Err(VerificationError {
            context: "SourceDebugExtension Attribute".to_string(),
            message: "SourceDebugExtension attribute only allowed in ClassFile context".to_string(),
        });
    }
    Ok(())
}

fn verify_line_number_table(context: AttributeContext, line_numbers: &[LineNumber]) -> Result<()> {
    // LineNumberTable is typically inside Code attribute, but some compilers (e.g., javac 21+)
    // place it as a sibling attribute at the Method level. Both are accepted by the JVM.
    match context {
        AttributeContext::Code(_, code_length) => {
            // When inside Code, validate start_pc against code_length
            for line_number in line_numbers {
                if line_number.start_pc >= code_length {
                    return Err(VerificationError {
                        context: "LineNumberTable Attribute".to_string(),
                        message: format!(
                            "Invalid start_pc {} in LineNumberTable (code length {})",
                            line_number.start_pc, code_length
                        ),
                    });
                }
            }
        }
        AttributeContext::Method(_) => {
            // When at Method level (sibling of Code), we cannot validate start_pc
            // as we don't have code_length. The JVM accepts this placement.
        }
        _ => {
            return Err(VerificationError {
                context: "LineNumberTable Attribute".to_string(),
                message: "LineNumberTable attribute only allowed in Code or Method context"
                    .to_string(),
            });
        }
    }
    Ok(())
}

fn verify_local_variable_table(
    class_file: &ClassFile,
    context: AttributeContext,
    variables: &[LocalVariableTable],
) -> Result<()> {
    // LocalVariableTable is typically inside Code attribute, but some compilers
    // place it as a sibling attribute at the Method level. Both are accepted by the JVM.
    let code_length = match context {
        AttributeContext::Code(_, len) => Some(len),
        AttributeContext::Method(_) => None, // Cannot validate ranges without code_length
        _ => {
            return Err(VerificationError {
                context: "LocalVariableTable Attribute".to_string(),
                message: "LocalVariableTable attribute only allowed in Code or Method context"
                    .to_string(),
            });
        }
    };

    for local_variable in variables {
        // Only validate ranges if we have code_length (i.e., in Code context)
        if let Some(code_length) = code_length
            && u32::from(local_variable.start_pc) + u32::from(local_variable.length)
                > u32::from(code_length)
        {
            return Err(VerificationError {
                context: "LocalVariableTable Attribute".to_string(),
                message: format!(
                    "Invalid range start_pc {} + length {} in LocalVariableTable (code length {})",
                    local_variable.start_pc, local_variable.length, code_length
                ),
            });
        }
        // Verify name_index and descriptor_index
        match class_file.constant_pool.get(local_variable.name_index) {
            Some(Constant::Utf8(_)) => {}
            Some(_) => {
                return Err(InvalidConstantPoolIndexType(local_variable.name_index));
            }
            None => return Err(InvalidConstantPoolIndex(local_variable.name_index)),
        }
        match class_file
            .constant_pool
            .get(local_variable.descriptor_index)
        {
            Some(Constant::Utf8(_)) => {}
            Some(_) => {
                return Err(InvalidConstantPoolIndexType(
                    local_variable.descriptor_index,
                ));
            }
            None => {
                return Err(InvalidConstantPoolIndex(local_variable.descriptor_index));
            }
        }
    }
    Ok(())
}

fn verify_local_variable_type_table(
    class_file: &ClassFile,
    context: AttributeContext,
    variable_types: &[LocalVariableTypeTable],
) -> Result<()> {
    // LocalVariableTypeTable is typically inside Code attribute, but some compilers
    // place it as a sibling attribute at the Method level. Both are accepted by the JVM.
    let code_length = match context {
        AttributeContext::Code(_, len) => Some(len),
        AttributeContext::Method(_) => None, // Cannot validate ranges without code_length
        _ => {
            return Err(VerificationError {
                context: "LocalVariableTypeTable Attribute".to_string(),
                message: "LocalVariableTypeTable attribute only allowed in Code or Method context"
                    .to_string(),
            });
        }
    };

    for local_variable in variable_types {
        // Only validate ranges if we have code_length (i.e., in Code context)
        if let Some(code_length) = code_length
            && u32::from(local_variable.start_pc) + u32::from(local_variable.length)
                > u32::from(code_length)
        {
            return Err(VerificationError {
                context: "LocalVariableTypeTable Attribute".to_string(),
                message: format!(
                    "Invalid range start_pc {} + length {} in LocalVariableTypeTable (code length {})",
                    local_variable.start_pc, local_variable.length, code_length
                ),
            });
        }
        // Verify name_index and signature_index
        match class_file.constant_pool.get(local_variable.name_index) {
            Some(Constant::Utf8(_)) => {}
            Some(_) => {
                return Err(InvalidConstantPoolIndexType(local_variable.name_index));
            }
            None => return Err(InvalidConstantPoolIndex(local_variable.name_index)),
        }
        match class_file.constant_pool.get(local_variable.signature_index) {
            Some(Constant::Utf8(_)) => {}
            Some(_) => {
                return Err(InvalidConstantPoolIndexType(local_variable.signature_index));
            }
            None => {
                return Err(InvalidConstantPoolIndex(local_variable.signature_index));
            }
        }
    }
    Ok(())
}

fn verify_deprecated(context: AttributeContext) -> Result<()> {
    if matches!(context, AttributeContext::Code(..)) {
        return Err(VerificationError {
            context: "Deprecated Attribute".to_string(),
            message: "Deprecated attribute not allowed in Code context".to_string(),
        });
    }
    Ok(())
}

fn verify_annotations(class_file: &ClassFile, annotations: &[Annotation]) -> Result<()> {
    for annotation in annotations {
        verify_annotation(class_file, annotation)?;
    }
    Ok(())
}

fn verify_annotation(class_file: &ClassFile, annotation: &Annotation) -> Result<()> {
    match class_file.constant_pool.get(annotation.type_index) {
        Some(Constant::Utf8(_)) => {}
        Some(_) => return Err(InvalidConstantPoolIndexType(annotation.type_index)),
        None => return Err(InvalidConstantPoolIndex(annotation.type_index)),
    }
    for pair in &annotation.elements {
        match class_file.constant_pool.get(pair.name_index) {
            Some(Constant::Utf8(_)) => {}
            Some(_) => return Err(InvalidConstantPoolIndexType(pair.name_index)),
            None => return Err(InvalidConstantPoolIndex(pair.name_index)),
        }
        verify_annotation_element(class_file, &pair.value)?;
    }
    Ok(())
}

fn verify_annotation_element(class_file: &ClassFile, element: &AnnotationElement) -> Result<()> {
    match element {
        AnnotationElement::Byte { const_value_index }
        | AnnotationElement::Char { const_value_index }
        | AnnotationElement::Int { const_value_index }
        | AnnotationElement::Short { const_value_index }
        | AnnotationElement::Boolean { const_value_index } => {
            match class_file.constant_pool.get(*const_value_index) {
                Some(Constant::Integer(_)) => {}
                Some(_) => return Err(InvalidConstantPoolIndexType(*const_value_index)),
                None => return Err(InvalidConstantPoolIndex(*const_value_index)),
            }
        }
        AnnotationElement::Double { const_value_index } => {
            match class_file.constant_pool.get(*const_value_index) {
                Some(Constant::Double(_)) => {}
                Some(_) => return Err(InvalidConstantPoolIndexType(*const_value_index)),
                None => return Err(InvalidConstantPoolIndex(*const_value_index)),
            }
        }
        AnnotationElement::Float { const_value_index } => {
            match class_file.constant_pool.get(*const_value_index) {
                Some(Constant::Float(_)) => {}
                Some(_) => return Err(InvalidConstantPoolIndexType(*const_value_index)),
                None => return Err(InvalidConstantPoolIndex(*const_value_index)),
            }
        }
        AnnotationElement::Long { const_value_index } => {
            match class_file.constant_pool.get(*const_value_index) {
                Some(Constant::Long(_)) => {}
                Some(_) => return Err(InvalidConstantPoolIndexType(*const_value_index)),
                None => return Err(InvalidConstantPoolIndex(*const_value_index)),
            }
        }
        AnnotationElement::String { const_value_index } => {
            match class_file.constant_pool.get(*const_value_index) {
                Some(Constant::Utf8(_)) => {}
                Some(_) => return Err(InvalidConstantPoolIndexType(*const_value_index)),
                None => return Err(InvalidConstantPoolIndex(*const_value_index)),
            }
        }
        AnnotationElement::Enum {
            type_name_index,
            const_name_index,
        } => {
            match class_file.constant_pool.get(*type_name_index) {
                Some(Constant::Utf8(_)) => {}
                Some(_) => return Err(InvalidConstantPoolIndexType(*type_name_index)),
                None => return Err(InvalidConstantPoolIndex(*type_name_index)),
            }
            match class_file.constant_pool.get(*const_name_index) {
                Some(Constant::Utf8(_)) => {}
                Some(_) => return Err(InvalidConstantPoolIndexType(*const_name_index)),
                None => return Err(InvalidConstantPoolIndex(*const_name_index)),
            }
        }
        AnnotationElement::Class { class_info_index } => {
            match class_file.constant_pool.get(*class_info_index) {
                Some(Constant::Utf8(_)) => {}
                Some(_) => return Err(InvalidConstantPoolIndexType(*class_info_index)),
                None => return Err(InvalidConstantPoolIndex(*class_info_index)),
            }
        }
        AnnotationElement::Annotation { annotation } => {
            verify_annotation(class_file, annotation)?;
        }
        AnnotationElement::Array { values } => {
            for element in values {
                verify_annotation_element(class_file, element)?;
            }
        }
    }
    Ok(())
}

fn verify_parameter_annotations(
    class_file: &ClassFile,
    context: AttributeContext,
    parameter_annotations: &[ParameterAnnotation],
) -> Result<()> {
    if !matches!(context, AttributeContext::Method(_)) {
        return Err(VerificationError {
            context: "ParameterAnnotations Attribute".to_string(),
            message: "ParameterAnnotations attribute only allowed in Method context".to_string(),
        });
    }
    for parameter_annotation in parameter_annotations {
        verify_annotations(class_file, &parameter_annotation.annotations)?;
    }
    Ok(())
}

fn verify_type_annotations(
    class_file: &ClassFile,
    context: AttributeContext,
    type_annotations: &[TypeAnnotation],
) -> Result<()> {
    if matches!(context, AttributeContext::Code(..)) {
        // Type annotations in Code attribute target instructions, local variables, etc.
        // We should verify target_type here if we want to be strict.
    }
    for type_annotation in type_annotations {
        // Verify target_info based on target_type
        // For now, just verify the annotation part
        match class_file.constant_pool.get(type_annotation.type_index) {
            Some(Constant::Utf8(_)) => {}
            Some(_) => return Err(InvalidConstantPoolIndexType(type_annotation.type_index)),
            None => return Err(InvalidConstantPoolIndex(type_annotation.type_index)),
        }
        for pair in &type_annotation.elements {
            match class_file.constant_pool.get(pair.name_index) {
                Some(Constant::Utf8(_)) => {}
                Some(_) => return Err(InvalidConstantPoolIndexType(pair.name_index)),
                None => return Err(InvalidConstantPoolIndex(pair.name_index)),
            }
            verify_annotation_element(class_file, &pair.value)?;
        }
    }
    Ok(())
}

fn verify_annotation_default(
    class_file: &ClassFile,
    context: AttributeContext,
    element: &AnnotationElement,
) -> Result<()> {
    if !matches!(context, AttributeContext::Method(_)) {
        return Err(VerificationError {
            context: "AnnotationDefault Attribute".to_string(),
            message: "AnnotationDefault attribute only allowed in Method context".to_string(),
        });
    }
    verify_annotation_element(class_file, element)
}

fn verify_bootstrap_methods(
    class_file: &ClassFile,
    context: AttributeContext,
    methods: &[BootstrapMethod],
) -> Result<()> {
    if !matches!(context, AttributeContext::Class) {
        return Err(VerificationError {
            context: "BootstrapMethods Attribute".to_string(),
            message: "BootstrapMethods attribute only allowed in ClassFile context".to_string(),
        });
    }
    for method in methods {
        match class_file.constant_pool.get(method.bootstrap_method_ref) {
            Some(Constant::MethodHandle { .. }) => {}
            Some(_) => return Err(InvalidConstantPoolIndexType(method.bootstrap_method_ref)),
            None => return Err(InvalidConstantPoolIndex(method.bootstrap_method_ref)),
        }
        for argument in &method.arguments {
            match class_file.constant_pool.get(*argument) {
                Some(_) => {} // Can be various constants
                None => return Err(InvalidConstantPoolIndex(*argument)),
            }
        }
    }
    Ok(())
}

fn verify_method_parameters(
    class_file: &ClassFile,
    context: AttributeContext,
    parameters: &[MethodParameter],
) -> Result<()> {
    if !matches!(context, AttributeContext::Method(_)) {
        return Err(VerificationError {
            context: "MethodParameters Attribute".to_string(),
            message: "MethodParameters attribute only allowed in Method context".to_string(),
        });
    }
    for parameter in parameters {
        if parameter.name_index != 0 {
            match class_file.constant_pool.get(parameter.name_index) {
                Some(Constant::Utf8(_)) => {}
                Some(_) => return Err(InvalidConstantPoolIndexType(parameter.name_index)),
                None => return Err(InvalidConstantPoolIndex(parameter.name_index)),
            }
        }
    }
    Ok(())
}

#[expect(clippy::too_many_arguments)]
fn verify_module(
    class_file: &ClassFile,
    context: AttributeContext,
    module_name_index: u16,
    version_index: u16,
    requires: &[Requires],
    exports: &[Exports],
    opens: &[Opens],
    uses: &[u16],
    provides: &[Provides],
) -> Result<()> {
    if !matches!(context, AttributeContext::Class) {
        return Err(VerificationError {
            context: "Module Attribute".to_string(),
            message: "Module attribute only allowed in ClassFile context".to_string(),
        });
    }
    match class_file.constant_pool.get(module_name_index) {
        Some(Constant::Module(_)) => {}
        Some(_) => return Err(InvalidConstantPoolIndexType(module_name_index)),
        None => return Err(InvalidConstantPoolIndex(module_name_index)),
    }
    if version_index != 0 {
        match class_file.constant_pool.get(version_index) {
            Some(Constant::Utf8(_)) => {}
            Some(_) => return Err(InvalidConstantPoolIndexType(version_index)),
            None => return Err(InvalidConstantPoolIndex(version_index)),
        }
    }
    for require in requires {
        match class_file.constant_pool.get(require.index) {
            Some(Constant::Module(_)) => {}
            Some(_) => return Err(InvalidConstantPoolIndexType(require.index)),
            None => return Err(InvalidConstantPoolIndex(require.index)),
        }
        if require.version_index != 0 {
            match class_file.constant_pool.get(require.version_index) {
                Some(Constant::Utf8(_)) => {}
                Some(_) => {
                    return Err(InvalidConstantPoolIndexType(require.version_index));
                }
                None => return Err(InvalidConstantPoolIndex(require.version_index)),
            }
        }
    }
    for export in exports {
        match class_file.constant_pool.get(export.index) {
            Some(Constant::Package(_)) => {}
            Some(_) => return Err(InvalidConstantPoolIndexType(export.index)),
            None => return Err(InvalidConstantPoolIndex(export.index)),
        }
        for index in &export.to_index {
            match class_file.constant_pool.get(*index) {
                Some(Constant::Module(_)) => {}
                Some(_) => return Err(InvalidConstantPoolIndexType(*index)),
                None => return Err(InvalidConstantPoolIndex(*index)),
            }
        }
    }
    for open in opens {
        match class_file.constant_pool.get(open.index) {
            Some(Constant::Package(_)) => {}
            Some(_) => return Err(InvalidConstantPoolIndexType(open.index)),
            None => return Err(InvalidConstantPoolIndex(open.index)),
        }
        for index in &open.to_index {
            match class_file.constant_pool.get(*index) {
                Some(Constant::Module(_)) => {}
                Some(_) => return Err(InvalidConstantPoolIndexType(*index)),
                None => return Err(InvalidConstantPoolIndex(*index)),
            }
        }
    }
    for use_index in uses {
        match class_file.constant_pool.get(*use_index) {
            Some(Constant::Class(_)) => {}
            Some(_) => return Err(InvalidConstantPoolIndexType(*use_index)),
            None => return Err(InvalidConstantPoolIndex(*use_index)),
        }
    }
    for provide in provides {
        match class_file.constant_pool.get(provide.index) {
            Some(Constant::Class(_)) => {}
            Some(_) => return Err(InvalidConstantPoolIndexType(provide.index)),
            None => return Err(InvalidConstantPoolIndex(provide.index)),
        }
        for index in &provide.with_index {
            match class_file.constant_pool.get(*index) {
                Some(Constant::Class(_)) => {}
                Some(_) => return Err(InvalidConstantPoolIndexType(*index)),
                None => return Err(InvalidConstantPoolIndex(*index)),
            }
        }
    }
    Ok(())
}

fn verify_module_packages(
    class_file: &ClassFile,
    context: AttributeContext,
    package_indexes: &[u16],
) -> Result<()> {
    if !matches!(context, AttributeContext::Class) {
        return Err(VerificationError {
            context: "ModulePackages Attribute".to_string(),
            message: "ModulePackages attribute only allowed in ClassFile context".to_string(),
        });
    }
    for index in package_indexes {
        match class_file.constant_pool.get(*index) {
            Some(Constant::Package(_)) => {}
            Some(_) => return Err(InvalidConstantPoolIndexType(*index)),
            None => return Err(InvalidConstantPoolIndex(*index)),
        }
    }
    Ok(())
}

fn verify_module_main_class(
    class_file: &ClassFile,
    context: AttributeContext,
    main_class_index: u16,
) -> Result<()> {
    if !matches!(context, AttributeContext::Class) {
        return Err(VerificationError {
            context: "ModuleMainClass Attribute".to_string(),
            message: "ModuleMainClass attribute only allowed in ClassFile context".to_string(),
        });
    }
    match class_file.constant_pool.get(main_class_index) {
        Some(Constant::Class(_)) => {}
        Some(_) => return Err(InvalidConstantPoolIndexType(main_class_index)),
        None => return Err(InvalidConstantPoolIndex(main_class_index)),
    }
    Ok(())
}

fn verify_nest_host(
    class_file: &ClassFile,
    context: AttributeContext,
    host_class_index: u16,
) -> Result<()> {
    if !matches!(context, AttributeContext::Class) {
        return Err(VerificationError {
            context: "NestHost Attribute".to_string(),
            message: "NestHost attribute only allowed in ClassFile context".to_string(),
        });
    }
    match class_file.constant_pool.get(host_class_index) {
        Some(Constant::Class(_)) => {}
        Some(_) => return Err(InvalidConstantPoolIndexType(host_class_index)),
        None => return Err(InvalidConstantPoolIndex(host_class_index)),
    }
    Ok(())
}

fn verify_nest_members(
    class_file: &ClassFile,
    context: AttributeContext,
    class_indexes: &[u16],
) -> Result<()> {
    if !matches!(context, AttributeContext::Class) {
        return Err(VerificationError {
            context: "NestMembers Attribute".to_string(),
            message: "NestMembers attribute only allowed in ClassFile context".to_string(),
        });
    }
    for index in class_indexes {
        match class_file.constant_pool.get(*index) {
            Some(Constant::Class(_)) => {}
            Some(_) => return Err(InvalidConstantPoolIndexType(*index)),
            None => return Err(InvalidConstantPoolIndex(*index)),
        }
    }
    Ok(())
}

fn verify_record(
    class_file: &ClassFile,
    context: AttributeContext,
    records: &[Record],
) -> Result<()> {
    if !matches!(context, AttributeContext::Class) {
        return Err(VerificationError {
            context: "Record Attribute".to_string(),
            message: "Record attribute only allowed in ClassFile context".to_string(),
        });
    }
    for record in records {
        match class_file.constant_pool.get(record.name_index) {
            Some(Constant::Utf8(_)) => {}
            Some(_) => return Err(InvalidConstantPoolIndexType(record.name_index)),
            None => return Err(InvalidConstantPoolIndex(record.name_index)),
        }
        match class_file.constant_pool.get(record.descriptor_index) {
            Some(Constant::Utf8(_)) => {}
            Some(_) => return Err(InvalidConstantPoolIndexType(record.descriptor_index)),
            None => return Err(InvalidConstantPoolIndex(record.descriptor_index)),
        }
        verify(
            class_file,
            &record.attributes,
            AttributeContext::RecordComponent,
        )?;
    }
    Ok(())
}

fn verify_permitted_subclasses(
    class_file: &ClassFile,
    context: AttributeContext,
    class_indexes: &[u16],
) -> Result<()> {
    if !matches!(context, AttributeContext::Class) {
        return Err(VerificationError {
            context: "PermittedSubclasses Attribute".to_string(),
            message: "PermittedSubclasses attribute only allowed in ClassFile context".to_string(),
        });
    }
    for index in class_indexes {
        match class_file.constant_pool.get(*index) {
            Some(Constant::Class(_)) => {}
            Some(_) => return Err(InvalidConstantPoolIndexType(*index)),
            None => return Err(InvalidConstantPoolIndex(*index)),
        }
    }
    Ok(())
}
