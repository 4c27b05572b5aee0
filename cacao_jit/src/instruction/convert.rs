use crate::Result;
use crate::operand_stack::OperandStack;
use cranelift::frontend::FunctionBuilder;
use cranelift::prelude::{InstBuilder, types};

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.i2l>
pub(crate) fn i2l(function_builder: &mut FunctionBuilder, stack: &mut OperandStack) -> Result<()> {
    let value = stack.pop_int(function_builder)?;
    let value = function_builder.ins().sextend(types::I64, value);
    stack.push_long(function_builder, value)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.i2f>
pub(crate) fn i2f(function_builder: &mut FunctionBuilder, stack: &mut OperandStack) -> Result<()> {
    let value = stack.pop_int(function_builder)?;
    let value = function_builder.ins().fcvt_from_sint(types::F32, value);
    stack.push_float(function_builder, value)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.i2d>
pub(crate) fn i2d(function_builder: &mut FunctionBuilder, stack: &mut OperandStack) -> Result<()> {
    let value = stack.pop_int(function_builder)?;
    let value = function_builder.ins().fcvt_from_sint(types::F64, value);
    stack.push_double(function_builder, value)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.l2i>
pub(crate) fn l2i(function_builder: &mut FunctionBuilder, stack: &mut OperandStack) -> Result<()> {
    let value = stack.pop_long(function_builder)?;
    let value = function_builder.ins().ireduce(types::I32, value);
    stack.push_int(function_builder, value)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.l2f>
pub(crate) fn l2f(function_builder: &mut FunctionBuilder, stack: &mut OperandStack) -> Result<()> {
    let value = stack.pop_long(function_builder)?;
    let value = function_builder.ins().fcvt_from_sint(types::F32, value);
    stack.push_float(function_builder, value)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.l2d>
pub(crate) fn l2d(function_builder: &mut FunctionBuilder, stack: &mut OperandStack) -> Result<()> {
    let value = stack.pop_long(function_builder)?;
    let value = function_builder.ins().fcvt_from_sint(types::F64, value);
    stack.push_double(function_builder, value)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.f2i>
pub(crate) fn f2i(function_builder: &mut FunctionBuilder, stack: &mut OperandStack) -> Result<()> {
    let value = stack.pop_float(function_builder)?;
    let value = function_builder.ins().fcvt_to_sint_sat(types::I32, value);
    stack.push_int(function_builder, value)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.f2l>
pub(crate) fn f2l(function_builder: &mut FunctionBuilder, stack: &mut OperandStack) -> Result<()> {
    let value = stack.pop_float(function_builder)?;
    let value = function_builder.ins().fcvt_to_sint_sat(types::I64, value);
    stack.push_long(function_builder, value)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.f2d>
pub(crate) fn f2d(function_builder: &mut FunctionBuilder, stack: &mut OperandStack) -> Result<()> {
    let value = stack.pop_float(function_builder)?;
    let value = function_builder.ins().fpromote(types::F64, value);
    stack.push_double(function_builder, value)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.d2i>
pub(crate) fn d2i(function_builder: &mut FunctionBuilder, stack: &mut OperandStack) -> Result<()> {
    let value = stack.pop_double(function_builder)?;
    let value = function_builder.ins().fcvt_to_sint_sat(types::I32, value);
    stack.push_int(function_builder, value)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.d2l>
pub(crate) fn d2l(function_builder: &mut FunctionBuilder, stack: &mut OperandStack) -> Result<()> {
    let value = stack.pop_double(function_builder)?;
    let value = function_builder.ins().fcvt_to_sint_sat(types::I64, value);
    stack.push_long(function_builder, value)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.d2f>
pub(crate) fn d2f(function_builder: &mut FunctionBuilder, stack: &mut OperandStack) -> Result<()> {
    let value = stack.pop_double(function_builder)?;
    let value = function_builder.ins().fdemote(types::F32, value);
    stack.push_float(function_builder, value)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.i2b>
pub(crate) fn i2b(function_builder: &mut FunctionBuilder, stack: &mut OperandStack) -> Result<()> {
    let value = stack.pop_int(function_builder)?;
    let value = function_builder.ins().ireduce(types::I8, value);
    let value = function_builder.ins().sextend(types::I32, value);
    stack.push_int(function_builder, value)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.i2c>
pub(crate) fn i2c(function_builder: &mut FunctionBuilder, stack: &mut OperandStack) -> Result<()> {
    let value = stack.pop_int(function_builder)?;
    let value = function_builder.ins().ireduce(types::I16, value);
    let value = function_builder.ins().uextend(types::I32, value);
    stack.push_int(function_builder, value)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.i2s>
pub(crate) fn i2s(function_builder: &mut FunctionBuilder, stack: &mut OperandStack) -> Result<()> {
    let value = stack.pop_int(function_builder)?;
    let value = function_builder.ins().ireduce(types::I16, value);
    let value = function_builder.ins().sextend(types::I32, value);
    stack.push_int(function_builder, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::create_function_builder_contexts;

    #[test]
    fn test_i2l() -> Result<()> {
        let (mut module_context, mut function_context) = create_function_builder_contexts()?;
        let mut function_builder =
            FunctionBuilder::new(&mut module_context.func, &mut function_context);
        let block = function_builder.create_block();
        function_builder.switch_to_block(block);

        let mut stack = OperandStack::with_capacity(1);
        let value = function_builder.ins().iconst(types::I32, 42);
        stack.push(value);
        i2l(&mut function_builder, &mut stack)?;
        let result = stack.pop_long(&function_builder)?;
        assert_eq!(
            types::I64,
            function_builder.func.dfg.value_type(result)
        );
        Ok(())
    }

    #[test]
    fn test_i2c_zero_extends() -> Result<()> {
        let (mut module_context, mut function_context) = create_function_builder_contexts()?;
        let mut function_builder =
            FunctionBuilder::new(&mut module_context.func, &mut function_context);
        let block = function_builder.create_block();
        function_builder.switch_to_block(block);

        let mut stack = OperandStack::with_capacity(1);
        let value = function_builder.ins().iconst(types::I32, -1);
        stack.push(value);
        i2c(&mut function_builder, &mut stack)?;
        let result = stack.pop_int(&function_builder)?;
        assert_eq!(types::I32, function_builder.func.dfg.value_type(result));
        Ok(())
    }
}
