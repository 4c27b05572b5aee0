use crate::Result;
use crate::jit_value;
use crate::local_variables::LocalVariables;
use crate::operand_stack::OperandStack;
use cranelift::frontend::FunctionBuilder;
use cranelift::prelude::{InstBuilder, MemFlags, Value, types};

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.fconst_f>
pub(crate) fn fconst_0(
    function_builder: &mut FunctionBuilder,
    stack: &mut OperandStack,
) -> Result<()> {
    let constant = function_builder.ins().f32const(0.0);
    stack.push_float(function_builder, constant)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.fconst_f>
pub(crate) fn fconst_1(
    function_builder: &mut FunctionBuilder,
    stack: &mut OperandStack,
) -> Result<()> {
    let constant = function_builder.ins().f32const(1.0);
    stack.push_float(function_builder, constant)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.fconst_f>
pub(crate) fn fconst_2(
    function_builder: &mut FunctionBuilder,
    stack: &mut OperandStack,
) -> Result<()> {
    let constant = function_builder.ins().f32const(2.0);
    stack.push_float(function_builder, constant)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.fload>
pub(crate) fn fload(
    function_builder: &mut FunctionBuilder,
    locals: &mut LocalVariables,
    stack: &mut OperandStack,
    index: u8,
) -> Result<()> {
    load(function_builder, locals, stack, usize::from(index))
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.fload>
/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.wide>
pub(crate) fn fload_w(
    function_builder: &mut FunctionBuilder,
    locals: &mut LocalVariables,
    stack: &mut OperandStack,
    index: u16,
) -> Result<()> {
    load(function_builder, locals, stack, usize::from(index))
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.fload_n>
pub(crate) fn fload_0(
    function_builder: &mut FunctionBuilder,
    locals: &mut LocalVariables,
    stack: &mut OperandStack,
) -> Result<()> {
    load(function_builder, locals, stack, 0)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.fload_n>
pub(crate) fn fload_1(
    function_builder: &mut FunctionBuilder,
    locals: &mut LocalVariables,
    stack: &mut OperandStack,
) -> Result<()> {
    load(function_builder, locals, stack, 1)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.fload_n>
pub(crate) fn fload_2(
    function_builder: &mut FunctionBuilder,
    locals: &mut LocalVariables,
    stack: &mut OperandStack,
) -> Result<()> {
    load(function_builder, locals, stack, 2)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.fload_n>
pub(crate) fn fload_3(
    function_builder: &mut FunctionBuilder,
    locals: &mut LocalVariables,
    stack: &mut OperandStack,
) -> Result<()> {
    load(function_builder, locals, stack, 3)
}

fn load(
    function_builder: &mut FunctionBuilder,
    locals: &mut LocalVariables,
    stack: &mut OperandStack,
    index: usize,
) -> Result<()> {
    let value = locals.get_float(function_builder, index)?;
    stack.push_float(function_builder, value)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.fstore>
pub(crate) fn fstore(
    function_builder: &mut FunctionBuilder,
    locals: &mut LocalVariables,
    stack: &mut OperandStack,
    index: u8,
) -> Result<()> {
    store(function_builder, locals, stack, usize::from(index))
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.fstore>
/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.wide>
pub(crate) fn fstore_w(
    function_builder: &mut FunctionBuilder,
    locals: &mut LocalVariables,
    stack: &mut OperandStack,
    index: u16,
) -> Result<()> {
    store(function_builder, locals, stack, usize::from(index))
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.fstore_n>
pub(crate) fn fstore_0(
    function_builder: &mut FunctionBuilder,
    locals: &mut LocalVariables,
    stack: &mut OperandStack,
) -> Result<()> {
    store(function_builder, locals, stack, 0)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.fstore_n>
pub(crate) fn fstore_1(
    function_builder: &mut FunctionBuilder,
    locals: &mut LocalVariables,
    stack: &mut OperandStack,
) -> Result<()> {
    store(function_builder, locals, stack, 1)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.fstore_n>
pub(crate) fn fstore_2(
    function_builder: &mut FunctionBuilder,
    locals: &mut LocalVariables,
    stack: &mut OperandStack,
) -> Result<()> {
    store(function_builder, locals, stack, 2)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.fstore_n>
pub(crate) fn fstore_3(
    function_builder: &mut FunctionBuilder,
    locals: &mut LocalVariables,
    stack: &mut OperandStack,
) -> Result<()> {
    store(function_builder, locals, stack, 3)
}

fn store(
    function_builder: &mut FunctionBuilder,
    locals: &mut LocalVariables,
    stack: &mut OperandStack,
    index: usize,
) -> Result<()> {
    let value = stack.pop_float(function_builder)?;
    locals.set_float(function_builder, index, value)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.fadd>
pub(crate) fn fadd(function_builder: &mut FunctionBuilder, stack: &mut OperandStack) -> Result<()> {
    let value2 = stack.pop_float(function_builder)?;
    let value1 = stack.pop_float(function_builder)?;
    let value = function_builder.ins().fadd(value1, value2);
    stack.push_float(function_builder, value)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.fsub>
pub(crate) fn fsub(function_builder: &mut FunctionBuilder, stack: &mut OperandStack) -> Result<()> {
    let value2 = stack.pop_float(function_builder)?;
    let value1 = stack.pop_float(function_builder)?;
    let value = function_builder.ins().fsub(value1, value2);
    stack.push_float(function_builder, value)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.fmul>
pub(crate) fn fmul(function_builder: &mut FunctionBuilder, stack: &mut OperandStack) -> Result<()> {
    let value2 = stack.pop_float(function_builder)?;
    let value1 = stack.pop_float(function_builder)?;
    let value = function_builder.ins().fmul(value1, value2);
    stack.push_float(function_builder, value)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.fdiv>
pub(crate) fn fdiv(function_builder: &mut FunctionBuilder, stack: &mut OperandStack) -> Result<()> {
    let value2 = stack.pop_float(function_builder)?;
    let value1 = stack.pop_float(function_builder)?;
    let value = function_builder.ins().fdiv(value1, value2);
    stack.push_float(function_builder, value)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.frem>
pub(crate) fn frem(function_builder: &mut FunctionBuilder, stack: &mut OperandStack) -> Result<()> {
    let value2 = stack.pop_float(function_builder)?;
    let value1 = stack.pop_float(function_builder)?;
    // TODO: optimize this if/when cranelift supports frem directly
    let div = function_builder.ins().fdiv(value1, value2);
    let trunc = function_builder.ins().trunc(div);
    let mul = function_builder.ins().fmul(value2, trunc);
    let value = function_builder.ins().fsub(value1, mul);
    stack.push_float(function_builder, value)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.fneg>
pub(crate) fn fneg(function_builder: &mut FunctionBuilder, stack: &mut OperandStack) -> Result<()> {
    let value = stack.pop_float(function_builder)?;
    let value = function_builder.ins().fneg(value);
    stack.push_float(function_builder, value)
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.freturn>
pub(crate) fn freturn(
    function_builder: &mut FunctionBuilder,
    stack: &mut OperandStack,
    return_pointer: Value,
) -> Result<()> {
    let value = stack.pop_float(function_builder)?;
    let bits = function_builder.ins().bitcast(types::I32, MemFlags::new(), value);
    let bits = function_builder.ins().uextend(types::I64, bits);
    let discriminant = i64::from(jit_value::F32);
    let discriminant = function_builder.ins().iconst(types::I8, discriminant);
    function_builder
        .ins()
        .store(MemFlags::new(), discriminant, return_pointer, 0);
    function_builder
        .ins()
        .store(MemFlags::new(), bits, return_pointer, 8);
    function_builder.ins().return_(&[]);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::create_function_builder_contexts;

    #[test]
    fn test_fload_fstore_roundtrip() -> Result<()> {
        let (mut module_context, mut function_context) = create_function_builder_contexts()?;
        let mut function_builder =
            FunctionBuilder::new(&mut module_context.func, &mut function_context);
        let block = function_builder.create_block();
        function_builder.switch_to_block(block);

        let mut locals = LocalVariables::new();
        let mut stack = OperandStack::with_capacity(1);
        let value = function_builder.ins().f32const(42.0);
        stack.push(value);
        fstore_0(&mut function_builder, &mut locals, &mut stack)?;
        assert!(stack.is_empty());
        fload_0(&mut function_builder, &mut locals, &mut stack)?;
        let result = stack.pop_float(&function_builder)?;
        assert_eq!(value, result);
        Ok(())
    }

    #[test]
    fn test_fadd() -> Result<()> {
        let (mut module_context, mut function_context) = create_function_builder_contexts()?;
        let mut function_builder =
            FunctionBuilder::new(&mut module_context.func, &mut function_context);
        let block = function_builder.create_block();
        function_builder.switch_to_block(block);

        let mut stack = OperandStack::with_capacity(2);
        let value1 = function_builder.ins().f32const(1.0);
        let value2 = function_builder.ins().f32const(2.0);
        stack.push(value1);
        stack.push(value2);
        fadd(&mut function_builder, &mut stack)?;
        assert_eq!(1, stack.len());
        Ok(())
    }
}
