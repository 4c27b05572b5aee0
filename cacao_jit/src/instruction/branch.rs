use crate::Error::{InvalidBlockAddress, UnsupportedInstruction};
use crate::Result;
use crate::local_variables::LocalVariables;
use crate::operand_stack::OperandStack;
use ahash::AHashMap;
use cacao_classfile::attributes::{Instruction, LookupSwitch, TableSwitch};
use cranelift::codegen::ir::condcodes::IntCC;
use cranelift::frontend::{FunctionBuilder, Switch};
use cranelift::prelude::{Block, InstBuilder, Value, types};

fn block_for(blocks: &AHashMap<usize, Block>, address: usize) -> Result<Block> {
    blocks
        .get(&address)
        .copied()
        .ok_or(InvalidBlockAddress(address))
}

/// Emits a two-way conditional branch comparing `value` to the given `IntCC` condition against
/// zero, to either the jump target (`address`) or the fall-through instruction.
///
/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.if_cond>
fn branch_if(
    function_builder: &mut FunctionBuilder,
    blocks: &AHashMap<usize, Block>,
    stack: &mut OperandStack,
    program_counter: usize,
    address: u16,
    condition: IntCC,
    value: Value,
) -> Result<()> {
    let zero = function_builder.ins().iconst(types::I32, 0);
    let condition_value = function_builder.ins().icmp(condition, value, zero);
    let then_block = block_for(blocks, usize::from(address))?;
    let else_block = block_for(blocks, program_counter + 1)?;
    let block_arguments = stack.as_block_arguments();
    function_builder.ins().brif(
        condition_value,
        then_block,
        &block_arguments,
        else_block,
        &block_arguments,
    );
    Ok(())
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.ifeq>
pub(crate) fn ifeq(
    function_builder: &mut FunctionBuilder,
    blocks: &AHashMap<usize, Block>,
    stack: &mut OperandStack,
    program_counter: usize,
    address: u16,
) -> Result<()> {
    let value = stack.pop_int(function_builder)?;
    branch_if(
        function_builder,
        blocks,
        stack,
        program_counter,
        address,
        IntCC::Equal,
        value,
    )
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.ifne>
pub(crate) fn ifne(
    function_builder: &mut FunctionBuilder,
    blocks: &AHashMap<usize, Block>,
    stack: &mut OperandStack,
    program_counter: usize,
    address: u16,
) -> Result<()> {
    let value = stack.pop_int(function_builder)?;
    branch_if(
        function_builder,
        blocks,
        stack,
        program_counter,
        address,
        IntCC::NotEqual,
        value,
    )
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.iflt>
pub(crate) fn iflt(
    function_builder: &mut FunctionBuilder,
    blocks: &AHashMap<usize, Block>,
    stack: &mut OperandStack,
    program_counter: usize,
    address: u16,
) -> Result<()> {
    let value = stack.pop_int(function_builder)?;
    branch_if(
        function_builder,
        blocks,
        stack,
        program_counter,
        address,
        IntCC::SignedLessThan,
        value,
    )
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.ifge>
pub(crate) fn ifge(
    function_builder: &mut FunctionBuilder,
    blocks: &AHashMap<usize, Block>,
    stack: &mut OperandStack,
    program_counter: usize,
    address: u16,
) -> Result<()> {
    let value = stack.pop_int(function_builder)?;
    branch_if(
        function_builder,
        blocks,
        stack,
        program_counter,
        address,
        IntCC::SignedGreaterThanOrEqual,
        value,
    )
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.ifgt>
pub(crate) fn ifgt(
    function_builder: &mut FunctionBuilder,
    blocks: &AHashMap<usize, Block>,
    stack: &mut OperandStack,
    program_counter: usize,
    address: u16,
) -> Result<()> {
    let value = stack.pop_int(function_builder)?;
    branch_if(
        function_builder,
        blocks,
        stack,
        program_counter,
        address,
        IntCC::SignedGreaterThan,
        value,
    )
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.ifle>
pub(crate) fn ifle(
    function_builder: &mut FunctionBuilder,
    blocks: &AHashMap<usize, Block>,
    stack: &mut OperandStack,
    program_counter: usize,
    address: u16,
) -> Result<()> {
    let value = stack.pop_int(function_builder)?;
    branch_if(
        function_builder,
        blocks,
        stack,
        program_counter,
        address,
        IntCC::SignedLessThanOrEqual,
        value,
    )
}

fn branch_if_icmp(
    function_builder: &mut FunctionBuilder,
    blocks: &AHashMap<usize, Block>,
    stack: &mut OperandStack,
    program_counter: usize,
    address: u16,
    condition: IntCC,
) -> Result<()> {
    let value2 = stack.pop_int(function_builder)?;
    let value1 = stack.pop_int(function_builder)?;
    let condition_value = function_builder.ins().icmp(condition, value1, value2);
    let then_block = block_for(blocks, usize::from(address))?;
    let else_block = block_for(blocks, program_counter + 1)?;
    let block_arguments = stack.as_block_arguments();
    function_builder.ins().brif(
        condition_value,
        then_block,
        &block_arguments,
        else_block,
        &block_arguments,
    );
    Ok(())
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.if_icmp_cond>
pub(crate) fn if_icmpeq(
    function_builder: &mut FunctionBuilder,
    blocks: &AHashMap<usize, Block>,
    stack: &mut OperandStack,
    program_counter: usize,
    address: u16,
) -> Result<()> {
    branch_if_icmp(
        function_builder,
        blocks,
        stack,
        program_counter,
        address,
        IntCC::Equal,
    )
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.if_icmp_cond>
pub(crate) fn if_icmpne(
    function_builder: &mut FunctionBuilder,
    blocks: &AHashMap<usize, Block>,
    stack: &mut OperandStack,
    program_counter: usize,
    address: u16,
) -> Result<()> {
    branch_if_icmp(
        function_builder,
        blocks,
        stack,
        program_counter,
        address,
        IntCC::NotEqual,
    )
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.if_icmp_cond>
pub(crate) fn if_icmplt(
    function_builder: &mut FunctionBuilder,
    blocks: &AHashMap<usize, Block>,
    stack: &mut OperandStack,
    program_counter: usize,
    address: u16,
) -> Result<()> {
    branch_if_icmp(
        function_builder,
        blocks,
        stack,
        program_counter,
        address,
        IntCC::SignedLessThan,
    )
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.if_icmp_cond>
pub(crate) fn if_icmpge(
    function_builder: &mut FunctionBuilder,
    blocks: &AHashMap<usize, Block>,
    stack: &mut OperandStack,
    program_counter: usize,
    address: u16,
) -> Result<()> {
    branch_if_icmp(
        function_builder,
        blocks,
        stack,
        program_counter,
        address,
        IntCC::SignedGreaterThanOrEqual,
    )
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.if_icmp_cond>
pub(crate) fn if_icmpgt(
    function_builder: &mut FunctionBuilder,
    blocks: &AHashMap<usize, Block>,
    stack: &mut OperandStack,
    program_counter: usize,
    address: u16,
) -> Result<()> {
    branch_if_icmp(
        function_builder,
        blocks,
        stack,
        program_counter,
        address,
        IntCC::SignedGreaterThan,
    )
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.if_icmp_cond>
pub(crate) fn if_icmple(
    function_builder: &mut FunctionBuilder,
    blocks: &AHashMap<usize, Block>,
    stack: &mut OperandStack,
    program_counter: usize,
    address: u16,
) -> Result<()> {
    branch_if_icmp(
        function_builder,
        blocks,
        stack,
        program_counter,
        address,
        IntCC::SignedLessThanOrEqual,
    )
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.goto>
pub(crate) fn goto(
    function_builder: &mut FunctionBuilder,
    blocks: &AHashMap<usize, Block>,
    stack: &mut OperandStack,
    address: u16,
) -> Result<()> {
    let target = block_for(blocks, usize::from(address))?;
    let block_arguments = stack.as_block_arguments();
    function_builder.ins().jump(target, &block_arguments);
    Ok(())
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.goto_w>
pub(crate) fn goto_w(
    function_builder: &mut FunctionBuilder,
    blocks: &AHashMap<usize, Block>,
    stack: &mut OperandStack,
    address: i32,
) -> Result<()> {
    let target = block_for(blocks, usize::try_from(address)?)?;
    let block_arguments = stack.as_block_arguments();
    function_builder.ins().jump(target, &block_arguments);
    Ok(())
}

/// `jsr`/`jsr_w`/`ret`/`ret_w` implement bytecode subroutines, which javac has not emitted since
/// Java 6 and which class files of version 50 or later are forbidden from containing. The
/// return address is pushed as a plain int placeholder; the subroutine body itself is compiled
/// like any other reachable block.
///
/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.jsr>
pub(crate) fn jsr(
    function_builder: &mut FunctionBuilder,
    blocks: &AHashMap<usize, Block>,
    stack: &mut OperandStack,
    program_counter: usize,
    address: u16,
) -> Result<()> {
    let return_address = function_builder
        .ins()
        .iconst(types::I32, i64::from(u32::try_from(program_counter + 1)?));
    stack.push_int(function_builder, return_address)?;
    let target = block_for(blocks, usize::from(address))?;
    let block_arguments = stack.as_block_arguments();
    function_builder.ins().jump(target, &block_arguments);
    Ok(())
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.jsr_w>
pub(crate) fn jsr_w(
    function_builder: &mut FunctionBuilder,
    blocks: &AHashMap<usize, Block>,
    stack: &mut OperandStack,
    program_counter: usize,
    address: i32,
) -> Result<()> {
    let return_address = function_builder
        .ins()
        .iconst(types::I32, i64::from(u32::try_from(program_counter + 1)?));
    stack.push_int(function_builder, return_address)?;
    let target = block_for(blocks, usize::try_from(address)?)?;
    let block_arguments = stack.as_block_arguments();
    function_builder.ins().jump(target, &block_arguments);
    Ok(())
}

/// `ret` branches to a runtime-determined target, which cannot be expressed as a static
/// Cranelift jump; subroutines are deprecated and unsupported.
///
/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.ret>
pub(crate) fn ret(
    _function_builder: &mut FunctionBuilder,
    _blocks: &AHashMap<usize, Block>,
    _locals: &mut LocalVariables,
    _stack: &mut OperandStack,
    index: u8,
) -> Result<()> {
    Err(UnsupportedInstruction(Instruction::Ret(index)))
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.ret>
/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.wide>
pub(crate) fn ret_w(
    _function_builder: &mut FunctionBuilder,
    _blocks: &AHashMap<usize, Block>,
    _locals: &mut LocalVariables,
    _stack: &mut OperandStack,
    index: u16,
) -> Result<()> {
    Err(UnsupportedInstruction(Instruction::Ret_w(index)))
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.tableswitch>
pub(crate) fn tableswitch(
    function_builder: &mut FunctionBuilder,
    blocks: &AHashMap<usize, Block>,
    stack: &mut OperandStack,
    program_counter: usize,
    table_switch: &TableSwitch,
) -> Result<()> {
    let index = stack.pop_int(function_builder)?;
    let program_counter = i32::try_from(program_counter)?;
    let default_block = block_for(
        blocks,
        usize::try_from(program_counter.wrapping_add(table_switch.default))?,
    )?;
    let block_arguments = stack.as_block_arguments();

    if block_arguments.is_empty() {
        let mut switch = Switch::new();
        for (offset_index, offset) in table_switch.offsets.iter().enumerate() {
            let case_value = table_switch.low.wrapping_add(i32::try_from(offset_index)?);
            let case_value = u128::from(u32::from_ne_bytes(case_value.to_ne_bytes()));
            let target = block_for(
                blocks,
                usize::try_from(program_counter.wrapping_add(*offset))?,
            )?;
            switch.set_entry(case_value, target);
        }
        switch.emit(function_builder, index, default_block);
    } else {
        // Cranelift's `Switch` helper targets argument-less blocks, but every block here was
        // created with parameters matching the stack at this point, so branch explicitly.
        for (offset_index, offset) in table_switch.offsets.iter().enumerate() {
            let case_value = table_switch.low.wrapping_add(i32::try_from(offset_index)?);
            let target = block_for(
                blocks,
                usize::try_from(program_counter.wrapping_add(*offset))?,
            )?;
            let case_constant = function_builder.ins().iconst(types::I32, i64::from(case_value));
            let matches = function_builder.ins().icmp(IntCC::Equal, index, case_constant);
            let next = function_builder.create_block();
            function_builder
                .ins()
                .brif(matches, target, &block_arguments, next, &[]);
            function_builder.seal_block(next);
            function_builder.switch_to_block(next);
        }
        function_builder.ins().jump(default_block, &block_arguments);
    }
    Ok(())
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.lookupswitch>
pub(crate) fn lookupswitch(
    function_builder: &mut FunctionBuilder,
    blocks: &AHashMap<usize, Block>,
    stack: &mut OperandStack,
    program_counter: usize,
    lookup_switch: &LookupSwitch,
) -> Result<()> {
    let index = stack.pop_int(function_builder)?;
    let program_counter = i32::try_from(program_counter)?;
    let default_block = block_for(
        blocks,
        usize::try_from(program_counter.wrapping_add(lookup_switch.default))?,
    )?;
    let block_arguments = stack.as_block_arguments();

    if block_arguments.is_empty() {
        let mut switch = Switch::new();
        for (key, offset) in &lookup_switch.pairs {
            let case_value = u128::from(u32::from_ne_bytes(key.to_ne_bytes()));
            let target = block_for(
                blocks,
                usize::try_from(program_counter.wrapping_add(*offset))?,
            )?;
            switch.set_entry(case_value, target);
        }
        switch.emit(function_builder, index, default_block);
    } else {
        // Cranelift's `Switch` helper targets argument-less blocks, but every block here was
        // created with parameters matching the stack at this point, so branch explicitly.
        for (key, offset) in &lookup_switch.pairs {
            let target = block_for(
                blocks,
                usize::try_from(program_counter.wrapping_add(*offset))?,
            )?;
            let case_constant = function_builder.ins().iconst(types::I32, i64::from(*key));
            let matches = function_builder.ins().icmp(IntCC::Equal, index, case_constant);
            let next = function_builder.create_block();
            function_builder
                .ins()
                .brif(matches, target, &block_arguments, next, &[]);
            function_builder.seal_block(next);
            function_builder.switch_to_block(next);
        }
        function_builder.ins().jump(default_block, &block_arguments);
    }
    Ok(())
}

/// See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.return>
pub(crate) fn r#return(
    function_builder: &mut FunctionBuilder,
    _stack: &mut OperandStack,
    _return_pointer: Value,
) {
    // This optimization relies on the fact that when returning from a "void" method, the default
    // return pointer values should be initialized to 0, which is the same as storing a NONE
    // discriminant, so there's nothing to write here.
    function_builder.ins().return_(&[]);
}
