use crate::util::create_function_with_constant_pool;
use cacao_classfile::ConstantPool;
use cacao_classfile::attributes::Instruction;
use cacao_jit::Value;

#[test]
fn ldc_integer() -> cacao_jit::Result<()> {
    let mut constant_pool = ConstantPool::new();
    let constant_index = constant_pool.add_integer(42)?;
    let instructions = vec![
        Instruction::Ldc(u8::try_from(constant_index)?),
        Instruction::Ireturn,
    ];
    let function = create_function_with_constant_pool(constant_pool, "()I", &instructions)?;
    let value = function.execute(vec![])?.expect("value");
    assert_eq!(value, Value::I32(42));
    Ok(())
}

#[test]
fn ldc_float() -> cacao_jit::Result<()> {
    let mut constant_pool = ConstantPool::new();
    let constant_index = constant_pool.add_float(42.1)?;
    let instructions = vec![
        Instruction::Ldc(u8::try_from(constant_index)?),
        Instruction::Freturn,
    ];
    let function = create_function_with_constant_pool(constant_pool, "()F", &instructions)?;
    let value = function.execute(vec![])?.expect("value");
    assert_eq!(value, Value::F32(42.1));
    Ok(())
}

#[test]
fn ldc_string() -> cacao_jit::Result<()> {
    let mut constant_pool = ConstantPool::new();
    let constant_index = constant_pool.add_string("foo")?;
    let instructions = vec![
        Instruction::Ldc(u8::try_from(constant_index)?),
        Instruction::Areturn,
    ];
    let result =
        create_function_with_constant_pool(constant_pool, "()Ljava/lang/String;", &instructions);
    assert!(result.is_err());
    Ok(())
}

#[test]
fn ldc_class() -> cacao_jit::Result<()> {
    let mut constant_pool = ConstantPool::new();
    let constant_index = constant_pool.add_class("Foo")?;
    let instructions = vec![
        Instruction::Ldc(u8::try_from(constant_index)?),
        Instruction::Areturn,
    ];
    let result =
        create_function_with_constant_pool(constant_pool, "()Ljava/lang/Object;", &instructions);
    assert!(result.is_err());
    Ok(())
}

#[test]
fn ldc_long_error() -> cacao_jit::Result<()> {
    let mut constant_pool = ConstantPool::new();
    let constant_index = constant_pool.add_long(42)?;
    let instructions = vec![
        Instruction::Ldc(u8::try_from(constant_index)?),
        Instruction::Lreturn,
    ];
    let result = create_function_with_constant_pool(constant_pool, "()J", &instructions);
    assert!(result.is_err());
    Ok(())
}

#[test]
fn ldc_w_integer() -> cacao_jit::Result<()> {
    let mut constant_pool = ConstantPool::new();
    let constant_index = constant_pool.add_integer(42)?;
    let instructions = vec![Instruction::Ldc_w(constant_index), Instruction::Ireturn];
    let function = create_function_with_constant_pool(constant_pool, "()I", &instructions)?;
    let value = function.execute(vec![])?.expect("value");
    assert_eq!(value, Value::I32(42));
    Ok(())
}

#[test]
fn ldc_w_float() -> cacao_jit::Result<()> {
    let mut constant_pool = ConstantPool::new();
    let constant_index = constant_pool.add_float(42.1)?;
    let instructions = vec![Instruction::Ldc_w(constant_index), Instruction::Freturn];
    let function = create_function_with_constant_pool(constant_pool, "()F", &instructions)?;
    let value = function.execute(vec![])?.expect("value");
    assert_eq!(value, Value::F32(42.1));
    Ok(())
}

#[test]
fn ldc_w_string() -> cacao_jit::Result<()> {
    let mut constant_pool = ConstantPool::new();
    let constant_index = constant_pool.add_string("foo")?;
    let instructions = vec![Instruction::Ldc_w(constant_index), Instruction::Areturn];
    let result =
        create_function_with_constant_pool(constant_pool, "()Ljava/lang/String;", &instructions);
    assert!(result.is_err());
    Ok(())
}

#[test]
fn ldc_w_class() -> cacao_jit::Result<()> {
    let mut constant_pool = ConstantPool::new();
    let constant_index = constant_pool.add_class("Foo")?;
    let instructions = vec![Instruction::Ldc_w(constant_index), Instruction::Areturn];
    let result =
        create_function_with_constant_pool(constant_pool, "()Ljava/lang/Object;", &instructions);
    assert!(result.is_err());
    Ok(())
}

#[test]
fn ldc_w_long_error() -> cacao_jit::Result<()> {
    let mut constant_pool = ConstantPool::new();
    let constant_index = constant_pool.add_long(42)?;
    let instructions = vec![Instruction::Ldc_w(constant_index), Instruction::Lreturn];
    let result = create_function_with_constant_pool(constant_pool, "()J", &instructions);
    assert!(result.is_err());
    Ok(())
}

#[test]
fn ldc2_w_long() -> cacao_jit::Result<()> {
    let mut constant_pool = ConstantPool::new();
    let constant_index = constant_pool.add_long(42)?;
    let instructions = vec![Instruction::Ldc2_w(constant_index), Instruction::Lreturn];
    let function = create_function_with_constant_pool(constant_pool, "()J", &instructions)?;
    let value = function.execute(vec![])?.expect("value");
    assert_eq!(value, Value::I64(42));
    Ok(())
}

#[test]
fn ldc2_w_double() -> cacao_jit::Result<()> {
    let mut constant_pool = ConstantPool::new();
    let constant_index = constant_pool.add_double(42.1)?;
    let instructions = vec![Instruction::Ldc2_w(constant_index), Instruction::Dreturn];
    let function = create_function_with_constant_pool(constant_pool, "()D", &instructions)?;
    let value = function.execute(vec![])?.expect("value");
    assert_eq!(value, Value::F64(42.1));
    Ok(())
}

#[test]
fn ldc2_w_integer_error() -> cacao_jit::Result<()> {
    let mut constant_pool = ConstantPool::new();
    let constant_index = constant_pool.add_integer(42)?;
    let instructions = vec![Instruction::Ldc2_w(constant_index), Instruction::Ireturn];
    let result = create_function_with_constant_pool(constant_pool, "()I", &instructions);
    assert!(result.is_err());
    Ok(())
}
