//! Hardware-trap encoding for faults raised by generated code.
//!
//! A null check, an array-bounds check, or a division-by-zero check all compile down to the
//! same shape: a conditional Cranelift trap carrying a small integer payload in
//! [`TrapCode::user`]. The host process that loads and calls JIT-compiled code owns the signal
//! handler that recovers this payload from the faulting instruction and turns it into a Java
//! exception object, walks the stackframe-info chain, or resumes through the patcher — this
//! core's job stops at encoding which kind of fault occurred, the same boundary this core
//! already keeps around class resolution and garbage collection.
//!
//! See: <https://docs.oracle.com/javase/specs/jvms/se24/html/jvms-6.html#jvms-6.5.idiv>

use cranelift::codegen::ir::TrapCode;
use cranelift::prelude::{FunctionBuilder, InstBuilder, Value};

/// Fault categories the code generator can signal via a trap instruction.
///
/// The discriminants are the values the signal handler reads back out of the faulting
/// instruction's encoded trap code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TrapKind {
    NullPointerException,
    ArithmeticException,
    ArrayIndexOutOfBounds,
    ArrayStoreException,
    ClassCastException,
    CheckException,
    Patcher,
    Compiler,
}

impl TrapKind {
    const fn raw(self) -> u8 {
        match self {
            Self::NullPointerException => 1,
            Self::ArithmeticException => 2,
            Self::ArrayIndexOutOfBounds => 3,
            Self::ArrayStoreException => 4,
            Self::ClassCastException => 5,
            Self::CheckException => 6,
            Self::Patcher => 7,
            Self::Compiler => 8,
        }
    }

    /// The `TrapCode` to attach to a `trap`/`trapz`/`trapnz` instruction for this kind.
    pub(crate) fn code(self) -> TrapCode {
        TrapCode::user(self.raw()).expect("trap kind raw values are non-zero")
    }
}

impl TryFrom<u8> for TrapKind {
    type Error = crate::Error;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            1 => Ok(Self::NullPointerException),
            2 => Ok(Self::ArithmeticException),
            3 => Ok(Self::ArrayIndexOutOfBounds),
            4 => Ok(Self::ArrayStoreException),
            5 => Ok(Self::ClassCastException),
            6 => Ok(Self::CheckException),
            7 => Ok(Self::Patcher),
            8 => Ok(Self::Compiler),
            _ => Err(crate::Error::InternalError(format!(
                "unknown trap kind: {raw}"
            ))),
        }
    }
}

/// Emits a trap of `kind` if `condition` is non-zero.
pub(crate) fn trap_if(function_builder: &mut FunctionBuilder, condition: Value, kind: TrapKind) {
    function_builder.ins().trapnz(condition, kind.code());
}

/// Emits a trap of `kind` if `condition` is zero.
pub(crate) fn trap_if_zero(function_builder: &mut FunctionBuilder, condition: Value, kind: TrapKind) {
    function_builder.ins().trapz(condition, kind.code());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trap_kind_round_trips_through_raw() {
        let kinds = [
            TrapKind::NullPointerException,
            TrapKind::ArithmeticException,
            TrapKind::ArrayIndexOutOfBounds,
            TrapKind::ArrayStoreException,
            TrapKind::ClassCastException,
            TrapKind::CheckException,
            TrapKind::Patcher,
            TrapKind::Compiler,
        ];
        for kind in kinds {
            assert_eq!(TrapKind::try_from(kind.raw()).expect("known kind"), kind);
        }
    }

    #[test]
    fn test_unknown_raw_trap_kind_is_an_error() {
        assert!(TrapKind::try_from(0).is_err());
        assert!(TrapKind::try_from(9).is_err());
    }
}
