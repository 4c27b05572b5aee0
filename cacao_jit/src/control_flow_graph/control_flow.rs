use cacao_classfile::attributes::Instruction;

/// Defines behavior for determining if an instruction changes control flow.
///
/// This trait provides a standard way to analyze whether Java bytecode instructions
/// will alter the normal sequential execution of instructions through jumps,
/// branches, returns, or exceptions.
pub(crate) trait InstructionControlFlow {
    /// Returns true if the instruction changes the program control flow.
    ///
    /// Control flow changing instructions include:
    /// - Conditional branches (if_* instructions)
    /// - Unconditional jumps (goto)
    /// - Subroutine calls and returns (jsr, ret)
    /// - Method returns (return, *return)
    /// - Exception throws (athrow)
    /// - Switch statements (tableswitch, lookupswitch)
    fn changes_control_flow(&self) -> bool;
}

impl InstructionControlFlow for Instruction {
    /// Returns true if the instruction changes the program control flow.
    fn changes_control_flow(&self) -> bool {
        matches!(
            self,
            Instruction::Ifeq(..)
                | Instruction::Ifne(..)
                | Instruction::Iflt(..)
                | Instruction::Ifge(..)
                | Instruction::Ifgt(..)
                | Instruction::Ifle(..)
                | Instruction::If_icmpeq(..)
                | Instruction::If_icmpne(..)
                | Instruction::If_icmplt(..)
                | Instruction::If_icmpge(..)
                | Instruction::If_icmpgt(..)
                | Instruction::If_icmple(..)
                | Instruction::If_acmpeq(..)
                | Instruction::If_acmpne(..)
                | Instruction::Goto(..)
                | Instruction::Goto_w(..)
                | Instruction::Jsr(..)
                | Instruction::Jsr_w(..)
                | Instruction::Tableswitch { .. }
                | Instruction::Lookupswitch { .. }
                | Instruction::Ret(..)
                | Instruction::Ret_w(..)
                | Instruction::Return
                | Instruction::Ireturn
                | Instruction::Lreturn
                | Instruction::Freturn
                | Instruction::Dreturn
                | Instruction::Areturn
                | Instruction::Athrow
        )
    }
}
