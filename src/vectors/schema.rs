/// One decoded control output and its width in bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signal {
    pub name: &'static str,
    pub width: usize,
}

const fn signal(name: &'static str, width: usize) -> Signal {
    Signal { name, width }
}

/// Width of the instruction column
pub const INSTRUCTION_WIDTH: usize = 32;

/// Control outputs in column order
pub const SIGNALS: &[Signal] = &[
    signal("IsImmediate", 1),
    signal("IsRegister", 1),
    signal("IsTableB", 1),
    signal("IsJump", 1),
    signal("IsBranch", 1),
    signal("IsMem", 1),
    signal("Immediate", 16),
    signal("Offset", 16),
    signal("JumpTarget", 26),
    signal("ShiftAmount", 5),
    signal("ALUOpCode", 4),
    signal("ImmediateSelect", 1),
    signal("ImmSignExt", 1),
    signal("CompSign", 1),
    signal("Ra", 5),
    signal("Rb", 5),
    signal("Rd", 5),
    signal("PCSelect", 2),
    signal("BranchSelect", 3),
    signal("MemLoad", 1),
    signal("MemStore", 1),
    signal("MemWord", 1),
    signal("MemSignExt", 1),
    signal("FuncField", 1),
    signal("SaControl", 2),
    signal("ASelect", 2),
    signal("ExecOut", 2),
];

pub fn find_signal(name: &str) -> Option<&'static Signal> {
    SIGNALS.iter().find(|s| s.name == name)
}
