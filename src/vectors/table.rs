/// Expected decoder outputs for one instruction word
///
/// Signals not listed are expected to be zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionTest {
    pub mnemonic: &'static str,
    /// 32 binary digits, most significant bit first
    pub encoding: &'static str,
    pub signals: &'static [(&'static str, &'static str)],
}

impl InstructionTest {
    /// Expected value of a signal, `None` when it defaults to zero
    pub fn value(&self, signal: &str) -> Option<&'static str> {
        self.signals
            .iter()
            .find(|(name, _)| *name == signal)
            .map(|(_, value)| *value)
    }
}

/// Hand-encoded decoder test cases. Comments give the fields each encoding carries.
pub const INSTRUCTION_TESTS: &[InstructionTest] = &[
    // ADDIU: op=001001 rs=$10 rt=$9 imm=0x0532
    InstructionTest {
        mnemonic: "ADDIU",
        encoding: "00100101010010010000010100110010",
        signals: &[
            ("IsImmediate", "1"),
            ("Immediate", "0000010100110010"),
            ("ALUOpCode", "0010"),
            ("ImmediateSelect", "1"),
            ("ImmSignExt", "1"),
            ("Ra", "01010"),
            ("Rd", "01001"),
        ],
    },
    // ANDI: op=001100 rs=$18 rt=$12 imm=0x0123
    InstructionTest {
        mnemonic: "ANDI",
        encoding: "00110010010011000000000100100011",
        signals: &[
            ("IsImmediate", "1"),
            ("Immediate", "0000000100100011"),
            ("ALUOpCode", "1000"),
            ("ImmediateSelect", "1"),
            ("Ra", "10010"),
            ("Rd", "01100"),
        ],
    },
    // ORI: op=001101 rs=$13 rt=$22 imm=0x046a
    InstructionTest {
        mnemonic: "ORI",
        encoding: "00110101101101100000010001101010",
        signals: &[
            ("IsImmediate", "1"),
            ("Immediate", "0000010001101010"),
            ("ALUOpCode", "1010"),
            ("ImmediateSelect", "1"),
            ("Ra", "01101"),
            ("Rd", "10110"),
        ],
    },
    // XORI: op=001110 rs=$13 rt=$22 imm=0x046a
    InstructionTest {
        mnemonic: "XORI",
        encoding: "00111001101101100000010001101010",
        signals: &[
            ("IsImmediate", "1"),
            ("Immediate", "0000010001101010"),
            ("ALUOpCode", "1100"),
            ("ImmediateSelect", "1"),
            ("Ra", "01101"),
            ("Rd", "10110"),
        ],
    },
    // SLTI: op=001010 rs=$13 rt=$22 imm=0x046a
    InstructionTest {
        mnemonic: "SLTI",
        encoding: "00101001101101100000010001101010",
        signals: &[
            ("IsImmediate", "1"),
            ("Immediate", "0000010001101010"),
            ("ImmediateSelect", "1"),
            ("ImmSignExt", "1"),
            ("CompSign", "1"),
            ("Ra", "01101"),
            ("Rd", "10110"),
            ("ExecOut", "10"),
        ],
    },
    // SLTIU: op=001011 rs=$13 rt=$22 imm=0x046a
    InstructionTest {
        mnemonic: "SLTIU",
        encoding: "00101101101101100000010001101010",
        signals: &[
            ("IsImmediate", "1"),
            ("Immediate", "0000010001101010"),
            ("ImmediateSelect", "1"),
            ("ImmSignExt", "1"),
            ("Ra", "01101"),
            ("Rd", "10110"),
            ("ExecOut", "10"),
        ],
    },
    // ADDU: funct=100001 rs=$13 rt=$9 rd=$22
    InstructionTest {
        mnemonic: "ADDU",
        encoding: "00000001101010011011000000100001",
        signals: &[
            ("IsRegister", "1"),
            ("ALUOpCode", "0010"),
            ("Ra", "01101"),
            ("Rb", "01001"),
            ("Rd", "10110"),
            ("FuncField", "1"),
        ],
    },
    // SUBU: funct=100011 rs=$13 rt=$9 rd=$22
    InstructionTest {
        mnemonic: "SUBU",
        encoding: "00000001101010011011000000100011",
        signals: &[
            ("IsRegister", "1"),
            ("ALUOpCode", "0111"),
            ("Ra", "01101"),
            ("Rb", "01001"),
            ("Rd", "10110"),
            ("FuncField", "1"),
        ],
    },
    // AND: funct=100100 rs=$13 rt=$9 rd=$22
    InstructionTest {
        mnemonic: "AND",
        encoding: "00000001101010011011000000100100",
        signals: &[
            ("IsRegister", "1"),
            ("ALUOpCode", "1000"),
            ("Ra", "01101"),
            ("Rb", "01001"),
            ("Rd", "10110"),
            ("FuncField", "1"),
        ],
    },
    // OR: funct=100101 rs=$13 rt=$9 rd=$22
    InstructionTest {
        mnemonic: "OR",
        encoding: "00000001101010011011000000100101",
        signals: &[
            ("IsRegister", "1"),
            ("ALUOpCode", "1010"),
            ("Ra", "01101"),
            ("Rb", "01001"),
            ("Rd", "10110"),
            ("FuncField", "1"),
        ],
    },
    // XOR: funct=100110 rs=$13 rt=$9 rd=$22
    InstructionTest {
        mnemonic: "XOR",
        encoding: "00000001101010011011000000100110",
        signals: &[
            ("IsRegister", "1"),
            ("ALUOpCode", "1100"),
            ("Ra", "01101"),
            ("Rb", "01001"),
            ("Rd", "10110"),
            ("FuncField", "1"),
        ],
    },
    // NOR: funct=100111 rs=$13 rt=$9 rd=$22
    InstructionTest {
        mnemonic: "NOR",
        encoding: "00000001101010011011000000100111",
        signals: &[
            ("IsRegister", "1"),
            ("ALUOpCode", "1110"),
            ("Ra", "01101"),
            ("Rb", "01001"),
            ("Rd", "10110"),
            ("FuncField", "1"),
        ],
    },
    // SLT: funct=101010 rs=$13 rt=$9 rd=$22
    InstructionTest {
        mnemonic: "SLT",
        encoding: "00000001101010011011000000101010",
        signals: &[
            ("IsRegister", "1"),
            ("CompSign", "1"),
            ("Ra", "01101"),
            ("Rb", "01001"),
            ("Rd", "10110"),
            ("FuncField", "1"),
            ("ExecOut", "10"),
        ],
    },
    // SLTU: funct=101011 rs=$13 rt=$9 rd=$22
    InstructionTest {
        mnemonic: "SLTU",
        encoding: "00000001101010011011000000101011",
        signals: &[
            ("IsRegister", "1"),
            ("Ra", "01101"),
            ("Rb", "01001"),
            ("Rd", "10110"),
            ("FuncField", "1"),
            ("ExecOut", "10"),
        ],
    },
    // MOVN: funct=001011 rs=$13 rt=$9 rd=$22
    InstructionTest {
        mnemonic: "MOVN",
        encoding: "00000001101010011011000000001011",
        signals: &[
            ("IsRegister", "1"),
            ("ALUOpCode", "1011"),
            ("Ra", "01101"),
            ("Rb", "01001"),
            ("Rd", "10110"),
            ("FuncField", "1"),
            ("ASelect", "01"),
            ("ExecOut", "01"),
        ],
    },
    // MOVZ: funct=001010 rs=$13 rt=$9 rd=$22
    InstructionTest {
        mnemonic: "MOVZ",
        encoding: "00000001101010011011000000001010",
        signals: &[
            ("IsRegister", "1"),
            ("ALUOpCode", "1001"),
            ("Ra", "01101"),
            ("Rb", "01001"),
            ("Rd", "10110"),
            ("FuncField", "1"),
            ("ASelect", "01"),
            ("ExecOut", "01"),
        ],
    },
    // SLL: funct=000000 rs=$0 rt=$13 rd=$22 shamt=5
    InstructionTest {
        mnemonic: "SLL",
        encoding: "00000000000011011011000101000000",
        signals: &[
            ("IsRegister", "1"),
            ("ALUOpCode", "0001"),
            ("ShiftAmount", "00101"),
            ("Rb", "01101"),
            ("Rd", "10110"),
            ("SaControl", "10"),
            ("FuncField", "1"),
        ],
    },
    // SRL: funct=000010 rs=$0 rt=$13 rd=$22 shamt=5
    InstructionTest {
        mnemonic: "SRL",
        encoding: "00000000000011011011000101000010",
        signals: &[
            ("IsRegister", "1"),
            ("ALUOpCode", "0100"),
            ("ShiftAmount", "00101"),
            ("Rb", "01101"),
            ("Rd", "10110"),
            ("SaControl", "10"),
            ("FuncField", "1"),
        ],
    },
    // SRA: funct=000011 rs=$0 rt=$13 rd=$22 shamt=5
    InstructionTest {
        mnemonic: "SRA",
        encoding: "00000000000011011011000101000011",
        signals: &[
            ("IsRegister", "1"),
            ("ALUOpCode", "0101"),
            ("ShiftAmount", "00101"),
            ("Rb", "01101"),
            ("Rd", "10110"),
            ("SaControl", "10"),
            ("FuncField", "1"),
        ],
    },
    // SLLV: funct=000100 rs=$23 rt=$13 rd=$22
    InstructionTest {
        mnemonic: "SLLV",
        encoding: "00000010111011011011000000000100",
        signals: &[
            ("IsRegister", "1"),
            ("ALUOpCode", "0001"),
            ("Ra", "10111"),
            ("Rb", "01101"),
            ("Rd", "10110"),
            ("SaControl", "11"),
            ("FuncField", "1"),
        ],
    },
    // SRLV: funct=000110 rs=$23 rt=$13 rd=$22
    InstructionTest {
        mnemonic: "SRLV",
        encoding: "00000010111011011011000000000110",
        signals: &[
            ("IsRegister", "1"),
            ("ALUOpCode", "0100"),
            ("Ra", "10111"),
            ("Rb", "01101"),
            ("Rd", "10110"),
            ("SaControl", "11"),
            ("FuncField", "1"),
        ],
    },
    // SRAV: funct=000111 rs=$23 rt=$13 rd=$22
    InstructionTest {
        mnemonic: "SRAV",
        encoding: "00000010111011011011000000000111",
        signals: &[
            ("IsRegister", "1"),
            ("ALUOpCode", "0101"),
            ("Ra", "10111"),
            ("Rb", "01101"),
            ("Rd", "10110"),
            ("SaControl", "11"),
            ("FuncField", "1"),
        ],
    },
    // LUI: op=001111 rs=$0 rt=$13 imm=0x0123
    InstructionTest {
        mnemonic: "LUI",
        encoding: "00111100000011010000000100100011",
        signals: &[
            ("IsImmediate", "1"),
            ("ImmediateSelect", "1"),
            ("Immediate", "0000000100100011"),
            ("Rd", "01101"),
            ("SaControl", "01"),
        ],
    },
    // J: op=000010 target=0x0000123
    InstructionTest {
        mnemonic: "J",
        encoding: "00001000000000000000000100100011",
        signals: &[
            ("IsJump", "1"),
            ("IsTableB", "1"),
            ("JumpTarget", "00000000000000000100100011"),
            ("PCSelect", "10"),
        ],
    },
    // JR: funct=001000 rs=$19 rt=$0 rd=$0
    InstructionTest {
        mnemonic: "JR",
        encoding: "00000010011000000000000000001000",
        signals: &[
            ("IsJump", "1"),
            ("IsTableB", "1"),
            ("Ra", "10011"),
            ("PCSelect", "01"),
            ("FuncField", "1"),
        ],
    },
    // JAL: op=000011 target=0x0000123
    InstructionTest {
        mnemonic: "JAL",
        encoding: "00001100000000000000000100100011",
        signals: &[
            ("IsJump", "1"),
            ("IsTableB", "1"),
            ("JumpTarget", "00000000000000000100100011"),
            ("Rd", "11111"),
            ("PCSelect", "10"),
            ("ExecOut", "11"),
        ],
    },
    // JALR: funct=001001 rs=$11 rt=$0 rd=$19
    InstructionTest {
        mnemonic: "JALR",
        encoding: "00000001011000001001100000001001",
        signals: &[
            ("IsJump", "1"),
            ("IsTableB", "1"),
            ("Ra", "01011"),
            ("Rd", "10011"),
            ("PCSelect", "01"),
            ("FuncField", "1"),
            ("ExecOut", "11"),
        ],
    },
    // Branch rows carry CompSign as the single bit `1`. Fixtures generated
    // before the width check print it as `01`; both mean the same bit.
    // BEQ: op=000100 rs=$9 rt=$19 imm=0x0123
    InstructionTest {
        mnemonic: "BEQ",
        encoding: "00010001001100110000000100100011",
        signals: &[
            ("IsBranch", "1"),
            ("IsTableB", "1"),
            ("Offset", "0000000100100011"),
            ("ImmediateSelect", "1"),
            ("ImmSignExt", "1"),
            ("ALUOpCode", "0011"),
            ("Ra", "01001"),
            ("Rb", "10011"),
            ("BranchSelect", "101"),
            ("CompSign", "1"), // `01` in older fixtures
            ("PCSelect", "11"),
            ("ASelect", "10"),
        ],
    },
    // BNE: op=000101 rs=$9 rt=$19 imm=0x0123
    InstructionTest {
        mnemonic: "BNE",
        encoding: "00010101001100110000000100100011",
        signals: &[
            ("IsBranch", "1"),
            ("IsTableB", "1"),
            ("Offset", "0000000100100011"),
            ("ImmediateSelect", "1"),
            ("ImmSignExt", "1"),
            ("ALUOpCode", "0011"),
            ("Ra", "01001"),
            ("Rb", "10011"),
            ("BranchSelect", "110"),
            ("CompSign", "1"), // `01` in older fixtures
            ("PCSelect", "11"),
            ("ASelect", "10"),
        ],
    },
    // BLEZ: op=000110 rs=$9 rt=$0 imm=0x0123
    InstructionTest {
        mnemonic: "BLEZ",
        encoding: "00011001001000000000000100100011",
        signals: &[
            ("IsBranch", "1"),
            ("IsTableB", "1"),
            ("Offset", "0000000100100011"),
            ("ImmediateSelect", "1"),
            ("ImmSignExt", "1"),
            ("ALUOpCode", "0011"),
            ("Ra", "01001"),
            ("BranchSelect", "100"),
            ("CompSign", "1"), // `01` in older fixtures
            ("PCSelect", "11"),
            ("ASelect", "10"),
        ],
    },
    // BGTZ: op=000111 rs=$9 rt=$0 imm=0x0123
    InstructionTest {
        mnemonic: "BGTZ",
        encoding: "00011101001000000000000100100011",
        signals: &[
            ("IsBranch", "1"),
            ("IsTableB", "1"),
            ("Offset", "0000000100100011"),
            ("ImmediateSelect", "1"),
            ("ImmSignExt", "1"),
            ("ALUOpCode", "0011"),
            ("Ra", "01001"),
            ("BranchSelect", "001"),
            ("CompSign", "1"), // `01` in older fixtures
            ("PCSelect", "11"),
            ("ASelect", "10"),
        ],
    },
    // BLTZ: op=000001 rs=$9 rt=00000 imm=0x0123
    InstructionTest {
        mnemonic: "BLTZ",
        encoding: "00000101001000000000000100100011",
        signals: &[
            ("IsBranch", "1"),
            ("IsTableB", "1"),
            ("Offset", "0000000100100011"),
            ("ImmediateSelect", "1"),
            ("ImmSignExt", "1"),
            ("ALUOpCode", "0011"),
            ("Ra", "01001"),
            ("BranchSelect", "010"),
            ("CompSign", "1"), // `01` in older fixtures
            ("PCSelect", "11"),
            ("ASelect", "10"),
        ],
    },
    // BGEZ: op=000001 rs=$9 rt=00001 imm=0x0123
    InstructionTest {
        mnemonic: "BGEZ",
        encoding: "00000101001000010000000100100011",
        signals: &[
            ("IsBranch", "1"),
            ("IsTableB", "1"),
            ("Offset", "0000000100100011"),
            ("ImmediateSelect", "1"),
            ("ImmSignExt", "1"),
            ("ALUOpCode", "0011"),
            ("Ra", "01001"),
            ("BranchSelect", "011"),
            ("CompSign", "1"), // `01` in older fixtures
            ("PCSelect", "11"),
            ("ASelect", "10"),
        ],
    },
    // LW: op=100011 rs=$19 rt=$11 imm=0x0123
    InstructionTest {
        mnemonic: "LW",
        encoding: "10001110011010110000000100100011",
        signals: &[
            ("IsTableB", "1"),
            ("IsMem", "1"),
            ("Offset", "0000000100100011"),
            ("ALUOpCode", "0011"),
            ("ImmediateSelect", "1"),
            ("ImmSignExt", "1"),
            ("Ra", "10011"),
            ("Rb", "01011"),
            ("Rd", "01011"),
            ("MemLoad", "1"),
            ("MemWord", "1"),
        ],
    },
    // LB: op=100000 rs=$19 rt=$11 imm=0x0123
    InstructionTest {
        mnemonic: "LB",
        encoding: "10000010011010110000000100100011",
        signals: &[
            ("IsTableB", "1"),
            ("IsMem", "1"),
            ("Offset", "0000000100100011"),
            ("MemSignExt", "1"),
            ("ALUOpCode", "0011"),
            ("ImmediateSelect", "1"),
            ("ImmSignExt", "1"),
            ("Ra", "10011"),
            ("Rb", "01011"),
            ("Rd", "01011"),
            ("MemLoad", "1"),
        ],
    },
    // LBU: op=100100 rs=$19 rt=$11 imm=0x0123
    InstructionTest {
        mnemonic: "LBU",
        encoding: "10010010011010110000000100100011",
        signals: &[
            ("IsTableB", "1"),
            ("IsMem", "1"),
            ("Offset", "0000000100100011"),
            ("ALUOpCode", "0011"),
            ("ImmediateSelect", "1"),
            ("ImmSignExt", "1"),
            ("Ra", "10011"),
            ("Rb", "01011"),
            ("Rd", "01011"),
            ("MemLoad", "1"),
        ],
    },
    // SW: op=101011 rs=$19 rt=$11 imm=0x0123
    InstructionTest {
        mnemonic: "SW",
        encoding: "10101110011010110000000100100011",
        signals: &[
            ("IsTableB", "1"),
            ("IsMem", "1"),
            ("Offset", "0000000100100011"),
            ("ALUOpCode", "0011"),
            ("ImmediateSelect", "1"),
            ("ImmSignExt", "1"),
            ("Ra", "10011"),
            ("Rb", "01011"),
            ("Rd", "01011"),
            ("MemWord", "1"),
            ("MemStore", "1"),
        ],
    },
    // SB: op=101000 rs=$19 rt=$11 imm=0x0123
    InstructionTest {
        mnemonic: "SB",
        encoding: "10100010011010110000000100100011",
        signals: &[
            ("IsTableB", "1"),
            ("IsMem", "1"),
            ("Offset", "0000000100100011"),
            ("ALUOpCode", "0011"),
            ("ImmediateSelect", "1"),
            ("ImmSignExt", "1"),
            ("Ra", "10011"),
            ("Rb", "01011"),
            ("Rd", "01011"),
            ("MemStore", "1"),
        ],
    },
];
