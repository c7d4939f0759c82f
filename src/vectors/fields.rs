/// Bit fields of a 32-bit instruction word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionFields {
    pub opcode: u32,
    pub rs: u32,
    pub rt: u32,
    pub rd: u32,
    pub shamt: u32,
    pub funct: u32,
    pub imm16: u32,
    pub target: u32,
}

/// Opcode shared by all register-format (SPECIAL) instructions
pub const OPCODE_SPECIAL: u32 = 0b000000;

impl InstructionFields {
    /// Split a 32-digit binary string into its fields
    pub fn decode(encoding: &str) -> Option<Self> {
        if encoding.len() != 32 {
            return None;
        }
        let word = u32::from_str_radix(encoding, 2).ok()?;
        Some(Self::from_word(word))
    }

    pub fn from_word(word: u32) -> Self {
        Self {
            opcode: word >> 26,
            rs: (word >> 21) & 0x1f,
            rt: (word >> 16) & 0x1f,
            rd: (word >> 11) & 0x1f,
            shamt: (word >> 6) & 0x1f,
            funct: word & 0x3f,
            imm16: word & 0xffff,
            target: word & 0x03ff_ffff,
        }
    }

    pub fn is_special(&self) -> bool {
        self.opcode == OPCODE_SPECIAL
    }
}

/// Zero-padded binary rendering of the low `width` bits
pub fn to_bits(value: u32, width: usize) -> String {
    format!("{:0width$b}", value, width = width)
}
