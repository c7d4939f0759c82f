use std::io::{self, Write};

use super::schema::{INSTRUCTION_WIDTH, SIGNALS};
use super::table::InstructionTest;
use super::{row_values, VectorTable};

/// Formatter for the test-vector report: a header line, then one row per instruction
pub struct VectorFormatter {
    annotate: bool,
}

impl VectorFormatter {
    pub fn new() -> Self {
        Self { annotate: false }
    }

    /// Precede each row with a `# MNEMONIC` comment line
    pub fn annotate(mut self, value: bool) -> Self {
        self.annotate = value;
        self
    }

    /// `Instruction[32] Name[width] ...`, every field space-terminated
    pub fn header(&self) -> String {
        let mut line = format!("Instruction[{}] ", INSTRUCTION_WIDTH);
        for signal in SIGNALS {
            line.push_str(&format!("{}[{}] ", signal.name, signal.width));
        }
        line
    }

    /// Encoding followed by every signal value in schema order
    pub fn row(&self, test: &InstructionTest) -> String {
        let mut line = format!("{} ", test.encoding);
        for value in row_values(test) {
            line.push_str(value);
            line.push(' ');
        }
        line
    }

    pub fn format(&self, table: &VectorTable) -> String {
        let mut output = Vec::new();
        self.write_to(table, &mut output)
            .expect("writing to a Vec cannot fail");
        String::from_utf8_lossy(&output).into_owned()
    }

    pub fn write_to<W: Write>(&self, table: &VectorTable, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.header())?;
        for test in table.tests() {
            if self.annotate {
                writeln!(out, "# {}", test.mnemonic)?;
            }
            writeln!(out, "{}", self.row(test))?;
        }
        Ok(())
    }
}

impl Default for VectorFormatter {
    fn default() -> Self {
        Self::new()
    }
}
