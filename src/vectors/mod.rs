pub mod fields;
pub mod format;
pub mod schema;
pub mod table;

use std::collections::HashSet;

use crate::error::{Error, Result};

pub use fields::InstructionFields;
pub use format::VectorFormatter;
pub use schema::{find_signal, Signal, INSTRUCTION_WIDTH, SIGNALS};
pub use table::{InstructionTest, INSTRUCTION_TESTS};

/// Validated set of instruction test cases
#[derive(Debug, Clone)]
pub struct VectorTable {
    tests: Vec<&'static InstructionTest>,
}

impl VectorTable {
    /// Validate every case against the signal schema
    pub fn load(tests: &'static [InstructionTest]) -> Result<Self> {
        for test in tests {
            validate(test)?;
        }
        tracing::debug!(cases = tests.len(), "loaded instruction test vectors");
        Ok(Self {
            tests: tests.iter().collect(),
        })
    }

    /// The built-in decoder table
    pub fn builtin() -> Result<Self> {
        Self::load(INSTRUCTION_TESTS)
    }

    pub fn tests(&self) -> &[&'static InstructionTest] {
        &self.tests
    }

    pub fn mnemonics(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tests.iter().map(|t| t.mnemonic)
    }

    /// Keep only the named instructions (case-insensitive). Unknown names are returned.
    pub fn retain_mnemonics(&mut self, wanted: &[String]) -> Vec<String> {
        let unknown = wanted
            .iter()
            .filter(|w| !self.tests.iter().any(|t| t.mnemonic.eq_ignore_ascii_case(w)))
            .cloned()
            .collect();
        self.tests
            .retain(|t| wanted.iter().any(|w| t.mnemonic.eq_ignore_ascii_case(w)));
        unknown
    }
}

/// Signal values for one case in schema order; unlisted signals render as `0`
pub fn row_values(test: &InstructionTest) -> Vec<&'static str> {
    SIGNALS
        .iter()
        .map(|signal| test.value(signal.name).unwrap_or("0"))
        .collect()
}

fn validate(test: &InstructionTest) -> Result<()> {
    let well_formed = test.encoding.len() == INSTRUCTION_WIDTH
        && test.encoding.bytes().all(|b| b == b'0' || b == b'1');
    if !well_formed {
        return Err(Error::InvalidEncoding {
            instruction: test.mnemonic.to_string(),
            encoding: test.encoding.to_string(),
        });
    }

    let mut seen = HashSet::new();
    for &(name, value) in test.signals {
        let signal = find_signal(name).ok_or_else(|| {
            Error::schema_mismatch(test.mnemonic, name, "is not a declared signal")
        })?;
        if !seen.insert(name) {
            return Err(Error::schema_mismatch(test.mnemonic, name, "is listed twice"));
        }
        if value.is_empty() || !value.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(Error::schema_mismatch(
                test.mnemonic,
                name,
                format!("has non-binary value '{}'", value),
            ));
        }
        if value.len() > signal.width {
            return Err(Error::schema_mismatch(
                test.mnemonic,
                name,
                format!(
                    "value '{}' is wider than {} bit(s)",
                    value, signal.width
                ),
            ));
        }
    }
    Ok(())
}
