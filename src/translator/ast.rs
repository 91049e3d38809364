use self::mnemonic::Mnemonic;

/// Instruction mnemonics known to the translator.
pub mod mnemonic;

/// Statement derived from a single source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A recognized mnemonic together with its raw operand text.
    ///
    /// The operand text is kept verbatim; splitting into individual
    /// operands happens during code generation where the instruction
    /// shape is known.
    Instruction {
        mnemonic: Mnemonic,
        operands: String,
    },
    /// The leading word is not a recognized mnemonic.
    UnknownInstruction,
    /// The line does not match the leading word grammar.
    Unparsable,
}

/// A comment-stripped, non-empty source line and its parsed statement.
///
/// The stripped text is kept next to the statement since the loop
/// wrapper heuristic and the fallback renderings work on the raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub text: String,
    pub statement: Statement,
}

impl SourceLine {
    pub fn new(text: &str, statement: Statement) -> Self {
        Self {
            text: text.to_string(),
            statement,
        }
    }

    pub fn new_instruction(text: &str, mnemonic: Mnemonic, operands: &str) -> Self {
        Self::new(
            text,
            Statement::Instruction {
                mnemonic,
                operands: operands.to_string(),
            },
        )
    }
}
