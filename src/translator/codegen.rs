use thiserror::Error;

use crate::{
    dialect::Dialect,
    translator::ast::{mnemonic::Mnemonic, SourceLine, Statement},
};

use self::mapping::TRANSLATION_MAPPING;

/// Mapping from mnemonics to their C/C++ substitution text.
pub mod mapping;

/// Substring that triggers the loop wrapper heuristic. Checked against
/// the comment-stripped line text, not the parsed statement, so an
/// unparsable or unknown line still counts.
const LOOP_MARKER: &str = "jmp";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CodeGenError {
    #[error("Expected two comma-separated operands, got: '{0}'")]
    MalformedOperands(String),
    #[error("No substitution text for mnemonic: {0}")]
    UnmappedMnemonic(Mnemonic),
}

/// Split the operand text of a two-operand instruction into
/// (destination, source). Anything other than exactly one `", "`
/// separator is rejected.
fn split_operand_pair(operands: &str) -> Result<(&str, &str), CodeGenError> {
    let mut parts = operands.split(", ");
    match (parts.next(), parts.next(), parts.next()) {
        (Some(dst), Some(src), None) => Ok((dst, src)),
        _ => Err(CodeGenError::MalformedOperands(operands.to_string())),
    }
}

/// Render a single instruction as a line of C/C++.
#[tracing::instrument]
fn instruction_to_line(mnemonic: Mnemonic, operands: &str) -> Result<String, CodeGenError> {
    let substitution = match TRANSLATION_MAPPING.find_substitution(mnemonic) {
        Some(text) => text,
        None => return Err(CodeGenError::UnmappedMnemonic(mnemonic)),
    };

    Ok(match mnemonic {
        Mnemonic::Mov | Mnemonic::Add | Mnemonic::Sub => {
            let (dst, src) = split_operand_pair(operands)?;
            format!("    {} {} {};", dst, substitution, src)
        }
        // Conditional renderings carry no trailing semicolon; they read
        // as guards for whatever statement follows.
        Mnemonic::Cmp => format!("    if ({}) {}", operands, substitution),
        Mnemonic::Jnz => format!("    if ({} != 0) {}", operands, substitution),
        Mnemonic::Push | Mnemonic::Pop | Mnemonic::Call => {
            format!("    {} {};", substitution, operands)
        }
        Mnemonic::Ret => format!("    {}{};", substitution, operands),
    })
}

/// Accumulates the output lines of one translation run.
#[derive(Debug)]
pub struct CodeGen {
    dialect: Dialect,
    lines: Vec<String>,
    loop_opened: bool,
}

impl CodeGen {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            lines: Vec::new(),
            loop_opened: false,
        }
    }

    fn push_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn prologue(&mut self) {
        match self.dialect {
            Dialect::Cpp => {
                self.push_line("#include <iostream>");
                self.push_line("#include <cstdlib>");
                self.push_line("using namespace std;");
            }
            Dialect::C => {
                self.push_line("#include <stdio.h>");
                self.push_line("#include <stdlib.h>");
            }
        }

        self.push_line("");
        self.push_line("int main() {");
        self.push_line("    int* head = nullptr; // var_8");
        self.push_line("    int counter = 1; // var_C");
    }

    fn epilogue(&mut self) {
        self.push_line("    // Free allocated memory");
        self.push_line("    int* currentNode = head;");
        self.push_line("    while (currentNode != nullptr) {");
        self.push_line("        int* nextNode = reinterpret_cast<int*>(*(currentNode + 1));");
        self.push_line("        free(currentNode);");
        self.push_line("        currentNode = nextNode;");
        self.push_line("    }");
        self.push_line("    return 0;");
        self.push_line("}");
    }

    /// Open the loop wrapper ahead of the first line containing the
    /// jump marker. Subsequent markers have no effect.
    fn maybe_open_loop(&mut self, line: &SourceLine) {
        if !self.loop_opened && line.text.contains(LOOP_MARKER) {
            self.push_line("    while (counter <= 10) {");
            self.loop_opened = true;
        }
    }

    /// Render the program between the fixed prologue and epilogue.
    #[tracing::instrument]
    pub fn generate(&mut self, program: &[SourceLine]) -> Result<String, CodeGenError> {
        self.prologue();

        for line in program {
            self.maybe_open_loop(line);

            let rendered = match &line.statement {
                Statement::Instruction { mnemonic, operands } => {
                    instruction_to_line(*mnemonic, operands)?
                }
                Statement::UnknownInstruction => {
                    format!("    // Unknown instruction: {}", line.text)
                }
                Statement::Unparsable => format!("    // Cannot parse: {}", line.text),
            };
            self.lines.push(rendered);
        }

        if self.loop_opened {
            self.push_line("    }");
        }

        self.epilogue();

        Ok(self.lines.join("\n") + "\n")
    }
}
