use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::dialect::Dialect;

/// Statement types produced by the parser.
pub mod ast;

/// Renders statements as lines of C/C++ between the fixed prologue and
/// epilogue.
pub mod codegen;

/// Splits source lines into statements.
pub mod parser;

/// Name stem of the generated output file, written to the working
/// directory with the dialect's extension appended.
const OUTPUT_FILE_STEM: &str = "converted_code";

#[derive(Debug, thiserror::Error)]
pub enum TranslatorError {
    #[error("Code generation error: {0}")]
    CodeGen(#[from] codegen::CodeGenError),
}

/// Utility function for generating C/C++ source text from an assembly
/// program.
#[tracing::instrument]
pub fn translate_code(input: &str, dialect: Dialect) -> Result<String, TranslatorError> {
    let program = parser::parse_program(input);

    let mut codegen = codegen::CodeGen::new(dialect);
    let code = codegen.generate(&program)?;

    Ok(code)
}

#[derive(Args, Debug)]
pub struct TranslateArgs {
    #[clap(help = "Input file with assembly source text")]
    input: PathBuf,
}

#[tracing::instrument]
pub fn translate(args: &TranslateArgs) -> anyhow::Result<()> {
    let input = std::fs::read_to_string(&args.input)
        .with_context(|| format!("File '{}' not found", args.input.display()))?;

    let dialect = Dialect::detect(&input);
    let code = translate_code(&input, dialect)?;

    println!("Converted C/C++ Code:");
    println!("{}", code);

    let output_filename = format!("{}.{}", OUTPUT_FILE_STEM, dialect.file_extension());
    std::fs::write(&output_filename, &code).with_context(|| "Unable to write file")?;
    println!("Converted code has been saved to '{}'", output_filename);

    Ok(())
}
