/// Transforms assembly-like source text into C or C++ source text.
///
/// The steps are:
/// 1. **Parsing** - converting each source line into a statement
/// 2. **Code generation** - rendering the statements as lines of C/C++
///    between a fixed prologue and epilogue
pub mod translator;

/// Output dialect selection, decided once per run.
pub mod dialect;
