/// Mnemonic of an instruction.
///
/// This represents the operation that is performed by the instruction.
/// Source text is matched case-sensitively, so only the lowercase
/// spellings parse.
#[derive(
    Debug, Hash, Eq, PartialEq, Clone, Copy, strum_macros::EnumString, strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum Mnemonic {
    Mov,
    Add,
    Sub,
    Push,
    Pop,
    Call,
    Ret,
    Cmp,
    Jnz,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_str() {
        let tests = vec![
            ("mov", Mnemonic::Mov),
            ("add", Mnemonic::Add),
            ("sub", Mnemonic::Sub),
            ("push", Mnemonic::Push),
            ("pop", Mnemonic::Pop),
            ("call", Mnemonic::Call),
            ("ret", Mnemonic::Ret),
            ("cmp", Mnemonic::Cmp),
            ("jnz", Mnemonic::Jnz),
        ];

        for (input, expected) in tests {
            assert_eq!(Mnemonic::from_str(input), Ok(expected));
        }
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert!(Mnemonic::from_str("MOV").is_err());
        assert!(Mnemonic::from_str("Mov").is_err());
    }

    #[test]
    fn test_from_str_unknown() {
        assert!(Mnemonic::from_str("jmp").is_err());
        assert!(Mnemonic::from_str("xor").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Mnemonic::Mov.to_string(), "mov");
        assert_eq!(Mnemonic::Jnz.to_string(), "jnz");
    }
}
