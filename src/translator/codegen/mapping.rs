use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::translator::ast::mnemonic::Mnemonic;

/// A mapper between instruction mnemonics and their C/C++ substitution
/// text. Built once and immutable for the process lifetime.
#[derive(Debug)]
pub struct TranslationMapping {
    map: HashMap<Mnemonic, &'static str>,
}

impl TranslationMapping {
    /// Find the substitution text for the given mnemonic.
    #[tracing::instrument]
    pub fn find_substitution(&self, mnemonic: Mnemonic) -> Option<&'static str> {
        self.map.get(&mnemonic).copied()
    }

    #[tracing::instrument]
    fn new() -> Self {
        let mappings = vec![
            (Mnemonic::Mov, "="),
            (Mnemonic::Add, "+="),
            (Mnemonic::Sub, "-="),
            (Mnemonic::Push, "// push"),
            (Mnemonic::Pop, "// pop"),
            (Mnemonic::Call, "// call"),
            (Mnemonic::Ret, "return"),
            (Mnemonic::Cmp, "// compare"),
            (Mnemonic::Jnz, "// jump if not zero"),
        ];

        let mut map = HashMap::new();
        for (mnemonic, text) in mappings {
            map.insert(mnemonic, text);
        }

        Self { map }
    }
}

lazy_static! {
    pub static ref TRANSLATION_MAPPING: TranslationMapping = TranslationMapping::new();
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_mnemonic_is_mapped() {
        let mnemonics = vec![
            Mnemonic::Mov,
            Mnemonic::Add,
            Mnemonic::Sub,
            Mnemonic::Push,
            Mnemonic::Pop,
            Mnemonic::Call,
            Mnemonic::Ret,
            Mnemonic::Cmp,
            Mnemonic::Jnz,
        ];

        for mnemonic in mnemonics {
            assert!(TRANSLATION_MAPPING.find_substitution(mnemonic).is_some());
        }
    }

    #[test]
    fn test_find_substitution() {
        assert_eq!(
            TRANSLATION_MAPPING.find_substitution(Mnemonic::Mov),
            Some("=")
        );
        assert_eq!(
            TRANSLATION_MAPPING.find_substitution(Mnemonic::Ret),
            Some("return")
        );
    }
}
