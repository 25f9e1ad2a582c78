//! Fuzz test for the CHRONOREC line lexer
//!
//! Run with: cargo +nightly fuzz run lexer_fuzz -- -max_total_time=60

#![no_main]

use chronorec_dsl::{LineKind, Lexer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let tokens = Lexer::new(input).tokenize();

        // Splitting never yields zero lines, and numbering is dense from 1.
        assert!(!tokens.is_empty(), "Tokenization should produce at least one line");
        for (index, token) in tokens.iter().enumerate() {
            assert_eq!(token.line, index + 1, "Line numbers should be sequential");
            assert!(!token.text.contains('\n') && !token.text.contains('\r'));
            if token.text.is_empty() {
                assert_eq!(token.kind, LineKind::Blank);
            }
        }
    }
});
