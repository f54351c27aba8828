#![no_main]

use libfuzzer_sys::fuzz_target;
use sunjar::{diagnostics, lexer};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let tokens = lexer::tokenize(s);
        assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
        assert!(tokens.last().is_some_and(|t| t.is_eof()));

        // The diagnostics pass must agree with the one-shot entry point.
        let errors = diagnostics::check(&tokens);
        assert_eq!(lexer::lex(s).is_ok(), errors.is_empty());
    }
});
