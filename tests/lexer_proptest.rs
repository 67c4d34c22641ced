//! Property-based tests for the built-in lexers
//!
//! These tests check that arbitrary input, and input stitched together from TP fragments, is
//! always tokenized totally: every byte ends up in exactly one non-empty token, unrecognised
//! characters come out one at a time, and nothing depends on anything but the input.

use proptest::prelude::*;
use tplex::highlight::formats::detokenize;
use tplex::highlight::lexers::all_lexers;
use tplex::highlight::{get_lexer_by_name, LexerOptions, RegexLexer};

fn tp() -> &'static RegexLexer {
    get_lexer_by_name("tp").unwrap()
}

/// Pieces of real TP syntax, including ones that leave a state open.
fn tp_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("/PROG  MAIN".to_string()),
        Just("/MN".to_string()),
        Just("/END".to_string()),
        Just("   1:  ".to_string()),
        Just("CALL".to_string()),
        Just("WAIT".to_string()),
        Just("J P[1] 100% FINE".to_string()),
        Just("L P[2] max_speed CNT100".to_string()),
        Just("R[".to_string()),
        Just("PR[3:home]".to_string()),
        Just("]".to_string()),
        Just("$GROUP[1].$SPEED".to_string()),
        Just("$".to_string()),
        Just("  ! note".to_string()),
        Just("// note".to_string()),
        Just("\"text\"".to_string()),
        Just("\"".to_string()),
        Just(" ;".to_string()),
        Just("\n".to_string()),
        Just("\r\n".to_string()),
        Just("\t".to_string()),
        Just("{".to_string()),
        "[A-Za-z_]{1,8}",
        "[0-9]{1,4}",
        "[ -~]{1,4}",
    ]
}

fn tp_program() -> impl Strategy<Value = String> {
    prop::collection::vec(tp_fragment(), 0..40).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn test_round_trip_arbitrary(input in any::<String>()) {
        for lexer in all_lexers() {
            let tokens = lexer.tokenize(&input);
            prop_assert_eq!(detokenize(&tokens), input.as_str());
        }
    }

    #[test]
    fn test_round_trip_tp_programs(input in tp_program()) {
        let tokens = tp().tokenize(&input);
        prop_assert_eq!(detokenize(&tokens), input.as_str());
    }

    #[test]
    fn test_spans_are_contiguous(input in tp_program()) {
        let mut offset = 0;
        for token in tp().tokenize(&input) {
            prop_assert!(!token.text.is_empty());
            prop_assert_eq!(token.span.start, offset);
            prop_assert_eq!(&input[token.span.clone()], token.text);
            offset = token.span.end;
        }
        prop_assert_eq!(offset, input.len());
    }

    #[test]
    fn test_token_count_bounded_by_length(input in any::<String>()) {
        let tokens = tp().tokenize(&input);
        prop_assert!(tokens.len() <= input.len());
    }

    #[test]
    fn test_error_tokens_are_single_chars(input in any::<String>()) {
        for token in tp().tokenize(&input).into_iter().filter(|t| t.is_error()) {
            prop_assert_eq!(token.text.chars().count(), 1);
            prop_assert_ne!(token.text, "\n");
        }
    }

    #[test]
    fn test_deterministic(input in tp_program()) {
        prop_assert_eq!(tp().tokenize(&input), tp().tokenize(&input));
    }

    #[test]
    fn test_newline_returns_to_root(input in tp_program()) {
        let mut tokens = tp().tokens(&input);
        while let Some(token) = tokens.next() {
            if token.text == "\n" {
                prop_assert_eq!(tokens.state_stack(), vec!["root"]);
            }
        }
    }

    #[test]
    fn test_text_lexer_single_token(input in ".+") {
        let tokens = get_lexer_by_name("text").unwrap().tokenize(&input);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].text, input.as_str());
    }

    #[test]
    fn test_preprocessed_text_round_trips(input in tp_program(), tabsize in 0usize..9) {
        let options = LexerOptions {
            normalize_newlines: true,
            ensurenl: true,
            tabsize,
            ..Default::default()
        };
        let text = options.preprocess(&input);
        prop_assert!(text.ends_with('\n'));
        prop_assert!(!text.contains('\r'));
        let tokens = tp().tokenize(&text);
        prop_assert_eq!(detokenize(&tokens), &*text);
    }
}
