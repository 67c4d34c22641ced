//! Regex state-machine tokenizer
//!
//!     [RegexLexer] runs a [StateTable] over a text. The run keeps a cursor and a stack of active
//!     states, starting as `[root]`. At each step the rules of the state on top of the stack are
//!     tried in declaration order against the text at the cursor; the first match emits its
//!     tokens, moves the cursor past the match and applies the rule's stack effect.
//!
//!     When no rule matches, one character is consumed so the run always makes progress:
//!     - a `\n` is emitted as `Text` and the stack falls back to `[root]`, so an unterminated
//!       sub-state (an unclosed `[` for example) cannot leak past the end of its line;
//!     - anything else becomes a one-character `Error` token.
//!
//!     Together these give the contract every lexer in this crate honours: the texts of the
//!     emitted tokens, concatenated in order, are exactly the input. Nothing is ever rejected.
//!
//!     A run owns all of its mutable state. The table is shared read-only, so any number of runs
//!     can proceed on different threads at once.

use super::registry::LexerInfo;
use super::rules::{StackOp, StateTable};
use super::token::Token;
use super::token_type::TokenType;
use std::collections::VecDeque;
use tracing::{debug, trace};

const LOG_TARGET: &str = "tplex::lexer";

/// A lexer defined by a rule table.
#[derive(Debug)]
pub struct RegexLexer {
    identifier: &'static str,
    info: LexerInfo,
    table: StateTable,
}

impl RegexLexer {
    pub fn new(identifier: &'static str, info: LexerInfo, table: StateTable) -> Self {
        RegexLexer {
            identifier,
            info,
            table,
        }
    }

    /// Registry identifier, e.g. `TpLexer`.
    pub fn identifier(&self) -> &'static str {
        self.identifier
    }

    pub fn info(&self) -> &LexerInfo {
        &self.info
    }

    pub fn table(&self) -> &StateTable {
        &self.table
    }

    /// Lazily tokenize `text`.
    pub fn tokens<'lx, 'src>(&'lx self, text: &'src str) -> Tokens<'lx, 'src> {
        Tokens {
            table: &self.table,
            text,
            pos: 0,
            stack: vec![self.table.root()],
            pending: VecDeque::new(),
        }
    }

    /// Tokenize `text` into a vector.
    pub fn tokenize<'src>(&self, text: &'src str) -> Vec<Token<'src>> {
        self.tokens(text).collect()
    }
}

/// Iterator over the tokens of one run.
pub struct Tokens<'lx, 'src> {
    table: &'lx StateTable,
    text: &'src str,
    pos: usize,
    stack: Vec<usize>,
    pending: VecDeque<Token<'src>>,
}

impl<'lx, 'src> Tokens<'lx, 'src> {
    /// Names of the active states, bottom first.
    pub fn state_stack(&self) -> Vec<&'static str> {
        self.stack
            .iter()
            .map(|&i| self.table.state(i).name())
            .collect()
    }

    /// Byte offset of the next unconsumed character.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn current_state(&self) -> usize {
        // The bottom frame is never popped, so the stack is never empty.
        self.stack.last().copied().unwrap_or(self.table.root())
    }

    fn emit(&mut self, kind: TokenType, start: usize, end: usize) {
        let token = Token::new(kind, &self.text[start..end], start);
        trace!(target: LOG_TARGET, kind = %kind, text = ?token.text, start, "token");
        self.pending.push_back(token);
    }

    /// Consume at least one character, queueing the resulting tokens.
    fn step(&mut self) {
        let table = self.table;
        let state = table.state(self.current_state());

        for rule in state.rules() {
            let Some(matched) = rule.match_at(self.text, self.pos) else {
                continue;
            };
            let base = self.pos;
            for (kind, range) in matched.pieces {
                self.emit(kind, base + range.start, base + range.end);
            }
            self.pos += matched.len;
            self.apply(matched.op);
            return;
        }

        let Some(ch) = self.text[self.pos..].chars().next() else {
            return;
        };
        let start = self.pos;
        let end = start + ch.len_utf8();
        if ch == '\n' {
            if self.stack.len() > 1 {
                debug!(target: LOG_TARGET, from = ?self.state_stack(), "newline resets state stack");
                self.stack.truncate(1);
                self.stack[0] = self.table.root();
            }
            self.emit(TokenType::Text, start, end);
        } else {
            debug!(
                target: LOG_TARGET,
                state = state.name(),
                offset = start,
                ch = ?ch,
                "no rule matched"
            );
            self.emit(TokenType::Error, start, end);
        }
        self.pos = end;
    }

    fn apply(&mut self, op: StackOp) {
        match op {
            StackOp::Stay => {}
            StackOp::Push(next) => {
                self.stack.push(next);
                debug!(target: LOG_TARGET, state = self.table.state(next).name(), "push");
            }
            StackOp::Pop => {
                if self.stack.len() > 1 {
                    let left = self.stack.pop().map(|i| self.table.state(i).name());
                    debug!(target: LOG_TARGET, state = ?left, "pop");
                }
            }
        }
    }
}

impl<'lx, 'src> Iterator for Tokens<'lx, 'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if self.pos >= self.text.len() {
                return None;
            }
            self.step();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::rules::{by_groups, rule, StateTable};
    use crate::highlight::token::kinds_and_text;
    use TokenType::*;

    fn lexer() -> RegexLexer {
        let table = StateTable::new(vec![
            (
                "root",
                vec![
                    rule(r"\s+", Text),
                    by_groups(r"(GO)(!)", vec![Keyword, Punctuation]),
                    rule(r"\(", Punctuation).push("paren"),
                    rule(r"[a-z]+", Name),
                ],
            ),
            (
                "paren",
                vec![
                    rule(r"\d+", NumberInteger),
                    rule(r"\)", Punctuation).pop(),
                ],
            ),
        ])
        .unwrap();
        RegexLexer::new("TestLexer", LexerInfo::default(), table)
    }

    #[test]
    fn test_first_rule_wins_and_states_nest() {
        let lx = lexer();
        let tokens = lx.tokenize("ab (12) GO!");
        assert_eq!(
            kinds_and_text(&tokens),
            vec![
                (Name, "ab"),
                (Text, " "),
                (Punctuation, "("),
                (NumberInteger, "12"),
                (Punctuation, ")"),
                (Text, " "),
                (Keyword, "GO"),
                (Punctuation, "!"),
            ]
        );
    }

    #[test]
    fn test_spans_are_absolute() {
        let lx = lexer();
        let tokens = lx.tokenize("ab (12)");
        assert_eq!(tokens[3].span, 4..6);
        assert_eq!(tokens[4].span, 6..7);
    }

    #[test]
    fn test_unmatched_char_becomes_error() {
        let lx = lexer();
        let tokens = lx.tokenize("a#b");
        assert_eq!(
            kinds_and_text(&tokens),
            vec![(Name, "a"), (Error, "#"), (Name, "b")]
        );
    }

    #[test]
    fn test_error_token_keeps_whole_code_point() {
        let lx = lexer();
        let tokens = lx.tokenize("é");
        assert_eq!(kinds_and_text(&tokens), vec![(Error, "é")]);
    }

    #[test]
    fn test_newline_resets_stack() {
        let lx = lexer();
        let mut tokens = lx.tokens("(1\nab");
        let first: Vec<_> = tokens.by_ref().take(2).collect();
        assert_eq!(kinds_and_text(&first), vec![(Punctuation, "("), (NumberInteger, "1")]);
        assert_eq!(tokens.state_stack(), vec!["root", "paren"]);
        let rest: Vec<_> = tokens.by_ref().collect();
        assert_eq!(kinds_and_text(&rest), vec![(Text, "\n"), (Name, "ab")]);
        assert_eq!(tokens.state_stack(), vec!["root"]);
    }

    #[test]
    fn test_pop_never_leaves_root() {
        let table = StateTable::new(vec![("root", vec![rule(r"\)", Punctuation).pop()])]).unwrap();
        let lx = RegexLexer::new("PopLexer", LexerInfo::default(), table);
        let mut tokens = lx.tokens("))");
        assert_eq!(tokens.by_ref().count(), 2);
        assert_eq!(tokens.state_stack(), vec!["root"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(lexer().tokenize("").is_empty());
    }
}
