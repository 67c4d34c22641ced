//! Rule tables
//!
//!     A lexer is described entirely as data: a set of named states, each an ordered list of
//!     rules. A rule is a pattern, what to emit when it matches, and what to do with the state
//!     stack afterwards. Order inside a state is the only tie-break: the first rule whose pattern
//!     matches at the cursor wins, no matter how long later matches would have been.
//!
//! Patterns
//!
//!     Patterns use the `regex` crate syntax and are always matched anchored at the cursor,
//!     against the remaining input. The `regex` crate has no look-around, so the two context
//!     forms the tables need are expressed on the rule instead of inside the pattern:
//!
//!     - [RuleDef::followed_by]: the match must be followed by this context, which is not
//!       consumed. Body and context are matched as one pattern, so alternatives in the body
//!       are retried until the context fits, the same way a trailing `(?=...)` behaves.
//!     - [RuleDef::at_line_start]: the rule only applies at offset 0 or right after a `\n`.
//!
//!     A match of length zero never counts. Every successful rule consumes input, which is what
//!     makes tokenization terminate.
//!
//! Building
//!
//!     Rule definitions ([RuleDef]) are plain values. [StateTable::new] compiles every pattern,
//!     resolves state names into indices, and rejects tables that could misbehave at runtime
//!     (missing `root`, pushes to undefined states, group mappings that name absent groups).
//!     Tables are built once and shared read-only; see the lexers module.

use super::token_type::TokenType;
use regex::Regex;
use std::collections::HashMap;
use std::ops::Range;

/// Name of the state every run starts in.
pub const ROOT_STATE: &str = "root";

/// Capture group wrapping the consumed part of a rule that carries right context.
const BODY_GROUP: &str = "body";

/// What a matching rule emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The whole match becomes one token.
    Token(TokenType),
    /// Capture group `i + 1` becomes a token of category `i`. Text inside the match that no
    /// group covers is emitted as [TokenType::Text].
    ByGroups(Vec<TokenType>),
}

/// What a matching rule does to the state stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    None,
    Push(&'static str),
    /// Leave the current state. The bottom `root` frame is never popped.
    Pop,
}

/// An uncompiled rule.
#[derive(Debug, Clone)]
pub struct RuleDef {
    pattern: &'static str,
    action: Action,
    transition: Transition,
    context: Option<&'static str>,
    line_start: bool,
}

impl RuleDef {
    pub fn new(pattern: &'static str, action: Action) -> Self {
        RuleDef {
            pattern,
            action,
            transition: Transition::None,
            context: None,
            line_start: false,
        }
    }

    pub fn push(mut self, state: &'static str) -> Self {
        self.transition = Transition::Push(state);
        self
    }

    pub fn pop(mut self) -> Self {
        self.transition = Transition::Pop;
        self
    }

    /// Require `context` right after the match without consuming it.
    pub fn followed_by(mut self, context: &'static str) -> Self {
        self.context = Some(context);
        self
    }

    /// Only try this rule at the start of a line.
    pub fn at_line_start(mut self) -> Self {
        self.line_start = true;
        self
    }

    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }
}

/// Rule emitting the whole match as one token of `kind`.
pub fn rule(pattern: &'static str, kind: TokenType) -> RuleDef {
    RuleDef::new(pattern, Action::Token(kind))
}

/// Rule emitting one token per capture group.
pub fn by_groups(pattern: &'static str, kinds: Vec<TokenType>) -> RuleDef {
    RuleDef::new(pattern, Action::ByGroups(kinds))
}

/// Errors raised while compiling a rule table.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("rule table has no 'root' state")]
    MissingRoot,

    #[error("state '{0}' is defined twice")]
    DuplicateState(String),

    #[error("invalid pattern {pattern:?} in state '{state}': {source}")]
    InvalidPattern {
        state: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("rule {pattern:?} in state '{state}' pushes undefined state '{target}'")]
    UndefinedState {
        state: String,
        pattern: String,
        target: String,
    },

    #[error("rule {pattern:?} in state '{state}' maps {mapped} groups but the pattern has {available}")]
    GroupCount {
        state: String,
        pattern: String,
        mapped: usize,
        available: usize,
    },
}

/// Stack effect of a compiled rule, with state names resolved to indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StackOp {
    Stay,
    Push(usize),
    Pop,
}

/// A piece of a successful match, relative to the start of the remaining input.
pub(crate) type Piece = (TokenType, Range<usize>);

/// Outcome of a rule matching at the cursor.
#[derive(Debug)]
pub(crate) struct RuleMatch {
    /// Bytes consumed.
    pub len: usize,
    /// Consecutive pieces covering `0..len` exactly.
    pub pieces: Vec<Piece>,
    pub op: StackOp,
}

/// A compiled rule.
#[derive(Debug)]
pub struct Rule {
    regex: Regex,
    pattern: &'static str,
    action: Action,
    op: StackOp,
    has_context: bool,
    line_start: bool,
}

impl Rule {
    fn compile(
        def: RuleDef,
        state: &str,
        index: &HashMap<&'static str, usize>,
    ) -> Result<Rule, RuleError> {
        let invalid = |source| RuleError::InvalidPattern {
            state: state.to_string(),
            pattern: def.pattern.to_string(),
            source,
        };

        // Validate the body alone first so group counts refer to what the author wrote.
        let body = Regex::new(def.pattern).map_err(invalid)?;
        if let Action::ByGroups(kinds) = &def.action {
            let available = body.captures_len() - 1;
            if kinds.len() > available {
                return Err(RuleError::GroupCount {
                    state: state.to_string(),
                    pattern: def.pattern.to_string(),
                    mapped: kinds.len(),
                    available,
                });
            }
        }

        let source = match def.context {
            Some(context) => format!("^(?P<{BODY_GROUP}>{})(?:{context})", def.pattern),
            None => format!("^(?:{})", def.pattern),
        };
        let regex = Regex::new(&source).map_err(invalid)?;

        let op = match def.transition {
            Transition::None => StackOp::Stay,
            Transition::Pop => StackOp::Pop,
            Transition::Push(target) => match index.get(target) {
                Some(&i) => StackOp::Push(i),
                None => {
                    return Err(RuleError::UndefinedState {
                        state: state.to_string(),
                        pattern: def.pattern.to_string(),
                        target: target.to_string(),
                    })
                }
            },
        };

        Ok(Rule {
            regex,
            pattern: def.pattern,
            action: def.action,
            op,
            has_context: def.context.is_some(),
            line_start: def.line_start,
        })
    }

    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    /// Try the rule at byte offset `pos` of `text`.
    pub(crate) fn match_at(&self, text: &str, pos: usize) -> Option<RuleMatch> {
        if self.line_start && pos > 0 && !text[..pos].ends_with('\n') {
            return None;
        }
        let rest = &text[pos..];

        match (&self.action, self.has_context) {
            (Action::Token(kind), false) => {
                let m = self.regex.find(rest)?;
                if m.is_empty() {
                    return None;
                }
                Some(RuleMatch {
                    len: m.end(),
                    pieces: vec![(*kind, 0..m.end())],
                    op: self.op,
                })
            }
            (action, has_context) => {
                let caps = self.regex.captures(rest)?;
                let consumed = if has_context {
                    caps.name(BODY_GROUP)?
                } else {
                    caps.get(0)?
                };
                let len = consumed.end();
                if len == 0 {
                    return None;
                }
                let pieces = match action {
                    Action::Token(kind) => vec![(*kind, 0..len)],
                    Action::ByGroups(kinds) => {
                        let offset = usize::from(has_context);
                        split_groups(&caps, kinds, offset, len)
                    }
                };
                Some(RuleMatch {
                    len,
                    pieces,
                    op: self.op,
                })
            }
        }
    }
}

/// Map capture groups onto consecutive pieces covering `0..len`.
///
/// Groups that did not participate or matched nothing are skipped. A group starting before the
/// end of the previous piece (nested or overlapping groups) is skipped too, so no byte is emitted
/// twice. Gaps become `Text`.
fn split_groups(
    caps: &regex::Captures<'_>,
    kinds: &[TokenType],
    offset: usize,
    len: usize,
) -> Vec<Piece> {
    let mut pieces = Vec::with_capacity(kinds.len() + 1);
    let mut cursor = 0;
    for (i, kind) in kinds.iter().enumerate() {
        let Some(group) = caps.get(i + 1 + offset) else {
            continue;
        };
        if group.is_empty() || group.start() < cursor || group.end() > len {
            continue;
        }
        if group.start() > cursor {
            pieces.push((TokenType::Text, cursor..group.start()));
        }
        pieces.push((*kind, group.range()));
        cursor = group.end();
    }
    if cursor < len {
        pieces.push((TokenType::Text, cursor..len));
    }
    pieces
}

/// A named, ordered list of compiled rules.
#[derive(Debug)]
pub struct State {
    name: &'static str,
    rules: Vec<Rule>,
}

impl State {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

/// All states of one lexer, compiled.
#[derive(Debug)]
pub struct StateTable {
    states: Vec<State>,
    root: usize,
}

impl StateTable {
    /// Compile a table from `(state name, rules)` pairs.
    pub fn new(defs: Vec<(&'static str, Vec<RuleDef>)>) -> Result<StateTable, RuleError> {
        let mut index = HashMap::new();
        for (i, (name, _)) in defs.iter().enumerate() {
            if index.insert(*name, i).is_some() {
                return Err(RuleError::DuplicateState(name.to_string()));
            }
        }
        let root = *index.get(ROOT_STATE).ok_or(RuleError::MissingRoot)?;

        let states = defs
            .into_iter()
            .map(|(name, rules)| {
                let rules = rules
                    .into_iter()
                    .map(|def| Rule::compile(def, name, &index))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(State { name, rules })
            })
            .collect::<Result<Vec<_>, RuleError>>()?;

        Ok(StateTable { states, root })
    }

    pub(crate) fn root(&self) -> usize {
        self.root
    }

    pub(crate) fn state(&self, index: usize) -> &State {
        &self.states[index]
    }

    /// Look a state up by name.
    pub fn get(&self, name: &str) -> Option<&State> {
        self.states.iter().find(|s| s.name == name)
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }
}
