//! Token categories
//!
//!     Every token the lexers produce carries one category from a fixed, hierarchical taxonomy.
//!     The hierarchy mirrors the one highlighting themes are written against: `Keyword.Type` is a
//!     `Keyword`, `Literal.Number.Integer` is a `Literal.Number`, and so on. A theme that only
//!     knows how to style `Keyword` still styles every keyword subtype.
//!
//!     The tokenizer never looks inside a category; it only attaches one to each matched span.
//!     Hierarchy queries ([TokenType::parent], [TokenType::is_subtype_of]) exist for consumers.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A leaf or interior node in the category tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenType {
    Text,
    Whitespace,
    Error,
    Other,
    Keyword,
    KeywordConstant,
    KeywordDeclaration,
    KeywordNamespace,
    KeywordPseudo,
    KeywordReserved,
    KeywordType,
    Name,
    NameBuiltin,
    NameFunction,
    NameLabel,
    NameVariable,
    NameVariableGlobal,
    Literal,
    String,
    Number,
    NumberInteger,
    NumberFloat,
    Operator,
    OperatorWord,
    Punctuation,
    Comment,
    CommentSingle,
}

/// Every category, in tree order.
pub const ALL_TOKEN_TYPES: &[TokenType] = &[
    TokenType::Text,
    TokenType::Whitespace,
    TokenType::Error,
    TokenType::Other,
    TokenType::Keyword,
    TokenType::KeywordConstant,
    TokenType::KeywordDeclaration,
    TokenType::KeywordNamespace,
    TokenType::KeywordPseudo,
    TokenType::KeywordReserved,
    TokenType::KeywordType,
    TokenType::Name,
    TokenType::NameBuiltin,
    TokenType::NameFunction,
    TokenType::NameLabel,
    TokenType::NameVariable,
    TokenType::NameVariableGlobal,
    TokenType::Literal,
    TokenType::String,
    TokenType::Number,
    TokenType::NumberInteger,
    TokenType::NumberFloat,
    TokenType::Operator,
    TokenType::OperatorWord,
    TokenType::Punctuation,
    TokenType::Comment,
    TokenType::CommentSingle,
];

impl TokenType {
    /// The enclosing category, or `None` for top-level categories.
    pub fn parent(self) -> Option<TokenType> {
        use TokenType::*;
        match self {
            Text | Error | Other | Keyword | Name | Literal | Operator | Punctuation | Comment => {
                None
            }
            Whitespace => Some(Text),
            KeywordConstant | KeywordDeclaration | KeywordNamespace | KeywordPseudo
            | KeywordReserved | KeywordType => Some(Keyword),
            NameBuiltin | NameFunction | NameLabel | NameVariable => Some(Name),
            NameVariableGlobal => Some(NameVariable),
            String | Number => Some(Literal),
            NumberInteger | NumberFloat => Some(Number),
            OperatorWord => Some(Operator),
            CommentSingle => Some(Comment),
        }
    }

    /// Dotted path below the implicit `Token` root, e.g. `Keyword.Declaration`.
    pub fn path(self) -> &'static str {
        use TokenType::*;
        match self {
            Text => "Text",
            Whitespace => "Text.Whitespace",
            Error => "Error",
            Other => "Other",
            Keyword => "Keyword",
            KeywordConstant => "Keyword.Constant",
            KeywordDeclaration => "Keyword.Declaration",
            KeywordNamespace => "Keyword.Namespace",
            KeywordPseudo => "Keyword.Pseudo",
            KeywordReserved => "Keyword.Reserved",
            KeywordType => "Keyword.Type",
            Name => "Name",
            NameBuiltin => "Name.Builtin",
            NameFunction => "Name.Function",
            NameLabel => "Name.Label",
            NameVariable => "Name.Variable",
            NameVariableGlobal => "Name.Variable.Global",
            Literal => "Literal",
            String => "Literal.String",
            Number => "Literal.Number",
            NumberInteger => "Literal.Number.Integer",
            NumberFloat => "Literal.Number.Float",
            Operator => "Operator",
            OperatorWord => "Operator.Word",
            Punctuation => "Punctuation",
            Comment => "Comment",
            CommentSingle => "Comment.Single",
        }
    }

    /// Short style class used by stylesheets (`kd` for `Keyword.Declaration`).
    ///
    /// Plain `Text` has no class and returns an empty string.
    pub fn short_name(self) -> &'static str {
        use TokenType::*;
        match self {
            Text => "",
            Whitespace => "w",
            Error => "err",
            Other => "x",
            Keyword => "k",
            KeywordConstant => "kc",
            KeywordDeclaration => "kd",
            KeywordNamespace => "kn",
            KeywordPseudo => "kp",
            KeywordReserved => "kr",
            KeywordType => "kt",
            Name => "n",
            NameBuiltin => "nb",
            NameFunction => "nf",
            NameLabel => "nl",
            NameVariable => "nv",
            NameVariableGlobal => "vg",
            Literal => "l",
            String => "s",
            Number => "m",
            NumberInteger => "mi",
            NumberFloat => "mf",
            Operator => "o",
            OperatorWord => "ow",
            Punctuation => "p",
            Comment => "c",
            CommentSingle => "c1",
        }
    }

    /// True if `self` equals `other` or lies anywhere below it in the tree.
    pub fn is_subtype_of(self, other: TokenType) -> bool {
        let mut current = Some(self);
        while let Some(ty) = current {
            if ty == other {
                return true;
            }
            current = ty.parent();
        }
        false
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token.{}", self.path())
    }
}

/// Error returned when a dotted path names no known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown token type '{0}'")]
pub struct UnknownTokenType(pub std::string::String);

impl FromStr for TokenType {
    type Err = UnknownTokenType;

    /// Accepts `Keyword.Type`, `Token.Keyword.Type`, and the common shorthand
    /// that leaves out `Literal.` (`Number.Integer`, `String`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.strip_prefix("Token.").unwrap_or(s);
        ALL_TOKEN_TYPES
            .iter()
            .copied()
            .find(|ty| {
                let full = ty.path();
                full == path || full.strip_prefix("Literal.") == Some(path)
            })
            .ok_or_else(|| UnknownTokenType(s.to_string()))
    }
}

impl Serialize for TokenType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}
