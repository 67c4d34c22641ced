//! FANUC TP
//!
//!     Lexer for FANUC Teach Pendant programs in their ASCII `.ls` form:
//!
//!         /PROG  PICK_PART
//!         /ATTR
//!         OWNER       = MNEDITOR;
//!         /MN
//!            1:  UFRAME_NUM=1 ;
//!            2:  L P[1] 500mm/sec FINE ;
//!            3:  IF R[5:count]>10,JMP LBL[99] ;
//!            4:  $GROUP[1].$SPEED=100 ;
//!         /END
//!
//!     Three states:
//!     - `root`: everything at the top level.
//!     - `type`: the index of a register-like reference, `R[5:count]`; entered on the register
//!       mnemonic when a `[` follows, left on `]`.
//!     - `sysvar`: a system variable path after `$`, left on the next whitespace.
//!
//!     Rule order is significant throughout. Some rules have no trailing word boundary and
//!     match prefixes of longer words (`ON` in `ONE`, `TA` in `TAB`); later rules then pick up
//!     the rest.

use crate::highlight::engine::RegexLexer;
use crate::highlight::registry::LexerInfo;
use crate::highlight::rules::{rule, RuleDef, RuleError, StateTable};
use crate::highlight::token_type::TokenType::*;

pub const IDENTIFIER: &str = "TpLexer";

pub const INFO: LexerInfo = LexerInfo {
    module: "tplex::highlight::lexers::onerobotics",
    name: "TP",
    aliases: &["tp", "tpp", "tpe"],
    filenames: &["*.ls"],
    mimetypes: &[],
};

/// Program control keywords. Matched with a trailing word boundary.
pub const KEYWORDS: &[&str] = &[
    "CALL",
    "IF",
    "JMP",
    "STOP_TRACKING",
    "STOP",
    "START",
    "RESET",
    "WAIT",
];

pub const MOTION_MODIFIERS: &[&str] = &[
    "ACC", "AP_LD", "CNT", "Offset", "RT_LD", "TA", "TB", "VOFFSET",
];

/// Register-like mnemonics that open an indexed reference.
pub const REGISTER_TYPES: &[&str] = &[
    "AR", "R", "PR", "TIMER", "DI", "DO", "F", "RI", "RO", "UI", "UO", "SI", "SO", "GI", "GO",
    "SR", "VR",
];

/// Attribute names of the `/ATTR` and `/APPL` header sections.
pub const HEADER_CONSTANTS: &[&str] = &[
    "OWNER",
    "ASCBIN",
    "COMMENT",
    "PROG_SIZE",
    "CREATE",
    "DATE",
    "TIME_SLICE",
    "MODIFIED",
    "FILE_NAME",
    "VERSION",
    "LINE_COUNT",
    "MEMORY_SIZE",
    "PROTECT",
    "READ_WRITE",
    "TCD",
    "STACK_SIZE",
    "TASK_PRIORITY",
    "TIME",
    "BUSY_LAMP_OFF",
    "ABORT_REQUEST",
    "PAUSE_REQUEST",
    "DEFAULT_GROUP",
    "CONTROL_CODE",
    "LINE_TRACK_SCHEDULE_NUMBER",
    "LINE_TRACK_BOUNDARY_NUMBER",
    "LINE_TRACK",
    "CONTINUE_TRACK_AT_PROG_END",
];

// The alternations below are spelled out rather than joined from the lists above because rule
// patterns are `&'static str`. `test_patterns_match_word_lists` keeps them in sync.
const KEYWORD_PATTERN: &str = r"(CALL|IF|JMP|STOP_TRACKING|STOP|START|RESET|WAIT)\b";
const MOTION_MODIFIER_PATTERN: &str = r"(ACC|AP_LD|CNT|Offset|RT_LD|TA|TB|VOFFSET)";
const REGISTER_PATTERN: &str = r"(AR|R|PR|TIMER|DI|DO|F|RI|RO|UI|UO|SI|SO|GI|GO|SR|VR)";
const HEADER_CONSTANT_PATTERN: &str = concat!(
    r"(OWNER|ASCBIN|COMMENT|PROG_SIZE|CREATE|DATE|TIME_SLICE|MODIFIED|FILE_NAME|",
    r"VERSION|LINE_COUNT|MEMORY_SIZE|PROTECT|READ_WRITE|TCD|STACK_SIZE|",
    r"TASK_PRIORITY|TIME|BUSY_LAMP_OFF|ABORT_REQUEST|PAUSE_REQUEST|",
    r"DEFAULT_GROUP|CONTROL_CODE|LINE_TRACK_SCHEDULE_NUMBER|LINE_TRACK_BOUNDARY_NUMBER|",
    r"LINE_TRACK|CONTINUE_TRACK_AT_PROG_END)"
);

fn root() -> Vec<RuleDef> {
    vec![
        rule(r"  ![^;]*", Comment),
        rule(r#""[^"]*""#, String),
        rule(r"(/PROG|/ATTR|/APPL|/MN|/POS|/END)", KeywordDeclaration),
        rule(r"(ON|OFF)", KeywordPseudo),
        rule(r"(L|J|C) ", KeywordReserved).followed_by("P"),
        rule(r"max_speed", KeywordReserved),
        rule(r"sec", KeywordReserved),
        // Line number prefix, `   1:  `
        rule(r"\s+\d+:\s+", Punctuation).at_line_start(),
        rule(r"[:;()\[\]]", Punctuation),
        rule(r"\s+", Text),
        rule(KEYWORD_PATTERN, Keyword),
        rule(r"LBL", NameLabel),
        rule(REGISTER_PATTERN, KeywordType)
            .followed_by(r"\[")
            .push("type"),
        rule(HEADER_CONSTANT_PATTERN, KeywordConstant),
        rule(MOTION_MODIFIER_PATTERN, Keyword),
        rule(r"//[^;]*", Comment),
        rule(r"[*=><+-/%!]", Operator),
        rule(r"(DIV|MOD)", Operator),
        rule(r"\d+", NumberInteger),
        rule(r"[a-zA-Z0-9_]+", Name),
        rule(r"\$", NameVariableGlobal).push("sysvar"),
    ]
}

fn register_index() -> Vec<RuleDef> {
    vec![
        rule(r"[\[:]", Punctuation),
        rule(r"\d+", NumberInteger),
        rule(r"[\w _\d]+", NameVariable),
        rule(r"\]", Punctuation).pop(),
    ]
}

fn sysvar() -> Vec<RuleDef> {
    vec![
        rule(r"[.\[\]]", Punctuation),
        rule(r"\w+", NameVariable),
        rule(r"\d+", NumberInteger),
        rule(r"\$", NameVariableGlobal),
        rule(r"\s+", Text).pop(),
    ]
}

/// Compile the TP rule table.
pub fn table() -> Result<StateTable, RuleError> {
    StateTable::new(vec![
        ("root", root()),
        ("type", register_index()),
        ("sysvar", sysvar()),
    ])
}

/// Build a TP lexer.
pub fn tp_lexer() -> Result<RegexLexer, RuleError> {
    Ok(RegexLexer::new(IDENTIFIER, INFO, table()?))
}
