//! Input preprocessing
//!
//! Optional clean-up applied to a text before it is tokenized. With every option off (the
//! default) the text is passed through untouched and tokens reproduce the input byte for byte.
//! Turning any option on trades that for tidier output: the tokens then reproduce the
//! preprocessed text instead.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerOptions {
    /// Convert `\r\n` and lone `\r` to `\n`.
    pub normalize_newlines: bool,
    /// Strip leading and trailing newlines.
    pub stripnl: bool,
    /// Strip all leading and trailing whitespace. Takes precedence over `stripnl`.
    pub stripall: bool,
    /// Expand tabs to this many columns; 0 leaves tabs alone.
    pub tabsize: usize,
    /// Make sure the text ends with a newline.
    pub ensurenl: bool,
}

impl LexerOptions {
    /// Apply the enabled options, borrowing `text` when nothing changes.
    pub fn preprocess<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut text = Cow::Borrowed(text);

        if self.normalize_newlines && text.contains('\r') {
            text = Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"));
        }

        let stripped = if self.stripall {
            text.trim()
        } else if self.stripnl {
            text.trim_matches('\n')
        } else {
            &*text
        };
        if stripped.len() != text.len() {
            text = Cow::Owned(stripped.to_string());
        }

        if self.tabsize > 0 && text.contains('\t') {
            text = Cow::Owned(expand_tabs(&text, self.tabsize));
        }

        if self.ensurenl && !text.ends_with('\n') {
            text.to_mut().push('\n');
        }

        text
    }
}

/// Replace tabs with spaces up to the next multiple of `tabsize`, columns restarting per line.
fn expand_tabs(text: &str, tabsize: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0;
    for ch in text.chars() {
        match ch {
            '\t' => {
                let pad = tabsize - column % tabsize;
                out.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\n' | '\r' => {
                out.push(ch);
                column = 0;
            }
            _ => {
                out.push(ch);
                column += 1;
            }
        }
    }
    out
}
