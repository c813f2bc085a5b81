//! Inline substitutions for paragraph lines.
//!
//! Substitution is an ordered list of independent passes:
//! 1. Bold (`**x**`)
//! 2. Emphasis (`__x__`)
//! 3. Hash tokens (`[[x]]` → hex digest of `x`)
//! 4. Obscure tokens (`((x))` → `x` without `c`/`C`)
//! 5. Embedded newlines (`\n` → `<br/>\n`)
//!
//! Later passes see the output of earlier ones.

mod delimited;
mod digest;
pub mod passes;

pub use delimited::{replace_delimited, DelimiterPair};
pub use digest::{hex_digest, DIGEST_HEX_LEN};

use std::borrow::Cow;

use smallvec::SmallVec;

/// A single text rewrite.
pub type Pass = for<'a> fn(&'a str) -> Cow<'a, str>;

/// Ordered inline substitution pipeline.
#[derive(Clone)]
pub struct InlinePipeline {
    passes: SmallVec<[(&'static str, Pass); 5]>,
}

impl InlinePipeline {
    /// The standard five passes in their fixed order.
    pub fn standard() -> Self {
        Self::empty()
            .with_pass("bold", passes::bold)
            .with_pass("emphasis", passes::emphasis)
            .with_pass("hash-token", passes::hash_tokens)
            .with_pass("obscure-token", passes::obscure_tokens)
            .with_pass("line-break", passes::line_breaks)
    }

    /// A pipeline that leaves text untouched.
    pub fn empty() -> Self {
        Self {
            passes: SmallVec::new(),
        }
    }

    /// Append a pass to run after the existing ones.
    pub fn with_pass(mut self, name: &'static str, pass: Pass) -> Self {
        self.passes.push((name, pass));
        self
    }

    /// Names of the passes, in run order.
    pub fn pass_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.passes.iter().map(|(name, _)| *name)
    }

    /// Number of passes.
    pub fn len(&self) -> usize {
        self.passes.len()
    }

    /// Check if the pipeline has no passes.
    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Run every pass over `text` in order.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut current = Cow::Borrowed(text);
        for (_, pass) in &self.passes {
            if let Cow::Owned(s) = pass(&current) {
                current = Cow::Owned(s);
            }
        }
        current
    }
}

impl Default for InlinePipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for InlinePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.pass_names()).finish()
    }
}
