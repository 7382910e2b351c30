//! Whitelist/blacklist pattern compilation and classification.
//!
//! Patterns are plain regular expressions searched against the full image
//! reference (registry, repository, tag/digest included verbatim). No
//! normalization is performed; callers wanting implicit `:latest` or registry
//! aliasing must resolve that before evaluating. Configured order is
//! evaluation order.

use regex::Regex;

use crate::decision::{ReasonCode, Verdict};
use crate::error::{ImageGateError, Result};

/// A compiled rule plus its original source text (diagnostics).
#[derive(Debug, Clone)]
pub struct Pattern {
    re: Regex,
    source: String,
}

impl Pattern {
    pub fn source(&self) -> &str {
        &self.source
    }

    fn matches(&self, image_ref: &str) -> bool {
        self.re.is_match(image_ref)
    }
}

/// Immutable compiled policy: ordered whitelist/blacklist plus the default.
///
/// Built once at startup, then shared via `Arc`; concurrent `evaluate` calls
/// need no locking.
#[derive(Debug)]
pub struct PolicyStore {
    whitelist: Vec<Pattern>,
    blacklist: Vec<Pattern>,
    default_allow: bool,
}

impl PolicyStore {
    /// Compile both lists, stopping at the first invalid pattern.
    ///
    /// No store is produced on failure.
    pub fn compile(
        whitelist: &[String],
        blacklist: &[String],
        default_allow: bool,
    ) -> Result<Self> {
        let store = Self {
            whitelist: compile_list("whitelist", whitelist)?,
            blacklist: compile_list("blacklist", blacklist)?,
            default_allow,
        };
        tracing::debug!(
            whitelist = store.whitelist.len(),
            blacklist = store.blacklist.len(),
            default_allow,
            "policy compiled"
        );
        Ok(store)
    }

    pub fn whitelist_len(&self) -> usize {
        self.whitelist.len()
    }

    pub fn blacklist_len(&self) -> usize {
        self.blacklist.len()
    }

    pub fn default_allow(&self) -> bool {
        self.default_allow
    }

    /// Classify an image reference. Total: every input maps to exactly one
    /// verdict, and repeated calls return the same one.
    ///
    /// Blacklist is evaluated before whitelist (deny-wins); within each list
    /// the first match in configured order decides.
    pub fn evaluate(&self, image_ref: &str) -> Verdict {
        if let Some(p) = self.blacklist.iter().find(|p| p.matches(image_ref)) {
            tracing::debug!(image = image_ref, pattern = p.source(), "blacklist match");
            return Verdict::deny(ReasonCode::Blacklisted);
        }

        if let Some(p) = self.whitelist.iter().find(|p| p.matches(image_ref)) {
            tracing::debug!(image = image_ref, pattern = p.source(), "whitelist match");
            return Verdict::allow(ReasonCode::Whitelisted);
        }

        if self.default_allow {
            Verdict::allow(ReasonCode::DefaultAllow)
        } else {
            Verdict::deny(ReasonCode::DefaultDeny)
        }
    }
}

fn compile_list(list: &'static str, raw: &[String]) -> Result<Vec<Pattern>> {
    let mut out = Vec::with_capacity(raw.len());
    for (index, s) in raw.iter().enumerate() {
        let re = Regex::new(s).map_err(|source| ImageGateError::InvalidPattern {
            list,
            index,
            pattern: s.clone(),
            source,
        })?;
        out.push(Pattern {
            re,
            source: s.clone(),
        });
    }
    Ok(out)
}
