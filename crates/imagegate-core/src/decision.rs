//! Decision outcomes and reason codes.

/// The binary outcome of policy evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

/// Why a decision was reached. Doubles as the metric key (stable labels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReasonCode {
    /// Matched a whitelist pattern.
    Whitelisted,
    /// Matched a blacklist pattern.
    Blacklisted,
    /// No pattern matched; the store defaults to allow.
    DefaultAllow,
    /// No pattern matched; the store defaults to deny.
    DefaultDeny,
    /// The request URI could not be parsed.
    UriError,
    /// The image reference could not be extracted from the payload.
    QueryError,
}

impl ReasonCode {
    /// Every known reason code, in exposition order.
    pub const ALL: [ReasonCode; 6] = [
        ReasonCode::DefaultAllow,
        ReasonCode::Blacklisted,
        ReasonCode::DefaultDeny,
        ReasonCode::QueryError,
        ReasonCode::UriError,
        ReasonCode::Whitelisted,
    ];

    /// Metric label used in the exposition format (stable API).
    pub fn as_label(self) -> &'static str {
        match self {
            ReasonCode::DefaultAllow => "allow",
            ReasonCode::Blacklisted => "blacklist",
            ReasonCode::DefaultDeny => "block",
            ReasonCode::QueryError => "query_err",
            ReasonCode::UriError => "uri_err",
            ReasonCode::Whitelisted => "whitelist",
        }
    }
}

/// The (decision, reason) pair produced by evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub decision: Decision,
    pub reason: ReasonCode,
}

impl Verdict {
    pub fn allow(reason: ReasonCode) -> Self {
        Self {
            decision: Decision::Allow,
            reason,
        }
    }

    pub fn deny(reason: ReasonCode) -> Self {
        Self {
            decision: Decision::Deny,
            reason,
        }
    }

    /// Whether the intercepted call may proceed.
    pub fn is_allowed(self) -> bool {
        self.decision == Decision::Allow
    }
}
