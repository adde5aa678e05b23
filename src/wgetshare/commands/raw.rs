use crate::commands::fetch::FetchOutcome;

/// Body served for every raw lookup that does not produce a snippet.
pub const RAW_NOT_FOUND: &str = "Code not found";

/// Raw page result. The body is the snippet and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawOutcome {
    Body(String),
    NotFound,
}

impl RawOutcome {
    pub fn body(&self) -> &str {
        match self {
            RawOutcome::Body(code) => code,
            RawOutcome::NotFound => RAW_NOT_FOUND,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, RawOutcome::Body(_))
    }

    pub fn into_body(self) -> String {
        match self {
            RawOutcome::Body(code) => code,
            RawOutcome::NotFound => RAW_NOT_FOUND.to_string(),
        }
    }
}

// Invalid, missing and failed lookups are indistinguishable here.
impl From<FetchOutcome> for RawOutcome {
    fn from(outcome: FetchOutcome) -> Self {
        match outcome {
            FetchOutcome::Found(snippet) => RawOutcome::Body(snippet.code),
            FetchOutcome::Missing | FetchOutcome::InvalidId | FetchOutcome::Failed(_) => {
                RawOutcome::NotFound
            }
        }
    }
}
