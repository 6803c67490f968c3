use std::process::ExitCode;

/// How an `itinerary` invocation ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Output written, or config created.
    Success,
    /// Nothing was run: a path argument was missing or `init` found an
    /// existing config.
    Failure,
    /// The run was aborted: missing input or lookup, malformed lookup,
    /// bad config, or an I/O error. No output file is left behind.
    Error,
}

impl ExitStatus {
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
            Self::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
