use super::RequestLine;

/// Request parsing phase, each phase carries only the data valid in that phase.
#[derive(Debug)]
pub(crate) enum Phase {
    Init,
    Header(RequestLine),
    Body {
        line: RequestLine,
        length: usize,
    },
    Done(RequestLine),
    Error,
}

impl Phase {
    pub(crate) const fn state(&self) -> State {
        match self {
            Phase::Init => State::Init,
            Phase::Header(_) => State::Header,
            Phase::Body { .. } => State::Body,
            Phase::Done(_) => State::Done,
            Phase::Error => State::Error,
        }
    }

    pub(crate) const fn line(&self) -> Option<&RequestLine> {
        match self {
            Phase::Header(line) | Phase::Body { line, .. } | Phase::Done(line) => Some(line),
            Phase::Init | Phase::Error => None,
        }
    }
}

/// Request parsing state.
///
/// `Init -> Header -> Body -> Done`, where `Body` is skipped when the request have no content.
/// `Error` can be reached from any state before `Done`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum State {
    /// Waiting for request line.
    Init,
    /// Request line parsed, waiting for headers.
    Header,
    /// Headers parsed, waiting for body.
    Body,
    /// Request complete.
    Done,
    /// Parsing failed.
    Error,
}

impl State {
    pub const fn as_str(&self) -> &'static str {
        match self {
            State::Init => "init",
            State::Header => "header",
            State::Body => "body",
            State::Done => "done",
            State::Error => "error",
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
