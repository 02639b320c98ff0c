use crate::serde::{Any, CodecError, DecodeConfig, DecodeCtx, MembersCount, ReadCursor, Result};

enum State {
    NotBegun,
    InProgress { members_left: u64 },
    Terminated,
}

/// An iterator that decodes the top-level members of a `Container` buffer one at a time.
///
/// `members_count` is read on the first call to `next()`.
/// The first error is yielded once, after which the iterator is exhausted.
/// Unless [`DecodeConfig::allow_trailing_bytes`] is set, bytes following the last
/// declared member are reported as [`CodecError::LengthMismatch`].
pub struct ValueIter<'a> {
    r: ReadCursor<'a>,
    ctx: DecodeCtx,
    state: State,
}

impl<'a> ValueIter<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_config(buf, DecodeConfig::default())
    }

    pub fn with_config(buf: &'a [u8], config: DecodeConfig) -> Self {
        Self {
            r: ReadCursor::new(buf),
            ctx: DecodeCtx::from(config),
            state: State::NotBegun,
        }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.r.position()
    }

    /// How many members are still to be yielded, once `members_count` has been read.
    pub fn members_left(&self) -> Option<u64> {
        match self.state {
            State::InProgress { members_left } => Some(members_left),
            State::NotBegun | State::Terminated => None,
        }
    }

    fn check_end(&self) -> Result<()> {
        if !self.ctx.config().allow_trailing_bytes && !self.r.is_empty() {
            return Err(CodecError::LengthMismatch {
                declared_end: self.r.position(),
                buffer_len: self.r.position() + self.r.remaining(),
            });
        }
        Ok(())
    }
}

impl<'a> Iterator for ValueIter<'a> {
    type Item = Result<Any>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state {
                State::Terminated => return None,
                State::NotBegun => match MembersCount::deser(&mut self.r) {
                    Err(e) => {
                        self.state = State::Terminated;
                        return Some(Err(e));
                    }
                    Ok(membs_ct) => {
                        self.state = State::InProgress {
                            members_left: *membs_ct,
                        };
                    }
                },
                State::InProgress { members_left: 0 } => {
                    self.state = State::Terminated;
                    return self.check_end().err().map(Err);
                }
                State::InProgress { members_left } => {
                    return match Any::deser_nested(&mut self.r, self.ctx) {
                        Err(e) => {
                            self.state = State::Terminated;
                            Some(Err(e))
                        }
                        Ok(val) => {
                            self.state = State::InProgress {
                                members_left: members_left - 1,
                            };
                            Some(Ok(val))
                        }
                    };
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            State::Terminated => (0, Some(0)),
            State::NotBegun => (0, None),
            State::InProgress { members_left } => {
                let hint = MembersCount::from(members_left).capacity_hint(self.r.remaining());
                (0, Some(hint + 1))
            }
        }
    }
}
