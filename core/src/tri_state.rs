//! `TriState` — Three-valued verdict and the fold that accumulates it
//!
//! Every structural and composite comparison folds a list of sub-verdicts,
//! starting from [`TriState::Unknown`]:
//!
//! ```text
//! acc = if acc is Unknown { was } else { acc AND/OR was }
//! ```
//!
//! where AND/OR follow short-circuit value semantics (`True && x = x`,
//! `False && x = False`, `True || x = True`, `False || x = x`). An `Unknown`
//! in the middle of a fold therefore resets the accumulator, and an empty
//! fold stays `Unknown`.

/// A verdict: matched, not matched, or no verdict yet.
///
/// `Unknown` is the neutral element of the fold. It is never a match: callers
/// branch on [`TriState::is_true`] only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TriState {
    /// Confirmed match.
    True,
    /// Confirmed non-match.
    False,
    /// No sub-comparison produced a verdict.
    #[default]
    Unknown,
}

/// How a fold combines successive verdicts once the accumulator is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combine {
    /// Logical AND. Used by structural patterns and every operator except `some`.
    And,
    /// Logical OR. Used by the `some` operator.
    Or,
}

impl TriState {
    /// Returns `true` only for [`TriState::True`].
    #[inline]
    #[must_use]
    pub const fn is_true(self) -> bool {
        matches!(self, Self::True)
    }

    /// Returns `true` only for [`TriState::False`].
    #[inline]
    #[must_use]
    pub const fn is_false(self) -> bool {
        matches!(self, Self::False)
    }

    /// Returns `true` only for [`TriState::Unknown`].
    #[inline]
    #[must_use]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// `self && other`: a falsy left side wins, otherwise the right side.
    ///
    /// `Unknown` is falsy here, so `Unknown.and(x)` is `Unknown`.
    #[must_use]
    pub const fn and(self, other: Self) -> Self {
        match self {
            Self::True => other,
            Self::False | Self::Unknown => self,
        }
    }

    /// `self || other`: a truthy left side wins, otherwise the right side.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        match self {
            Self::True => self,
            Self::False | Self::Unknown => other,
        }
    }

    /// One step of the fold: an `Unknown` accumulator adopts `next` as-is.
    #[must_use]
    pub const fn fold_step(self, next: Self, combine: Combine) -> Self {
        match (self, combine) {
            (Self::Unknown, _) => next,
            (_, Combine::And) => self.and(next),
            (_, Combine::Or) => self.or(next),
        }
    }

    /// Left-fold a sequence of verdicts starting from `Unknown`.
    ///
    /// Consumes the whole iterator: there is no early exit.
    pub fn fold<I>(verdicts: I, combine: Combine) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        verdicts
            .into_iter()
            .fold(Self::Unknown, |acc, was| acc.fold_step(was, combine))
    }

    /// `Some(bool)` for a known verdict, `None` for `Unknown`.
    #[must_use]
    pub const fn known(self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            Self::Unknown => None,
        }
    }
}

impl From<bool> for TriState {
    fn from(b: bool) -> Self {
        if b {
            Self::True
        } else {
            Self::False
        }
    }
}

impl From<Option<bool>> for TriState {
    fn from(opt: Option<bool>) -> Self {
        opt.map_or(Self::Unknown, Self::from)
    }
}

impl From<TriState> for Option<bool> {
    fn from(t: TriState) -> Self {
        t.known()
    }
}

impl std::fmt::Display for TriState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::True => "true",
            Self::False => "false",
            Self::Unknown => "unknown",
        })
    }
}
