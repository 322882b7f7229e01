use super::Session;
use crate::core::TangoError;

/// Caller-side holder for the live proposal.
///
/// `Idle -> Proposed` only for a non-empty session; `Proposed -> Idle` on commit
/// or discard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionLifecycle {
    #[default]
    Idle,
    Proposed(Session),
}

impl SessionLifecycle {
    /// Stores `session` as the live proposal. An empty session leaves the holder
    /// idle; an existing proposal is kept and returned instead.
    pub fn offer(&mut self, session: Session) -> Option<&Session> {
        if let SessionLifecycle::Idle = self {
            if !session.is_empty() {
                *self = SessionLifecycle::Proposed(session);
            }
        }
        self.current()
    }

    pub fn current(&self) -> Option<&Session> {
        match self {
            SessionLifecycle::Idle => None,
            SessionLifecycle::Proposed(session) => Some(session),
        }
    }

    pub fn is_proposed(&self) -> bool {
        matches!(self, SessionLifecycle::Proposed(_))
    }

    /// Hands the live proposal over for committing.
    pub fn take(&mut self) -> Result<Session, TangoError> {
        match std::mem::take(self) {
            SessionLifecycle::Idle => Err(TangoError::NoActiveSession),
            SessionLifecycle::Proposed(session) => Ok(session),
        }
    }

    /// Puts a session back after a commit that may be retried.
    pub fn restore(&mut self, session: Session) {
        *self = SessionLifecycle::Proposed(session);
    }

    pub fn discard(&mut self) -> Result<Session, TangoError> {
        self.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::VocabularyItem;

    fn session(ids: &[u32]) -> Session {
        Session {
            new_words: ids
                .iter()
                .map(|&id| VocabularyItem::new(id, "語", "ご", "word", "N5", id as i64))
                .collect(),
            ..Session::default()
        }
    }

    #[test]
    fn test_empty_session_stays_idle() {
        let mut lifecycle = SessionLifecycle::default();
        assert!(lifecycle.offer(Session::default()).is_none());
        assert!(!lifecycle.is_proposed());
        assert!(matches!(lifecycle.take(), Err(TangoError::NoActiveSession)));
    }

    #[test]
    fn test_offer_take_and_discard() {
        let mut lifecycle = SessionLifecycle::default();
        let live = lifecycle.offer(session(&[1, 2])).cloned().unwrap();
        assert_eq!(live.ids(), vec![1, 2]);

        // A second offer keeps the live proposal
        assert_eq!(lifecycle.offer(session(&[3])).unwrap().ids(), vec![1, 2]);

        let taken = lifecycle.take().unwrap();
        assert_eq!(taken, live);
        assert_eq!(lifecycle, SessionLifecycle::Idle);

        lifecycle.restore(taken);
        assert!(lifecycle.discard().is_ok());
        assert!(matches!(lifecycle.discard(), Err(TangoError::NoActiveSession)));
    }
}
