//! Request lifecycle shared by every workflow controller.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl RequestState {
    /// In-flight guard: moves to `Pending` and returns `true` unless a
    /// request is already pending, in which case nothing changes.
    pub fn try_begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = RequestState::Pending;
        true
    }

    pub fn succeed(&mut self) {
        *self = RequestState::Succeeded;
    }

    pub fn fail(&mut self) {
        *self = RequestState::Failed;
    }

    pub fn finish<T, E>(&mut self, result: &Result<T, E>) {
        match result {
            Ok(_) => self.succeed(),
            Err(_) => self.fail(),
        }
    }

    pub fn is_pending(self) -> bool {
        self == RequestState::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::RequestState;

    #[test]
    fn second_begin_while_pending_is_refused() {
        let mut state = RequestState::default();
        assert!(state.try_begin());
        assert!(!state.try_begin());
        assert_eq!(state, RequestState::Pending);
    }

    #[test]
    fn completed_requests_can_be_dispatched_again() {
        let mut state = RequestState::default();
        assert!(state.try_begin());
        state.finish::<(), ()>(&Err(()));
        assert_eq!(state, RequestState::Failed);
        assert!(state.try_begin());
        state.finish::<(), ()>(&Ok(()));
        assert_eq!(state, RequestState::Succeeded);
        assert!(!state.is_pending());
    }
}
