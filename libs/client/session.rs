/// Explicit session context handed to the UI chrome, replacing the ambient
/// global the original design leaned on. `logout` invalidates the state
/// synchronously, before any navigation happens.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    state: SessionState,
}

#[derive(Clone, Debug, PartialEq)]
enum SessionState {
    Active { user_role: String, name: String },
    LoggedOut,
}

impl Session {
    pub fn login(user_role: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            state: SessionState::Active {
                user_role: user_role.into(),
                name: name.into(),
            },
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active { .. })
    }

    pub fn user_role(&self) -> Option<&str> {
        match &self.state {
            SessionState::Active { user_role, .. } => Some(user_role),
            SessionState::LoggedOut => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match &self.state {
            SessionState::Active { name, .. } => Some(name),
            SessionState::LoggedOut => None,
        }
    }

    pub fn logout(&mut self) {
        self.state = SessionState::LoggedOut;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_exposes_role_and_name() {
        let session = Session::login("mentor", "Ada");
        assert!(session.is_active());
        assert_eq!(session.user_role(), Some("mentor"));
        assert_eq!(session.name(), Some("Ada"));
    }

    #[test]
    fn logout_invalidates_synchronously() {
        let mut session = Session::login("admin", "Grace");
        session.logout();

        assert!(!session.is_active());
        assert_eq!(session.user_role(), None);
        assert_eq!(session.name(), None);
    }
}
