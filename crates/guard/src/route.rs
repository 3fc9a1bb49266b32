//! Route requirements, gate decisions, and redirect dispatch.

/// Role and/or permission a route or UI element requires.
///
/// Both fields optional; an empty requirement always passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessRequirement {
    pub role: Option<String>,
    pub permission: Option<String>,
}

impl AccessRequirement {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn role(code: impl Into<String>) -> Self {
        Self {
            role: Some(code.into()),
            permission: None,
        }
    }

    pub fn permission(code: impl Into<String>) -> Self {
        Self {
            role: None,
            permission: Some(code.into()),
        }
    }

    pub fn and_permission(mut self, code: impl Into<String>) -> Self {
        self.permission = Some(code.into());
        self
    }
}

/// Outcome of a route-entry evaluation.
///
/// Denial is data, not an error: dropping a decision has no side effects,
/// which is what lets a superseded navigation abandon its consequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Entry may proceed.
    Allow,

    /// Session is absent or unrecoverable; go sign in, then come back.
    RedirectToSignIn { redirect: String },

    /// Authenticated but not allowed; go to the forbidden destination.
    RedirectForbidden { message: String },
}

/// Navigation collaborator performing redirects.
pub trait Navigator {
    fn redirect(&self, path: &str, query: &[(String, String)]);
}

/// Turn a decision into a navigation call. `Allow` is a no-op.
pub fn dispatch(
    decision: &RouteDecision,
    navigator: &dyn Navigator,
    sign_in_path: &str,
    forbidden_path: &str,
) {
    match decision {
        RouteDecision::Allow => {}
        RouteDecision::RedirectToSignIn { redirect } => {
            navigator.redirect(
                sign_in_path,
                &[("redirect".to_string(), redirect.clone())],
            );
        }
        RouteDecision::RedirectForbidden { message } => {
            navigator.redirect(
                forbidden_path,
                &[("message".to_string(), message.clone())],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNavigator {
        calls: Mutex<Vec<(String, Vec<(String, String)>)>>,
    }

    impl Navigator for RecordingNavigator {
        fn redirect(&self, path: &str, query: &[(String, String)]) {
            self.calls
                .lock()
                .unwrap()
                .push((path.to_string(), query.to_vec()));
        }
    }

    #[test]
    fn allow_does_not_navigate() {
        let nav = RecordingNavigator::default();
        dispatch(&RouteDecision::Allow, &nav, "/sign-in", "/403");
        assert!(nav.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn sign_in_redirect_preserves_intended_path() {
        let nav = RecordingNavigator::default();
        let decision = RouteDecision::RedirectToSignIn {
            redirect: "/units/42".to_string(),
        };
        dispatch(&decision, &nav, "/sign-in", "/403");

        let calls = nav.calls.lock().unwrap();
        assert_eq!(calls[0].0, "/sign-in");
        assert_eq!(calls[0].1, vec![("redirect".to_string(), "/units/42".to_string())]);
    }

    #[test]
    fn forbidden_redirect_carries_message() {
        let nav = RecordingNavigator::default();
        let decision = RouteDecision::RedirectForbidden {
            message: "permission 'user:create' required".to_string(),
        };
        dispatch(&decision, &nav, "/sign-in", "/403");

        let calls = nav.calls.lock().unwrap();
        assert_eq!(calls[0].0, "/403");
        assert_eq!(calls[0].1[0].0, "message");
    }
}
