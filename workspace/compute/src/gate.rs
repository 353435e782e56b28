/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of checking the session before rendering gated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    /// Navigate away. `replace` keeps the gated page out of the history stack.
    Redirect { to: &'static str, replace: bool },
}

/// Decides what a gated layout does for the current session flag.
///
/// Stateless: the same flag always yields the same decision.
pub fn evaluate(is_authenticated: bool) -> GateDecision {
    if is_authenticated {
        GateDecision::Render
    } else {
        GateDecision::Redirect {
            to: LOGIN_PATH,
            replace: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticated_renders() {
        assert_eq!(evaluate(true), GateDecision::Render);
    }

    #[test]
    fn test_anonymous_is_replaced_with_login() {
        assert_eq!(
            evaluate(false),
            GateDecision::Redirect {
                to: "/login",
                replace: true
            }
        );
    }

    #[test]
    fn test_no_memory_between_evaluations() {
        let first = evaluate(false);
        let _ = evaluate(true);
        assert_eq!(evaluate(false), first);
    }
}
