use model::AuthenticatedUser;

/// Profile card fields, pre-filled from the signed-in user.
///
/// `role` is shown but cannot be edited.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl ProfileForm {
    pub fn from_user(user: &AuthenticatedUser) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
        }
    }

    /// Form for a missing user: every field blank.
    pub fn from_session(user: Option<&AuthenticatedUser>) -> Self {
        user.map(Self::from_user).unwrap_or_default()
    }
}

/// Change-password card fields. Always start empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PasswordForm {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

/// A notification preference row: title and description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationPreference {
    pub title: &'static str,
    pub description: &'static str,
}

pub const NOTIFICATION_PREFERENCES: [NotificationPreference; 2] = [
    NotificationPreference {
        title: "Email Notifications",
        description: "Receive email updates about your account",
    },
    NotificationPreference {
        title: "Sales Alerts",
        description: "Get notified about new sales and orders",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use model::seed;

    #[test]
    fn test_profile_prefilled_from_user() {
        let form = ProfileForm::from_user(&seed::demo_user());
        assert_eq!(form.name, "Admin User");
        assert_eq!(form.email, "admin@crmpro.com");
        assert_eq!(form.role, "Administrator");
    }

    #[test]
    fn test_profile_without_user_is_blank() {
        assert_eq!(ProfileForm::from_session(None), ProfileForm::default());
    }

    #[test]
    fn test_password_form_starts_empty() {
        let form = PasswordForm::default();
        assert!(form.current.is_empty() && form.new.is_empty() && form.confirm.is_empty());
    }
}
