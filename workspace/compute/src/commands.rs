//! Command seams for record mutations that have no backend yet.
//!
//! Views call these traits instead of acting directly, so wiring a real
//! backend is a matter of swapping [`StubCommands`] for another implementation.

use model::Order;
use tracing::debug;

use crate::settings::{PasswordForm, ProfileForm};

pub const EDIT_CUSTOMER_MESSAGE: &str = "Edit customer functionality - Coming soon!";
pub const DELETE_CUSTOMER_MESSAGE: &str = "Delete customer functionality - Coming soon!";
pub const EXPORT_SALES_MESSAGE: &str = "Exporting sales data to CSV...";
pub const SETTINGS_SAVED_MESSAGE: &str = "Settings saved successfully!";

/// Result of running a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The request was accepted; nothing further to do.
    Acknowledged { message: String },
    /// No implementation is wired up; no data was changed.
    NotImplemented { message: String },
}

impl CommandOutcome {
    pub fn message(&self) -> &str {
        match self {
            CommandOutcome::Acknowledged { message } => message,
            CommandOutcome::NotImplemented { message } => message,
        }
    }

    pub fn is_implemented(&self) -> bool {
        matches!(self, CommandOutcome::Acknowledged { .. })
    }

    fn not_implemented(message: &str) -> Self {
        CommandOutcome::NotImplemented {
            message: message.to_string(),
        }
    }
}

/// Fire-and-forget user notifications.
pub trait Notifier {
    fn success(&self, message: &str);
}

pub trait CustomerCommands {
    fn edit(&self, customer_id: &str) -> CommandOutcome;
    fn delete(&self, customer_id: &str) -> CommandOutcome;
}

pub trait SalesCommands {
    fn export_csv(&self, orders: &[Order]) -> CommandOutcome;
}

pub trait SettingsCommands {
    fn save_profile(&self, profile: &ProfileForm) -> CommandOutcome;
    fn update_password(&self, password: &PasswordForm) -> CommandOutcome;
}

/// Placeholder implementation of every command; mutates nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StubCommands;

impl CustomerCommands for StubCommands {
    fn edit(&self, customer_id: &str) -> CommandOutcome {
        debug!(customer_id, "Edit customer requested");
        CommandOutcome::not_implemented(EDIT_CUSTOMER_MESSAGE)
    }

    fn delete(&self, customer_id: &str) -> CommandOutcome {
        debug!(customer_id, "Delete customer requested");
        CommandOutcome::not_implemented(DELETE_CUSTOMER_MESSAGE)
    }
}

impl SalesCommands for StubCommands {
    fn export_csv(&self, orders: &[Order]) -> CommandOutcome {
        debug!(num_orders = orders.len(), "CSV export requested");
        CommandOutcome::not_implemented(EXPORT_SALES_MESSAGE)
    }
}

impl SettingsCommands for StubCommands {
    fn save_profile(&self, profile: &ProfileForm) -> CommandOutcome {
        debug!(email = %profile.email, "Profile save requested");
        CommandOutcome::Acknowledged {
            message: SETTINGS_SAVED_MESSAGE.to_string(),
        }
    }

    fn update_password(&self, _password: &PasswordForm) -> CommandOutcome {
        debug!("Password update requested");
        CommandOutcome::Acknowledged {
            message: SETTINGS_SAVED_MESSAGE.to_string(),
        }
    }
}

/// Shows the outcome's message to the user and hands the outcome back.
pub fn notify<N: Notifier + ?Sized>(notifier: &N, outcome: CommandOutcome) -> CommandOutcome {
    notifier.success(outcome.message());
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::seed;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNotifier {
        messages: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn test_customer_stubs_do_not_touch_data() {
        let customers = seed::customers();
        let before = customers.clone();
        let commands = StubCommands;

        let edit = commands.edit(&customers[0].id);
        let delete = commands.delete(&customers[1].id);

        assert!(!edit.is_implemented());
        assert_eq!(edit.message(), EDIT_CUSTOMER_MESSAGE);
        assert_eq!(delete.message(), DELETE_CUSTOMER_MESSAGE);
        assert_eq!(customers, before);
    }

    #[test]
    fn test_export_is_not_implemented() {
        let outcome = StubCommands.export_csv(&seed::orders());
        assert_eq!(
            outcome,
            CommandOutcome::NotImplemented {
                message: "Exporting sales data to CSV...".to_string()
            }
        );
    }

    #[test]
    fn test_settings_saves_are_acknowledged() {
        let profile = ProfileForm::from_user(&seed::demo_user());
        let outcome = StubCommands.save_profile(&profile);
        assert!(outcome.is_implemented());
        assert_eq!(outcome.message(), "Settings saved successfully!");

        let outcome = StubCommands.update_password(&PasswordForm::default());
        assert_eq!(outcome.message(), SETTINGS_SAVED_MESSAGE);
    }

    #[test]
    fn test_notify_forwards_message() {
        let notifier = RecordingNotifier::default();
        let outcome = notify(&notifier, StubCommands.delete("3"));
        assert_eq!(outcome.message(), DELETE_CUSTOMER_MESSAGE);
        assert_eq!(
            notifier.messages.borrow().as_slice(),
            &[DELETE_CUSTOMER_MESSAGE.to_string()]
        );
    }
}
