//! Alert-rule shared state scope
//!
//! A provider owns one state cell — the rule-disabled flag and the
//! per-rule label mapping — and hands out handles to it. Handles are the
//! only access path, and every handle operation fails loudly once the
//! provider is gone, so out-of-scope use surfaces as an explicit error
//! instead of a silent default. Single-threaded by design: the state
//! lives in an `Rc<RefCell<..>>` and is mutated only through the handle
//! setters.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use logloom_core::domain::alert::AlertRuleLabels;
use thiserror::Error;

/// Errors raised by alert-rule state access
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlertRuleError {
    /// The handle outlived its provider.
    #[error("alert rule state must be used within an AlertRuleProvider")]
    OutsideProvider,
}

/// Snapshot of the shared alert-rule state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertRuleState {
    /// `None` until something determines whether the rule is disabled.
    pub is_alert_rule_disabled: Option<bool>,
    pub alert_rule_labels: AlertRuleLabels,
}

/// Owner of the alert-rule state cell.
///
/// Dropping the provider discards the state; handles created from it
/// start failing with [`AlertRuleError::OutsideProvider`] from then on.
#[derive(Debug, Default)]
pub struct AlertRuleProvider {
    state: Rc<RefCell<AlertRuleState>>,
}

impl AlertRuleProvider {
    /// Create a provider with undetermined disabled state and no labels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Obtain a handle for consumers inside this provider's scope.
    pub fn handle(&self) -> AlertRuleHandle {
        AlertRuleHandle {
            state: Rc::downgrade(&self.state),
        }
    }
}

/// Consumer access to the alert-rule state.
///
/// Cheap to clone and pass down; all operations go through the owning
/// provider's cell.
#[derive(Debug, Clone)]
pub struct AlertRuleHandle {
    state: Weak<RefCell<AlertRuleState>>,
}

impl AlertRuleHandle {
    /// Read a snapshot of the full state.
    pub fn read(&self) -> Result<AlertRuleState, AlertRuleError> {
        Ok(self.upgrade()?.borrow().clone())
    }

    pub fn is_alert_rule_disabled(&self) -> Result<Option<bool>, AlertRuleError> {
        Ok(self.upgrade()?.borrow().is_alert_rule_disabled)
    }

    pub fn set_alert_rule_disabled(
        &self,
        disabled: Option<bool>,
    ) -> Result<(), AlertRuleError> {
        self.upgrade()?.borrow_mut().is_alert_rule_disabled = disabled;
        Ok(())
    }

    pub fn alert_rule_labels(&self) -> Result<AlertRuleLabels, AlertRuleError> {
        Ok(self.upgrade()?.borrow().alert_rule_labels.clone())
    }

    pub fn set_alert_rule_labels(&self, labels: AlertRuleLabels) -> Result<(), AlertRuleError> {
        self.upgrade()?.borrow_mut().alert_rule_labels = labels;
        Ok(())
    }

    fn upgrade(&self) -> Result<Rc<RefCell<AlertRuleState>>, AlertRuleError> {
        self.state.upgrade().ok_or(AlertRuleError::OutsideProvider)
    }
}
