//! Alert-rule label types
//!
//! Label metadata shared across alert-rule UI components: each rule id
//! maps to a set of label key/value pairs. Key order is irrelevant.

use std::collections::HashMap;

/// Label key/value pairs attached to a single alert rule.
pub type LabelSet = HashMap<String, String>;

/// Mapping from rule identifier to that rule's label set.
pub type AlertRuleLabels = HashMap<String, LabelSet>;
