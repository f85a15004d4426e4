/// Result-shaping builder
///
/// `Return` collects what a query should hand back and how the results of
/// its sub-queries are folded into that value.
use crate::query::record::{ReturnAction, ReturnClause, ReturnSpec};
use serde_json::Value;

/// Fluent builder for a [`ReturnSpec`].
///
/// # Examples
///
/// ```
/// use querydoc_core::Return;
///
/// let ret = Return::with_value("ident")
///     .append_as("user", "myUser")
///     .merge("user")
///     .id(None)
///     .computed(None);
///
/// let spec = ret.into_spec();
/// assert_eq!(spec.id, Some(true));
/// assert_eq!(spec.actions.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Return {
    options: ReturnSpec,
}

impl Return {
    /// An empty return spec: no value, no flags, no actions.
    pub fn new() -> Self {
        Self::default()
    }

    /// A return spec whose value is already set.
    pub fn with_value(value: impl Into<Value>) -> Self {
        Self::new().value(value)
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.options.value = Some(value.into());
        self
    }

    /// Include the document id. `None` means `true`.
    pub fn id(mut self, flag: impl Into<Option<bool>>) -> Self {
        self.options.id = Some(flag.into().unwrap_or(true));
        self
    }

    /// Include computed fields. `None` means `true`.
    pub fn computed(mut self, flag: impl Into<Option<bool>>) -> Self {
        self.options.computed = Some(flag.into().unwrap_or(true));
        self
    }

    /// Include the model name. `None` means `true`.
    pub fn model(mut self, flag: impl Into<Option<bool>>) -> Self {
        self.options.model = Some(flag.into().unwrap_or(true));
        self
    }

    /// Append the result of `target` under its own name.
    pub fn append(mut self, target: impl Into<String>) -> Self {
        self.options.actions.push(ReturnAction::Append {
            target: target.into(),
            alias: None,
        });
        self
    }

    /// Append the result of `target` under `alias`.
    pub fn append_as(mut self, target: impl Into<String>, alias: impl Into<String>) -> Self {
        self.options.actions.push(ReturnAction::Append {
            target: target.into(),
            alias: Some(alias.into()),
        });
        self
    }

    /// Merge the fields of `target`'s result into the returned value.
    pub fn merge(mut self, target: impl Into<String>) -> Self {
        self.options.actions.push(ReturnAction::Merge {
            target: target.into(),
        });
        self
    }

    pub fn spec(&self) -> &ReturnSpec {
        &self.options
    }

    pub fn into_spec(self) -> ReturnSpec {
        self.options
    }
}

impl From<Return> for ReturnClause {
    fn from(ret: Return) -> Self {
        ReturnClause::Spec(ret.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_has_empty_actions() {
        let spec = Return::new().into_spec();
        assert!(spec.actions.is_empty());
        assert_eq!(serde_json::to_value(&spec).unwrap(), json!({"actions": []}));
    }

    #[test]
    fn test_flags_default_to_true() {
        let spec = Return::new().id(None).computed(None).model(None).into_spec();
        assert_eq!(spec.id, Some(true));
        assert_eq!(spec.computed, Some(true));
        assert_eq!(spec.model, Some(true));
    }

    #[test]
    fn test_flags_can_be_disabled() {
        let spec = Return::new().id(false).model(true).into_spec();
        assert_eq!(spec.id, Some(false));
        assert_eq!(spec.model, Some(true));
        assert_eq!(spec.computed, None);
    }

    #[test]
    fn test_actions_keep_call_order() {
        let spec = Return::new()
            .append_as("num", "num1")
            .append("bool")
            .merge("arr")
            .into_spec();

        assert_eq!(
            spec.actions,
            vec![
                ReturnAction::Append {
                    target: "num".to_string(),
                    alias: Some("num1".to_string()),
                },
                ReturnAction::Append {
                    target: "bool".to_string(),
                    alias: None,
                },
                ReturnAction::Merge {
                    target: "arr".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_value_is_replaced() {
        let ret = Return::with_value("first").value(json!({"k": 1}));
        assert_eq!(ret.spec().value, Some(json!({"k": 1})));
    }
}
