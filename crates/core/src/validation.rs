//! Input validation framework.
//!
//! A validator is an ordered list of rule closures over one model type.
//! Rules are declared with a builder, evaluated in declaration order, and
//! every violation is collected in a single pass — callers get the complete
//! list, not one violation per round-trip. Validators are pure: no storage,
//! no network, same input ⇒ same output.

/// A single field-level violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validation capability, the substitution seam for tests.
pub trait Validate<M> {
    fn validate(&self, model: &M) -> Vec<Violation>;
}

type RuleFn<M> = Box<dyn Fn(&M) -> Option<String> + Send + Sync>;

struct Rule<M> {
    field: &'static str,
    check: RuleFn<M>,
}

/// Ordered, collect-all validator over a model type.
///
/// A rule receives the whole model, so cross-field rules are ordinary
/// closures — no special composite machinery.
pub struct Validator<M> {
    rules: Vec<Rule<M>>,
}

impl<M> Validator<M> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Declare a rule for `field`. `check` returns a message when violated.
    pub fn rule(
        mut self,
        field: &'static str,
        check: impl Fn(&M) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.rules.push(Rule {
            field,
            check: Box::new(check),
        });
        self
    }

    /// Evaluate every rule in declaration order, collecting all violations.
    pub fn validate(&self, model: &M) -> Vec<Violation> {
        self.rules
            .iter()
            .filter_map(|rule| {
                (rule.check)(model).map(|message| Violation::new(rule.field, message))
            })
            .collect()
    }
}

impl<M> Default for Validator<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Validate<M> for Validator<M> {
    fn validate(&self, model: &M) -> Vec<Violation> {
        Validator::validate(self, model)
    }
}

/// Base rule vocabulary: predicate constructors returning rule closures.
pub mod rules {
    /// Violated when the extracted string is empty or whitespace-only.
    pub fn not_empty<M>(
        extract: impl Fn(&M) -> &str + Send + Sync + 'static,
        message: &str,
    ) -> impl Fn(&M) -> Option<String> + Send + Sync + 'static {
        let message = message.to_string();
        move |model| {
            if extract(model).trim().is_empty() {
                Some(message.clone())
            } else {
                None
            }
        }
    }

    /// Violated when the extracted string's character count is outside
    /// `[min, max]` (inclusive).
    pub fn length_between<M>(
        extract: impl Fn(&M) -> &str + Send + Sync + 'static,
        min: usize,
        max: usize,
        message: &str,
    ) -> impl Fn(&M) -> Option<String> + Send + Sync + 'static {
        let message = message.to_string();
        move |model| {
            let len = extract(model).chars().count();
            if len < min || len > max {
                Some(message.clone())
            } else {
                None
            }
        }
    }

    /// Violated when the extracted number is not strictly greater than
    /// `threshold`.
    pub fn greater_than<M, N>(
        extract: impl Fn(&M) -> N + Send + Sync + 'static,
        threshold: N,
        message: &str,
    ) -> impl Fn(&M) -> Option<String> + Send + Sync + 'static
    where
        N: PartialOrd + Copy + Send + Sync + 'static,
    {
        let message = message.to_string();
        move |model| {
            if extract(model) > threshold {
                None
            } else {
                Some(message.clone())
            }
        }
    }

    /// Violated when the extracted string is not a member of `allowed`.
    pub fn one_of<M>(
        extract: impl Fn(&M) -> &str + Send + Sync + 'static,
        allowed: &[&str],
        message: &str,
    ) -> impl Fn(&M) -> Option<String> + Send + Sync + 'static {
        let allowed: Vec<String> = allowed.iter().map(|s| s.to_string()).collect();
        let message = message.to_string();
        move |model| {
            if allowed.iter().any(|a| a == extract(model)) {
                None
            } else {
                Some(message.clone())
            }
        }
    }
}
