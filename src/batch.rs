//! Ordered groups of shell commands.
use std::slice;

/// A labelled, ordered list of shell commands.
///
/// Commands are literal shell strings: no escaping, no validation. The runner
/// issues them strictly in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    label: String,
    commands: Vec<String>,
}

impl Batch {
    /// Create a batch from a label and commands in execution order.
    #[must_use]
    pub fn new<I, S>(label: &str, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.to_string(),
            commands: commands.into_iter().map(Into::into).collect(),
        }
    }

    /// Human-readable label, used in log output.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Commands in execution order.
    #[must_use]
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Number of commands.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the batch holds no commands.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate over the commands in execution order.
    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.commands.iter()
    }
}

impl<'a> IntoIterator for &'a Batch {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
