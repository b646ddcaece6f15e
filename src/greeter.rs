//! Greeter that turns a stored name into a greeting

use tracing::{debug, trace};

/// Holds a name and produces a greeting for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeter {
    name: String,
}

impl Greeter {
    /// Create a greeter for `name`, stored exactly as given
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug!(name = %name, "created greeter");
        Self { name }
    }

    /// The name this greeter was created with
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `Hello, <name>!`
    pub fn greet(&self) -> String {
        trace!(name = %self.name, "greeting");
        format!("Hello, {}!", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet_world() {
        let greeter = Greeter::new("World");
        assert_eq!(greeter.greet(), "Hello, World!");
    }

    #[test]
    fn test_empty_name() {
        let greeter = Greeter::new("");
        assert_eq!(greeter.greet(), "Hello, !");
    }

    #[test]
    fn test_special_characters_not_escaped() {
        let greeter = Greeter::new("World!");
        assert_eq!(greeter.greet(), "Hello, World!!");
    }

    #[test]
    fn test_name_stored_verbatim() {
        let greeter = Greeter::new("  Ferris \t");
        assert_eq!(greeter.name(), "  Ferris \t");
    }

    #[test]
    fn test_greet_is_repeatable() {
        let greeter = Greeter::new("Bob");
        let first = greeter.greet();
        assert_eq!(greeter.greet(), first);
        assert_eq!(greeter.greet(), first);
    }

    #[test]
    fn test_accepts_owned_string() {
        let greeter = Greeter::new(String::from("Charlie"));
        assert_eq!(greeter.greet(), "Hello, Charlie!");
    }
}
