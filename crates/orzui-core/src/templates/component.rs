//! The closed set of components the registry knows about

use super::registry::RegistryError;
use std::fmt;
use std::str::FromStr;

/// A component that can be added to a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Component {
    Button,
    Card,
    Input,
    Badge,
    Alert,
    Avatar,
}

/// Names of every available component, in canonical order
pub const AVAILABLE_COMPONENTS: [&str; 6] = ["button", "card", "input", "badge", "alert", "avatar"];

impl Component {
    /// Every component, in canonical order
    pub const ALL: [Component; 6] = [
        Component::Button,
        Component::Card,
        Component::Input,
        Component::Badge,
        Component::Alert,
        Component::Avatar,
    ];

    /// Identifier used on the command line and as the file stem
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Button => "button",
            Component::Card => "card",
            Component::Input => "input",
            Component::Badge => "badge",
            Component::Alert => "alert",
            Component::Avatar => "avatar",
        }
    }

    /// Exported React name (e.g. `Button`)
    pub fn export_name(&self) -> &'static str {
        match self {
            Component::Button => "Button",
            Component::Card => "Card",
            Component::Input => "Input",
            Component::Badge => "Badge",
            Component::Alert => "Alert",
            Component::Avatar => "Avatar",
        }
    }

    /// Look up a component by identifier (exact match)
    pub fn parse(name: &str) -> Option<Component> {
        Component::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Component {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Component::parse(s).ok_or_else(|| RegistryError::UnknownIdentifier(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_names_match_enum_order() {
        let names: Vec<&str> = Component::ALL.iter().map(Component::as_str).collect();
        assert_eq!(names, AVAILABLE_COMPONENTS);
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!("card".parse::<Component>(), Ok(Component::Card));
        assert!("Card".parse::<Component>().is_err());
        assert!(" card".parse::<Component>().is_err());
        assert_eq!(
            "widget".parse::<Component>(),
            Err(RegistryError::UnknownIdentifier("widget".to_string()))
        );
    }
}
