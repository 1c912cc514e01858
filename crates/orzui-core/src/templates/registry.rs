//! Template registry: maps a component and configuration to template text
//!
//! Template bodies are embedded at compile time. Each component has exactly one
//! typed (`.tsx`) and one untyped (`.jsx`) body.

use super::component::Component;
use crate::config::{LanguageMode, ProjectConfig, Style};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Unknown component: {0}")]
    UnknownIdentifier(String),
}

/// Typed and untyped bodies for one component
struct TemplatePair {
    component: Component,
    typed: &'static str,
    untyped: &'static str,
}

macro_rules! template_pair {
    ($component:expr, $name:literal) => {
        TemplatePair {
            component: $component,
            typed: include_str!(concat!("../../templates/components/", $name, ".tsx")),
            untyped: include_str!(concat!("../../templates/components/", $name, ".jsx")),
        }
    };
}

static TEMPLATES: [TemplatePair; 6] = [
    template_pair!(Component::Button, "button"),
    template_pair!(Component::Card, "card"),
    template_pair!(Component::Input, "input"),
    template_pair!(Component::Badge, "badge"),
    template_pair!(Component::Alert, "alert"),
    template_pair!(Component::Avatar, "avatar"),
];

const CN_TYPED: &str = include_str!("../../templates/utils/cn.ts");
const CN_UNTYPED: &str = include_str!("../../templates/utils/cn.js");

/// Resolve a component identifier to its template text.
///
/// Callers are expected to validate identifiers first; this still refuses
/// names outside the supported set.
pub fn resolve(identifier: &str, config: &ProjectConfig) -> Result<&'static str, RegistryError> {
    let component = identifier.parse::<Component>()?;
    Ok(resolve_component(component, config))
}

/// Resolve an already-validated component to its template text
pub fn resolve_component(component: Component, config: &ProjectConfig) -> &'static str {
    select(component, config.language_mode, config.style)
}

fn select(component: Component, mode: LanguageMode, _style: Style) -> &'static str {
    // Style is accepted for future variants; every style shares the same bodies today.
    let pair = &TEMPLATES[component as usize];
    debug_assert_eq!(pair.component, component);
    match mode {
        LanguageMode::Typed => pair.typed,
        LanguageMode::Untyped => pair.untyped,
    }
}

/// Body of the `cn` class-name helper written by `init`
pub fn utility_template(mode: LanguageMode) -> &'static str {
    match mode {
        LanguageMode::Typed => CN_TYPED,
        LanguageMode::Untyped => CN_UNTYPED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(mode: LanguageMode, style: Style) -> ProjectConfig {
        ProjectConfig::new("src/components/orzui", mode, style)
    }

    #[test]
    fn test_table_is_indexed_by_component() {
        for (idx, pair) in TEMPLATES.iter().enumerate() {
            assert_eq!(pair.component as usize, idx);
        }
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let cfg = config(LanguageMode::Typed, Style::Default);
        for name in crate::templates::AVAILABLE_COMPONENTS {
            assert_eq!(resolve(name, &cfg).unwrap(), resolve(name, &cfg).unwrap());
        }
    }

    #[test]
    fn test_variants_differ_for_every_component() {
        let typed = config(LanguageMode::Typed, Style::Default);
        let untyped = config(LanguageMode::Untyped, Style::Default);

        for component in Component::ALL {
            let ts = resolve_component(component, &typed);
            let js = resolve_component(component, &untyped);
            assert_ne!(ts, js, "{} variants must differ", component);
            assert!(!ts.is_empty() && !js.is_empty());
        }
    }

    #[test]
    fn test_typed_variant_declares_props_interface() {
        let typed = config(LanguageMode::Typed, Style::Default);
        let untyped = config(LanguageMode::Untyped, Style::Default);

        for component in Component::ALL {
            let props = format!("export interface {}Props", component.export_name());
            assert!(resolve_component(component, &typed).contains(&props));
            assert!(!resolve_component(component, &untyped).contains(&props));

            let export = format!("export const {} = React.forwardRef", component.export_name());
            assert!(resolve_component(component, &untyped).contains(&export));
        }
    }

    #[test]
    fn test_style_does_not_change_output() {
        for mode in [LanguageMode::Typed, LanguageMode::Untyped] {
            let default = config(mode, Style::Default);
            let new_york = config(mode, Style::NewYork);
            for component in Component::ALL {
                assert_eq!(
                    resolve_component(component, &default),
                    resolve_component(component, &new_york)
                );
            }
        }
    }

    #[test]
    fn test_unknown_identifier_fails() {
        let cfg = config(LanguageMode::Typed, Style::Default);
        assert_eq!(
            resolve("widget", &cfg),
            Err(RegistryError::UnknownIdentifier("widget".to_string()))
        );
    }

    #[test]
    fn test_bodies_keep_original_endings() {
        let typed = config(LanguageMode::Typed, Style::Default);
        let untyped = config(LanguageMode::Untyped, Style::Default);

        for component in [Component::Badge, Component::Alert, Component::Avatar] {
            let name = component.export_name();
            let ending = format!("{}.displayName = '{}';", name, name);
            assert!(resolve_component(component, &typed).ends_with(&ending));
            assert!(resolve_component(component, &untyped).ends_with(&ending));
        }
        for component in [Component::Button, Component::Card, Component::Input] {
            let name = component.export_name();
            let ending = format!("{}.displayName = '{}';\n", name, name);
            assert!(resolve_component(component, &typed).ends_with(&ending));
            assert!(resolve_component(component, &untyped).ends_with(&ending));
        }
        for mode in [LanguageMode::Typed, LanguageMode::Untyped] {
            assert!(utility_template(mode).ends_with("return twMerge(clsx(inputs));\n}"));
        }
    }

    #[test]
    fn test_utility_template_variants() {
        assert!(utility_template(LanguageMode::Typed).contains("ClassValue[]"));
        assert!(!utility_template(LanguageMode::Untyped).contains("ClassValue"));
    }
}
