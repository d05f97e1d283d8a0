//! Class-name configuration and its resolution into per-phase names.
//!
//! [`ClassNames`] is either a prefix or an explicit mapping. The two forms are
//! mutually exclusive; a mapping never inherits prefix-derived names.
//!
//! | Key            | Prefix `P`          | Mapping fallback                 |
//! |----------------|---------------------|----------------------------------|
//! | `enter`        | `P-enter`           | none                             |
//! | `enterActive`  | `P-enter-active`    | resolved `enter` + `-active`     |
//! | `enterDone`    | `P-enter-done`      | resolved `enter` + `-done`       |
//! | `exit*`        | `P-exit*`           | as `enter*`                      |
//! | `appear`       | `P-appear`          | resolved `enter`                 |
//! | `appearActive` | `P-appear-active`   | resolved `enterActive`           |
//! | `appearDone`   | none                | none (enter done still applies)  |

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::phase::Direction;

/// Class-name configuration of a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassNames {
    /// Prefix from which every phase name is derived.
    Prefix(String),
    /// Explicit per-phase names.
    Map(ClassNameMap),
}

/// Explicit per-phase class names. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClassNameMap {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enter_active: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enter_done: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_active: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_done: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appear: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appear_active: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appear_done: Option<String>,
}

impl ClassNameMap {
    fn entries(&self) -> [(&'static str, Option<&str>); 9] {
        [
            ("enter", self.enter.as_deref()),
            ("enterActive", self.enter_active.as_deref()),
            ("enterDone", self.enter_done.as_deref()),
            ("exit", self.exit.as_deref()),
            ("exitActive", self.exit_active.as_deref()),
            ("exitDone", self.exit_done.as_deref()),
            ("appear", self.appear.as_deref()),
            ("appearActive", self.appear_active.as_deref()),
            ("appearDone", self.appear_done.as_deref()),
        ]
    }
}

/// Errors raised by [`ClassNames::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassNamesError {
    #[error("class name prefix is empty")]
    EmptyPrefix,
    #[error("class name prefix contains whitespace: {0:?}")]
    PrefixWhitespace(String),
    #[error("class name for `{key}` is empty")]
    EmptyClass { key: &'static str },
    #[error("class name for `{key}` contains whitespace: {value:?}")]
    ClassWhitespace { key: &'static str, value: String },
}

impl From<&str> for ClassNames {
    fn from(prefix: &str) -> Self {
        Self::Prefix(prefix.to_string())
    }
}

impl From<String> for ClassNames {
    fn from(prefix: String) -> Self {
        Self::Prefix(prefix)
    }
}

impl From<ClassNameMap> for ClassNames {
    fn from(map: ClassNameMap) -> Self {
        Self::Map(map)
    }
}

impl ClassNames {
    /// Check that every configured name is a single, non-empty class token.
    pub fn validate(&self) -> Result<(), ClassNamesError> {
        match self {
            Self::Prefix(prefix) => {
                if prefix.is_empty() {
                    return Err(ClassNamesError::EmptyPrefix);
                }
                if prefix.chars().any(char::is_whitespace) {
                    return Err(ClassNamesError::PrefixWhitespace(prefix.clone()));
                }
                Ok(())
            }
            Self::Map(map) => {
                for (key, value) in map.entries() {
                    let Some(value) = value else { continue };
                    if value.is_empty() {
                        return Err(ClassNamesError::EmptyClass { key });
                    }
                    if value.chars().any(char::is_whitespace) {
                        return Err(ClassNamesError::ClassWhitespace {
                            key,
                            value: value.to_string(),
                        });
                    }
                }
                Ok(())
            }
        }
    }

    /// Derive the concrete names for every phase. Does not validate.
    pub fn resolve(&self) -> ResolvedClassNames {
        match self {
            Self::Prefix(prefix) => ResolvedClassNames {
                enter: PhaseClassNames::derive(format!("{prefix}-enter")),
                exit: PhaseClassNames::derive(format!("{prefix}-exit")),
                appear: PhaseClassNames {
                    base: Some(format!("{prefix}-appear")),
                    active: Some(format!("{prefix}-appear-active")),
                    done: None,
                },
            },
            Self::Map(map) => ResolvedClassNames {
                enter: PhaseClassNames::from_keys(&map.enter, &map.enter_active, &map.enter_done),
                exit: PhaseClassNames::from_keys(&map.exit, &map.exit_active, &map.exit_done),
                appear: PhaseClassNames {
                    base: map.appear.clone(),
                    active: map.appear_active.clone(),
                    done: map.appear_done.clone(),
                },
            },
        }
    }
}

/// Base, active and done class of one sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseClassNames {
    pub base: Option<String>,
    pub active: Option<String>,
    pub done: Option<String>,
}

impl PhaseClassNames {
    fn derive(base: String) -> Self {
        Self {
            active: Some(format!("{base}-active")),
            done: Some(format!("{base}-done")),
            base: Some(base),
        }
    }

    fn from_keys(base: &Option<String>, active: &Option<String>, done: &Option<String>) -> Self {
        Self {
            active: active
                .clone()
                .or_else(|| base.as_ref().map(|b| format!("{b}-active"))),
            done: done
                .clone()
                .or_else(|| base.as_ref().map(|b| format!("{b}-done"))),
            base: base.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_none() && self.active.is_none() && self.done.is_none()
    }
}

/// Concrete class names for every phase.
///
/// `appear` holds only names configured or derived for the appear variant;
/// missing entries fall back to `enter` at lookup time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedClassNames {
    pub enter: PhaseClassNames,
    pub exit: PhaseClassNames,
    pub appear: PhaseClassNames,
}

impl ResolvedClassNames {
    /// Names that never touch the node.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.enter.is_empty() && self.exit.is_empty() && self.appear.is_empty()
    }

    pub fn start_class(&self, direction: Direction, appearing: bool) -> Option<&str> {
        match direction {
            Direction::Enter if appearing => self.appear.base.as_deref().or(self.enter.base.as_deref()),
            Direction::Enter => self.enter.base.as_deref(),
            Direction::Exit => self.exit.base.as_deref(),
        }
    }

    pub fn active_class(&self, direction: Direction, appearing: bool) -> Option<&str> {
        match direction {
            Direction::Enter if appearing => self
                .appear
                .active
                .as_deref()
                .or(self.enter.active.as_deref()),
            Direction::Enter => self.enter.active.as_deref(),
            Direction::Exit => self.exit.active.as_deref(),
        }
    }

    /// Done classes in application order.
    ///
    /// The enter done class is always applied at the end of an enter
    /// sequence; an explicit appear done class is layered after it.
    pub fn done_classes(&self, direction: Direction, appearing: bool) -> Vec<&str> {
        match direction {
            Direction::Enter => {
                let mut classes: Vec<&str> = self.enter.done.as_deref().into_iter().collect();
                if appearing
                    && let Some(done) = self.appear.done.as_deref()
                    && !classes.contains(&done)
                {
                    classes.push(done);
                }
                classes
            }
            Direction::Exit => self.exit.done.as_deref().into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_derives_every_phase() {
        let names = ClassNames::from("fade").resolve();
        assert_eq!(names.enter.base.as_deref(), Some("fade-enter"));
        assert_eq!(names.enter.active.as_deref(), Some("fade-enter-active"));
        assert_eq!(names.enter.done.as_deref(), Some("fade-enter-done"));
        assert_eq!(names.exit.base.as_deref(), Some("fade-exit"));
        assert_eq!(names.exit.active.as_deref(), Some("fade-exit-active"));
        assert_eq!(names.exit.done.as_deref(), Some("fade-exit-done"));
        assert_eq!(names.start_class(Direction::Enter, true), Some("fade-appear"));
        assert_eq!(names.active_class(Direction::Enter, true), Some("fade-appear-active"));
        assert_eq!(names.done_classes(Direction::Enter, true), vec!["fade-enter-done"]);
    }

    #[test]
    fn mapping_defaults_hang_off_the_resolved_base() {
        let names = ClassNames::from(ClassNameMap {
            enter: Some("in".into()),
            exit_active: Some("leaving".into()),
            ..Default::default()
        })
        .resolve();

        assert_eq!(names.enter.active.as_deref(), Some("in-active"));
        assert_eq!(names.enter.done.as_deref(), Some("in-done"));
        assert_eq!(names.exit.base, None);
        assert_eq!(names.exit.active.as_deref(), Some("leaving"));
        assert_eq!(names.exit.done, None);
    }

    #[test]
    fn partial_override_keeps_unrelated_keys() {
        let names = ClassNames::from(ClassNameMap {
            enter: Some("custom".into()),
            enter_done: Some("custom-super-done".into()),
            ..Default::default()
        })
        .resolve();

        assert_eq!(names.enter.base.as_deref(), Some("custom"));
        assert_eq!(names.enter.active.as_deref(), Some("custom-active"));
        assert_eq!(names.enter.done.as_deref(), Some("custom-super-done"));
    }

    #[test]
    fn appear_falls_back_to_enter_names() {
        let names = ClassNames::from(ClassNameMap {
            enter: Some("in".into()),
            appear: Some("first".into()),
            ..Default::default()
        })
        .resolve();

        assert_eq!(names.start_class(Direction::Enter, true), Some("first"));
        assert_eq!(names.active_class(Direction::Enter, true), Some("in-active"));
        assert_eq!(names.done_classes(Direction::Enter, true), vec!["in-done"]);
        assert_eq!(names.start_class(Direction::Enter, false), Some("in"));
    }

    #[test]
    fn appear_done_layers_on_enter_done() {
        let names = ClassNames::from(ClassNameMap {
            enter: Some("in".into()),
            appear_done: Some("first-done".into()),
            ..Default::default()
        })
        .resolve();

        assert_eq!(
            names.done_classes(Direction::Enter, true),
            vec!["in-done", "first-done"]
        );
        assert_eq!(names.done_classes(Direction::Enter, false), vec!["in-done"]);
    }

    #[test]
    fn appear_done_matching_enter_done_is_applied_once() {
        let names = ClassNames::from(ClassNameMap {
            enter: Some("in".into()),
            appear_done: Some("in-done".into()),
            ..Default::default()
        })
        .resolve();

        assert_eq!(names.done_classes(Direction::Enter, true), vec!["in-done"]);
    }

    #[test]
    fn validation_rejects_bad_tokens() {
        assert_eq!(ClassNames::from("").validate(), Err(ClassNamesError::EmptyPrefix));
        assert!(matches!(
            ClassNames::from("two words").validate(),
            Err(ClassNamesError::PrefixWhitespace(_))
        ));
        let map = ClassNames::from(ClassNameMap {
            exit_done: Some("a b".into()),
            ..Default::default()
        });
        assert_eq!(
            map.validate(),
            Err(ClassNamesError::ClassWhitespace {
                key: "exitDone",
                value: "a b".into()
            })
        );
        let map = ClassNames::from(ClassNameMap {
            appear: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(map.validate(), Err(ClassNamesError::EmptyClass { key: "appear" }));
        assert!(ClassNames::from("ok").validate().is_ok());
    }

    #[test]
    fn deserializes_prefix_or_mapping() {
        let prefix: ClassNames = serde_json::from_str(r#""slide""#).unwrap();
        assert_eq!(prefix, ClassNames::Prefix("slide".into()));

        let map: ClassNames =
            serde_json::from_str(r#"{"enter":"custom","enterActive":"custom-super-active"}"#)
                .unwrap();
        assert_eq!(
            map,
            ClassNames::Map(ClassNameMap {
                enter: Some("custom".into()),
                enter_active: Some("custom-super-active".into()),
                ..Default::default()
            })
        );

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"enter":"custom","enterActive":"custom-super-active"}"#);
    }
}
