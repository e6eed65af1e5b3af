//! Skeleton class registry and best-match classification.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::family::SkeletonFamily;

/// One registered skeleton class.
///
/// Invariant: `contact_names` is a subset of `joint_names`; enforced when the
/// owning registry is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkeletonClass {
    name: String,
    joint_names: Vec<String>,
    contact_names: Vec<String>,
    contact_threshold: f64,
}

impl SkeletonClass {
    /// Returns the class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the canonical joint names, in rig order.
    pub fn joint_names(&self) -> &[String] {
        &self.joint_names
    }

    /// Returns the ground-contact joint names.
    pub fn contact_names(&self) -> &[String] {
        &self.contact_names
    }

    /// Returns the contact-detection distance threshold.
    pub fn contact_threshold(&self) -> f64 {
        self.contact_threshold
    }

    /// Returns the number of joints in this class's table.
    pub fn joint_count(&self) -> usize {
        self.joint_names.len()
    }
}

/// A custom skeleton class definition.
///
/// The deserializable counterpart of [`SkeletonClass`], for rigs the built-in
/// tables do not know. Validated by [`SkeletonRegistry::from_defs`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkeletonClassDef {
    /// Unique class name.
    pub name: String,
    /// Canonical joint names, in rig order.
    pub joint_names: Vec<String>,
    /// Ground-contact joint names; each must appear in `joint_names`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact_names: Vec<String>,
    /// Contact-detection distance threshold.
    pub contact_threshold: f64,
}

/// Result of classifying a joint-name set against a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Index of the best-matching class, in registration order.
    pub class_index: usize,
    /// Number of that class's joint names present in the input.
    pub matched: usize,
}

/// An immutable, index-aligned collection of skeleton classes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkeletonRegistry {
    classes: Vec<SkeletonClass>,
}

impl SkeletonRegistry {
    /// Returns the process-wide registry of built-in families.
    ///
    /// Built once on first use and immutable afterwards, so it can be read
    /// from any thread without synchronization.
    pub fn builtin() -> &'static SkeletonRegistry {
        static BUILTIN: OnceLock<SkeletonRegistry> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let defs = SkeletonFamily::ALL
                .iter()
                .map(|family| {
                    let joints = family.joint_names();
                    SkeletonClassDef {
                        name: family.as_str().to_string(),
                        joint_names: joints.iter().map(|j| j.to_string()).collect(),
                        contact_names: family
                            .contact_rule()
                            .apply(joints)
                            .iter()
                            .map(|j| j.to_string())
                            .collect(),
                        contact_threshold: family.contact_threshold(),
                    }
                })
                .collect();
            SkeletonRegistry::from_defs(defs).expect("built-in skeleton tables are valid")
        })
    }

    /// Builds a registry from custom class definitions.
    ///
    /// Definitions are registered in the order given; that order is also the
    /// tie-break order for [`match_joints`](Self::match_joints).
    pub fn from_defs(defs: Vec<SkeletonClassDef>) -> Result<Self, RegistryError> {
        if defs.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut classes = Vec::with_capacity(defs.len());
        let mut seen = HashSet::new();
        for def in defs {
            if !seen.insert(def.name.clone()) {
                return Err(RegistryError::DuplicateClassName { name: def.name });
            }
            if def.joint_names.is_empty() {
                return Err(RegistryError::NoJoints { class: def.name });
            }
            if !def.contact_threshold.is_finite() || def.contact_threshold <= 0.0 {
                return Err(RegistryError::InvalidThreshold {
                    class: def.name,
                    got: def.contact_threshold,
                });
            }
            let joints: HashSet<&str> = def.joint_names.iter().map(String::as_str).collect();
            if let Some(missing) = def
                .contact_names
                .iter()
                .find(|contact| !joints.contains(contact.as_str()))
            {
                return Err(RegistryError::UnknownContactJoint {
                    class: def.name.clone(),
                    joint: missing.clone(),
                });
            }

            classes.push(SkeletonClass {
                name: def.name,
                joint_names: def.joint_names,
                contact_names: def.contact_names,
                contact_threshold: def.contact_threshold,
            });
        }

        Ok(Self { classes })
    }

    /// Returns all registered classes, in registration order.
    pub fn classes(&self) -> &[SkeletonClass] {
        &self.classes
    }

    /// Returns the class at `index`, if registered.
    pub fn class(&self, index: usize) -> Option<&SkeletonClass> {
        self.classes.get(index)
    }

    /// Looks up a class and its index by name.
    pub fn find(&self, name: &str) -> Option<(usize, &SkeletonClass)> {
        self.classes
            .iter()
            .enumerate()
            .find(|(_, class)| class.name == name)
    }

    /// Classifies a joint-name set against the registered classes.
    ///
    /// Counts, per class, how many of its canonical joint names appear in the
    /// input (exact string equality; order and duplicates are irrelevant) and
    /// returns the class with the highest count together with that count.
    /// Ties resolve to the earliest registered class. An empty or entirely
    /// unrelated input reports class 0 with a count of 0.
    pub fn match_joints<I, S>(&self, joint_names: I) -> MatchResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items: Vec<S> = joint_names.into_iter().collect();
        let input: HashSet<&str> = items.iter().map(|name| name.as_ref()).collect();

        let mut best = MatchResult {
            class_index: 0,
            matched: 0,
        };
        for (class_index, class) in self.classes.iter().enumerate() {
            let matched = class
                .joint_names
                .iter()
                .filter(|joint| input.contains(joint.as_str()))
                .count();
            // Strict comparison keeps the first class on ties.
            if matched > best.matched {
                best = MatchResult {
                    class_index,
                    matched,
                };
            }
        }
        best
    }
}
