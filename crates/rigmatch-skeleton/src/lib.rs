//! Canonical skeleton rig tables and best-match rig classification.
//!
//! This crate maps known character armature conventions (Mixamo, a
//! Biped-style elephant, a rigify crab, the CMU/Xia humanoid, and a Blender
//! "datagen" humanoid) to their canonical joint-name tables, the subset of
//! joints expected to contact the ground, and the distance threshold used by
//! downstream contact detection.
//!
//! # Overview
//!
//! - A [`SkeletonRegistry`] is an immutable, index-aligned list of
//!   [`SkeletonClass`] entries. The built-in registry is constructed once per
//!   process; custom registries are built from [`SkeletonClassDef`]
//!   definitions and validated on construction.
//! - [`SkeletonRegistry::match_joints`] classifies an arbitrary set of joint
//!   names by counting overlap with each class's table and picking the
//!   highest count, earliest class on ties.
//!
//! # Example
//!
//! ```
//! use rigmatch_skeleton::SkeletonRegistry;
//!
//! let registry = SkeletonRegistry::builtin();
//!
//! // Joint names as an armature loader would report them.
//! let result = registry.match_joints(["Hips", "LeftUpLeg", "LeftLeg", "LeftFoot", "Spine2"]);
//! assert_eq!(result.matched, 5);
//!
//! let class = registry.class(result.class_index).unwrap();
//! assert_eq!(class.name(), "mixamo");
//! assert_eq!(class.contact_threshold(), 0.018);
//! ```
//!
//! # Modules
//!
//! - [`contact`]: Contact-joint derivation rules
//! - [`error`]: Registry construction errors
//! - [`family`]: Built-in rig families and their joint tables
//! - [`registry`]: The registry and the classification routine

pub mod contact;
pub mod error;
pub mod family;
pub mod registry;

// Re-export commonly used types at the crate root
pub use contact::ContactRule;
pub use error::RegistryError;
pub use family::SkeletonFamily;
pub use registry::{MatchResult, SkeletonClass, SkeletonClassDef, SkeletonRegistry};

#[cfg(test)]
mod integration_tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_each_family_matches_itself_exactly() {
        let registry = SkeletonRegistry::builtin();
        for (index, family) in SkeletonFamily::ALL.iter().enumerate() {
            let result = registry.match_joints(family.joint_names());
            assert_eq!(result.class_index, index, "family {family}");
            assert_eq!(result.matched, family.joint_count(), "family {family}");
        }
    }

    #[test]
    fn test_contact_names_are_subset_of_joint_names() {
        for class in SkeletonRegistry::builtin().classes() {
            for contact in class.contact_names() {
                assert!(
                    class.joint_names().contains(contact),
                    "contact joint {contact} missing from {}",
                    class.name()
                );
            }
        }
    }

    #[test]
    fn test_empty_input_reports_first_class_with_zero_matches() {
        let result = SkeletonRegistry::builtin().match_joints(std::iter::empty::<&str>());
        assert_eq!(
            result,
            MatchResult {
                class_index: 0,
                matched: 0
            }
        );
    }

    #[test]
    fn test_unrelated_input_reports_first_class_with_zero_matches() {
        let result =
            SkeletonRegistry::builtin().match_joints(["pelvis", "armature_root", "jaw", "tongue"]);
        assert_eq!(
            result,
            MatchResult {
                class_index: 0,
                matched: 0
            }
        );
    }

    #[test]
    fn test_mixamo_table_matches_with_full_count() {
        let registry = SkeletonRegistry::builtin();
        let result = registry.match_joints(SkeletonFamily::Mixamo.joint_names());
        assert_eq!(
            result,
            MatchResult {
                class_index: 0,
                matched: 24
            }
        );
    }

    #[test]
    fn test_partial_xia_overlap_wins_over_noise() {
        // "Hips", "LeftUpLeg", and "LeftLeg" also appear in the Mixamo table,
        // but "LHipJoint" pushes Xia to 4 against Mixamo's 3.
        let result = SkeletonRegistry::builtin().match_joints([
            "Hips",
            "LHipJoint",
            "LeftUpLeg",
            "LeftLeg",
            "prop_sword",
            "ik_target_hand",
        ]);
        assert_eq!(
            result,
            MatchResult {
                class_index: 3,
                matched: 4
            }
        );
    }

    #[test]
    fn test_builtin_registry_is_index_aligned_with_families() {
        let registry = SkeletonRegistry::builtin();
        assert_eq!(registry.classes().len(), SkeletonFamily::ALL.len());
        for (index, family) in SkeletonFamily::ALL.iter().enumerate() {
            let class = registry.class(index).unwrap();
            assert_eq!(class.name(), family.as_str());
            assert_eq!(class.joint_count(), family.joint_count());
            assert_eq!(class.contact_threshold(), family.contact_threshold());
        }
    }

    #[test]
    fn test_builtin_lookup_by_name() {
        let (index, class) = SkeletonRegistry::builtin().find("crab_dance").unwrap();
        assert_eq!(index, 2);
        assert_eq!(class.contact_threshold(), 0.006);
        assert_eq!(class.contact_names().len(), 6);
    }
}
