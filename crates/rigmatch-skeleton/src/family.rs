//! Built-in skeleton rig families and their canonical joint tables.

use serde::{Deserialize, Serialize};

use crate::contact::ContactRule;

/// Known skeleton rig conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkeletonFamily {
    /// Mixamo humanoid rig (24 joints, no fingers).
    Mixamo,
    /// Elephant rig with trunk, tail, and ear bones on a Biped core.
    Elephant,
    /// Crab rig with rigify-style ORG/DEF bone prefixes.
    CrabDance,
    /// CMU-style humanoid rig with finger-base and thumb joints.
    Xia,
    /// Blender humanoid rig with full three-bone fingers.
    Datagen,
}

impl SkeletonFamily {
    /// All built-in families, in registration order.
    pub const ALL: [SkeletonFamily; 5] = [
        SkeletonFamily::Mixamo,
        SkeletonFamily::Elephant,
        SkeletonFamily::CrabDance,
        SkeletonFamily::Xia,
        SkeletonFamily::Datagen,
    ];

    /// Returns the family name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkeletonFamily::Mixamo => "mixamo",
            SkeletonFamily::Elephant => "elephant",
            SkeletonFamily::CrabDance => "crab_dance",
            SkeletonFamily::Xia => "xia",
            SkeletonFamily::Datagen => "datagen",
        }
    }

    /// Returns the canonical joint names for this family, in rig order.
    pub fn joint_names(&self) -> &'static [&'static str] {
        match self {
            SkeletonFamily::Mixamo => &[
                // Core
                "Hips",
                // Left leg
                "LeftUpLeg",
                "LeftLeg",
                "LeftFoot",
                "LeftToeBase",
                "LeftToe_End",
                // Right leg
                "RightUpLeg",
                "RightLeg",
                "RightFoot",
                "RightToeBase",
                "RightToe_End",
                // Spine and head
                "Spine",
                "Spine1",
                "Spine2",
                "Neck",
                "Head",
                // Left arm
                "LeftShoulder",
                "LeftArm",
                "LeftForeArm",
                "LeftHand",
                // Right arm
                "RightShoulder",
                "RightArm",
                "RightForeArm",
                "RightHand",
            ],
            SkeletonFamily::Elephant => &[
                // Core and tail
                "Hips",
                "Bip01_Pelvis",
                "BN_Tail_01",
                "BN_Tail_02",
                "BN_Tail_03",
                "BN_Tail_04",
                "Bip01_Spine",
                // Hind legs
                "Bip01_R_Thigh",
                "Bip01_R_Calf",
                "Bip01_R_Foot",
                "Bip01_R_Toe0",
                "Bip01_L_Thigh",
                "Bip01_L_Calf",
                "Bip01_L_Foot",
                "Bip01_L_Toe0",
                // Spine and head
                "Bip01_Spine1",
                "Bip01_Spine2",
                "Bip01_Neck",
                "Bip01_Head",
                // Face
                "BN_Eyebrow_L",
                "BN_Eyebrow_R",
                "BN_Ear_L_01",
                "BN_Ear_L_02",
                "BN_Mouth_01",
                "BN_Ear_R_01",
                "BN_Ear_R_02",
                // Trunk
                "BN_Nose_01",
                "BN_Nose_02",
                "BN_Nose_03",
                "BN_Nose_04",
                "BN_Nose_05",
                "BN_Nose_06",
                // Forelegs
                "Bip01_R_Clavicle",
                "Bip01_R_UpperArm",
                "Bip01_R_Forearm",
                "Bip01_R_Hand",
                "Bip01_L_Clavicle",
                "Bip01_L_UpperArm",
                "Bip01_L_Forearm",
                "Bip01_L_Hand",
            ],
            SkeletonFamily::CrabDance => &[
                // Core
                "ORG_Hips",
                "ORG_BN_Bip01_Pelvis",
                // Eye stalks
                "DEF_BN_Eye_L_01",
                "DEF_BN_Eye_L_02",
                "DEF_BN_Eye_L_03",
                "DEF_BN_Eye_L_03_end",
                "DEF_BN_Eye_R_01",
                "DEF_BN_Eye_R_02",
                "DEF_BN_Eye_R_03",
                "DEF_BN_Eye_R_03_end",
                // Rear leg pair
                "DEF_BN_Leg_L_11",
                "DEF_BN_Leg_L_12",
                "DEF_BN_Leg_L_13",
                "DEF_BN_Leg_L_14",
                "DEF_BN_Leg_L_15",
                "DEF_BN_Leg_L_15_end",
                "DEF_BN_Leg_R_11",
                "DEF_BN_Leg_R_12",
                "DEF_BN_Leg_R_13",
                "DEF_BN_Leg_R_14",
                "DEF_BN_Leg_R_15",
                "DEF_BN_Leg_R_15_end",
                // Front and middle left legs
                "DEF_BN_leg_L_01",
                "DEF_BN_leg_L_02",
                "DEF_BN_leg_L_03",
                "DEF_BN_leg_L_04",
                "DEF_BN_leg_L_05",
                "DEF_BN_leg_L_05_end",
                "DEF_BN_leg_L_06",
                "DEF_BN_Leg_L_07",
                "DEF_BN_Leg_L_08",
                "DEF_BN_Leg_L_09",
                "DEF_BN_Leg_L_10",
                "DEF_BN_Leg_L_10_end",
                // Front and middle right legs
                "DEF_BN_leg_R_01",
                "DEF_BN_leg_R_02",
                "DEF_BN_leg_R_03",
                "DEF_BN_leg_R_04",
                "DEF_BN_leg_R_05",
                "DEF_BN_leg_R_05_end",
                "DEF_BN_leg_R_06",
                "DEF_BN_Leg_R_07",
                "DEF_BN_Leg_R_08",
                "DEF_BN_Leg_R_09",
                "DEF_BN_Leg_R_10",
                "DEF_BN_Leg_R_10_end",
                // Shell
                "DEF_BN_Bip01_Pelvis",
                "DEF_BN_Bip01_Pelvis_end",
                // Claws
                "DEF_BN_Arm_L_01",
                "DEF_BN_Arm_L_02",
                "DEF_BN_Arm_L_03",
                "DEF_BN_Arm_L_03_end",
                "DEF_BN_Arm_R_01",
                "DEF_BN_Arm_R_02",
                "DEF_BN_Arm_R_03",
                "DEF_BN_Arm_R_03_end",
            ],
            SkeletonFamily::Xia => &[
                // Core
                "Hips",
                // Left leg
                "LHipJoint",
                "LeftUpLeg",
                "LeftLeg",
                "LeftFoot",
                "LeftToeBase",
                // Right leg
                "RHipJoint",
                "RightUpLeg",
                "RightLeg",
                "RightFoot",
                "RightToeBase",
                // Spine and head
                "LowerBack",
                "Spine",
                "Spine1",
                "Neck",
                "Neck1",
                "Head",
                // Left arm and hand
                "LeftShoulder",
                "LeftArm",
                "LeftForeArm",
                "LeftHand",
                "LeftFingerBase",
                "LeftHandIndex1",
                "LThumb",
                // Right arm and hand
                "RightShoulder",
                "RightArm",
                "RightForeArm",
                "RightHand",
                "RightFingerBase",
                "RightHandIndex1",
                "RThumb",
            ],
            SkeletonFamily::Datagen => &[
                // Core and legs
                "bone_spine",
                "bone_thigh_left",
                "bone_shin_left",
                "bone_foot_left",
                "bone_toe_left",
                "bone_toe_left_end",
                "bone_thigh_right",
                "bone_shin_right",
                "bone_foot_right",
                "bone_toe_right",
                "bone_toe_right_end",
                // Lower spine
                "bone_spine_001",
                "bone_spine_002",
                "bone_spine_003",
                // Left arm
                "bone_shoulder_left",
                "bone_upper_arm_left",
                "bone_forearm_left",
                "bone_hand_left",
                // Left hand fingers
                "bone_palm_01_left",
                "bone_f_index_01_left",
                "bone_f_index_02_left",
                "bone_f_index_03_left",
                "bone_f_index_03_left_end",
                "bone_thumb_01_left",
                "bone_thumb_02_left",
                "bone_thumb_03_left",
                "bone_thumb_03_left_end",
                "bone_palm_02_left",
                "bone_f_middle_01_left",
                "bone_f_middle_02_left",
                "bone_f_middle_03_left",
                "bone_f_middle_03_left_end",
                "bone_palm_03_left",
                "bone_f_ring_01_left",
                "bone_f_ring_02_left",
                "bone_f_ring_03_left",
                "bone_f_ring_03_left_end",
                "bone_palm_04_left",
                "bone_f_pinky_01_left",
                "bone_f_pinky_02_left",
                "bone_f_pinky_03_left",
                "bone_f_pinky_03_left_end",
                // Upper spine and head
                "bone_spine_004",
                "bone_neck",
                "bone_head",
                "bone_head_end",
                // Right arm
                "bone_shoulder_right",
                "bone_upper_arm_right",
                "bone_forearm_right",
                "bone_hand_right",
                // Right hand fingers
                "bone_palm_01_right",
                "bone_f_index_01_right",
                "bone_f_index_02_right",
                "bone_f_index_03_right",
                "bone_f_index_03_right_end",
                "bone_thumb_01_right",
                "bone_thumb_02_right",
                "bone_thumb_03_right",
                "bone_thumb_03_right_end",
                "bone_palm_02_right",
                "bone_f_middle_01_right",
                "bone_f_middle_02_right",
                "bone_f_middle_03_right",
                "bone_f_middle_03_right_end",
                "bone_palm_03_right",
                "bone_f_ring_01_right",
                "bone_f_ring_02_right",
                "bone_f_ring_03_right",
                "bone_f_ring_03_right_end",
                "bone_palm_04_right",
                "bone_f_pinky_01_right",
                "bone_f_pinky_02_right",
                "bone_f_pinky_03_right",
                "bone_f_pinky_03_right_end",
                // Pelvis
                "bone_pelvis_left",
                "bone_pelvis_left_end",
                "bone_pelvis_right",
                "bone_pelvis_right_end",
            ],
        }
    }

    /// Returns the number of joints in this family's table.
    pub fn joint_count(&self) -> usize {
        self.joint_names().len()
    }

    /// Returns the rule deriving this family's ground-contact joints.
    pub fn contact_rule(&self) -> ContactRule {
        match self {
            SkeletonFamily::Mixamo => ContactRule::Explicit(&[
                "LeftToe_End",
                "RightToe_End",
                "LeftToeBase",
                "RightToeBase",
            ]),
            SkeletonFamily::Elephant => ContactRule::Substrings {
                all: &[],
                any: &["Hand", "Toe", "Foot"],
            },
            // Leg tip bones: segment 05, 10, or 15 end bones touch the ground.
            SkeletonFamily::CrabDance => ContactRule::Substrings {
                all: &["end"],
                any: &["05", "10", "15"],
            },
            SkeletonFamily::Xia => ContactRule::Explicit(&["LeftToeBase", "RightToeBase"]),
            SkeletonFamily::Datagen => ContactRule::Substrings {
                all: &[],
                any: &["toe", "foot"],
            },
        }
    }

    /// Returns the contact-detection distance threshold for this family.
    pub fn contact_threshold(&self) -> f64 {
        match self {
            SkeletonFamily::CrabDance => 0.006,
            _ => 0.018,
        }
    }
}

impl std::fmt::Display for SkeletonFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
