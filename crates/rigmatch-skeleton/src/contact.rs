//! Contact-joint derivation rules.

/// How a skeleton class's ground-contact joints derive from its joint table.
///
/// The derived set is computed once at registry construction and stored as
/// explicit data; it is never recomputed on access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactRule {
    /// A fixed list of contact joint names.
    Explicit(&'static [&'static str]),
    /// Joint names containing every substring in `all` and, when `any` is
    /// non-empty, at least one substring in `any`.
    Substrings {
        all: &'static [&'static str],
        any: &'static [&'static str],
    },
}

impl ContactRule {
    /// Applies the rule to a joint table.
    ///
    /// Explicit lists are returned as declared; substring filters select
    /// matching names in joint-table order.
    pub fn apply(&self, joint_names: &[&'static str]) -> Vec<&'static str> {
        match self {
            ContactRule::Explicit(names) => names.to_vec(),
            ContactRule::Substrings { all, any } => joint_names
                .iter()
                .copied()
                .filter(|name| {
                    all.iter().all(|needle| name.contains(needle))
                        && (any.is_empty() || any.iter().any(|needle| name.contains(needle)))
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_rule_keeps_declared_order() {
        let rule = ContactRule::Explicit(&["toe_r", "toe_l"]);
        assert_eq!(rule.apply(&["root", "toe_l", "toe_r"]), vec!["toe_r", "toe_l"]);
    }

    #[test]
    fn test_substring_rule_filters_in_table_order() {
        let rule = ContactRule::Substrings {
            all: &["end"],
            any: &["toe", "heel"],
        };
        let table = ["hips", "toe_l_end", "heel_end", "toe_l", "spine_end"];
        assert_eq!(rule.apply(&table), vec!["toe_l_end", "heel_end"]);
    }

    #[test]
    fn test_substring_rule_with_empty_any_matches_on_all_only() {
        let rule = ContactRule::Substrings {
            all: &["foot"],
            any: &[],
        };
        assert_eq!(rule.apply(&["foot_l", "hand_l"]), vec!["foot_l"]);
    }
}
