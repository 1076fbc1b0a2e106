//! The step-wizard state machine.
//!
//! Steps are numbered 2 through 9: 2..8 collect data, 9 is the review
//! page. Each data step owns a fixed field set; [`STEPS`] is the single
//! source of truth for which fields a step reads, which file slots it
//! carries, and which template renders it. Transitions clamp to the
//! valid range, so `prev` from 2 stays at 2 and `next` from 9 stays at
//! 9 (finalize is a dedicated action, not a `next` transition).

use crate::labels::Sections;

pub mod form;

pub use form::FormState;

/// First data-entry step. Step 1 is the language chooser at `/`.
pub const FIRST_STEP: u8 = 2;
/// Review step; navigation-terminal, record creation goes through finalize.
pub const REVIEW_STEP: u8 = 9;

/// Specification of one data-entry step.
pub struct StepSpec {
    pub index: u8,
    /// Template name registered with the page renderer.
    pub template: &'static str,
    /// Which section heading titles the page.
    pub section: fn(&Sections) -> &'static str,
    /// Text fields read from the submission, in form order.
    pub fields: &'static [&'static str],
    /// Upload fields; set in FormState only when a file is stored.
    pub file_slots: &'static [&'static str],
}

/// All data-entry steps, ordered. The review step has no field set.
pub static STEPS: [StepSpec; 7] = [
    StepSpec {
        index: 2,
        template: "member_info",
        section: |s| s.member_info,
        fields: &["name", "full_name_en", "dob_bs", "dob_ad", "gender", "occupation"],
        file_slots: &[],
    },
    StepSpec {
        index: 3,
        template: "contact",
        section: |s| s.contact,
        fields: &["perm_address", "temp_address", "phone", "email"],
        file_slots: &[],
    },
    StepSpec {
        index: 4,
        template: "documents",
        section: |s| s.gov_doc,
        fields: &["doc_type", "doc_issued_date"],
        file_slots: &["doc_file"],
    },
    StepSpec {
        index: 5,
        template: "education",
        section: |s| s.education,
        fields: &["education"],
        file_slots: &[],
    },
    StepSpec {
        index: 6,
        template: "professional",
        section: |s| s.professional,
        fields: &["job_title", "experience_years", "skills", "org_name"],
        file_slots: &[],
    },
    StepSpec {
        index: 7,
        template: "family",
        section: |s| s.family,
        fields: &[
            "father_name",
            "mother_name",
            "spouse_name",
            "children",
            "em_name",
            "em_relation",
            "em_phone",
            "em_address",
        ],
        file_slots: &[],
    },
    StepSpec {
        index: 8,
        template: "payment",
        section: |s| s.payment,
        fields: &["membership_type", "pay_method", "transaction_id", "declaration"],
        file_slots: &["payment_file"],
    },
];

/// Look up the spec for a data-entry step. `None` for the review step
/// and anything out of range.
pub fn step_spec(n: u8) -> Option<&'static StepSpec> {
    STEPS.iter().find(|s| s.index == n)
}

/// Whether `n` addresses a wizard page at all (data entry or review).
pub fn in_range(n: u8) -> bool {
    (FIRST_STEP..=REVIEW_STEP).contains(&n)
}

/// Navigation direction submitted with a step form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Prev,
    Next,
}

impl NavAction {
    /// Anything other than an explicit `prev` advances.
    pub fn parse(action: &str) -> Self {
        if action == "prev" {
            NavAction::Prev
        } else {
            NavAction::Next
        }
    }

    /// Apply the transition from step `n`, clamped to [2, 9].
    pub fn apply(self, n: u8) -> u8 {
        match self {
            NavAction::Prev => n.saturating_sub(1).max(FIRST_STEP),
            NavAction::Next => (n + 1).min(REVIEW_STEP),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_ordered_and_contiguous() {
        let indices: Vec<u8> = STEPS.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_step_spec_lookup() {
        assert_eq!(step_spec(2).unwrap().fields.len(), 6);
        assert_eq!(step_spec(5).unwrap().fields, &["education"]);
        assert!(step_spec(9).is_none());
        assert!(step_spec(1).is_none());
        assert!(step_spec(10).is_none());
    }

    #[test]
    fn test_file_slots_only_on_upload_steps() {
        for spec in &STEPS {
            match spec.index {
                4 => assert_eq!(spec.file_slots, &["doc_file"]),
                8 => assert_eq!(spec.file_slots, &["payment_file"]),
                _ => assert!(spec.file_slots.is_empty()),
            }
        }
    }

    #[test]
    fn test_transitions_stay_in_range() {
        for n in FIRST_STEP..=REVIEW_STEP {
            for action in [NavAction::Prev, NavAction::Next] {
                let next = action.apply(n);
                assert!(in_range(next), "step {n} {action:?} left range: {next}");
            }
        }
    }

    #[test]
    fn test_prev_from_first_step_stays() {
        assert_eq!(NavAction::Prev.apply(FIRST_STEP), FIRST_STEP);
    }

    #[test]
    fn test_next_from_review_stays() {
        assert_eq!(NavAction::Next.apply(REVIEW_STEP), REVIEW_STEP);
    }

    #[test]
    fn test_parse_action_defaults_to_next() {
        assert_eq!(NavAction::parse("prev"), NavAction::Prev);
        assert_eq!(NavAction::parse("next"), NavAction::Next);
        assert_eq!(NavAction::parse(""), NavAction::Next);
        assert_eq!(NavAction::parse("finish"), NavAction::Next);
    }
}
