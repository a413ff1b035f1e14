#[cfg(test)]
mod tests {
    use crate::domain::foundation::EntryId;
    use crate::domain::journal::validation::{
        validate_submission, FieldErrors, CONFIDENCE_INVALID, DIFFICULTY_INVALID, IDEAS_REQUIRED,
    };
    use crate::domain::journal::{
        seed_entries, ConfidenceLevel, Difficulty, Idea, ProblemSubmission,
    };
    use proptest::prelude::*;

    fn valid_submission() -> ProblemSubmission {
        ProblemSubmission::from(&seed_entries()[1])
    }

    fn errors_for(submission: &ProblemSubmission) -> FieldErrors {
        validate_submission(submission).expect_err("submission should be rejected")
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accepted submissions
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn test_valid_submission_produces_form_data() {
        let data = validate_submission(&valid_submission()).unwrap();

        assert_eq!(data.problem_name(), "Valid Parentheses");
        assert_eq!(data.difficulty(), Difficulty::Medium);
        assert_eq!(data.details().ideas.len(), 2);
        assert_eq!(data.details().self_reflection.confidence_level, ConfidenceLevel::High);
    }

    #[test]
    fn test_missing_enums_fall_back_to_medium() {
        let mut submission = valid_submission();
        submission.difficulty = None;
        submission.self_reflection.confidence_level = None;

        let data = validate_submission(&submission).unwrap();

        assert_eq!(data.difficulty(), Difficulty::Medium);
        assert_eq!(data.details().self_reflection.confidence_level, ConfidenceLevel::Medium);
    }

    #[test]
    fn test_text_is_not_trimmed() {
        let mut submission = valid_submission();
        submission.topic = "  Stack  ".to_string();
        submission.bugs = " ".to_string();

        let data = validate_submission(&submission).unwrap();

        assert_eq!(data.topic(), "  Stack  ");
        assert_eq!(data.details().bugs, " ");
    }

    #[test]
    fn test_into_entry_sets_identity_and_date() {
        let data = validate_submission(&valid_submission()).unwrap();

        let entry = data.into_entry(EntryId::new(3), "2024-04-01");

        assert_eq!(entry.id, EntryId::new(3));
        assert_eq!(entry.date_done, "2024-04-01");
        assert_eq!(entry.problem_id, "20");
    }

    // ─────────────────────────────────────────────────────────────────────
    // Rejected submissions
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn test_blank_draft_reports_every_required_field() {
        let errors = errors_for(&ProblemSubmission::blank());

        assert_eq!(errors.get("problemName"), Some("Problem name is required"));
        assert_eq!(errors.get("problemId"), Some("Problem ID is required"));
        assert_eq!(errors.get("ideas[0].title"), Some("Title is required"));
        assert_eq!(errors.get("ideas[0].pros"), Some("Pros are required"));
        assert_eq!(errors.get("ideas[0].cons"), Some("Cons are required"));
        assert_eq!(errors.get("keyLearnings.coreIdea"), Some("Core idea is required"));
        assert_eq!(
            errors.get("selfReflection.futureStudy"),
            Some("Future study is required")
        );
        // 3 identity + 5 understanding + 3 idea + 2 approach + 4 implementation
        // + 1 summary + 3 learnings + 3 reflection
        assert_eq!(errors.len(), 24);
        assert!(!errors.contains("difficulty"));
        assert!(!errors.contains("ideas"));
    }

    #[test]
    fn test_zero_ideas_is_rejected() {
        let mut submission = valid_submission();
        submission.ideas.clear();

        let errors = errors_for(&submission);

        assert_eq!(errors.get("ideas"), Some(IDEAS_REQUIRED));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_idea_errors_are_keyed_by_index() {
        let mut submission = valid_submission();
        submission.ideas.push(Idea::new("Recursion", "", "Deep stacks"));

        let errors = errors_for(&submission);

        assert_eq!(errors.get("ideas[2].pros"), Some("Pros are required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_unknown_enums_are_rejected() {
        let mut submission = valid_submission();
        submission.difficulty = Some("Impossible".to_string());
        submission.self_reflection.confidence_level = Some(String::new());

        let errors = errors_for(&submission);

        assert_eq!(errors.get("difficulty"), Some(DIFFICULTY_INVALID));
        assert_eq!(errors.get("selfReflection.confidenceLevel"), Some(CONFIDENCE_INVALID));
    }

    #[test]
    fn test_field_errors_display_lists_paths_in_order() {
        let mut errors = FieldErrors::new();
        errors.insert("topic", "Topic is required");
        errors.insert("bugs", "Bugs are required");
        errors.insert("topic", "ignored");

        assert_eq!(
            errors.to_string(),
            "bugs: Bugs are required; topic: Topic is required"
        );
    }

    // ─────────────────────────────────────────────────────────────────────
    // Properties
    // ─────────────────────────────────────────────────────────────────────

    fn leaf_field(submission: &mut ProblemSubmission, index: usize) -> (&'static str, &mut String) {
        let s = submission;
        match index {
            0 => ("problemName", &mut s.problem_name),
            1 => ("problemId", &mut s.problem_id),
            2 => ("topic", &mut s.topic),
            3 => ("inputs", &mut s.inputs),
            4 => ("outputs", &mut s.outputs),
            5 => ("constraints", &mut s.constraints),
            6 => ("coreQuestion", &mut s.core_question),
            7 => ("edgeCases", &mut s.edge_cases),
            8 => ("chosenIdea", &mut s.chosen_idea),
            9 => ("rationale", &mut s.rationale),
            10 => ("pseudocode", &mut s.pseudocode),
            11 => ("implementation", &mut s.implementation),
            12 => ("bugs", &mut s.bugs),
            13 => ("missedEdgeCases", &mut s.missed_edge_cases),
            14 => ("solutionSummary", &mut s.solution_summary),
            15 => ("keyLearnings.coreIdea", &mut s.key_learnings.core_idea),
            16 => ("keyLearnings.dataStructureInsights", &mut s.key_learnings.data_structure_insights),
            17 => ("keyLearnings.algorithmInsights", &mut s.key_learnings.algorithm_insights),
            18 => ("selfReflection.whatWentWell", &mut s.self_reflection.what_went_well),
            19 => ("selfReflection.whatCouldBeBetter", &mut s.self_reflection.what_could_be_better),
            _ => ("selfReflection.futureStudy", &mut s.self_reflection.future_study),
        }
    }

    fn idea_strategy() -> impl Strategy<Value = Idea> {
        (".{1,12}", ".{1,12}", ".{1,12}").prop_map(|(t, p, c)| Idea::new(t, p, c))
    }

    proptest! {
        #[test]
        fn missing_leaf_field_is_always_reported(index in 0usize..21) {
            let mut submission = valid_submission();
            let (path, field) = leaf_field(&mut submission, index);
            field.clear();

            let errors = validate_submission(&submission).unwrap_err();

            prop_assert!(errors.contains(path));
            prop_assert_eq!(errors.len(), 1);
        }

        #[test]
        fn valid_text_round_trips_verbatim(
            name in ".{1,24}",
            summary in ".{1,48}",
            ideas in prop::collection::vec(idea_strategy(), 1..6),
        ) {
            let mut submission = valid_submission();
            submission.problem_name = name.clone();
            submission.solution_summary = summary.clone();
            submission.ideas = ideas.clone();

            let data = validate_submission(&submission).unwrap();

            prop_assert_eq!(data.problem_name(), name.as_str());
            prop_assert_eq!(&data.details().solution_summary, &summary);
            prop_assert_eq!(&data.details().ideas, &ideas);
        }
    }
}
