#[cfg(test)]
mod tests {
    use crate::domain::foundation::EntryId;
    use crate::domain::journal::{seed_entries, ConfidenceLevel, Difficulty, JournalEntry};
    use serde_json::json;

    #[test]
    fn test_entry_serializes_with_camel_case_names() {
        let entry = seed_entries().remove(0);
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["id"], json!(1));
        assert_eq!(value["problemName"], json!("Two Sum"));
        assert_eq!(value["dateDone"], json!("2024-03-20"));
        assert!(value["details"]["coreQuestion"].is_string());
        assert!(value["details"]["keyLearnings"]["dataStructureInsights"].is_string());
        assert_eq!(value["details"]["selfReflection"]["confidenceLevel"], json!("High"));
    }

    #[test]
    fn test_entry_decodes_server_shape() {
        // Server stores ids as strings, dates as timestamps, empty ideas as null
        let value = json!({
            "id": "4",
            "problemName": "Climbing Stairs",
            "problemId": "70",
            "dateDone": "2024-03-21T00:00:00Z",
            "topic": "Dynamic Programming",
            "difficulty": "Easy",
            "details": {
                "inputs": "n = 3",
                "outputs": "3",
                "constraints": "1 <= n <= 45",
                "coreQuestion": "Count distinct ways to climb",
                "edgeCases": "n = 1",
                "ideas": null,
                "chosenIdea": "DP",
                "rationale": "Linear",
                "pseudocode": "fib",
                "implementation": "fn climb()",
                "bugs": "none",
                "missedEdgeCases": "none",
                "solutionSummary": "Fibonacci",
                "keyLearnings": {
                    "coreIdea": "Recurrence",
                    "dataStructureInsights": "Two variables",
                    "algorithmInsights": "Bottom up"
                },
                "selfReflection": {
                    "whatWentWell": "Fast",
                    "whatCouldBeBetter": "Nothing",
                    "futureStudy": "More DP",
                    "confidenceLevel": "Low"
                }
            }
        });

        let entry: JournalEntry = serde_json::from_value(value).unwrap();

        assert_eq!(entry.id, EntryId::new(4));
        assert_eq!(entry.difficulty, Difficulty::Easy);
        assert!(entry.details.ideas.is_empty());
        assert_eq!(entry.date_done, "2024-03-21T00:00:00Z");
        assert_eq!(entry.details.self_reflection.confidence_level, ConfidenceLevel::Low);
    }

    #[test]
    fn test_entry_tolerates_unknown_ratings_and_missing_fields() {
        let value = json!({
            "id": "9",
            "problemName": "Jump Game",
            "difficulty": "medium",
            "details": {
                "coreQuestion": "Can the last index be reached?",
                "selfReflection": { "confidenceLevel": "" }
            }
        });

        let entry: JournalEntry = serde_json::from_value(value).unwrap();

        assert_eq!(entry.id, EntryId::new(9));
        assert_eq!(entry.difficulty, Difficulty::Medium);
        assert_eq!(entry.topic, "");
        assert_eq!(entry.details.core_question, "Can the last index be reached?");
        assert_eq!(entry.details.inputs, "");
        assert_eq!(entry.details.self_reflection.confidence_level, ConfidenceLevel::Medium);
        assert_eq!(entry.details.self_reflection.what_went_well, "");
    }

    #[test]
    fn test_entry_still_requires_an_id() {
        let mut value = serde_json::to_value(seed_entries().remove(0)).unwrap();
        value.as_object_mut().unwrap().remove("id");

        assert!(serde_json::from_value::<JournalEntry>(value).is_err());
    }
}
