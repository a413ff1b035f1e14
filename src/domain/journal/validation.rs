//! Entry schema validation.
//!
//! `validate_submission` is pure and total: it inspects every field of a
//! [`ProblemSubmission`] and returns either a [`ProblemFormData`] or the
//! complete set of field errors, never both.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use super::{
    ConfidenceLevel, Difficulty, EntryDetails, Idea, KeyLearnings, ProblemFormData,
    ProblemSubmission, SelfReflection,
};

pub const IDEAS_REQUIRED: &str = "At least one idea is required";
pub const DIFFICULTY_INVALID: &str = "Difficulty must be one of Easy, Medium, Hard";
pub const CONFIDENCE_INVALID: &str = "Confidence level must be one of Low, Medium, High";

/// Error messages keyed by camelCase field path, e.g. `ideas[0].title`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for `path`. The first message for a path wins.
    pub fn insert(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(path.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.errors.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.errors.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.errors.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (path, message) in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{path}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Checks a submission against the entry schema.
pub fn validate_submission(
    submission: &ProblemSubmission,
) -> Result<ProblemFormData, FieldErrors> {
    let mut errors = FieldErrors::new();

    let problem_name = required(
        &mut errors,
        "problemName",
        &submission.problem_name,
        "Problem name is required",
    );
    let problem_id = required(
        &mut errors,
        "problemId",
        &submission.problem_id,
        "Problem ID is required",
    );
    let topic = required(&mut errors, "topic", &submission.topic, "Topic is required");

    let difficulty = match submission.difficulty.as_deref() {
        None => Difficulty::default(),
        Some(raw) => raw.parse::<Difficulty>().unwrap_or_else(|_| {
            errors.insert("difficulty", DIFFICULTY_INVALID);
            Difficulty::default()
        }),
    };

    let inputs = required(&mut errors, "inputs", &submission.inputs, "Inputs are required");
    let outputs = required(&mut errors, "outputs", &submission.outputs, "Outputs are required");
    let constraints = required(
        &mut errors,
        "constraints",
        &submission.constraints,
        "Constraints are required",
    );
    let core_question = required(
        &mut errors,
        "coreQuestion",
        &submission.core_question,
        "Core question is required",
    );
    let edge_cases = required(
        &mut errors,
        "edgeCases",
        &submission.edge_cases,
        "Edge cases are required",
    );

    if submission.ideas.is_empty() {
        errors.insert("ideas", IDEAS_REQUIRED);
    }
    let ideas: Vec<Idea> = submission
        .ideas
        .iter()
        .enumerate()
        .map(|(i, idea)| Idea {
            title: required(
                &mut errors,
                format!("ideas[{i}].title"),
                &idea.title,
                "Title is required",
            ),
            pros: required(
                &mut errors,
                format!("ideas[{i}].pros"),
                &idea.pros,
                "Pros are required",
            ),
            cons: required(
                &mut errors,
                format!("ideas[{i}].cons"),
                &idea.cons,
                "Cons are required",
            ),
        })
        .collect();

    let chosen_idea = required(
        &mut errors,
        "chosenIdea",
        &submission.chosen_idea,
        "Chosen idea is required",
    );
    let rationale = required(
        &mut errors,
        "rationale",
        &submission.rationale,
        "Rationale is required",
    );
    let pseudocode = required(
        &mut errors,
        "pseudocode",
        &submission.pseudocode,
        "Pseudocode is required",
    );
    let implementation = required(
        &mut errors,
        "implementation",
        &submission.implementation,
        "Implementation is required",
    );
    let bugs = required(&mut errors, "bugs", &submission.bugs, "Bugs are required");
    let missed_edge_cases = required(
        &mut errors,
        "missedEdgeCases",
        &submission.missed_edge_cases,
        "Missed edge cases are required",
    );
    let solution_summary = required(
        &mut errors,
        "solutionSummary",
        &submission.solution_summary,
        "Solution summary is required",
    );

    let learnings = &submission.key_learnings;
    let key_learnings = KeyLearnings {
        core_idea: required(
            &mut errors,
            "keyLearnings.coreIdea",
            &learnings.core_idea,
            "Core idea is required",
        ),
        data_structure_insights: required(
            &mut errors,
            "keyLearnings.dataStructureInsights",
            &learnings.data_structure_insights,
            "Data structure insights are required",
        ),
        algorithm_insights: required(
            &mut errors,
            "keyLearnings.algorithmInsights",
            &learnings.algorithm_insights,
            "Algorithm insights are required",
        ),
    };

    let reflection = &submission.self_reflection;
    let confidence_level = match reflection.confidence_level.as_deref() {
        None => ConfidenceLevel::default(),
        Some(raw) => raw.parse::<ConfidenceLevel>().unwrap_or_else(|_| {
            errors.insert("selfReflection.confidenceLevel", CONFIDENCE_INVALID);
            ConfidenceLevel::default()
        }),
    };
    let self_reflection = SelfReflection {
        what_went_well: required(
            &mut errors,
            "selfReflection.whatWentWell",
            &reflection.what_went_well,
            "What went well is required",
        ),
        what_could_be_better: required(
            &mut errors,
            "selfReflection.whatCouldBeBetter",
            &reflection.what_could_be_better,
            "What could be better is required",
        ),
        future_study: required(
            &mut errors,
            "selfReflection.futureStudy",
            &reflection.future_study,
            "Future study is required",
        ),
        confidence_level,
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    let details = EntryDetails {
        inputs,
        outputs,
        constraints,
        core_question,
        edge_cases,
        ideas,
        chosen_idea,
        rationale,
        pseudocode,
        implementation,
        bugs,
        missed_edge_cases,
        solution_summary,
        key_learnings,
        self_reflection,
    };

    Ok(ProblemFormData::new(problem_name, problem_id, topic, difficulty, details))
}

/// Records `message` under `path` when `value` is empty; returns the value unchanged.
fn required(
    errors: &mut FieldErrors,
    path: impl Into<String>,
    value: &str,
    message: &str,
) -> String {
    if value.is_empty() {
        errors.insert(path, message);
    }
    value.to_string()
}

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;
