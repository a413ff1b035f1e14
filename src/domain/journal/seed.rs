//! Sample journal entries.
//!
//! Fixed entries that establish the canonical shape of a journal entry. Used
//! by the in-memory journal API (offline mode) and by tests; the dashboard
//! never falls back to them when the remote fetch fails.

use super::{
    ConfidenceLevel, Difficulty, EntryDetails, Idea, JournalEntry, KeyLearnings, SelfReflection,
};
use crate::domain::foundation::EntryId;

/// Returns the sample entries, newest first.
pub fn seed_entries() -> Vec<JournalEntry> {
    vec![two_sum(), valid_parentheses(), median_of_two_sorted_arrays()]
}

fn two_sum() -> JournalEntry {
    JournalEntry {
        id: EntryId::new(1),
        problem_name: "Two Sum".to_string(),
        problem_id: "1".to_string(),
        date_done: "2024-03-20".to_string(),
        topic: "Arrays".to_string(),
        difficulty: Difficulty::Easy,
        details: EntryDetails {
            inputs: "nums = [2,7,11,15], target = 9".to_string(),
            outputs: "[0,1]".to_string(),
            constraints: "2 <= nums.length <= 104, -109 <= nums[i] <= 109".to_string(),
            core_question: "Find two numbers in the array that add up to the target".to_string(),
            edge_cases: "Empty array, no solution, multiple solutions".to_string(),
            ideas: vec![
                Idea::new("Brute Force", "Simple to implement", "O(n²) time complexity"),
                Idea::new("Hash Map", "O(n) time complexity", "Uses extra space"),
                Idea::new("Two Pointers", "No extra space", "Requires sorted array"),
            ],
            chosen_idea: "Hash Map".to_string(),
            rationale: "Best time complexity and reasonable space usage".to_string(),
            pseudocode: "Create hash map\nIterate through array\nCheck if complement exists\nReturn indices".to_string(),
            implementation: "function twoSum(nums, target) {\n  const map = new Map();\n  for(let i = 0; i < nums.length; i++) {\n    const complement = target - nums[i];\n    if(map.has(complement)) {\n      return [map.get(complement), i];\n    }\n    map.set(nums[i], i);\n  }\n  return [];\n}".to_string(),
            bugs: "Forgot to handle case when no solution exists".to_string(),
            missed_edge_cases: "Array with duplicate numbers".to_string(),
            solution_summary: "Used a hash map to store complements, achieving O(n) time complexity by trading space for time. The key insight was that we only need to store each number's complement once.".to_string(),
            key_learnings: KeyLearnings {
                core_idea: "Using a hash map to store and look up values in O(1) time is a powerful pattern for array problems where we need to find pairs or complements.".to_string(),
                data_structure_insights: "Hash maps are perfect for problems requiring O(1) lookups. The space-time tradeoff is often worth it for better time complexity.".to_string(),
                algorithm_insights: "Single-pass solutions are often possible when we can store and look up values efficiently. This pattern appears in many array problems.".to_string(),
            },
            self_reflection: SelfReflection {
                what_went_well: "Quickly identified the hash map approach and implemented it correctly. Good handling of edge cases.".to_string(),
                what_could_be_better: "Could have considered the two-pointer approach first, even though it wasn't optimal. Should practice more with different approaches.".to_string(),
                future_study: "Review two-pointer techniques and practice more hash map problems. Study space-time tradeoffs in detail.".to_string(),
                confidence_level: ConfidenceLevel::High,
            },
        },
    }
}

fn valid_parentheses() -> JournalEntry {
    JournalEntry {
        id: EntryId::new(2),
        problem_name: "Valid Parentheses".to_string(),
        problem_id: "20".to_string(),
        date_done: "2024-03-19".to_string(),
        topic: "Stack".to_string(),
        difficulty: Difficulty::Medium,
        details: EntryDetails {
            inputs: "s = '()[]{}'".to_string(),
            outputs: "true".to_string(),
            constraints: "1 <= s.length <= 104".to_string(),
            core_question: "Check if the string of parentheses is valid".to_string(),
            edge_cases: "Empty string, single character, nested parentheses".to_string(),
            ideas: vec![
                Idea::new("Stack", "O(n) time complexity", "Uses extra space"),
                Idea::new("Counter", "No extra space", "Doesn't work for all cases"),
            ],
            chosen_idea: "Stack".to_string(),
            rationale: "Most reliable solution for all cases".to_string(),
            pseudocode: "Create stack\nIterate through string\nPush opening brackets\nPop and check closing brackets".to_string(),
            implementation: "function isValid(s) {\n  const stack = [];\n  const map = {')': '(', '}': '{', ']': '['};\n  for(let char of s) {\n    if(!map[char]) stack.push(char);\n    else if(stack.pop() !== map[char]) return false;\n  }\n  return stack.length === 0;\n}".to_string(),
            bugs: "Didn't check if stack is empty before popping".to_string(),
            missed_edge_cases: "String with only opening brackets".to_string(),
            solution_summary: "Used a stack to keep track of opening brackets and their corresponding closing brackets. The key insight was that we only need to push opening brackets onto the stack and pop them when we encounter the corresponding closing bracket.".to_string(),
            key_learnings: KeyLearnings {
                core_idea: "Using a stack to keep track of opening brackets and their corresponding closing brackets is a powerful pattern for problems involving parentheses or matching pairs.".to_string(),
                data_structure_insights: "Stacks are perfect for problems where we need to keep track of the order of elements and ensure they are processed in the correct order.".to_string(),
                algorithm_insights: "Single-pass solutions are often possible when a stack tracks pending elements so they are processed in the correct order.".to_string(),
            },
            self_reflection: SelfReflection {
                what_went_well: "Quickly identified the stack approach and implemented it correctly. Good handling of edge cases.".to_string(),
                what_could_be_better: "Could have considered the counter approach first, even though it wasn't optimal. Should practice more with different approaches.".to_string(),
                future_study: "Review counter techniques and practice more stack problems. Study space-time tradeoffs in detail.".to_string(),
                confidence_level: ConfidenceLevel::High,
            },
        },
    }
}

fn median_of_two_sorted_arrays() -> JournalEntry {
    JournalEntry {
        id: EntryId::new(3),
        problem_name: "Median of Two Sorted Arrays".to_string(),
        problem_id: "4".to_string(),
        date_done: "2024-03-18".to_string(),
        topic: "Arrays".to_string(),
        difficulty: Difficulty::Hard,
        details: EntryDetails {
            inputs: "nums1 = [1,3], nums2 = [2]".to_string(),
            outputs: "2.0".to_string(),
            constraints: "nums1.length + nums2.length >= 1".to_string(),
            core_question: "Find the median of two sorted arrays".to_string(),
            edge_cases: "Empty arrays, single element arrays, even/odd length".to_string(),
            ideas: vec![
                Idea::new("Merge and Sort", "Simple to understand", "O(n log n) time complexity"),
                Idea::new("Binary Search", "O(log n) time complexity", "Complex implementation"),
            ],
            chosen_idea: "Binary Search".to_string(),
            rationale: "Best time complexity for large inputs".to_string(),
            pseudocode: "Find partition points\nCompare elements\nAdjust partition\nReturn median".to_string(),
            implementation: "function findMedianSortedArrays(nums1, nums2) {\n  // Implementation here\n}".to_string(),
            bugs: "Incorrect partition calculation".to_string(),
            missed_edge_cases: "Arrays with duplicate elements".to_string(),
            solution_summary: "Used a binary search approach to find the median of two sorted arrays. The key insight was that we can use the properties of sorted arrays to efficiently find the median without merging the arrays.".to_string(),
            key_learnings: KeyLearnings {
                core_idea: "Binary searching the partition point finds the median of two sorted arrays without merging them.".to_string(),
                data_structure_insights: "Sorted arrays allow discarding half of the candidates at every step.".to_string(),
                algorithm_insights: "Binary search runs in O(log n), which matters for large inputs.".to_string(),
            },
            self_reflection: SelfReflection {
                what_went_well: "Quickly identified the binary search approach and implemented it correctly. Good handling of edge cases.".to_string(),
                what_could_be_better: "Could have considered the merge and sort approach first, even though it wasn't optimal. Should practice more with different approaches.".to_string(),
                future_study: "Review merge and sort techniques and practice more binary search problems. Study space-time tradeoffs in detail.".to_string(),
                confidence_level: ConfidenceLevel::High,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique_and_sequential() {
        let ids: Vec<u32> = seed_entries().iter().map(|e| e.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn seed_entries_are_fully_populated() {
        for entry in seed_entries() {
            assert!(!entry.problem_name.is_empty());
            assert!(!entry.details.ideas.is_empty());
            assert!(!entry.details.key_learnings.core_idea.is_empty());
            assert!(!entry.details.self_reflection.future_study.is_empty());
        }
    }

    #[test]
    fn valid_parentheses_is_a_medium_stack_problem() {
        let entry = valid_parentheses();
        assert_eq!(entry.topic, "Stack");
        assert_eq!(entry.difficulty, Difficulty::Medium);
    }
}
