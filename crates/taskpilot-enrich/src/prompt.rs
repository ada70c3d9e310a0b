//! Fixed instruction prompt for the enrichment call.

use chrono::{Datelike, Duration, NaiveDate};

/// Build the system prompt: strict rules, two worked examples, and the
/// current date. `today` is injected so callers (and tests) control the
/// clock.
pub fn system_prompt(today: NaiveDate) -> String {
    let friday = upcoming_friday(today);
    format!(
        r#"Convert natural language TODO inputs to JSON with these STRICT rules:

1. Structure:
{{
    "task": "Concise title (5-7 words max)",
    "description": "Extracted details from input (MUST include even if brief)",
    "category": ["work", "personal", "shopping", "other"],
    "priority": ["low", "medium", "high"],
    "due_date": "YYYY-MM-DD | null"
}}

2. Examples:
Input: "Finish report by Friday"
Output: {{
    "task": "Finish report",
    "description": "Complete and submit weekly report",
    "category": "work",
    "priority": "medium",
    "due_date": "{friday}"
}}

Input: "Buy milk"
Output: {{
    "task": "Buy milk",
    "description": "Purchase 2 liters of whole milk",
    "category": "shopping",
    "priority": "medium",
    "due_date": null
}}

3. Requirements:
- Current Date: {today}
- ALWAYS include description (extract key details from input)
- Convert relative dates ("tomorrow" = +1 day)
- No markdown, ONLY valid JSON
- For minimal inputs, expand description logically"#
    )
}

/// Build the user message for a free-text input.
pub fn user_prompt(natural_text: &str) -> String {
    format!("Input: {natural_text}\nOutput:")
}

/// The next Friday on or after `today`, used by the worked example.
fn upcoming_friday(today: NaiveDate) -> NaiveDate {
    let weekday = i64::from(today.weekday().num_days_from_monday());
    today + Duration::days((4 - weekday).rem_euclid(7))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn prompt_carries_the_injected_date_and_examples() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 29).expect("date");
        let prompt = system_prompt(today);
        assert!(prompt.contains("Current Date: 2026-08-29"));
        assert!(prompt.contains("Finish report by Friday"));
        assert!(prompt.contains("Buy milk"));
    }

    #[test]
    fn example_due_date_is_the_upcoming_friday() {
        // 2026-08-29 is a Saturday; next Friday is 2026-09-04.
        let saturday = NaiveDate::from_ymd_opt(2026, 8, 29).expect("date");
        assert_eq!(
            upcoming_friday(saturday),
            NaiveDate::from_ymd_opt(2026, 9, 4).expect("date")
        );
        // A Friday maps to itself.
        let friday = NaiveDate::from_ymd_opt(2026, 9, 4).expect("date");
        assert_eq!(upcoming_friday(friday), friday);
    }

    #[test]
    fn user_prompt_wraps_the_input() {
        assert_eq!(user_prompt("Buy milk"), "Input: Buy milk\nOutput:");
    }
}
