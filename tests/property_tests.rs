/// Property-based tests using proptest
/// Tests invariants that should hold for all inputs to the scoring pipeline
use proptest::prelude::*;
use resume_score_api::scoring::{build_prompt, extract_json_object, repair_stop_truncation};
use serde_json::json;

// Property: extraction should never panic, whatever the model emits
proptest! {
    #[test]
    fn extraction_never_panics(text in "\\PC*") {
        let _ = extract_json_object(&text);
    }

    #[test]
    fn repair_never_panics_and_appends_one_brace(text in "\\PC*") {
        let repaired = repair_stop_truncation(&text);
        prop_assert!(repaired.ends_with('}'), "repaired string must end with a closing brace");
        prop_assert_eq!(repaired.len(), text.len() + 1);
        prop_assert_eq!(&repaired[..text.len()], text.as_str());
    }
}

// Property: the prompt carries both inputs verbatim
proptest! {
    #[test]
    fn prompt_substitutes_inputs_verbatim(
        resume in "[A-Za-z0-9 .,+#/-]{1,80}",
        jobdesc in "[A-Za-z0-9 .,+#/-]{1,80}"
    ) {
        let prompt = build_prompt(&resume, &jobdesc);
        prop_assert!(prompt.contains(&resume));
        prop_assert!(prompt.contains(&jobdesc));
    }
}

// Property: any report the stop sequence truncated parses back to the
// original object after the brace is re-appended
proptest! {
    #[test]
    fn stop_truncated_reports_roundtrip(
        score in 0u8..=100,
        strengths in proptest::collection::vec("[a-z ]{1,20}", 0..5),
        matched in proptest::collection::vec("[a-zA-Z+#]{1,12}", 0..5),
    ) {
        let report = json!({
            "score": score,
            "strengths": strengths,
            "weaknesses": [],
            "suggestions": [],
            "matchedSkills": matched,
            "missingSkills": []
        });
        let full = serde_json::to_string(&report).unwrap();
        let truncated = full.strip_suffix('}').unwrap();

        let value = extract_json_object(&repair_stop_truncation(truncated)).unwrap();
        prop_assert_eq!(value, report);
    }

    #[test]
    fn prose_wrapped_object_is_salvaged(
        prefix in "[A-Za-z .,!\n]{0,40}",
        suffix in "[A-Za-z .,!\n]{0,40}",
        score in 0u8..=100,
    ) {
        let text = format!("{}{{\"score\": {}}}{}", prefix, score, suffix);
        let value = extract_json_object(&text).unwrap();
        prop_assert_eq!(value["score"].as_u64(), Some(u64::from(score)));
    }
}
