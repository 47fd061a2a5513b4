use super::*;

#[test]
fn extract_hashtags_finds_tags_in_order() {
    let tags = extract_hashtags("launch day! #Coffee then #roastery then #coffee again");
    assert_eq!(tags, vec!["coffee", "roastery"]);
}

#[test]
fn extract_hashtags_stops_at_punctuation() {
    let tags = extract_hashtags("#brew. #latte,#espresso!");
    assert_eq!(tags, vec!["brew", "latte", "espresso"]);
}

#[test]
fn extract_hashtags_handles_unicode() {
    let tags = extract_hashtags("#café #東京");
    assert_eq!(tags, vec!["café", "東京"]);
}

#[test]
fn extract_hashtags_empty_text_yields_empty_vec() {
    assert!(extract_hashtags("").is_empty());
    assert!(extract_hashtags("no tags here").is_empty());
}

#[test]
fn extract_mentions_finds_handles() {
    let mentions = extract_mentions("shot by @Jane.Doe with @studio_nine");
    assert_eq!(mentions, vec!["jane.doe", "studio_nine"]);
}

#[test]
fn extract_mentions_drops_trailing_dot() {
    // "thanks @someone." — the period is sentence punctuation.
    let mentions = extract_mentions("thanks @someone.");
    assert_eq!(mentions, vec!["someone"]);
}

#[test]
fn extract_mentions_deduplicates_case_insensitively() {
    let mentions = extract_mentions("@Alice and @alice");
    assert_eq!(mentions, vec!["alice"]);
}

#[test]
fn truncate_chars_shortens_long_text() {
    let long: String = "a".repeat(600);
    let out = truncate_chars(&long, 500);
    assert_eq!(out.chars().count(), 500);
}

#[test]
fn truncate_chars_leaves_short_text_untouched() {
    let short: String = "b".repeat(400);
    assert_eq!(truncate_chars(&short, 500), short);
}

#[test]
fn truncate_chars_counts_characters_not_bytes() {
    // Each 'é' is two bytes; 10 characters must survive a 10-char limit.
    let text: String = "é".repeat(12);
    let out = truncate_chars(&text, 10);
    assert_eq!(out.chars().count(), 10);
}

#[test]
fn extractors_stay_consistent_across_many_calls() {
    // A full posts page runs both extractors once per caption; the shared
    // compiled patterns must give identical results on every call.
    for i in 0..50 {
        let caption = format!("post {i} #daily @studio_nine");
        assert_eq!(extract_hashtags(&caption), vec!["daily"]);
        assert_eq!(extract_mentions(&caption), vec!["studio_nine"]);
    }
}

#[test]
fn truncate_chars_exact_length_is_unchanged() {
    let text: String = "c".repeat(500);
    assert_eq!(truncate_chars(&text, 500), text);
}
