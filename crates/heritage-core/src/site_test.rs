use super::*;

fn site(position: usize, title: &str, description: &str) -> HeritageSite {
    HeritageSite {
        position,
        title: title.to_string(),
        description: description.to_string(),
        image: String::new(),
    }
}

#[test]
fn collapsed_long_description_is_cut_with_ellipsis() {
    let long = "a".repeat(150);
    let s = site(0, "Lalibela", &long);
    let shown = s.display_description(false, DEFAULT_SUMMARY_CHARS);
    assert_eq!(shown, format!("{}...", "a".repeat(100)));
}

#[test]
fn expanded_long_description_is_verbatim() {
    let long = "b".repeat(150);
    let s = site(0, "Lalibela", &long);
    assert_eq!(s.display_description(true, DEFAULT_SUMMARY_CHARS), long);
}

#[test]
fn collapsed_short_description_still_gets_ellipsis() {
    let s = site(0, "Aksum", "Obelisks.");
    assert_eq!(
        s.display_description(false, DEFAULT_SUMMARY_CHARS),
        "Obelisks...."
    );
}

#[test]
fn description_of_exactly_limit_chars_keeps_all_chars_plus_ellipsis() {
    let exact = "c".repeat(100);
    let s = site(0, "Harar", &exact);
    assert_eq!(
        s.display_description(false, DEFAULT_SUMMARY_CHARS),
        format!("{exact}...")
    );
}

#[test]
fn collapsed_sentinel_description_gets_ellipsis() {
    let s = site(0, "Fasil Ghebbi", NO_DESCRIPTION);
    assert_eq!(
        s.display_description(false, DEFAULT_SUMMARY_CHARS),
        "No description available..."
    );
    assert_eq!(s.display_description(true, DEFAULT_SUMMARY_CHARS), NO_DESCRIPTION);
}

#[test]
fn truncation_counts_characters_not_bytes() {
    let text = "é".repeat(120);
    let s = site(0, "Gondar", &text);
    let shown = s.display_description(false, DEFAULT_SUMMARY_CHARS);
    assert_eq!(shown.chars().count(), 103);
    assert!(shown.ends_with("..."));
}

#[test]
fn has_image_is_false_for_empty_url() {
    let mut s = site(0, "Tiya", "Stelae field");
    assert!(!s.has_image());
    s.image = "https://example.com/tiya.jpg".to_string();
    assert!(s.has_image());
}

#[test]
fn title_policy_collides_on_shared_titles() {
    let a = site(0, "Same", "first");
    let b = site(1, "Same", "second");
    assert_eq!(KeyPolicy::Title.key_for(&a), KeyPolicy::Title.key_for(&b));
}

#[test]
fn position_policy_separates_shared_titles() {
    let a = site(0, "Same", "first");
    let b = site(1, "Same", "second");
    assert_eq!(KeyPolicy::Position.key_for(&a).as_str(), "#0");
    assert_ne!(
        KeyPolicy::Position.key_for(&a),
        KeyPolicy::Position.key_for(&b)
    );
}

#[test]
fn content_hash_policy_is_stable_and_content_sensitive() {
    let a = site(0, "Same", "first");
    let moved = site(7, "Same", "first");
    let b = site(1, "Same", "second");
    let key = KeyPolicy::ContentHash.key_for(&a);
    assert_eq!(key.as_str().len(), 64);
    assert_eq!(key, KeyPolicy::ContentHash.key_for(&moved));
    assert_ne!(key, KeyPolicy::ContentHash.key_for(&b));
}

#[test]
fn site_serializes_all_fields() {
    let s = site(3, "Konso", "Terraced landscape");
    let value = serde_json::to_value(&s).expect("serialize");
    assert_eq!(value["position"], 3);
    assert_eq!(value["title"], "Konso");
    assert_eq!(value["image"], "");
}
