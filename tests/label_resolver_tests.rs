use linechart_rs::core::resolve_label;

#[test]
fn aliased_link_uses_alias_as_display_name() {
    let label = resolve_label("[[notes/a|Alpha]]");
    assert_eq!(label.display_name, "Alpha");
    assert_eq!(label.target.as_deref(), Some("notes/a"));
}

#[test]
fn bare_link_uses_last_path_segment() {
    let label = resolve_label("[[notes/a]]");
    assert_eq!(label.display_name, "a");
    assert_eq!(label.target.as_deref(), Some("notes/a"));
}

#[test]
fn link_without_folder_shows_target() {
    let label = resolve_label("[[Daily]]");
    assert_eq!(label.display_name, "Daily");
    assert_eq!(label.target.as_deref(), Some("Daily"));
}

#[test]
fn trailing_slash_falls_back_to_target() {
    let label = resolve_label("[[projects/]]");
    assert_eq!(label.display_name, "projects/");
    assert_eq!(label.target.as_deref(), Some("projects/"));
}

#[test]
fn plain_text_has_no_target() {
    let label = resolve_label("plain");
    assert_eq!(label.display_name, "plain");
    assert_eq!(label.target, None);
}

#[test]
fn malformed_links_stay_plain() {
    for raw in [
        "[[]]",
        "[[a|]]",
        "[[|b]]",
        "[[a]] trailing",
        "prefix [[a]]",
        "[a]",
        "[[a]b]]",
        "[[a|b]c]]",
    ] {
        let label = resolve_label(raw);
        assert_eq!(label.display_name, raw, "input {raw}");
        assert_eq!(label.target, None, "input {raw}");
    }
}

#[test]
fn alias_may_contain_pipes() {
    let label = resolve_label("[[a|b|c]]");
    assert_eq!(label.display_name, "b|c");
    assert_eq!(label.target.as_deref(), Some("a"));
}
