pub const NOTE_CONTENT_OPEN: &str = "<note-content>";
pub const NOTE_CONTENT_CLOSE: &str = "</note-content>";

pub const SEPARATOR: &str = "<strike>\n                                    \n</strike>";

const NOTEBOOK_TAG_PREFIX: &str = "system:notebook:";

pub fn source_fragment(escaped_url: &str) -> String {
    format!(
        "\n\n<italic><size:small>Source: <link:url>{escaped_url}</link:url></size:small></italic>\n\n"
    )
}

pub fn new_note_body(escaped_title: &str, escaped_snippet: &str, fragment: &str) -> String {
    format!("{escaped_title}\n\n{escaped_snippet}{fragment}")
}

pub fn appended_body(previous: &str, escaped_snippet: &str, fragment: &str) -> String {
    format!("{previous}{SEPARATOR}{escaped_snippet}{fragment}")
}

pub fn wrap_envelope(body: &str) -> String {
    format!("{NOTE_CONTENT_OPEN}{body}{NOTE_CONTENT_CLOSE}")
}

/// Strips one surrounding `<note-content ...>` element, attributes included.
/// Input without an envelope is returned unchanged.
pub fn unwrap_envelope(xml: &str) -> &str {
    let trimmed = xml.trim();
    let Some(after_tag) = trimmed.strip_prefix("<note-content") else {
        return xml;
    };
    // Only `>` or attributes may follow the element name.
    if !after_tag.starts_with('>') && !after_tag.starts_with(char::is_whitespace) {
        return xml;
    }
    let Some(open_end) = after_tag.find('>') else {
        return xml;
    };
    match after_tag[open_end + 1..].strip_suffix(NOTE_CONTENT_CLOSE) {
        Some(body) => body,
        None => xml,
    }
}

pub fn notebook_tag(notebook: &str) -> String {
    format!("{NOTEBOOK_TAG_PREFIX}{notebook}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fragment_matches_template() {
        assert_eq!(
            source_fragment("http://x"),
            "\n\n<italic><size:small>Source: <link:url>http://x</link:url></size:small></italic>\n\n"
        );
    }

    #[test]
    fn separator_is_thirty_six_spaces() {
        let inner = SEPARATOR
            .strip_prefix("<strike>\n")
            .and_then(|s| s.strip_suffix("\n</strike>"))
            .unwrap();
        assert_eq!(inner.len(), 36);
        assert!(inner.chars().all(|c| c == ' '));
    }

    #[test]
    fn new_body_starts_with_title() {
        let body = new_note_body("T", "S", "|src");
        assert_eq!(body, "T\n\nS|src");
    }

    #[test]
    fn appended_body_keeps_previous_verbatim() {
        let body = appended_body("Old <bold>x</bold>", "New", "|src");
        assert!(body.starts_with("Old <bold>x</bold>"));
        assert_eq!(body, format!("Old <bold>x</bold>{SEPARATOR}New|src"));
    }

    #[test]
    fn envelope_round_trip() {
        assert_eq!(wrap_envelope("Body"), "<note-content>Body</note-content>");
        assert_eq!(unwrap_envelope("<note-content>Body</note-content>"), "Body");
    }

    #[test]
    fn unwrap_handles_attributes_and_bare_content() {
        assert_eq!(
            unwrap_envelope("<note-content version=\"0.1\">Title\n\nText</note-content>\n"),
            "Title\n\nText"
        );
        assert_eq!(unwrap_envelope("Old"), "Old");
        assert_eq!(
            unwrap_envelope("<note-contents>x</note-contents>"),
            "<note-contents>x</note-contents>"
        );
        assert_eq!(unwrap_envelope("<note-content>unterminated"), "<note-content>unterminated");
    }

    #[test]
    fn tag_uses_notebook_prefix() {
        assert_eq!(notebook_tag("Snippets"), "system:notebook:Snippets");
    }
}
