const ENTITIES: [(char, &str); 5] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('\'', "&apos;"),
    ('"', "&quot;"),
];

pub fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ENTITIES.iter().find(|(raw, _)| *raw == ch) {
            Some((_, entity)) => out.push_str(entity),
            None => out.push(ch),
        }
    }
    out
}

pub fn xml_unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match ENTITIES
            .iter()
            .find(|(_, entity)| tail.starts_with(entity))
        {
            Some((raw, entity)) => {
                out.push(*raw);
                rest = &tail[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn escapes_every_metacharacter() {
        let escaped = xml_escape(r#"a & b < c > d 'e' "f""#);
        assert_eq!(
            escaped,
            "a &amp; b &lt; c &gt; d &apos;e&apos; &quot;f&quot;"
        );
        for raw in ['<', '>', '\'', '"'] {
            assert!(!escaped.contains(raw));
        }
    }

    #[test]
    fn ampersand_is_not_double_escaped() {
        assert_eq!(xml_escape("&lt;"), "&amp;lt;");
        assert_eq!(xml_unescape("&amp;lt;"), "&lt;");
    }

    #[test]
    fn unescape_restores_original() {
        let samples = [
            "",
            "plain text",
            "http://example.com/a?x=1&y=2",
            r#"<b class="x">it's</b> & more"#,
            "&&&<<<>>>'''\"\"\"",
            "ünïcödé <→> ✓",
        ];
        for sample in samples {
            assert_eq!(xml_unescape(&xml_escape(sample)), sample);
        }
    }

    #[test]
    fn unknown_entities_survive_unescape() {
        assert_eq!(xml_unescape("&nbsp; & &amp"), "&nbsp; & &amp");
    }
}
