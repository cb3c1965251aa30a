//! HTML sanitizing for API-provided strings.

use scraper::Html;

/// Removes every HTML tag from `input`, keeping only its text content.
///
/// Comments, `<script>` and `<style>` bodies are dropped along with the tags.
/// `&`, `<` and `>` in the remaining text are emitted as entities, so encoded
/// markup in the input never comes back out as tags. Surrounding whitespace is
/// preserved so that plain strings pass through unchanged.
pub fn strip_html(input: &str) -> String {
    if !input.contains(['<', '>', '&']) {
        return input.to_string();
    }

    let fragment = Html::parse_fragment(input);
    let mut text = String::with_capacity(input.len());
    for node in fragment.root_element().descendants() {
        let Some(chunk) = node.value().as_text() else {
            continue;
        };
        let inside_raw_text = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| matches!(el.name(), "script" | "style"))
        });
        if !inside_raw_text {
            push_escaped(&mut text, chunk);
        }
    }
    text
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html_plain_text_unchanged() {
        assert_eq!(strip_html("Acme Hosting"), "Acme Hosting");
        assert_eq!(strip_html(""), "");
        assert_eq!(strip_html("2024-01-01T00:00:00"), "2024-01-01T00:00:00");
    }

    #[test]
    fn test_strip_html_removes_tags() {
        assert_eq!(strip_html("<b>Acme</b> Hosting"), "Acme Hosting");
        assert_eq!(
            strip_html(r#"<a href="https://acme.example">Acme</a>"#),
            "Acme"
        );
    }

    #[test]
    fn test_strip_html_drops_script_and_style() {
        assert_eq!(
            strip_html("Acme<script>alert('x')</script><style>p{}</style>"),
            "Acme"
        );
    }

    #[test]
    fn test_strip_html_drops_comments() {
        assert_eq!(strip_html("Acme<!-- hidden -->"), "Acme");
    }

    #[test]
    fn test_strip_html_keeps_entities_encoded() {
        assert_eq!(strip_html("Green &amp; Clean"), "Green &amp; Clean");
        assert_eq!(strip_html("Green & Clean"), "Green &amp; Clean");
        assert_eq!(strip_html("a > b"), "a &gt; b");
    }

    #[test]
    fn test_strip_html_encoded_markup_stays_text() {
        let out = strip_html("&lt;script&gt;alert(1)&lt;/script&gt;Acme");
        assert!(!out.contains('<'), "markup leaked: {out}");
        assert!(!out.contains('>'), "markup leaked: {out}");
        assert_eq!(out, "&lt;script&gt;alert(1)&lt;/script&gt;Acme");

        let out = strip_html("<b>&lt;img src=x onerror=alert(1)&gt;</b>");
        assert_eq!(out, "&lt;img src=x onerror=alert(1)&gt;");
    }

    #[test]
    fn test_strip_html_unclosed_tag() {
        assert_eq!(strip_html("Acme <i>Cloud"), "Acme Cloud");
    }
}
