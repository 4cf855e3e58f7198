//! HTML Text Helpers

/// Escape `& < > " ' /` for use in element text and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
    out
}

/// First `words` whitespace-delimited words followed by `...`
pub fn excerpt(text: &str, words: usize) -> String {
    let head: Vec<&str> = text.split_whitespace().take(words).collect();
    format!("{}...", head.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_leaves_no_markup_characters() {
        let escaped = escape_html(r#"<script>alert("x" + 'y') && a/b</script>"#);
        for raw in ['<', '>', '"', '\'', '/'] {
            assert!(!escaped.contains(raw), "raw {:?} in {}", raw, escaped);
        }
        // Every ampersand left over starts one of our entities
        let entities = ["&amp;", "&lt;", "&gt;", "&quot;", "&#39;", "&#x2F;"];
        for (i, _) in escaped.match_indices('&') {
            assert!(entities.iter().any(|e| escaped[i..].starts_with(e)));
        }
    }

    #[test]
    fn test_escape_keeps_plain_text() {
        assert_eq!(escape_html("Beef Wellington"), "Beef Wellington");
        assert_eq!(escape_html("كبسة"), "كبسة");
        assert_eq!(escape_html("Fish & Chips"), "Fish &amp; Chips");
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("one two  three\nfour", 3), "one two three...");
        assert_eq!(excerpt("short", 20), "short...");
        assert_eq!(excerpt("", 20), "...");
    }
}
