/// Escapes text for safe inclusion in HTML element content or attribute values.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Joins class names, appending `opacity-50` when `inactive`.
pub(crate) fn classes(base: &str, inactive: bool) -> String {
    if inactive {
        format!("{base} opacity-50")
    } else {
        base.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"P99" & 'P95'</b>"#),
            "&lt;b&gt;&quot;P99&quot; &amp; &#39;P95&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn inactive_classes_get_reduced_opacity() {
        assert_eq!(classes("text-xs", true), "text-xs opacity-50");
        assert_eq!(classes("text-xs", false), "text-xs");
    }
}
