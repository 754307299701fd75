const COMMENT_OPEN: &str = "/*";
const COMMENT_CLOSE: &str = "*/";
const PRESERVED_COMMENT_OPEN: &str = "/*!";
const LINE_COMMENT_OPEN: &str = "//";

/// Removes `/* ... */` comments outside of quoted strings.
///
/// `/*! ... */` comments are kept. An unterminated comment runs to the end of
/// the input. `//` line comments are copied through untouched and quotes
/// inside them do not open strings.
pub fn strip_comments(source: &str) -> String {
    let mut output = String::with_capacity(source.len());
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut rest = source;

    while let Some(ch) = rest.chars().next() {
        if let Some(open) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == open {
                quote = None;
            }
            output.push(ch);
            rest = &rest[ch.len_utf8()..];
            continue;
        }

        if rest.starts_with(LINE_COMMENT_OPEN) {
            let end = rest.find('\n').unwrap_or(rest.len());
            output.push_str(&rest[..end]);
            rest = &rest[end..];
            continue;
        }

        if rest.starts_with(COMMENT_OPEN) && !rest.starts_with(PRESERVED_COMMENT_OPEN) {
            rest = match rest[COMMENT_OPEN.len()..].find(COMMENT_CLOSE) {
                Some(end) => &rest[COMMENT_OPEN.len() + end + COMMENT_CLOSE.len()..],
                None => "",
            };
            continue;
        }

        if rest.starts_with(PRESERVED_COMMENT_OPEN) {
            let end = rest[COMMENT_OPEN.len()..]
                .find(COMMENT_CLOSE)
                .map_or(rest.len(), |end| COMMENT_OPEN.len() + end + COMMENT_CLOSE.len());
            output.push_str(&rest[..end]);
            rest = &rest[end..];
            continue;
        }

        if ch == '"' || ch == '\'' {
            quote = Some(ch);
        }
        output.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    output
}

#[cfg(test)]
mod tests {
    use super::strip_comments;

    #[test]
    fn removes_block_comments() {
        assert_eq!(
            strip_comments("a { /* note */color: red; }/* multi\nline */"),
            "a { color: red; }"
        );
    }

    #[test]
    fn keeps_bang_comments() {
        assert_eq!(
            strip_comments("/*! license */\na {}/* drop */"),
            "/*! license */\na {}"
        );
    }

    #[test]
    fn ignores_comment_markers_inside_strings() {
        let scss = r#"a { content: "/* not a comment */"; b: '/*'; } /* gone */"#;
        assert_eq!(
            strip_comments(scss),
            r#"a { content: "/* not a comment */"; b: '/*'; } "#
        );
    }

    #[test]
    fn escaped_quotes_do_not_close_strings() {
        let scss = r#"a { content: "\" /* kept */"; }"#;
        assert_eq!(strip_comments(scss), scss);
    }

    #[test]
    fn unterminated_comment_runs_to_end() {
        assert_eq!(strip_comments("a {} /* open"), "a {} ");
    }

    #[test]
    fn line_comments_are_left_alone() {
        assert_eq!(strip_comments("// keep\na {}"), "// keep\na {}");
    }

    #[test]
    fn apostrophes_in_line_comments_do_not_open_strings() {
        assert_eq!(
            strip_comments("// don't touch\na {}\n/* drop me */\nb {}\n"),
            "// don't touch\na {}\n\nb {}\n"
        );
    }

    #[test]
    fn block_comment_markers_inside_line_comments_stay() {
        assert_eq!(
            strip_comments("a {} // see /* here\nb {} /* x */"),
            "a {} // see /* here\nb {} "
        );
    }
}
