//! Relaxed JSON (JSONC) to strict JSON.
//!
//! Editor theme files are commonly written with `//` and `/* */` comments and
//! trailing commas. [`strip`] removes those while scanning string literals
//! token by token, so `"https://example.com"` or `"a /* b */"` survive
//! untouched.

/// Removes comments and trailing commas from JSONC text.
///
/// Line comments keep their terminating newline and block comments are
/// replaced by a single space, so line numbers in later parse errors still
/// point at the right place for everything but multi-line block comments.
pub fn strip(input: &str) -> String {
    remove_trailing_commas(&remove_comments(input))
}

fn remove_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                out.push(c);
                copy_string(&mut chars, &mut out);
            }
            '/' if chars.peek() == Some(&'/') => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
                out.push(' ');
            }
            _ => out.push(c),
        }
    }

    out
}

fn remove_trailing_commas(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => {
                out.push(c);
                let mut rest = chars.by_ref().map(|(_, c)| c);
                copy_string(&mut rest, &mut out);
            }
            ',' => {
                let next = input[i + 1..].trim_start().chars().next();
                if !matches!(next, Some('}') | Some(']')) {
                    out.push(c);
                }
            }
            _ => out.push(c),
        }
    }

    out
}

/// Copies the body of a string literal (after its opening quote) up to and
/// including the closing quote, honoring backslash escapes.
fn copy_string(chars: &mut impl Iterator<Item = char>, out: &mut String) {
    while let Some(c) = chars.next() {
        out.push(c);
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            '"' => return,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parses(text: &str) -> serde_json::Value {
        serde_json::from_str(&strip(text)).unwrap_or_else(|e| panic!("{}\n---\n{}", e, strip(text)))
    }

    #[test]
    fn strips_line_and_block_comments() {
        let value = parses(
            r#"{
                // line comment
                "a": 1, /* block
                comment */ "b": 2
            }"#,
        );
        assert_eq!(value, serde_json::json!({ "a": 1, "b": 2 }));
    }

    #[test]
    fn keeps_comment_markers_inside_strings() {
        let value = parses(r#"{ "url": "https://example.com", "glob": "src/**/*.rs" }"#);
        assert_eq!(value["url"], "https://example.com");
        assert_eq!(value["glob"], "src/**/*.rs");
    }

    #[test]
    fn handles_escaped_quotes() {
        let value = parses(r#"{ "a": "say \"hi\" // not a comment", "b": "c:\\" } // tail"#);
        assert_eq!(value["a"], "say \"hi\" // not a comment");
        assert_eq!(value["b"], "c:\\");
    }

    #[test]
    fn removes_trailing_commas() {
        let value = parses(r#"{ "list": [1, 2, 3,], "obj": { "x": 1, }, }"#);
        assert_eq!(value, serde_json::json!({ "list": [1, 2, 3], "obj": { "x": 1 } }));
    }

    #[test]
    fn trailing_comma_before_comment_is_removed() {
        let value = parses("{\n  \"a\": 1, // last\n}");
        assert_eq!(value, serde_json::json!({ "a": 1 }));
    }

    #[test]
    fn commas_inside_strings_are_kept() {
        let value = parses(r#"{ "scope": "a, }", }"#);
        assert_eq!(value["scope"], "a, }");
    }

    #[test]
    fn unterminated_block_comment_consumes_rest() {
        assert_eq!(strip("1 /* open"), "1  ");
    }

    #[test]
    fn plain_json_is_unchanged() {
        let text = "{\n\t\"a\": [1, {\"b\": \"c\"}]\n}";
        assert_eq!(strip(text), text);
    }
}
