//! Rendering line records back into env-file text

use super::line::Line;

/// Render records to text, one `\n`-terminated line per record
pub fn render(lines: &[Line]) -> String {
    let mut out = String::new();
    for line in lines {
        match line {
            Line::Comment(text) => out.push_str(text),
            Line::Blank => {}
            Line::Variable(var) => {
                out.push_str(&var.key);
                out.push('=');
                out.push_str(var.effective_value());
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::line::parse;
    use proptest::prelude::*;

    #[test]
    fn test_render_blank() {
        assert_eq!(render(&[Line::Blank]), "\n");
        assert_eq!(render(&parse("")), "\n");
    }

    #[test]
    fn test_render_comment() {
        assert_eq!(render(&parse("#hello")), "#hello\n");
    }

    #[test]
    fn test_render_variable_with_and_without_edit() {
        let mut lines = parse("FOO=bar");
        assert_eq!(render(&lines), "FOO=bar\n");

        lines[0].as_variable_mut().unwrap().edited_value = Some("baz".to_string());
        assert_eq!(render(&lines), "FOO=baz\n");
    }

    #[test]
    fn test_render_keeps_extra_equals() {
        assert_eq!(
            render(&parse("URL=postgres://u:p@h/db?sslmode=require")),
            "URL=postgres://u:p@h/db?sslmode=require\n"
        );
    }

    #[test]
    fn test_render_line_without_equals_gains_separator() {
        // Quirk: a bare key has no default, so it comes back as `KEY=`
        assert_eq!(render(&parse("JUST_A_KEY")), "JUST_A_KEY=\n");
    }

    #[test]
    fn test_render_empty_sequence() {
        assert_eq!(render(&[]), "");
    }

    fn env_line() -> impl Strategy<Value = String> {
        prop_oneof![
            "#[^\n]*",
            Just(String::new()),
            "[A-Za-z_][A-Za-z0-9_]{0,12}=[^\n]*",
        ]
    }

    proptest! {
        #[test]
        fn prop_render_parse_round_trip(lines in prop::collection::vec(env_line(), 1..24)) {
            let text: String = lines.iter().map(|l| format!("{}\n", l)).collect();
            prop_assert_eq!(render(&parse(&text)), text);
        }
    }
}
