//! Program part selection
//!
//! A logic program is divided into parts by `#program name.` directives; text
//! before the first directive belongs to `base`. Grounding a list of parts
//! means keeping only the sections of those parts, which the solver then
//! reads as one `base` program.

use logos::Logos;

#[derive(Logos, Debug, Clone, PartialEq)]
enum Chunk {
    #[regex(r"#program[ \t\r\n]+_*[a-z][A-Za-z0-9_']*[^.]*\.", |lex| part_name(lex.slice()))]
    Directive(String),

    #[regex(r"%\*([^*]|\*+[^*%])*\*+%", priority = 10)]
    BlockComment,

    #[regex(r"%[^\n]*")]
    LineComment,

    #[regex(r#""([^"\\]|\\.)*""#)]
    Quoted,

    #[regex(r#"[^#%"]+"#)]
    Text,

    #[token("#")]
    Hash,
}

/// Name of the part a directive opens; parameters are ignored
fn part_name(directive: &str) -> String {
    directive["#program".len()..]
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '\'')
        .collect()
}

/// Keep the sections of `source` that belong to one of `parts`
pub fn select_parts<S: AsRef<str>>(source: &str, parts: &[S]) -> String {
    let wanted = |name: &str| parts.iter().any(|p| p.as_ref() == name);
    let mut keep = wanted("base");
    let mut out = String::with_capacity(source.len());

    for (chunk, span) in Chunk::lexer(source).spanned() {
        match chunk {
            Ok(Chunk::Directive(name)) => {
                keep = wanted(&name);
                // Directives are dropped, their line stays for solver diagnostics
                out.push('\n');
            }
            _ if keep => out.push_str(&source[span]),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROGRAM: &str = "cell(1..2).\n\
        #program visualize.\n\
        draw(0,rect(x(0),y(0),width(1),height(1))).\n\
        #program constraints.\n\
        :- cell(1).\n";

    #[test]
    fn test_base_only() {
        let out = select_parts(PROGRAM, &["base"]);
        assert!(out.contains("cell(1..2)."));
        assert!(!out.contains("draw("));
        assert!(!out.contains(":- cell(1)."));
    }

    #[test]
    fn test_base_and_visualize() {
        let out = select_parts(PROGRAM, &["base", "visualize"]);
        assert!(out.contains("cell(1..2)."));
        assert!(out.contains("draw(0,rect("));
        assert!(!out.contains(":- cell(1)."));
        assert!(!out.contains("#program"));
    }

    #[test]
    fn test_without_base() {
        let out = select_parts(PROGRAM, &["constraints"]);
        assert!(!out.contains("cell(1..2)."));
        assert!(out.contains(":- cell(1)."));
    }

    #[test]
    fn test_reopened_part() {
        let src = "#program a.\nx.\n#program b.\ny.\n#program a.\nz.\n";
        let out = select_parts(src, &["a"]);
        assert!(out.contains("x."));
        assert!(!out.contains("y."));
        assert!(out.contains("z."));
    }

    #[test]
    fn test_directives_in_comments_and_strings_are_text() {
        let src = "% #program hidden.\nlabel(\"#program x.\").\n%* #program y. *%\nkeep.\n";
        let out = select_parts(src, &["base"]);
        assert!(out.contains("keep."));
        assert!(out.contains("label(\"#program x.\")."));
        assert!(out.contains("% #program hidden."));
    }

    #[test]
    fn test_block_comment_closed_by_several_stars() {
        let src = "%* header\n#program hidden.\n**%\nkeep.\n%***%\nalso.\n";
        let out = select_parts(src, &["base"]);
        assert_eq!(out, src);
    }

    #[test]
    fn test_other_directives_are_kept() {
        let src = "#const n=3.\n#show draw/2.\n";
        let out = select_parts(src, &["base"]);
        assert_eq!(out, src);
    }

    #[test]
    fn test_part_name_ignores_parameters() {
        assert_eq!(part_name("#program step(t)."), "step");
        assert_eq!(part_name("#program  visualize_solution ."), "visualize_solution");
    }
}
