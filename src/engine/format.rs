/// Indentation width of `sqlparser`'s pretty output
const SOURCE_INDENT: usize = 2;

/// Quoted or commented span a line break can fall inside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Span {
    Code,
    Quoted(char),
    LineComment,
    BlockComment,
}

/// Re-indent pretty-printed SQL.
///
/// A line at nesting level `n >= 1` gets `pad + (n - 1) * indent` leading
/// spaces. Level 0 lines are untouched, and so is every line that starts
/// inside a string literal, a quoted identifier or a block comment.
pub fn reindent(text: &str, pad: usize, indent: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut span = Span::Code;

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if span == Span::LineComment {
            span = Span::Code;
        }

        if span == Span::Code {
            let body = line.trim_start_matches(' ');
            let leading = line.len() - body.len();
            let level = leading / SOURCE_INDENT;
            let width = match level {
                0 => 0,
                n => pad + (n - 1) * indent,
            };

            out.extend(std::iter::repeat_n(' ', width + leading % SOURCE_INDENT));
            out.push_str(body);
        } else {
            out.push_str(line);
        }

        span = scan(line, span);
    }

    out
}

/// Span in effect at the end of `line`, given the span it started in.
/// Doubled quotes (`''`) close and reopen, which leaves the span unchanged.
fn scan(line: &str, mut span: Span) -> Span {
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        span = match (span, c) {
            (Span::Code, '\'' | '"' | '`') => Span::Quoted(c),
            (Span::Code, '-') if chars.peek() == Some(&'-') => Span::LineComment,
            (Span::Code, '/') if chars.peek() == Some(&'*') => {
                chars.next();
                Span::BlockComment
            }
            (Span::Quoted(close), c) if c == close => Span::Code,
            (Span::BlockComment, '*') if chars.peek() == Some(&'/') => {
                chars.next();
                Span::Code
            }
            (span, _) => span,
        };
        if span == Span::LineComment {
            break;
        }
    }

    span
}
