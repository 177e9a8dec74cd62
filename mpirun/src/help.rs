//! Help message rendering.
//!
//! Help files are plain text: `[topic]` starts a topic, `#` lines are
//! comments, everything else up to the next topic is the body. `%s`
//! placeholders are filled in order; `%%` is a literal percent sign.

const HEADER_RULE: &str =
    "--------------------------------------------------------------------------";

/// A help file embedded in the binary.
#[derive(Debug, Clone, Copy)]
pub struct HelpFile {
    pub name: &'static str,
    pub text: &'static str,
}

pub const HELP_MPIRUN: HelpFile = HelpFile {
    name: "help-mpirun.txt",
    text: include_str!("../help/help-mpirun.txt"),
};

impl HelpFile {
    /// Raw body of `topic`, or `None` if the file has no such topic.
    pub fn topic(&self, topic: &str) -> Option<String> {
        let mut body: Option<Vec<&str>> = None;
        for line in self.text.lines() {
            if let Some(name) = topic_name(line) {
                if body.is_some() {
                    break;
                }
                if name == topic {
                    body = Some(Vec::new());
                }
                continue;
            }
            if line.starts_with('#') {
                continue;
            }
            if let Some(ref mut lines) = body {
                lines.push(line);
            }
        }
        let mut lines = body?;
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        Some(lines.join("\n"))
    }

    /// Render `topic` with `args`, framed by rules when `want_error_header`.
    /// Unknown topics render an apology naming the file and topic.
    pub fn render(&self, topic: &str, want_error_header: bool, args: &[&str]) -> String {
        let body = match self.topic(topic) {
            Some(template) => substitute(&template, args),
            None => format!(
                "Sorry!  You were supposed to get help about:\n    {}\nfrom the file:\n    {}\nBut I couldn't find that topic in the file.  Sorry!",
                topic, self.name
            ),
        };
        if want_error_header {
            format!("{HEADER_RULE}\n{body}\n{HEADER_RULE}\n")
        } else {
            format!("{body}\n")
        }
    }
}

fn topic_name(line: &str) -> Option<&str> {
    let line = line.trim_end();
    line.strip_prefix('[')?.strip_suffix(']')
}

fn substitute(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('s') => {
                chars.next();
                out.push_str(args.next().copied().unwrap_or(""));
            }
            Some('%') => {
                chars.next();
                out.push('%');
            }
            _ => out.push('%'),
        }
    }
    out
}
