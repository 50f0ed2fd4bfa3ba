//! Where reports go.

/// Sink for report content.
///
/// Reports call these in order; an implementation only decides the
/// presentation. Warnings go to a separate stream from everything else.
pub trait Output {
    fn heading(&mut self, name: &str);

    /// A labelled value on one line.
    fn field(&mut self, label: &str, value: &str);

    fn item(&mut self, text: &str);

    /// A file or entry that this run created.
    fn created(&mut self, text: &str);

    fn warning(&mut self, msg: &str);

    /// Marks the start of a block, e.g. one previewed file.
    fn divider(&mut self, label: &str);

    /// Text printed as is, possibly spanning several lines.
    fn text(&mut self, text: &str);

    fn blank(&mut self);
}

pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// stdout for content, stderr for warnings.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn heading(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn field(&mut self, label: &str, value: &str) {
        println!("{}: {}", label, value);
    }

    fn item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn created(&mut self, text: &str) {
        println!("  + {}", text);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn text(&mut self, text: &str) {
        println!("{}", text);
    }

    fn blank(&mut self) {
        println!();
    }
}

/// Keeps every call as one line, for asserting on report layout.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for RecordingOutput {
    fn heading(&mut self, name: &str) {
        self.lines.push(format!("{}:", name));
    }

    fn field(&mut self, label: &str, value: &str) {
        self.lines.push(format!("{}: {}", label, value));
    }

    fn item(&mut self, text: &str) {
        self.lines.push(format!("  - {}", text));
    }

    fn created(&mut self, text: &str) {
        self.lines.push(format!("  + {}", text));
    }

    fn warning(&mut self, msg: &str) {
        self.lines.push(format!("warning: {}", msg));
    }

    fn divider(&mut self, label: &str) {
        self.lines.push(format!("-- {} --", label));
    }

    fn text(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }
}
