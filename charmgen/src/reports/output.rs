//! Where reports render to.

/// Semantic output operations used by reports.
///
/// Every operation renders a single line. Errors and warnings are
/// diagnostics and go to the error stream.
pub trait Output {
    fn section(&mut self, name: &str);
    fn key_value(&mut self, key: &str, value: &str);
    fn list_item(&mut self, text: &str);
    fn error(&mut self, msg: &str);
    fn warning(&mut self, msg: &str);
    fn info(&mut self, msg: &str);
    fn divider(&mut self, label: &str);
    fn preformatted(&mut self, text: &str);
    fn newline(&mut self);
}

/// A report that knows how to print itself.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Line sink with separate regular and diagnostic streams.
///
/// Anything implementing `Sink` gets the standard plain-text `Output`.
pub trait Sink {
    fn out(&mut self, line: String);
    fn err(&mut self, line: String);
}

impl<S: Sink> Output for S {
    fn section(&mut self, name: &str) {
        self.out(format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.out(format!("{}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.out(format!("  - {}", text));
    }

    fn error(&mut self, msg: &str) {
        self.err(format!("error: {}", msg));
    }

    fn warning(&mut self, msg: &str) {
        self.err(format!("warning: {}", msg));
    }

    fn info(&mut self, msg: &str) {
        self.out(format!("info: {}", msg));
    }

    fn divider(&mut self, label: &str) {
        self.out(format!("── {} ──", label));
    }

    fn preformatted(&mut self, text: &str) {
        self.out(text.to_string());
    }

    fn newline(&mut self) {
        self.out(String::new());
    }
}

/// Prints to stdout, diagnostics to stderr.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for TerminalOutput {
    fn out(&mut self, line: String) {
        println!("{}", line);
    }

    fn err(&mut self, line: String) {
        eprintln!("{}", line);
    }
}

/// Keeps rendered lines in memory so tests can assert on them.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

#[cfg(test)]
impl Sink for RecordingOutput {
    fn out(&mut self, line: String) {
        self.stdout.push(line);
    }

    fn err(&mut self, line: String) {
        self.stderr.push(line);
    }
}
