use colored::Colorize;

/// Destination for the human-readable lines a demo produces.
///
/// Contexts take their sink at construction instead of reaching for a global
/// logger, so the caller decides where output goes and how long it lives.
pub trait MessageSink {
    fn emit(&mut self, message: &str);
}

impl<S: MessageSink + ?Sized> MessageSink for &mut S {
    fn emit(&mut self, message: &str) {
        (**self).emit(message);
    }
}

/// Writes each message as a line on stdout.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    color: bool,
}

impl Console {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn heading(&self, title: &str) {
        println!("{}", self.banner(title));
    }

    fn banner(&self, title: &str) -> String {
        let line = format!("== {title} ==");
        if self.color {
            line.bold().cyan().to_string()
        } else {
            line
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(true)
    }
}

impl MessageSink for Console {
    fn emit(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Keeps every emitted line in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl MessageSink for Transcript {
    fn emit(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }
}
