pub enum Source {
    Repl,
    File(String),
}

pub struct Input {
    pub source: Source,
    pub content: String,
}

impl Input {
    pub fn name(&self) -> &str {
        match &self.source {
            Source::Repl => "<repl input>",
            Source::File(filename) => filename,
        }
    }
}
