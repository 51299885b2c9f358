/// Top-level command names accepted by the interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Median,
    Rand,
    Help,
    Exit,
    Unknown(String),
}

impl Command {
    pub fn parse(name: &str) -> Self {
        match name.trim() {
            "add" => Self::Add,
            "median" => Self::Median,
            "rand" => Self::Rand,
            "help" => Self::Help,
            "exit" => Self::Exit,
            other => Self::Unknown(other.to_string()),
        }
    }
}
