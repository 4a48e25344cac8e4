use std::fmt::Display;

/// `ProcID`s are usually numeric PIDs; however, on some systems, they may be something else
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProcId {
    PID(i32),
    Name(String),
}

impl From<&str> for ProcId {
    fn from(s: &str) -> ProcId {
        match s.parse() {
            Ok(pid) => ProcId::PID(pid),
            Err(_) => ProcId::Name(s.to_string()),
        }
    }
}

impl Display for ProcId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcId::PID(pid) => write!(f, "{pid}"),
            ProcId::Name(name) => f.write_str(name),
        }
    }
}
