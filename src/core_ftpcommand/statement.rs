/// One parsed request line.
///
/// The verb is upper-cased once at parse time; the argument is kept exactly as
/// the client sent it, minus the line terminator. `result` is a diagnostic slot
/// handlers may fill for the server log, it is never sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    verb: String,
    argument: String,
    pub result: Option<String>,
}

impl Statement {
    /// Splits `line` on the first whitespace run. Total over any input.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']).trim_start();

        let (verb, argument) = match line.find(char::is_whitespace) {
            Some(index) => (&line[..index], line[index..].trim_start()),
            None => (line, ""),
        };

        Self {
            verb: verb.to_ascii_uppercase(),
            argument: argument.to_string(),
            result: None,
        }
    }

    pub fn verb(&self) -> &str {
        &self.verb
    }

    pub fn argument(&self) -> &str {
        &self.argument
    }

    pub fn has_argument(&self) -> bool {
        !self.argument.is_empty()
    }

    pub fn set_result(&mut self, result: impl Into<String>) {
        self.result = Some(result.into());
    }
}
