use std::io::{self, BufRead, Write};

use services::{DisplayState, SessionCommand, SessionController};
use wordcards_core::model::ListId;

/// One line of user input, decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(SessionCommand),
    Help,
    Quit,
    Invalid(String),
}

impl Input {
    /// Decode a raw line (with or without its newline).
    pub fn parse(line: &str) -> Self {
        let raw = line.trim_end_matches(['\r', '\n']);
        if raw == " " {
            return Self::Command(SessionCommand::MarkRemembered);
        }
        let trimmed = raw.trim();
        match trimmed {
            "" => Self::Command(SessionCommand::Next),
            "m" => Self::Command(SessionCommand::MarkRemembered),
            "n" => Self::Command(SessionCommand::Skip),
            "r" => Self::Command(SessionCommand::ResetCurrentList),
            "R" => Self::Command(SessionCommand::ResetAllLists),
            "q" => Self::Quit,
            "h" | "?" => Self::Help,
            _ => match trimmed.strip_prefix("l ") {
                Some(id) => match ListId::new(id) {
                    Ok(list) => Self::Command(SessionCommand::SelectList(list)),
                    Err(e) => Self::Invalid(e.to_string()),
                },
                None => Self::Invalid(format!("unrecognized input: {trimmed}")),
            },
        }
    }
}

const HELP: &str = "\
keys (confirm with Enter):
  <Enter>    reveal the definition, then move to the next word
  m, <Space> mark the current word as remembered
  n          skip to the next word once the definition is shown
  r          forget this list's remembered words
  R          forget remembered words of every list
  l <id>     switch to another list
  q          quit";

/// Line-oriented driver that maps input to session commands and prints the
/// display state after each one.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run until `q` or end of input.
    pub fn run(&mut self, session: &mut SessionController) -> io::Result<()> {
        let lists: Vec<String> = session.catalog().iter().map(ToString::to_string).collect();
        writeln!(self.output, "lists: {}", lists.join(", "))?;
        writeln!(self.output, "h for help")?;
        self.render(&session.display())?;

        while let Some(line) = self.read_line("> ")? {
            let command = match Input::parse(&line) {
                Input::Command(command) => command,
                Input::Quit => break,
                Input::Help => {
                    writeln!(self.output, "{HELP}")?;
                    continue;
                }
                Input::Invalid(reason) => {
                    writeln!(self.output, "{reason} (h for help)")?;
                    continue;
                }
            };

            if command.is_destructive() && !self.confirm(&command)? {
                writeln!(self.output, "cancelled")?;
                continue;
            }

            match session.dispatch(command) {
                Ok(view) => self.render(&view)?,
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
        self.output.flush()
    }

    fn confirm(&mut self, command: &SessionCommand) -> io::Result<bool> {
        let prompt = match command {
            SessionCommand::ResetAllLists => "forget remembered words of ALL lists? [y/N] ",
            _ => "forget remembered words of this list? [y/N] ",
        };
        Ok(self
            .read_line(prompt)?
            .is_some_and(|answer| matches!(answer.trim(), "y" | "Y" | "yes")))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn render(&mut self, view: &DisplayState) -> io::Result<()> {
        let Some(list) = &view.list_id else {
            return writeln!(self.output, "no list selected");
        };
        writeln!(
            self.output,
            "[{list}] remembered {}/{}",
            view.remembered, view.total
        )?;
        if view.total == 0 {
            return writeln!(self.output, "  (no words in this list)");
        }
        match (&view.current_word, &view.current_definition) {
            (Some(word), Some(definition)) => {
                writeln!(self.output, "  {word}")?;
                writeln!(self.output, "  = {definition}")
            }
            (Some(word), None) => writeln!(self.output, "  {word}"),
            (None, _) => writeln!(self.output, "  all words remembered (r to start over)"),
        }
    }
}
