use crate::domain::ports::CommandBox;
use crate::error::Result;
use std::io::Write;

/// Invoker for the command pattern: executes commands and keeps them on a
/// history stack so they can be undone in reverse order.
#[derive(Default)]
pub struct RemoteControl {
    history: Vec<CommandBox>,
}

impl RemoteControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes the command and pushes it onto the history.
    pub fn press(&mut self, mut command: CommandBox, out: &mut dyn Write) -> Result<()> {
        writeln!(out)?;
        writeln!(out, ">>> EXECUTE")?;
        command.execute(out)?;
        self.history.push(command);
        Ok(())
    }

    /// Undoes the most recently executed command. With an empty history
    /// this reports the condition and does nothing.
    pub fn undo(&mut self, out: &mut dyn Write) -> Result<()> {
        match self.history.pop() {
            Some(mut command) => {
                writeln!(out)?;
                writeln!(out, "<<< UNDO >>>")?;
                command.undo(out)?;
            }
            None => {
                writeln!(out)?;
                writeln!(out, "History is empty. Nothing to undo.")?;
            }
        }
        Ok(())
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
