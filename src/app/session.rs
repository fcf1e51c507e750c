use crate::core::engine::ConverterEngine;
use crate::domain::model::Unit;
use crate::domain::ports::Storage;
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Line-oriented front end: one command per line, answers written to `out`.
pub struct Session<S: Storage> {
    engine: ConverterEngine<S>,
}

impl<S: Storage> Session<S> {
    pub fn new(engine: ConverterEngine<S>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &ConverterEngine<S> {
        &self.engine
    }

    pub fn write_banner<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let tool = self.engine.tool();
        let [a, b] = tool.units();
        writeln!(out, "{} Converter", tool.heading())?;
        writeln!(
            out,
            "Type a target unit and a value, e.g. '{} 12' converts {} to {}.",
            b.symbol().to_lowercase(),
            a,
            b
        )?;
        writeln!(out, "Other commands: help, history, export, quit")
    }

    /// Reads commands until `quit` or end of input. Exports use today's date.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        self.write_banner(out)?;
        for line in input.lines() {
            let line = line?;
            let today = Local::now().date_naive();
            if self.handle_line(&line, today, out)? == Flow::Quit {
                break;
            }
        }
        out.flush()
    }

    pub fn handle_line<W: Write>(
        &mut self,
        line: &str,
        today: NaiveDate,
        out: &mut W,
    ) -> io::Result<Flow> {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Ok(Flow::Continue);
        };

        match command.to_ascii_lowercase().as_str() {
            "quit" | "exit" => return Ok(Flow::Quit),
            "help" => {
                writeln!(out, "Help / Info")?;
                writeln!(out, "{}", self.engine.help_text())?;
            }
            "history" => self.show_history(out)?,
            "export" => self.export(today, out)?,
            other => match Unit::parse(other) {
                Some(target) => {
                    let raw = parts.collect::<Vec<_>>().join(" ");
                    self.convert(target, &raw, out)?;
                }
                None => writeln!(
                    out,
                    "Unknown command '{}'. Type 'help' for instructions.",
                    command
                )?,
            },
        }

        Ok(Flow::Continue)
    }

    fn convert<W: Write>(&mut self, target: Unit, raw: &str, out: &mut W) -> io::Result<()> {
        match self.engine.convert_to(target, raw) {
            Ok(record) => writeln!(out, "{}", record),
            Err(e) => writeln!(out, "{}", e.user_friendly_message()),
        }
    }

    fn show_history<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if !self.engine.can_show_history() {
            return writeln!(out, "No calculations yet. Convert a value first.");
        }

        let view = self.engine.recent_view();
        writeln!(out, "History / Export")?;
        writeln!(out, "{}", view.intro())?;
        writeln!(out, "{}", view.body())?;
        writeln!(
            out,
            "Type 'export' to save your calculations in a file. \
             If the filename already exists, it will be replaced."
        )
    }

    fn export<W: Write>(&self, today: NaiveDate, out: &mut W) -> io::Result<()> {
        if !self.engine.can_show_history() {
            return writeln!(out, "No calculations yet. Convert a value first.");
        }

        match self.engine.export(today) {
            Ok(_) => writeln!(
                out,
                "Export Successful! The file is called {}",
                self.engine.export_file_name(today)
            ),
            Err(e) => {
                writeln!(out, "{}", e.user_friendly_message())?;
                writeln!(out, "{}", e.recovery_suggestion())
            }
        }
    }
}
