//! Interactive terminal session.
//!
//! [`TerminalDialogs`] answers the merge window's dialogs with line
//! prompts, and [`Shell`] maps typed commands onto the window's buttons.
//! Both work over any `BufRead`/`Write` pair so sessions can be scripted.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::dialogs::{Dialogs, FileFilter, Notice};
use crate::error::Result;
use crate::file_list::AddOutcome;
use crate::merge::Merger;
use crate::output::{OutputFormatter, display_merge_report};
use crate::utils::collect_paths_for_patterns;
use crate::window::MergeWindow;

const HELP: &str = "\
Commands:
  add [PATH...]      add files (no paths: prompt for them)
  remove             remove the selected files
  select N[,M...]    select files by number (no numbers: clear)
  up                 move the selected file up
  down               move the selected file down
  output [PATH]      set the output file (no path: prompt for it)
  merge              merge the list into the output file
  list               show the list
  help               show this help
  quit               leave";

/// Expand typed patterns and keep the paths `filter` accepts.
pub fn expand_patterns<T>(filter: &FileFilter, patterns: T) -> Result<Vec<PathBuf>>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    Ok(collect_paths_for_patterns(patterns)?
        .into_iter()
        .filter(|path| filter.matches(path))
        .collect())
}

/// Split typed paths into words.
///
/// A line that names an existing file as a whole is one path, spaces
/// included. Otherwise words are split shell-style, so paths with spaces
/// can be quoted.
pub fn split_paths(text: &str) -> std::result::Result<Vec<String>, String> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }
    if Path::new(text).is_file() {
        return Ok(vec![text.to_string()]);
    }
    shell_words::split(text).map_err(|err| format!("Cannot read paths: {err}"))
}

/// Dialogs answered on a terminal.
pub struct TerminalDialogs<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalDialogs<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one trimmed line. `None` at end of input.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_writer(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Dialogs for TerminalDialogs<R, W> {
    fn open_files(&mut self, filter: &FileFilter) -> Option<Vec<PathBuf>> {
        let line = self
            .prompt(&format!("Add {} (empty to cancel): ", filter.description))
            .ok()??;
        if line.is_empty() {
            return None;
        }

        let words = match split_paths(&line) {
            Ok(words) => words,
            Err(message) => {
                let _ = writeln!(self.output, "{message}");
                return None;
            }
        };

        match expand_patterns(filter, words) {
            Ok(paths) => Some(paths),
            Err(err) => {
                let _ = writeln!(self.output, "{err}");
                None
            }
        }
    }

    fn save_file(&mut self, _filter: &FileFilter, default_name: &str) -> Option<PathBuf> {
        let line = self
            .prompt(&format!("Save as [{default_name}] ('-' to cancel): "))
            .ok()??;
        match line.as_str() {
            "-" => None,
            "" => Some(PathBuf::from(default_name)),
            path => Some(PathBuf::from(path)),
        }
    }

    fn notify(&mut self, notice: &Notice) {
        let _ = writeln!(self.output, "{notice}");
    }
}

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Vec<String>),
    Remove,
    /// Zero-based indices; empty clears the selection.
    Select(Vec<usize>),
    Up,
    Down,
    Output(Option<String>),
    Merge,
    List,
    Help,
    Quit,
    Empty,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "" => Self::Empty,
            "add" => Self::Add(split_paths(rest)?),
            "remove" | "rm" => Self::Remove,
            "select" | "sel" => Self::Select(parse_selection(rest)?),
            "up" => Self::Up,
            "down" => Self::Down,
            "output" | "out" => Self::Output((!rest.is_empty()).then(|| rest.to_string())),
            "merge" => Self::Merge,
            "list" | "ls" => Self::List,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => {
                return Err(format!(
                    "Unknown command '{other}'. Type 'help' for a list of commands."
                ));
            }
        };
        Ok(command)
    }
}

/// `"2,3 5"` → `[1, 2, 4]`. Numbers are 1-based.
fn parse_selection(text: &str) -> std::result::Result<Vec<usize>, String> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| match part.parse::<usize>() {
            Ok(number) if number > 0 => Ok(number - 1),
            _ => Err(format!("Invalid file number: {part}")),
        })
        .collect()
}

/// The interactive session.
pub struct Shell<R: BufRead, W: Write> {
    window: MergeWindow<TerminalDialogs<R, W>>,
    formatter: OutputFormatter,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, merger: Merger, formatter: OutputFormatter) -> Self {
        Self {
            window: MergeWindow::with_merger(TerminalDialogs::new(input, output), merger),
            formatter,
        }
    }

    pub fn window(&self) -> &MergeWindow<TerminalDialogs<R, W>> {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut MergeWindow<TerminalDialogs<R, W>> {
        &mut self.window
    }

    pub fn into_writer(self) -> W {
        self.window.into_dialogs().into_writer()
    }

    /// Read and execute commands until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        self.render()?;

        loop {
            let Some(line) = self.window.dialogs_mut().prompt("> ")? else {
                break;
            };

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(message) => writeln!(self.out(), "{message}")?,
            }
        }

        Ok(())
    }

    pub fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Add(patterns) => self.add(patterns)?,
            Command::Remove => {
                let removed = self.window.remove_files();
                if removed.is_empty() {
                    writeln!(self.out(), "Nothing selected.")?;
                } else {
                    writeln!(self.out(), "Removed {} file(s).", removed.len())?;
                    self.render()?;
                }
            }
            Command::Select(indices) => self.select(&indices)?,
            Command::Up => {
                if self.window.move_up() {
                    self.render()?;
                } else {
                    writeln!(self.out(), "Cannot move up.")?;
                }
            }
            Command::Down => {
                if self.window.move_down() {
                    self.render()?;
                } else {
                    writeln!(self.out(), "Cannot move down.")?;
                }
            }
            Command::Output(Some(path)) => {
                self.window.set_output_path(path);
                self.render_output()?;
            }
            Command::Output(None) => {
                if self.window.browse_output() {
                    self.render_output()?;
                }
            }
            Command::Merge => {
                let formatter = &self.formatter;
                let report = self.window.merge_with_progress(|position, total, path| {
                    formatter.progress(position, total, &path.display().to_string());
                });
                if let Some(report) = report {
                    display_merge_report(&self.formatter, &report);
                }
            }
            Command::List => self.render()?,
            Command::Help => writeln!(self.out(), "{HELP}")?,
            Command::Quit | Command::Empty => {}
        }
        Ok(())
    }

    fn add(&mut self, patterns: Vec<String>) -> Result<()> {
        let outcome = if patterns.is_empty() {
            match self.window.add_files() {
                Some(outcome) => outcome,
                None => return Ok(()),
            }
        } else {
            match expand_patterns(&FileFilter::pdf(), &patterns) {
                Ok(paths) => self.window.add_paths(paths),
                Err(err) => {
                    writeln!(self.out(), "{err}")?;
                    return Ok(());
                }
            }
        };

        self.report_added(&outcome)?;
        self.render()
    }

    fn report_added(&mut self, outcome: &AddOutcome) -> Result<()> {
        let out = self.out();
        writeln!(out, "Added {} file(s).", outcome.added.len())?;
        for path in &outcome.missing {
            writeln!(out, "Skipped missing file: {}", path.display())?;
        }
        for path in &outcome.duplicates {
            writeln!(out, "Already in the list: {}", path.display())?;
        }
        Ok(())
    }

    fn select(&mut self, indices: &[usize]) -> Result<()> {
        let len = self.window.files().len();
        if let Some(index) = indices.iter().find(|&&index| index >= len) {
            writeln!(self.out(), "No file number {}.", index + 1)?;
            return Ok(());
        }

        let files = self.window.files_mut();
        files.clear_selection();
        for &index in indices {
            files.extend_selection(index);
        }
        self.render()
    }

    fn render(&mut self) -> Result<()> {
        let mut text = String::from("Files:\n");
        let files = self.window.files();
        if files.is_empty() {
            text.push_str("  (none)\n");
        }
        for (index, path) in files.paths().iter().enumerate() {
            let marker = if files.is_selected(index) { '*' } else { ' ' };
            text.push_str(&format!("  [{marker}] {}. {}\n", index + 1, path.display()));
        }

        write!(self.out(), "{text}")?;
        self.render_output()
    }

    fn render_output(&mut self) -> Result<()> {
        let line = match self.window.output_path() {
            "" => "Output: (not set)".to_string(),
            path => format!("Output: {path}"),
        };
        writeln!(self.out(), "{line}")?;
        Ok(())
    }

    fn out(&mut self) -> &mut W {
        self.window.dialogs_mut().writer()
    }
}
