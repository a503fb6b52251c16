use std::io::{BufRead, Write};
use std::path::Path;

use log::{error, info};

use crate::catalog::load_catalog;
use crate::collections::HashTable;
use crate::config::{Config, OutputFormat};
use crate::course::Course;
use crate::error::Result;

const MENU: &str = "Menu:
  1. Load Data Structure.
  2. Print Course List.
  3. Print Course
  9. Exit";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Load,
    PrintList,
    PrintCourse,
    Exit,
}

impl Command {
    /// Maps a menu choice (`1`, `2`, `3`, `9`) to its command.
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Command::Load),
            "2" => Some(Command::PrintList),
            "3" => Some(Command::PrintCourse),
            "9" => Some(Command::Exit),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A prerequisite as shown to the operator: resolved through the table, or
/// just the id when the table has no such course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prerequisite {
    Found(Course),
    Missing(String),
}

/// One `search` per prerequisite id, in declaration order.
pub fn resolve_prerequisites(table: &HashTable, course: &Course) -> Vec<Prerequisite> {
    course
        .prerequisites()
        .iter()
        .map(|id| match table.search(id) {
            Some(found) => Prerequisite::Found(found),
            None => Prerequisite::Missing(id.clone()),
        })
        .collect()
}

pub fn write_course<W: Write>(out: &mut W, table: &HashTable, course: &Course) -> Result<()> {
    writeln!(out, "{}", course)?;
    writeln!(out, "Pre - Requisites:")?;

    let prerequisites = resolve_prerequisites(table, course);
    if prerequisites.is_empty() {
        writeln!(out, "No pre-requisites needed for this course.")?;
    }
    for (i, prerequisite) in prerequisites.iter().enumerate() {
        match prerequisite {
            Prerequisite::Found(found) => writeln!(out, "Pre-Requisite #{} - {}", i + 1, found)?,
            Prerequisite::Missing(id) => {
                writeln!(out, "Pre-Requisite #{} - {} (not found)", i + 1, id)?
            }
        }
    }
    Ok(())
}

pub fn write_course_list<W: Write>(
    out: &mut W,
    table: &HashTable,
    format: OutputFormat,
) -> Result<()> {
    let courses = table.sorted();
    match format {
        OutputFormat::Text => {
            for course in &courses {
                writeln!(out, "Course: {}", course)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &courses)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Interactive menu over a course table. Reads choices from `input`, writes
/// everything the operator sees to `output`.
pub struct Session<R, W> {
    table: HashTable,
    config: Config,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: Config, input: R, output: W) -> Self {
        Self {
            table: HashTable::with_size(config.table_size),
            config,
            input,
            output,
        }
    }

    pub fn table(&self) -> &HashTable {
        &self.table
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Loads `config.source`, if any, before the menu is shown.
    pub fn preload(&mut self) -> Result<()> {
        if let Some(path) = self.config.source.clone() {
            self.load_from(&path)?;
        }
        Ok(())
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{}", MENU)?;
            write!(self.output, "Enter choice: ")?;
            self.output.flush()?;

            let choice = match self.read_line()? {
                Some(line) => line,
                None => break,
            };
            let flow = match Command::parse(&choice) {
                Some(command) => self.dispatch(command)?,
                None => {
                    writeln!(self.output, "{} is not a valid option.", choice.trim())?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }
        writeln!(self.output, "Good bye.")?;
        Ok(())
    }

    pub fn dispatch(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Load => {
                writeln!(self.output, "What is the file name?")?;
                if let Some(path) = self.read_line()? {
                    self.load_from(Path::new(path.trim()))?;
                }
            }
            Command::PrintList => {
                write_course_list(&mut self.output, &self.table, self.config.format)?;
            }
            Command::PrintCourse => {
                write!(self.output, "What course do you want to know about? ")?;
                self.output.flush()?;
                if let Some(id) = self.read_line()? {
                    self.show_course(id.trim())?;
                }
            }
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn show_course(&mut self, id: &str) -> Result<()> {
        match self.table.get(id) {
            Some(course) => write_course(&mut self.output, &self.table, course),
            None => {
                writeln!(self.output, "Course not found.")?;
                Ok(())
            }
        }
    }

    // An unreadable catalog is reported to the operator, not returned.
    fn load_from(&mut self, path: &Path) -> Result<()> {
        match load_catalog(path, &mut self.table) {
            Ok(report) => {
                info!("table now holds {} courses", self.table.len());
                writeln!(
                    self.output,
                    "Loaded {} courses ({} rows skipped).",
                    report.inserted, report.skipped
                )?;
            }
            Err(e) => {
                error!("{}", e);
                writeln!(self.output, "Error: {}", e)?;
            }
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> HashTable {
        let mut table = HashTable::new();
        table.insert(Course::new("CS101", "Intro", Vec::<String>::new()));
        table.insert(Course::new("CS201", "Data Structures", ["CS101", "MATH9"]));
        table
    }

    #[test]
    fn parse_menu_choices() {
        assert_eq!(Command::parse("1\n"), Some(Command::Load));
        assert_eq!(Command::parse(" 2 "), Some(Command::PrintList));
        assert_eq!(Command::parse("3"), Some(Command::PrintCourse));
        assert_eq!(Command::parse("9"), Some(Command::Exit));
        assert_eq!(Command::parse("4"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn unresolved_prerequisites_keep_their_id() {
        let table = catalog();
        let course = table.search("CS201").unwrap();
        let resolved = resolve_prerequisites(&table, &course);
        assert_eq!(
            resolved,
            vec![
                Prerequisite::Found(Course::new("CS101", "Intro", Vec::<String>::new())),
                Prerequisite::Missing("MATH9".to_string()),
            ]
        );
    }

    #[test]
    fn write_course_lists_prerequisites() {
        let table = catalog();
        let mut out = Vec::new();
        write_course(&mut out, &table, table.get("CS201").unwrap()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "CS201: Data Structures\n\
             Pre - Requisites:\n\
             Pre-Requisite #1 - CS101: Intro\n\
             Pre-Requisite #2 - MATH9 (not found)\n"
        );
    }

    #[test]
    fn write_course_without_prerequisites() {
        let table = catalog();
        let mut out = Vec::new();
        write_course(&mut out, &table, table.get("CS101").unwrap()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("No pre-requisites needed for this course.\n"));
    }

    #[test]
    fn course_list_is_sorted_text() {
        let mut table = catalog();
        table.insert(Course::new("BIO100", "Biology", Vec::<String>::new()));
        let mut out = Vec::new();
        write_course_list(&mut out, &table, OutputFormat::Text).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Course: BIO100: Biology\nCourse: CS101: Intro\nCourse: CS201: Data Structures\n"
        );
    }

    #[test]
    fn course_list_as_json() {
        let table = catalog();
        let mut out = Vec::new();
        write_course_list(&mut out, &table, OutputFormat::Json).unwrap();
        let courses: Vec<Course> = serde_json::from_slice(&out).unwrap();
        assert_eq!(courses, table.sorted());
    }
}
