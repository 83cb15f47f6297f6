//! Interactive administration console.
//!
//! # Responsibility
//! - Read one command per line and dispatch it.
//! - Drive the multi-prompt add/edit/link sequences.
//!
//! # Invariants
//! - One command, including all of its prompts, completes before the next
//!   line is read as a command.
//! - Only the last step of a command writes; a command cut short by end of
//!   input leaves the store untouched.
//! - Every store access opens and releases its own connection.
//! - Command failures are printed and never end the session.

use crate::command::Command;
use log::debug;
use principles_core::service::input::{
    non_blank, parse_category_change, parse_category_id, parse_id,
};
use principles_core::{
    with_store, CatalogError, CatalogResult, CategoryService, NewPrinciple, PrincipleEdit,
    PrincipleService,
};
use rusqlite::Connection;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const HELP_LINES: &[(&str, &str)] = &[
    ("help", "Show this list of commands"),
    ("listp", "List all principles"),
    ("listc", "List all categories"),
    ("addp", "Add a new principle"),
    ("editp", "Edit an existing principle"),
    ("linkp", "Link a principle to another principle"),
    ("exit", "Exit the console"),
];

/// Line-oriented console over arbitrary input and output streams.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
    db_path: PathBuf,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, db_path: impl Into<PathBuf>) -> Self {
        Self {
            input,
            output,
            db_path: db_path.into(),
        }
    }

    /// Runs the read-dispatch loop until `exit` or end of input.
    ///
    /// # Errors
    /// - Returns an error only when the console streams themselves fail.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the Principles Database REPL!")?;
        writeln!(self.output, "Type `help` for a list of commands.")?;
        writeln!(self.output)?;

        loop {
            let Some(line) = self.ask("> ")? else {
                writeln!(self.output)?;
                break;
            };

            let command = Command::parse(&line);
            debug!("event=console_command module=cli command={}", command.name());
            match command {
                Command::Help => self.print_help()?,
                Command::ListPrinciples => self.list_principles()?,
                Command::ListCategories => self.list_categories()?,
                Command::AddPrinciple => self.add_principle()?,
                Command::EditPrinciple => self.edit_principle()?,
                Command::LinkPrinciples => self.link_principles()?,
                Command::Exit => {
                    writeln!(self.output, "Exiting the REPL. Goodbye!")?;
                    break;
                }
                Command::Unknown(_) => writeln!(
                    self.output,
                    "Unknown command. Type `help` for a list of commands."
                )?,
            }
        }

        self.output.flush()
    }

    fn print_help(&mut self) -> io::Result<()> {
        writeln!(self.output, "Available commands:")?;
        for (name, summary) in HELP_LINES {
            writeln!(self.output, "  {name:<8} - {summary}")?;
        }
        Ok(())
    }

    fn list_principles(&mut self) -> io::Result<()> {
        match self.store(|conn| PrincipleService::sqlite(conn).list()) {
            Ok(principles) => {
                writeln!(self.output, "Principles:")?;
                for entry in &principles {
                    writeln!(
                        self.output,
                        "  [{}] {} - {} (Category: {})",
                        entry.principle.id,
                        entry.principle.title,
                        entry.principle.description,
                        entry.category_label()
                    )?;
                }
                Ok(())
            }
            Err(err) => writeln!(self.output, "Error listing principles: {err}"),
        }
    }

    fn list_categories(&mut self) -> io::Result<()> {
        match self.store(|conn| CategoryService::sqlite(conn).list_categories()) {
            Ok(categories) => {
                writeln!(self.output, "Categories:")?;
                for category in &categories {
                    writeln!(self.output, "  [{}] {}", category.id, category.name)?;
                }
                Ok(())
            }
            Err(err) => writeln!(self.output, "Error listing categories: {err}"),
        }
    }

    fn add_principle(&mut self) -> io::Result<()> {
        let Some(title) = self.ask("Enter principle title: ")? else {
            return Ok(());
        };
        let Some(description) = self.ask("Enter principle description: ")? else {
            return Ok(());
        };
        self.list_categories()?;
        let Some(category) = self.ask("Enter category ID (or press Enter to skip): ")? else {
            return Ok(());
        };

        let principle = NewPrinciple {
            title,
            description,
            category_id: parse_category_id(&category),
        };
        match self.store(|conn| PrincipleService::sqlite(conn).add(&principle)) {
            Ok(id) => writeln!(self.output, "Principle added successfully! [{id}]"),
            Err(err) => writeln!(self.output, "Error adding principle: {err}"),
        }
    }

    fn edit_principle(&mut self) -> io::Result<()> {
        let Some(raw_id) = self.ask("Enter the ID of the principle to edit: ")? else {
            return Ok(());
        };
        let Ok(id) = parse_id(&raw_id) else {
            return writeln!(self.output, "Invalid ID.");
        };

        let current = match self.store(|conn| PrincipleService::sqlite(conn).entry(id)) {
            Ok(current) => current,
            Err(CatalogError::NotFound(_)) => {
                return writeln!(self.output, "Principle not found.");
            }
            Err(err) => {
                return writeln!(self.output, "Error retrieving principle: {err}");
            }
        };

        writeln!(self.output, "Current title: {}", current.principle.title)?;
        let Some(title) = self.ask("Enter new title (or press Enter to keep): ")? else {
            return Ok(());
        };

        writeln!(
            self.output,
            "Current description: {}",
            current.principle.description
        )?;
        let Some(description) = self.ask("Enter new description (or press Enter to keep): ")?
        else {
            return Ok(());
        };

        self.list_categories()?;
        writeln!(self.output, "Current category: {}", current.category_label())?;
        let Some(category) = self.ask("Enter new category ID (or press Enter to keep): ")? else {
            return Ok(());
        };

        let edit = PrincipleEdit {
            title: non_blank(&title),
            description: non_blank(&description),
            category: parse_category_change(&category),
        };
        if edit.is_empty() {
            return writeln!(self.output, "No changes.");
        }

        match self.store(|conn| PrincipleService::sqlite(conn).edit(id, &edit)) {
            Ok(_) => writeln!(self.output, "Principle updated successfully!"),
            Err(err) => writeln!(self.output, "Error updating principle: {err}"),
        }
    }

    fn link_principles(&mut self) -> io::Result<()> {
        let Some(raw_id) = self.ask("Enter the ID of the principle to link: ")? else {
            return Ok(());
        };
        let Ok(principle_id) = parse_id(&raw_id) else {
            return writeln!(self.output, "Invalid ID.");
        };

        self.list_principles()?;
        let Some(raw_related) = self.ask("Enter the ID of the related principle: ")? else {
            return Ok(());
        };
        let Ok(related_id) = parse_id(&raw_related) else {
            return writeln!(self.output, "Invalid related principle ID.");
        };

        match self.store(|conn| PrincipleService::sqlite(conn).link(principle_id, related_id)) {
            Ok(()) => writeln!(self.output, "Principles linked successfully!"),
            Err(err) => writeln!(self.output, "Error linking principles: {err}"),
        }
    }

    /// Prints `prompt` and reads one trimmed line; `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn store<T>(&self, work: impl FnOnce(&Connection) -> CatalogResult<T>) -> CatalogResult<T> {
        with_store(&self.db_path, work)
    }
}

#[cfg(test)]
mod tests {
    use super::Console;
    use principles_core::db::open_db;
    use principles_core::PrincipleService;
    use rusqlite::Connection;
    use std::io::Cursor;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn seeded_store(sql: &str) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("principles.db");
        let conn = open_db(&path).unwrap();
        conn.execute_batch(sql).unwrap();
        (dir, path)
    }

    fn run_script(db_path: &Path, script: &str) -> String {
        let mut output = Vec::new();
        Console::new(Cursor::new(script.as_bytes()), &mut output, db_path)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn stored_row(db_path: &Path, id: i64) -> (String, String, Option<i64>) {
        let conn = Connection::open(db_path).unwrap();
        conn.query_row(
            "SELECT title, description, category_id FROM principles WHERE id = ?1;",
            [id],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .unwrap()
    }

    const ABC: &str = "INSERT INTO categories (id, name) VALUES (5, 'Teamwork');
        INSERT INTO principles (id, title, description) VALUES
            (1, 'A', 'first'),
            (2, 'B', 'second'),
            (3, 'C', 'third');";

    #[test]
    fn help_and_unknown_commands_keep_the_loop_running() {
        let (_dir, db_path) = seeded_store("");

        let transcript = run_script(&db_path, "help\nbogus\nexit\n");
        assert!(transcript.contains("Available commands:"));
        assert!(transcript.contains("  linkp    - Link a principle to another principle"));
        assert!(transcript.contains("Unknown command. Type `help` for a list of commands."));
        assert!(transcript.ends_with("Exiting the REPL. Goodbye!\n"));
    }

    #[test]
    fn end_of_input_ends_the_session() {
        let (_dir, db_path) = seeded_store("");

        let transcript = run_script(&db_path, "listc\n");
        assert!(transcript.contains("Categories:"));
        assert!(!transcript.contains("Goodbye"));
    }

    #[test]
    fn listp_prints_each_principle_with_category() {
        let (_dir, db_path) = seeded_store(
            "INSERT INTO categories (id, name) VALUES (1, 'Craft');
             INSERT INTO principles (id, title, description, category_id) VALUES
                (1, 'A', 'first', 1),
                (2, 'B', 'second', NULL);",
        );

        let transcript = run_script(&db_path, "listp\nexit\n");
        assert!(transcript.contains("Principles:\n"));
        assert!(transcript.contains("  [1] A - first (Category: Craft)\n"));
        assert!(transcript.contains("  [2] B - second (Category: Uncategorized)\n"));
    }

    #[test]
    fn listc_prints_each_category() {
        let (_dir, db_path) = seeded_store(
            "INSERT INTO categories (id, name) VALUES (2, 'Teamwork'), (1, 'Craft');",
        );

        let transcript = run_script(&db_path, "listc\nexit\n");
        assert!(transcript.contains("Categories:\n  [1] Craft\n  [2] Teamwork\n"));
    }

    #[test]
    fn addp_inserts_principle_with_optional_category() {
        let (_dir, db_path) = seeded_store(ABC);

        let transcript = run_script(&db_path, "addp\nD\nfourth\n5\naddp\nE\nfifth\n\nexit\n");
        assert!(transcript.contains("Principle added successfully! [4]"));
        assert!(transcript.contains("Principle added successfully! [5]"));
        assert_eq!(
            stored_row(&db_path, 4),
            ("D".to_string(), "fourth".to_string(), Some(5))
        );
        assert_eq!(stored_row(&db_path, 5).2, None);
    }

    #[test]
    fn editp_with_blank_text_and_new_category_changes_category_only() {
        let (_dir, db_path) = seeded_store(ABC);

        let transcript = run_script(&db_path, "editp\n2\n\n\n5\nexit\n");
        assert!(transcript.contains("Current title: B"));
        assert!(transcript.contains("Current category: Uncategorized"));
        assert!(transcript.contains("Principle updated successfully!"));
        assert_eq!(
            stored_row(&db_path, 2),
            ("B".to_string(), "second".to_string(), Some(5))
        );
    }

    #[test]
    fn editp_with_all_blank_inputs_changes_nothing() {
        let (_dir, db_path) = seeded_store(ABC);
        let before = stored_row(&db_path, 2);

        let transcript = run_script(&db_path, "editp\n2\n\n\n\nexit\n");
        assert!(transcript.contains("No changes."));
        assert_eq!(stored_row(&db_path, 2), before);
    }

    #[test]
    fn editp_rejects_bad_and_unknown_ids() {
        let (_dir, db_path) = seeded_store(ABC);

        let transcript = run_script(&db_path, "editp\nabc\neditp\n42\nexit\n");
        assert!(transcript.contains("Invalid ID."));
        assert!(transcript.contains("Principle not found."));
    }

    #[test]
    fn edit_cut_short_by_end_of_input_writes_nothing() {
        let (_dir, db_path) = seeded_store(ABC);

        run_script(&db_path, "editp\n2\nNew title\n");
        assert_eq!(stored_row(&db_path, 2).0, "B");
    }

    #[test]
    fn linkp_records_link_visible_from_both_sides() {
        let (_dir, db_path) = seeded_store(ABC);

        let transcript = run_script(&db_path, "linkp\n1\n3\nexit\n");
        assert!(transcript.contains("  [3] C - third (Category: Uncategorized)"));
        assert!(transcript.contains("Principles linked successfully!"));

        let conn = Connection::open(&db_path).unwrap();
        let (principle_id, related_id, relation_type): (i64, i64, String) = conn
            .query_row(
                "SELECT principle_id, related_id, relation_type FROM principle_links;",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .unwrap();
        assert_eq!((principle_id, related_id), (1, 3));
        assert_eq!(relation_type, "");

        let service = PrincipleService::sqlite(&conn);
        let linked_ids = |id| -> Vec<i64> {
            service
                .view(Some(id))
                .unwrap()
                .linked
                .iter()
                .map(|linked| linked.id)
                .collect()
        };
        assert_eq!(linked_ids(1), vec![3]);
        assert_eq!(linked_ids(3), vec![1]);
        assert!(linked_ids(2).is_empty());
    }

    #[test]
    fn linkp_rejects_invalid_related_id() {
        let (_dir, db_path) = seeded_store(ABC);

        let transcript = run_script(&db_path, "linkp\n1\nzero\nexit\n");
        assert!(transcript.contains("Invalid related principle ID."));
        let conn = Connection::open(&db_path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM principle_links;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
