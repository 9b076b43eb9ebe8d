use crate::application::TaskService;
use crate::domain::TaskId;
use std::io::Write;
use tracing::debug;

const AVAILABLE_COMMANDS: &str = "Available commands: add, list, complete";

/// Command dispatcher. Maps a token sequence to one of the three verbs,
/// invokes the service, and renders the outcome onto the sink. Stateless
/// between invocations; every service error is rendered here, never
/// propagated.
pub struct Cli {
    service: TaskService,
}

impl Cli {
    pub fn new(service: TaskService) -> Self {
        Self { service }
    }

    pub fn execute<W: Write>(&mut self, args: &[String], out: &mut W) -> std::io::Result<()> {
        let Some((command, rest)) = args.split_first() else {
            writeln!(out, "Error: No command provided")?;
            writeln!(out, "{AVAILABLE_COMMANDS}")?;
            return Ok(());
        };

        debug!(%command, "dispatching");
        match command.as_str() {
            "add" => self.handle_add(rest, out),
            "list" => self.handle_list(out),
            "complete" => self.handle_complete(rest, out),
            unknown => {
                writeln!(out, "Error: Unknown command '{unknown}'")?;
                writeln!(out, "{AVAILABLE_COMMANDS}")
            }
        }
    }

    fn handle_add<W: Write>(&mut self, args: &[String], out: &mut W) -> std::io::Result<()> {
        if args.is_empty() {
            return writeln!(out, "Error: Task description is required");
        }

        let description = args.join(" ");
        match self.service.create_task(&description) {
            Ok(task) => writeln!(out, "Task added: {task}"),
            Err(e) => writeln!(out, "Error: {e}"),
        }
    }

    fn handle_list<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        let tasks = self.service.get_all_tasks();
        if tasks.is_empty() {
            return writeln!(out, "No tasks found");
        }

        for task in tasks {
            writeln!(out, "{task}")?;
        }
        Ok(())
    }

    fn handle_complete<W: Write>(&mut self, args: &[String], out: &mut W) -> std::io::Result<()> {
        let Some(raw_id) = args.first() else {
            return writeln!(out, "Error: Task id is required");
        };

        // Parse failures are a presentation concern; the service only sees
        // well-formed integers.
        let Ok(id) = raw_id.parse::<i64>() else {
            return writeln!(out, "Error: Task id must be a number");
        };

        match self.service.complete_task(TaskId(id)) {
            Ok(()) => writeln!(out, "Task {id} completed"),
            Err(e) => writeln!(out, "Error: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryTaskRepository;

    fn cli() -> Cli {
        Cli::new(TaskService::new(Box::new(InMemoryTaskRepository::default())))
    }

    fn run(cli: &mut Cli, args: &[&str]) -> String {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        cli.execute(&args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_input_lists_available_commands() {
        let mut cli = cli();
        let output = run(&mut cli, &[]);
        assert_eq!(
            output,
            "Error: No command provided\nAvailable commands: add, list, complete\n"
        );
    }

    #[test]
    fn unknown_command_is_named() {
        let mut cli = cli();
        let output = run(&mut cli, &["delete", "1"]);
        assert_eq!(
            output,
            "Error: Unknown command 'delete'\nAvailable commands: add, list, complete\n"
        );
    }

    #[test]
    fn add_joins_tokens_into_the_description() {
        let mut cli = cli();
        let output = run(&mut cli, &["add", "Buy", "groceries"]);
        assert_eq!(output, "Task added: 1. Buy groceries\n");

        let listing = run(&mut cli, &["list"]);
        assert_eq!(listing, "1. Buy groceries\n");
    }

    #[test]
    fn add_without_description_is_an_error() {
        let mut cli = cli();
        let output = run(&mut cli, &["add"]);
        assert_eq!(output, "Error: Task description is required\n");
    }

    #[test]
    fn add_with_whitespace_description_surfaces_the_validation_error() {
        let mut cli = cli();
        let output = run(&mut cli, &["add", "   "]);
        assert_eq!(output, "Error: Task description cannot be empty\n");
    }

    #[test]
    fn list_on_empty_store() {
        let mut cli = cli();
        let output = run(&mut cli, &["list"]);
        assert_eq!(output, "No tasks found\n");
    }

    #[test]
    fn list_marks_completed_tasks() {
        let mut cli = cli();
        run(&mut cli, &["add", "Buy", "groceries"]);
        run(&mut cli, &["add", "Walk", "the", "dog"]);
        run(&mut cli, &["complete", "1"]);

        let output = run(&mut cli, &["list"]);
        assert_eq!(output, "1. Buy groceries [✓]\n2. Walk the dog\n");
    }

    #[test]
    fn complete_without_id_is_an_error() {
        let mut cli = cli();
        let output = run(&mut cli, &["complete"]);
        assert_eq!(output, "Error: Task id is required\n");
    }

    #[test]
    fn complete_with_non_numeric_id() {
        let mut cli = cli();
        run(&mut cli, &["add", "Buy", "groceries"]);

        let output = run(&mut cli, &["complete", "abc"]);
        assert_eq!(output, "Error: Task id must be a number\n");

        // Store untouched.
        let listing = run(&mut cli, &["list"]);
        assert_eq!(listing, "1. Buy groceries\n");
    }

    #[test]
    fn complete_with_non_positive_id_reports_validation_error() {
        let mut cli = cli();
        for id in ["0", "-1"] {
            let output = run(&mut cli, &["complete", id]);
            assert_eq!(output, "Error: Task id must be a positive integer\n");
        }
    }

    #[test]
    fn complete_with_unknown_id_reports_not_found() {
        let mut cli = cli();
        let output = run(&mut cli, &["complete", "999"]);
        assert_eq!(output, "Error: Task with id 999 not found\n");
    }

    #[test]
    fn complete_confirms_the_id() {
        let mut cli = cli();
        run(&mut cli, &["add", "Buy", "groceries"]);
        let output = run(&mut cli, &["complete", "1"]);
        assert_eq!(output, "Task 1 completed\n");
    }
}
