//! Tests for argument parsing, command execution and snapshot-backed sessions

#[cfg(test)]
mod tests {
    use clap::Parser;
    use gridwright::io::cli::{
        Cli, CommandOutput, GridCommand, SessionProcessor, describe_grid, execute,
        parse_position,
    };
    use gridwright::io::configuration::{DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_SNAPSHOT_FILE};
    use gridwright::{GridCollection, GridError, Vec3};
    use std::path::{Path, PathBuf};

    fn run(collection: &mut GridCollection, command: &GridCommand) -> CommandOutput {
        match execute(collection, command) {
            Ok(output) => output,
            Err(e) => unreachable!("command {command:?} failed: {e}"),
        }
    }

    fn add_command(columns: usize, rows: usize) -> GridCommand {
        GridCommand::Add {
            columns,
            rows,
            cell_size: 1.0,
            position: Vec3::ZERO,
        }
    }

    fn session(file: &Path, args: &[&str]) -> Vec<String> {
        let file_arg = file.to_string_lossy().to_string();
        let mut argv = vec!["gridwright", "--file", file_arg.as_str()];
        argv.extend_from_slice(args);

        let Ok(cli) = Cli::try_parse_from(argv) else {
            unreachable!("arguments {args:?} should parse");
        };
        match SessionProcessor::new(cli).process() {
            Ok(lines) => lines,
            Err(e) => unreachable!("session {args:?} failed: {e}"),
        }
    }

    #[test]
    fn test_parse_add_with_defaults() {
        let Ok(cli) = Cli::try_parse_from(["gridwright", "add"]) else {
            unreachable!("bare add should parse");
        };

        assert_eq!(cli.file, PathBuf::from(DEFAULT_SNAPSHOT_FILE));
        assert!(!cli.verbose);
        assert_eq!(
            cli.command,
            GridCommand::Add {
                columns: DEFAULT_COLUMNS,
                rows: DEFAULT_ROWS,
                cell_size: 1.0,
                position: Vec3::ZERO,
            }
        );
    }

    // Tests negative coordinates are accepted as position values
    // Verified by removing allow_hyphen_values
    #[test]
    fn test_parse_negative_position() {
        let parsed = Cli::try_parse_from([
            "gridwright",
            "move",
            "3",
            "--position",
            "-1.5,0,2",
            "--verbose",
        ]);

        let Ok(cli) = parsed else {
            unreachable!("negative position should parse");
        };
        assert!(cli.verbose);
        assert_eq!(
            cli.command,
            GridCommand::Move {
                id: 3,
                position: Vec3::new(-1.5, 0.0, 2.0),
            }
        );
    }

    #[test]
    fn test_parse_rejects_malformed_position() {
        assert!(Cli::try_parse_from(["gridwright", "add", "--position", "1,2"]).is_err());
        assert!(parse_position("1,2").is_err());
        assert_eq!(parse_position("1,2,3"), Ok(Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_parse_flags_accepts_on_off() {
        let Ok(cli) = Cli::try_parse_from(["gridwright", "flags", "0", "--cells", "off", "--grid", "on"])
        else {
            unreachable!("boolish flags should parse");
        };

        assert_eq!(
            cli.command,
            GridCommand::Flags {
                id: 0,
                grid: Some(true),
                outline: None,
                cells: Some(false),
                centers: None,
            }
        );
    }

    #[test]
    fn test_remove_requires_ids() {
        assert!(Cli::try_parse_from(["gridwright", "remove"]).is_err());
    }

    #[test]
    fn test_execute_add_list_remove() {
        let mut collection = GridCollection::new();

        let added = run(&mut collection, &add_command(3, 2));
        assert_eq!(added.lines, vec!["Added grid 0".to_string()]);
        assert!(added.modified);
        run(&mut collection, &add_command(1, 1));

        let listed = run(&mut collection, &GridCommand::List);
        assert!(!listed.modified);
        assert_eq!(listed.lines.len(), 2);
        assert!(listed.lines.first().is_some_and(|line| line.starts_with("0: 3x2 cells")));

        let removed = run(&mut collection, &GridCommand::Remove { ids: vec![0, 9] });
        assert_eq!(removed.lines, vec!["Removed 1 of 2 grid(s)".to_string()]);
        assert!(removed.modified);
        assert_eq!(collection.ids(), vec![1]);

        let missing = run(&mut collection, &GridCommand::Remove { ids: vec![9] });
        assert!(!missing.modified);
    }

    #[test]
    fn test_execute_clear_and_empty_list() {
        let mut collection = GridCollection::new();
        run(&mut collection, &add_command(2, 2));

        let cleared = run(&mut collection, &GridCommand::Clear);
        assert!(cleared.modified);
        assert!(collection.is_empty());

        let listed = run(&mut collection, &GridCommand::List);
        assert_eq!(listed.lines, vec!["No grids (next id 1)".to_string()]);
    }

    // Tests only the flags given on the command line change
    // Verified by resetting unspecified flags to false
    #[test]
    fn test_execute_flags_changes_only_given_flags() {
        let mut collection = GridCollection::new();
        run(&mut collection, &add_command(2, 2));

        let output = run(
            &mut collection,
            &GridCommand::Flags {
                id: 0,
                grid: None,
                outline: Some(false),
                cells: None,
                centers: None,
            },
        );

        assert!(output.modified);
        let Some(grid) = collection.grid(0) else {
            unreachable!("grid 0 must exist");
        };
        assert!(grid.display().show_grid);
        assert!(!grid.display().show_outline);
        assert!(grid.display().show_cell_outlines);
        assert_eq!(output.lines, vec![describe_grid(grid)]);
        assert!(describe_grid(grid).contains("outline:off"));
    }

    #[test]
    fn test_execute_on_missing_grid_fails() {
        let mut collection = GridCollection::new();

        let moved = execute(
            &mut collection,
            &GridCommand::Move {
                id: 4,
                position: Vec3::ZERO,
            },
        );
        let flagged = execute(
            &mut collection,
            &GridCommand::Flags {
                id: 4,
                grid: Some(false),
                outline: None,
                cells: None,
                centers: None,
            },
        );

        assert!(matches!(moved, Err(GridError::GridNotFound { id: 4 })));
        assert!(matches!(flagged, Err(GridError::GridNotFound { id: 4 })));
    }

    #[test]
    fn test_execute_invalid_add_fails() {
        let mut collection = GridCollection::new();

        let result = execute(&mut collection, &add_command(0, 2));

        assert!(matches!(result, Err(GridError::InvalidLayout { .. })));
        assert_eq!(collection.next_id(), 0);
    }

    #[test]
    fn test_execute_oversized_add_fails() {
        let mut collection = GridCollection::new();

        let result = execute(&mut collection, &add_command(100_000, 100_000));

        assert!(matches!(result, Err(GridError::LayoutTooLarge { .. })));
        assert!(collection.is_empty());
    }

    // Tests a session persists changes between invocations
    // Verified by skipping the save after a modifying command
    #[test]
    fn test_session_persists_between_runs() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory should be creatable");
        };
        let file = dir.path().join("scene.json");

        let first = session(&file, &["add", "--columns", "3", "--rows", "2"]);
        assert_eq!(first, vec!["Added grid 0".to_string()]);
        assert!(file.exists());

        session(&file, &["add"]);
        session(&file, &["move", "1", "--position=5,0,0"]);
        session(&file, &["remove", "0"]);

        let listed = session(&file, &["list"]);
        assert_eq!(listed.len(), 1);
        assert!(listed.first().is_some_and(|line| line.starts_with("1: 4x4 cells")));
        assert!(listed.first().is_some_and(|line| line.contains("(5, 0, 0)")));

        let again = session(&file, &["add"]);
        assert_eq!(again, vec!["Added grid 2".to_string()]);
    }

    #[test]
    fn test_session_renders_preview() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory should be creatable");
        };
        let file = dir.path().join("scene.json");
        let output = dir.path().join("preview.png");
        let output_arg = output.to_string_lossy().to_string();

        session(&file, &["add"]);
        let lines = session(&file, &["render", "--output", output_arg.as_str()]);

        assert!(output.exists());
        assert!(lines.first().is_some_and(|line| line.starts_with("Wrote preview")));
    }
}
