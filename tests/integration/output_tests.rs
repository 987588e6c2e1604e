use super::common::{write, SharedBuffer};
use prefixdupe::cli::OutputFormat;
use prefixdupe::config::Config;
use prefixdupe::error::ExitCode;
use prefixdupe::run_scan;
use tempfile::tempdir;

fn config(folder: &std::path::Path, output: OutputFormat) -> Config {
    Config {
        folder: folder.to_path_buf(),
        output,
        sort_entries: true,
        color: false,
        ..Config::default()
    }
}

#[test]
fn test_text_report_with_groups() {
    let dir = tempdir().unwrap();
    write(dir.path(), "output1.txt", b"abc");
    write(dir.path(), "output2.txt", b"abc");
    write(dir.path(), "output3.txt", b"xyz");
    write(dir.path(), "notes.txt", b"abc");
    let buffer = SharedBuffer::default();

    let code = run_scan(&config(dir.path(), OutputFormat::Text), buffer.clone()).unwrap();

    assert_eq!(code, ExitCode::Success);
    let text = buffer.contents();
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("Scanning folder: '"));
    assert_eq!(lines[1], "Looking for files whose names start with 'output'...");
    assert_eq!(lines[2], "");
    assert_eq!(
        &lines[3..6],
        &[
            "Examining file: output1.txt",
            "Examining file: output2.txt",
            "Examining file: output3.txt",
        ]
    );
    assert!(!text.contains("notes.txt"));
    assert!(text.contains(
        "Result: found 1 group(s) of files with identical content (names starting with 'output')."
    ));
    assert!(text.contains("--- Group 1 (identical content) ---\n"));
    assert!(text.contains(&format!("  - {}\n", dir.path().join("output1.txt").display())));
    assert!(text.contains(&format!("  - {}\n", dir.path().join("output2.txt").display())));
    assert!(text.ends_with("-------------\n"));
}

#[test]
fn test_text_report_without_groups() {
    let dir = tempdir().unwrap();
    write(dir.path(), "output_only", b"alone");
    let buffer = SharedBuffer::default();

    run_scan(&config(dir.path(), OutputFormat::Text), buffer.clone()).unwrap();

    assert!(buffer.contents().ends_with(
        "Result: all files starting with 'output' in this folder have distinct content (or only one such file exists).\n"
    ));
}

#[test]
fn test_text_report_invalid_directory() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing");
    let buffer = SharedBuffer::default();

    let code = run_scan(&config(&missing, OutputFormat::Text), buffer.clone()).unwrap();

    assert_eq!(code, ExitCode::Success);
    let text = buffer.contents();
    let error_line = format!(
        "Error: the path '{}' is not a valid folder.\n",
        missing.display()
    );
    let result_line = "Result: all files starting with 'output' in this folder have distinct content (or only one such file exists).\n";
    assert!(text.contains(&error_line));
    assert!(text.ends_with(&format!("{error_line}{result_line}")));
    assert!(!text.contains("Examining file"));
}

#[test]
fn test_json_report() {
    let dir = tempdir().unwrap();
    write(dir.path(), "output_a.bin", &[0u8; 10]);
    write(dir.path(), "output_b.bin", &[0u8; 10]);
    std::fs::create_dir(dir.path().join("output_dir")).unwrap();
    let buffer = SharedBuffer::default();

    run_scan(&config(dir.path(), OutputFormat::Json), buffer.clone()).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
    let duplicates = parsed["duplicates"].as_array().unwrap();
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0]["size"], 10);
    assert_eq!(duplicates[0]["files"].as_array().unwrap().len(), 2);
    assert_eq!(duplicates[0]["hash"].as_str().unwrap().len(), 64);
    assert_eq!(parsed["summary"]["entries_examined"], 3);
    assert_eq!(parsed["summary"]["files_hashed"], 2);
    assert_eq!(parsed["summary"]["status"], "ok");
}

#[test]
fn test_json_report_invalid_directory() {
    let dir = tempdir().unwrap();
    let buffer = SharedBuffer::default();

    run_scan(
        &config(&dir.path().join("missing"), OutputFormat::Json),
        buffer.clone(),
    )
    .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
    assert!(parsed["duplicates"].as_array().unwrap().is_empty());
    assert_eq!(parsed["summary"]["status"], "invalid_directory");
}

#[test]
fn test_csv_report() {
    let dir = tempdir().unwrap();
    write(dir.path(), "output_x", b"same");
    write(dir.path(), "output_y", b"same");
    let buffer = SharedBuffer::default();

    run_scan(&config(dir.path(), OutputFormat::Csv), buffer.clone()).unwrap();

    let csv = buffer.contents();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "group_id,hash,path,size");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("1,"));
    assert!(lines[2].ends_with(",4"));
}
