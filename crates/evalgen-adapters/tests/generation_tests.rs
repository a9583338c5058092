//! Generation through the in-memory adapters.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use evalgen_adapters::{LocalFilesystem, MemoryFilesystem, MemorySheetWriter, TextSheetWriter};
use evalgen_core::{domain::SheetKind, prelude::*};

fn smith() -> CourseRecord {
    CourseForm::new(Semester::Fall)
        .instructor("John", "Smith")
        .course("cst", "123", "wn123")
        .year("2014")
        .support("Jane Doe", "4021", "B12")
        .into()
}

fn options() -> GenerationOptions {
    GenerationOptions {
        overwrite: false,
        request_date: NaiveDate::from_ymd_opt(2014, 9, 29).unwrap(),
    }
}

fn paths(root: &Path) -> SheetPaths {
    SheetPaths {
        questions_file: root.join("evalQuestions.txt"),
        oit_sheet: root.join("out").join("OITScanSheet.docx"),
    }
}

#[test]
fn memory_adapters_capture_every_artifact() {
    let fs = MemoryFilesystem::new()
        .with_file("/conf/evalQuestions.txt", "Strengths?\nWeaknesses?\n")
        .with_file("/sheets/classes.csv", "header\n");
    let writer = MemorySheetWriter::new();
    let service = GenerationService::new(
        Arc::new(fs.clone()),
        Box::new(writer.clone()),
        paths(Path::new("/conf")),
    );

    let request = GenerationRequest::builder()
        .comment_sheet(Some("/out"))
        .oit_sheet()
        .existing_spreadsheet(Some("/sheets/classes.csv"))
        .build();
    service.generate(&smith(), &request, options()).unwrap();

    let (path, sheet) = writer.last_of(SheetKind::CommentSheet).unwrap();
    assert_eq!(
        path,
        PathBuf::from("/out/Smith_John CST 123-WN123 Fall 2014.docx")
    );
    // Header table plus one per question.
    assert_eq!(sheet.tables.len(), 3);
    assert!(writer.last_of(SheetKind::OitScanSheet).is_some());

    let csv = fs.read_file(Path::new("/sheets/classes.csv")).unwrap();
    assert!(csv.ends_with("Smith,John,CST,123,WN123,Fall,2014,Jane Doe,4021,B12\n"));
}

#[test]
fn missing_spreadsheet_leaves_nothing_behind() {
    let fs = MemoryFilesystem::new().with_file("/conf/evalQuestions.txt", "Strengths?\n");
    let writer = MemorySheetWriter::new();
    let service = GenerationService::new(
        Arc::new(fs.clone()),
        Box::new(writer.clone()),
        paths(Path::new("/conf")),
    );

    let request = GenerationRequest::builder()
        .comment_sheet(Some("/out"))
        .oit_sheet()
        .existing_spreadsheet(Some("/sheets/missing.csv"))
        .build();
    let err = service.generate(&smith(), &request, options()).unwrap_err();

    assert!(err.to_string().contains("Spreadsheet not found"));
    assert!(writer.written().is_empty());
    assert_eq!(fs.list_files(), [PathBuf::from("/conf/evalQuestions.txt")]);
}

#[test]
fn local_adapters_write_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("evalQuestions.txt"), "Strengths?\n").unwrap();

    let service = GenerationService::new(
        Arc::new(LocalFilesystem::new()),
        Box::new(TextSheetWriter::new()),
        paths(dir.path()),
    );

    let save_dir = dir.path().join("evals");
    let request = GenerationRequest::builder()
        .comment_sheet(Some(&save_dir))
        .new_spreadsheet(Some(dir.path()), "fall")
        .build();
    let report = service.generate(&smith(), &request, options()).unwrap();

    assert_eq!(report.written.len(), 2);
    let sheet = save_dir.join("Smith_John CST 123-WN123 Fall 2014.txt");
    assert!(sheet.exists());
    assert!(std::fs::read_to_string(sheet).unwrap().contains("Strengths?"));

    let csv = std::fs::read_to_string(dir.path().join("fall.csv")).unwrap();
    assert_eq!(csv.lines().count(), 2);

    // Running again refuses to replace the comment sheet.
    let again = GenerationRequest::builder()
        .comment_sheet(Some(&save_dir))
        .build();
    let err = service.generate(&smith(), &again, options()).unwrap_err();
    assert!(err.to_string().contains("already exists"));
}
