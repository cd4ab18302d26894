use pdfbook_core::Pdf;
use pdfbook_engine::commands::AddCommand;
use pdfbook_engine::{CatalogModel, CommandError, LoadError};
use pdfbook_harness::{ModelStub, PdfBuilder, StubLoader, TestCatalog, init_test_logging};

// ============================================================================
// Against model stubs
// ============================================================================

#[test]
fn constructor_absent_pdf_is_rejected() {
    let result = AddCommand::try_from(None::<Pdf>);
    match result {
        Err(CommandError::Precondition(message)) => {
            assert_eq!(message, "A pdf must be provided to add");
        }
        other => panic!("expected Precondition, got {other:?}"),
    }

    let pdf = PdfBuilder::new().build();
    let cmd = AddCommand::try_from(Some(pdf.clone())).unwrap();
    assert_eq!(cmd.pdf(), &pdf);
}

#[test]
fn execute_pdf_accepted_by_model_add_successful() -> Result<(), Box<dyn std::error::Error>> {
    let mut model = ModelStub::accepting_adds();
    let loader = StubLoader::accepting();
    let valid_pdf = PdfBuilder::new().build();

    let result = AddCommand::new(valid_pdf.clone()).execute(&mut model, &loader)?;

    assert_eq!(
        result.feedback_to_user(),
        format!("New PDF added: {valid_pdf}")
    );
    assert_eq!(model.pdfs_added, vec![valid_pdf.clone()]);
    assert_eq!(model.commits, 1);
    assert_eq!(loader.opened(), vec![valid_pdf.path()]);
    Ok(())
}

#[test]
fn execute_duplicate_pdf_fails_before_loading() {
    let valid_pdf = PdfBuilder::new().build();
    let mut model = ModelStub::with_pdf(valid_pdf.clone());
    let loader = StubLoader::accepting();

    // Same identity, different attributes: still a duplicate
    let resized = PdfBuilder::from_pdf(&valid_pdf)
        .with_size(1)
        .with_tags(&["draft"])
        .build();
    let err = AddCommand::new(resized).execute(&mut model, &loader).unwrap_err();

    assert!(matches!(err, CommandError::Duplicate));
    assert_eq!(err.to_string(), "This document already exists in the catalog");
    assert!(loader.opened().is_empty());
}

#[test]
fn execute_unloadable_file_does_not_touch_model() {
    // with_pdf panics on add_pdf/commit, so reaching them would fail the test
    let mut model = ModelStub::with_pdf(PdfBuilder::new().with_name("other.pdf").build());
    let loader = StubLoader::rejecting();
    let pdf = PdfBuilder::new().build();

    let err = AddCommand::new(pdf.clone()).execute(&mut model, &loader).unwrap_err();

    match &err {
        CommandError::UnloadableFile { path, source } => {
            assert_eq!(path, &pdf.path());
            assert!(matches!(source, LoadError::Malformed(_)));
        }
        other => panic!("expected UnloadableFile, got {other:?}"),
    }
    assert_eq!(err.to_string(), "Selected file is corrupted and cannot be loaded");
    assert!(model.pdfs_added.is_empty());
}

#[test]
fn equals() {
    let alice = PdfBuilder::new().with_name("Alice.pdf").build();
    let bob = PdfBuilder::new().with_name("Bob.pdf").build();
    let add_alice = AddCommand::new(alice.clone());
    let add_bob = AddCommand::new(bob);

    // same object -> equal
    assert_eq!(add_alice, add_alice);

    // same values -> equal
    assert_eq!(add_alice, AddCommand::new(alice.clone()));

    // different pdf -> not equal
    assert_ne!(add_alice, add_bob);

    // same identity but different attributes -> not equal
    let tagged_alice = PdfBuilder::from_pdf(&alice).with_tags(&["x"]).build();
    assert_ne!(add_alice, AddCommand::new(tagged_alice));
}

#[test]
fn display_is_command_text() {
    let pdf = PdfBuilder::new()
        .with_directory("/home/me/docs")
        .with_name("report.pdf")
        .build();
    assert_eq!(AddCommand::new(pdf).to_string(), "add /home/me/docs/report.pdf");
}

// ============================================================================
// Against the real catalog
// ============================================================================

#[test]
fn add_undo_redo_scenario() -> Result<(), Box<dyn std::error::Error>> {
    init_test_logging();
    let mut catalog = TestCatalog::new()?;
    assert_eq!(catalog.size(), 0);

    let report = catalog.library.write_valid_pdf("report.pdf")?;
    let result = catalog.execute(AddCommand::new(report.clone()))?;
    assert_eq!(result.feedback_to_user(), format!("New PDF added: {report}"));
    assert_eq!(catalog.size(), 1);

    let err = catalog.execute(AddCommand::new(report.clone())).unwrap_err();
    assert_eq!(err.to_string(), "This document already exists in the catalog");
    assert_eq!(catalog.size(), 1);

    catalog.execute(pdfbook_engine::commands::UndoCommand)?;
    assert_eq!(catalog.size(), 0);

    catalog.execute(pdfbook_engine::commands::RedoCommand)?;
    assert_eq!(catalog.size(), 1);
    assert!(catalog.logic.model().has_pdf(&report));
    Ok(())
}

#[test]
fn add_corrupt_file_leaves_catalog_unchanged() -> Result<(), Box<dyn std::error::Error>> {
    init_test_logging();
    let mut catalog = TestCatalog::new()?;
    let corrupt = catalog.library.write_corrupt_pdf("broken.pdf")?;

    let err = catalog.execute(AddCommand::new(corrupt)).unwrap_err();
    assert!(matches!(
        err,
        CommandError::UnloadableFile {
            source: LoadError::Malformed(_),
            ..
        }
    ));
    assert_eq!(catalog.size(), 0);
    assert_eq!(catalog.logic.model().history().len(), 1);
    assert!(!catalog.logic.model().can_undo());
    Ok(())
}

#[test]
fn add_missing_file_leaves_catalog_unchanged() -> Result<(), Box<dyn std::error::Error>> {
    let mut catalog = TestCatalog::new()?;
    catalog.add_valid("kept.pdf")?;
    let missing = catalog.library.missing_pdf("ghost.pdf")?;

    let err = catalog.execute(AddCommand::new(missing)).unwrap_err();
    assert!(matches!(
        err,
        CommandError::UnloadableFile {
            source: LoadError::Io(_),
            ..
        }
    ));
    assert_eq!(catalog.visible_names(), vec!["kept.pdf"]);
    assert_eq!(catalog.logic.model().history().len(), 2);
    Ok(())
}

#[test]
fn add_grows_history_by_exactly_one() -> Result<(), Box<dyn std::error::Error>> {
    let mut catalog = TestCatalog::new()?;
    for (i, name) in ["a.pdf", "b.pdf", "c.pdf", "d.pdf"].iter().enumerate() {
        let pdf = catalog.add_valid(name)?;
        assert!(catalog.logic.model().has_pdf(&pdf));
        assert_eq!(catalog.logic.model().history().len(), i + 2);
    }
    Ok(())
}
