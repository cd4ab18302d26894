use std::collections::BTreeSet;

use pdfbook_core::{Directory, Index, PdfName, PdfPredicate, Tag};
use pdfbook_engine::commands::{
    ClearCommand, DeleteCommand, EditCommand, EditPdfDescriptor, FindCommand, HistoryCommand,
    ListCommand, SelectCommand, UndoCommand,
};
use pdfbook_engine::{CatalogModel, Command, CommandError};
use pdfbook_harness::{PdfBuilder, TestCatalog};

fn tags(names: &[&str]) -> BTreeSet<Tag> {
    names.iter().map(|t| Tag::new(*t).unwrap()).collect()
}

// ============================================================================
// Delete
// ============================================================================

#[test]
fn delete_by_filtered_index() -> Result<(), Box<dyn std::error::Error>> {
    let mut catalog = TestCatalog::new()?;
    catalog.add_valid("alpha.pdf")?;
    let beta = catalog.add_valid("beta.pdf")?;
    catalog.add_valid("gamma.pdf")?;

    catalog.execute(FindCommand::new(PdfPredicate::NameContainsKeywords(vec![
        "beta".into(),
    ])))?;
    let result = catalog.execute(DeleteCommand::new(Index::from_one_based(1)?))?;

    assert_eq!(result.feedback_to_user(), format!("Deleted PDF: {beta}"));
    assert!(!catalog.logic.model().has_pdf(&beta));
    assert_eq!(catalog.size(), 2);
    Ok(())
}

#[test]
fn delete_out_of_range_index() -> Result<(), Box<dyn std::error::Error>> {
    let mut catalog = TestCatalog::new()?;
    catalog.add_valid("alpha.pdf")?;

    let err = catalog
        .execute(DeleteCommand::new(Index::from_one_based(2)?))
        .unwrap_err();
    assert!(matches!(err, CommandError::InvalidIndex));
    assert_eq!(err.to_string(), "The pdf index provided is invalid");
    assert_eq!(catalog.logic.model().history().len(), 2);
    Ok(())
}

// ============================================================================
// Edit
// ============================================================================

#[test]
fn edit_requires_a_field() {
    let result = EditCommand::new(Index::from_zero_based(0), EditPdfDescriptor::default());
    match result {
        Err(CommandError::Precondition(message)) => {
            assert_eq!(message, "At least one field to edit must be provided.");
        }
        other => panic!("expected Precondition, got {other:?}"),
    }
}

#[test]
fn edit_tags() -> Result<(), Box<dyn std::error::Error>> {
    let mut catalog = TestCatalog::new()?;
    let report = catalog.add_valid("report.pdf")?;

    let descriptor = EditPdfDescriptor {
        tags: Some(tags(&["finance", "q1"])),
        ..EditPdfDescriptor::default()
    };
    let result = catalog.execute(EditCommand::new(Index::from_one_based(1)?, descriptor)?)?;

    let edited = report.with_tags(tags(&["finance", "q1"]));
    assert_eq!(result.feedback_to_user(), format!("Edited PDF: {edited}"));
    assert_eq!(catalog.logic.model().catalog().pdfs(), &[edited]);

    catalog.execute(UndoCommand)?;
    assert_eq!(catalog.logic.model().catalog().pdfs(), &[report]);
    Ok(())
}

#[test]
fn edit_name_to_existing_record_is_duplicate() -> Result<(), Box<dyn std::error::Error>> {
    let mut catalog = TestCatalog::new()?;
    catalog.add_valid("a.pdf")?;
    catalog.add_valid("b.pdf")?;

    let descriptor = EditPdfDescriptor {
        name: Some(PdfName::new("b.pdf")?),
        ..EditPdfDescriptor::default()
    };
    let err = catalog
        .execute(EditCommand::new(Index::from_one_based(1)?, descriptor)?)
        .unwrap_err();

    assert!(matches!(err, CommandError::Duplicate));
    assert_eq!(catalog.visible_names(), vec!["a.pdf", "b.pdf"]);
    assert_eq!(catalog.logic.model().history().len(), 3);
    Ok(())
}

#[test]
fn edit_name_must_point_at_loadable_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut catalog = TestCatalog::new()?;
    catalog.add_valid("draft.pdf")?;

    let rename = |name: &str| -> Result<EditCommand, Box<dyn std::error::Error>> {
        let descriptor = EditPdfDescriptor {
            name: Some(PdfName::new(name)?),
            ..EditPdfDescriptor::default()
        };
        Ok(EditCommand::new(Index::from_one_based(1)?, descriptor)?)
    };

    let err = catalog.execute(rename("final.pdf")?).unwrap_err();
    assert!(matches!(err, CommandError::UnloadableFile { .. }));
    assert_eq!(catalog.visible_names(), vec!["draft.pdf"]);

    catalog.library.write_valid_pdf("final.pdf")?;
    catalog.execute(rename("final.pdf")?)?;
    assert_eq!(catalog.visible_names(), vec!["final.pdf"]);
    Ok(())
}

#[test]
fn edit_name_takes_size_of_new_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut catalog = TestCatalog::new()?;
    let draft = catalog.add_valid("draft.pdf")?;
    let longer = catalog.library.write_pdf_with_pages("final.pdf", 5)?;
    assert_ne!(draft.size(), longer.size());

    let descriptor = EditPdfDescriptor {
        name: Some(PdfName::new("final.pdf")?),
        ..EditPdfDescriptor::default()
    };
    catalog.execute(EditCommand::new(Index::from_one_based(1)?, descriptor)?)?;

    assert_eq!(catalog.logic.model().catalog().pdfs(), &[longer]);
    Ok(())
}

#[test]
fn edit_resets_filter() -> Result<(), Box<dyn std::error::Error>> {
    let mut catalog = TestCatalog::new()?;
    catalog.add_valid("a.pdf")?;
    catalog.add_valid("b.pdf")?;
    catalog.execute(FindCommand::new(PdfPredicate::NameContainsKeywords(vec![
        "b".into(),
    ])))?;

    let descriptor = EditPdfDescriptor {
        tags: Some(tags(&["done"])),
        ..EditPdfDescriptor::default()
    };
    catalog.execute(EditCommand::new(Index::from_one_based(1)?, descriptor)?)?;
    assert_eq!(catalog.visible_names(), vec!["a.pdf", "b.pdf"]);
    assert_eq!(catalog.logic.model().catalog().pdfs()[1].tags(), &tags(&["done"]));
    Ok(())
}

// ============================================================================
// Select / Find / List
// ============================================================================

#[test]
fn select_sets_selection() -> Result<(), Box<dyn std::error::Error>> {
    let mut catalog = TestCatalog::new()?;
    catalog.add_valid("a.pdf")?;
    let b = catalog.add_valid("b.pdf")?;
    let history_len = catalog.logic.model().history().len();

    let result = catalog.execute(SelectCommand::new(Index::from_one_based(2)?))?;
    assert_eq!(result.feedback_to_user(), "Selected PDF: 2");
    assert_eq!(catalog.logic.selected_pdf(), Some(&b));

    // Selection is not a catalog mutation
    assert_eq!(catalog.logic.model().history().len(), history_len);

    let err = catalog
        .execute(SelectCommand::new(Index::from_one_based(3)?))
        .unwrap_err();
    assert!(matches!(err, CommandError::InvalidIndex));
    assert_eq!(catalog.logic.selected_pdf(), Some(&b));
    Ok(())
}

#[test]
fn find_by_tags_and_directory_then_list() -> Result<(), Box<dyn std::error::Error>> {
    let mut catalog = TestCatalog::new()?;
    catalog.add_valid("a.pdf")?;
    catalog.add_valid("b.pdf")?;

    let descriptor = EditPdfDescriptor {
        tags: Some(tags(&["work"])),
        ..EditPdfDescriptor::default()
    };
    catalog.execute(EditCommand::new(Index::from_one_based(2)?, descriptor)?)?;

    let result = catalog.execute(FindCommand::new(PdfPredicate::HasAllTags(tags(&["work"]))))?;
    assert_eq!(result.feedback_to_user(), "1 pdfs listed!");
    assert_eq!(catalog.visible_names(), vec!["b.pdf"]);

    let elsewhere = Directory::new("/nowhere")?;
    let result = catalog.execute(FindCommand::new(PdfPredicate::InDirectory(elsewhere)))?;
    assert_eq!(result.feedback_to_user(), "0 pdfs listed!");
    assert!(catalog.visible_names().is_empty());

    let result = catalog.execute(ListCommand)?;
    assert_eq!(result.feedback_to_user(), "Listed all pdfs");
    assert_eq!(catalog.visible_names(), vec!["a.pdf", "b.pdf"]);
    Ok(())
}

// ============================================================================
// Clear / History
// ============================================================================

#[test]
fn clear_empties_catalog() -> Result<(), Box<dyn std::error::Error>> {
    let mut catalog = TestCatalog::new()?;
    catalog.add_valid("a.pdf")?;
    catalog.add_valid("b.pdf")?;

    let result = catalog.execute(ClearCommand)?;
    assert_eq!(result.feedback_to_user(), "Catalog has been cleared!");
    assert_eq!(catalog.size(), 0);
    assert!(catalog.logic.model().can_undo());
    Ok(())
}

#[test]
fn history_lists_entered_commands() -> Result<(), Box<dyn std::error::Error>> {
    let mut catalog = TestCatalog::new()?;

    let result = catalog.execute(HistoryCommand)?;
    assert_eq!(result.feedback_to_user(), "You have not yet entered any commands.");

    catalog.execute(ListCommand)?;
    // Failed commands are recorded too
    let _ = catalog.execute(UndoCommand);

    let result = catalog.execute(HistoryCommand)?;
    assert_eq!(
        result.feedback_to_user(),
        "Entered commands (from most recent to earliest):\nundo\nlist\nhistory"
    );
    assert_eq!(
        catalog.logic.command_history().entries(),
        &["history", "list", "undo", "history"]
    );
    Ok(())
}

#[test]
fn command_text_forms() -> Result<(), Box<dyn std::error::Error>> {
    let pdf = PdfBuilder::new().with_directory("/d").build();
    let cases: Vec<(Command, &str)> = vec![
        (pdfbook_engine::commands::AddCommand::new(pdf).into(), "add /d/report.pdf"),
        (DeleteCommand::new(Index::from_one_based(2)?).into(), "delete 2"),
        (SelectCommand::new(Index::from_one_based(1)?).into(), "select 1"),
        (
            EditCommand::new(
                Index::from_one_based(3)?,
                EditPdfDescriptor {
                    name: Some(PdfName::new("new.pdf")?),
                    tags: Some(tags(&["a", "b"])),
                },
            )?
            .into(),
            "edit 3 name/new.pdf tags/[a][b]",
        ),
        (
            FindCommand::new(PdfPredicate::NameContainsKeywords(vec!["x".into(), "y".into()]))
                .into(),
            "find name x y",
        ),
        (ListCommand.into(), "list"),
        (ClearCommand.into(), "clear"),
        (UndoCommand.into(), "undo"),
        (HistoryCommand.into(), "history"),
    ];
    for (command, text) in cases {
        assert_eq!(command.to_string(), text);
    }
    Ok(())
}
