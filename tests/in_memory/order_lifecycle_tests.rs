//! In-memory integration tests for the order lifecycle.

use std::sync::Arc;

use super::helpers::{Board, board, board_over, create_order};
use eyre::ensure;
use rstest::rstest;
use workboard::order::domain::{Importance, OrderStatus};
use workboard::workspace::OrderField;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_order_starts_open_with_next_number(board: Board) -> Result<(), eyre::Report> {
    let Board { mut workspace, .. } = board;
    create_order(&mut workspace, &[(OrderField::Customer, "Schulz")]).await?;

    let created = create_order(
        &mut workspace,
        &[
            (OrderField::Customer, "Müller"),
            (OrderField::Address, "Hauptstr. 1"),
            (OrderField::Problem, "Leak"),
        ],
    )
    .await?;

    ensure!(created.status() == OrderStatus::Open, "new order must be open");
    ensure!(created.importance() == Importance::Normal, "importance must default to normal");
    ensure!(created.number().to_string() == "0002", "unexpected number {}", created.number());
    ensure!(created.comments().is_empty(), "new order has no comments");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_numbers_are_not_reused(board: Board) -> Result<(), eyre::Report> {
    let Board { mut workspace, .. } = board;
    let mut created = Vec::new();
    for customer in ["A", "B", "C", "D", "E"] {
        created.push(create_order(&mut workspace, &[(OrderField::Customer, customer)]).await?);
    }
    let fifth = created
        .last()
        .ok_or_else(|| eyre::eyre!("five orders expected"))?;
    let max_before = fifth.number();

    workspace.delete_order(fifth.id()).await?;
    let next = create_order(&mut workspace, &[(OrderField::Customer, "F")]).await?;

    ensure!(next.number() > max_before, "numbers must keep increasing");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reload_continues_numbering_and_keeps_comments(board: Board) -> Result<(), eyre::Report> {
    let Board {
        repository,
        mut workspace,
        ..
    } = board;
    let first = create_order(&mut workspace, &[(OrderField::Customer, "Müller")]).await?;
    workspace
        .add_comment(first.id(), "Anna", "Called tenant")
        .await?;

    let mut reopened = board_over(Arc::clone(&repository));
    let loaded = reopened.workspace.load().await?;
    let second =
        create_order(&mut reopened.workspace, &[(OrderField::Customer, "Schulz")]).await?;

    ensure!(loaded == 1, "expected one persisted order, found {loaded}");
    ensure!(second.number().to_string() == "0002", "numbering must continue");
    let comments = reopened
        .workspace
        .store()
        .get(first.id())
        .map(|order| order.comments().len());
    ensure!(comments == Some(1), "comment must survive reload");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn two_file_batch_with_one_failure_keeps_the_other(
    board: Board,
) -> Result<(), eyre::Report> {
    let Board {
        blobs,
        mut workspace,
        ..
    } = board;
    blobs.fail_path("orders/b.pdf")?;
    workspace.open_create_dialog();

    workspace
        .attach_files(&[
            workboard::order::services::AttachmentFile::new("a.pdf", b"A".to_vec()),
            workboard::order::services::AttachmentFile::new("b.pdf", b"B".to_vec()),
        ])
        .await?;
    let created = workspace.submit_editor().await?;

    ensure!(
        created.attachments() == ["https://blob.example/orders/a.pdf"],
        "unexpected attachments {:?}",
        created.attachments()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_comments_leave_the_log_unchanged(board: Board) -> Result<(), eyre::Report> {
    let Board { mut workspace, .. } = board;
    let created = create_order(&mut workspace, &[(OrderField::Customer, "Müller")]).await?;

    for (author, text) in [("", "text"), ("Anna", "   "), (" ", "")] {
        let added = workspace.add_comment(created.id(), author, text).await?;
        ensure!(added.is_none(), "blank comment must be ignored");
    }

    let count = workspace
        .store()
        .get(created.id())
        .map(|order| order.comments().len());
    ensure!(count == Some(0), "comment log must stay empty");
    Ok(())
}
