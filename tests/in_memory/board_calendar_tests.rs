//! In-memory integration tests for board moves and the calendar.

use super::helpers::{Board, board, create_order};
use chrono::{NaiveDate, TimeZone, Utc};
use eyre::ensure;
use rstest::rstest;
use workboard::order::{
    domain::OrderStatus,
    services::{CalendarView, calendar::events_in_view},
};
use workboard::workspace::OrderField;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dragged_order_shows_in_exactly_one_column(board: Board) -> Result<(), eyre::Report> {
    let Board { mut workspace, .. } = board;
    let created = create_order(&mut workspace, &[(OrderField::Customer, "Müller")]).await?;

    for label in ["Done", "Revisit", "in-progress", "Invoiced"] {
        let expected = OrderStatus::try_from(label)?;
        workspace.drop_on_column(created.id(), label).await?;
        let holding: Vec<OrderStatus> = workspace
            .board()
            .iter()
            .filter(|column| column.orders.iter().any(|order| order.id() == created.id()))
            .map(|column| column.status)
            .collect();
        ensure!(
            holding == [expected],
            "order must sit only in {expected}, found {holding:?}"
        );
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn appointment_on_third_order_shows_in_june(board: Board) -> Result<(), eyre::Report> {
    let Board { mut workspace, .. } = board;
    let mut last_created = None;
    for customer in ["A", "B", "C"] {
        last_created =
            Some(create_order(&mut workspace, &[(OrderField::Customer, customer)]).await?);
    }
    let third = last_created.ok_or_else(|| eyre::eyre!("third order expected"))?;
    let slot = Utc
        .with_ymd_and_hms(2024, 6, 1, 10, 0, 0)
        .single()
        .ok_or_else(|| eyre::eyre!("valid timestamp"))?;

    workspace.set_appointment(third.id(), Some(slot)).await?;
    let june = CalendarView::starting_at(
        NaiveDate::from_ymd_opt(2024, 6, 15).ok_or_else(|| eyre::eyre!("valid date"))?,
    );
    let events = events_in_view(workspace.store().orders(), &june);

    ensure!(events.len() == 1, "expected one event, found {}", events.len());
    let event = events
        .first()
        .ok_or_else(|| eyre::eyre!("event expected"))?;
    ensure!(event.order_id == third.id(), "event bound to wrong order");
    ensure!(event.label == "Order 0003: 10:00", "unexpected label {}", event.label);
    ensure!(event.start == slot, "event starts at the appointment");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cleared_appointment_leaves_the_calendar(board: Board) -> Result<(), eyre::Report> {
    let Board { mut workspace, .. } = board;
    let created = create_order(&mut workspace, &[(OrderField::Customer, "Müller")]).await?;

    workspace.set_appointment(created.id(), Some(Utc::now())).await?;
    ensure!(workspace.calendar_events().len() == 1, "event expected");

    workspace.set_appointment(created.id(), None).await?;
    ensure!(workspace.calendar_events().is_empty(), "event must be gone");
    Ok(())
}
