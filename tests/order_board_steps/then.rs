//! Then steps for work order board scenarios.

use super::world::BoardWorld;
use chrono::NaiveDate;
use eyre::{WrapErr, ensure};
use rstest_bdd_macros::then;
use workboard::order::{
    domain::{Importance, OrderNumber, OrderStatus},
    services::{CalendarView, calendar::events_in_view},
};

#[then("the order is in the \"{column}\" column")]
fn order_in_column(world: &mut BoardWorld, column: String) -> Result<(), eyre::Report> {
    let expected = OrderStatus::try_from(column.as_str())?;
    let order_id = world.current()?.id();
    let holding: Vec<OrderStatus> = world
        .workspace
        .board()
        .iter()
        .filter(|board_column| board_column.orders.iter().any(|order| order.id() == order_id))
        .map(|board_column| board_column.status)
        .collect();
    ensure!(
        holding == [expected],
        "expected order only in {expected}, found in {holding:?}"
    );
    Ok(())
}

#[then("the order has number \"{number}\" and normal importance")]
fn order_number_and_importance(
    world: &mut BoardWorld,
    number: String,
) -> Result<(), eyre::Report> {
    let order = world.current()?;
    ensure!(
        order.number().to_string() == number,
        "expected number {number}, got {}",
        order.number()
    );
    ensure!(
        order.importance() == Importance::Normal,
        "expected normal importance, got {}",
        order.importance()
    );
    Ok(())
}

#[then("the order has no comments")]
fn order_without_comments(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let order_id = world.current()?.id();
    let stored = world
        .workspace
        .store()
        .get(order_id)
        .ok_or_else(|| eyre::eyre!("order {order_id} missing from store"))?;
    ensure!(
        stored.comments().is_empty(),
        "expected no comments, got {}",
        stored.comments().len()
    );
    Ok(())
}

#[then("the new order number is greater than \"{number}\"")]
fn number_greater_than(world: &mut BoardWorld, number: String) -> Result<(), eyre::Report> {
    let floor = OrderNumber::try_from(number.as_str())?;
    let newest = world.current()?.number();
    ensure!(newest > floor, "expected a number above {floor}, got {newest}");
    Ok(())
}

#[then("the calendar for the month of \"{date}\" shows one event labelled \"{label}\"")]
fn calendar_shows_event(
    world: &mut BoardWorld,
    date: String,
    label: String,
) -> Result<(), eyre::Report> {
    let day: NaiveDate = date.parse().wrap_err("parse calendar date")?;
    let view = CalendarView::starting_at(day);
    let events = events_in_view(world.workspace.store().orders(), &view);
    let labels: Vec<&str> = events.iter().map(|event| event.label.as_str()).collect();
    ensure!(labels == [label.as_str()], "expected [{label}], got {labels:?}");
    Ok(())
}

#[then("the new order lists only \"{url}\"")]
fn new_order_lists_only(world: &mut BoardWorld, url: String) -> Result<(), eyre::Report> {
    let attachments = world.current()?.attachments();
    ensure!(
        attachments == [url.as_str()],
        "expected attachments [{url}], got {attachments:?}"
    );
    Ok(())
}
