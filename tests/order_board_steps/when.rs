//! When steps for work order board scenarios.

use super::{
    given::create_for,
    world::{BoardWorld, run_async},
};
use chrono::{DateTime, Utc};
use eyre::{WrapErr, eyre};
use rstest_bdd_macros::when;
use workboard::order::{domain::OrderNumber, services::AttachmentFile};
use workboard::workspace::OrderField;

#[when("an order for customer \"{customer}\" at \"{address}\" with problem \"{problem}\" is created")]
fn create_detailed_order(
    world: &mut BoardWorld,
    customer: String,
    address: String,
    problem: String,
) -> Result<(), eyre::Report> {
    world.workspace.open_create_dialog();
    let editor = world
        .workspace
        .editor_mut()
        .ok_or_else(|| eyre!("editor should open"))?;
    editor.set_field(OrderField::Customer, customer);
    editor.set_field(OrderField::Address, address);
    editor.set_field(OrderField::Problem, problem);
    let order = run_async(world.workspace.submit_editor()).wrap_err("submit new order")?;
    world.remember(order);
    Ok(())
}

#[when("a new order is created for \"{customer}\"")]
fn create_simple_order(world: &mut BoardWorld, customer: String) -> Result<(), eyre::Report> {
    create_for(world, &customer)
}

#[when("the order is dropped on the \"{column}\" column")]
fn drop_on_column(world: &mut BoardWorld, column: String) -> Result<(), eyre::Report> {
    let order_id = world.current()?.id();
    let moved = run_async(world.workspace.drop_on_column(order_id, &column))
        .wrap_err("drop order on column")?;
    world.current = Some(moved);
    Ok(())
}

#[when("the last order is deleted")]
fn delete_last_order(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let last = world
        .created
        .pop()
        .ok_or_else(|| eyre!("no orders were created"))?;
    run_async(world.workspace.delete_order(last.id())).wrap_err("delete order")?;
    world.current = world.created.last().cloned();
    Ok(())
}

#[when("\"{author}\" comments \"{text}\" on the order")]
fn comment_on_order(
    world: &mut BoardWorld,
    author: String,
    text: String,
) -> Result<(), eyre::Report> {
    let order_id = world.current()?.id();
    run_async(world.workspace.add_comment(order_id, &author, &text)).wrap_err("add comment")?;
    world.current = world.workspace.store().get(order_id).cloned();
    Ok(())
}

#[when("the appointment of order \"{number}\" is set to \"{timestamp}\"")]
fn set_appointment(
    world: &mut BoardWorld,
    number: String,
    timestamp: String,
) -> Result<(), eyre::Report> {
    let wanted = OrderNumber::try_from(number.as_str())?;
    let appointment: DateTime<Utc> = timestamp.parse().wrap_err("parse appointment")?;
    let order_id = world
        .workspace
        .store()
        .orders()
        .iter()
        .find(|order| order.number() == wanted)
        .map(|order| order.id())
        .ok_or_else(|| eyre!("no order numbered {wanted}"))?;
    let updated = run_async(world.workspace.set_appointment(order_id, Some(appointment)))
        .wrap_err("set appointment")?;
    world.current = Some(updated);
    Ok(())
}

#[when("files \"{first}\" and \"{second}\" are attached to a new order")]
fn attach_to_new_order(
    world: &mut BoardWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    world.workspace.open_create_dialog();
    let files = [
        AttachmentFile::new(first, b"first".to_vec()),
        AttachmentFile::new(second, b"second".to_vec()),
    ];
    run_async(world.workspace.attach_files(&files)).wrap_err("attach files")?;
    world
        .workspace
        .editor_mut()
        .ok_or_else(|| eyre!("editor should stay open"))?
        .set_field(OrderField::Customer, "Upload customer");
    let order = run_async(world.workspace.submit_editor()).wrap_err("submit new order")?;
    world.remember(order);
    Ok(())
}
