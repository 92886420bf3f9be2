//! Given steps for work order board scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use workboard::workspace::OrderField;

#[given("an empty order board")]
fn empty_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let loaded = run_async(world.workspace.load()).wrap_err("load orders")?;
    eyre::ensure!(loaded == 0, "expected an empty board, found {loaded} orders");
    Ok(())
}

#[given("an order for \"{customer}\" exists")]
fn order_exists(world: &mut BoardWorld, customer: String) -> Result<(), eyre::Report> {
    create_for(world, &customer)
}

#[given("{count:u64} orders exist")]
fn orders_exist(world: &mut BoardWorld, count: u64) -> Result<(), eyre::Report> {
    for index in 1..=count {
        create_for(world, &format!("Customer {index}"))?;
    }
    Ok(())
}

#[given("uploads of \"{name}\" fail")]
fn uploads_fail(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    let prefix = world.workspace.config().upload_prefix().to_owned();
    world
        .blobs
        .fail_path(format!("{prefix}/{name}"))
        .wrap_err("inject upload failure")?;
    Ok(())
}

/// Creates an order through the editor and makes it the current one.
pub(super) fn create_for(world: &mut BoardWorld, customer: &str) -> Result<(), eyre::Report> {
    world.workspace.open_create_dialog();
    world
        .workspace
        .editor_mut()
        .ok_or_else(|| eyre::eyre!("editor should open"))?
        .set_field(OrderField::Customer, customer);
    let order = run_async(world.workspace.submit_editor()).wrap_err("submit new order")?;
    world.remember(order);
    Ok(())
}
