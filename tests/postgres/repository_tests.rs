//! Order repository behaviour against a real `PostgreSQL` database.

use super::helpers::{RepoContext, count_comments, new_comment, new_order, repo_context, utc};
use eyre::ensure;
use rstest::rstest;
use workboard::order::domain::{OrderId, OrderPatch, OrderStatus};
use workboard::order::ports::{OrderRepository, OrderRepositoryError};

#[rstest]
fn load_all_groups_comments_under_their_orders(
    repo_context: Option<RepoContext>,
) -> Result<(), eyre::Report> {
    let Some(context) = repo_context else {
        return Ok(());
    };
    let repo = &context.repo;

    let (first, second) = context.rt.block_on(async {
        let first = repo.insert(&new_order(1, "Müller")).await?;
        let second = repo.insert(&new_order(2, "Schulz")).await?;
        repo.insert_comment(second.id(), &new_comment("Parts ordered", 9))
            .await?;
        repo.insert_comment(first.id(), &new_comment("Called tenant", 10))
            .await?;
        repo.insert_comment(second.id(), &new_comment("Parts arrived", 11))
            .await?;
        Ok::<_, OrderRepositoryError>((first, second))
    })?;
    let loaded = context.rt.block_on(repo.load_all())?;

    let ids: Vec<OrderId> = loaded.iter().map(|order| order.id()).collect();
    ensure!(ids == [first.id(), second.id()], "orders load in id order: {ids:?}");
    let [loaded_first, loaded_second] = loaded.as_slice() else {
        eyre::bail!("expected two orders");
    };
    let first_texts: Vec<&str> = loaded_first.comments().iter().map(|c| c.text()).collect();
    let second_texts: Vec<&str> = loaded_second.comments().iter().map(|c| c.text()).collect();
    ensure!(first_texts == ["Called tenant"], "first order comments: {first_texts:?}");
    ensure!(
        second_texts == ["Parts ordered", "Parts arrived"],
        "second order comments: {second_texts:?}"
    );
    ensure!(loaded_first.customer() == "Müller", "customer round-trips");
    ensure!(
        loaded_first.attachments() == ["https://blob.example/site.jpg".to_owned()],
        "attachments round-trip"
    );
    ensure!(loaded_first.created_at() == utc(1, 8), "creation time round-trips");
    ensure!(
        loaded_second.comments().iter().all(|c| c.created_at() >= utc(2, 9)),
        "comment times round-trip"
    );
    Ok(())
}

#[rstest]
fn duplicate_numbers_are_rejected(repo_context: Option<RepoContext>) -> Result<(), eyre::Report> {
    let Some(context) = repo_context else {
        return Ok(());
    };

    context.rt.block_on(context.repo.insert(&new_order(7, "Müller")))?;
    let result = context.rt.block_on(context.repo.insert(&new_order(7, "Schulz")));

    ensure!(
        matches!(result, Err(OrderRepositoryError::Persistence(_))),
        "second insert with the same number must fail: {result:?}"
    );
    Ok(())
}

#[rstest]
fn empty_patch_returns_the_stored_order(
    repo_context: Option<RepoContext>,
) -> Result<(), eyre::Report> {
    let Some(context) = repo_context else {
        return Ok(());
    };
    let repo = &context.repo;

    let inserted = context.rt.block_on(repo.insert(&new_order(1, "Müller")))?;
    let comment = context
        .rt
        .block_on(repo.insert_comment(inserted.id(), &new_comment("Called tenant", 9)))?;
    let returned = context
        .rt
        .block_on(repo.update(inserted.id(), &OrderPatch::default()))?;

    ensure!(returned.customer() == inserted.customer(), "fields are unchanged");
    ensure!(returned.status() == inserted.status(), "status is unchanged");
    ensure!(returned.comments() == [comment], "stored comments are included");
    Ok(())
}

#[rstest]
fn update_persists_fields_and_clears_the_appointment(
    repo_context: Option<RepoContext>,
) -> Result<(), eyre::Report> {
    let Some(context) = repo_context else {
        return Ok(());
    };
    let repo = &context.repo;
    let inserted = context.rt.block_on(repo.insert(&new_order(1, "Müller")))?;
    let id = inserted.id();

    let scheduled = context.rt.block_on(repo.update(
        id,
        &OrderPatch {
            status: Some(OrderStatus::AppointmentScheduled),
            phone: Some("030 1234".to_owned()),
            appointment: Some(Some(utc(3, 10))),
            ..OrderPatch::default()
        },
    ))?;
    ensure!(scheduled.appointment() == Some(utc(3, 10)), "appointment is set");
    ensure!(scheduled.phone() == "030 1234", "phone is set");

    context
        .rt
        .block_on(repo.update(id, &OrderPatch::appointment(None)))?;
    let loaded = context.rt.block_on(repo.load_all())?;

    let [order] = loaded.as_slice() else {
        eyre::bail!("expected one order");
    };
    ensure!(order.appointment().is_none(), "appointment is cleared");
    ensure!(
        order.status() == OrderStatus::AppointmentScheduled,
        "untouched fields keep their values"
    );
    ensure!(order.phone() == "030 1234", "phone persists");
    ensure!(order.customer() == "Müller", "customer persists");
    Ok(())
}

#[rstest]
#[case::empty_patch(OrderPatch::default())]
#[case::status_patch(OrderPatch::status(OrderStatus::Done))]
fn update_of_unknown_order_is_not_found(
    repo_context: Option<RepoContext>,
    #[case] patch: OrderPatch,
) -> Result<(), eyre::Report> {
    let Some(context) = repo_context else {
        return Ok(());
    };
    let missing = OrderId::new(404);

    let result = context.rt.block_on(context.repo.update(missing, &patch));

    ensure!(
        matches!(result, Err(OrderRepositoryError::NotFound(id)) if id == missing),
        "unexpected result: {result:?}"
    );
    Ok(())
}

#[rstest]
fn comment_on_unknown_order_is_not_found(
    repo_context: Option<RepoContext>,
) -> Result<(), eyre::Report> {
    let Some(context) = repo_context else {
        return Ok(());
    };
    let missing = OrderId::new(404);

    let result = context
        .rt
        .block_on(context.repo.insert_comment(missing, &new_comment("Hello", 9)));

    ensure!(
        matches!(result, Err(OrderRepositoryError::NotFound(id)) if id == missing),
        "unexpected result: {result:?}"
    );
    ensure!(
        count_comments(context.cluster, &context.db_name).map_err(|err| eyre::eyre!(err))? == 0,
        "no comment row is written"
    );
    Ok(())
}

#[rstest]
fn delete_removes_the_order_and_its_comments(
    repo_context: Option<RepoContext>,
) -> Result<(), eyre::Report> {
    let Some(context) = repo_context else {
        return Ok(());
    };
    let repo = &context.repo;

    let (doomed, kept) = context.rt.block_on(async {
        let doomed = repo.insert(&new_order(1, "Müller")).await?;
        let kept = repo.insert(&new_order(2, "Schulz")).await?;
        repo.insert_comment(doomed.id(), &new_comment("First", 9))
            .await?;
        repo.insert_comment(doomed.id(), &new_comment("Second", 10))
            .await?;
        repo.insert_comment(kept.id(), &new_comment("Kept", 11))
            .await?;
        Ok::<_, OrderRepositoryError>((doomed, kept))
    })?;

    context.rt.block_on(repo.delete(doomed.id()))?;
    let loaded = context.rt.block_on(repo.load_all())?;

    let ids: Vec<OrderId> = loaded.iter().map(|order| order.id()).collect();
    ensure!(ids == [kept.id()], "only the other order remains: {ids:?}");
    let remaining =
        count_comments(context.cluster, &context.db_name).map_err(|err| eyre::eyre!(err))?;
    ensure!(remaining == 1, "comments of the deleted order are gone: {remaining}");

    let again = context.rt.block_on(repo.delete(doomed.id()));
    ensure!(
        matches!(again, Err(OrderRepositoryError::NotFound(id)) if id == doomed.id()),
        "second delete must report not found: {again:?}"
    );
    Ok(())
}
