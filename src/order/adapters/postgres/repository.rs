//! `PostgreSQL` repository implementation for order storage.

use super::{
    models::{CommentRow, NewCommentRow, NewOrderRow, OrderChangeset, OrderRow},
    schema::{comments, orders},
};
use crate::order::{
    domain::{
        Comment, CommentId, Importance, NewComment, NewOrder, Order, OrderDraft, OrderId,
        OrderNumber, OrderPatch, OrderStatus, PersistedOrderData,
    },
    ports::{OrderRepository, OrderRepositoryError, OrderRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::collections::HashMap;

/// `PostgreSQL` connection pool type used by order adapters.
pub type OrderPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed order repository.
#[derive(Debug, Clone)]
pub struct PostgresOrderRepository {
    pool: OrderPgPool,
}

impl PostgresOrderRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: OrderPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> OrderRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> OrderRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(OrderRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(OrderRepositoryError::persistence)?
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn load_all(&self) -> OrderRepositoryResult<Vec<Order>> {
        self.run_blocking(|connection| {
            let order_rows = orders::table
                .order(orders::id.asc())
                .select(OrderRow::as_select())
                .load::<OrderRow>(connection)
                .map_err(OrderRepositoryError::persistence)?;
            let comment_rows = comments::table
                .order(comments::id.asc())
                .select(CommentRow::as_select())
                .load::<CommentRow>(connection)
                .map_err(OrderRepositoryError::persistence)?;

            let mut comments_by_order: HashMap<i64, Vec<Comment>> = HashMap::new();
            for row in comment_rows {
                let order_id = row.order_id;
                comments_by_order
                    .entry(order_id)
                    .or_default()
                    .push(row_to_comment(row)?);
            }

            order_rows
                .into_iter()
                .map(|row| {
                    let order_comments = comments_by_order.remove(&row.id).unwrap_or_default();
                    row_to_order(row, order_comments)
                })
                .collect()
        })
        .await
    }

    async fn insert(&self, order: &NewOrder) -> OrderRepositoryResult<Order> {
        let new_row = to_new_row(order)?;
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(orders::table)
                .values(&new_row)
                .returning(OrderRow::as_returning())
                .get_result::<OrderRow>(connection)
                .map_err(OrderRepositoryError::persistence)?;
            row_to_order(row, Vec::new())
        })
        .await
    }

    async fn update(&self, id: OrderId, patch: &OrderPatch) -> OrderRepositoryResult<Order> {
        let changeset = to_changeset(patch)?;
        let is_empty = patch.is_empty();
        self.run_blocking(move |connection| {
            let target = orders::table.find(id.value());
            let lookup = if is_empty {
                target
                    .select(OrderRow::as_select())
                    .first::<OrderRow>(connection)
                    .optional()
            } else {
                diesel::update(target)
                    .set(&changeset)
                    .returning(OrderRow::as_returning())
                    .get_result::<OrderRow>(connection)
                    .optional()
            };
            let row = lookup
                .map_err(OrderRepositoryError::persistence)?
                .ok_or(OrderRepositoryError::NotFound(id))?;

            let order_comments = load_comments(connection, id)?;
            row_to_order(row, order_comments)
        })
        .await
    }

    async fn delete(&self, id: OrderId) -> OrderRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = connection
                .transaction::<usize, DieselError, _>(|tx| {
                    diesel::delete(comments::table.filter(comments::order_id.eq(id.value())))
                        .execute(tx)?;
                    diesel::delete(orders::table.find(id.value())).execute(tx)
                })
                .map_err(OrderRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(OrderRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn insert_comment(
        &self,
        order_id: OrderId,
        comment: &NewComment,
    ) -> OrderRepositoryResult<Comment> {
        let new_row = NewCommentRow {
            order_id: order_id.value(),
            author: comment.author.clone(),
            text: comment.text.clone(),
            created_at: format_timestamp(comment.created_at),
        };
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(comments::table)
                .values(&new_row)
                .returning(CommentRow::as_returning())
                .get_result::<CommentRow>(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                        OrderRepositoryError::NotFound(order_id)
                    }
                    _ => OrderRepositoryError::persistence(err),
                })?;
            row_to_comment(row)
        })
        .await
    }
}

fn load_comments(
    connection: &mut PgConnection,
    order_id: OrderId,
) -> OrderRepositoryResult<Vec<Comment>> {
    comments::table
        .filter(comments::order_id.eq(order_id.value()))
        .order(comments::id.asc())
        .select(CommentRow::as_select())
        .load::<CommentRow>(connection)
        .map_err(OrderRepositoryError::persistence)?
        .into_iter()
        .map(row_to_comment)
        .collect()
}

/// Formats a timestamp the way the `orders` and `comments` text columns
/// store it, e.g. `2024-06-01T10:00:00.000Z`.
fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_timestamp(value: &str) -> OrderRepositoryResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(OrderRepositoryError::persistence)
}

fn encode_attachments(attachments: &[String]) -> OrderRepositoryResult<String> {
    serde_json::to_string(attachments).map_err(OrderRepositoryError::persistence)
}

fn to_new_row(order: &NewOrder) -> OrderRepositoryResult<NewOrderRow> {
    let draft = &order.draft;
    Ok(NewOrderRow {
        number: order.number.to_string(),
        customer: draft.customer.clone(),
        address: draft.address.clone(),
        tenant: draft.tenant.clone(),
        phone: draft.phone.clone(),
        email: draft.email.clone(),
        problem: draft.problem.clone(),
        attachments: encode_attachments(&draft.attachments)?,
        status: order.status.as_str().to_owned(),
        created_at: format_timestamp(order.created_at),
        importance: draft.importance.as_str().to_owned(),
    })
}

fn to_changeset(patch: &OrderPatch) -> OrderRepositoryResult<OrderChangeset> {
    Ok(OrderChangeset {
        customer: patch.customer.clone(),
        address: patch.address.clone(),
        tenant: patch.tenant.clone(),
        phone: patch.phone.clone(),
        email: patch.email.clone(),
        problem: patch.problem.clone(),
        attachments: patch
            .attachments
            .as_deref()
            .map(encode_attachments)
            .transpose()?,
        status: patch.status.map(|status| status.as_str().to_owned()),
        importance: patch
            .importance
            .map(|importance| importance.as_str().to_owned()),
        appointment: patch
            .appointment
            .map(|appointment| appointment.map(format_timestamp)),
    })
}

fn row_to_order(row: OrderRow, order_comments: Vec<Comment>) -> OrderRepositoryResult<Order> {
    let OrderRow {
        id,
        number: raw_number,
        customer,
        address,
        tenant,
        phone,
        email,
        problem,
        attachments: raw_attachments,
        status: raw_status,
        created_at,
        importance: raw_importance,
        appointment: raw_appointment,
    } = row;

    let number = OrderNumber::try_from(raw_number).map_err(OrderRepositoryError::persistence)?;
    let attachments = serde_json::from_str::<Vec<String>>(&raw_attachments)
        .map_err(OrderRepositoryError::persistence)?;
    let status =
        OrderStatus::try_from(raw_status.as_str()).map_err(OrderRepositoryError::persistence)?;
    let importance = Importance::try_from(raw_importance.as_str())
        .map_err(OrderRepositoryError::persistence)?;
    let appointment = raw_appointment.as_deref().map(parse_timestamp).transpose()?;

    let data = PersistedOrderData {
        id: OrderId::new(id),
        order: NewOrder {
            number,
            draft: OrderDraft {
                customer,
                address,
                tenant,
                phone,
                email,
                problem,
                attachments,
                importance,
            },
            status,
            created_at: parse_timestamp(&created_at)?,
        },
        comments: order_comments,
        appointment,
    };
    Ok(Order::from_persisted(data))
}

fn row_to_comment(row: CommentRow) -> OrderRepositoryResult<Comment> {
    let created_at = parse_timestamp(&row.created_at)?;
    Ok(Comment::from_persisted(
        CommentId::new(row.id),
        NewComment {
            author: row.author,
            text: row.text,
            created_at,
        },
    ))
}
