//! Diesel schema for order persistence.

diesel::table! {
    /// Work orders shown on the board.
    orders (id) {
        /// Database-assigned order identifier.
        id -> Int8,
        /// Zero-padded sequential order number.
        #[max_length = 16]
        number -> Varchar,
        /// Customer name.
        customer -> Text,
        /// Site address.
        address -> Text,
        /// Tenant name.
        tenant -> Text,
        /// Contact phone number.
        phone -> Text,
        /// Contact email.
        email -> Text,
        /// Problem description.
        problem -> Text,
        /// JSON-encoded array of attachment URLs.
        attachments -> Text,
        /// Board column.
        #[max_length = 50]
        status -> Varchar,
        /// ISO-8601 creation timestamp.
        created_at -> Text,
        /// Importance level.
        #[max_length = 20]
        importance -> Varchar,
        /// ISO-8601 appointment timestamp.
        appointment -> Nullable<Text>,
    }
}

diesel::table! {
    /// Append-only order comments.
    comments (id) {
        /// Database-assigned comment identifier.
        id -> Int8,
        /// Owning order.
        order_id -> Int8,
        /// Comment author.
        author -> Text,
        /// Comment body.
        text -> Text,
        /// ISO-8601 append timestamp.
        created_at -> Text,
    }
}

diesel::joinable!(comments -> orders (order_id));
diesel::allow_tables_to_appear_in_same_query!(orders, comments);
