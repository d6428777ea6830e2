diesel::table! {
    products (id) {
        id -> Uuid,
        name -> Varchar,
        description -> Nullable<Text>,
        price -> Float8,
        image -> Nullable<Varchar>,
        created_at -> Timestamp,
    }
}
