table! {
    movies (id) {
        id -> Integer,
        title -> Text,
        release_date -> Timestamp,
        imdb_url -> Text,
    }
}

table! {
    ratings (id) {
        id -> Integer,
        movie_id -> Integer,
        user_id -> Integer,
        score -> Integer,
    }
}

table! {
    users (id) {
        id -> Integer,
        email -> Nullable<Text>,
        password -> Nullable<Text>,
        age -> Nullable<Integer>,
        zipcode -> Nullable<Text>,
    }
}

joinable!(ratings -> movies (movie_id));
joinable!(ratings -> users (user_id));

allow_tables_to_appear_in_same_query!(
    movies,
    ratings,
    users,
);
