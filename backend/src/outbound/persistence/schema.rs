//! Diesel table definitions. Must match `backend/migrations`.

diesel::table! {
    /// Named monotonic counters.
    counters (name) {
        /// Counter name, e.g. `Accommodation`.
        name -> Text,
        /// Last value handed out.
        count -> Int8,
    }
}

diesel::table! {
    /// Accommodation listings.
    accommodations (acc_id) {
        acc_id -> Int8,
        user_id -> Uuid,
        photos -> Array<Text>,
        acc_name -> Text,
        open_at -> Date,
        close_at -> Date,
        address -> Text,
        desc1_hanmadi -> Text,
        desc2_surroundings -> Text,
        desc3_notice -> Text,
        desc4_basics -> Text,
        facilities -> Jsonb,
        charge -> Jsonb,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Uploaded photo bookkeeping.
    images (image_url) {
        image_url -> Text,
        user_id -> Nullable<Uuid>,
        created_at -> Timestamptz,
    }
}
