diesel::table! {
    contacts (id) {
        id -> BigInt,
        name -> Nullable<Text>,
        number -> Nullable<Text>,
        job -> Nullable<Text>,
        email -> Nullable<Text>,
    }
}
