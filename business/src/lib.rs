pub mod application {
    pub mod product {
        pub mod create;
        pub mod get_detail;
        pub mod inactivate;
        pub mod search;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod cache;
        pub mod errors;
        pub mod idempotency;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod views;
        pub mod use_cases {
            pub mod create;
            pub mod get_detail;
            pub mod inactivate;
            pub mod search;
            pub mod update;
        }
    }
}
