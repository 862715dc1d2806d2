pub mod application {
    pub mod crud;
    pub mod kutipan {
        pub mod list_by_tabung;
        pub mod rules;
    }
    pub mod tabung {
        pub mod rules;
    }
    pub mod tabung_type {
        pub mod rules;
    }
    pub mod tenant {
        pub mod registry;
    }
}

pub mod domain {
    pub mod crud;
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod tenant {
        pub mod errors;
        pub mod model;
        pub mod repository;
    }
    pub mod tabung_type {
        pub mod errors;
        pub mod model;
    }
    pub mod tabung {
        pub mod errors;
        pub mod model;
        pub mod repository;
    }
    pub mod kutipan {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod list_by_tabung;
        }
    }
    pub mod cadangan {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
    }
}
