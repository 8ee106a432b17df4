pub mod application {
    pub mod receipt {
        pub mod recognize;
    }
    pub mod recognition {
        pub mod poller;
    }
}

pub mod domain {
    pub mod logger;
    pub mod receipt {
        pub mod extraction;
        pub mod model;
        pub mod price_matcher;
        pub mod use_cases {
            pub mod recognize;
        }
    }
    pub mod recognition {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod settings;
        pub mod use_cases {
            pub mod wait_for_completion;
        }
    }
}
