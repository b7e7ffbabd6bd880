pub mod shared {
    pub mod core {
        pub mod currency;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod notifier;
    }
}

pub mod modules {
    pub mod pipeline {
        pub mod board;
        pub mod core {
            pub mod deal;
            pub mod deal_store;
            pub mod drag_session;
            pub mod errors;
            pub mod projection;
            pub mod stage;
            pub mod stage_registry;
            pub mod state;
        }
        pub mod use_cases {
            pub mod load_deals {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_deal {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod move_deal {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod drag_deal {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod manage_stages {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod view_board {
                pub mod view;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_errors;
            }
            pub mod outbound {
                pub mod deal_rows;
                pub mod deals_gateway;
                pub mod deals_in_memory;
                pub mod deals_supabase;
            }
        }
    }
}

pub mod shell;
