// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod models {
        pub(crate) mod amount_model;
        pub(crate) mod config_model;
        pub(crate) mod date_literal_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod hint_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod config;
        pub(crate) mod handlers;
        pub(crate) mod hint;
        pub(crate) mod history;
        pub(crate) mod preferences;
        pub(crate) mod progress;
        pub(crate) mod step;
        pub(crate) mod transaction;
        pub(crate) mod tx;
    }
    pub(crate) mod logic {
        pub(crate) mod hint_enricher;
        pub(crate) mod simple_tx;
        pub(crate) mod value_parsers;
    }
    pub(crate) mod repositories {
        pub(crate) mod hint_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod conversation_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod template_printer;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::config::*;
        pub use crate::domain::entities::handlers::*;
        pub use crate::domain::entities::hint::*;
        pub use crate::domain::entities::history::*;
        pub use crate::domain::entities::preferences::*;
        pub use crate::domain::entities::progress::*;
        pub use crate::domain::entities::step::*;
        pub use crate::domain::entities::transaction::*;
        pub use crate::domain::entities::tx::*;
    }

    pub mod repositories {
        pub use crate::data::repositories::hint_repository_impl::HistoryCache;
        pub use crate::domain::repositories::hint_repository::*;
    }

    pub mod session {
        pub use crate::domain::logic::simple_tx::{create_simple_tx, SimpleTx};
    }

    pub mod parsers {
        pub use crate::domain::logic::value_parsers::*;
        pub use crate::presentation::utils::{count_leading_digits, format_amount};
    }
}
