pub mod metrics;
pub mod providers;

pub use providers::{
    Credentials, GoogleSearchProvider, MockSearchProvider, ProviderError, SearchProvider,
};
