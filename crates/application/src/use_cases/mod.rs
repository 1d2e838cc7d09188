pub mod hosts;

pub use hosts::{
    AppendHostEntryUseCase, ListHostsUseCase, LookupHostUseCase, ReverseLookupUseCase,
};
