pub mod append;
pub mod list;
pub mod lookup;
pub mod reverse_lookup;

pub use append::AppendHostEntryUseCase;
pub use list::ListHostsUseCase;
pub use lookup::LookupHostUseCase;
pub use reverse_lookup::ReverseLookupUseCase;
