pub mod context;
pub mod effect;
pub mod mapper;
pub mod store;

pub use context::{HomeItem, NavigationContext, Page, SettingsItem};
pub use effect::{Effect, TransportAction};
pub use mapper::Mapper;
pub use store::NavigationStore;
