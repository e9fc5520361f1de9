#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Declarative registry of user-configurable UI settings for Scry.
//!
//! Layout: `keys.rs` (enumerated setting keys), `scope.rs` (storage scope and
//! flag resolution), `model.rs` (typed setting definitions), `schema.rs`
//! (validator documents), `definitions.rs` (the settings payload),
//! `registry.rs` (construction and lookup), `store.rs` (host-side
//! consumption).
//!
//! Registry construction is pure and synchronous: it performs no IO, holds no
//! state between calls, and allocates fresh output each time, so it may be
//! called concurrently without coordination.

mod defaults;
mod definitions;
pub mod error;
pub mod i18n;
pub mod keys;
pub mod model;
pub mod registry;
pub mod schema;
pub mod scope;
pub mod store;

pub use error::{SettingsError, SettingsResult};
pub use i18n::{DefaultMessages, Message, Translator};
pub use keys::SettingKey;
pub use model::{SettingDefinition, ValueType};
pub use registry::{SettingsRegistry, build_registry, default_registry};
pub use scope::{RegistryFlags, SettingScope, resolve_default_index_scope};
pub use store::SettingsStore;
