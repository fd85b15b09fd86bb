//! Signage Hub Library
//!
//! A digital signage management server: playlist composition, player index
//! layouts, and user administration over a REST API.

pub mod api;
pub mod player;
pub mod playlists;
pub mod session;
pub mod settings;
pub mod telemetry;
pub mod users;

pub use api::{create_router, create_state, run_server, AjaxEnvelope, AppState};
pub use player::{LayoutPreparer, PlayerEntity, PlayerLayout, PlaylistMode, Region, ZoneExportUnit};
pub use playlists::{InsertItemFactory, Item, ItemField, ItemsService};
pub use session::{FlashLevel, FlashMessage, SessionContext, SessionStore};
pub use settings::ServerSettings;
pub use users::{UserError, UsersService};
