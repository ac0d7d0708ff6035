mod backend;
mod errors;
mod http;
mod registry;

mod catbox;
mod litterbox;
mod pixeldrain;
mod transfer_sh;
mod zero_x0;

pub use backend::HostingProvider;
pub use errors::*;
pub use registry::ProviderRegistry;

pub use catbox::CatboxProvider;
pub use litterbox::{resolve_expiry, LitterboxProvider};
pub use pixeldrain::PixeldrainProvider;
pub use transfer_sh::TransferShProvider;
pub use zero_x0::ZeroX0Provider;
