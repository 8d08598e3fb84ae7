//! Rainbowize turns a raster image into an animated rainbow SVG and an inscription payload.
//!
//! # Pipeline overview
//!
//! 1. **Upload**: bytes -> [`UploadedImage`] (data URI, natural size, pixels)
//! 2. **Preview**: [`UploadedImage`] -> [`Preview`] (fit to 400x400, nearest-neighbor)
//! 3. **Compose**: [`UploadedImage`] + [`GradientColors`] -> [`ComposedSvg`]
//! 4. **Encode**: [`ComposedSvg`] markup -> [`EncodedPayload`] (hex of a base64 data URI)
//! 5. **Inscribe** (optional): [`WalletBridge`] sends a zero-value self-transaction carrying the
//!    payload through a [`WalletProvider`]
//!
//! [`Controller`] drives those steps from user events and exposes the resulting view state.
#![forbid(unsafe_code)]

mod animation;
mod assets;
mod compose;
mod encode;
mod foundation;
mod preview;
mod render;
mod ui;
mod wallet;

pub use animation::cycle::{CYCLE_SECONDS, ColorStop, RainbowCycle, STOP_LABELS, STOP_OFFSETS};
pub use assets::color::{DEFAULT_COLORS, GRADIENT_LEN, GradientColors, Palette, parse_hex_color};
pub use assets::decode::{UploadedImage, data_uri, decode_upload};
pub use compose::svg::{ComposedSvg, SVG_NS, XLINK_NS, background_markup, compose_rainbow};
pub use encode::payload::{
    EncodedPayload, SVG_DATA_URI_PREFIX, decode_payload, encode_payload, latin1_bytes,
    string_to_hex, svg_data_uri,
};
pub use foundation::core::{PixelSize, Rgb8};
pub use foundation::error::{RainbowError, RainbowResult};
pub use preview::{PREVIEW_BOX, Preview, PreviewDimensions, render_preview};
pub use render::still::{rasterize_background, render_still};
pub use ui::controller::{
    AlertLog, ComposedResult, Controller, MSG_CONNECT_AND_COMPOSE, MSG_CONNECT_FAILED,
    MSG_NO_WALLET, MSG_SEND_FAILED, MSG_UNREADABLE_IMAGE, MSG_UPLOAD_FIRST, Notifier, WalletView,
};
pub use wallet::bridge::{WalletBridge, WalletSession};
pub use wallet::network::{UNKNOWN_NETWORK, network_name, parse_chain_id};
pub use wallet::provider::{TransactionRequest, TxHash, WalletProvider};
