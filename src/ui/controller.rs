use crate::{
    assets::{
        color::GradientColors,
        decode::{UploadedImage, decode_upload},
    },
    compose::svg::{ComposedSvg, compose_rainbow},
    encode::payload::{EncodedPayload, encode_payload},
    foundation::{
        core::Rgb8,
        error::{RainbowError, RainbowResult},
    },
    preview::{Preview, render_preview},
    wallet::{
        bridge::{WalletBridge, WalletSession},
        provider::{TxHash, WalletProvider},
    },
};

pub const MSG_UPLOAD_FIRST: &str = "Please upload an image first.";
pub const MSG_UNREADABLE_IMAGE: &str = "Could not read the selected image.";
pub const MSG_NO_WALLET: &str =
    "No Ethereum wallet found. Please install MetaMask or another wallet provider.";
pub const MSG_CONNECT_FAILED: &str = "Error connecting to wallet. Please try again.";
pub const MSG_CONNECT_AND_COMPOSE: &str =
    "Please connect your wallet and generate an image first.";
pub const MSG_SEND_FAILED: &str =
    "Error sending transaction. Please check the console for details.";

/// Sink for blocking user-facing messages.
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

/// Collects alerts in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertLog {
    pub messages: Vec<String>,
}

impl AlertLog {
    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

impl Notifier for AlertLog {
    fn alert(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}

/// Visible state of the wallet controls and info panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletView {
    pub connect_visible: bool,
    pub disconnect_visible: bool,
    pub inscribe_enabled: bool,
    pub info_visible: bool,
    pub address_text: String,
    pub network_text: String,
}

impl Default for WalletView {
    fn default() -> Self {
        Self {
            connect_visible: true,
            disconnect_visible: false,
            inscribe_enabled: false,
            info_visible: false,
            address_text: String::new(),
            network_text: String::new(),
        }
    }
}

impl WalletView {
    fn show_connected(&mut self, session: &WalletSession) {
        self.address_text = format!("Wallet Address: {}", session.account);
        self.network_text = format!("Network: {}", session.network);
        self.info_visible = true;
        self.inscribe_enabled = true;
        self.connect_visible = false;
        self.disconnect_visible = true;
    }

    fn show_disconnected(&mut self) {
        *self = Self::default();
    }

    fn reset_toggle(&mut self) {
        self.connect_visible = true;
        self.disconnect_visible = false;
    }
}

/// The composed document and its encoded payload, displayed together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposedResult {
    pub svg: ComposedSvg,
    pub payload: EncodedPayload,
}

impl ComposedResult {
    pub fn hex_text(&self) -> String {
        format!("Hexadecimal Data: {}", self.payload)
    }
}

/// Page state driven by user events. Every failure becomes exactly one alert.
pub struct Controller<P, N> {
    colors: GradientColors,
    upload: Option<UploadedImage>,
    preview: Option<Preview>,
    result: Option<ComposedResult>,
    bridge: WalletBridge<P>,
    view: WalletView,
    notifier: N,
}

impl<P: WalletProvider, N: Notifier> Controller<P, N> {
    pub fn new(provider: Option<P>, notifier: N) -> Self {
        Self {
            colors: GradientColors::default(),
            upload: None,
            preview: None,
            result: None,
            bridge: WalletBridge::new(provider),
            view: WalletView::default(),
            notifier,
        }
    }

    pub fn colors(&self) -> &GradientColors {
        &self.colors
    }

    pub fn upload(&self) -> Option<&UploadedImage> {
        self.upload.as_ref()
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn result(&self) -> Option<&ComposedResult> {
        self.result.as_ref()
    }

    pub fn session(&self) -> Option<&WalletSession> {
        self.bridge.session()
    }

    pub fn bridge(&self) -> &WalletBridge<P> {
        &self.bridge
    }

    pub fn view(&self) -> &WalletView {
        &self.view
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn set_colors(&mut self, colors: GradientColors) {
        self.colors = colors;
    }

    /// A single color picker changed.
    pub fn pick_color(&mut self, index: usize, color: Rgb8) -> RainbowResult<()> {
        self.colors.set(index, color)
    }

    /// File chosen. A file that does not decode keeps the prior preview.
    pub fn select_file(&mut self, bytes: &[u8]) {
        let prepared = decode_upload(bytes).and_then(|upload| {
            let preview = render_preview(&upload)?;
            Ok((upload, preview))
        });
        match prepared {
            Ok((upload, preview)) => {
                self.upload = Some(upload);
                self.preview = Some(preview);
            }
            Err(e) => {
                tracing::warn!(error = %e, "selected file is not a usable image");
                self.notifier.alert(MSG_UNREADABLE_IMAGE);
            }
        }
    }

    pub fn rainbowize(&mut self) {
        let Some(upload) = self.upload.as_ref().filter(|_| self.preview.is_some()) else {
            self.notifier.alert(MSG_UPLOAD_FIRST);
            return;
        };

        let svg = compose_rainbow(upload, &self.colors);
        let payload = match encode_payload(svg.markup()) {
            Ok(p) => p,
            Err(e) => {
                tracing::error!(error = %e, "failed to encode composed svg");
                self.notifier.alert(&e.to_string());
                return;
            }
        };
        self.result = Some(ComposedResult { svg, payload });

        // Composing resets the connect/disconnect toggle. The session and the inscribe
        // control are left as they were.
        self.view.reset_toggle();
    }

    pub async fn connect(&mut self) {
        match self.bridge.connect().await {
            Ok(session) => self.view.show_connected(session),
            Err(RainbowError::NoProvider(_)) => self.notifier.alert(MSG_NO_WALLET),
            Err(e) => {
                tracing::error!(error = %e, "wallet connect failed");
                self.notifier.alert(MSG_CONNECT_FAILED);
            }
        }
    }

    pub fn disconnect(&mut self) {
        self.bridge.disconnect();
        self.view.show_disconnected();
    }

    /// Inscribe clicked. Ignored while the control is disabled. Repeated clicks send again.
    pub async fn inscribe(&mut self) -> Option<TxHash> {
        if !self.view.inscribe_enabled {
            tracing::debug!("inscribe ignored; control is disabled");
            return None;
        }

        match self
            .bridge
            .submit(self.result.as_ref().map(|r| &r.payload))
            .await
        {
            Ok(hash) => {
                self.notifier.alert(&format!(
                    "Transaction sent successfully! Transaction Hash: {hash}"
                ));
                Some(hash)
            }
            Err(RainbowError::Precondition(_)) => {
                self.notifier.alert(MSG_CONNECT_AND_COMPOSE);
                None
            }
            Err(e) => {
                tracing::error!(error = %e, "inscription failed");
                self.notifier.alert(MSG_SEND_FAILED);
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/controller.rs"]
mod tests;
