//! Overlay lifecycle: decide, prepare, start, stop.

use std::sync::Arc;

use parking_lot::Mutex;
use url::Url;

use common::{OverlayError, OverlayResult};
use console::{Console, Palette};
use panel::{PanelConfig, TextPanel};

use crate::hook::{self, HookGuard};
use crate::layer::ConsoleLayer;
use crate::query;

/// Overlay configuration.
#[derive(Clone, Debug)]
pub struct OverlayConfig {
    /// Query flag that activates the overlay.
    pub flag: String,
    /// Entry colors.
    pub palette: Palette,
    /// Panel geometry.
    pub panel: PanelConfig,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            flag: query::ACTIVATION_FLAG.to_string(),
            palette: Palette::default(),
            panel: PanelConfig::default(),
        }
    }
}

impl OverlayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flag(mut self, flag: &str) -> Self {
        self.flag = flag.to_string();
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_panel(mut self, panel: PanelConfig) -> Self {
        self.panel = panel;
        self
    }
}

/// The in-page console overlay.
///
/// Owns the shared console handle and wires it to the page: error hook at
/// prepare, render panel at start, full restoration at stop. Logging works
/// from construction on; output buffers until `start`.
pub struct Overlay {
    config: OverlayConfig,
    console: Arc<Mutex<Console>>,
    panel: Option<Arc<Mutex<TextPanel>>>,
    hook: Option<HookGuard>,
}

impl Overlay {
    /// Build an overlay for a page when its URL requests one.
    ///
    /// Returns `Ok(None)` when the flag is absent, leaving the host's native
    /// console untouched.
    pub fn bootstrap(page_url: &str, config: OverlayConfig) -> OverlayResult<Option<Overlay>> {
        let url = Url::parse(page_url)?;
        if !query::overlay_requested(&url, &config.flag) {
            return Ok(None);
        }
        Ok(Some(Overlay::new(config)))
    }

    pub fn new(config: OverlayConfig) -> Self {
        let console = Console::with_palette(config.palette);
        Self {
            config,
            console: Arc::new(Mutex::new(console)),
            panel: None,
            hook: None,
        }
    }

    /// Shared handle to the console facade.
    pub fn console(&self) -> Arc<Mutex<Console>> {
        self.console.clone()
    }

    /// A tracing layer that renders host events into this overlay.
    pub fn layer(&self) -> ConsoleLayer {
        ConsoleLayer::new(self.console.clone())
    }

    /// Handle to the live panel while started.
    pub fn panel(&self) -> Option<Arc<Mutex<TextPanel>>> {
        self.panel.clone()
    }

    pub fn is_prepared(&self) -> bool {
        self.hook.is_some()
    }

    pub fn is_started(&self) -> bool {
        self.panel.is_some()
    }

    /// Install the uncaught-error hook.
    ///
    /// Installing twice would chain the hook into itself, so a second call
    /// without an intervening [`stop`](Self::stop) is an error.
    pub fn prepare(&mut self) -> OverlayResult<()> {
        if self.hook.is_some() {
            return Err(OverlayError::HookInstalled);
        }
        self.hook = Some(hook::install(self.console.clone()));
        tracing::info!("console overlay prepared");
        Ok(())
    }

    /// Create the panel and flush buffered output. Idempotent.
    pub fn start(&mut self) {
        if self.panel.is_some() {
            return;
        }
        let panel = TextPanel::shared(self.config.panel.clone());
        self.console.lock().activate(Box::new(panel.clone()));
        self.panel = Some(panel);
        tracing::info!("console overlay started");
    }

    /// Tear down the panel and restore the error hook. Idempotent.
    pub fn stop(&mut self) {
        if self.panel.take().is_some() {
            self.console.lock().deactivate();
        }
        if let Some(guard) = self.hook.take() {
            hook::restore(guard);
        }
        tracing::info!("console overlay stopped");
    }
}
