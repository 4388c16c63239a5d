//! Backend drivers: the strategy that performs actual visual interpolation.
//!
//! Two implementations exist. `NativeDriver` drives host-created
//! web-animation objects; `CssDriver` injects `@keyframes` stylesheets and
//! steers playback through `animation-*` inline properties. One driver is
//! selected per node at first initialization via a capability probe.

pub mod css;
pub mod native;

pub use css::CssDriver;
pub use native::NativeDriver;

use crate::config::Config;
use crate::host::Host;
use crate::ids::{ElementHandle, NodeId};
use crate::keyframe::Keyframe;
use crate::timing::ResolvedTiming;

/// Per-call view of the owning node, borrowed by the engine for the driver.
pub struct DriverContext<'a> {
    pub node: NodeId,
    pub name: &'a str,
    pub elements: &'a [ElementHandle],
    pub keyframes: &'a [Keyframe],
    pub timing: ResolvedTiming,
}

/// Backend strategy interface. Drivers start paused after `init`; `resume`
/// starts visual playback; `seek` moves the paused position to a fraction of
/// the resolved duration; `teardown` releases every host resource and must
/// be idempotent.
pub trait Driver {
    fn init(&mut self, ctx: &DriverContext<'_>, host: &mut dyn Host);
    fn resume(&mut self, ctx: &DriverContext<'_>, host: &mut dyn Host);
    fn pause(&mut self, ctx: &DriverContext<'_>, host: &mut dyn Host);
    fn seek(&mut self, ctx: &DriverContext<'_>, host: &mut dyn Host, step: f64);
    fn teardown(&mut self, ctx: &DriverContext<'_>, host: &mut dyn Host);
}

/// Select a backend for one node. The probe is evaluated per node, not
/// cached globally; `Config::force_css_fallback` pins the CSS path.
pub fn select_driver(cfg: &Config, host: &dyn Host) -> Box<dyn Driver> {
    if !cfg.force_css_fallback && host.supports_web_animations() {
        Box::new(NativeDriver::default())
    } else {
        Box::new(CssDriver::default())
    }
}
