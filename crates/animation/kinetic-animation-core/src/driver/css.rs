//! CSS fallback driver: injected `@keyframes` stylesheets plus
//! `animation-*` inline properties.

use crate::driver::{Driver, DriverContext};
use crate::host::Host;
use crate::ids::StylesheetHandle;
use crate::keyframe::Keyframe;

/// Inline properties owned by this driver; removed on teardown.
const ANIMATION_PROPERTIES: [&str; 8] = [
    "animation-name",
    "animation-duration",
    "animation-timing-function",
    "animation-iteration-count",
    "animation-delay",
    "animation-play-state",
    "animation-fill-mode",
    "animation-direction",
];

/// Stylesheet element id for a generated animation name.
pub fn stylesheet_id(name: &str) -> String {
    format!("kinetic-{name}")
}

/// Render the keyframe list as an `@keyframes` rule.
pub fn keyframes_css_text(name: &str, keyframes: &[Keyframe]) -> String {
    let mut out = format!("@keyframes {name} {{");
    for keyframe in keyframes {
        let properties: Vec<String> = keyframe
            .styles
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect();
        out.push_str(&format!(
            " {}% {{ {} }}",
            keyframe.offset * 100.0,
            properties.join(" ")
        ));
    }
    out.push_str(" }");
    out
}

/// Drives playback by stylesheet injection and `animation-*` inline styles.
/// The finish watch listens for `animationend` on the first element only.
#[derive(Default)]
pub struct CssDriver {
    stylesheets: Vec<StylesheetHandle>,
}

impl Driver for CssDriver {
    fn init(&mut self, ctx: &DriverContext<'_>, host: &mut dyn Host) {
        let css_text = keyframes_css_text(ctx.name, ctx.keyframes);
        let sheet_id = stylesheet_id(ctx.name);

        for element in ctx.elements {
            // The host skips injection when the id already exists under the
            // element's root; only sheets this node created are recorded
            // for teardown.
            if let Some(sheet) = host.inject_keyframes_stylesheet(*element, &sheet_id, &css_text) {
                self.stylesheets.push(sheet);
            }

            host.set_style(*element, "animation-name", ctx.name);
            if let Some(duration) = ctx.timing.duration {
                host.set_style(*element, "animation-duration", &format!("{duration}ms"));
            }
            if let Some(easing) = &ctx.timing.easing {
                host.set_style(*element, "animation-timing-function", easing);
            }
            if let Some(delay) = ctx.timing.delay {
                host.set_style(*element, "animation-delay", &format!("{delay}ms"));
            }
            if let Some(fill) = ctx.timing.fill {
                host.set_style(*element, "animation-fill-mode", fill.as_css());
            }
            if let Some(direction) = ctx.timing.direction {
                host.set_style(*element, "animation-direction", direction.as_css());
            }
            if let Some(iterations) = ctx.timing.iterations {
                let count = if iterations.is_infinite() {
                    "infinite".to_string()
                } else {
                    format!("{iterations}")
                };
                host.set_style(*element, "animation-iteration-count", &count);
            }
            host.set_style(*element, "animation-play-state", "paused");
        }

        if let Some(first) = ctx.elements.first() {
            host.watch_animation_end(*first, ctx.node);
        }
    }

    fn resume(&mut self, ctx: &DriverContext<'_>, host: &mut dyn Host) {
        for element in ctx.elements {
            host.set_style(*element, "animation-play-state", "running");
        }
    }

    fn pause(&mut self, ctx: &DriverContext<'_>, host: &mut dyn Host) {
        for element in ctx.elements {
            host.set_style(*element, "animation-play-state", "paused");
        }
    }

    fn seek(&mut self, ctx: &DriverContext<'_>, host: &mut dyn Host, step: f64) {
        let Some(duration) = ctx.timing.duration else {
            return;
        };
        // A negative delay moves the paused animation to the requested
        // fraction without playing it.
        let delay = format!("-{}ms", duration * step);
        for element in ctx.elements {
            host.set_style(*element, "animation-delay", &delay);
            host.set_style(*element, "animation-play-state", "paused");
        }
    }

    fn teardown(&mut self, ctx: &DriverContext<'_>, host: &mut dyn Host) {
        for sheet in self.stylesheets.drain(..) {
            host.remove_stylesheet(sheet);
        }
        for element in ctx.elements {
            for property in ANIMATION_PROPERTIES {
                host.remove_style(*element, property);
            }
        }
    }
}
