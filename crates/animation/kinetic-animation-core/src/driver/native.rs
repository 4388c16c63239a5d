//! Native driver: one host web-animation object per target element.

use crate::driver::{Driver, DriverContext};
use crate::host::Host;
use crate::ids::WebAnimationHandle;

/// Drives host-created web-animation objects. All targets under one node
/// share identical timing and finish simultaneously, so the finish watch is
/// registered on the first handle only.
#[derive(Default)]
pub struct NativeDriver {
    animations: Vec<WebAnimationHandle>,
}

impl Driver for NativeDriver {
    fn init(&mut self, ctx: &DriverContext<'_>, host: &mut dyn Host) {
        for element in ctx.elements {
            let animation = host.create_web_animation(*element, ctx.keyframes, &ctx.timing);
            // Nodes start paused so a whole tree can be constructed and
            // synchronized before anything visually starts.
            host.pause_web_animation(animation);
            self.animations.push(animation);
        }

        if let Some(first) = self.animations.first() {
            host.watch_web_animation_finish(*first, ctx.node);
        }
    }

    fn resume(&mut self, _ctx: &DriverContext<'_>, host: &mut dyn Host) {
        for animation in &self.animations {
            host.play_web_animation(*animation);
        }
    }

    fn pause(&mut self, _ctx: &DriverContext<'_>, host: &mut dyn Host) {
        for animation in &self.animations {
            host.pause_web_animation(*animation);
        }
    }

    fn seek(&mut self, ctx: &DriverContext<'_>, host: &mut dyn Host, step: f64) {
        let Some(duration) = ctx.timing.duration else {
            return;
        };
        let delay = ctx.timing.delay.unwrap_or(0.0);
        for animation in &self.animations {
            host.seek_web_animation(*animation, delay + duration * step);
            host.pause_web_animation(*animation);
        }
    }

    fn teardown(&mut self, _ctx: &DriverContext<'_>, host: &mut dyn Host) {
        for animation in self.animations.drain(..) {
            host.cancel_web_animation(animation);
        }
    }
}
