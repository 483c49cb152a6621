use crate::animation::phasor::{Animator, ArmPoint};
use crate::animation::shape::Shape;
use crate::animation::trail::TrailBuffer;
use crate::config::SessionConfig;
use crate::foundation::core::{Point, ensure_finite_point};
use crate::foundation::error::EpicycleResult;

/// Geometry produced by one [`EpicycleSession::advance`] call.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameSnapshot {
    /// Animation time after this frame, in seconds.
    pub elapsed: f64,
    /// Arm links from the first phasor tip to the traced point.
    pub arm: Vec<ArmPoint>,
    /// Traced point, also appended to the trail.
    pub tip: Point,
}

/// An animator paired with its own trail, driven by elapsed-time deltas.
///
/// Each session owns its state exclusively; render several figures by creating several
/// sessions.
#[derive(Clone, Debug)]
pub struct EpicycleSession {
    animator: Animator,
    trail: TrailBuffer,
    speed_scale: f64,
    origin: Point,
}

impl EpicycleSession {
    /// Build the animator for `shape` and an empty trail.
    #[tracing::instrument(skip(shape, config))]
    pub fn new(shape: &Shape, config: &SessionConfig) -> EpicycleResult<Self> {
        let animator = Animator::from_shape(shape, config)?;
        Self::from_animator(animator, config)
    }

    /// Wrap an existing animator.
    pub fn from_animator(animator: Animator, config: &SessionConfig) -> EpicycleResult<Self> {
        config.validate()?;
        tracing::debug!(
            phasors = animator.phasor_count(),
            trail_capacity = config.trail_capacity,
            "session ready"
        );
        Ok(Self {
            animator,
            trail: TrailBuffer::new(config.trail_capacity)?,
            speed_scale: config.speed_scale,
            origin: config.origin,
        })
    }

    /// Advance by `delta_secs`, query the arm at the session origin and record the tip.
    pub fn advance(&mut self, delta_secs: f64) -> EpicycleResult<FrameSnapshot> {
        self.animator.update(delta_secs, self.speed_scale)?;
        let arm = self.animator.arm_state(self.origin.x, self.origin.y);
        let tip = arm.last().map_or(self.origin, ArmPoint::point);
        self.trail.push(tip);
        Ok(FrameSnapshot {
            elapsed: self.animator.elapsed(),
            arm,
            tip,
        })
    }

    /// Move the figure; the trail keeps points recorded at the previous origin.
    pub fn set_origin(&mut self, origin: Point) -> EpicycleResult<()> {
        self.origin = ensure_finite_point("origin", origin)?;
        Ok(())
    }

    /// Rewind the animator and empty the trail.
    pub fn reset(&mut self) {
        self.animator.reset();
        self.trail.clear();
    }

    /// The driven animator.
    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// Recent tip positions.
    pub fn trail(&self) -> &TrailBuffer {
        &self.trail
    }

    /// Current origin offset.
    pub fn origin(&self) -> Point {
        self.origin
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/session.rs"]
mod tests;
