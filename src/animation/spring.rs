// SPDX-License-Identifier: MPL-2.0
//! Damped spring used for the toast entrance.

/// Displacement below which a spring is considered at rest.
const REST_DISPLACEMENT: f32 = 0.01;
/// Speed below which a spring is considered at rest.
const REST_SPEED: f32 = 2.0;

/// Damped harmonic oscillator parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub damping: f32,
    pub stiffness: f32,
    pub mass: f32,
}

impl Spring {
    /// Creates a spring with unit mass.
    #[must_use]
    pub fn new(damping: f32, stiffness: f32) -> Self {
        Self {
            damping,
            stiffness,
            mass: 1.0,
        }
    }

    /// Returns displacement and velocity at `t` seconds for a spring released
    /// at rest with initial displacement `x0` from its target.
    #[must_use]
    pub fn sample(&self, x0: f32, t: f32) -> (f32, f32) {
        let mass = self.mass.max(f32::EPSILON);
        let stiffness = self.stiffness.max(f32::EPSILON);
        let omega = (stiffness / mass).sqrt();
        let zeta = self.damping.max(0.0) / (2.0 * (stiffness * mass).sqrt());

        if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let a = x0;
            let b = zeta * omega * x0 / omega_d;
            let envelope = (-zeta * omega * t).exp();
            let (sin, cos) = (omega_d * t).sin_cos();
            let x = envelope * (a * cos + b * sin);
            let v = envelope * ((b * omega_d - zeta * omega * a) * cos - (a * omega_d + zeta * omega * b) * sin);
            (x, v)
        } else if (zeta - 1.0).abs() <= f32::EPSILON {
            let envelope = (-omega * t).exp();
            let c = omega * x0;
            let x = (x0 + c * t) * envelope;
            let v = c * envelope - omega * x;
            (x, v)
        } else {
            let root = omega * (zeta * zeta - 1.0).sqrt();
            let r1 = -zeta * omega + root;
            let r2 = -zeta * omega - root;
            let c2 = -r1 * x0 / (r2 - r1);
            let c1 = x0 - c2;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
        }
    }

    /// Returns whether a sampled state is close enough to the target to stop.
    #[must_use]
    pub fn is_at_rest(displacement: f32, velocity: f32) -> bool {
        displacement.abs() < REST_DISPLACEMENT && velocity.abs() < REST_SPEED
    }
}
