//! Decorative particle field.
//!
//! Particles drift at a constant speed, bounce off the viewport edges and
//! are pushed away from the pointer. The simulation is stepped once per
//! animation frame by the web crate.

use rand::Rng;

use crate::settings::ParticleSettings;

/// Scale applied to a particle while it is repelled by the pointer.
const REPELLED_SCALE: f64 = 1.5;

/// Fraction of the pointer offset applied per frame while repelled.
const REPEL_STRENGTH: f64 = 0.1;

/// Visible area in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Pointer position in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

/// A single particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub size: f64,
    pub x: f64,
    pub y: f64,
    speed_x: f64,
    speed_y: f64,
    direction_x: f64,
    direction_y: f64,
    pub color: String,
    /// Duration of the float animation, seconds.
    pub float_secs: f64,
    /// Duration of the twinkle animation, seconds; `None` for steady particles.
    pub twinkle_secs: Option<f64>,
    repelled: bool,
}

impl Particle {
    /// Spawn a particle at a random position inside `viewport`.
    pub fn spawn(settings: &ParticleSettings, viewport: Viewport, rng: &mut impl Rng) -> Self {
        let size = between(rng, settings.size_min, settings.size_max);
        let color = settings
            .colors
            .get(rng.gen_range(0..settings.colors.len().max(1)))
            .cloned()
            .unwrap_or_default();

        Self {
            size,
            x: unit(rng) * (viewport.width - size * 2.0) + size,
            y: unit(rng) * (viewport.height - size * 2.0) + size,
            speed_x: between(rng, settings.speed_min, settings.speed_max),
            speed_y: between(rng, settings.speed_min, settings.speed_max),
            direction_x: if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
            direction_y: if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
            color,
            float_secs: 15.0 + unit(rng) * 10.0,
            twinkle_secs: rng
                .gen_bool(settings.twinkle_chance)
                .then(|| 3.0 + unit(rng) * 4.0),
            repelled: false,
        }
    }

    /// Advance one frame.
    pub fn step(&mut self, viewport: Viewport, pointer: Option<Pointer>, pointer_radius: f64) {
        self.x += self.speed_x * self.direction_x;
        self.y += self.speed_y * self.direction_y;

        if self.x > viewport.width - self.size || self.x < self.size {
            self.direction_x = -self.direction_x;
        }
        if self.y > viewport.height - self.size || self.y < self.size {
            self.direction_y = -self.direction_y;
        }

        if let Some(pointer) = pointer {
            let dx = pointer.x - self.x;
            let dy = pointer.y - self.y;
            let distance = dx.hypot(dy);

            if distance < pointer_radius {
                let force = (pointer_radius - distance) / pointer_radius;
                self.x -= dx * force * REPEL_STRENGTH;
                self.y -= dy * force * REPEL_STRENGTH;
                self.repelled = true;
            } else {
                self.repelled = false;
            }
        }
    }

    pub fn is_repelled(&self) -> bool {
        self.repelled
    }

    pub fn scale(&self) -> f64 {
        if self.repelled { REPELLED_SCALE } else { 1.0 }
    }

    /// CSS `box-shadow` glow in the particle's colour.
    pub fn glow(&self) -> String {
        format!(
            "0 0 {}px {}px {}40",
            self.size * 2.0,
            self.size,
            self.color
        )
    }

    /// CSS `animation` value.
    pub fn animation(&self) -> String {
        match self.twinkle_secs {
            Some(twinkle) => format!(
                "float {:.2}s infinite linear, twinkle {:.2}s infinite linear",
                self.float_secs, twinkle
            ),
            None => format!("float {:.2}s infinite linear", self.float_secs),
        }
    }
}

/// All particles of the background layer.
#[derive(Debug, Clone)]
pub struct ParticleField {
    settings: ParticleSettings,
    viewport: Viewport,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(settings: ParticleSettings, viewport: Viewport, rng: &mut impl Rng) -> Self {
        let mut field = Self {
            settings,
            viewport,
            particles: Vec::new(),
        };
        field.respawn(viewport, rng);
        field
    }

    /// Discard every particle and spawn a fresh set for `viewport`.
    pub fn respawn(&mut self, viewport: Viewport, rng: &mut impl Rng) {
        self.viewport = viewport;
        self.particles = (0..self.settings.count)
            .map(|_| Particle::spawn(&self.settings, viewport, rng))
            .collect();
    }

    /// Advance every particle one frame.
    pub fn step(&mut self, pointer: Option<Pointer>) {
        let radius = self.settings.pointer_radius;
        for particle in &mut self.particles {
            particle.step(self.viewport, pointer, radius);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

fn unit(rng: &mut impl Rng) -> f64 {
    rng.gen_range(0.0..1.0)
}

fn between(rng: &mut impl Rng, min: f64, max: f64) -> f64 {
    unit(rng) * (max - min) + min
}
