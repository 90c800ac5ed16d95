use ratatui::prelude::*;

const PARTICLES_PER_BURST: usize = 50;
const LIFETIME_TICKS: u16 = 100;
const MAX_EXTRA_DELAY: u64 = 66;

const COLORS: [Color; 6] = [
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
];

const GLYPHS: [char; 4] = ['■', '●', '◆', '▲'];

fn rand_pseudo(seed: u64) -> u64 {
    seed.wrapping_mul(6364136223846793005).wrapping_add(1)
}

struct Particle {
    column_pct: u16,
    delay: u16,
    age: u16,
    color: Color,
    glyph: char,
    drift: i32,
}

/// Falling celebration particles. Each burst spawns a fixed batch with
/// randomized columns, colors and staggered starts; particles expire
/// on their own after a bounded lifetime.
pub struct ConfettiState {
    particles: Vec<Particle>,
    seed: u64,
}

impl Default for ConfettiState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfettiState {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            seed: 0x7ADA,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    fn next_rand(&mut self) -> u64 {
        self.seed = rand_pseudo(self.seed);
        self.seed
    }

    /// Queue one batch of particles. Per-particle stagger plus a
    /// random extra delay spreads the burst out instead of dropping a
    /// curtain all at once.
    pub fn burst(&mut self) {
        for i in 0..PARTICLES_PER_BURST {
            let column_pct = (self.next_rand() % 100) as u16;
            let color = COLORS[(self.next_rand() % COLORS.len() as u64) as usize];
            let glyph = GLYPHS[(self.next_rand() % GLYPHS.len() as u64) as usize];
            let delay = i as u16 + (self.next_rand() % MAX_EXTRA_DELAY) as u16;
            let drift = (self.next_rand() % 3) as i32 - 1;

            self.particles.push(Particle {
                column_pct,
                delay,
                age: 0,
                color,
                glyph,
                drift,
            });
        }
    }

    /// Advance the animation one frame (~30ms).
    pub fn tick(&mut self) {
        for particle in &mut self.particles {
            if particle.delay > 0 {
                particle.delay -= 1;
            } else {
                particle.age += 1;
            }
        }
        self.particles.retain(|p| p.age < LIFETIME_TICKS);
    }
}

pub struct Confetti;

impl StatefulWidget for Confetti {
    type State = ConfettiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        for particle in state.particles.iter().filter(|p| p.delay == 0) {
            let fall = (particle.age as u32 * area.height as u32) / LIFETIME_TICKS as u32;
            if fall >= area.height as u32 {
                continue;
            }

            let wobble = if particle.age % 8 < 4 {
                particle.drift
            } else {
                -particle.drift
            };
            let column =
                (particle.column_pct as u32 * area.width.saturating_sub(1) as u32) / 100;
            let x = area.left() as i32 + column as i32 + wobble;
            let y = area.top() + fall as u16;

            if x < area.left() as i32 || x >= area.right() as i32 {
                continue;
            }
            let gx = x as u16;

            if gx < buf.area.width && y < buf.area.height {
                if let Some(cell) = buf.cell_mut((gx, y)) {
                    cell.set_char(particle.glyph).set_fg(particle.color);
                }
            }
        }
    }
}
