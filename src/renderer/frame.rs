//! Per-frame hand-off from the simulation to the drawing backend
//!
//! `build_frame` turns the game state into an ordered list of draw commands
//! plus HUD text. How the commands look on screen is up to the backend.

use glam::Vec2;

use super::vertex::colors;
use crate::assets::TextureId;
use crate::consts::{LASER_LENGTH, SHIP_SPRITE_SCALE};
use crate::sim::{GameState, Obstacle, Projectile, SizeClass, WeaponKind};

/// HP bar geometry above obstacles
const HP_BAR_HEIGHT: f32 = 5.0;
const HP_BAR_GAP: f32 = 8.0;
/// Background hue sweep (degrees) and its period (seconds)
const BG_HUE_START: f32 = 210.0;
const BG_HUE_END: f32 = 270.0;
const BG_PERIOD: f64 = 10.0;
/// A dead ship blinks: hidden for the second half of each period
const BLINK_PERIOD: f64 = 0.4;

/// Where a text string is anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    TopLeft,
    /// Horizontally centered on the position
    Center,
}

/// A single drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Regular polygon outline; rotation in degrees
    PolygonOutline {
        center: Vec2,
        sides: u32,
        radius: f32,
        rotation: f32,
        color: [f32; 4],
    },
    Rect {
        min: Vec2,
        size: Vec2,
        color: [f32; 4],
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    Sprite {
        texture: TextureId,
        top_left: Vec2,
        scale: f32,
    },
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        anchor: TextAnchor,
        color: [f32; 4],
    },
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub background: [f32; 4],
    pub commands: Vec<DrawCommand>,
}

/// Something that can present frames
pub trait Renderer {
    fn present(&mut self, frame: &Frame);
}

/// HUD values shown every frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub health: i32,
    pub weapon: &'static str,
    pub score: u64,
    pub game_over: bool,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            health: state.ship.reported_health(),
            weapon: state.weapon.name(),
            score: state.score,
            game_over: state.is_game_over(),
        }
    }

    /// HUD strings, top-left block first, then the game-over banner if any
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("HP: {}", self.health),
            format!("Weapon: {}", self.weapon),
            format!("Score: {}", self.score),
        ];
        if self.game_over {
            lines.push("GAME OVER".to_string());
            lines.push(format!("Final Score: {}", self.score));
            lines.push("Press [R] to Restart".to_string());
        }
        lines
    }
}

/// Build the draw list for the current state
pub fn build_frame(state: &GameState) -> Frame {
    let mut commands = Vec::with_capacity(
        state.projectiles.len() + state.obstacles.len() * 3 + state.bonuses.len() + 8,
    );

    for projectile in &state.projectiles {
        commands.push(projectile_command(projectile));
    }
    for obstacle in &state.obstacles {
        push_obstacle(&mut commands, obstacle);
    }
    for bonus in &state.bonuses {
        commands.push(DrawCommand::Circle {
            center: bonus.pos(),
            radius: bonus.radius,
            color: colors::GOLD,
        });
    }

    let blink_hidden = !state.ship.is_alive() && state.time % BLINK_PERIOD > BLINK_PERIOD / 2.0;
    if !blink_hidden {
        push_ship(&mut commands, state);
    }

    push_hud(&mut commands, &Hud::from_state(state), state);

    Frame {
        background: background_color(state.time),
        commands,
    }
}

fn projectile_command(projectile: &Projectile) -> DrawCommand {
    let pos = projectile.pos();
    match projectile.kind {
        WeaponKind::Bullet => DrawCommand::Circle {
            center: pos,
            radius: projectile.radius(),
            color: colors::WHITE,
        },
        WeaponKind::Laser => DrawCommand::Rect {
            min: Vec2::new(pos.x - 2.0, pos.y - LASER_LENGTH),
            size: Vec2::new(4.0, LASER_LENGTH),
            color: colors::RED,
        },
    }
}

fn hp_bar_color(size: SizeClass) -> [f32; 4] {
    match size {
        SizeClass::Small => colors::WHITE,
        SizeClass::Medium => colors::BLUE,
        SizeClass::Large => colors::PURPLE,
        SizeClass::VeryLarge => colors::MAGENTA,
    }
}

fn push_obstacle(commands: &mut Vec<DrawCommand>, obstacle: &Obstacle) {
    let r = obstacle.radius();
    let pos = obstacle.pos();
    let bar_min = Vec2::new(pos.x - r, pos.y - r - HP_BAR_GAP);

    commands.push(DrawCommand::Rect {
        min: bar_min,
        size: Vec2::new(2.0 * r, HP_BAR_HEIGHT),
        color: colors::GRAY,
    });
    commands.push(DrawCommand::Rect {
        min: bar_min,
        size: Vec2::new(2.0 * r * obstacle.hp_fraction(), HP_BAR_HEIGHT),
        color: hp_bar_color(obstacle.size),
    });
    commands.push(DrawCommand::PolygonOutline {
        center: pos,
        sides: obstacle.size.sides(),
        radius: r,
        rotation: obstacle.body.rotation,
        color: colors::WHITE,
    });
}

fn push_ship(commands: &mut Vec<DrawCommand>, state: &GameState) {
    let ship = &state.ship;
    match ship.sprite() {
        Some(sprite) => {
            let half = Vec2::new(sprite.width as f32, sprite.height as f32) * SHIP_SPRITE_SCALE * 0.5;
            commands.push(DrawCommand::Sprite {
                texture: sprite.id,
                top_left: ship.pos - half,
                scale: SHIP_SPRITE_SCALE,
            });
        }
        None => commands.push(DrawCommand::PolygonOutline {
            center: ship.pos,
            sides: 3,
            radius: ship.radius(),
            // Point the triangle's tip up the screen
            rotation: -90.0,
            color: colors::GREEN,
        }),
    }
}

fn push_hud(commands: &mut Vec<DrawCommand>, hud: &Hud, state: &GameState) {
    let hud_colors = [colors::GREEN, colors::BLUE, colors::YELLOW];
    let lines = hud.lines();

    for (i, (line, color)) in lines.iter().zip(hud_colors).enumerate() {
        commands.push(DrawCommand::Text {
            text: line.clone(),
            pos: Vec2::new(10.0, 10.0 + 30.0 * i as f32),
            size: 20.0,
            anchor: TextAnchor::TopLeft,
            color,
        });
    }

    if hud.game_over {
        let center = state.bounds.center();
        let banner = [
            (-30.0, 60.0, colors::RED),
            (30.0, 30.0, colors::YELLOW),
            (70.0, 30.0, colors::WHITE),
        ];
        for (line, (dy, size, color)) in lines.iter().skip(3).zip(banner) {
            commands.push(DrawCommand::Text {
                text: line.clone(),
                pos: Vec2::new(center.x, center.y + dy),
                size,
                anchor: TextAnchor::Center,
                color,
            });
        }
    }
}

/// Background slowly sweeps from blue to violet
pub fn background_color(time: f64) -> [f32; 4] {
    let t = ((time % BG_PERIOD) / BG_PERIOD) as f32;
    let hue = BG_HUE_START + t * (BG_HUE_END - BG_HUE_START);
    let [r, g, b] = hsv_to_rgb(hue, 0.6, 0.2);
    [r, g, b, 1.0]
}

/// HSV (hue in degrees) to linear RGB
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> [f32; 3] {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = value * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = value - c;
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    [r + m, g + m, b + m]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::sim::{Body, Bonus};

    fn texts(frame: &Frame) -> Vec<&str> {
        frame
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_hud_lines() {
        let mut state = GameState::new(1, Tuning::default());
        state.score = 12;
        let frame = build_frame(&state);
        assert_eq!(texts(&frame), vec!["HP: 100", "Weapon: LASER", "Score: 12"]);
    }

    #[test]
    fn test_game_over_banner() {
        let mut state = GameState::new(1, Tuning::default());
        state.ship.apply_damage(500);
        state.score = 30;
        let frame = build_frame(&state);
        let texts = texts(&frame);
        assert_eq!(texts[0], "HP: 0");
        assert!(texts.contains(&"GAME OVER"));
        assert!(texts.contains(&"Final Score: 30"));
        assert!(texts.contains(&"Press [R] to Restart"));
    }

    #[test]
    fn test_entity_commands() {
        let mut state = GameState::new(1, Tuning::default());
        let mut obstacle = Obstacle::new(1, SizeClass::Medium, Body::at(Vec2::new(300.0, 300.0)));
        obstacle.apply_damage(25);
        state.obstacles.push(obstacle);
        state.bonuses.push(Bonus::new(2, Vec2::new(50.0, 50.0), Vec2::ZERO));
        state.fire_projectile();

        let frame = build_frame(&state);
        assert!(matches!(frame.commands[0], DrawCommand::Rect { color, .. } if color == colors::RED));
        // HP bar fill is half the background width
        match (&frame.commands[1], &frame.commands[2]) {
            (DrawCommand::Rect { size: bg, .. }, DrawCommand::Rect { size: fill, .. }) => {
                assert_eq!(bg.x, 64.0);
                assert_eq!(fill.x, 32.0);
            }
            other => panic!("unexpected commands {:?}", other),
        }
        assert!(matches!(frame.commands[3], DrawCommand::PolygonOutline { sides: 4, .. }));
        assert!(matches!(frame.commands[4], DrawCommand::Circle { color, .. } if color == colors::GOLD));
        assert!(matches!(frame.commands[5], DrawCommand::PolygonOutline { sides: 3, .. }));
    }

    #[test]
    fn test_dead_ship_blinks() {
        let mut state = GameState::new(1, Tuning::default());
        state.ship.apply_damage(500);
        let ship_drawn = |state: &GameState| {
            build_frame(state)
                .commands
                .iter()
                .any(|c| matches!(c, DrawCommand::PolygonOutline { sides: 3, .. }))
        };
        state.time = 0.1;
        assert!(ship_drawn(&state));
        state.time = 0.3;
        assert!(!ship_drawn(&state));
    }

    #[test]
    fn test_hsv_primaries() {
        let close = |a: [f32; 3], b: [f32; 3]| a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-5);
        assert!(close(hsv_to_rgb(0.0, 1.0, 1.0), [1.0, 0.0, 0.0]));
        assert!(close(hsv_to_rgb(120.0, 1.0, 1.0), [0.0, 1.0, 0.0]));
        assert!(close(hsv_to_rgb(240.0, 1.0, 1.0), [0.0, 0.0, 1.0]));
        let bg = background_color(0.0);
        assert!(bg[2] > bg[0]);
    }
}
