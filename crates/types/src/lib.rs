//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no game logic, so they can be shared by the
//! engine core, the terminal front-end and the input layer.
//!
//! # Coordinate System
//!
//! The playfield is a 3-D voxel grid:
//!
//! - **X**: width, left to right
//! - **Y**: height, `y = 0` is the floor and pieces fall towards it
//! - **Z**: depth, front (`z = 0`) to back
//!
//! Default playfield dimensions are 10 × 20 × 10.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame step of the terminal loop (~60 FPS) |
//! | `BASE_INTERVAL_MS` | 3000 | Fall interval at level 1 |
//! | `LEVEL_SPEED_MULTIPLIER` | 0.85 | Interval factor per level above 1 |
//! | `MIN_DROP_INTERVAL_MS` | 100 | Fall interval floor |
//!
//! # Examples
//!
//! ```
//! use tetris3d_types::{Axis, GameAction, PieceKind, RotationDirection, GRID_HEIGHT};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! let action = GameAction::Rotate(Axis::Y, RotationDirection::Negative);
//! assert_eq!(action.offset(), None);
//! assert_eq!(GameAction::MoveDown.offset(), Some([0, -1, 0]));
//!
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

use serde::Serialize;

/// Default grid width (X)
pub const GRID_WIDTH: u32 = 10;

/// Default grid height (Y)
pub const GRID_HEIGHT: u32 = 20;

/// Default grid depth (Z)
pub const GRID_DEPTH: u32 = 10;

/// Frame step of the terminal loop in milliseconds
pub const TICK_MS: u32 = 16;

/// Fall interval at level 1 (3 seconds per step)
pub const BASE_INTERVAL_MS: u32 = 3000;

/// Each level multiplies the fall interval by this factor
pub const LEVEL_SPEED_MULTIPLIER: f64 = 0.85;

/// Fall interval never drops below this
pub const MIN_DROP_INTERVAL_MS: u32 = 100;

/// Level every new game starts at
pub const INITIAL_LEVEL: u32 = 1;

/// Lines needed per level by the (manually invoked) level progression hook
pub const LINES_PER_LEVEL: u32 = 10;

/// Base points for clearing 0..=4 layers with one piece, multiplied by level
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, straight bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris3d_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("L"), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Principal rotation axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector of the axis
    pub fn unit(&self) -> [f32; 3] {
        match self {
            Axis::X => [1.0, 0.0, 0.0],
            Axis::Y => [0.0, 1.0, 0.0],
            Axis::Z => [0.0, 0.0, 1.0],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// Sign of a quarter-turn about an axis (right-hand rule)
///
/// - **Positive**: +90°, counter-clockwise looking down the axis towards the origin
/// - **Negative**: -90°
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RotationDirection {
    Positive,
    Negative,
}

impl RotationDirection {
    /// Signed quarter-turn angle in radians
    pub fn angle(&self) -> f32 {
        match self {
            RotationDirection::Positive => std::f32::consts::FRAC_PI_2,
            RotationDirection::Negative => -std::f32::consts::FRAC_PI_2,
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            RotationDirection::Positive => RotationDirection::Negative,
            RotationDirection::Negative => RotationDirection::Positive,
        }
    }
}

/// Lifecycle state of a game session
///
/// ```text
/// StartScreen --start--> Playing <--resume-- Paused
///                        Playing --pause--> Paused
///                        Playing --spawn blocked--> GameOver --start--> Playing
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum GameStatus {
    #[default]
    StartScreen,
    Playing,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::StartScreen => "startScreen",
            GameStatus::Playing => "playing",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "gameOver",
        }
    }

    /// Whether a current piece exists in this state
    pub fn has_active_piece(&self) -> bool {
        matches!(self, GameStatus::Playing | GameStatus::Paused)
    }
}

/// Commands that input and timer collaborators send to the game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// One cell towards -X
    MoveLeft,
    /// One cell towards +X
    MoveRight,
    /// One cell towards -Z
    MoveForward,
    /// One cell towards +Z
    MoveBackward,
    /// One cell towards -Y; settles the piece when blocked
    MoveDown,
    /// Drop straight to the ghost position and settle
    HardDrop,
    /// Quarter-turn about a principal axis
    Rotate(Axis, RotationDirection),
    Start,
    Pause,
    Resume,
}

impl GameAction {
    /// Grid step for translation actions
    pub fn offset(&self) -> Option<[i32; 3]> {
        match self {
            GameAction::MoveLeft => Some([-1, 0, 0]),
            GameAction::MoveRight => Some([1, 0, 0]),
            GameAction::MoveForward => Some([0, 0, -1]),
            GameAction::MoveBackward => Some([0, 0, 1]),
            GameAction::MoveDown => Some([0, -1, 0]),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveForward => "moveForward",
            GameAction::MoveBackward => "moveBackward",
            GameAction::MoveDown => "moveDown",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate(Axis::X, RotationDirection::Positive) => "rotateX",
            GameAction::Rotate(Axis::X, RotationDirection::Negative) => "rotateXNeg",
            GameAction::Rotate(Axis::Y, RotationDirection::Positive) => "rotateY",
            GameAction::Rotate(Axis::Y, RotationDirection::Negative) => "rotateYNeg",
            GameAction::Rotate(Axis::Z, RotationDirection::Positive) => "rotateZ",
            GameAction::Rotate(Axis::Z, RotationDirection::Negative) => "rotateZNeg",
            GameAction::Start => "start",
            GameAction::Pause => "pause",
            GameAction::Resume => "resume",
        }
    }
}

/// Outcome of the most recent settle (consumed by front-ends for feedback)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SettleEvent {
    pub lines_cleared: u32,
    pub points: u32,
}

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` literal
    ///
    /// ```
    /// use tetris3d_types::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex(0xFFA500), Rgb::new(255, 165, 0));
    /// ```
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Scale each channel by `num / den`, clamped to `[0, 1]` (used for shading)
    pub const fn scaled(self, num: u16, den: u16) -> Self {
        if den == 0 || num >= den {
            return self;
        }
        let (num, den) = (num as u32, den as u32);
        Self {
            r: (self.r as u32 * num / den) as u8,
            g: (self.g as u32 * num / den) as u8,
            b: (self.b as u32 * num / den) as u8,
        }
    }
}

/// A cell of the voxel grid
///
/// - `None`: empty
/// - `Some(Rgb)`: occupied by a settled block of that color
pub type Cell = Option<Rgb>;
