use glam::Vec2;

/// Input sampled once per frame by the presentation layer
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Jump key went down this frame
    pub jump: bool,
    /// Primary button is down (mining)
    pub primary_held: bool,
    /// Primary button went down this frame (melee)
    pub primary_pressed: bool,
    /// Secondary button is down (placing)
    pub secondary_held: bool,
    /// Pointer position in world space
    pub cursor_world: Vec2,
    /// Number key pressed this frame (0-based slot)
    pub select_slot: Option<usize>,
    /// -1 / +1 to cycle the hotbar selection, 0 to leave it
    pub cycle_slot: i8,
    pub quit: bool,
}

impl FrameInput {
    /// Horizontal walk direction from the movement keys
    pub fn walk_direction(&self) -> f32 {
        match (self.move_left, self.move_right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Fire-and-forget sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    MineComplete,
    PlaceComplete,
    Jump,
    Hurt,
}
