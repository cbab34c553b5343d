/// Tunable parameters for spell effects and the momentum replay.
///
/// Defaults reproduce the canonical rules; content files may override any
/// subset of the fields.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Ticks of frozen time granted by Time Stop before spell power applies.
    pub time_stop_base_ticks: u32,
    /// Spell power needed per additional frozen tick.
    pub time_stop_power_divisor: u32,
    /// Each whole power of this base in stored damage is one step of knockback.
    pub knockback_log_base: f64,
    /// Grid units travelled toward per unit of stored velocity.
    pub velocity_scale: f32,
    /// Impact magnitude handed to the collision resolver when a launch is cut short.
    pub collision_impact: i32,
    /// Fixed part of the Exhausted duration applied when time resumes (turns).
    pub exhaustion_base_turns: i32,
    /// Random part of the Exhausted duration: `random2(variance)` turns.
    pub exhaustion_variance: i32,
    /// Line-of-sight radius used by the reference vision oracle.
    pub los_radius: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of monsters tracked on a level.
    pub const MAX_MONSTERS: usize = 256;
    /// Maximum number of spells the player can memorise.
    pub const MAX_MEMORISED_SPELLS: usize = 21;
    /// Maximum number of items lying on the floor of a level.
    pub const MAX_FLOOR_ITEMS: usize = 512;
    /// Maximum number of messages retained in the message log.
    pub const MAX_MESSAGES: usize = 512;

    /// Time units per player turn; durations are stored in these units.
    pub const BASELINE_DELAY: i32 = 10;

    pub const DEFAULT_TIME_STOP_BASE_TICKS: u32 = 20;
    pub const DEFAULT_TIME_STOP_POWER_DIVISOR: u32 = 5;
    pub const DEFAULT_KNOCKBACK_LOG_BASE: f64 = 2.5;
    pub const DEFAULT_VELOCITY_SCALE: f32 = 8.0;
    pub const DEFAULT_COLLISION_IMPACT: i32 = 17;
    pub const DEFAULT_EXHAUSTION_BASE_TURNS: i32 = 12;
    pub const DEFAULT_EXHAUSTION_VARIANCE: i32 = 5;
    pub const DEFAULT_LOS_RADIUS: u32 = 7;

    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            time_stop_base_ticks: Self::DEFAULT_TIME_STOP_BASE_TICKS,
            time_stop_power_divisor: Self::DEFAULT_TIME_STOP_POWER_DIVISOR,
            knockback_log_base: Self::DEFAULT_KNOCKBACK_LOG_BASE,
            velocity_scale: Self::DEFAULT_VELOCITY_SCALE,
            collision_impact: Self::DEFAULT_COLLISION_IMPACT,
            exhaustion_base_turns: Self::DEFAULT_EXHAUSTION_BASE_TURNS,
            exhaustion_variance: Self::DEFAULT_EXHAUSTION_VARIANCE,
            los_radius: Self::DEFAULT_LOS_RADIUS,
        }
    }
}
