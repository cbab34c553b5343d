use crate::env::{Dice, SpellEnv, TerrainKind};
use crate::state::{DurationKind, GameState, MessageChannel, PlayerState};

/// Everything a spell handler touches: the game state, the environment, and
/// dice seeded for this cast.
///
/// Creating a context advances the state nonce, so every cast draws its own
/// random sequence.
pub struct CastContext<'a, 'e> {
    pub state: &'a mut GameState,
    pub env: SpellEnv<'e>,
    dice: Dice<'e>,
}

impl<'a, 'e> CastContext<'a, 'e> {
    pub fn new(state: &'a mut GameState, env: SpellEnv<'e>) -> Self {
        let nonce = state.bump_nonce();
        let dice = env.dice(state.game_seed, nonce, state.player.id.0);
        Self { state, env, dice }
    }

    #[inline]
    pub fn dice(&mut self) -> &mut Dice<'e> {
        &mut self.dice
    }

    #[inline]
    pub fn player(&self) -> &PlayerState {
        &self.state.player
    }

    #[inline]
    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.state.player
    }

    pub fn message(&mut self, text: impl Into<String>) {
        self.state.message(text);
    }

    pub fn message_on(&mut self, channel: MessageChannel, text: impl Into<String>) {
        self.state.message_on(channel, text);
    }

    pub fn has_duration(&self, kind: DurationKind) -> bool {
        self.state.player.durations.is_active(kind)
    }

    /// Restarts `kind` at `turns` (capped at `cap` turns when positive),
    /// printing `msg` first if given.
    pub fn set_duration(&mut self, kind: DurationKind, turns: i32, cap: i32, msg: Option<&str>) {
        self.state.player.durations.clear(kind);
        self.increase_duration(kind, turns, cap, msg);
    }

    /// Extends `kind` by `turns` (total capped at `cap` turns when positive),
    /// printing `msg` first if given.
    pub fn increase_duration(
        &mut self,
        kind: DurationKind,
        turns: i32,
        cap: i32,
        msg: Option<&str>,
    ) {
        if let Some(msg) = msg {
            self.message(msg);
        }
        self.state.player.durations.increase(kind, turns, cap);
    }

    /// Terrain under the player, as the player experiences it.
    ///
    /// Fliers are never in liquid; ground the player is liquefying counts as
    /// liquid floor.
    pub fn liquid_underfoot(&self) -> Option<Liquid> {
        let player = &self.state.player;
        if player.flying {
            return None;
        }
        match self.env.map().terrain(player.position)? {
            terrain if terrain.is_water() => Some(Liquid::Water),
            TerrainKind::Lava => Some(Liquid::Lava),
            TerrainKind::Floor if player.durations.is_active(DurationKind::Liquefying) => {
                Some(Liquid::LiquefiedGround)
            }
            _ => None,
        }
    }
}

/// Kind of liquid the player can stand in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum Liquid {
    #[strum(serialize = "water")]
    Water,
    #[strum(serialize = "lava")]
    Lava,
    #[strum(serialize = "liquid ground")]
    LiquefiedGround,
}
