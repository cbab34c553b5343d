use crate::state::{GameState, PlayerState, SpellId};

/// What happened when the player was asked to forget a spell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AmnesiaOutcome {
    /// The player knows no spells; nothing was asked.
    NoSpells,
    Forgotten(SpellId),
    /// The player picked nothing, or an empty slot.
    Cancelled,
}

/// Lets the player forget one memorised spell.
///
/// `choose` is shown the player and returns the slot to clear, or `None` to
/// back out. `pre_msg` is printed only if a spell is actually forgotten.
pub fn cast_selective_amnesia<F>(
    state: &mut GameState,
    pre_msg: Option<&str>,
    choose: F,
) -> AmnesiaOutcome
where
    F: FnOnce(&PlayerState) -> Option<usize>,
{
    if state.player.spells.is_empty() {
        state.message("You don't know any spells.");
        return AmnesiaOutcome::NoSpells;
    }

    let chosen = choose(&state.player)
        .and_then(|slot| state.player.spell_in_slot(slot).map(|spell| (slot, spell)));
    let Some((slot, spell)) = chosen else {
        state.message("Okay, then.");
        return AmnesiaOutcome::Cancelled;
    };

    if let Some(msg) = pre_msg.filter(|msg| !msg.is_empty()) {
        state.message(msg);
    }
    state.player.spells.remove(slot);
    tracing::debug!(%spell, slot, "spell forgotten");
    AmnesiaOutcome::Forgotten(spell)
}
