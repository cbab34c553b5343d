//! Character jobs (classes).
//!
//! Discriminants are stable: playable jobs are numbered densely from zero in
//! roster order, and the meta selections used by character creation start at
//! [`Job::Unknown`].

use strum::IntoEnumIterator;

/// Starting job of a character, or a meta selection made during creation.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "title_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Job {
    Fighter,
    Wizard,
    Priest,
    Gladiator,
    Necromancer,
    Assassin,
    Berserker,
    Hunter,
    Conjurer,
    Enchanter,
    FireElementalist,
    IceElementalist,
    Summoner,
    AirElementalist,
    EarthElementalist,
    Skald,
    VenomMage,
    ChaosKnight,
    Transmuter,
    Healer,
    #[cfg(feature = "legacy-jobs")]
    Stalker,
    Monk,
    Warper,
    Wanderer,
    /// Also known as Greenberg or Bane.
    Artificer,
    ArcaneMarksman,
    DeathKnight,
    AbyssalKnight,
    Archaeologist,
    #[cfg(feature = "legacy-jobs")]
    Jester,

    /// Job not yet chosen.
    Unknown = 100,
    /// Pick any job at random.
    Random,
    /// Pick a job at random among those viable for the chosen species.
    Viable,
}

impl Job {
    #[cfg(feature = "legacy-jobs")]
    const LAST_PLAYABLE: Job = Job::Jester;
    #[cfg(not(feature = "legacy-jobs"))]
    const LAST_PLAYABLE: Job = Job::Archaeologist;

    /// Number of playable jobs.
    pub const COUNT: usize = Self::LAST_PLAYABLE as usize + 1;

    /// Returns true for jobs a character can actually start as.
    pub const fn is_playable(self) -> bool {
        (self as u8) < Self::Unknown as u8
    }

    /// Returns true for the creation-time placeholders (Unknown, Random, Viable).
    pub const fn is_meta(self) -> bool {
        !self.is_playable()
    }

    /// Returns true for jobs kept only so older characters still load.
    pub const fn is_legacy(self) -> bool {
        #[cfg(feature = "legacy-jobs")]
        {
            matches!(self, Job::Stalker | Job::Jester)
        }
        #[cfg(not(feature = "legacy-jobs"))]
        {
            false
        }
    }

    /// Returns the dense roster index of a playable job.
    pub const fn index(self) -> Option<usize> {
        if self.is_playable() {
            Some(self as usize)
        } else {
            None
        }
    }

    /// Iterates playable jobs in roster order.
    pub fn playable() -> impl Iterator<Item = Job> {
        Job::iter().filter(|job| job.is_playable())
    }
}

const _: () = assert!(Job::COUNT < Job::Unknown as usize);
