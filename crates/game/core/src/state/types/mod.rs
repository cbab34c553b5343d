pub mod common;
pub mod duration;
pub mod entities;
pub mod item;
pub mod message;
pub mod monster;
pub mod player;

pub use common::{EntityId, Position, SpellId, Tick};
pub use duration::{AttributeKind, Attributes, DurationKind, Durations};
pub use entities::EntitiesState;
pub use item::{FloorItem, FloorItemKind};
pub use message::{Message, MessageChannel, MessageLog};
pub use monster::{Genus, Habitat, MonsterFlags, MonsterState};
pub use player::{God, PlayerState, Transformation};
