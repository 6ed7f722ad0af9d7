//! Wasteland world types.
//!
//! Survivors, items, enemies and locations. These are plain data with small
//! invariant-keeping helpers; decision logic lives in the engine.

use crate::items;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Directions
// ============================================================================

/// Compass direction used as an exit key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "norte")]
    North,
    #[serde(rename = "sur")]
    South,
    #[serde(rename = "este")]
    East,
    #[serde(rename = "oeste")]
    West,
}

impl Direction {
    /// Resolve a direction token: full name or single-letter abbreviation.
    pub fn parse(token: &str) -> Option<Direction> {
        match token {
            "norte" | "n" | "north" => Some(Direction::North),
            "sur" | "s" | "south" => Some(Direction::South),
            "este" | "e" | "east" => Some(Direction::East),
            "oeste" | "o" | "west" | "w" => Some(Direction::West),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Direction::North => "norte",
            Direction::South => "sur",
            Direction::East => "este",
            Direction::West => "oeste",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Survivor Archetypes and Stats
// ============================================================================

/// Survivor archetype chosen at character creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Scavenger,
    Soldier,
    Medic,
}

impl Archetype {
    /// Stable key, as stored in saves.
    pub fn key(&self) -> &'static str {
        match self {
            Archetype::Scavenger => "scavenger",
            Archetype::Soldier => "soldier",
            Archetype::Medic => "medic",
        }
    }

    pub fn all() -> [Archetype; 3] {
        [Archetype::Scavenger, Archetype::Soldier, Archetype::Medic]
    }

    /// Parse an archetype from its key or its display name.
    pub fn parse(s: &str) -> Option<Archetype> {
        match s.trim().to_lowercase().as_str() {
            "scavenger" | "carroñero" | "carronero" => Some(Archetype::Scavenger),
            "soldier" | "soldado" | "ex-militar" | "exmilitar" => Some(Archetype::Soldier),
            "medic" | "médico" | "medico" => Some(Archetype::Medic),
            _ => None,
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data().name)
    }
}

/// The four survivor attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub strength: i32,
    pub agility: i32,
    pub intelligence: i32,
    pub endurance: i32,
}

impl Stats {
    pub fn new(strength: i32, agility: i32, intelligence: i32, endurance: i32) -> Self {
        Self {
            strength,
            agility,
            intelligence,
            endurance,
        }
    }

    /// Raise every attribute by the same amount.
    pub fn raise_all(&mut self, amount: i32) {
        self.strength += amount;
        self.agility += amount;
        self.intelligence += amount;
        self.endurance += amount;
    }
}

// ============================================================================
// Gauges (health, stamina)
// ============================================================================

/// A bounded resource. `current` always stays within `[0, maximum]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gauge {
    pub current: i32,
    pub maximum: i32,
}

impl Gauge {
    pub fn new(maximum: i32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    /// Remove up to `amount`, never dropping below zero. Returns the amount removed.
    pub fn drain(&mut self, amount: i32) -> i32 {
        let old = self.current;
        self.current = (self.current - amount.max(0)).max(0);
        old - self.current
    }

    /// Add up to `amount`, never exceeding the maximum. Returns the amount restored.
    pub fn restore(&mut self, amount: i32) -> i32 {
        let old = self.current;
        self.current = (self.current + amount.max(0)).min(self.maximum);
        self.current - old
    }

    /// Raise both the maximum and the current value.
    pub fn grow(&mut self, amount: i32) {
        self.maximum += amount;
        self.current = (self.current + amount).clamp(0, self.maximum);
    }

    pub fn is_empty(&self) -> bool {
        self.current <= 0
    }

    /// Whether `current` lies within `[0, maximum]`.
    pub fn in_bounds(&self) -> bool {
        (0..=self.maximum).contains(&self.current)
    }
}

impl fmt::Display for Gauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.maximum)
    }
}

// ============================================================================
// Items
// ============================================================================

/// Wear counter on weapons and armor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durability {
    pub current: i32,
    pub maximum: i32,
}

/// State of a piece of equipment after one use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wear {
    Intact,
    Worn,
    Broken,
}

impl Durability {
    pub fn new(current: i32, maximum: i32) -> Self {
        Self { current, maximum }
    }

    /// Spend one point of durability. `worn_ratio` is the fraction of the
    /// maximum at or below which the item counts as badly damaged.
    pub fn wear(&mut self, worn_ratio: f64) -> Wear {
        self.current = (self.current - 1).max(0);
        if self.current <= 0 {
            Wear::Broken
        } else if f64::from(self.current) <= f64::from(self.maximum) * worn_ratio {
            Wear::Worn
        } else {
            Wear::Intact
        }
    }
}

impl fmt::Display for Durability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.maximum)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsumableEffect {
    Heal,
    Stamina,
    Buff,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemKind {
    Weapon {
        damage: i32,
        durability: Durability,
    },
    Armor {
        defense: i32,
        durability: Durability,
    },
    Consumable {
        effect: ConsumableEffect,
        potency: i32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        quantity: Option<u32>,
    },
    Misc {
        #[serde(default)]
        stackable: bool,
    },
}

/// An item, identified by a stable catalog id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub value: u32,
    pub kind: ItemKind,
}

impl Item {
    fn base(id: &str, name: &str, kind: ItemKind) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            value: 0,
            kind,
        }
    }

    /// A weapon at full durability (100/100).
    pub fn weapon(id: &str, name: &str, damage: i32) -> Self {
        Self::base(
            id,
            name,
            ItemKind::Weapon {
                damage,
                durability: Durability::new(100, 100),
            },
        )
    }

    /// Armor at full durability (100/100).
    pub fn armor(id: &str, name: &str, defense: i32) -> Self {
        Self::base(
            id,
            name,
            ItemKind::Armor {
                defense,
                durability: Durability::new(100, 100),
            },
        )
    }

    pub fn consumable(id: &str, name: &str, effect: ConsumableEffect, potency: i32) -> Self {
        Self::base(
            id,
            name,
            ItemKind::Consumable {
                effect,
                potency,
                quantity: None,
            },
        )
    }

    pub fn misc(id: &str, name: &str) -> Self {
        Self::base(id, name, ItemKind::Misc { stackable: false })
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_value(mut self, value: u32) -> Self {
        self.value = value;
        self
    }

    /// Set current/max durability. No effect on items without durability.
    pub fn with_durability(mut self, current: i32, maximum: i32) -> Self {
        if let Some(durability) = self.durability_mut() {
            *durability = Durability::new(current, maximum);
        }
        self
    }

    /// Mark the item as stackable, with an initial quantity for consumables.
    pub fn stacked(mut self, count: u32) -> Self {
        match &mut self.kind {
            ItemKind::Consumable { quantity, .. } => *quantity = Some(count),
            ItemKind::Misc { stackable } => *stackable = true,
            _ => {}
        }
        self
    }

    pub fn quantity(&self) -> Option<u32> {
        match self.kind {
            ItemKind::Consumable { quantity, .. } => quantity,
            _ => None,
        }
    }

    pub fn durability(&self) -> Option<Durability> {
        match self.kind {
            ItemKind::Weapon { durability, .. } | ItemKind::Armor { durability, .. } => {
                Some(durability)
            }
            _ => None,
        }
    }

    pub fn durability_mut(&mut self) -> Option<&mut Durability> {
        match &mut self.kind {
            ItemKind::Weapon { durability, .. } | ItemKind::Armor { durability, .. } => {
                Some(durability)
            }
            _ => None,
        }
    }

    /// Weapon damage bonus, if this is a weapon.
    pub fn damage(&self) -> Option<i32> {
        match self.kind {
            ItemKind::Weapon { damage, .. } => Some(damage),
            _ => None,
        }
    }

    /// Armor defense, if this is armor.
    pub fn defense(&self) -> Option<i32> {
        match self.kind {
            ItemKind::Armor { defense, .. } => Some(defense),
            _ => None,
        }
    }

    /// Case-insensitive substring match against the display name.
    pub fn name_matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

// ============================================================================
// Inventory and Equipment
// ============================================================================

/// Handle to one concrete inventory entry. Unique per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemHandle(pub u32);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub handle: ItemHandle,
    pub item: Item,
}

/// Ordered list of carried items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    entries: Vec<InventoryEntry>,
    next_handle: u32,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item and return its handle.
    pub fn add(&mut self, item: Item) -> ItemHandle {
        let handle = ItemHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push(InventoryEntry { handle, item });
        handle
    }

    pub fn get(&self, handle: ItemHandle) -> Option<&Item> {
        self.entries
            .iter()
            .find(|e| e.handle == handle)
            .map(|e| &e.item)
    }

    pub fn get_mut(&mut self, handle: ItemHandle) -> Option<&mut Item> {
        self.entries
            .iter_mut()
            .find(|e| e.handle == handle)
            .map(|e| &mut e.item)
    }

    pub fn remove(&mut self, handle: ItemHandle) -> Option<Item> {
        let pos = self.entries.iter().position(|e| e.handle == handle)?;
        Some(self.entries.remove(pos).item)
    }

    /// First entry whose name contains `needle`, ignoring case.
    pub fn find_by_name(&self, needle: &str) -> Option<ItemHandle> {
        self.entries
            .iter()
            .find(|e| e.item.name_matches(needle))
            .map(|e| e.handle)
    }

    /// Number of entries carrying the given catalog id.
    pub fn count_of(&self, id: &str) -> usize {
        self.entries.iter().filter(|e| e.item.id == id).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Worn equipment; each slot refers to an inventory entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<ItemHandle>,
    pub armor: Option<ItemHandle>,
}

/// Which equipment slot an item occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Weapon,
    Armor,
}

// ============================================================================
// Player
// ============================================================================

pub const STARTING_LOCATION: &str = "bunker_entrance";
pub const STARTING_HEALTH: i32 = 100;
pub const STARTING_STAMINA: i32 = 100;
pub const FIRST_LEVEL_THRESHOLD: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub archetype: Archetype,
    pub level: u32,
    pub experience: u32,
    pub experience_to_next: u32,
    pub health: Gauge,
    pub stamina: Gauge,
    pub stats: Stats,
    pub inventory: Inventory,
    pub equipment: Equipment,
    pub location: String,
}

/// Summary of a level gained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub new_level: u32,
    pub health_bonus: i32,
    pub stat_bonus: i32,
}

impl Player {
    /// Create a level-1 survivor with the archetype's stats and starting kit.
    pub fn new(name: impl Into<String>, archetype: Archetype) -> Self {
        let data = archetype.data();
        let mut inventory = Inventory::new();
        for item in data.starting_items.iter().filter_map(|id| items::get_item(id)) {
            inventory.add(item);
        }

        Self {
            name: name.into(),
            archetype,
            level: 1,
            experience: 0,
            experience_to_next: FIRST_LEVEL_THRESHOLD,
            health: Gauge::new(STARTING_HEALTH),
            stamina: Gauge::new(STARTING_STAMINA),
            stats: data.stats,
            inventory,
            equipment: Equipment::default(),
            location: STARTING_LOCATION.to_string(),
        }
    }

    pub fn equipped(&self, slot: Slot) -> Option<&Item> {
        let handle = match slot {
            Slot::Weapon => self.equipment.weapon,
            Slot::Armor => self.equipment.armor,
        }?;
        self.inventory.get(handle)
    }

    pub fn equipped_weapon(&self) -> Option<&Item> {
        self.equipped(Slot::Weapon)
    }

    pub fn equipped_armor(&self) -> Option<&Item> {
        self.equipped(Slot::Armor)
    }

    /// Destroy the item in a slot: clear the slot and drop the entry.
    pub fn destroy_equipped(&mut self, slot: Slot) -> Option<Item> {
        let handle = match slot {
            Slot::Weapon => self.equipment.weapon.take(),
            Slot::Armor => self.equipment.armor.take(),
        }?;
        self.inventory.remove(handle)
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_empty()
    }

    /// Add experience and check once for a level-up.
    ///
    /// A single check per gain: a reward worth several levels still only
    /// grants one, and the overflow carries into the next threshold.
    pub fn gain_experience(
        &mut self,
        amount: u32,
        health_bonus: i32,
        stat_bonus: i32,
    ) -> Option<LevelUp> {
        self.experience += amount;
        if self.experience < self.experience_to_next {
            return None;
        }

        self.level += 1;
        self.experience -= self.experience_to_next;
        self.experience_to_next = self.level * 100;
        self.health.grow(health_bonus);
        self.stats.raise_all(stat_bonus);

        Some(LevelUp {
            new_level: self.level,
            health_bonus,
            stat_bonus,
        })
    }
}

// ============================================================================
// Enemies
// ============================================================================

/// A live enemy instance for one encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: String,
    pub name: String,
    pub description: String,
    pub health: Gauge,
    pub damage: i32,
    pub defense: i32,
    pub experience: u32,
    pub loot: Vec<Item>,
}

// ============================================================================
// Locations
// ============================================================================

/// A node in the location graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub description: String,
    pub exits: BTreeMap<Direction, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enemies: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
    #[serde(default)]
    pub visited: bool,
}

impl Location {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            exits: BTreeMap::new(),
            enemies: Vec::new(),
            items: Vec::new(),
            visited: false,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_exit(mut self, direction: Direction, to: &str) -> Self {
        self.exits.insert(direction, to.to_string());
        self
    }

    pub fn with_enemies(mut self, ids: &[&str]) -> Self {
        self.enemies = ids.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_items(mut self, ids: &[&str]) -> Self {
        self.items = ids.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn exit(&self, direction: Direction) -> Option<&str> {
        self.exits.get(&direction).map(String::as_str)
    }

    /// Exit names joined for display, e.g. "norte, este".
    pub fn exit_list(&self) -> String {
        self.exits
            .keys()
            .map(|d| d.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
