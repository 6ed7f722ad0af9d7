//! Enemy bestiary.
//!
//! Templates are static; [`EnemyTemplate::spawn`] produces a fresh instance at
//! full health with its loot resolved from the item catalog.

use crate::items::get_item;
use crate::world::{Enemy, Gauge};

/// Static description of an enemy type.
#[derive(Debug, Clone, Copy)]
pub struct EnemyTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub max_health: i32,
    pub damage: i32,
    pub defense: i32,
    pub experience: u32,
    /// Item ids dropped on defeat.
    pub loot: &'static [&'static str],
}

impl EnemyTemplate {
    /// Instantiate the template for a new encounter.
    pub fn spawn(&self) -> Enemy {
        Enemy {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            health: Gauge::new(self.max_health),
            damage: self.damage,
            defense: self.defense,
            experience: self.experience,
            loot: self.loot.iter().filter_map(|id| get_item(id)).collect(),
        }
    }
}

/// Look up an enemy template by id.
pub fn get_enemy(id: &str) -> Option<&'static EnemyTemplate> {
    ENEMIES.iter().find(|e| e.id == id)
}

/// Spawn an enemy by id.
pub fn spawn_enemy(id: &str) -> Option<Enemy> {
    get_enemy(id).map(EnemyTemplate::spawn)
}

pub static ENEMIES: &[EnemyTemplate] = &[
    EnemyTemplate {
        id: "radroach",
        name: "Radcucaracha",
        description: "Una cucaracha del tamaño de un perro, con el caparazón brillando por la radiación.",
        max_health: 20,
        damage: 5,
        defense: 1,
        experience: 15,
        loot: &[],
    },
    EnemyTemplate {
        id: "plague_rat",
        name: "Rata de la Plaga",
        description: "Una rata hinchada y sin pelo. Sus ojos lechosos no ven, pero su olfato nunca falla.",
        max_health: 15,
        damage: 6,
        defense: 0,
        experience: 12,
        loot: &["scrap_metal"],
    },
    EnemyTemplate {
        id: "ghoul",
        name: "Necrófago",
        description: "Un humano que la radiación no terminó de matar. La piel le cuelga como papel mojado.",
        max_health: 45,
        damage: 10,
        defense: 3,
        experience: 35,
        loot: &["antibiotics"],
    },
    EnemyTemplate {
        id: "feral_human",
        name: "Humano Salvaje",
        description: "Un superviviente que perdió la razón hace mucho tiempo. Gruñe palabras que ya no significan nada.",
        max_health: 40,
        damage: 9,
        defense: 2,
        experience: 30,
        loot: &["knife"],
    },
    EnemyTemplate {
        id: "mutant_dog",
        name: "Perro Mutante",
        description: "Dos cabezas, una sola hambre. Sus costillas asoman bajo una piel llena de llagas.",
        max_health: 35,
        damage: 11,
        defense: 2,
        experience: 30,
        loot: &[],
    },
    EnemyTemplate {
        id: "shadow_lurker",
        name: "Acechador de las Sombras",
        description: "Una silueta alargada que se desliza entre los troncos muertos sin hacer ruido.",
        max_health: 50,
        damage: 13,
        defense: 4,
        experience: 45,
        loot: &["energy_drink"],
    },
    EnemyTemplate {
        id: "bone_collector",
        name: "Coleccionista de Huesos",
        description: "Lleva un collar de falanges y una bolsa que tintinea. No quieres saber qué contiene.",
        max_health: 55,
        damage: 12,
        defense: 5,
        experience: 50,
        loot: &["leather_jacket"],
    },
    EnemyTemplate {
        id: "raider",
        name: "Saqueador",
        description: "Armado hasta los dientes con chatarra afilada. Quiere tu equipo y no piensa pedirlo por favor.",
        max_health: 50,
        damage: 12,
        defense: 5,
        experience: 45,
        loot: &["pipe", "medkit"],
    },
    EnemyTemplate {
        id: "scavenger_bot",
        name: "Robot Recolector",
        description: "Una máquina de limpieza reprogramada por nadie. Sus pinzas recogen todo lo que se mueve.",
        max_health: 60,
        damage: 10,
        defense: 8,
        experience: 50,
        loot: &["scrap_metal", "scrap_metal"],
    },
    EnemyTemplate {
        id: "rust_golem",
        name: "Gólem de Óxido",
        description: "Un amasijo de coches fundidos que camina. Cada paso suena como un accidente.",
        max_health: 90,
        damage: 15,
        defense: 10,
        experience: 80,
        loot: &["scrap_metal", "armor_vest"],
    },
    EnemyTemplate {
        id: "toxic_slug",
        name: "Babosa Tóxica",
        description: "Deja un rastro humeante sobre el barro. El aire a su alrededor pica en los ojos.",
        max_health: 30,
        damage: 8,
        defense: 1,
        experience: 20,
        loot: &[],
    },
    EnemyTemplate {
        id: "waste_spider",
        name: "Araña del Vertedero",
        description: "Ocho patas, cada una del largo de un brazo. Teje redes con alambre de espino.",
        max_health: 40,
        damage: 12,
        defense: 3,
        experience: 35,
        loot: &["antibiotics"],
    },
    EnemyTemplate {
        id: "acid_spitter",
        name: "Escupidor de Ácido",
        description: "Una criatura bulbosa que escupe chorros verdes capaces de derretir el metal.",
        max_health: 45,
        damage: 14,
        defense: 2,
        experience: 40,
        loot: &["energy_drink"],
    },
    EnemyTemplate {
        id: "cyber_wraith",
        name: "Espectro Cibernético",
        description: "Un soldado con implantes que siguen funcionando aunque su dueño murió hace años.",
        max_health: 70,
        damage: 16,
        defense: 8,
        experience: 70,
        loot: &["rifle"],
    },
    EnemyTemplate {
        id: "death_crawler",
        name: "Reptante Mortal",
        description: "Un ciempiés blindado que sale de entre los restos del fuselaje.",
        max_health: 65,
        damage: 15,
        defense: 7,
        experience: 65,
        loot: &["medkit"],
    },
    EnemyTemplate {
        id: "blood_hound",
        name: "Sabueso de Sangre",
        description: "Sigue el olor de tus heridas desde kilómetros. Nunca caza solo, pero hoy sí.",
        max_health: 55,
        damage: 14,
        defense: 4,
        experience: 50,
        loot: &[],
    },
    EnemyTemplate {
        id: "nightmare_spawn",
        name: "Engendro de Pesadilla",
        description: "Algo que escapó de un tanque de laboratorio. No tiene forma fija ni piedad.",
        max_health: 80,
        damage: 18,
        defense: 6,
        experience: 85,
        loot: &["antibiotics", "energy_drink"],
    },
    EnemyTemplate {
        id: "void_stalker",
        name: "Acosador del Vacío",
        description: "Cuando lo miras directamente desaparece. Cuando dejas de mirarlo, está más cerca.",
        max_health: 75,
        damage: 17,
        defense: 7,
        experience: 80,
        loot: &["leather_jacket"],
    },
    EnemyTemplate {
        id: "ash_walker",
        name: "Caminante de Ceniza",
        description: "Un cuerpo cubierto de ceniza endurecida que avanza sin prisa y sin pausa.",
        max_health: 50,
        damage: 11,
        defense: 6,
        experience: 45,
        loot: &["backpack"],
    },
    EnemyTemplate {
        id: "metal_eater",
        name: "Devorador de Metal",
        description: "Sus mandíbulas trituran acero como si fuera pan. Tu arma le parece un aperitivo.",
        max_health: 100,
        damage: 20,
        defense: 12,
        experience: 100,
        loot: &["scrap_metal", "rifle", "medkit"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::item_ids;

    #[test]
    fn test_spawn_at_full_health() {
        let ghoul = spawn_enemy("ghoul").unwrap();
        assert_eq!(ghoul.health.current, ghoul.health.maximum);
        assert_eq!(ghoul.name, "Necrófago");
        assert_eq!(ghoul.loot.len(), 1);
    }

    #[test]
    fn test_unknown_enemy() {
        assert!(spawn_enemy("dragon").is_none());
    }

    #[test]
    fn test_loot_ids_exist() {
        let ids: Vec<_> = item_ids().collect();
        for enemy in ENEMIES {
            for loot in enemy.loot {
                assert!(ids.contains(loot), "{} drops unknown item {loot}", enemy.id);
            }
        }
    }
}
