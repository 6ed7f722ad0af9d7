//! Survivor archetype data for character creation.
//!
//! Starting attributes, kit and flavor text for the three archetypes.

use crate::world::{Archetype, Stats};

/// Archetype-specific data for character creation.
pub struct SurvivorData {
    /// Display name.
    pub name: &'static str,
    /// One-paragraph description shown on the selection screen.
    pub description: &'static str,
    /// Starting attributes.
    pub stats: Stats,
    /// Catalog ids of the starting inventory, in order.
    pub starting_items: &'static [&'static str],
    /// Backstory lines shown once the archetype is chosen.
    pub backstory: &'static [&'static str],
}

impl Archetype {
    /// Get archetype data for character creation.
    pub fn data(&self) -> SurvivorData {
        match self {
            Archetype::Scavenger => SurvivorData {
                name: "Carroñero",
                description: "Un superviviente astuto que ha aprendido a encontrar recursos en los lugares más desolados. Especializado en supervivencia y exploración.",
                stats: Stats::new(6, 9, 8, 7),
                starting_items: &["knife", "backpack", "flashlight"],
                backstory: &[
                    "Antes del colapso, eras un mecánico en una pequeña ciudad rural.",
                    "Cuando las bombas cayeron, tu conocimiento de máquinas y chatarra te mantuvo vivo.",
                    "Has aprendido que en este nuevo mundo, todo tiene valor... si sabes dónde mirar.",
                    "",
                    "Tu pasado te ha enseñado que la supervivencia requiere ingenio, no fuerza bruta.",
                    "Cada pieza de metal, cada componente electrónico, cada gota de combustible...",
                    "Todo puede ser la diferencia entre la vida y la muerte.",
                ],
            },
            Archetype::Soldier => SurvivorData {
                name: "Ex-Militar",
                description: "Un veterano de las guerras que precedieron al colapso. Conoce el combate y las armas, pero lucha contra los demonios de su pasado.",
                stats: Stats::new(9, 7, 6, 8),
                starting_items: &["rifle", "armor_vest", "medkit"],
                backstory: &[
                    "Eras sargento en las fuerzas especiales cuando comenzó la guerra final.",
                    "Viste cómo tus camaradas morían uno por uno, hasta que solo quedaste tú.",
                    "Tu entrenamiento te mantiene vivo, pero los fantasmas de los caídos te atormentan.",
                    "",
                    "Conoces cada tipo de arma, cada táctica de combate, cada forma de matar.",
                    "Pero en las noches silenciosas, cuando cierras los ojos,",
                    "aún puedes oír los gritos de los que no pudiste salvar.",
                ],
            },
            Archetype::Medic => SurvivorData {
                name: "Médico de Campo",
                description: "Un sanador que ha visto demasiada muerte. Su conocimiento médico es invaluable, pero su salud mental está fragmentada.",
                stats: Stats::new(5, 6, 10, 9),
                starting_items: &["medkit", "scalpel", "antibiotics"],
                backstory: &[
                    "Eras doctora en un hospital metropolitano cuando el mundo se desplomó.",
                    "Intentaste salvar a todos los que pudiste mientras la radiación los consumía lentamente.",
                    "Tus manos han visto más muerte de la que cualquier humano debería presenciar.",
                    "",
                    "Tu conocimiento médico es invaluable en este mundo herido,",
                    "pero cada vida que salvas te recuerda a las miles que perdiste.",
                    "La pregunta que te persigue es simple: ¿vale la pena seguir curando en un mundo condenado?",
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::get_item;

    #[test]
    fn test_all_archetypes_have_data() {
        for archetype in Archetype::all() {
            let data = archetype.data();
            assert!(!data.name.is_empty());
            assert_eq!(data.starting_items.len(), 3);
            assert!(!data.backstory.is_empty());
        }
    }

    #[test]
    fn test_starting_items_exist() {
        for archetype in Archetype::all() {
            for id in archetype.data().starting_items {
                assert!(get_item(id).is_some(), "missing starting item {id}");
            }
        }
    }

    #[test]
    fn test_soldier_data() {
        let data = Archetype::Soldier.data();
        assert_eq!(data.name, "Ex-Militar");
        assert_eq!(data.stats.strength, 9);
        assert_eq!(data.starting_items, &["rifle", "armor_vest", "medkit"]);
    }
}
