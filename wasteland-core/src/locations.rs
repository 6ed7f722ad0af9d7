//! The wasteland map.
//!
//! Ten locations connected by compass exits. The table is cloned into each
//! [`GameState`](crate::state::GameState) so visited flags can change per game.

use crate::world::{Direction, Location};
use std::collections::BTreeMap;

use Direction::{East, North, South, West};

/// A fresh copy of the location table, keyed by id, with nothing visited.
pub fn initial_locations() -> BTreeMap<String, Location> {
    LOCATIONS
        .iter()
        .map(|l| (l.id.clone(), l.clone()))
        .collect()
}

lazy_static::lazy_static! {
    /// Every location, in map order.
    pub static ref LOCATIONS: Vec<Location> = vec![
        Location::new("bunker_entrance", "Entrada del Búnker")
            .with_description("Emerges de la oscuridad del búnker subterráneo donde has pasado los últimos años. El aire exterior es espeso y cargado de ceniza. Las estructuras de hormigón a tu alrededor están agrietadas y cubiertas de óxido. Esta era tu prisión... y tu salvación.")
            .with_exit(North, "wasteland_outskirts")
            .with_exit(East, "abandoned_checkpoint")
            .with_items(&["medkit"]),
        Location::new("wasteland_outskirts", "Perímetro del Yermo")
            .with_description("Un paisaje desolado se extiende hasta el horizonte. Arboles carbonizados se alzan como dedos acusadores hacia un cielo perpetuamente gris. El viento arrastra ceniza y el eco de una civilización muerta. Cada paso resuena con la promesa de peligro.")
            .with_exit(South, "bunker_entrance")
            .with_exit(North, "dead_forest")
            .with_exit(East, "ruined_highway")
            .with_exit(West, "toxic_marsh")
            .with_enemies(&["radroach", "plague_rat"])
            .with_items(&["scrap_metal"]),
        Location::new("abandoned_checkpoint", "Puesto de Control Abandonado")
            .with_description("Los restos de un puesto militar yacen en ruinas. Sacos de arena podridos forman barricadas inútiles. Un tanque volcado sirve como tumba de metal para sus ocupantes. Las marcas de balas en las paredes cuentan la historia de una última resistencia desesperada.")
            .with_exit(West, "bunker_entrance")
            .with_exit(North, "ruined_highway")
            .with_enemies(&["ghoul", "feral_human"])
            .with_items(&["rifle", "armor_vest"]),
        Location::new("dead_forest", "Bosque Muerto")
            .with_description("Un cementerio de árboles se extiende en todas direcciones. Las ramas desnudas se entrelazan formando una red de pesadilla. El suelo está cubierto de hojas negras que crujen como huesos quebrados. Algo se mueve entre las sombras.")
            .with_exit(South, "wasteland_outskirts")
            .with_exit(East, "crashed_aircraft")
            .with_exit(West, "hunting_grounds")
            .with_enemies(&["mutant_dog", "shadow_lurker", "bone_collector"])
            .with_items(&["leather_jacket", "energy_drink"]),
        Location::new("ruined_highway", "Autopista en Ruinas")
            .with_description("Una carretera fracturada se extiende como una cicatriz en la tierra. Vehículos oxidados forman un cementerio de metal. Algunos coches aún tienen esqueletos al volante, eternos pasajeros en un viaje que nunca terminó. El asfalto está agrietado por raíces mutantes.")
            .with_exit(West, "wasteland_outskirts")
            .with_exit(South, "abandoned_checkpoint")
            .with_exit(North, "crashed_aircraft")
            .with_exit(East, "scavenger_camp")
            .with_enemies(&["raider", "scavenger_bot", "rust_golem"])
            .with_items(&["pipe", "flashlight", "scrap_metal"]),
        Location::new("toxic_marsh", "Pantano Tóxico")
            .with_description("Un lodazal verde y burbujeante donde la vida se ha transformado en algo antinatural. Los vapores que se elevan del agua queman los pulmones. Criaturas extrañas se agitan bajo la superficie viscosa. Este lugar es una herida infectada en la carne del mundo.")
            .with_exit(East, "wasteland_outskirts")
            .with_exit(North, "hunting_grounds")
            .with_enemies(&["toxic_slug", "waste_spider", "acid_spitter"])
            .with_items(&["antibiotics", "scrap_metal"]),
        Location::new("crashed_aircraft", "Aeronave Estrellada")
            .with_description("Los restos de un avión militar yacen incrustados en el suelo como una herida cicatrizada. El fuselaje está partido por la mitad, revelando asientos vacíos y equipo militar disperso. La cabina del piloto es una tumba de vidrio y metal retorcido.")
            .with_exit(West, "dead_forest")
            .with_exit(South, "ruined_highway")
            .with_exit(East, "research_facility")
            .with_enemies(&["cyber_wraith", "death_crawler"])
            .with_items(&["rifle", "medkit", "energy_drink"]),
        Location::new("hunting_grounds", "Terreno de Caza")
            .with_description("Un área donde los depredadores acechan a sus presas. Huesos blanqueados marcan los sitios de cacerías pasadas. El aire está impregnado del olor a muerte y descomposición. Aquí, la cadena alimentaria se ha vuelto salvaje y despiadada.")
            .with_exit(East, "dead_forest")
            .with_exit(South, "toxic_marsh")
            .with_enemies(&["blood_hound", "nightmare_spawn", "void_stalker"])
            .with_items(&["knife", "leather_jacket"]),
        Location::new("scavenger_camp", "Campamento de Carroñeros")
            .with_description("Los restos de un asentamiento temporal. Tiendas hechas de lona y metal corrugado se agrupan alrededor de un hogar de fuego frío. Los habitantes huyeron... o algo peor. Objetos personales yacen esparcidos, contando historias de vidas interrumpidas.")
            .with_exit(West, "ruined_highway")
            .with_exit(North, "research_facility")
            .with_enemies(&["feral_human", "ash_walker"])
            .with_items(&["backpack", "medkit", "scrap_metal"]),
        Location::new("research_facility", "Instalación de Investigación")
            .with_description("Un complejo científico en ruinas donde se gestó la destrucción. Laboratorios abandonados contienen experimentos a medio terminar. Contenedores rotos liberaron horrores que la ciencia nunca debió crear. Los pasillos resuenan con los ecos de descubrimientos malditos.")
            .with_exit(West, "crashed_aircraft")
            .with_exit(South, "scavenger_camp")
            .with_enemies(&["nightmare_spawn", "cyber_wraith", "metal_eater"])
            .with_items(&["antibiotics", "scalpel", "energy_drink", "scrap_metal"]),
    ];
}
