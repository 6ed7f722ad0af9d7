//! Narrative text: the opening crawl, the survivor's diary, the command
//! reference and the fixed death/restart sequences.

use crate::world::Archetype;

/// Shown before character creation.
pub const INTRODUCTION: &[&str] = &[
    "=== EL YERMO ETERNO ===",
    "",
    "El mundo que conocías ya no existe.",
    "",
    "Hace quince años, las sirenas sonaron por última vez. Los misiles surcaron el cielo como estrellas fugaces de muerte, llevando consigo el fin de la civilización. Las ciudades se convirtieron en cráteres de vidrio fundido, los bosques en cenizas, y la humanidad en una sombra desesperada de lo que una vez fue.",
    "",
    "Has sobrevivido en las profundidades de un búnker subterráneo, alimentándote de latas oxidadas y agua reciclada. Pero los recursos se agotan, los sistemas fallan, y el silencio eterno del exterior ya no puede ser ignorado.",
    "",
    "Hoy, después de años de aislamiento, la puerta del búnker se abre por primera vez.",
    "",
    "El aire que inhalas está cargado de ceniza y muerte. El cielo es un manto gris perpetuo que nunca conocerá el sol. Este es el yermo que ahora llamas hogar.",
    "",
    "Tu supervivencia depende de cada paso que des, cada decisión que tomes, cada respiración que logres robar a este mundo moribundo.",
    "",
    "Bienvenido al infierno en la Tierra.",
    "Bienvenido al Yermo Eterno.",
];

/// Opening log of a freshly created survivor.
pub fn survivor_diary(name: &str, archetype: Archetype) -> Vec<String> {
    let data = archetype.data();
    vec![
        "=== DIARIO DEL SUPERVIVIENTE ===".to_string(),
        String::new(),
        format!("Nombre: {name}"),
        format!("Clase: {}", data.name),
        data.description.to_string(),
        String::new(),
        "El búnker que ha sido tu hogar durante años finalmente se está quedando sin recursos.".to_string(),
        "Es hora de aventurarse al exterior y enfrentar los horrores del mundo post-apocalíptico.".to_string(),
        "Tu supervivencia depende de cada decisión que tomes.".to_string(),
        String::new(),
        "Escribe '/help' para ver los comandos disponibles.".to_string(),
        String::new(),
    ]
}

/// Logged when the player's health reaches zero.
pub const DEATH: &[&str] = &[
    "",
    "💀 HAS MUERTO",
    "",
    "El yermo ha reclamado otra víctima...",
    "Tu historia termina aquí, pero otros continuarán la lucha.",
    "",
    "🔄 Escribe '/reiniciar' para comenzar una nueva partida.",
];

/// Reported to the caller when a game is restarted.
pub const RESTART: &[&str] = &[
    "🔄 Reiniciando el juego...",
    "✅ El juego ha sido reiniciado. ¡Comienza una nueva aventura!",
];

/// The command reference printed by `/ayuda`.
pub const HELP: &[&str] = &[
    "=== COMANDOS DISPONIBLES ===",
    "",
    "🚶 MOVIMIENTO:",
    "  /ir [dirección] - Moverse a una dirección (norte, sur, este, oeste)",
    "  También puedes usar: /norte, /sur, /este, /oeste (o n, s, e, o)",
    "",
    "⚔️ COMBATE:",
    "  /atacar - Atacar al enemigo actual",
    "  /huir - Intentar escapar del combate",
    "",
    "🎒 OBJETOS:",
    "  /inventario - Ver tu inventario",
    "  /usar [objeto] - Usar un objeto del inventario",
    "  /equipar [arma/armadura] - Equipar un objeto",
    "",
    "👁️ EXPLORACIÓN:",
    "  /mirar - Examinar tu ubicación actual",
    "  /buscar - Buscar objetos en el área",
    "",
    "📊 INFORMACIÓN:",
    "  /stats - Ver tus estadísticas",
    "  /ayuda - Mostrar esta ayuda",
    "",
    "⚙️ SISTEMA:",
    "  /reiniciar - Reiniciar el juego",
    "",
    "💡 CONSEJOS:",
    "• Puedes omitir el '/' al escribir comandos",
    "• Los comandos no distinguen mayúsculas de minúsculas",
    "• Explora cada área completamente antes de avanzar",
    "• Guarda recursos para combates difíciles",
    "• La muerte es permanente - ¡ten cuidado!",
];
