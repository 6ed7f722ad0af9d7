//! The game engine.
//!
//! [`GameEngine::execute`] applies one parsed [`Command`] to a [`GameState`].
//! Every outcome, including every rejection, is reported as log lines; the
//! engine never returns an error.

use crate::command::{Action, Command, Target};
use crate::dice::Dice;
use crate::enemies::spawn_enemy;
use crate::items::get_item;
use crate::rules::{
    enemy_attack_damage, player_attack_damage, Rules, ENEMY_DAMAGE_SPREAD, PLAYER_DAMAGE_SPREAD,
};
use crate::state::GameState;
use crate::story;
use crate::world::{ConsumableEffect, Enemy, Item, ItemKind, Player, Slot, Wear};
use tracing::{debug, warn};

/// Logged when the survivor stands somewhere the map does not know.
pub const UNKNOWN_LOCATION: &str = "❌ Error: No se reconoce tu ubicación actual.";

/// What a command did to the state as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command ran against the current game.
    Applied,
    /// The game was wiped back to the empty state.
    Restarted,
}

/// Applies commands to a game state.
pub struct GameEngine<D: Dice> {
    dice: D,
    rules: Rules,
}

impl<D: Dice> GameEngine<D> {
    pub fn new(dice: D) -> Self {
        Self {
            dice,
            rules: Rules::default(),
        }
    }

    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    pub fn dice_mut(&mut self) -> &mut D {
        &mut self.dice
    }

    /// Apply one command.
    pub fn execute(&mut self, state: &mut GameState, command: &Command) -> Outcome {
        let Some(player) = state.player.as_ref() else {
            state.log("❌ Error: No hay jugador inicializado.");
            return Outcome::Applied;
        };

        debug!(action = %command.action, target = ?command.target, "dispatching command");

        if player.is_dead() && !(command.action.is_read_only() || command.action == Action::Restart)
        {
            state.log("💀 Estás muerto. Escribe '/reiniciar' para comenzar una nueva partida.");
            return Outcome::Applied;
        }

        match command.action {
            Action::Move => self.handle_move(state, command.target.as_ref()),
            Action::Attack => self.handle_attack(state),
            Action::Use => handle_use(state, command.target_text()),
            Action::Equip => handle_equip(state, command.target_text()),
            Action::Look => handle_look(state),
            Action::Inventory => handle_inventory(state),
            Action::Stats => handle_stats(state),
            Action::Flee => self.handle_flee(state),
            Action::Help => state.log_all(story::HELP.iter().copied()),
            Action::Search => self.handle_search(state),
            Action::Restart => {
                state.reset();
                return Outcome::Restarted;
            }
        }

        Outcome::Applied
    }

    // ========================================================================
    // Movement and encounters
    // ========================================================================

    fn handle_move(&mut self, state: &mut GameState, target: Option<&Target>) {
        if state.in_combat {
            state.log("❌ No puedes moverte durante el combate. Usa '/huir' para escapar.");
            return;
        }

        let Some(target) = target else {
            state.log("❓ ¿Hacia dónde quieres ir? Especifica: norte, sur, este, oeste");
            return;
        };

        let Some(here) = state.current_location() else {
            report_unknown_location(state);
            return;
        };
        let destination = target
            .as_direction()
            .and_then(|d| here.exit(d))
            .map(str::to_string);

        let Some(destination) = destination else {
            let exits = here.exit_list();
            state.log(format!("❌ No puedes ir hacia el {target} desde aquí."));
            state.log(format!("Salidas disponibles: {exits}"));
            return;
        };

        let GameState {
            player: Some(player),
            locations,
            game_log,
            ..
        } = state
        else {
            return;
        };
        let Some(location) = locations.get_mut(&destination) else {
            warn!(destination = %destination, "exit leads to an unknown location");
            game_log.push(format!("❌ El camino hacia el {target} está bloqueado."));
            return;
        };

        player.location = destination;
        location.visited = true;
        game_log.push(format!("🚶 Te diriges hacia el {target}..."));
        game_log.push(String::new());
        game_log.push(format!("📍 {}", location.name));
        game_log.push(location.description.clone());

        let spawns = location.enemies.clone();
        self.roll_encounter(state, &spawns);
    }

    fn roll_encounter(&mut self, state: &mut GameState, spawns: &[String]) {
        if spawns.is_empty() || !self.dice.chance(self.rules.encounter_chance) {
            return;
        }
        let Some(enemy) = self.dice.choose(spawns).and_then(|id| spawn_enemy(id)) else {
            return;
        };

        debug!(enemy = %enemy.id, "encounter");
        state.log_all([
            String::new(),
            "⚠️ ¡ENCUENTRO HOSTIL!".to_string(),
            format!("🔥 Un {} aparece ante ti.", enemy.name),
            enemy.description.clone(),
            String::new(),
            "💀 ¡El combate ha comenzado!".to_string(),
            "Usa '/atacar' para luchar o '/huir' para escapar.".to_string(),
        ]);
        state.start_combat(enemy);
    }

    // ========================================================================
    // Combat
    // ========================================================================

    fn handle_attack(&mut self, state: &mut GameState) {
        let GameState {
            player: Some(player),
            current_enemy,
            in_combat,
            game_log: log,
            ..
        } = state
        else {
            return;
        };

        let enemy = match current_enemy.as_mut() {
            Some(enemy) if *in_combat => enemy,
            _ => {
                log.push("❌ No hay enemigos con los que combatir.".to_string());
                return;
            }
        };

        let roll = self.dice.spread(PLAYER_DAMAGE_SPREAD);
        let weapon = player.equipped_weapon().and_then(Item::damage);
        if weapon.is_some() {
            wear_equipment(player, Slot::Weapon, self.rules.worn_ratio, log);
        }
        let damage = player_attack_damage(player.stats.strength, roll, weapon, enemy.defense);
        debug!(roll, damage, enemy = %enemy.id, "player attack");

        enemy.health.drain(damage);
        log.push(format!(
            "⚔️ Atacas al {} causando {damage} puntos de daño.",
            enemy.name
        ));

        if enemy.health.is_empty() {
            let defeated = enemy.clone();
            defeat_enemy(player, defeated, &self.rules, log);
            state.end_combat();
            return;
        }

        log.push(format!("💔 {}: {} HP", enemy.name, enemy.health));

        let taken = self.enemy_strike(player, enemy, log);
        log.push(format!(
            "🩸 El {} te ataca causando {taken} puntos de daño.",
            enemy.name
        ));
        log.push(format!("❤️ Tu salud: {} HP", player.health));

        if player.is_dead() {
            log.extend(story::DEATH.iter().map(|l| l.to_string()));
            state.end_combat();
        }
    }

    /// One enemy blow against the player, mitigated by worn armor.
    fn enemy_strike(&mut self, player: &mut Player, enemy: &Enemy, log: &mut Vec<String>) -> i32 {
        let roll = self.dice.spread(ENEMY_DAMAGE_SPREAD);
        let armor = player.equipped_armor().and_then(Item::defense);
        if armor.is_some() {
            wear_equipment(player, Slot::Armor, self.rules.worn_ratio, log);
        }
        let damage = enemy_attack_damage(enemy.damage, roll, armor);
        debug!(roll, damage, enemy = %enemy.id, "enemy attack");
        player.health.drain(damage)
    }

    fn handle_flee(&mut self, state: &mut GameState) {
        let GameState {
            player: Some(player),
            current_enemy,
            in_combat,
            game_log: log,
            ..
        } = state
        else {
            return;
        };

        if !*in_combat {
            log.push("❌ No estás en combate.".to_string());
            return;
        }

        let chance = self.rules.flee_chance(player.stats.agility);
        if self.dice.chance(chance) {
            log.push("🏃 ¡Logras escapar del combate!".to_string());
            state.end_combat();
            return;
        }

        log.push("❌ No pudiste escapar. El enemigo bloquea tu huida.".to_string());
        let Some(enemy) = current_enemy.as_ref() else {
            return;
        };
        let taken = self.enemy_strike(player, enemy, log);
        log.push(format!(
            "🩸 El {} aprovecha tu intento fallido de huida y te ataca por {taken} puntos de daño.",
            enemy.name
        ));

        if player.is_dead() {
            log.extend(story::DEATH.iter().map(|l| l.to_string()));
            state.end_combat();
        }
    }

    // ========================================================================
    // Exploration
    // ========================================================================

    fn handle_search(&mut self, state: &mut GameState) {
        if state.in_combat {
            state.log("❌ No puedes buscar durante el combate.");
            return;
        }

        let pool = state
            .current_location()
            .map(|l| l.items.clone())
            .unwrap_or_default();
        if pool.is_empty() {
            state.log("🔍 Buscas por el área pero no encuentras nada útil.");
            return;
        }

        if !self.dice.chance(self.rules.search_chance) {
            state.log("🔍 Buscas cuidadosamente pero no encuentras nada de valor.");
            return;
        }

        let Some(item) = self.dice.choose(&pool).and_then(|id| get_item(id)) else {
            state.log("🔍 Buscas por el área pero solo encuentras escombros inútiles.");
            return;
        };

        debug!(item = %item.id, "search found item");
        state.log("🎒 ¡Encuentras algo útil!");
        state.log(format!("  • {}: {}", item.name, item.description));
        if let Some(player) = state.player.as_mut() {
            player.inventory.add(item);
        }
    }
}

fn report_unknown_location(state: &mut GameState) {
    let location = state.player.as_ref().map(|p| p.location.clone());
    warn!(location = ?location, "survivor is at an unknown location");
    state.log(UNKNOWN_LOCATION);
}

/// Spend one point of durability on an equipped item and report wear.
fn wear_equipment(player: &mut Player, slot: Slot, worn_ratio: f64, log: &mut Vec<String>) {
    let handle = match slot {
        Slot::Weapon => player.equipment.weapon,
        Slot::Armor => player.equipment.armor,
    };
    let Some(item) = handle.and_then(|h| player.inventory.get_mut(h)) else {
        return;
    };
    let Some(durability) = item.durability_mut() else {
        return;
    };
    let wear = durability.wear(worn_ratio);
    let name = item.name.clone();

    match wear {
        Wear::Broken => {
            log.push(format!("💥 Tu {name} se ha roto por completo!"));
            player.destroy_equipped(slot);
        }
        Wear::Worn => {
            log.push(format!(
                "⚠️ Tu {name} está muy dañado y podría romperse pronto."
            ));
        }
        Wear::Intact => {}
    }
}

fn defeat_enemy(player: &mut Player, enemy: Enemy, rules: &Rules, log: &mut Vec<String>) {
    log.push(format!("💀 Has derrotado al {}!", enemy.name));
    log.push(format!(
        "✨ Obtienes {} puntos de experiencia.",
        enemy.experience
    ));

    if let Some(level) =
        player.gain_experience(enemy.experience, rules.level_health_bonus, rules.level_stat_bonus)
    {
        debug!(level = level.new_level, "level up");
        log.push(String::new());
        log.push("🎉 ¡SUBISTE DE NIVEL!".to_string());
        log.push(format!("📈 Nivel {} alcanzado!", level.new_level));
        log.push(format!(
            "💪 Todas las estadísticas aumentaron en {} puntos.",
            level.stat_bonus
        ));
        log.push(format!(
            "❤️ Salud máxima aumentó en {} puntos.",
            level.health_bonus
        ));
    }

    if !enemy.loot.is_empty() {
        log.push("🎒 Encuentras los siguientes objetos:".to_string());
        for item in enemy.loot {
            let line = match item.quantity() {
                Some(quantity) => format!("  • {} (x{quantity})", item.name),
                None => format!("  • {}", item.name),
            };
            log.push(line);
            player.inventory.add(item);
        }
    }

    log.push(String::new());
    log.push("✅ El combate ha terminado.".to_string());
}

// ============================================================================
// Items
// ============================================================================

fn handle_use(state: &mut GameState, target: Option<String>) {
    let GameState {
        player: Some(player),
        game_log: log,
        ..
    } = state
    else {
        return;
    };

    let Some(target) = target else {
        log.push("❓ ¿Qué objeto quieres usar?".to_string());
        return;
    };
    let Some(handle) = player.inventory.find_by_name(&target) else {
        log.push(format!("❌ No tienes \"{target}\" en tu inventario."));
        return;
    };
    let Some(item) = player.inventory.get(handle) else {
        return;
    };

    let ItemKind::Consumable {
        effect,
        potency,
        quantity,
    } = item.kind
    else {
        log.push(format!(
            "❌ No puedes usar \"{}\". Tal vez puedas equiparlo.",
            item.name
        ));
        return;
    };
    let name = item.name.clone();

    match effect {
        ConsumableEffect::Heal => {
            let healed = player.health.restore(potency);
            log.push(format!(
                "💊 Usas {name} y recuperas {healed} puntos de salud."
            ));
        }
        ConsumableEffect::Stamina => {
            let restored = player.stamina.restore(potency);
            log.push(format!(
                "⚡ Usas {name} y recuperas {restored} puntos de energía."
            ));
        }
        ConsumableEffect::Buff => {
            log.push(format!("✨ Usas {name}, pero no notas ningún efecto."));
        }
    }

    match quantity {
        Some(count) if count > 1 => {
            if let Some(ItemKind::Consumable { quantity, .. }) =
                player.inventory.get_mut(handle).map(|i| &mut i.kind)
            {
                *quantity = Some(count - 1);
            }
        }
        _ => {
            player.inventory.remove(handle);
        }
    }
}

fn handle_equip(state: &mut GameState, target: Option<String>) {
    let GameState {
        player: Some(player),
        game_log: log,
        ..
    } = state
    else {
        return;
    };

    let Some(target) = target else {
        log.push("❓ ¿Qué objeto quieres equipar?".to_string());
        return;
    };
    let Some(handle) = player.inventory.find_by_name(&target) else {
        log.push(format!("❌ No tienes \"{target}\" en tu inventario."));
        return;
    };
    let Some(item) = player.inventory.get(handle) else {
        return;
    };

    match item.kind {
        ItemKind::Weapon { .. } => {
            log.push(format!("⚔️ Equipas {} como arma.", item.name));
            player.equipment.weapon = Some(handle);
        }
        ItemKind::Armor { .. } => {
            log.push(format!("🛡️ Te equipas {} como armadura.", item.name));
            player.equipment.armor = Some(handle);
        }
        _ => log.push(format!("❌ No puedes equipar \"{}\".", item.name)),
    }
}

// ============================================================================
// Reports
// ============================================================================

fn handle_look(state: &mut GameState) {
    let Some(location) = state.current_location() else {
        report_unknown_location(state);
        return;
    };

    let mut lines = vec![
        format!("📍 {}", location.name),
        location.description.clone(),
    ];
    if !location.exits.is_empty() {
        lines.push(format!("🚪 Salidas: {}", location.exit_list()));
    }
    if let (true, Some(enemy)) = (state.in_combat, state.current_enemy.as_ref()) {
        lines.push(String::new());
        lines.push(format!("⚔️ Estás en combate contra: {}", enemy.name));
        lines.push(format!("💔 Salud del enemigo: {}", enemy.health));
    }

    state.log_all(lines);
}

fn handle_inventory(state: &mut GameState) {
    let Some(player) = state.player.as_ref() else {
        return;
    };

    let mut lines = vec!["🎒 === INVENTARIO ===".to_string()];
    if player.inventory.is_empty() {
        lines.push("Tu inventario está vacío.".to_string());
    }
    for entry in player.inventory.iter() {
        let item = &entry.item;
        let mut line = format!("• {}", item.name);
        if let Some(quantity) = item.quantity().filter(|q| *q > 1) {
            line.push_str(&format!(" (x{quantity})"));
        }
        match &item.kind {
            ItemKind::Weapon { damage, durability } => {
                line.push_str(&format!(" - Daño: {damage}, Durabilidad: {durability}"));
            }
            ItemKind::Armor {
                defense,
                durability,
            } => {
                line.push_str(&format!(" - Defensa: {defense}, Durabilidad: {durability}"));
            }
            _ => {}
        }
        lines.push(line);
    }

    let equipped = |item: Option<&Item>| {
        item.map(|i| i.name.clone())
            .unwrap_or_else(|| "Ninguna".to_string())
    };
    lines.push(String::new());
    lines.push(format!("⚔️ Arma equipada: {}", equipped(player.equipped_weapon())));
    lines.push(format!(
        "🛡️ Armadura equipada: {}",
        equipped(player.equipped_armor())
    ));

    state.log_all(lines);
}

fn handle_stats(state: &mut GameState) {
    let Some(player) = state.player.as_ref() else {
        return;
    };

    let lines = vec![
        "📊 === ESTADÍSTICAS ===".to_string(),
        format!("👤 Nombre: {}", player.name),
        format!("🏷️ Clase: {}", player.archetype),
        format!("📈 Nivel: {}", player.level),
        format!(
            "✨ Experiencia: {}/{}",
            player.experience, player.experience_to_next
        ),
        String::new(),
        format!("❤️ Salud: {}", player.health),
        format!("⚡ Energía: {}", player.stamina),
        String::new(),
        "🎯 === ATRIBUTOS ===".to_string(),
        format!("💪 Fuerza: {}", player.stats.strength),
        format!("🏃 Agilidad: {}", player.stats.agility),
        format!("🧠 Inteligencia: {}", player.stats.intelligence),
        format!("🛡️ Resistencia: {}", player.stats.endurance),
    ];

    state.log_all(lines);
}
