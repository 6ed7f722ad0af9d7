//! Item catalog.
//!
//! Every weapon, armor piece, consumable and piece of junk that can appear in
//! the wasteland, keyed by its stable id. Lookups return fresh copies so
//! durability and stack counts never leak between owners.

use crate::world::{ConsumableEffect, Item};

/// Get a fresh copy of a catalog item by id.
pub fn get_item(id: &str) -> Option<Item> {
    ITEMS.iter().find(|i| i.id == id).cloned()
}

/// Every catalog id, in catalog order.
pub fn item_ids() -> impl Iterator<Item = &'static str> {
    ITEMS.iter().map(|i| i.id.as_str())
}

lazy_static::lazy_static! {
    /// The full item catalog.
    pub static ref ITEMS: Vec<Item> = vec![
        // Weapons
        Item::weapon("knife", "Cuchillo Oxidado", 8)
            .with_durability(75, 100)
            .with_value(15)
            .with_description("Un cuchillo carnicero manchado de sangre seca. Ha visto mejores días, pero aún puede abrir carne."),
        Item::weapon("rifle", "Rifle de Asalto", 25)
            .with_durability(60, 100)
            .with_value(150)
            .with_description("Un rifle militar deteriorado. Sus días de gloria han pasado, pero aún escupe muerte."),
        Item::weapon("scalpel", "Bisturí Médico", 12)
            .with_durability(90, 100)
            .with_value(25)
            .with_description("Un instrumento de precisión. Diseñado para curar, pero igualmente eficaz para cortar."),
        Item::weapon("pipe", "Tubo de Metal", 15)
            .with_durability(80, 100)
            .with_value(20)
            .with_description("Un trozo de tubería pesada. Simple, brutal, efectivo."),

        // Armor
        Item::armor("armor_vest", "Chaleco Antibalas", 15)
            .with_durability(70, 100)
            .with_value(100)
            .with_description("Un chaleco militar desgastado. Los agujeros de bala cuentan una historia que preferirías no conocer."),
        Item::armor("leather_jacket", "Chaqueta de Cuero", 8)
            .with_durability(85, 100)
            .with_value(40)
            .with_description("Una chaqueta de cuero agrietada. No detiene balas, pero puede salvar tu piel de garras y colmillos."),

        // Consumables
        Item::consumable("medkit", "Botiquín Médico", ConsumableEffect::Heal, 40)
            .stacked(1)
            .with_description("Suministros médicos básicos. Las vendas están sucias, pero es mejor que nada."),
        Item::consumable("antibiotics", "Antibióticos", ConsumableEffect::Heal, 25)
            .stacked(3)
            .with_description("Pastillas caducadas encontradas en una farmacia saqueada. Pueden salvar una vida... o causar una infección."),
        Item::consumable("energy_drink", "Bebida Energética", ConsumableEffect::Stamina, 30)
            .stacked(1)
            .with_description("Una lata abollada de líquido azucarado. El sabor es horrible, pero restaura energía."),

        // Misc
        Item::misc("backpack", "Mochila Militar")
            .with_value(50)
            .with_description("Una mochila rasgada pero funcional. Aumenta tu capacidad de carga."),
        Item::misc("flashlight", "Linterna")
            .with_value(25)
            .with_description("Una linterna con batería casi agotada. La luz parpadea débilmente."),
        Item::misc("scrap_metal", "Chatarra")
            .stacked(1)
            .with_value(5)
            .with_description("Pedazos de metal oxidado. Podría ser útil para reparaciones."),
    ];
}
