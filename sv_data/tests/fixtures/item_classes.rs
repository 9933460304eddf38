// Generated by sv_data from fixtures/base_items.json
// Do not edit this file by hand, rerun `sv_data` instead.

/// Every item class, in declared order, with the names of its base types.
pub static ITEM_CLASSES_TO_NAMES: &[(&str, &[&str])] = &[
  ("Amulet", &[]),
  ("Belt", &[]),
  ("Boots", &[
    "Leather Boots",
  ]),
  ("Bow", &[]),
  ("Body Armour", &[]),
  ("Claw", &[]),
  ("Dagger", &[]),
  ("Gloves", &[]),
  ("Helmet", &[]),
  ("One Hand Axe", &[]),
  ("One Hand Mace", &[]),
  ("One Hand Sword", &[
    "The \"Q\" \\ Blade",
  ]),
  ("Quiver", &[]),
  ("Ring", &[]),
  ("Sceptre", &[]),
  ("Shield", &[]),
  ("Staff", &[
    "Ambiguous",
  ]),
  ("Two Hand Axe", &[]),
  ("Two Hand Mace", &[]),
  ("Two Hand Sword", &[]),
  ("Wand", &[]),
  ("Warstaff", &[
    "Ambiguous",
  ]),
];

/// Every base type name, sorted, with its item class.
pub static ITEM_NAMES_TO_CLASSES: &[(&str, &str)] = &[
  ("Ambiguous", "Staff"),
  ("Leather Boots", "Boots"),
  ("The \"Q\" \\ Blade", "One Hand Sword"),
];
