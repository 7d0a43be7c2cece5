//! Base colors of the map item, in base index order starting at 1
//!
//! Each record is `(name, [r, g, b, a], material)`. The position of a record in
//! [`MAP_COLORS`] determines its map color id, see [`super::id_for_position`].

pub(crate) type Record = (&'static str, [u8; 4], &'static str);

pub(crate) const MAP_COLORS: [Record; 61] = [
    ("GRASS", [127, 178, 56, 255], "Grass Block"),
    ("SAND", [247, 233, 163, 255], "Sand"),
    ("WOOL", [199, 199, 199, 255], "Cobweb"),
    ("FIRE", [255, 0, 0, 255], "Redstone Block"),
    ("ICE", [160, 160, 255, 255], "Ice"),
    ("METAL", [167, 167, 167, 255], "Block of Iron"),
    ("PLANT", [0, 124, 0, 255], "Wheat"),
    ("SNOW", [255, 255, 255, 255], "White Wool"),
    ("CLAY", [164, 168, 184, 255], "Clay"),
    ("DIRT", [151, 109, 77, 255], "Dirt"),
    ("STONE", [112, 112, 112, 255], "Stone"),
    ("WATER", [64, 64, 255, 255], "Water"),
    ("WOOD", [143, 119, 72, 255], "Oak Planks"),
    ("QUARTZ", [255, 252, 245, 255], "Quartz Block"),
    ("COLOR_ORANGE", [216, 127, 51, 255], "Orange Wool"),
    ("COLOR_MAGENTA", [178, 76, 216, 255], "Magenta Wool"),
    ("COLOR_LIGHT_BLUE", [102, 153, 216, 255], "Light Blue Wool"),
    ("COLOR_YELLOW", [229, 229, 51, 255], "Yellow Wool"),
    ("COLOR_LIGHT_GREEN", [127, 204, 25, 255], "Lime Wool"),
    ("COLOR_PINK", [242, 127, 165, 255], "Pink Wool"),
    ("COLOR_GRAY", [76, 76, 76, 255], "Gray Wool"),
    ("COLOR_LIGHT_GRAY", [153, 153, 153, 255], "Light Gray Wool"),
    ("COLOR_CYAN", [76, 127, 153, 255], "Cyan Wool"),
    ("COLOR_PURPLE", [127, 63, 178, 255], "Purple Wool"),
    ("COLOR_BLUE", [51, 76, 178, 255], "Blue Wool"),
    ("COLOR_BROWN", [102, 76, 51, 255], "Brown Wool"),
    ("COLOR_GREEN", [102, 127, 51, 255], "Green Wool"),
    ("COLOR_RED", [153, 51, 51, 255], "Red Wool"),
    ("COLOR_BLACK", [25, 25, 25, 255], "Black Wool"),
    ("GOLD", [250, 238, 77, 255], "Block of Gold"),
    ("DIAMOND", [92, 219, 213, 255], "Block of Diamond"),
    ("LAPIS", [74, 128, 255, 255], "Block of Lapis Lazuli"),
    ("EMERALD", [0, 217, 58, 255], "Block of Emerald"),
    ("PODZOL", [129, 86, 49, 255], "Podzol"),
    ("NETHER", [112, 2, 0, 255], "Netherrack"),
    ("TERRACOTTA_WHITE", [209, 177, 161, 255], "White Terracotta"),
    ("TERRACOTTA_ORANGE", [159, 82, 36, 255], "Orange Terracotta"),
    ("TERRACOTTA_MAGENTA", [149, 87, 108, 255], "Magenta Terracotta"),
    ("TERRACOTTA_LIGHT_BLUE", [112, 108, 138, 255], "Light Blue Terracotta"),
    ("TERRACOTTA_YELLOW", [186, 133, 36, 255], "Yellow Terracotta"),
    ("TERRACOTTA_LIGHT_GREEN", [103, 117, 53, 255], "Lime Terracotta"),
    ("TERRACOTTA_PINK", [160, 77, 78, 255], "Pink Terracotta"),
    ("TERRACOTTA_GRAY", [57, 41, 35, 255], "Gray Terracotta"),
    ("TERRACOTTA_LIGHT_GRAY", [135, 107, 98, 255], "Light Gray Terracotta"),
    ("TERRACOTTA_CYAN", [187, 92, 92, 255], "Cyan Terracotta"),
    ("TERRACOTTA_PURPLE", [122, 73, 88, 255], "Purple Terracotta"),
    ("TERRACOTTA_BLUE", [76, 62, 92, 255], "Blue Terracotta"),
    ("TERRACOTTA_BROWN", [76, 50, 35, 255], "Brown Terracotta"),
    ("TERRACOTTA_GREEN", [76, 82, 42, 255], "Green Terracotta"),
    ("TERRACOTTA_RED", [142, 60, 46, 255], "Red Terracotta"),
    ("TERRACOTTA_BLACK", [37, 22, 16, 255], "Black Terracotta"),
    ("CRIMSON_NYLIUM", [189, 48, 49, 255], "Crimson Nylium"),
    ("CRIMSON_STEM", [148, 63, 97, 255], "Crimson Stem"),
    ("CRIMSON_HYPHAE", [92, 25, 29, 255], "Crimson Hyphae"),
    ("WARPED_NYLIUM", [22, 126, 134, 255], "Warped Nylium"),
    ("WARPED_STEM", [58, 142, 140, 255], "Warped Stem"),
    ("WARPED_HYPHAE", [86, 44, 62, 255], "Warped Hyphae"),
    ("WARPED_WART_BLOCK", [20, 180, 133, 255], "Warped Wart Block"),
    ("DEEPSLATE", [100, 100, 100, 255], "Deepslate"),
    ("RAW_IRON", [216, 175, 147, 255], "Block of Raw Iron"),
    ("GLOW_LICHEN", [127, 167, 150, 255], "Glow Lichen"),
];
