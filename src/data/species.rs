//! Species pokedex: per-species base stats, type tags, and catch rate.
//!
//! The table is compile-time immutable; concurrent readers need no
//! synchronization. Keys are normalized species ids (lowercase ascii
//! alphanumerics), so lookups ignore casing and punctuation.

use phf::phf_map;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BaseStats {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

#[derive(Clone, Copy, Debug)]
pub struct SpeciesData {
    pub dex: u16,
    pub name: &'static str,
    pub base_stats: BaseStats,
    pub types: &'static [&'static str],
    /// Catch-rate scalar consumed by the collection layer; unused in battle math.
    pub catch_rate: u8,
}

macro_rules! species {
    ($dex:expr, $name:expr, [$hp:expr, $atk:expr, $def:expr, $spa:expr, $spd:expr, $spe:expr], $types:expr, $catch:expr) => {
        SpeciesData {
            dex: $dex,
            name: $name,
            base_stats: BaseStats {
                hp: $hp,
                atk: $atk,
                def: $def,
                spa: $spa,
                spd: $spd,
                spe: $spe,
            },
            types: $types,
            catch_rate: $catch,
        }
    };
}

pub static POKEDEX: phf::Map<&'static str, SpeciesData> = phf_map! {
    "bulbasaur" => species!(1, "Bulbasaur", [45, 49, 49, 65, 65, 45], &["Grass", "Poison"], 45),
    "ivysaur" => species!(2, "Ivysaur", [60, 62, 63, 80, 80, 60], &["Grass", "Poison"], 45),
    "venusaur" => species!(3, "Venusaur", [80, 82, 83, 100, 100, 80], &["Grass", "Poison"], 45),
    "charmander" => species!(4, "Charmander", [39, 52, 43, 60, 50, 65], &["Fire"], 45),
    "charmeleon" => species!(5, "Charmeleon", [58, 64, 58, 80, 65, 80], &["Fire"], 45),
    "charizard" => species!(6, "Charizard", [78, 84, 78, 109, 85, 100], &["Fire", "Flying"], 45),
    "squirtle" => species!(7, "Squirtle", [44, 48, 65, 50, 64, 43], &["Water"], 45),
    "wartortle" => species!(8, "Wartortle", [59, 63, 80, 65, 80, 58], &["Water"], 45),
    "blastoise" => species!(9, "Blastoise", [79, 83, 100, 85, 105, 78], &["Water"], 45),
    "caterpie" => species!(10, "Caterpie", [45, 30, 35, 20, 20, 45], &["Bug"], 255),
    "metapod" => species!(11, "Metapod", [50, 20, 55, 25, 25, 30], &["Bug"], 120),
    "butterfree" => species!(12, "Butterfree", [60, 45, 50, 90, 80, 70], &["Bug", "Flying"], 45),
    "weedle" => species!(13, "Weedle", [40, 35, 30, 20, 20, 50], &["Bug", "Poison"], 255),
    "kakuna" => species!(14, "Kakuna", [45, 25, 50, 25, 25, 35], &["Bug", "Poison"], 120),
    "beedrill" => species!(15, "Beedrill", [65, 90, 40, 45, 80, 75], &["Bug", "Poison"], 45),
    "pidgey" => species!(16, "Pidgey", [40, 45, 40, 35, 35, 56], &["Normal", "Flying"], 255),
    "pidgeotto" => species!(17, "Pidgeotto", [63, 60, 55, 50, 50, 71], &["Normal", "Flying"], 120),
    "pidgeot" => species!(18, "Pidgeot", [83, 80, 75, 70, 70, 101], &["Normal", "Flying"], 45),
    "rattata" => species!(19, "Rattata", [30, 56, 35, 25, 35, 72], &["Normal"], 255),
    "raticate" => species!(20, "Raticate", [55, 81, 60, 50, 70, 97], &["Normal"], 127),
    "spearow" => species!(21, "Spearow", [40, 60, 30, 31, 31, 70], &["Normal", "Flying"], 255),
    "fearow" => species!(22, "Fearow", [65, 90, 65, 61, 61, 100], &["Normal", "Flying"], 90),
    "ekans" => species!(23, "Ekans", [35, 60, 44, 40, 54, 55], &["Poison"], 255),
    "arbok" => species!(24, "Arbok", [60, 95, 69, 65, 79, 80], &["Poison"], 90),
    "pikachu" => species!(25, "Pikachu", [35, 55, 40, 50, 50, 90], &["Electric"], 190),
    "raichu" => species!(26, "Raichu", [60, 90, 55, 90, 80, 110], &["Electric"], 75),
    "sandshrew" => species!(27, "Sandshrew", [50, 75, 85, 20, 30, 40], &["Ground"], 255),
    "sandslash" => species!(28, "Sandslash", [75, 100, 110, 45, 55, 65], &["Ground"], 90),
    "nidoran" => species!(29, "Nidoran", [55, 47, 52, 40, 40, 41], &["Poison"], 235),
    "nidorina" => species!(30, "Nidorina", [70, 62, 67, 55, 55, 56], &["Poison"], 120),
    "nidoqueen" => species!(31, "Nidoqueen", [90, 92, 87, 75, 85, 76], &["Poison", "Ground"], 45),
    "nidoking" => species!(34, "Nidoking", [81, 102, 77, 85, 75, 85], &["Poison", "Ground"], 45),
    "ninetales" => species!(38, "Ninetales", [73, 76, 75, 81, 100, 100], &["Fire"], 75),
    "jigglypuff" => species!(39, "Jigglypuff", [115, 45, 20, 45, 25, 20], &["Normal", "Fairy"], 170),
    "wigglytuff" => species!(40, "Wigglytuff", [140, 70, 45, 85, 50, 45], &["Normal", "Fairy"], 50),
    "arcanine" => species!(59, "Arcanine", [90, 110, 80, 100, 80, 95], &["Fire"], 75),
    "abra" => species!(63, "Abra", [25, 20, 15, 105, 55, 90], &["Psychic"], 200),
    "kadabra" => species!(64, "Kadabra", [40, 35, 30, 120, 70, 105], &["Psychic"], 100),
    "alakazam" => species!(65, "Alakazam", [55, 50, 45, 135, 95, 120], &["Psychic"], 50),
    "machamp" => species!(68, "Machamp", [90, 130, 80, 65, 85, 55], &["Fighting"], 45),
    "golem" => species!(76, "Golem", [80, 120, 130, 55, 65, 45], &["Rock", "Ground"], 45),
    "rapidash" => species!(78, "Rapidash", [65, 100, 70, 80, 80, 105], &["Fire"], 60),
    "cloyster" => species!(91, "Cloyster", [50, 95, 180, 85, 45, 70], &["Water", "Ice"], 60),
    "gengar" => species!(94, "Gengar", [60, 65, 60, 130, 75, 110], &["Ghost", "Poison"], 45),
    "onix" => species!(95, "Onix", [35, 45, 160, 30, 45, 70], &["Rock", "Ground"], 45),
    "hypno" => species!(97, "Hypno", [85, 73, 70, 73, 115, 67], &["Psychic"], 75),
    "kingler" => species!(99, "Kingler", [55, 130, 115, 50, 50, 75], &["Water"], 60),
    "exeggutor" => species!(103, "Exeggutor", [95, 95, 85, 125, 75, 55], &["Grass", "Psychic"], 45),
    "marowak" => species!(105, "Marowak", [60, 80, 110, 50, 80, 45], &["Ground"], 75),
    "rhydon" => species!(112, "Rhydon", [105, 130, 120, 45, 45, 40], &["Ground", "Rock"], 60),
    "chansey" => species!(113, "Chansey", [250, 5, 5, 35, 105, 50], &["Normal"], 30),
    "kangaskhan" => species!(115, "Kangaskhan", [105, 95, 80, 40, 80, 90], &["Normal"], 45),
    "starmie" => species!(121, "Starmie", [60, 75, 85, 100, 85, 115], &["Water", "Psychic"], 60),
    "mrmime" => species!(122, "Mr. Mime", [40, 45, 65, 100, 120, 90], &["Psychic"], 45),
    "scyther" => species!(123, "Scyther", [70, 110, 80, 55, 80, 105], &["Bug", "Flying"], 45),
    "electabuzz" => species!(125, "Electabuzz", [65, 83, 57, 95, 85, 105], &["Electric"], 45),
    "magmar" => species!(126, "Magmar", [65, 95, 57, 100, 85, 93], &["Fire"], 45),
    "pinsir" => species!(127, "Pinsir", [65, 125, 100, 55, 70, 85], &["Bug"], 45),
    "tauros" => species!(128, "Tauros", [75, 100, 95, 40, 70, 110], &["Normal"], 45),
    "gyarados" => species!(130, "Gyarados", [95, 125, 79, 60, 100, 81], &["Water", "Flying"], 45),
    "lapras" => species!(131, "Lapras", [130, 85, 80, 85, 95, 60], &["Water", "Ice"], 45),
    "ditto" => species!(132, "Ditto", [48, 48, 48, 48, 48, 48], &["Normal"], 35),
    "eevee" => species!(133, "Eevee", [55, 55, 50, 45, 65, 55], &["Normal"], 45),
    "vaporeon" => species!(134, "Vaporeon", [130, 65, 60, 110, 95, 65], &["Water"], 45),
    "jolteon" => species!(135, "Jolteon", [65, 65, 60, 110, 95, 130], &["Electric"], 45),
    "flareon" => species!(136, "Flareon", [65, 130, 60, 95, 110, 65], &["Fire"], 45),
    "omastar" => species!(139, "Omastar", [70, 60, 125, 115, 70, 55], &["Rock", "Water"], 45),
    "kabutops" => species!(141, "Kabutops", [60, 115, 105, 65, 70, 80], &["Rock", "Water"], 45),
    "aerodactyl" => species!(142, "Aerodactyl", [80, 105, 65, 60, 75, 130], &["Rock", "Flying"], 45),
    "snorlax" => species!(143, "Snorlax", [160, 110, 65, 65, 110, 30], &["Normal"], 25),
    "articuno" => species!(144, "Articuno", [90, 85, 100, 95, 125, 85], &["Ice", "Flying"], 3),
    "zapdos" => species!(145, "Zapdos", [90, 90, 85, 125, 90, 100], &["Electric", "Flying"], 3),
    "moltres" => species!(146, "Moltres", [90, 100, 90, 125, 85, 90], &["Fire", "Flying"], 3),
    "dratini" => species!(147, "Dratini", [41, 64, 45, 50, 50, 50], &["Dragon"], 45),
    "dragonair" => species!(148, "Dragonair", [61, 84, 65, 70, 70, 70], &["Dragon"], 45),
    "dragonite" => species!(149, "Dragonite", [91, 134, 95, 100, 100, 80], &["Dragon", "Flying"], 45),
    "mewtwo" => species!(150, "Mewtwo", [106, 110, 90, 154, 90, 130], &["Psychic"], 3),
    "mew" => species!(151, "Mew", [100, 100, 100, 100, 100, 100], &["Psychic"], 45),
};

pub fn normalize_id(name: &str) -> String {
    name.to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

pub fn get(species: &str) -> Option<&'static SpeciesData> {
    POKEDEX.get(normalize_id(species).as_str())
}

pub fn get_by_dex(dex: u16) -> Option<&'static SpeciesData> {
    POKEDEX.values().find(|data| data.dex == dex)
}
