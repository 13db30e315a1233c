// Embedded passphrase wordlist.
//
// Lengths span 3 through 9 characters so every valid min/max window in the
// password spec (3..=9) matches at least a handful of words. All lowercase
// ASCII, no homoglyph-prone entries.

pub(crate) const WORDS: &[&str] = &[
    "act", "air", "ant", "arc", "arm", "art", "ash", "bay", "bee", "bow",
    "cab", "cap", "cat", "cow", "cup", "day", "dew", "dog", "ear", "elm",
    "fig", "fin", "fir", "fox", "gem", "hay", "ice", "ink", "ivy", "jar",
    "jaw", "key", "kit", "lab", "law", "log", "map", "mat", "net", "oak",
    "oar", "owl", "pad", "paw", "pea", "pen", "pie", "pin", "ray", "rib",
    "rug", "saw", "sea", "sky", "sun", "tea", "tin", "toe", "van", "web",
    "acorn", "alarm", "amber", "anchor", "apple", "apron", "arrow", "aspen",
    "badge", "bagel", "bamboo", "banjo", "barn", "basil", "basket", "beach",
    "beacon", "bell", "bench", "berry", "bird", "bison", "blanket", "bloom",
    "boat", "bolt", "book", "boot", "branch", "bread", "breeze", "brick",
    "bridge", "brook", "brush", "bucket", "butter", "cabin", "cable", "camel",
    "candle", "canoe", "canyon", "carpet", "carrot", "castle", "cedar",
    "chair", "chalk", "cherry", "chess", "chime", "cider", "cliff", "clock",
    "cloud", "clover", "coast", "cobalt", "comet", "copper", "coral", "cork",
    "corn", "cotton", "crane", "crater", "creek", "cricket", "crystal",
    "daisy", "dawn", "delta", "desk", "dime", "dome", "door", "dove",
    "dragon", "drum", "dusk", "eagle", "earth", "easel", "echo", "elbow",
    "ember", "engine", "fable", "falcon", "fern", "ferry", "field", "flame",
    "flint", "flute", "foam", "forest", "fossil", "frost", "garden", "garnet",
    "gate", "geyser", "ginger", "glacier", "glade", "globe", "gourd", "grain",
    "granite", "grape", "grove", "harbor", "harp", "hazel", "heron", "hill",
    "honey", "horizon", "iceberg", "iguana", "indigo", "iris", "iron",
    "island", "jade", "jungle", "juniper", "kayak", "kettle", "kiwi", "knoll",
    "lagoon", "lake", "lantern", "larch", "laurel", "lava", "leaf", "ledge",
    "lemon", "lilac", "lily", "lime", "linen", "lunar", "lyric", "magnet",
    "mango", "mantle", "maple", "marble", "meadow", "melon", "mesa", "mint",
    "mirror", "mist", "molar", "moon", "moss", "moth", "mountain", "mural",
    "myrtle", "nectar", "nest", "north", "nutmeg", "oasis", "ocean", "olive",
    "onyx", "opal", "orbit", "orchard", "osprey", "otter", "oxen", "palm",
    "panda", "pansy", "parka", "pasture", "peach", "pearl", "pebble", "pecan",
    "pelican", "peony", "pepper", "petal", "pillow", "pine", "pinecone",
    "planet", "plum", "pond", "poplar", "poppy", "prairie", "prism", "pumpkin",
    "quail", "quartz", "quill", "quilt", "rain", "rainbow", "raven", "reed",
    "reef", "ridge", "river", "robin", "rocket", "rose", "rowboat", "ruby",
    "saddle", "sage", "salmon", "sand", "sapling", "sapphire", "scarf",
    "seed", "shell", "shore", "silver", "sleet", "slope", "snow", "spark",
    "sparrow", "spice", "spruce", "squash", "star", "stone", "storm",
    "stream", "summit", "sunbeam", "sunset", "swan", "thicket", "thistle",
    "thunder", "tiger", "timber", "topaz", "torch", "trail", "tulip",
    "tundra", "turnip", "turtle", "valley", "velvet", "vine", "violet",
    "walnut", "wave", "wheat", "willow", "window", "winter", "wolf", "wren",
    "zebra", "zenith", "zephyr", "zinnia", "blueberry", "butterfly",
    "dandelion", "driftwood", "evergreen", "moonlight", "raspberry",
    "sandstone", "starlight", "waterfall",
];

#[cfg(test)]
mod tests {
    use super::WORDS;

    #[test]
    fn all_lengths_covered() {
        for len in 3..=9 {
            assert!(
                WORDS.iter().any(|w| w.len() == len),
                "no word of length {len}"
            );
        }
    }

    #[test]
    fn words_are_lowercase_ascii() {
        for word in WORDS {
            assert!(word.chars().all(|c| c.is_ascii_lowercase()), "{word}");
            assert!((3..=9).contains(&word.len()), "{word}");
        }
    }
}
