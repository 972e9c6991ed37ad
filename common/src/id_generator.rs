use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "Brisk", "Calm", "Daring", "Eager", "Grand", "Keen", "Lucky", "Merry",
    "Patient", "Quiet", "Sharp", "Steady", "Stern", "Sunny", "Tricky", "Witty",
];

const NOUNS: &[&str] = &[
    "Badger", "Crane", "Falcon", "Heron", "Jackal", "Lark", "Marten", "Otter",
    "Puffin", "Raven", "Sable", "Stoat", "Swift", "Tern", "Vole", "Wren",
];

pub fn generate_player_name() -> String {
    let mut rng = rand::rng();
    let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    format!("{} {}", adjective, noun)
}
