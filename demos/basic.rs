//! Examples of using the trie
use multitrie::{Trie, TrieConfig};

fn main() {
    // Create a new trie with character keys
    let mut trie = Trie::new();

    // Several values can live under one key
    trie.insert("the", 1)
        .insert("they", 2)
        .insert("they", 3)
        .insert("their", 4)
        .insert("they're", 5);

    // Exact lookups
    let they: Vec<_> = trie.find("they").values().copied().collect();
    assert_eq!(they, vec![2, 3]);
    assert!(trie.find("th").is_empty());

    // Prefix lookups, chained
    assert_eq!(trie.find_prefix("th").len(), 5);
    let rest: Vec<String> = trie
        .find_prefix("th")
        .find_prefix("ey")
        .keys()
        .map(|key| key.into_iter().collect())
        .collect();
    assert_eq!(rest, vec!["".to_string(), "'re".to_string()]);

    // Deletion by key leaves longer keys alone
    trie.delete("they");
    assert!(trie.find("they").is_empty());
    assert!(trie.contains_key("their"));

    // Any hashable symbol works, not just characters
    let mut paths = Trie::with_config(TrieConfig::new().path_compression(false));
    paths.insert(&["usr", "bin", "env"], "env");
    paths.insert(&["usr", "lib"], "lib");
    assert_eq!(paths.find_prefix(&["usr"]).len(), 2);

    for (key, value) in &trie {
        println!("{} -> {}", key.into_iter().collect::<String>(), value);
    }
}
