use multitrie::{PrefixView, Trie};
use std::collections::HashSet;

fn words() -> Trie<char, i32> {
    let mut trie = Trie::new();
    trie.insert("the", 1)
        .insert("they", 2)
        .insert("they", 3)
        .insert("their", 4)
        .insert("they're", 5);
    trie
}

fn sorted_values(view: &PrefixView<'_, char, i32>) -> Vec<i32> {
    let mut values: Vec<i32> = view.values().copied().collect();
    values.sort_unstable();
    values
}

fn string_keys(view: &PrefixView<'_, char, i32>) -> HashSet<String> {
    view.keys().map(|key| key.into_iter().collect()).collect()
}

#[test]
fn test_find_exact_values() {
    let trie = words();

    assert_eq!(sorted_values(&trie.find("they")), vec![2, 3]);
    assert_eq!(trie.find_prefix("th").len(), 5);
}

#[test]
fn test_chained_prefix_views() {
    let trie = words();

    let view = trie.find_prefix("th").find_prefix("ey");
    assert_eq!(sorted_values(&view), vec![2, 3, 5]);

    let expected: HashSet<String> = vec!["".to_string(), "'re".to_string()].into_iter().collect();
    assert_eq!(string_keys(&view), expected);
}

#[test]
fn test_missing_prefix_is_empty() {
    let trie = words();

    assert!(trie.find_prefix("th").find_prefix("at").is_empty());
    assert!(trie.find_prefix("xyz").is_empty());
    assert_eq!(trie.find_prefix("xyz").num_nodes(), 1);
}

#[test]
fn test_delete_keeps_siblings() {
    let mut trie = words();
    trie.delete("they");

    assert!(trie.find("they").is_empty());
    assert_eq!(sorted_values(&trie.find("their")), vec![4]);
    assert_eq!(sorted_values(&trie.find("they're")), vec![5]);
}

#[test]
fn test_keys_of_disjoint_words() {
    let mut trie = Trie::new();
    trie.insert("abc", 1).insert("def", 2);

    let keys: HashSet<Vec<char>> = trie.keys().collect();
    let expected: HashSet<Vec<char>> = vec![vec!['a', 'b', 'c'], vec!['d', 'e', 'f']]
        .into_iter()
        .collect();
    assert_eq!(keys, expected);
}

#[test]
fn test_prefix_view_relative_keys() {
    let mut trie = Trie::new();
    trie.insert("hello", 1).insert("help", 2).insert("world", 3);

    let view = trie.find_prefix("hel");

    let results: HashSet<(String, i32)> = view
        .iter()
        .map(|(key, value)| (key.into_iter().collect(), *value))
        .collect();
    let expected: HashSet<(String, i32)> = vec![("lo".to_string(), 1), ("p".to_string(), 2)]
        .into_iter()
        .collect();
    assert_eq!(results, expected);

    assert!(view.contains_key("lo"));
    assert!(view.contains_key("p"));
    assert!(!view.contains_key("hello"));
    assert!(!view.contains_key(""));
}

#[test]
fn test_prefix_shorter_than_chain() {
    let mut trie = Trie::new();
    trie.insert("abcdef", 1).insert("abcdef", 2);

    // The whole key sits in one compressed chain on the root
    assert_eq!(trie.num_nodes(), 1);

    let view = trie.find_prefix("abc");
    assert_eq!(view.len(), 2);
    assert_eq!(sorted_values(&view.clone().find("def")), vec![1, 2]);
    assert!(view.clone().find("de").is_empty());
    assert_eq!(view.clone().find_prefix("d").len(), 2);
    assert!(view.find_prefix("dx").is_empty());
}

#[test]
fn test_prefix_equal_to_chain() {
    let mut trie = Trie::new();
    trie.insert("abc", 1);

    let view = trie.find_prefix("abc");
    assert_eq!(sorted_values(&view), vec![1]);
    assert!(view.contains_key(""));
}

#[test]
fn test_prefix_longer_than_chain() {
    let mut trie = Trie::new();
    trie.insert("abc", 1);

    // Runs past the end of the chain
    assert!(trie.find_prefix("abcd").is_empty());
    // Diverges half-way through the chain
    assert!(trie.find_prefix("abx").is_empty());
    assert!(trie.find_prefix("abxyz").is_empty());
}

#[test]
fn test_prefix_crossing_nodes_into_chain() {
    let mut trie = Trie::new();
    trie.insert("abcdef", 1).insert("abxyz", 2);

    // `a`, `b` and `c` are real nodes now, "def" and "yz" are chains below them
    let view = trie.find_prefix("abcd");
    assert_eq!(sorted_values(&view), vec![1]);
    assert!(view.contains_key("ef"));

    assert!(trie.find_prefix("abcx").is_empty());
    assert_eq!(trie.find_prefix("ab").len(), 2);
}

#[test]
fn test_prefix_view_nested() {
    let mut trie = Trie::new();
    trie.insert("a", 1).insert("ab", 2).insert("abc", 3).insert("abcd", 4);

    let view_a = trie.find_prefix("a");
    let view_ab = trie.find_prefix("ab");
    let view_abc = trie.find_prefix("abc");

    assert_eq!(view_a.len(), 4);
    assert_eq!(view_ab.len(), 3);
    assert_eq!(view_abc.len(), 2);

    assert!(view_a.contains_key(""));
    assert!(view_a.contains_key("bc"));
    assert!(view_ab.contains_key("c"));
    assert!(!view_abc.contains_key("c"));
    assert!(view_abc.contains_key("d"));
}

#[test]
fn test_prefix_view_equality() {
    let mut trie1 = Trie::new();
    trie1.insert("hello", 1).insert("help", 2);

    let mut trie2 = Trie::new();
    trie2.insert("help", 2).insert("hello", 1).insert("world", 3);

    // Same content under the prefix, different shapes and neighbours
    assert_eq!(trie1.find_prefix("hel"), trie2.find_prefix("hel"));

    let mut trie3 = Trie::new();
    trie3.insert("hello", 99).insert("help", 2);
    assert_ne!(trie1.find_prefix("hel"), trie3.find_prefix("hel"));

    // Views of missing prefixes are all empty, hence equal
    assert_eq!(trie1.find_prefix("z"), trie2.find_prefix("q"));
}

#[test]
fn test_prefix_view_cloning() {
    let trie = words();

    let view = trie.find_prefix("the");
    let view_clone = view.clone();

    assert_eq!(view, view_clone);
    assert_eq!(view.len(), view_clone.len());
    assert!(view_clone.contains_key("ir"));
}

#[test]
fn test_prefix_view_into_iterator() {
    let trie = words();
    let view = trie.find_prefix("they");

    let mut count = 0;
    for (_, value) in &view {
        assert!([2, 3, 5].contains(value));
        count += 1;
    }
    assert_eq!(count, 3);
}

#[test]
fn test_generic_token_keys() {
    let mut routes: Trie<&str, u16> = Trie::new();
    routes
        .insert(&["api", "v1", "users"], 1)
        .insert(&["api", "v1", "groups"], 2)
        .insert(&["api", "v2", "users"], 3)
        .insert(&["static"], 4);

    let v1 = routes.find_prefix(&["api", "v1"]);
    assert_eq!(v1.len(), 2);
    assert!(v1.contains_key(&["groups"]));

    let users: Vec<u16> = routes.find(&["api", "v2", "users"]).values().copied().collect();
    assert_eq!(users, vec![3]);
}
