//! Builds a word → line index over a short text and answers prefix queries.
use multitrie::Trie;

const TEXT: &str = "\
the quick brown fox
jumps over the lazy dog
they say the fox is quicker
than their dog
";

fn main() {
    let mut index: Trie<char, usize> = Trie::new();
    for (line_no, line) in TEXT.lines().enumerate() {
        for word in line.split_whitespace() {
            index.insert(word, line_no + 1);
        }
    }

    println!("{} (word, line) pairs in {} nodes", index.len(), index.num_nodes());

    for query in &["the", "qu", "do", "x"] {
        let view = index.find_prefix(*query);
        let mut hits: Vec<(String, usize)> = view
            .iter()
            .map(|(rest, line)| (format!("{}{}", query, rest.into_iter().collect::<String>()), *line))
            .collect();
        hits.sort();
        println!("{:>4}: {:?}", query, hits);
    }

    // Forget every occurrence on line 2
    index.delete_value(&2);
    let lazy_view = index.find("lazy");
    let lazy: Vec<_> = lazy_view.values().collect();
    assert!(lazy.is_empty());
    assert!(index.validate().is_ok());
}
