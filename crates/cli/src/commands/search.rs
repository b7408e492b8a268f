use seeker_kernel::{SearchIndex, StaticCorpusIndex};

/// Run the corpus search locally and print the hits in corpus order.
pub fn run(term: &str) -> anyhow::Result<Vec<String>> {
    let index = StaticCorpusIndex::new();
    let results = index.search(term);

    if results.is_empty() {
        println!("No matches for {:?}", term);
    }
    for (i, hit) in results.iter().enumerate() {
        println!("{:>2}. {}", i + 1, hit);
    }
    Ok(results)
}
