/// Walks through the engine's sequential API: ingest a handful of
/// documents, run a plus/minus query, inspect a match, remove a document,
/// and deduplicate.
use lexicon_engine::core::engine::Engine;
use lexicon_engine::core::types::Status;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = Engine::new("a an the in on at")?;

    engine.add(1, "the cat sat on the mat", Status::Actual, &[4, 5])?;
    engine.add(2, "a dog barked at the cat", Status::Actual, &[3, 3, 4])?;
    engine.add(3, "a cat chased a mouse", Status::Irrelevant, &[1])?;
    engine.add(4, "the cat sat on the mat", Status::Banned, &[])?;

    println!("documents indexed: {}", engine.document_count());

    let hits = engine.find_top("cat -mouse", Status::Actual)?;
    println!("find_top(\"cat -mouse\"):");
    for hit in &hits {
        println!(
            "  id={} relevance={:.6} rating={}",
            hit.id.as_i64(),
            hit.relevance,
            hit.rating
        );
    }

    let (terms, status) = engine.match_document("cat dog -mouse", 2)?;
    println!("match_document(2) -> {:?} (status {:?})", terms, status);

    engine.remove(4);
    println!("after remove(4): {} documents", engine.document_count());

    // Duplicates a dog barked at the cat via a different phrasing.
    engine.add(5, "the cat at a dog barked", Status::Actual, &[2])?;
    let mut removed = Vec::new();
    engine.remove_duplicates(|id| removed.push(id));
    println!("remove_duplicates evicted: {:?}", removed);

    Ok(())
}
