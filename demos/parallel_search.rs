/// Exercises the parallel query/match path, the paginator, and the
/// request-window statistics wrapper against a larger synthetic corpus.
use lexicon_engine::core::engine::Engine;
use lexicon_engine::core::types::Status;
use lexicon_engine::pagination::paginate;
use lexicon_engine::request_queue::RequestQueue;

const VOCAB: &[&str] = &[
    "rust", "search", "index", "query", "engine", "term", "document", "score",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = Engine::new("a the of")?;

    for id in 0..200i64 {
        let text = format!(
            "the {} of the {} document {}",
            VOCAB[(id as usize) % VOCAB.len()],
            VOCAB[(id as usize + 3) % VOCAB.len()],
            id
        );
        let status = if id % 7 == 0 { Status::Irrelevant } else { Status::Actual };
        engine.add(id, &text, status, &[(id % 5) + 1])?;
    }

    let seq = engine.find_top("rust search -index", Status::Actual)?;
    let par = engine.find_top_par("rust search -index", Status::Actual)?;
    assert_eq!(
        seq.iter().map(|h| h.id.as_i64()).collect::<Vec<_>>(),
        par.iter().map(|h| h.id.as_i64()).collect::<Vec<_>>(),
    );
    println!("sequential and parallel find_top agree on {} hits", seq.len());

    let ids: Vec<i64> = engine.document_ids().collect();
    for (page_no, page) in paginate(&ids, 20).enumerate() {
        println!("page {page_no}: {} ids", page.len());
    }

    let mut queue = RequestQueue::new(&engine);
    for term in ["rust", "nonexistent", "search", "also-nonexistent"] {
        queue.add_find_request(term, Status::Actual)?;
    }
    println!("empty-result queries in window: {}", queue.no_result_requests());

    Ok(())
}
