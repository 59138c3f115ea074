/// Typical questions a retrieval-augmented-generation expert model receives
const SAMPLE_QUERIES: [&str; 10] = [
    "What's the best chunking strategy for long technical documentation?",
    "How do I optimize Weaviate for 100M+ vectors?",
    "Should I use hybrid search or pure vector search for my use case?",
    "What are the tradeoffs between different embedding models?",
    "How can I reduce hallucinations in my RAG system?",
    "What's the difference between late interaction and cross-encoding for reranking?",
    "How do I evaluate my RAG system's performance?",
    "What's the best way to handle multi-hop reasoning in RAG?",
    "Should I use query expansion or query decomposition?",
    "How do I implement contextual retrieval with vector databases?",
];

pub(crate) fn sample_queries() -> &'static [&'static str] {
    &SAMPLE_QUERIES
}
