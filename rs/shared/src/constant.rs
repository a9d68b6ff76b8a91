// google cloud project
pub const PROJECT_ID: &str = "proj-id";
pub const LOCATION: &str = "europe-west3";

// gcs storage
pub const GCS_DEFAULT_STORAGE_CLASS: &str = "STANDARD";
pub const GCS_DEFAULT_LOCATION: &str = "US";
pub const GCS_LIST_BUCKETS_MAX_RESULTS: u32 = 50;
pub const GCS_LIST_BLOBS_MAX_RESULTS: u32 = 100;
// used when an upload does not name its own content type
pub const GCS_DEFAULT_CONTENT_TYPE: &str = "application/pdf";

// rag corpus
pub const RAG_DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-004";
// results for a single corpus query
pub const RAG_DEFAULT_TOP_K: u32 = 10;
// results per corpus when searching all corpora
pub const RAG_DEFAULT_SEARCH_TOP_K: u32 = 5;
pub const RAG_DEFAULT_VECTOR_DISTANCE_THRESHOLD: f64 = 0.5;
// page size for listing corpus files
pub const RAG_DEFAULT_PAGE_SIZE: u32 = 50;

// cosine distance range
pub const VECTOR_DISTANCE_MIN: f64 = 0.0;
pub const VECTOR_DISTANCE_MAX: f64 = 2.0;

// agent
pub const AGENT_NAME: &str = "rag_agent";
pub const AGENT_MODEL: &str = "gemini-2.0-flash-exp";
pub const AGENT_OUTPUT_KEY: &str = "rag_response";

// logging
pub const LOG_LEVEL: &str = "INFO";
pub const LOG_FORMAT: &str = "%(asctime)s - %(levelname)s - %(filename)s:%(lineno)d - %(message)s";
