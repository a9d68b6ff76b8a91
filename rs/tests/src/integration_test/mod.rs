mod config_env;
mod rag_engine_initialize;
