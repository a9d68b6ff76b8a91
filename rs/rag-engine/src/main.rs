use rag_engine::{
    error::RagEngineError,
    run::{initialize, render},
};

fn main() -> Result<(), RagEngineError> {
    dotenv::dotenv().ok();
    let config = initialize()?;

    let field = std::env::args().nth(1);
    println!("{}", render(&config, field.as_deref())?);
    Ok(())
}
