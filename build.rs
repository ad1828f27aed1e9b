use std::error::Error;

// Emits VERGEN_GIT_SHA, logged at debug level on startup.
fn main() -> Result<(), Box<dyn Error>> {
    let git = vergen_gitcl::GitclBuilder::default().sha(true).build()?;
    vergen_gitcl::Emitter::default()
        .add_instructions(&git)?
        .emit()?;
    Ok(())
}
