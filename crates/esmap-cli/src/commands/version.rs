use esmap_core::version::{version_string, VERSION};
use miette::Result;

pub fn run(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::json!({ "name": "esmap", "version": VERSION }));
    } else {
        println!("{}", version_string());
    }
    Ok(())
}
