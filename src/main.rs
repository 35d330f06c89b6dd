use std::path::Path;

use form_editor::{App, FormSpec, Outcome};

const SAMPLE_FORM: &str = include_str!("../demos/task.yaml");

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // The terminal belongs to the form; tracing output goes to stderr only on request
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let inline = args.iter().any(|a| a == "--inline");
    let spec = match args.iter().find(|a| !a.starts_with("--")) {
        Some(path) => FormSpec::load(Path::new(path))?,
        None => FormSpec::from_yaml_str(SAMPLE_FORM)?,
    };
    let app = App::new(spec, inline)?;

    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    let editor = result?;

    match editor.outcome() {
        Outcome::Confirmed => {
            println!("{}", serde_json::to_string_pretty(&editor.values_json())?);
            Ok(())
        }
        _ => std::process::exit(1),
    }
}
