use crate::theme;

use anyhow::{Context, Result};
use clap::Parser;
use drizzlegen::Generated;
use drizzlegen_core::config::{GeneratorOptions, OutputPath};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
pub struct GenerateCommand {
    /// Generator options document, as JSON
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output path, overriding the generator block. A path ending in `.ts`
    /// names the schema file; anything else is a directory.
    #[arg(short, long)]
    pub output: Option<String>,
}

impl GenerateCommand {
    pub(crate) fn run(self) -> Result<()> {
        let json = fs::read_to_string(&self.input)
            .with_context(|| format!("failed to read {}", self.input.display()))?;

        let mut options = GeneratorOptions::from_json(&json)
            .with_context(|| format!("failed to parse {}", self.input.display()))?;

        if let Some(output) = self.output {
            options.generator.output = Some(OutputPath::Path(output));
        }

        let generated = drizzlegen::generate(&options)?;

        println!();
        println!("  {}", theme::title("Generate Drizzle Schema"));
        println!();

        for path in write(&generated)? {
            println!("  {} {}", theme::written(), theme::path(&path));
        }

        println!();
        Ok(())
    }
}

/// Writes the schema file and every auxiliary file, creating parent
/// directories as needed. Returns the written paths in order.
pub(crate) fn write(generated: &Generated) -> Result<Vec<PathBuf>> {
    let mut written = vec![];

    write_file(&generated.schema_path, &generated.schema)?;
    written.push(generated.schema_path.clone());

    for file in &generated.files {
        write_file(&file.path, &file.content)?;
        written.push(file.path.clone());
    }

    Ok(written)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote file");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use drizzlegen::GeneratedFile;

    fn make_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("drizzlegen-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = make_dir("write");
        let generated = Generated {
            schema_path: dir.join("drizzle/schema.ts"),
            schema: "export const a = 1;".to_string(),
            files: vec![GeneratedFile {
                path: dir.join("out/nested/types.ts"),
                content: "// generated by drizzlegen\n".to_string(),
            }],
        };

        let written = write(&generated).unwrap();

        assert_eq!(
            written,
            vec![dir.join("drizzle/schema.ts"), dir.join("out/nested/types.ts")]
        );
        assert_eq!(
            fs::read_to_string(dir.join("drizzle/schema.ts")).unwrap(),
            "export const a = 1;"
        );
        assert_eq!(
            fs::read_to_string(dir.join("out/nested/types.ts")).unwrap(),
            "// generated by drizzlegen\n"
        );

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_input_is_reported() {
        let cmd = GenerateCommand {
            input: make_dir("missing").join("options.json"),
            output: None,
        };

        let err = cmd.run().unwrap_err();
        assert!(err.to_string().starts_with("failed to read "));
    }
}
