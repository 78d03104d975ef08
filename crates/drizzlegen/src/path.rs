//! Module specifiers between generated files.

use std::path::{Component, Path};

/// The module specifier that imports `target` from the file at `from`.
///
/// Relative paths are resolved against `base` first, so an absolute output
/// path and a working-directory relative module compare correctly. Nothing
/// is resolved on disk. The extension of `target` is dropped and the result
/// always starts with `.`.
pub fn relative_import(base: &Path, from: &Path, target: &Path) -> String {
    let from = normalize(&base.join(from.parent().unwrap_or(Path::new(""))));
    let target = normalize(&base.join(target));

    let common = from
        .iter()
        .zip(&target)
        .take_while(|(lhs, rhs)| lhs == rhs)
        .count();

    let mut parts: Vec<String> = from[common..].iter().map(|_| "..".to_string()).collect();
    parts.extend(target[common..].iter().cloned());

    if let Some(last) = parts.last_mut() {
        if let Some(stem) = Path::new(last.as_str()).file_stem() {
            *last = stem.to_string_lossy().into_owned();
        }
    }

    let specifier = parts.join("/");
    if specifier.starts_with('.') {
        specifier
    } else {
        format!("./{specifier}")
    }
}

/// Components of `path` with `.` and `..` folded away. A root is kept as an
/// empty leading component and `..` never climbs above it.
fn normalize(path: &Path) -> Vec<String> {
    let mut parts: Vec<String> = vec![];

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last().map(String::as_str) {
                Some("") => {}
                Some("..") | None => parts.push("..".to_string()),
                Some(_) => {
                    parts.pop();
                }
            },
            Component::Prefix(prefix) => {
                parts.push(prefix.as_os_str().to_string_lossy().into_owned())
            }
            Component::RootDir => parts.push(String::new()),
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
        }
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "/work/app";

    fn check(from: &str, target: &str, expected: &str) {
        assert_eq!(
            relative_import(Path::new(BASE), Path::new(from), Path::new(target)),
            expected,
            "from {from} to {target}"
        );
    }

    #[test]
    fn same_directory() {
        check("./drizzle/schema.ts", "./drizzle/types.ts", "./types");
        check("schema.ts", "types.ts", "./types");
    }

    #[test]
    fn sibling_directory() {
        check("./drizzle/schema.ts", "./src/types.ts", "../src/types");
        check("out/db/schema.ts", "src/lib/types.d.ts", "../../src/lib/types.d");
    }

    #[test]
    fn nested_directory() {
        check("./schema.ts", "./src/types/index.ts", "./src/types/index");
    }

    #[test]
    fn parent_segments() {
        check("./drizzle/../gen/schema.ts", "./gen/types.ts", "./types");
        check("../out/schema.ts", "./types.ts", "../app/types");
        check("../out/schema.ts", "../shared/types.ts", "../shared/types");
    }

    #[test]
    fn absolute_and_relative_mixed() {
        check("/work/app/drizzle/schema.ts", "./src/types.ts", "../src/types");
        check("./drizzle/schema.ts", "/work/app/src/types.ts", "../src/types");
        check("/srv/out/schema.ts", "./src/types.ts", "../../work/app/src/types");
    }

    #[test]
    fn absolute_paths() {
        check("/app/drizzle/schema.ts", "/app/src/types.ts", "../src/types");
    }

    #[test]
    fn parent_of_root_stays_at_root() {
        check("/../drizzle/schema.ts", "/src/types.ts", "../src/types");
    }
}
